//!
//! The mined block.
//!

///
/// The mined block.
///
/// Only the fields the scanner needs are kept.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The block number.
    pub number: u64,
    /// The total gas used by all transactions in the block, reverted ones included.
    pub gas_used: u64,
    /// The transaction hashes, in execution order.
    pub transactions: Vec<web3::types::H256>,
}

impl Block {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(number: u64, gas_used: u64, transactions: Vec<web3::types::H256>) -> Self {
        Self {
            number,
            gas_used,
            transactions,
        }
    }
}

impl TryFrom<web3::types::Block<web3::types::H256>> for Block {
    type Error = anyhow::Error;

    fn try_from(block: web3::types::Block<web3::types::H256>) -> Result<Self, Self::Error> {
        let number = block
            .number
            .ok_or_else(|| anyhow::anyhow!("Block {:?} is pending", block.hash))?
            .as_u64();
        let gas_used = super::u256_to_u64(block.gas_used)?;
        Ok(Self::new(number, gas_used, block.transactions))
    }
}
