//!
//! The transaction.
//!

///
/// The transaction.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// The transaction hash.
    pub hash: web3::types::H256,
    /// The call target. `None` for contract creations.
    pub to: Option<web3::types::Address>,
    /// The calldata, or the creation bytecode with constructor arguments.
    pub input: Vec<u8>,
}

impl Transaction {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        hash: web3::types::H256,
        to: Option<web3::types::Address>,
        input: Vec<u8>,
    ) -> Self {
        Self { hash, to, input }
    }
}

impl From<web3::types::Transaction> for Transaction {
    fn from(transaction: web3::types::Transaction) -> Self {
        Self::new(transaction.hash, transaction.to, transaction.input.0)
    }
}
