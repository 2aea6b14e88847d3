//!
//! The transaction receipt.
//!

///
/// The transaction receipt.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// The execution status. `None` on nodes predating the Byzantium status field.
    pub status: Option<bool>,
    /// The gas used by this transaction alone.
    pub gas_used: u64,
    /// The created contract address. Only present for contract creations.
    pub contract_address: Option<web3::types::Address>,
}

impl Receipt {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        status: Option<bool>,
        gas_used: u64,
        contract_address: Option<web3::types::Address>,
    ) -> Self {
        Self {
            status,
            gas_used,
            contract_address,
        }
    }

    ///
    /// Whether the transaction has been reverted.
    ///
    /// A missing status is not a failure.
    ///
    pub fn is_reverted(&self) -> bool {
        self.status == Some(false)
    }
}

impl TryFrom<web3::types::TransactionReceipt> for Receipt {
    type Error = anyhow::Error;

    fn try_from(receipt: web3::types::TransactionReceipt) -> Result<Self, Self::Error> {
        let gas_used = receipt.gas_used.ok_or_else(|| {
            anyhow::anyhow!(
                "Receipt of transaction {:?} has no gas used",
                receipt.transaction_hash
            )
        })?;
        Ok(Self::new(
            receipt.status.map(|status| !status.is_zero()),
            super::u256_to_u64(gas_used)?,
            receipt.contract_address,
        ))
    }
}
