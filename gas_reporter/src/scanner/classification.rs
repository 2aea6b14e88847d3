//!
//! The transaction classification.
//!

use crate::chain::Receipt;
use crate::chain::Transaction;
use crate::client::Client;
use crate::client::Error;

///
/// The transaction kinds a scan is interested in.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Contract creations only. Transactions of calls are not fetched.
    Creations,
    /// Contract creations and calls.
    All,
}

///
/// The transaction classification.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The transaction or its receipt is not available, or the call has no target.
    Missing,
    /// The transaction has been reverted.
    Reverted,
    /// A successful transaction outside the requested scope.
    Ignored,
    /// A successful contract call.
    Call {
        /// The transaction.
        transaction: Transaction,
        /// The receipt.
        receipt: Receipt,
        /// The call target.
        to: web3::types::Address,
    },
    /// A successful contract creation.
    Creation {
        /// The transaction.
        transaction: Transaction,
        /// The receipt.
        receipt: Receipt,
        /// The created contract address.
        address: web3::types::Address,
    },
}

impl Classification {
    ///
    /// Fetches the transaction and its receipt and classifies them.
    ///
    /// Only transport failures are errors. Unavailable data yields `Missing`.
    /// With [`Scope::Creations`], the transaction is fetched only if the receipt has a
    /// created contract address.
    ///
    pub fn fetch<C>(client: &C, hash: &web3::types::H256, scope: Scope) -> Result<Self, Error>
    where
        C: Client,
    {
        let receipt = match client.receipt(hash)? {
            Some(receipt) => receipt,
            None => {
                log::debug!("Receipt of transaction {hash:?} is not available, skipping");
                return Ok(Self::Missing);
            }
        };
        if receipt.is_reverted() {
            return Ok(Self::Reverted);
        }
        if scope == Scope::Creations && receipt.contract_address.is_none() {
            return Ok(Self::Ignored);
        }

        let transaction = match client.transaction(hash)? {
            Some(transaction) => transaction,
            None => {
                log::debug!("Transaction {hash:?} is not available, skipping");
                return Ok(Self::Missing);
            }
        };

        Ok(match (receipt.contract_address, transaction.to) {
            (Some(address), _) => Self::Creation {
                transaction,
                receipt,
                address,
            },
            (None, Some(to)) => Self::Call {
                transaction,
                receipt,
                to,
            },
            (None, None) => Self::Missing,
        })
    }
}
