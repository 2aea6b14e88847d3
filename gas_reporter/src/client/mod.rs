//!
//! The synchronous blockchain node client.
//!

pub mod error;
pub mod http;
pub mod mock;

pub use self::error::Error;
pub use self::http::HttpClient;
pub use self::mock::MockClient;

use crate::chain::Block;
use crate::chain::Receipt;
use crate::chain::Transaction;

///
/// The synchronous blockchain node client.
///
/// Every call blocks until the node answers. A `None` result means the node does not
/// have the requested object yet.
///
pub trait Client {
    ///
    /// Returns the current chain head block number.
    ///
    fn block_number(&self) -> Result<u64, Error>;

    ///
    /// Returns the block with transaction hashes only.
    ///
    fn block(&self, number: u64) -> Result<Option<Block>, Error>;

    ///
    /// Returns the transaction by its hash.
    ///
    fn transaction(&self, hash: &web3::types::H256) -> Result<Option<Transaction>, Error>;

    ///
    /// Returns the transaction receipt by the transaction hash.
    ///
    fn receipt(&self, hash: &web3::types::H256) -> Result<Option<Receipt>, Error>;

    ///
    /// Returns the runtime code stored at the address at the chain head.
    ///
    fn code(&self, address: &web3::types::Address) -> Result<Vec<u8>, Error>;
}

impl<C> Client for &C
where
    C: Client + ?Sized,
{
    fn block_number(&self) -> Result<u64, Error> {
        (**self).block_number()
    }

    fn block(&self, number: u64) -> Result<Option<Block>, Error> {
        (**self).block(number)
    }

    fn transaction(&self, hash: &web3::types::H256) -> Result<Option<Transaction>, Error> {
        (**self).transaction(hash)
    }

    fn receipt(&self, hash: &web3::types::H256) -> Result<Option<Receipt>, Error> {
        (**self).receipt(hash)
    }

    fn code(&self, address: &web3::types::Address) -> Result<Vec<u8>, Error> {
        (**self).code(address)
    }
}
