//!
//! The chain data model, as seen by the attribution engine.
//!

pub mod block;
pub mod receipt;
pub mod transaction;

pub use self::block::Block;
pub use self::receipt::Receipt;
pub use self::transaction::Transaction;

///
/// Converts a node `U256` quantity into `u64`, rejecting values that do not fit.
///
pub fn u256_to_u64(value: web3::types::U256) -> anyhow::Result<u64> {
    if value > web3::types::U256::from(u64::MAX) {
        anyhow::bail!("Quantity {value} does not fit into 64 bits");
    }
    Ok(value.low_u64())
}
