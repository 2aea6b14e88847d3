//!
//! The block range scanner.
//!

pub mod classification;

pub use self::classification::Classification;
pub use self::classification::Scope;

use crate::chain::Block;
use crate::client::Client;
use crate::client::Error;

///
/// The block range scan outcome.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scan {
    /// The first block number after the scanned range.
    pub next: u64,
    /// The gas used by all available blocks in the range, reverted transactions included.
    pub gas_used: u64,
    /// The number of blocks the node returned.
    pub available: usize,
}

///
/// The block range scanner.
///
#[derive(Debug)]
pub struct BlockScanner<'a, C>
where
    C: Client,
{
    /// The node client.
    client: &'a C,
}

impl<'a, C> BlockScanner<'a, C>
where
    C: Client,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    ///
    /// Visits every available block in `[start, head]` in ascending order.
    ///
    /// The head is read once, before the first block. Blocks the node does not return are
    /// skipped without waiting.
    ///
    pub fn scan<F>(&self, start: u64, mut visit: F) -> Result<Scan, Error>
    where
        F: FnMut(&Block) -> Result<(), Error>,
    {
        let head = self.client.block_number()?;

        let mut scan = Scan {
            next: start,
            ..Scan::default()
        };
        while scan.next <= head {
            match self.client.block(scan.next)? {
                Some(block) => {
                    scan.gas_used += block.gas_used;
                    scan.available += 1;
                    visit(&block)?;
                }
                None => log::debug!("Block {} is not available, skipping", scan.next),
            }
            scan.next += 1;
        }
        Ok(scan)
    }
}
