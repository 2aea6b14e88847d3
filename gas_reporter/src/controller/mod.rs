//!
//! The run controller.
//!

#[cfg(test)]
mod tests;

use crate::attribution;
use crate::client::Client;
use crate::client::Error;
use crate::records::Records;
use crate::scanner::BlockScanner;
use crate::scanner::Classification;
use crate::scanner::Scope;

///
/// The attribution outcome of a single test.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Attribution {
    /// The gas used by all blocks of the method range, including unattributed and
    /// reverted transactions.
    pub gas_used: u64,
    /// The number of attributed deployments.
    pub deployments: usize,
    /// The number of attributed calls.
    pub calls: usize,
}

///
/// The run controller.
///
/// Owns the records of one run and scans the blocks produced by each passed test.
/// The deployment range of a test starts at the chain head when the test starts, so that
/// contracts deployed by its setup hooks are included. The method range starts after the
/// hooks, so that only the test body is charged.
///
#[derive(Debug)]
pub struct RunController<C>
where
    C: Client,
{
    /// The node client.
    client: C,
    /// The run records.
    records: Records,
    /// The first block of the next deployment scan.
    deploy_cursor: Option<u64>,
    /// The first block of the next method scan.
    method_cursor: Option<u64>,
}

impl<C> RunController<C>
where
    C: Client,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(client: C, records: Records) -> Self {
        Self {
            client,
            records,
            deploy_cursor: None,
            method_cursor: None,
        }
    }

    ///
    /// Marks the test start, before its setup hooks run.
    ///
    /// Blocks already scanned for deployments are never scanned again.
    ///
    pub fn on_test_start(&mut self) -> Result<(), Error> {
        let head = self.client.block_number()?;
        self.deploy_cursor = Some(match self.deploy_cursor {
            Some(cursor) if cursor > head => cursor,
            _ => head,
        });
        Ok(())
    }

    ///
    /// Marks the end of the setup hooks, right before the test body.
    ///
    pub fn on_hooks_end(&mut self) -> Result<(), Error> {
        self.method_cursor = Some(self.client.block_number()? + 1);
        Ok(())
    }

    ///
    /// Attributes the blocks produced by a passed test.
    ///
    pub fn on_test_pass(&mut self) -> Result<Attribution, Error> {
        let mut attribution = Attribution::default();
        if let Some(cursor) = self.deploy_cursor {
            let (next, deployments) = self.scan_deployments(cursor)?;
            self.deploy_cursor = Some(next);
            attribution.deployments = deployments;
        }
        if let Some(cursor) = self.method_cursor {
            let (next, gas_used, calls) = self.scan_methods(cursor)?;
            self.method_cursor = Some(next);
            attribution.gas_used = gas_used;
            attribution.calls = calls;
        }
        log::debug!(
            "Test attributed: {} gas, {} deployments, {} calls",
            attribution.gas_used,
            attribution.deployments,
            attribution.calls,
        );
        Ok(attribution)
    }

    ///
    /// Marks a failed test. Failed tests are not charged.
    ///
    pub fn on_test_fail(&mut self) {
        log::debug!("Test failed, attribution skipped");
    }

    ///
    /// Attributes all blocks from `start` to the chain head as a single test.
    ///
    pub fn attribute_range(&mut self, start: u64) -> Result<Attribution, Error> {
        self.deploy_cursor = Some(start);
        self.method_cursor = Some(start);
        self.on_test_pass()
    }

    ///
    /// The run records.
    ///
    pub fn records(&self) -> &Records {
        &self.records
    }

    ///
    /// Ends the run and hands over the records.
    ///
    pub fn finish(self) -> Records {
        self.records
    }

    ///
    /// Attributes the creations in `[start, head]`.
    ///
    /// Returns the next block number and the number of attributed deployments.
    ///
    fn scan_deployments(&mut self, start: u64) -> Result<(u64, usize), Error> {
        let client = &self.client;
        let records = &mut self.records;

        let mut deployments = 0;
        let scan = BlockScanner::new(client).scan(start, |block| {
            for hash in block.transactions.iter() {
                if let Classification::Creation {
                    transaction,
                    receipt,
                    address,
                } = Classification::fetch(client, hash, Scope::Creations)?
                {
                    if attribution::deployment::attribute(
                        client,
                        records,
                        transaction.input.as_slice(),
                        &address,
                        receipt.gas_used,
                    )?
                    .is_some()
                    {
                        deployments += 1;
                    }
                }
            }
            Ok(())
        })?;
        Ok((scan.next, deployments))
    }

    ///
    /// Attributes the calls in `[start, head]`.
    ///
    /// Returns the next block number, the gas used by all available blocks, and the number
    /// of attributed calls.
    ///
    fn scan_methods(&mut self, start: u64) -> Result<(u64, u64, usize), Error> {
        let client = &self.client;
        let records = &mut self.records;

        let mut calls = 0;
        let scan = BlockScanner::new(client).scan(start, |block| {
            for hash in block.transactions.iter() {
                if let Classification::Call {
                    transaction,
                    receipt,
                    to,
                } = Classification::fetch(client, hash, Scope::All)?
                {
                    if attribution::method::attribute(
                        client,
                        records,
                        &to,
                        transaction.input.as_slice(),
                        receipt.gas_used,
                    )?
                    .is_some()
                    {
                        calls += 1;
                    }
                }
            }
            Ok(())
        })?;
        Ok((scan.next, scan.gas_used, calls))
    }
}
