//!
//! The in-memory node client.
//!
//! Mines one block per `mine` call and answers lookups from memory. Used for dry runs
//! and for exercising the attribution engine without a node.
//!

use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::HashSet;

use crate::chain::Block;
use crate::chain::Receipt;
use crate::chain::Transaction;
use crate::client::Client;
use crate::client::Error;

///
/// The transaction to be mined by the in-memory node.
///
#[derive(Debug, Clone)]
pub enum MockTransaction {
    /// A contract creation.
    Create {
        /// The creation bytecode with constructor arguments.
        input: Vec<u8>,
        /// The runtime code stored at the new address on success.
        runtime_code: Vec<u8>,
        /// The gas used.
        gas_used: u64,
        /// Whether the creation succeeds.
        success: bool,
    },
    /// A contract call.
    Call {
        /// The call target.
        to: web3::types::Address,
        /// The calldata.
        input: Vec<u8>,
        /// The gas used.
        gas_used: u64,
        /// Whether the call succeeds.
        success: bool,
    },
}

///
/// The in-memory chain state.
///
#[derive(Debug, Default)]
struct Chain {
    /// The mined blocks. The index is the block number.
    blocks: Vec<Block>,
    /// The blocks the node pretends not to have.
    hidden_blocks: HashSet<u64>,
    /// The transactions by hash.
    transactions: HashMap<web3::types::H256, Transaction>,
    /// The transactions the node pretends not to have.
    hidden_transactions: HashSet<web3::types::H256>,
    /// The receipts by transaction hash.
    receipts: HashMap<web3::types::H256, Receipt>,
    /// The receipts the node pretends not to have.
    hidden_receipts: HashSet<web3::types::H256>,
    /// The runtime code by address.
    code: HashMap<web3::types::Address, Vec<u8>>,
    /// The transaction and address counter.
    nonce: u64,
}

///
/// The in-memory node client.
///
#[derive(Debug)]
pub struct MockClient {
    /// The chain state.
    chain: RefCell<Chain>,
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClient {
    /// The first address assigned to created contracts.
    const FIRST_CONTRACT_ADDRESS: u64 = 0x1000;

    ///
    /// Creates a chain with an empty genesis block.
    ///
    pub fn new() -> Self {
        let chain = Chain {
            blocks: vec![Block::new(0, 0, vec![])],
            ..Chain::default()
        };
        Self {
            chain: RefCell::new(chain),
        }
    }

    ///
    /// Mines a block with the specified transactions and returns the transaction hashes.
    ///
    pub fn mine(&self, transactions: Vec<MockTransaction>) -> Vec<web3::types::H256> {
        let mut chain = self.chain.borrow_mut();
        let number = chain.blocks.len() as u64;

        let mut hashes = Vec::with_capacity(transactions.len());
        let mut block_gas_used = 0;
        for transaction in transactions.into_iter() {
            chain.nonce += 1;
            let hash = web3::types::H256::from_low_u64_be(chain.nonce);
            let (transaction, receipt) = match transaction {
                MockTransaction::Create {
                    input,
                    runtime_code,
                    gas_used,
                    success,
                } => {
                    let address = web3::types::Address::from_low_u64_be(
                        Self::FIRST_CONTRACT_ADDRESS + chain.nonce,
                    );
                    if success {
                        chain.code.insert(address, runtime_code);
                    }
                    (
                        Transaction::new(hash, None, input),
                        Receipt::new(Some(success), gas_used, Some(address)),
                    )
                }
                MockTransaction::Call {
                    to,
                    input,
                    gas_used,
                    success,
                } => (
                    Transaction::new(hash, Some(to), input),
                    Receipt::new(Some(success), gas_used, None),
                ),
            };
            block_gas_used += receipt.gas_used;
            chain.transactions.insert(hash, transaction);
            chain.receipts.insert(hash, receipt);
            hashes.push(hash);
        }

        chain
            .blocks
            .push(Block::new(number, block_gas_used, hashes.clone()));
        hashes
    }

    ///
    /// Mines a successful contract creation and returns the new contract address.
    ///
    pub fn deploy(
        &self,
        input: Vec<u8>,
        runtime_code: Vec<u8>,
        gas_used: u64,
    ) -> web3::types::Address {
        let hashes = self.mine(vec![MockTransaction::Create {
            input,
            runtime_code,
            gas_used,
            success: true,
        }]);
        self.created_address(&hashes[0])
    }

    ///
    /// Mines a successful contract call.
    ///
    pub fn call(
        &self,
        to: web3::types::Address,
        input: Vec<u8>,
        gas_used: u64,
    ) -> web3::types::H256 {
        self.mine(vec![MockTransaction::Call {
            to,
            input,
            gas_used,
            success: true,
        }])[0]
    }

    ///
    /// Mines a reverted contract call.
    ///
    pub fn call_reverted(
        &self,
        to: web3::types::Address,
        input: Vec<u8>,
        gas_used: u64,
    ) -> web3::types::H256 {
        self.mine(vec![MockTransaction::Call {
            to,
            input,
            gas_used,
            success: false,
        }])[0]
    }

    ///
    /// Returns the address created by the transaction, if any.
    ///
    pub fn created_address(&self, hash: &web3::types::H256) -> web3::types::Address {
        self.chain
            .borrow()
            .receipts
            .get(hash)
            .and_then(|receipt| receipt.contract_address)
            .unwrap_or_default()
    }

    ///
    /// Makes the node answer `None` for the block.
    ///
    pub fn hide_block(&self, number: u64) {
        self.chain.borrow_mut().hidden_blocks.insert(number);
    }

    ///
    /// Makes the node answer `None` for the transaction, keeping its receipt.
    ///
    pub fn hide_transaction(&self, hash: web3::types::H256) {
        self.chain.borrow_mut().hidden_transactions.insert(hash);
    }

    ///
    /// Makes the node answer `None` for the transaction receipt.
    ///
    pub fn hide_receipt(&self, hash: web3::types::H256) {
        self.chain.borrow_mut().hidden_receipts.insert(hash);
    }

    ///
    /// Overrides the runtime code at the address.
    ///
    pub fn set_code(&self, address: web3::types::Address, code: Vec<u8>) {
        self.chain.borrow_mut().code.insert(address, code);
    }
}

impl Client for MockClient {
    fn block_number(&self) -> Result<u64, Error> {
        Ok(self.chain.borrow().blocks.len() as u64 - 1)
    }

    fn block(&self, number: u64) -> Result<Option<Block>, Error> {
        let chain = self.chain.borrow();
        if chain.hidden_blocks.contains(&number) {
            return Ok(None);
        }
        Ok(chain.blocks.get(number as usize).cloned())
    }

    fn transaction(&self, hash: &web3::types::H256) -> Result<Option<Transaction>, Error> {
        let chain = self.chain.borrow();
        if chain.hidden_transactions.contains(hash) {
            return Ok(None);
        }
        Ok(chain.transactions.get(hash).cloned())
    }

    fn receipt(&self, hash: &web3::types::H256) -> Result<Option<Receipt>, Error> {
        let chain = self.chain.borrow();
        if chain.hidden_receipts.contains(hash) {
            return Ok(None);
        }
        Ok(chain.receipts.get(hash).cloned())
    }

    fn code(&self, address: &web3::types::Address) -> Result<Vec<u8>, Error> {
        Ok(self
            .chain
            .borrow()
            .code
            .get(address)
            .cloned()
            .unwrap_or_default())
    }
}
