//!
//! The gas reporter library.
//!
//! Attributes the gas used by a smart contract test run to the deployments and methods of
//! the compiled contracts, by scanning the blocks each test produces on a JSON-RPC node.
//!

pub mod artifacts;
pub mod attribution;
pub mod chain;
pub mod client;
pub mod config;
pub mod controller;
pub mod records;
pub mod report;
pub mod scanner;
pub mod session;

pub use crate::artifacts::template::BytecodeTemplate;
pub use crate::artifacts::Artifact;
pub use crate::chain::Block;
pub use crate::chain::Receipt;
pub use crate::chain::Transaction;
pub use crate::client::mock::MockTransaction;
pub use crate::client::Client;
pub use crate::client::Error as ClientError;
pub use crate::client::HttpClient;
pub use crate::client::MockClient;
pub use crate::config::Config;
pub use crate::controller::Attribution;
pub use crate::controller::RunController;
pub use crate::records::code_hash_index::CodeHashIndex;
pub use crate::records::code_hash_index::Fingerprint;
pub use crate::records::method_key::MethodKey;
pub use crate::records::selector::Selector;
pub use crate::records::Records;
pub use crate::report::GasReport;
pub use crate::scanner::BlockScanner;
pub use crate::scanner::Classification;
pub use crate::session::console::Console;
pub use crate::session::event::Event;
pub use crate::session::event::EventReader;
pub use crate::session::Session;

/// The successful exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failing exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;
