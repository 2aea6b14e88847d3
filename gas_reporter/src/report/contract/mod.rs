//!
//! The contract gas report.
//!

pub mod deployment;
pub mod function;

use std::collections::BTreeMap;

use self::deployment::DeploymentReport;
use self::function::FunctionReport;

///
/// The contract gas report.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ContractReport {
    /// The contract name.
    pub contract: String,
    /// The deployment measurements, if the contract was deployed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment: Option<DeploymentReport>,
    /// The per-function measurements, keyed by the canonical signature.
    pub functions: BTreeMap<String, FunctionReport>,
}

impl ContractReport {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(contract: String) -> Self {
        Self {
            contract,
            deployment: None,
            functions: BTreeMap::new(),
        }
    }
}
