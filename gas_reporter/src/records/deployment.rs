//!
//! The deployment gas record.
//!

use crate::artifacts::template::BytecodeTemplate;

///
/// The deployment gas record.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRecord {
    /// The contract name.
    pub contract: String,
    /// The creation bytecode template.
    pub template: BytecodeTemplate,
    /// The gas used by each attributed deployment, in chain order.
    pub gas_samples: Vec<u64>,
}

impl DeploymentRecord {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(contract: String, template: BytecodeTemplate) -> Self {
        Self {
            contract,
            template,
            gas_samples: Vec::new(),
        }
    }

    ///
    /// Records an attributed deployment.
    ///
    pub fn record(&mut self, gas_used: u64) {
        self.gas_samples.push(gas_used);
    }
}
