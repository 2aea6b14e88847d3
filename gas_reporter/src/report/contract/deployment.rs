//!
//! The deployment gas report.
//!

use crate::records::deployment::DeploymentRecord;
use crate::report::statistics::Statistics;

///
/// The deployment gas report.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DeploymentReport {
    /// The creation bytecode size in bytes, without constructor arguments.
    pub size: usize,
    /// The gas statistics.
    #[serde(flatten)]
    pub statistics: Statistics,
}

impl DeploymentReport {
    ///
    /// Builds the report of a deployment with at least one sample.
    ///
    pub fn from_record(record: &DeploymentRecord) -> Option<Self> {
        let statistics = Statistics::from_samples(record.gas_samples.as_slice())?;
        Some(Self {
            size: record.template.len(),
            statistics,
        })
    }
}
