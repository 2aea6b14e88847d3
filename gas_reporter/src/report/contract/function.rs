//!
//! The function gas report.
//!

use crate::records::method::MethodRecord;
use crate::report::statistics::Statistics;

///
/// The function gas report.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FunctionReport {
    /// The method name without parameters.
    pub name: String,
    /// The selector hex string.
    pub selector: String,
    /// The number of calls.
    pub calls: usize,
    /// The gas statistics.
    #[serde(flatten)]
    pub statistics: Statistics,
}

impl FunctionReport {
    ///
    /// Builds the report of a method with at least one sample.
    ///
    pub fn from_record(record: &MethodRecord) -> Option<Self> {
        let statistics = Statistics::from_samples(record.gas_samples.as_slice())?;
        Some(Self {
            name: record.name().to_owned(),
            selector: record.key.selector.to_string(),
            calls: record.calls,
            statistics,
        })
    }
}
