//!
//! The gas report.
//!

pub mod contract;
pub mod statistics;

use std::collections::BTreeMap;
use std::path::Path;

use colored::Colorize;

use crate::records::Records;

use self::contract::deployment::DeploymentReport;
use self::contract::function::FunctionReport;
use self::contract::ContractReport;

///
/// The gas report, in a shape close to the Foundry gas report.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct GasReport {
    /// The measured contracts, sorted by name.
    pub contracts: Vec<ContractReport>,
    /// The number of runtime code fingerprints bound during the run.
    pub code_hashes: usize,
}

impl GasReport {
    ///
    /// Whether nothing was measured.
    ///
    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    ///
    /// Writes the JSON report to a file.
    ///
    pub fn write_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self).expect("Always valid");
        std::fs::write(path, content)
            .map_err(|error| anyhow::anyhow!("Gas report file {path:?} writing: {error}"))?;
        Ok(())
    }
}

impl From<&Records> for GasReport {
    fn from(records: &Records) -> Self {
        let mut contracts: BTreeMap<&str, ContractReport> = BTreeMap::new();

        for record in records.deployments().iter() {
            if let Some(deployment) = DeploymentReport::from_record(record) {
                contracts
                    .entry(record.contract.as_str())
                    .or_insert_with(|| ContractReport::new(record.contract.clone()))
                    .deployment = Some(deployment);
            }
        }
        for record in records.methods().iter() {
            if let Some(function) = FunctionReport::from_record(record) {
                contracts
                    .entry(record.key.contract.as_str())
                    .or_insert_with(|| ContractReport::new(record.key.contract.clone()))
                    .functions
                    .insert(record.signature.clone(), function);
            }
        }

        Self {
            contracts: contracts.into_values().collect(),
            code_hashes: records.code_hash_index().len(),
        }
    }
}

impl std::fmt::Display for GasReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "╔════════════════════════════╡ GAS REPORT ╞═════════════════════════════╗"
        )?;
        writeln!(
            f,
            "║ {:32} {:>8} {:>9} {:>9} {:>9} ║",
            "CONTRACT / METHOD".bright_white(),
            "CALLS".bright_white(),
            "MIN".bright_white(),
            "MAX".bright_white(),
            "AVG".bright_white(),
        )?;
        writeln!(
            f,
            "╟────────────────────────────────────────────────────────────────────────╢"
        )?;

        if self.contracts.is_empty() {
            writeln!(f, "║ {:70} ║", "No gas measured".bright_black())?;
        }
        for contract in self.contracts.iter() {
            writeln!(f, "║ {:70} ║", contract.contract.bright_cyan())?;
            for (signature, function) in contract.functions.iter() {
                writeln!(
                    f,
                    "║   {:30} {:>8} {:>9} {:>9} {:>9} ║",
                    signature,
                    function.calls,
                    function.statistics.min,
                    function.statistics.max,
                    function.statistics.mean.to_string().green(),
                )?;
            }
            if let Some(deployment) = contract.deployment.as_ref() {
                writeln!(
                    f,
                    "║   {:30} {:>8} {:>9} {:>9} {:>9} ║",
                    "(deployment)".bright_black(),
                    deployment.statistics.count,
                    deployment.statistics.min,
                    deployment.statistics.max,
                    deployment.statistics.mean.to_string().yellow(),
                )?;
            }
        }

        writeln!(
            f,
            "╟────────────────────────────────────────────────────────────────────────╢"
        )?;
        writeln!(
            f,
            "║ {:61} {:>8} ║",
            "RUNTIME CODE HASHES".bright_white(),
            self.code_hashes,
        )?;
        writeln!(
            f,
            "╚════════════════════════════════════════════════════════════════════════╝"
        )?;
        Ok(())
    }
}
