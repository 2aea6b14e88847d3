//!
//! The Solidity source scanning.
//!

use std::collections::BTreeSet;
use std::path::Path;

lazy_static::lazy_static! {
    ///
    /// The contract, library, and interface declaration pattern.
    ///
    static ref DECLARATION: regex::Regex = regex::Regex::new(
        r"(?m)^\s*(?:abstract\s+contract|contract|library|interface)\s+([A-Za-z_$][A-Za-z0-9_$]*)"
    )
    .expect("Always valid");
}

///
/// Returns the names of all contracts declared in the Solidity source.
///
pub fn declarations(source: &str) -> impl Iterator<Item = &str> {
    DECLARATION
        .captures_iter(source)
        .filter_map(|captures| captures.get(1))
        .map(|name| name.as_str())
}

///
/// Returns the names of all contracts declared in `*.sol` files under the directory.
///
pub fn declared_contracts(path: &Path) -> anyhow::Result<BTreeSet<String>> {
    let pattern = format!("{}/**/*.sol", path.to_string_lossy());

    let mut names = BTreeSet::new();
    for path in glob::glob(pattern.as_str())?.filter_map(Result::ok) {
        let source = std::fs::read_to_string(path.as_path())
            .map_err(|error| anyhow::anyhow!("Source file {path:?} reading: {error}"))?;
        names.extend(declarations(source.as_str()).map(str::to_owned));
    }
    Ok(names)
}
