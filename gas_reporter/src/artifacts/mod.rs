//!
//! The compiled contract artifacts.
//!

pub mod abi;
pub mod error;
pub mod source;
pub mod template;

use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use crate::records::selector::Selector;

use self::abi::AbiEntry;
use self::error::Error;
use self::template::BytecodeTemplate;

///
/// The compiled contract artifact, as emitted by Truffle or Hardhat.
///
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// The contract name.
    pub contract_name: String,
    /// The contract ABI.
    #[serde(default)]
    pub abi: Vec<AbiEntry>,
    /// The creation bytecode, possibly with link placeholders.
    #[serde(default)]
    pub bytecode: Bytecode,
    /// The source file path.
    #[serde(default)]
    pub source_path: Option<String>,
    /// The `solc` method identifiers, used when the ABI is not present.
    #[serde(default)]
    pub method_identifiers: BTreeMap<String, String>,
}

///
/// The artifact bytecode representation.
///
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
pub enum Bytecode {
    /// The bare hexadecimal string.
    Plain(String),
    /// The `solc --standard-json` bytecode object.
    Object {
        /// The hexadecimal string.
        object: String,
    },
}

impl Default for Bytecode {
    fn default() -> Self {
        Self::Plain(String::new())
    }
}

impl Bytecode {
    ///
    /// Returns the hexadecimal string.
    ///
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(string) => string.as_str(),
            Self::Object { object } => object.as_str(),
        }
    }
}

impl Artifact {
    ///
    /// Returns the method signatures and their selectors, in ABI order.
    ///
    pub fn methods(&self) -> Result<Vec<(String, Selector)>, Error> {
        if !self.abi.is_empty() {
            return Ok(self
                .abi
                .iter()
                .filter_map(AbiEntry::signature)
                .map(|signature| {
                    let selector = Selector::from_signature(signature.as_str());
                    (signature, selector)
                })
                .collect());
        }

        self.method_identifiers
            .iter()
            .map(|(signature, identifier)| {
                let selector =
                    Selector::from_str(identifier).map_err(|_| Error::MethodIdentifier {
                        contract: self.contract_name.clone(),
                        signature: signature.clone(),
                        identifier: identifier.clone(),
                    })?;
                Ok((signature.clone(), selector))
            })
            .collect()
    }

    ///
    /// Returns the creation bytecode template.
    ///
    pub fn template(&self) -> Result<BytecodeTemplate, Error> {
        BytecodeTemplate::from_str(self.bytecode.as_str()).map_err(|error| Error::Bytecode {
            contract: self.contract_name.clone(),
            error,
        })
    }
}

impl TryFrom<&Path> for Artifact {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
            error,
            path: path.to_owned(),
        })?;
        serde_json::from_str(text.as_str()).map_err(|error| Error::Parsing {
            error,
            path: path.to_owned(),
        })
    }
}

///
/// Loads all artifacts found under the directory, sorted by path.
///
/// If the sources directory exists, only artifacts of contracts declared there are kept.
/// Hardhat debug files and build info are skipped.
///
pub fn load(artifacts_path: &Path, sources_path: Option<&Path>) -> anyhow::Result<Vec<Artifact>> {
    if !artifacts_path.is_dir() {
        anyhow::bail!("Artifacts directory {artifacts_path:?} does not exist");
    }

    let declared = match sources_path {
        Some(sources_path) if sources_path.is_dir() => {
            Some(source::declared_contracts(sources_path)?)
        }
        Some(sources_path) => {
            log::debug!("Sources directory {sources_path:?} not found, keeping all artifacts");
            None
        }
        None => None,
    };

    let pattern = format!("{}/**/*.json", artifacts_path.to_string_lossy());
    let mut paths: Vec<PathBuf> = glob::glob(pattern.as_str())?
        .filter_map(Result::ok)
        .filter(|path| !is_auxiliary(path.as_path()))
        .collect();
    paths.sort();

    let mut artifacts = Vec::with_capacity(paths.len());
    for path in paths.into_iter() {
        let artifact = Artifact::try_from(path.as_path())?;
        if let Some(declared) = declared.as_ref() {
            if !declared.contains(artifact.contract_name.as_str()) {
                log::trace!(
                    "Skipping artifact `{}`: not declared in the sources",
                    artifact.contract_name
                );
                continue;
            }
        }
        artifacts.push(artifact);
    }
    Ok(artifacts)
}

///
/// Whether the JSON file is not a contract artifact.
///
fn is_auxiliary(path: &Path) -> bool {
    path.to_string_lossy().ends_with(".dbg.json")
        || path
            .components()
            .any(|component| component.as_os_str() == "build-info")
}
