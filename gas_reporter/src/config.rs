//!
//! The reporter configuration file.
//!

use std::path::Path;
use std::path::PathBuf;

///
/// The reporter configuration file.
///
/// Read from YAML, so JSON files are accepted as well.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// The Solidity sources directory used to filter artifacts.
    pub src: PathBuf,
    /// The compiled artifacts directory.
    pub artifacts: PathBuf,
    /// The node JSON-RPC endpoint.
    #[serde(alias = "rpcUrl")]
    pub rpc_url: String,
    /// Whether to print the test duration next to the gas amount.
    #[serde(alias = "showTimeSpent")]
    pub show_time_spent: bool,
    /// The JSON gas report output path.
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src: PathBuf::from(Self::DEFAULT_SOURCES_PATH),
            artifacts: PathBuf::from(Self::DEFAULT_ARTIFACTS_PATH),
            rpc_url: crate::client::HttpClient::DEFAULT_URL.to_owned(),
            show_time_spent: false,
            output: None,
        }
    }
}

impl Config {
    /// The configuration file looked up in the working directory.
    pub const DEFAULT_PATH: &'static str = ".ethgas.yaml";

    /// The default Solidity sources directory.
    pub const DEFAULT_SOURCES_PATH: &'static str = "contracts";

    /// The default artifacts directory.
    pub const DEFAULT_ARTIFACTS_PATH: &'static str = "build/contracts";

    ///
    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, the default file is read if present.
    ///
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::try_from(path),
            None => {
                let path = Path::new(Self::DEFAULT_PATH);
                if path.exists() {
                    Self::try_from(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

impl TryFrom<&Path> for Config {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Configuration file {path:?} reading: {error}"))?;
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(text.as_str())
            .map_err(|error| anyhow::anyhow!("Configuration file {path:?} parsing: {error}"))?;
        Ok(config)
    }
}
