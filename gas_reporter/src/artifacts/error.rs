//!
//! The artifact loading error.
//!

use std::path::PathBuf;

///
/// The artifact loading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the artifact file.
    #[error("Reading artifact file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the artifact file.
        path: PathBuf,
    },
    /// Error parsing the artifact file.
    #[error("Parsing artifact file {path:?}: {error}")]
    Parsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the artifact file.
        path: PathBuf,
    },
    /// The creation bytecode is not a valid template.
    #[error("Contract `{contract}` bytecode: {error}")]
    Bytecode {
        /// The contract name.
        contract: String,
        /// The template parsing error.
        error: super::template::Error,
    },
    /// A method identifier is not a valid selector.
    #[error("Contract `{contract}` method `{signature}` identifier `{identifier}` is invalid")]
    MethodIdentifier {
        /// The contract name.
        contract: String,
        /// The method signature.
        signature: String,
        /// The invalid identifier.
        identifier: String,
    },
}
