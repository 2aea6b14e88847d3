//!
//! The node client error.
//!

///
/// The node client error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP transport failed.
    #[error("RPC transport: {0}")]
    Transport(#[from] reqwest::Error),
    /// The node returned a JSON-RPC error object.
    #[error("RPC method `{method}` failed with code {code}: {message}")]
    Node {
        /// The JSON-RPC method name.
        method: String,
        /// The JSON-RPC error code.
        code: i64,
        /// The JSON-RPC error message.
        message: String,
    },
    /// The node response could not be interpreted.
    #[error("RPC method `{method}` response is malformed: {message}")]
    Malformed {
        /// The JSON-RPC method name.
        method: String,
        /// The interpretation error.
        message: String,
    },
}

impl Error {
    ///
    /// A shortcut constructor for malformed responses.
    ///
    pub fn malformed<S>(method: &str, message: S) -> Self
    where
        S: ToString,
    {
        Self::Malformed {
            method: method.to_owned(),
            message: message.to_string(),
        }
    }
}
