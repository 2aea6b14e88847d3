//!
//! The JSON-RPC response envelope.
//!

use crate::client::Error;

///
/// The JSON-RPC response envelope.
///
#[derive(Debug, serde::Deserialize)]
pub struct Response {
    /// The successful result. `null` and a missing field are both `None`.
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    /// The error object.
    #[serde(default)]
    pub error: Option<ErrorObject>,
}

///
/// The JSON-RPC error object.
///
#[derive(Debug, serde::Deserialize)]
pub struct ErrorObject {
    /// The error code.
    pub code: i64,
    /// The error message.
    pub message: String,
}

impl Response {
    ///
    /// Extracts the result, converting the error object into an error.
    ///
    pub fn into_result<R>(self, method: &str) -> Result<Option<R>, Error>
    where
        R: serde::de::DeserializeOwned,
    {
        if let Some(error) = self.error {
            return Err(Error::Node {
                method: method.to_owned(),
                code: error.code,
                message: error.message,
            });
        }

        match self.result {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|error| Error::malformed(method, error)),
        }
    }
}
