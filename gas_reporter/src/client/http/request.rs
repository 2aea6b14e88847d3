//!
//! The JSON-RPC request envelope.
//!

/// The empty positional parameter list, serialized as `[]`.
pub const NO_PARAMS: [(); 0] = [];

///
/// The JSON-RPC request envelope.
///
#[derive(Debug, serde::Serialize)]
pub struct Request<'a, P> {
    /// The protocol version, always `2.0`.
    pub jsonrpc: &'static str,
    /// The method name.
    pub method: &'a str,
    /// The positional parameters.
    pub params: P,
    /// The request identifier.
    pub id: usize,
}

impl<'a, P> Request<'a, P>
where
    P: serde::Serialize,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(id: usize, method: &'a str, params: P) -> Self {
        Self {
            jsonrpc: "2.0",
            method,
            params,
            id,
        }
    }
}
