//!
//! The method selector.
//!

use std::str::FromStr;

use sha3::Digest;

///
/// The method selector: the leading four bytes of calldata.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Selector(pub [u8; Selector::LENGTH]);

impl Selector {
    /// The selector length in bytes.
    pub const LENGTH: usize = 4;

    ///
    /// Returns a `keccak256` selector of the specified method signature.
    ///
    pub fn from_signature(signature: &str) -> Self {
        let hash_bytes = sha3::Keccak256::digest(signature.as_bytes());
        Self(hash_bytes[0..Self::LENGTH].try_into().expect("Always valid"))
    }

    ///
    /// Extracts the selector from calldata.
    ///
    /// Returns `None` if the calldata is too short.
    ///
    pub fn from_calldata(calldata: &[u8]) -> Option<Self> {
        calldata
            .get(..Self::LENGTH)
            .map(|bytes| Self(bytes.try_into().expect("Always valid")))
    }
}

impl FromStr for Selector {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; Self::LENGTH];
        hex::decode_to_slice(string.strip_prefix("0x").unwrap_or(string), &mut bytes)
            .map_err(|error| anyhow::anyhow!("Selector `{string}` is invalid: {error}"))?;
        Ok(Self(bytes))
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
