//!
//! The runtime code fingerprint index.
//!

use std::collections::HashMap;

///
/// The runtime code fingerprint.
///
/// MD5 is used for speed only: the index recognizes compiled code, it does not defend
/// against crafted collisions.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(pub [u8; 16]);

impl Fingerprint {
    ///
    /// Computes the fingerprint of the code.
    ///
    pub fn of(code: &[u8]) -> Self {
        Self(md5::compute(code).0)
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

///
/// The runtime code fingerprint index, mapping deployed code to contract names.
///
/// Bindings are only ever added. The first binding of a fingerprint is final.
///
#[derive(Debug, Clone, Default)]
pub struct CodeHashIndex {
    /// The contract names by fingerprint.
    entries: HashMap<Fingerprint, String>,
}

impl CodeHashIndex {
    ///
    /// Binds the fingerprint to the contract name.
    ///
    /// Returns `false` if the fingerprint was already bound, in which case the existing
    /// binding is kept.
    ///
    pub fn bind(&mut self, fingerprint: Fingerprint, contract: &str) -> bool {
        match self.entries.get(&fingerprint) {
            Some(existing) => {
                if existing != contract {
                    log::debug!(
                        "Runtime code {fingerprint} of `{contract}` is already bound to `{existing}`"
                    );
                }
                false
            }
            None => {
                self.entries.insert(fingerprint, contract.to_owned());
                true
            }
        }
    }

    ///
    /// Returns the contract name bound to the fingerprint.
    ///
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<&str> {
        self.entries.get(fingerprint).map(String::as_str)
    }

    ///
    /// The number of bindings.
    ///
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    ///
    /// Whether there are no bindings.
    ///
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
