//!
//! The method composite key.
//!

use super::selector::Selector;

///
/// The method composite key, derived from the contract name and the selector only.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodKey {
    /// The contract name.
    pub contract: String,
    /// The method selector.
    pub selector: Selector,
}

impl MethodKey {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(contract: String, selector: Selector) -> Self {
        Self { contract, selector }
    }

    ///
    /// Builds the key from the contract name and the call input.
    ///
    /// Returns `None` if the calldata has no selector.
    ///
    pub fn from_calldata(contract: &str, calldata: &[u8]) -> Option<Self> {
        Selector::from_calldata(calldata).map(|selector| Self::new(contract.to_owned(), selector))
    }
}

impl std::fmt::Display for MethodKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.contract, self.selector)
    }
}
