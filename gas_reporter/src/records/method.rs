//!
//! The method gas record.
//!

use super::method_key::MethodKey;

///
/// The method gas record.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRecord {
    /// The composite key.
    pub key: MethodKey,
    /// The canonical signature, e.g. `transfer(address,uint256)`.
    pub signature: String,
    /// The gas used by each attributed call, in chain order.
    pub gas_samples: Vec<u64>,
    /// The number of attributed calls.
    pub calls: usize,
}

impl MethodRecord {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(key: MethodKey, signature: String) -> Self {
        Self {
            key,
            signature,
            gas_samples: Vec::new(),
            calls: 0,
        }
    }

    ///
    /// The method name without parameters.
    ///
    pub fn name(&self) -> &str {
        self.signature
            .split_once('(')
            .map(|(name, _)| name)
            .unwrap_or(self.signature.as_str())
    }

    ///
    /// Records an attributed call.
    ///
    pub fn record(&mut self, gas_used: u64) {
        self.gas_samples.push(gas_used);
        self.calls += 1;
    }
}
