//!
//! The contract ABI entries.
//!

///
/// The contract ABI entry.
///
#[derive(Debug, Clone, serde::Deserialize)]
pub struct AbiEntry {
    /// The entry type. Omitted entries are functions.
    #[serde(rename = "type", default = "AbiEntry::default_type")]
    pub r#type: String,
    /// The function, event, or error name.
    #[serde(default)]
    pub name: String,
    /// The input parameters.
    #[serde(default)]
    pub inputs: Vec<AbiParameter>,
}

///
/// The contract ABI parameter.
///
#[derive(Debug, Clone, serde::Deserialize)]
pub struct AbiParameter {
    /// The parameter type, e.g. `uint256[]` or `tuple[2]`.
    #[serde(rename = "type")]
    pub r#type: String,
    /// The tuple components.
    #[serde(default)]
    pub components: Vec<AbiParameter>,
}

impl AbiEntry {
    /// The function entry type.
    pub const TYPE_FUNCTION: &'static str = "function";

    ///
    /// The entry type used when the field is omitted.
    ///
    fn default_type() -> String {
        Self::TYPE_FUNCTION.to_owned()
    }

    ///
    /// Returns the canonical signature of a function entry, e.g. `transfer(address,uint256)`.
    ///
    /// Returns `None` for constructors, events, errors, and special functions.
    ///
    pub fn signature(&self) -> Option<String> {
        if self.r#type != Self::TYPE_FUNCTION || self.name.is_empty() {
            return None;
        }

        let inputs = self
            .inputs
            .iter()
            .map(AbiParameter::canonical_type)
            .collect::<Vec<String>>()
            .join(",");
        Some(format!("{}({inputs})", self.name))
    }
}

impl AbiParameter {
    ///
    /// Returns the canonical type with tuples expanded, e.g. `(uint256,address)[]`.
    ///
    pub fn canonical_type(&self) -> String {
        match self.r#type.strip_prefix("tuple") {
            Some(suffix) => {
                let components = self
                    .components
                    .iter()
                    .map(Self::canonical_type)
                    .collect::<Vec<String>>()
                    .join(",");
                format!("({components}){suffix}")
            }
            None => self.r#type.clone(),
        }
    }
}
