//!
//! The run-scoped gas records.
//!

pub mod code_hash_index;
pub mod deployment;
pub mod method;
pub mod method_key;
pub mod selector;

use std::collections::HashMap;
use std::path::Path;

use crate::artifacts::Artifact;

use self::code_hash_index::CodeHashIndex;
use self::deployment::DeploymentRecord;
use self::method::MethodRecord;
use self::method_key::MethodKey;
use self::selector::Selector;

///
/// The run-scoped gas records.
///
/// Method and deployment records are created up front, in artifact load order, and only
/// accumulate samples afterwards. The code hash index starts empty.
///
#[derive(Debug, Default)]
pub struct Records {
    /// The method records, in load order.
    methods: Vec<MethodRecord>,
    /// The method record positions by composite key.
    method_indexes: HashMap<MethodKey, usize>,
    /// The deployment records, in load order.
    deployments: Vec<DeploymentRecord>,
    /// The runtime code fingerprint index.
    code_hash_index: CodeHashIndex,
}

impl Records {
    ///
    /// A shortcut constructor.
    ///
    /// If several method records share a key, the first one is kept.
    ///
    pub fn new(methods: Vec<MethodRecord>, deployments: Vec<DeploymentRecord>) -> Self {
        let mut records = Self {
            methods: Vec::with_capacity(methods.len()),
            method_indexes: HashMap::with_capacity(methods.len()),
            deployments,
            code_hash_index: CodeHashIndex::default(),
        };
        for method in methods.into_iter() {
            if records.method_indexes.contains_key(&method.key) {
                log::debug!("Duplicate method `{}` ignored", method.key);
                continue;
            }
            records
                .method_indexes
                .insert(method.key.clone(), records.methods.len());
            records.methods.push(method);
        }
        records
    }

    ///
    /// Loads the artifacts and builds the records.
    ///
    pub fn build(artifacts_path: &Path, sources_path: Option<&Path>) -> anyhow::Result<Self> {
        let artifacts = crate::artifacts::load(artifacts_path, sources_path)?;
        Self::try_from(artifacts.as_slice())
    }

    ///
    /// Returns the method record by its key.
    ///
    pub fn method(&self, key: &MethodKey) -> Option<&MethodRecord> {
        self.method_indexes
            .get(key)
            .map(|index| &self.methods[*index])
    }

    ///
    /// Returns the mutable method record by its key.
    ///
    pub fn method_mut(&mut self, key: &MethodKey) -> Option<&mut MethodRecord> {
        self.method_indexes
            .get(key)
            .map(|index| &mut self.methods[*index])
    }

    ///
    /// Whether a method record with the key exists.
    ///
    pub fn contains_method(&self, key: &MethodKey) -> bool {
        self.method_indexes.contains_key(key)
    }

    ///
    /// Returns the first method record in load order with the selector, regardless of the
    /// contract.
    ///
    /// Selectors shared by several contracts resolve to the earliest loaded one.
    ///
    pub fn first_with_selector(&self, selector: &Selector) -> Option<&MethodRecord> {
        self.methods
            .iter()
            .find(|method| method.key.selector == *selector)
    }

    ///
    /// The method records, in load order.
    ///
    pub fn methods(&self) -> &[MethodRecord] {
        self.methods.as_slice()
    }

    ///
    /// The deployment records, in load order.
    ///
    pub fn deployments(&self) -> &[DeploymentRecord] {
        self.deployments.as_slice()
    }

    ///
    /// The mutable deployment records, in load order.
    ///
    pub fn deployments_mut(&mut self) -> &mut [DeploymentRecord] {
        self.deployments.as_mut_slice()
    }

    ///
    /// The runtime code fingerprint index.
    ///
    pub fn code_hash_index(&self) -> &CodeHashIndex {
        &self.code_hash_index
    }

    ///
    /// The mutable runtime code fingerprint index.
    ///
    pub fn code_hash_index_mut(&mut self) -> &mut CodeHashIndex {
        &mut self.code_hash_index
    }
}

impl TryFrom<&[Artifact]> for Records {
    type Error = anyhow::Error;

    fn try_from(artifacts: &[Artifact]) -> Result<Self, Self::Error> {
        let mut methods = Vec::new();
        let mut deployments = Vec::with_capacity(artifacts.len());
        for artifact in artifacts.iter() {
            for (signature, selector) in artifact.methods()?.into_iter() {
                let key = MethodKey::new(artifact.contract_name.clone(), selector);
                methods.push(MethodRecord::new(key, signature));
            }
            deployments.push(DeploymentRecord::new(
                artifact.contract_name.clone(),
                artifact.template()?,
            ));
        }
        Ok(Self::new(methods, deployments))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::method::MethodRecord;
    use super::method_key::MethodKey;
    use super::selector::Selector;
    use super::Records;

    fn method(contract: &str, signature: &str) -> MethodRecord {
        MethodRecord::new(
            MethodKey::new(contract.to_owned(), Selector::from_signature(signature)),
            signature.to_owned(),
        )
    }

    #[test]
    fn first_with_selector_follows_load_order() {
        let records = Records::new(
            vec![
                method("Token", "transfer(address,uint256)"),
                method("Wrapper", "transfer(address,uint256)"),
            ],
            vec![],
        );
        let selector = Selector::from_str("a9059cbb").expect("Always valid");
        let found = records.first_with_selector(&selector).expect("Always exists");
        assert_eq!(found.key.contract, "Token");
    }

    #[test]
    fn duplicate_keys_keep_the_first() {
        let mut duplicate = method("Token", "transfer(address,uint256)");
        duplicate.signature = "shadow".to_owned();
        let records = Records::new(
            vec![method("Token", "transfer(address,uint256)"), duplicate],
            vec![],
        );
        assert_eq!(records.methods().len(), 1);
        assert_eq!(records.methods()[0].signature, "transfer(address,uint256)");
        assert_eq!(records.methods()[0].name(), "transfer");
    }
}
