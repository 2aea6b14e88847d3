//!
//! The deployment gas attribution.
//!

use crate::client::Client;
use crate::client::Error;
use crate::records::code_hash_index::Fingerprint;
use crate::records::Records;

///
/// Returns the position of the deployment record the creation input was built from.
///
/// Empty or placeholder-only templates, as of interfaces and abstract contracts, match
/// almost any input but never win.
///
pub fn find(records: &Records, input: &[u8]) -> Option<usize> {
    records
        .deployments()
        .iter()
        .enumerate()
        .filter(|(_, deployment)| deployment.template.matches(input))
        .find(|(_, deployment)| !deployment.template.is_abstract())
        .map(|(index, _)| index)
}

///
/// Attributes a successful contract creation.
///
/// Records the gas sample against the matched deployment and binds the runtime code now
/// stored at `address` to the contract name. Returns the contract name, or `None` if no
/// template matches.
///
pub fn attribute<C>(
    client: &C,
    records: &mut Records,
    input: &[u8],
    address: &web3::types::Address,
    gas_used: u64,
) -> Result<Option<String>, Error>
where
    C: Client,
{
    let index = match find(records, input) {
        Some(index) => index,
        None => {
            log::debug!("Creation of {address:?} matches no known bytecode");
            return Ok(None);
        }
    };

    let deployment = &mut records.deployments_mut()[index];
    deployment.record(gas_used);
    let contract = deployment.contract.clone();

    let code = client.code(address)?;
    let fingerprint = Fingerprint::of(code.as_slice());
    if records.code_hash_index_mut().bind(fingerprint, contract.as_str()) {
        log::debug!("Runtime code {fingerprint} bound to `{contract}`");
    }
    Ok(Some(contract))
}
