//!
//! The method call gas attribution.
//!

use crate::client::Client;
use crate::client::Error;
use crate::records::code_hash_index::Fingerprint;
use crate::records::method_key::MethodKey;
use crate::records::selector::Selector;
use crate::records::Records;

///
/// Resolves the method record a call was made to.
///
/// The contract is first looked up by the fingerprint of the code at `to`. If the code is
/// unknown, or the contract found has no method with the selector, as with proxies and
/// clones sharing runtime code, the first loaded method with the selector decides the
/// contract. Selectors shared by unrelated contracts may thus resolve to the wrong one.
///
pub fn resolve<C>(
    client: &C,
    records: &Records,
    to: &web3::types::Address,
    calldata: &[u8],
) -> Result<Option<MethodKey>, Error>
where
    C: Client,
{
    let selector = match Selector::from_calldata(calldata) {
        Some(selector) => selector,
        None => return Ok(None),
    };

    let code = client.code(to)?;
    let mut contract = records
        .code_hash_index()
        .get(&Fingerprint::of(code.as_slice()))
        .map(str::to_owned);

    let is_proxied = contract.as_deref().is_some_and(|contract| {
        !MethodKey::from_calldata(contract, calldata)
            .is_some_and(|key| records.contains_method(&key))
    });
    if contract.is_none() || is_proxied {
        if let Some(method) = records.first_with_selector(&selector) {
            log::trace!(
                "Call to {to:?} with selector {selector} resolved by selector to `{}`",
                method.key.contract
            );
            contract = Some(method.key.contract.clone());
        }
    }

    Ok(contract
        .and_then(|contract| MethodKey::from_calldata(contract.as_str(), calldata))
        .filter(|key| records.contains_method(key)))
}

///
/// Attributes a successful contract call.
///
/// Returns the key of the method record the gas sample was added to, or `None` if the call
/// could not be resolved.
///
pub fn attribute<C>(
    client: &C,
    records: &mut Records,
    to: &web3::types::Address,
    calldata: &[u8],
    gas_used: u64,
) -> Result<Option<MethodKey>, Error>
where
    C: Client,
{
    let key = resolve(client, records, to, calldata)?;
    match key.as_ref().and_then(|key| records.method_mut(key)) {
        Some(method) => method.record(gas_used),
        None => log::debug!("Call to {to:?} is not attributed"),
    }
    Ok(key)
}
