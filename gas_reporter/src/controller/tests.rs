//!
//! The run controller tests.
//!

use crate::artifacts::Artifact;
use crate::client::mock::MockTransaction;
use crate::client::MockClient;
use crate::records::code_hash_index::Fingerprint;
use crate::records::method_key::MethodKey;
use crate::records::selector::Selector;
use crate::records::Records;

use super::RunController;

const TOKEN_BYTECODE: &str = "0x608060405234801561001057600080fd5b50";
const TOKEN_RUNTIME: &str = "6080604052348015600f57600080fd5b506004361060285760003560e01c";
const TRANSFER: &str = "transfer(address,uint256)";
const APPROVE: &str = "approve(address,uint256)";

fn records() -> Records {
    let artifacts: Vec<Artifact> = serde_json::from_value(serde_json::json!([
        {
            "contractName": "IToken",
            "abi": [
                { "type": "function", "name": "transfer", "inputs": [{ "type": "address" }, { "type": "uint256" }] }
            ],
            "bytecode": "0x"
        },
        {
            "contractName": "Token",
            "abi": [
                { "type": "constructor", "inputs": [{ "type": "uint256" }] },
                { "type": "function", "name": "transfer", "inputs": [{ "type": "address" }, { "type": "uint256" }] },
                { "type": "function", "name": "approve", "inputs": [{ "type": "address" }, { "type": "uint256" }] }
            ],
            "bytecode": TOKEN_BYTECODE
        }
    ]))
    .expect("Always valid");
    Records::try_from(artifacts.as_slice()).expect("Always valid")
}

fn creation_input() -> Vec<u8> {
    let mut input = hex::decode(TOKEN_BYTECODE.trim_start_matches("0x")).expect("Always valid");
    input.extend([0u8; 31]);
    input.push(0x2a);
    input
}

fn runtime_code() -> Vec<u8> {
    hex::decode(TOKEN_RUNTIME).expect("Always valid")
}

fn calldata(signature: &str) -> Vec<u8> {
    let mut calldata = Selector::from_signature(signature).0.to_vec();
    calldata.extend([0u8; 64]);
    calldata
}

fn key(contract: &str, signature: &str) -> MethodKey {
    MethodKey::new(contract.to_owned(), Selector::from_signature(signature))
}

fn samples(records: &Records, contract: &str, signature: &str) -> Vec<u64> {
    records
        .method(&key(contract, signature))
        .expect("Always exists")
        .gas_samples
        .clone()
}

fn deployment_samples(records: &Records, contract: &str) -> Vec<u64> {
    records
        .deployments()
        .iter()
        .find(|deployment| deployment.contract == contract)
        .expect("Always exists")
        .gas_samples
        .clone()
}

#[test]
fn deployment_binds_runtime_code() {
    let client = MockClient::new();
    let mut controller = RunController::new(&client, records());

    controller.on_test_start().expect("Always valid");
    controller.on_hooks_end().expect("Always valid");
    client.deploy(creation_input(), runtime_code(), 500000);
    let attribution = controller.on_test_pass().expect("Always valid");

    let records = controller.finish();
    assert_eq!(attribution.deployments, 1);
    assert_eq!(deployment_samples(&records, "Token"), vec![500000]);
    assert!(deployment_samples(&records, "IToken").is_empty());
    assert_eq!(
        records
            .code_hash_index()
            .get(&Fingerprint::of(runtime_code().as_slice())),
        Some("Token")
    );
}

#[test]
fn call_to_deployed_contract() {
    let client = MockClient::new();
    let mut controller = RunController::new(&client, records());

    controller.on_test_start().expect("Always valid");
    let address = client.deploy(creation_input(), runtime_code(), 500000);
    controller.on_hooks_end().expect("Always valid");
    client.call(address, calldata(TRANSFER), 51000);
    let attribution = controller.on_test_pass().expect("Always valid");

    let records = controller.finish();
    assert_eq!(attribution.calls, 1);
    assert_eq!(attribution.gas_used, 51000);
    assert_eq!(samples(&records, "Token", TRANSFER), vec![51000]);
    assert_eq!(
        records
            .method(&key("Token", TRANSFER))
            .expect("Always exists")
            .calls,
        1
    );
    assert!(samples(&records, "IToken", TRANSFER).is_empty());
}

#[test]
fn reverted_call_counts_only_at_block_level() {
    let client = MockClient::new();
    let mut controller = RunController::new(&client, records());

    controller.on_test_start().expect("Always valid");
    let address = client.deploy(creation_input(), runtime_code(), 500000);
    controller.on_hooks_end().expect("Always valid");
    client.call_reverted(address, calldata(TRANSFER), 51000);
    let attribution = controller.on_test_pass().expect("Always valid");

    let records = controller.finish();
    assert_eq!(attribution.calls, 0);
    assert_eq!(attribution.gas_used, 51000);
    assert!(samples(&records, "Token", TRANSFER).is_empty());
}

#[test]
fn reverted_creation_is_not_attributed() {
    let client = MockClient::new();
    let mut controller = RunController::new(&client, records());

    controller.on_test_start().expect("Always valid");
    controller.on_hooks_end().expect("Always valid");
    client.mine(vec![MockTransaction::Create {
        input: creation_input(),
        runtime_code: runtime_code(),
        gas_used: 90000,
        success: false,
    }]);
    let attribution = controller.on_test_pass().expect("Always valid");

    let records = controller.finish();
    assert_eq!(attribution.deployments, 0);
    assert_eq!(attribution.gas_used, 90000);
    assert!(deployment_samples(&records, "Token").is_empty());
    assert!(records.code_hash_index().is_empty());
}

#[test]
fn call_without_transaction_counts_only_at_block_level() {
    let client = MockClient::new();
    let mut controller = RunController::new(&client, records());

    controller.on_test_start().expect("Always valid");
    let address = client.deploy(creation_input(), runtime_code(), 500000);
    controller.on_hooks_end().expect("Always valid");
    let hash = client.call(address, calldata(TRANSFER), 51000);
    client.hide_transaction(hash);
    let attribution = controller.on_test_pass().expect("Always valid");

    let records = controller.finish();
    assert_eq!(attribution.calls, 0);
    assert_eq!(attribution.gas_used, 51000);
    assert!(samples(&records, "Token", TRANSFER).is_empty());
    assert_eq!(deployment_samples(&records, "Token"), vec![500000]);
}

#[test]
fn call_to_unknown_contract_is_not_attributed() {
    let client = MockClient::new();
    let mut controller = RunController::new(&client, records());
    let stranger = web3::types::Address::from_low_u64_be(0xdead);
    client.set_code(stranger, vec![0xfe]);

    controller.on_test_start().expect("Always valid");
    controller.on_hooks_end().expect("Always valid");
    client.call(stranger, calldata("mint(address,uint256)"), 45000);
    let attribution = controller.on_test_pass().expect("Always valid");

    let records = controller.finish();
    assert_eq!(attribution.calls, 0);
    assert_eq!(attribution.gas_used, 45000);
    assert!(records
        .methods()
        .iter()
        .all(|method| method.gas_samples.is_empty()));
}

#[test]
fn call_to_unknown_contract_falls_back_to_selector() {
    let client = MockClient::new();
    let mut controller = RunController::new(&client, records());
    let stranger = web3::types::Address::from_low_u64_be(0xdead);
    client.set_code(stranger, vec![0xfe]);

    controller.on_test_start().expect("Always valid");
    controller.on_hooks_end().expect("Always valid");
    client.call(stranger, calldata(APPROVE), 46000);
    controller.on_test_pass().expect("Always valid");

    let records = controller.finish();
    assert_eq!(samples(&records, "Token", APPROVE), vec![46000]);
}

#[test]
fn shared_selector_falls_back_to_first_loaded_contract() {
    let client = MockClient::new();
    let mut controller = RunController::new(&client, records());
    let stranger = web3::types::Address::from_low_u64_be(0xdead);
    client.set_code(stranger, vec![0xfe]);

    controller.on_test_start().expect("Always valid");
    controller.on_hooks_end().expect("Always valid");
    client.call(stranger, calldata(TRANSFER), 47000);
    controller.on_test_pass().expect("Always valid");

    let records = controller.finish();
    assert_eq!(
        samples(&records, "IToken", TRANSFER),
        vec![47000],
        "known limitation: the interface is loaded first and takes the sample"
    );
    assert!(samples(&records, "Token", TRANSFER).is_empty());
}

#[test]
fn hooks_are_charged_for_deployments_only() {
    let client = MockClient::new();
    let mut controller = RunController::new(&client, records());

    controller.on_test_start().expect("Always valid");
    let address = client.deploy(creation_input(), runtime_code(), 500000);
    client.call(address, calldata(APPROVE), 44000);
    controller.on_hooks_end().expect("Always valid");
    client.call(address, calldata(TRANSFER), 51000);
    let attribution = controller.on_test_pass().expect("Always valid");

    let records = controller.finish();
    assert_eq!(attribution.gas_used, 51000);
    assert_eq!(deployment_samples(&records, "Token"), vec![500000]);
    assert!(samples(&records, "Token", APPROVE).is_empty());
    assert_eq!(samples(&records, "Token", TRANSFER), vec![51000]);
}

#[test]
fn consecutive_tests_do_not_double_count() {
    let client = MockClient::new();
    let mut controller = RunController::new(&client, records());

    controller.on_test_start().expect("Always valid");
    let address = client.deploy(creation_input(), runtime_code(), 500000);
    controller.on_hooks_end().expect("Always valid");
    client.call(address, calldata(TRANSFER), 51000);
    controller.on_test_pass().expect("Always valid");

    controller.on_test_start().expect("Always valid");
    controller.on_hooks_end().expect("Always valid");
    client.call(address, calldata(TRANSFER), 34000);
    let attribution = controller.on_test_pass().expect("Always valid");

    controller.on_test_start().expect("Always valid");
    controller.on_hooks_end().expect("Always valid");
    let idle = controller.on_test_pass().expect("Always valid");

    let records = controller.finish();
    assert_eq!(attribution.gas_used, 34000);
    assert_eq!(idle.gas_used, 0);
    assert_eq!(deployment_samples(&records, "Token"), vec![500000]);
    assert_eq!(samples(&records, "Token", TRANSFER), vec![51000, 34000]);
}

#[test]
fn failed_test_is_not_charged() {
    let client = MockClient::new();
    let mut controller = RunController::new(&client, records());

    controller.on_test_start().expect("Always valid");
    let address = client.deploy(creation_input(), runtime_code(), 500000);
    controller.on_hooks_end().expect("Always valid");
    controller.on_test_pass().expect("Always valid");

    controller.on_test_start().expect("Always valid");
    controller.on_hooks_end().expect("Always valid");
    client.call(address, calldata(TRANSFER), 51000);
    controller.on_test_fail();

    controller.on_test_start().expect("Always valid");
    controller.on_hooks_end().expect("Always valid");
    client.call(address, calldata(APPROVE), 44000);
    controller.on_test_pass().expect("Always valid");

    let records = controller.finish();
    assert!(samples(&records, "Token", TRANSFER).is_empty());
    assert_eq!(samples(&records, "Token", APPROVE), vec![44000]);
}

#[test]
fn block_total_covers_attributed_samples() {
    let client = MockClient::new();
    let mut controller = RunController::new(&client, records());
    let address = client.deploy(creation_input(), runtime_code(), 500000);
    client.mine(vec![
        MockTransaction::Call {
            to: address,
            input: calldata(TRANSFER),
            gas_used: 51000,
            success: true,
        },
        MockTransaction::Call {
            to: address,
            input: calldata(APPROVE),
            gas_used: 44000,
            success: false,
        },
        MockTransaction::Call {
            to: address,
            input: vec![],
            gas_used: 21000,
            success: true,
        },
    ]);

    let attribution = controller.attribute_range(0).expect("Always valid");

    let records = controller.finish();
    let attributed: u64 = records
        .methods()
        .iter()
        .flat_map(|method| method.gas_samples.iter())
        .sum();
    assert_eq!(attribution.gas_used, 500000 + 51000 + 44000 + 21000);
    assert_eq!(attributed, 51000);
    assert!(attribution.gas_used >= attributed);
    assert_eq!(attribution.deployments, 1);
    assert_eq!(attribution.calls, 1);
}

#[test]
fn pass_without_markers_scans_nothing() {
    let client = MockClient::new();
    let mut controller = RunController::new(&client, records());
    client.deploy(creation_input(), runtime_code(), 500000);

    let attribution = controller.on_test_pass().expect("Always valid");

    assert_eq!(attribution, super::Attribution::default());
    assert!(deployment_samples(controller.records(), "Token").is_empty());
}
