//!
//! The lifecycle event session tests.
//!

use std::path::PathBuf;

use gas_reporter::Console;
use gas_reporter::Event;
use gas_reporter::EventReader;
use gas_reporter::GasReport;
use gas_reporter::MockClient;
use gas_reporter::Selector;
use gas_reporter::Session;

const TOKEN_BYTECODE: &str =
    "608060405234801561001057600080fd5b50604051610200380380610200833981016040819052";
const TOKEN_RUNTIME: &str = "608060405234801561001057600080fd5b506004361061004c5760003560e01c";
const VAULT_BYTECODE_HEAD: &str = "6080604052600436106100285773";
const VAULT_RUNTIME: &str = "6080604052600436106100285760003560e01c8063b6b55f25";

fn session(client: &MockClient) -> Session<&MockClient> {
    Session::new(
        client,
        Console::new(false, true),
        PathBuf::from("tests/data/artifacts"),
        Some(PathBuf::from("tests/data/contracts")),
    )
}

fn token_creation() -> Vec<u8> {
    let mut input = hex::decode(TOKEN_BYTECODE).expect("Always valid");
    input.extend([0u8; 30]);
    input.extend([0x27, 0x10]);
    input
}

fn vault_creation() -> Vec<u8> {
    let mut input = hex::decode(VAULT_BYTECODE_HEAD).expect("Always valid");
    input.extend([0x11u8; 20]);
    input.push(0x63);
    input
}

fn calldata(signature: &str, argument: u8) -> Vec<u8> {
    let mut calldata = Selector::from_signature(signature).0.to_vec();
    calldata.extend([0u8; 31]);
    calldata.push(argument);
    calldata
}

fn pass(title: &str) -> Event {
    Event::Pass {
        title: title.to_owned(),
        duration_ms: Some(10),
    }
}

#[test]
fn suite_with_hooks_and_failures() {
    let client = MockClient::new();
    let mut session = session(&client);

    session.handle(Event::Start).expect("Always valid");
    session
        .handle(Event::Suite {
            title: "Vault".to_owned(),
        })
        .expect("Always valid");

    session.handle(Event::Test).expect("Always valid");
    let token = client.deploy(
        token_creation(),
        hex::decode(TOKEN_RUNTIME).expect("Always valid"),
        612000,
    );
    let vault = client.deploy(
        vault_creation(),
        hex::decode(VAULT_RUNTIME).expect("Always valid"),
        350000,
    );
    session.handle(Event::HookEnd).expect("Always valid");
    client.call(token, calldata("transfer(address,uint256)", 1), 51000);
    client.call(vault, calldata("deposit(uint256)", 2), 43000);
    session.handle(pass("deposits")).expect("Always valid");

    session.handle(Event::Test).expect("Always valid");
    session.handle(Event::HookEnd).expect("Always valid");
    client.call_reverted(vault, calldata("withdraw(uint256)", 9), 24000);
    session
        .handle(Event::Fail {
            title: "rejects overdraft".to_owned(),
        })
        .expect("Always valid");

    session
        .handle(Event::Pending {
            title: "migrates".to_owned(),
        })
        .expect("Always valid");
    session.handle(Event::SuiteEnd).expect("Always valid");
    session.handle(Event::End).expect("Always valid");

    assert_eq!(session.failures(), 1);
    let records = session.finish().expect("Always valid");
    let report = GasReport::from(&records);

    assert_eq!(report.code_hashes, 2);
    let names: Vec<&str> = report
        .contracts
        .iter()
        .map(|contract| contract.contract.as_str())
        .collect();
    assert_eq!(names, vec!["Token", "Vault"]);

    let token = &report.contracts[0];
    assert_eq!(
        token
            .deployment
            .as_ref()
            .expect("Always exists")
            .statistics
            .max,
        612000
    );
    assert_eq!(token.functions["transfer(address,uint256)"].calls, 1);
    assert_eq!(token.functions["transfer(address,uint256)"].statistics.min, 51000);

    let vault = &report.contracts[1];
    assert_eq!(
        vault
            .deployment
            .as_ref()
            .expect("Always exists")
            .statistics
            .mean,
        350000
    );
    assert_eq!(vault.functions.len(), 1);
    assert_eq!(vault.functions["deposit(uint256)"].statistics.mean, 43000);
}

#[test]
fn implicit_start() {
    let client = MockClient::new();
    let mut session = session(&client);

    session.handle(Event::Test).expect("Always valid");
    client.deploy(
        token_creation(),
        hex::decode(TOKEN_RUNTIME).expect("Always valid"),
        612000,
    );
    session.handle(Event::HookEnd).expect("Always valid");
    session.handle(pass("deploys")).expect("Always valid");

    let records = session.finish().expect("Always valid");
    assert_eq!(records.code_hash_index().len(), 1);
}

#[test]
fn recorded_stream() {
    let client = MockClient::new();
    let mut session = session(&client);

    let file = std::fs::File::open("tests/data/events.ndjson").expect("Always valid");
    session
        .handle_all(EventReader::new(std::io::BufReader::new(file)))
        .expect("Always valid");

    assert_eq!(session.failures(), 1);
    let records = session.finish().expect("Always valid");
    assert!(GasReport::from(&records).is_empty());
}

#[test]
fn error_event_after_end() {
    let client = MockClient::new();
    let mut session = session(&client);

    session.handle(Event::Start).expect("Always valid");
    session.handle(Event::End).expect("Always valid");
    assert!(session.handle(Event::Test).is_err());
}

#[test]
fn error_second_start() {
    let client = MockClient::new();
    let mut session = session(&client);

    session.handle(Event::Start).expect("Always valid");
    assert!(session.handle(Event::Start).is_err());
}

#[test]
fn error_missing_artifacts_is_repeatable() {
    let client = MockClient::new();
    let mut session = Session::new(
        &client,
        Console::new(false, true),
        PathBuf::from("tests/data/missing"),
        None,
    );

    for _ in 0..2 {
        let error = session
            .handle(Event::Start)
            .expect_err("Always fails")
            .to_string();
        assert!(
            error.contains("Artifacts directory"),
            "unexpected error: {error}"
        );
    }
}

#[test]
fn error_missing_artifacts() {
    let client = MockClient::new();
    let mut session = Session::new(
        &client,
        Console::new(false, true),
        PathBuf::from("tests/data/missing"),
        None,
    );

    assert!(session.handle(Event::Start).is_err());
}
