// tests/deploy_test.rs
#![cfg(feature = "local_simulation")] // Only compile when local_simulation feature is enabled

// Anvil-backed integration tests for the deploy runner. Each test
// spawns its own node, so they are safe to run in parallel.

use casino_deploy::{deploy, DeployConfig, DeployError};
use ethers::{types::Address, utils::Anvil};
use std::{fs, path::PathBuf};
use tracing::{info, Level};

// Default Anvil account #0 private key.
const ANVIL_FUNDED_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
// Valid secp256k1 key whose address holds nothing on a fresh Anvil.
const UNFUNDED_KEY: &str =
    "0x0000000000000000000000000000000000000000000000000000000000000001";

// Init code that returns a single STOP opcode as the runtime code.
const TEST_BYTECODE: &str = "0x6001600c60003960016000f300";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_test_writer()
        .try_init();
}

fn artifacts_dir(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "casino-deploy-anvil-{}-{}",
        test_name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    let json = format!(r#"{{"contractName":"Casino2","abi":[],"bytecode":"{TEST_BYTECODE}"}}"#);
    fs::write(dir.join("Casino2.json"), json).unwrap();
    dir
}

fn test_config(endpoint: String, private_key: &str, artifacts_dir: PathBuf) -> DeployConfig {
    DeployConfig {
        http_rpc_url: endpoint,
        private_key: private_key.to_string(),
        artifact_name: "Casino2".to_string(),
        artifacts_dir,
        confirmation_timeout_secs: 120,
    }
}

#[tokio::test]
async fn deploy_confirms_and_returns_address() {
    init_tracing();
    let anvil = Anvil::new().spawn();
    let config = test_config(
        anvil.endpoint(),
        ANVIL_FUNDED_KEY,
        artifacts_dir("success"),
    );

    let address = deploy::run(&config).await.expect("deployment should confirm");
    info!(?address, "deployed");
    assert_ne!(address, Address::zero());
}

#[tokio::test]
async fn unfunded_signer_is_rejected_at_submission() {
    init_tracing();
    let anvil = Anvil::new().spawn();
    let config = test_config(
        anvil.endpoint(),
        UNFUNDED_KEY,
        artifacts_dir("unfunded"),
    );

    let err = deploy::run(&config).await.unwrap_err();
    assert!(matches!(err, DeployError::Submission(_)), "got {err:?}");
}

#[tokio::test]
async fn no_mining_hits_the_confirmation_timeout() {
    init_tracing();
    let anvil = Anvil::new().arg("--no-mining").spawn();
    let mut config = test_config(
        anvil.endpoint(),
        ANVIL_FUNDED_KEY,
        artifacts_dir("no-mining"),
    );
    config.confirmation_timeout_secs = 2;

    let err = deploy::run(&config).await.unwrap_err();
    assert!(
        matches!(err, DeployError::ConfirmationTimeout { secs: 2, .. }),
        "got {err:?}"
    );
}

// Redeployment is deliberately unguarded: each invocation is an
// independent deployment at a fresh address.
#[tokio::test]
async fn repeated_runs_deploy_to_distinct_addresses() {
    init_tracing();
    let anvil = Anvil::new().spawn();
    let config = test_config(
        anvil.endpoint(),
        ANVIL_FUNDED_KEY,
        artifacts_dir("repeated"),
    );

    let first = deploy::run(&config).await.expect("first deployment");
    let second = deploy::run(&config).await.expect("second deployment");
    assert_ne!(first, second);
}
