// src/error.rs

use ethers::types::H256;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between reading the configuration and
/// receiving the deployment receipt. Each variant names the stage that
/// failed; the binary surfaces them all identically (stderr, exit 1),
/// but library callers can match on the stage.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("contract artifact `{name}` not found in `{}` (looked for {name}.json and {name}.bin)", .dir.display())]
    ArtifactNotFound { name: String, dir: PathBuf },

    #[error("artifact `{name}` is not deployable: {reason}")]
    InvalidArtifact { name: String, reason: String },

    #[error("provider error: {0}")]
    Rpc(String),

    #[error("deployment transaction rejected: {0}")]
    Submission(String),

    #[error("deployment transaction {tx_hash:?} reverted on-chain")]
    Reverted { tx_hash: H256 },

    #[error("deployment transaction {tx_hash:?} was dropped without a receipt")]
    Dropped { tx_hash: H256 },

    #[error("timed out after {secs}s waiting for confirmation of {tx_hash:?}")]
    ConfirmationTimeout { tx_hash: H256, secs: u64 },
}
