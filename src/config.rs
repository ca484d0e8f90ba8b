// src/config.rs

use crate::error::DeployError;
use dotenv::dotenv;
use std::{env, path::PathBuf};
use tracing::debug;

pub const DEFAULT_ARTIFACT_NAME: &str = "Casino2";
pub const DEFAULT_ARTIFACTS_DIR: &str = "./artifacts";
pub const DEFAULT_CONFIRMATION_TIMEOUT_SECS: u64 = 120;

/// Explicit deployment configuration. `from_env` fills it from `.env` /
/// the process environment; tests construct it directly.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    // Network & Keys
    pub http_rpc_url: String,
    pub private_key: String,

    // Artifact resolution
    pub artifact_name: String,
    pub artifacts_dir: PathBuf,

    // Confirmation wait
    pub confirmation_timeout_secs: u64,
}

impl DeployConfig {
    pub fn from_env() -> Result<Self, DeployError> {
        dotenv().ok();
        let config = Self::from_vars(|var| env::var(var).ok())?;
        // Key material stays out of the logs.
        debug!(
            rpc = %config.http_rpc_url,
            artifact = %config.artifact_name,
            artifacts_dir = ?config.artifacts_dir,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Builds the config from a variable lookup. Split out so tests can
    /// feed variables without mutating the process environment.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, DeployError> {
        let require = |var: &str| -> Result<String, DeployError> {
            match get(var) {
                Some(val) if !val.is_empty() => Ok(val),
                _ => Err(DeployError::Config(format!("{var} must be set"))),
            }
        };
        let parse_u64 = |var: &str, default: u64| -> u64 {
            get(var)
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(default)
        };

        let http_rpc_url = require("HTTP_RPC_URL")?;
        let private_key = require("LOCAL_PRIVATE_KEY")?;
        let artifact_name =
            get("ARTIFACT_NAME").unwrap_or_else(|| DEFAULT_ARTIFACT_NAME.to_string());
        let artifacts_dir = PathBuf::from(
            get("ARTIFACTS_DIR").unwrap_or_else(|| DEFAULT_ARTIFACTS_DIR.to_string()),
        );
        let confirmation_timeout_secs =
            parse_u64("CONFIRMATION_TIMEOUT_SECS", DEFAULT_CONFIRMATION_TIMEOUT_SECS);

        Ok(DeployConfig {
            http_rpc_url,
            private_key,
            artifact_name,
            artifacts_dir,
            confirmation_timeout_secs,
        })
    }
}
