// src/lib.rs
// Library interface for the Casino2 deployment tool.

pub mod artifact;
pub mod config;
pub mod deploy;
pub mod error;

// Re-export the key types so tests and the binary import from the root.
pub use artifact::Artifact;
pub use config::DeployConfig;
pub use deploy::{connect, deploy_artifact, run, DeployClient};
pub use error::DeployError;
