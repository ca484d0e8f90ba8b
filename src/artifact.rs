// src/artifact.rs

use crate::error::DeployError;
use ethers::{abi::Abi, types::Bytes};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// A compiled contract as the build toolchain left it on disk: the ABI
/// and the creation bytecode, keyed by contract name.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub contract_name: String,
    pub abi: Abi,
    pub bytecode: Bytes,
}

/// The relevant slice of a Hardhat-style combined artifact JSON.
/// Unknown fields (deployedBytecode, linkReferences, ...) are ignored.
#[derive(Debug, Deserialize)]
struct CombinedArtifact {
    abi: Abi,
    bytecode: String,
}

impl Artifact {
    /// Resolves the artifact for `name` under `dir`. Two layouts are
    /// understood: `<name>.json` (combined ABI + bytecode) and
    /// `<name>.bin` (raw hex creation code, with an optional
    /// `<name>.abi` next to it). Neither present is `ArtifactNotFound`.
    pub fn load(dir: impl AsRef<Path>, name: &str) -> Result<Self, DeployError> {
        let dir = dir.as_ref();

        let json_path = dir.join(format!("{name}.json"));
        if json_path.is_file() {
            debug!(path = ?json_path, "loading combined artifact");
            return Self::from_combined_json(&json_path, name);
        }

        let bin_path = dir.join(format!("{name}.bin"));
        if bin_path.is_file() {
            debug!(path = ?bin_path, "loading raw bytecode artifact");
            return Self::from_raw_bytecode(&bin_path, dir, name);
        }

        Err(DeployError::ArtifactNotFound {
            name: name.to_string(),
            dir: dir.to_path_buf(),
        })
    }

    fn from_combined_json(path: &Path, name: &str) -> Result<Self, DeployError> {
        let invalid = |reason: String| DeployError::InvalidArtifact {
            name: name.to_string(),
            reason,
        };

        let raw = fs::read_to_string(path)
            .map_err(|e| invalid(format!("failed to read {}: {e}", path.display())))?;
        let combined: CombinedArtifact = serde_json::from_str(&raw)
            .map_err(|e| invalid(format!("failed to parse {}: {e}", path.display())))?;
        let bytecode = decode_bytecode(&combined.bytecode)
            .map_err(|e| invalid(format!("bad bytecode in {}: {e}", path.display())))?;

        if bytecode.is_empty() {
            return Err(invalid("bytecode is empty".to_string()));
        }

        Ok(Artifact {
            contract_name: name.to_string(),
            abi: combined.abi,
            bytecode,
        })
    }

    fn from_raw_bytecode(bin_path: &Path, dir: &Path, name: &str) -> Result<Self, DeployError> {
        let invalid = |reason: String| DeployError::InvalidArtifact {
            name: name.to_string(),
            reason,
        };

        let bytecode_hex = fs::read_to_string(bin_path)
            .map_err(|e| invalid(format!("failed to read {}: {e}", bin_path.display())))?;
        let bytecode = decode_bytecode(&bytecode_hex)
            .map_err(|e| invalid(format!("bad bytecode in {}: {e}", bin_path.display())))?;
        if bytecode.is_empty() {
            return Err(invalid("bytecode is empty".to_string()));
        }

        // The ABI file is optional next to a raw .bin; an empty ABI is
        // enough for a contract deployed with no constructor arguments.
        let abi_path: PathBuf = dir.join(format!("{name}.abi"));
        let abi = if abi_path.is_file() {
            let abi_str = fs::read_to_string(&abi_path)
                .map_err(|e| invalid(format!("failed to read {}: {e}", abi_path.display())))?;
            serde_json::from_str(&abi_str)
                .map_err(|e| invalid(format!("failed to parse {}: {e}", abi_path.display())))?
        } else {
            Abi::default()
        };

        Ok(Artifact {
            contract_name: name.to_string(),
            abi,
            bytecode,
        })
    }
}

fn decode_bytecode(raw: &str) -> Result<Bytes, hex::FromHexError> {
    let cleaned = raw.trim().trim_start_matches("0x");
    hex::decode(cleaned).map(Bytes::from)
}
