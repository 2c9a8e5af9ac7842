//! Reading contract creation bytecode out of compiler build artifacts. The
//! setup contract is compiled elsewhere; the deploy script only needs its
//! creation code.

use crate::encoding::hex_to_bytes;
use alloy::primitives::Bytes;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Deserialize)]
struct Artifact {
    bytecode: String,
}

/// Reads creation code from either a hardhat-style artifact JSON (its
/// `bytecode` field) or a file holding the raw hex string.
pub fn read_creation_code(path: impl AsRef<Path>) -> Result<Bytes> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read artifact {}", path.display()))?;
    let contents = contents.trim();

    let bytecode = if contents.starts_with('{') {
        let artifact: Artifact = serde_json::from_str(contents)
            .with_context(|| format!("Malformed artifact {}", path.display()))?;
        artifact.bytecode
    } else {
        contents.to_string()
    };

    let bytes = hex_to_bytes(&bytecode)
        .with_context(|| format!("Invalid bytecode in {}", path.display()))?;
    if bytes.is_empty() {
        anyhow::bail!("Artifact {} contains no bytecode", path.display());
    }
    Ok(bytes.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_raw_hex_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("LensVotingSetup.bin");
        std::fs::write(&path, "0x6080604052\n").unwrap();

        let code = read_creation_code(&path).unwrap();
        assert_eq!(code.as_ref(), &[0x60, 0x80, 0x60, 0x40, 0x52]);
    }

    #[test]
    fn reads_hardhat_artifacts() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("LensVotingSetup.json");
        std::fs::write(
            &path,
            r#"{"contractName": "LensVotingSetup", "bytecode": "0x600160005260206000f3"}"#,
        )
        .unwrap();

        let code = read_creation_code(&path).unwrap();
        assert_eq!(code.len(), 10);
    }

    #[test]
    fn rejects_empty_and_malformed_bytecode() {
        let dir = tempdir().unwrap();
        let empty = dir.path().join("empty.bin");
        std::fs::write(&empty, "0x").unwrap();
        assert!(read_creation_code(&empty).is_err());

        let odd = dir.path().join("odd.bin");
        std::fs::write(&odd, "0x123").unwrap();
        assert!(read_creation_code(&odd).is_err());
    }
}
