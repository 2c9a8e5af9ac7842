//! The flat JSON address book recording every contract this tooling deploys,
//! keyed by network name then contract name. Single operator, single
//! process; the save goes through a temp file and rename so a crash never
//! leaves a half-written book behind.

use anyhow::{Context, Result};
use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::info;

pub const DEPLOYED_CONTRACTS_FILE: &str = "deployed_contracts.json";

pub type ContractList = BTreeMap<String, BTreeMap<String, String>>;

pub struct AddressBook {
    path: PathBuf,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::at(DEPLOYED_CONTRACTS_FILE)
    }

    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Loads the book; a missing or empty file is an empty book.
    pub fn load(&self) -> Result<ContractList> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(ContractList::new()),
            Ok(contents) => serde_json::from_str(&contents)
                .with_context(|| format!("Malformed address book at {}", self.path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ContractList::new()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read {}", self.path.display()))
            }
        }
    }

    pub fn get(&self, network: &str, name: &str) -> Result<String> {
        self.load()?
            .get(network)
            .and_then(|contracts| contracts.get(name))
            .cloned()
            .with_context(|| format!("No {} recorded for network {}", name, network))
    }

    /// Records an address, overwriting any previous entry for the same
    /// (network, name) key.
    pub fn insert(&self, network: &str, name: &str, address: &str) -> Result<()> {
        let mut book = self.load()?;
        book.entry(network.to_string())
            .or_default()
            .insert(name.to_string(), address.to_string());
        self.save(&book)?;
        info!(network = network, name = name, address = address, "Recorded deployed contract");
        Ok(())
    }

    fn save(&self, book: &ContractList) -> Result<()> {
        let contents = serde_json::to_string_pretty(book)? + "\n";
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}
