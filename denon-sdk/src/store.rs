//! Persisted input names
//!
//! One flat JSON object per receiver mapping the configured input reference
//! to the name the user gave it. The whole file is rewritten on every
//! rename; there is no locking, so two processes writing the same file race.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::SdkError;

/// File-backed reference→name map for one receiver
#[derive(Debug, Clone)]
pub struct InputNameStore {
    path: PathBuf,
}

impl InputNameStore {
    /// Store for `host` inside `dir`, creating `dir` if needed.
    ///
    /// The file is `inputs_{host without dots}.json`.
    pub fn open(dir: &Path, host: &str) -> Self {
        if let Err(e) = fs::create_dir_all(dir) {
            tracing::debug!("Can not create storage directory {}: {}", dir.display(), e);
        }

        Self {
            path: dir.join(file_name_for_host(host)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored names; a missing or corrupt file yields an empty map
    pub fn load(&self) -> BTreeMap<String, String> {
        match self.try_load() {
            Ok(names) => names,
            Err(e) => {
                tracing::debug!("Inputs file {} not loaded: {}", self.path.display(), e);
                BTreeMap::new()
            }
        }
    }

    /// Overwrite the file with `names`; failures are logged only
    pub fn save(&self, names: &BTreeMap<String, String>) -> bool {
        match self.try_save(names) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("Can not write inputs file {}: {}", self.path.display(), e);
                false
            }
        }
    }

    fn try_load(&self) -> Result<BTreeMap<String, String>, SdkError> {
        let json = fs::read_to_string(&self.path).map_err(|e| SdkError::Storage(e.to_string()))?;
        serde_json::from_str(&json).map_err(|e| SdkError::Storage(e.to_string()))
    }

    fn try_save(&self, names: &BTreeMap<String, String>) -> Result<(), SdkError> {
        let json = serde_json::to_string(names).map_err(|e| SdkError::Storage(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| SdkError::Storage(e.to_string()))
    }
}

fn file_name_for_host(host: &str) -> String {
    format!("inputs_{}.json", host.replace('.', ""))
}
