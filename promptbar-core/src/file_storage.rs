//! # File Storage
//!
//! This module provides functionality for storing the Promptbar's state on the local filesystem.
//!
//! The whole prompt collection is kept in a single `prompts.json` file, as a JSON array in
//! collection order. Flags live next to it in `settings.json`, as a JSON object mapping keys to
//! string values. Both files are optional: a missing file reads as an empty collection or as "no
//! flags set". A damaged settings file, or a flag holding something other than a string, also
//! reads as unset.
//!
//! # Examples
//!
//! ```rust
//! use promptbar_core::file_storage::FileStorage;
//! use promptbar_core::model::{Model, ModelId};
//! use promptbar_core::prompt::Prompt;
//! use promptbar_core::storage::PromptStore;
//! use tempfile::TempDir;
//!
//! let temp_dir = TempDir::new().unwrap();
//! let storage = FileStorage {
//!     base_path: temp_dir.path().to_path_buf(),
//! };
//!
//! let prompt = Prompt::new("Prompt 1".to_string(), Model::from_id(ModelId::Gpt4));
//! storage.save_prompts(&[prompt]).expect("Failed to save prompts");
//! assert_eq!(1, storage.load_prompts().unwrap().len());
//! ```

use crate::prompt::Prompt;
use crate::storage::{FlagStore, PromptStore};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};
use std::{fs, io};
use thiserror::Error;
use tracing::{debug, warn};

pub const PROMPTS_FILE: &str = "prompts.json";
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Error)]
pub enum FileStorageError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Invalid base path: {0}")]
    InvalidBasePath(String),
}

/// A local file storage for the Promptbar.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// The base directory holding `prompts.json` and `settings.json`.
    pub base_path: PathBuf,
}

impl PromptStore for FileStorage {
    type Error = FileStorageError;

    /// Loads the prompt collection in stored order.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Prompt>)` - The stored prompts, or an empty vector if nothing was saved yet.
    /// * `FileStorageError` - If the file exists but cannot be read or parsed.
    fn load_prompts(&self) -> Result<Vec<Prompt>, FileStorageError> {
        Ok(self.read_json(PROMPTS_FILE)?.unwrap_or_default())
    }

    /// Saves the whole prompt collection, replacing what was stored before.
    ///
    /// If `base_path` doesn't exist, it is created first.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the prompts are saved correctly.
    /// * `FileStorageError::InvalidBasePath` - If `base_path` exists but is not a directory.
    fn save_prompts(&self, prompts: &[Prompt]) -> Result<(), FileStorageError> {
        debug!(count = prompts.len(), path = %self.base_path.display(), "saving prompts");
        self.write_json(PROMPTS_FILE, prompts)
    }
}

impl FlagStore for FileStorage {
    type Error = FileStorageError;

    /// Non-string values read as unset.
    fn get_flag(&self, key: &str) -> Result<Option<String>, FileStorageError> {
        let mut settings = self.read_settings()?;
        match settings.remove(key) {
            Some(Value::String(value)) => Ok(Some(value)),
            _ => Ok(None),
        }
    }

    fn set_flag(&self, key: &str, value: &str) -> Result<(), FileStorageError> {
        let mut settings = self.read_settings()?;
        settings.insert(key.to_string(), Value::String(value.to_string()));
        self.write_json(SETTINGS_FILE, &settings)
    }
}

impl FileStorage {
    pub fn ensure_base_directory_exists(&self) -> Result<(), FileStorageError> {
        if !self.base_path.exists() {
            create_dir_all(&self.base_path)?;
        } else if !self.base_path.is_dir() {
            return Err(FileStorageError::InvalidBasePath(
                self.base_path.display().to_string(),
            ));
        }
        Ok(())
    }

    pub fn prompts_path(&self) -> PathBuf {
        self.base_path.join(PROMPTS_FILE)
    }

    /// Reads `settings.json`. A file that is not a JSON object reads as empty and is replaced on
    /// the next write.
    fn read_settings(&self) -> Result<BTreeMap<String, Value>, FileStorageError> {
        match self.read_json::<BTreeMap<String, Value>>(SETTINGS_FILE) {
            Ok(settings) => Ok(settings.unwrap_or_default()),
            Err(FileStorageError::SerializationError(e)) => {
                warn!(error = %e, "ignoring unreadable settings file");
                Ok(BTreeMap::new())
            }
            Err(e) => Err(e),
        }
    }

    fn read_json<T: DeserializeOwned>(
        &self,
        file_name: &str,
    ) -> Result<Option<T>, FileStorageError> {
        let file_path = self.base_path.join(file_name);
        if !is_file(&file_path) {
            return Ok(None);
        }

        let content = fs::read_to_string(file_path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn write_json<T: Serialize + ?Sized>(
        &self,
        file_name: &str,
        value: &T,
    ) -> Result<(), FileStorageError> {
        self.ensure_base_directory_exists()?;

        let serialized_data = serde_json::to_string_pretty(value)?;
        fs::write(self.base_path.join(file_name), serialized_data)?;
        Ok(())
    }
}

fn is_file(path: &Path) -> bool {
    path.metadata().map(|m| m.is_file()).unwrap_or(false)
}
