use crate::constants::{DEFAULT_MODEL, PROMPTBAR_CLI};
use anyhow::Context;
use confy::ConfyError;
use promptbar_core::file_storage::FileStorage;
use promptbar_core::model::{Model, ModelId};
use serde::{Deserialize, Serialize};
use std::env::home_dir;
use std::path::PathBuf;

#[derive(Serialize, Deserialize)]
pub struct PromptbarCliConfig {
    pub base_path: String,
    /// Model bound to new and seeded prompts. Empty disables both.
    pub default_model: String,
}

impl Default for PromptbarCliConfig {
    fn default() -> Self {
        let base_path = home_dir()
            .map(|p| p.join("promptbar"))
            .unwrap_or_else(|| PathBuf::from("promptbar"));

        Self {
            base_path: base_path.display().to_string(),
            default_model: String::from(DEFAULT_MODEL),
        }
    }
}

pub fn load_config() -> PromptbarCliConfig {
    let config: Result<PromptbarCliConfig, ConfyError> = confy::load(PROMPTBAR_CLI, None);
    match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Problem loading config ({}). Exiting...", e);
            std::process::exit(exitcode::CONFIG);
        }
    }
}

pub fn get_storage(config: &PromptbarCliConfig, storage_path: Option<String>) -> FileStorage {
    FileStorage {
        base_path: PathBuf::from(storage_path.unwrap_or_else(|| config.base_path.clone())),
    }
}

/// Resolves the default model, `None` when it is unset.
pub fn resolve_model(
    config: &PromptbarCliConfig,
    model: Option<String>,
) -> anyhow::Result<Option<Model>> {
    let model_id = model.unwrap_or_else(|| config.default_model.clone());
    let model_id = model_id.trim();
    if model_id.is_empty() {
        return Ok(None);
    }

    let id: ModelId = model_id
        .parse()
        .with_context(|| format!("invalid default model '{}'", model_id))?;
    Ok(Some(Model::from_id(id)))
}
