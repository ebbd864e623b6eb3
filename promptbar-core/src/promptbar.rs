//! # Promptbar
//!
//! The operations behind the Promptbar side panel: listing and searching prompts, creating,
//! editing, deleting and filing them, and seeding the built-in defaults.
//!
//! Every change writes the full collection back through [`PromptStore::save_prompts`]. Edits
//! aimed at an unknown id change nothing and write nothing.

use crate::gate::{InitializationGate, SeedingState};
use crate::model::Model;
use crate::prompt::Prompt;
use crate::seeding::{SeedOutcome, seed};
use crate::storage::{FlagStore, PromptStore};
use std::error::Error;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum PromptbarError {
    #[error("Prompt storage error: {0}")]
    Storage(#[source] Box<dyn Error + Send + Sync>),
    #[error("Flag storage error: {0}")]
    Flags(#[source] Box<dyn Error + Send + Sync>),
}

pub struct Promptbar<S: PromptStore + FlagStore> {
    store: S,
    prompts: Vec<Prompt>,
    default_model: Option<Model>,
    search_term: String,
}

impl<S: PromptStore + FlagStore> Promptbar<S> {
    /// Loads the stored collection. Without a default model, prompts can still be listed, edited
    /// and deleted, but nothing new can be created or seeded.
    pub fn open(store: S, default_model: Option<Model>) -> Result<Self, PromptbarError> {
        let prompts = store
            .load_prompts()
            .map_err(|e| PromptbarError::Storage(Box::new(e)))?;
        debug!(count = prompts.len(), "loaded prompts");

        Ok(Self {
            store,
            prompts,
            default_model,
            search_term: String::new(),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn get(&self, id: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == id)
    }

    pub fn default_model(&self) -> Option<&Model> {
        self.default_model.as_ref()
    }

    /// Startup seeding, run once per installation.
    ///
    /// Seeds and persists the defaults, then sets the gate, unless `state` says this already
    /// happened. Returns `None` when nothing was attempted. Without a default model the gate is
    /// left unset so that a later start can still seed.
    pub fn initialize(
        &mut self,
        state: SeedingState,
    ) -> Result<Option<SeedOutcome>, PromptbarError> {
        if state.has_run {
            debug!("default prompts already seeded on this installation");
            return Ok(None);
        }

        let Some(outcome) = self.add_default_prompts()? else {
            debug!("no default model configured, postponing default prompts");
            return Ok(None);
        };

        InitializationGate::new(&self.store)
            .mark_run()
            .map_err(|e| PromptbarError::Flags(Box::new(e)))?;

        Ok(Some(outcome))
    }

    /// Merges the default catalog into the collection, whatever the gate says.
    pub fn add_default_prompts(&mut self) -> Result<Option<SeedOutcome>, PromptbarError> {
        let Some(model) = &self.default_model else {
            return Ok(None);
        };

        let outcome = seed(&self.prompts, model);
        if outcome.inserted > 0 {
            self.prompts = outcome.prompts.clone();
        }
        self.save()?;

        Ok(Some(outcome))
    }

    /// Appends a blank prompt named after its position, e.g. "Prompt 3".
    pub fn create_prompt(&mut self) -> Result<Option<Prompt>, PromptbarError> {
        let Some(model) = &self.default_model else {
            return Ok(None);
        };

        let prompt = Prompt::new(format!("Prompt {}", self.prompts.len() + 1), model.clone());
        self.prompts.push(prompt.clone());
        self.save()?;

        info!(id = %prompt.id, name = %prompt.name, "created prompt");
        Ok(Some(prompt))
    }

    /// Replaces the prompt with the same id, keeping its position.
    pub fn update_prompt(&mut self, prompt: Prompt) -> Result<bool, PromptbarError> {
        let mut replaced = false;
        for existing in self.prompts.iter_mut().filter(|p| p.id == prompt.id) {
            *existing = prompt.clone();
            replaced = true;
        }
        if replaced {
            self.save()?;
        }

        Ok(replaced)
    }

    pub fn delete_prompt(&mut self, id: &str) -> Result<bool, PromptbarError> {
        let before = self.prompts.len();
        self.prompts.retain(|p| p.id != id);

        let removed = self.prompts.len() != before;
        if removed {
            self.save()?;
            info!(id, "deleted prompt");
        }
        Ok(removed)
    }

    /// Files a prompt into a folder, or takes it out of any folder with `None`.
    pub fn move_to_folder(
        &mut self,
        id: &str,
        folder_id: Option<String>,
    ) -> Result<bool, PromptbarError> {
        let Some(prompt) = self.get(id).cloned() else {
            return Ok(false);
        };

        self.update_prompt(Prompt { folder_id, ..prompt })
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn filtered_prompts(&self) -> Vec<&Prompt> {
        if self.search_term.is_empty() {
            return self.prompts.iter().collect();
        }

        self.prompts
            .iter()
            .filter(|p| p.matches(&self.search_term))
            .collect()
    }

    /// Filtered prompts that are not inside any folder.
    pub fn unfiled_prompts(&self) -> Vec<&Prompt> {
        self.filtered_prompts()
            .into_iter()
            .filter(|p| p.folder_id.is_none())
            .collect()
    }

    fn save(&self) -> Result<(), PromptbarError> {
        self.store
            .save_prompts(&self.prompts)
            .map_err(|e| PromptbarError::Storage(Box::new(e)))
    }
}
