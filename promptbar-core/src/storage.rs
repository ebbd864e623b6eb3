//! # Prompt Storage
//!
//! This module defines the storage traits the Promptbar persists through.
//!
//! - [`PromptStore`] - Loads and saves the whole prompt collection, preserving its order
//! - [`FlagStore`] - A small string key/value area for client settings such as the
//!   [initialization gate](crate::gate)

use crate::prompt::Prompt;

pub trait PromptStore {
    type Error: std::error::Error + Send + Sync + 'static;

    fn load_prompts(&self) -> Result<Vec<Prompt>, Self::Error>;
    fn save_prompts(&self, prompts: &[Prompt]) -> Result<(), Self::Error>;
}

pub trait FlagStore {
    type Error: std::error::Error + Send + Sync + 'static;

    fn get_flag(&self, key: &str) -> Result<Option<String>, Self::Error>;
    fn set_flag(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}
