//! # Models
//!
//! Identifiers and descriptors of the chat models a prompt can be bound to.
//!
//! Prompts carry a full [`Model`] descriptor rather than just its id, so that a stored collection
//! is self-describing. The Promptbar itself never interprets the descriptor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown model id: {0}")]
    UnknownModel(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelId {
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
    #[serde(rename = "gpt-35-az")]
    Gpt35Az,
    #[serde(rename = "gpt-4")]
    Gpt4,
    #[serde(rename = "gpt-4-32k")]
    Gpt4_32k,
}

impl ModelId {
    pub const ALL: [ModelId; 4] = [
        ModelId::Gpt35Turbo,
        ModelId::Gpt35Az,
        ModelId::Gpt4,
        ModelId::Gpt4_32k,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Gpt35Turbo => "gpt-3.5-turbo",
            ModelId::Gpt35Az => "gpt-35-az",
            ModelId::Gpt4 => "gpt-4",
            ModelId::Gpt4_32k => "gpt-4-32k",
        }
    }

    pub fn descriptor(&self) -> Model {
        Model::from_id(*self)
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ModelError::UnknownModel(s.to_string()))
    }
}

/// A resolved model descriptor, as stored inside every prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: ModelId,
    pub name: String,
    /// Maximum prompt length in characters.
    pub max_length: u32,
    pub token_limit: u32,
}

impl Model {
    pub fn from_id(id: ModelId) -> Model {
        let (name, max_length, token_limit) = match id {
            ModelId::Gpt35Turbo | ModelId::Gpt35Az => ("GPT-3.5", 12000, 4000),
            ModelId::Gpt4 => ("GPT-4", 24000, 8000),
            ModelId::Gpt4_32k => ("GPT-4-32K", 96000, 32000),
        };

        Model {
            id,
            name: name.to_string(),
            max_length,
            token_limit,
        }
    }
}
