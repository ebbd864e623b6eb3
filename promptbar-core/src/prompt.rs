//! # Prompts
//!
//! The [`Prompt`] record kept in the Promptbar, and [`PromptTemplate`], the parsed form of its
//! content. Prompt content may contain `{{ variable }}` placeholders which the user fills in
//! before the prompt is sent.

use crate::model::Model;
use crate::parser::parse_template;
use nom::Err as NomErr;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
#[error("Parse template error: {message}")]
pub struct ParseTemplateError {
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderTemplateError {
    #[error("Missing variable: {0}")]
    MissingVariable(String),
    #[error("{0}")]
    Parse(String),
}

impl From<ParseTemplateError> for RenderTemplateError {
    fn from(err: ParseTemplateError) -> Self {
        RenderTemplateError::Parse(err.to_string())
    }
}

/// A user-authored (or built-in) prompt preset.
///
/// `id` is the prompt's identity: it is globally unique and never changes once the prompt exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: String,
    pub name: String,
    pub description: String,
    pub content: String,
    pub model: Model,
    pub folder_id: Option<String>,
}

impl Prompt {
    /// Creates a blank prompt with a fresh id and no folder.
    pub fn new(name: String, model: Model) -> Prompt {
        Prompt {
            id: Uuid::new_v4().to_string(),
            name,
            description: String::new(),
            content: String::new(),
            model,
            folder_id: None,
        }
    }

    /// Case-insensitive search over name, description and content.
    pub fn matches(&self, term: &str) -> bool {
        let searchable =
            format!("{} {} {}", self.name, self.description, self.content).to_lowercase();
        searchable.contains(&term.to_lowercase())
    }

    pub fn template(&self) -> Result<PromptTemplate, ParseTemplateError> {
        PromptTemplate::parse(&self.content)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PromptTemplatePart {
    Literal(String),
    Variable(String),
}

#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub parts: Vec<PromptTemplatePart>,
}

impl PromptTemplate {
    pub fn parse(content: &str) -> Result<PromptTemplate, ParseTemplateError> {
        match parse_template(content) {
            Ok((_, template)) => Ok(template),
            Err(NomErr::Error(e)) | Err(NomErr::Failure(e)) => Err(ParseTemplateError {
                message: format!("Failed to parse template: {:?}", e.code),
            }),
            Err(NomErr::Incomplete(_)) => Err(ParseTemplateError {
                message: "Failed to parse template: incomplete input".to_string(),
            }),
        }
    }

    /// Variable names in order of first appearance, without duplicates.
    pub fn variables(&self) -> Vec<&String> {
        let mut variables: Vec<&String> = Vec::new();
        for part in &self.parts {
            if let PromptTemplatePart::Variable(name) = part {
                if !variables.contains(&name) {
                    variables.push(name);
                }
            }
        }
        variables
    }

    pub fn render(&self, values: &HashMap<String, String>) -> Result<String, RenderTemplateError> {
        let mut result = String::new();

        for part in &self.parts {
            match part {
                PromptTemplatePart::Literal(text) => result.push_str(text),
                PromptTemplatePart::Variable(name) => match values.get(name) {
                    Some(value) => result.push_str(value),
                    None => return Err(RenderTemplateError::MissingVariable(name.clone())),
                },
            }
        }

        Ok(result)
    }
}
