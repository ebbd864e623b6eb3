//! # promptbar Core
//!
//! This crate provides the core functionality behind the Promptbar, the side panel of a chat
//! application where users keep reusable prompt presets.
//!
//! Besides the usual create/edit/delete/search operations, the Promptbar seeds a small catalog of
//! built-in prompts the first time it runs. Seeding is an additive merge keyed by prompt id, so it
//! never touches prompts the user already has (including edited copies of built-in prompts).
//!
//! # Modules
//!
//! - [`model`] - Model identifiers and descriptors attached to prompts
//! - [`prompt`] - The prompt record and its `{{ variable }}` templates
//! - [`parser`] - Template parsing functionality
//! - [`catalog`] - The built-in default prompts
//! - [`seeding`] - Merging the default prompts into a collection
//! - [`gate`] - The persisted "defaults already seeded" flag
//! - [`storage`] - Storage traits for prompts and flags
//! - [`file_storage`] - JSON file implementation of the storage traits
//! - [`promptbar`] - The panel operations tying everything together
//!
//! # Examples
//!
//! ```rust
//! use promptbar_core::file_storage::FileStorage;
//! use promptbar_core::gate::{InitializationGate, SeedingState};
//! use promptbar_core::model::{Model, ModelId};
//! use promptbar_core::promptbar::Promptbar;
//! use tempfile::TempDir;
//!
//! let temp_dir = TempDir::new().unwrap();
//! let storage = FileStorage {
//!     base_path: temp_dir.path().to_path_buf(),
//! };
//!
//! let state = SeedingState::load(&InitializationGate::new(&storage)).unwrap();
//! let model = Model::from_id(ModelId::Gpt35Turbo);
//! let mut promptbar = Promptbar::open(storage, Some(model)).unwrap();
//!
//! let outcome = promptbar.initialize(state).unwrap().expect("defaults seeded");
//! assert_eq!(2, outcome.inserted);
//! ```

pub mod catalog;
pub mod file_storage;
pub mod gate;
pub mod model;
pub mod parser;
pub mod promptbar;
pub mod prompt;
pub mod seeding;
pub mod storage;
