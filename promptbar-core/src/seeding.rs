//! # Seeding
//!
//! Merges the [default catalog](crate::catalog) into an existing prompt collection.
//!
//! The merge is append-only and keyed purely on prompt id:
//!
//! - existing prompts come first, untouched and in their original order;
//! - catalog entries whose id is not yet present follow, in catalog order;
//! - a catalog entry whose id is already taken is skipped, even if the stored prompt has been
//!   edited and no longer looks like the catalog entry. This also means a user prompt that happens
//!   to reuse a catalog id blocks that entry for good.
//!
//! Seeding the output a second time inserts nothing.

use crate::catalog::catalog_for;
use crate::model::Model;
use crate::prompt::Prompt;
use std::collections::HashSet;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct SeedOutcome {
    /// The existing prompts followed by the newly inserted defaults.
    pub prompts: Vec<Prompt>,
    pub inserted: usize,
}

impl SeedOutcome {
    /// The notice shown to the user after seeding.
    pub fn message(&self) -> String {
        match self.inserted {
            0 => "All default prompts already exist, nothing to add".to_string(),
            1 => "Added 1 default prompt".to_string(),
            n => format!("Added {} default prompts", n),
        }
    }
}

pub fn seed(existing: &[Prompt], model: &Model) -> SeedOutcome {
    let mut ids: HashSet<String> = existing.iter().map(|p| p.id.clone()).collect();
    let mut prompts = existing.to_vec();
    let mut inserted = 0;

    for prompt in catalog_for(model) {
        if ids.contains(&prompt.id) {
            debug!(id = %prompt.id, "default prompt already present, skipping");
            continue;
        }

        ids.insert(prompt.id.clone());
        prompts.push(prompt);
        inserted += 1;
    }

    info!(inserted, total = prompts.len(), model = %model.id, "seeded default prompts");
    SeedOutcome { prompts, inserted }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{TRANSLATOR_ID, TRAVEL_GUIDE_ID};
    use crate::model::ModelId;
    use pretty_assertions::assert_eq;

    fn model() -> Model {
        Model::from_id(ModelId::Gpt35Turbo)
    }

    fn user_prompt(id: &str, name: &str) -> Prompt {
        let mut prompt = Prompt::new(name.to_string(), Model::from_id(ModelId::Gpt4));
        prompt.id = id.to_string();
        prompt.content = format!("content of {}", name);
        prompt
    }

    fn ids(prompts: &[Prompt]) -> Vec<&str> {
        prompts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_seed_empty_collection() {
        let outcome = seed(&[], &model());

        assert_eq!(2, outcome.inserted);
        assert_eq!(catalog_for(&model()), outcome.prompts);
    }

    #[test]
    fn test_seed_empty_inserts_whole_catalog() {
        for id in ModelId::ALL {
            let model = Model::from_id(id);
            assert_eq!(catalog_for(&model).len(), seed(&[], &model).inserted);
        }
    }

    #[test]
    fn test_seed_appends_after_existing() {
        let existing = vec![user_prompt("u1", "first"), user_prompt("u2", "second")];
        let outcome = seed(&existing, &model());

        assert_eq!(2, outcome.inserted);
        assert_eq!(vec!["u1", "u2", TRANSLATOR_ID, TRAVEL_GUIDE_ID], ids(&outcome.prompts));
        assert_eq!(&existing[..], &outcome.prompts[..2]);
    }

    #[test]
    fn test_seed_keeps_user_edited_default() {
        let edited = user_prompt(TRANSLATOR_ID, "edited");
        let outcome = seed(&[edited.clone()], &model());

        assert_eq!(1, outcome.inserted);
        assert_eq!(2, outcome.prompts.len());
        assert_eq!(edited, outcome.prompts[0]);
        assert_eq!(catalog_for(&model())[1], outcome.prompts[1]);
    }

    #[test]
    fn test_seed_when_all_defaults_present() {
        let existing = vec![
            user_prompt(TRAVEL_GUIDE_ID, "guide, edited"),
            user_prompt("u1", "mine"),
            user_prompt(TRANSLATOR_ID, "translator, edited"),
        ];
        let outcome = seed(&existing, &model());

        assert_eq!(0, outcome.inserted);
        assert_eq!(existing, outcome.prompts);
    }

    #[test]
    fn test_seed_is_idempotent() {
        let existing = vec![user_prompt("u1", "mine")];
        let first = seed(&existing, &model());
        let second = seed(&first.prompts, &model());

        assert_eq!(0, second.inserted);
        assert_eq!(first.prompts, second.prompts);
    }

    #[test]
    fn test_seed_with_different_model_does_not_rebind_existing_defaults() {
        let first = seed(&[], &Model::from_id(ModelId::Gpt4));
        let second = seed(&first.prompts, &Model::from_id(ModelId::Gpt35Turbo));

        assert_eq!(0, second.inserted);
        assert!(second.prompts.iter().all(|p| p.model.id == ModelId::Gpt4));
    }

    #[test]
    fn test_seed_id_set_is_union() {
        let existing = vec![user_prompt("u1", "a"), user_prompt(TRAVEL_GUIDE_ID, "b")];
        let outcome = seed(&existing, &model());

        let result: HashSet<&str> = ids(&outcome.prompts).into_iter().collect();
        let expected: HashSet<&str> = ["u1", TRAVEL_GUIDE_ID, TRANSLATOR_ID].into_iter().collect();
        assert_eq!(expected, result);
        assert_eq!(result.len(), outcome.prompts.len());
    }

    #[test]
    fn test_seed_preserves_existing_duplicates() {
        let existing = vec![user_prompt("dup", "a"), user_prompt("dup", "b")];
        let outcome = seed(&existing, &model());

        assert_eq!(2, outcome.inserted);
        assert_eq!(&existing[..], &outcome.prompts[..2]);
    }

    #[test]
    fn test_seed_does_not_mutate_input() {
        let existing = vec![user_prompt("u1", "mine")];
        let snapshot = existing.clone();
        let _ = seed(&existing, &model());
        assert_eq!(snapshot, existing);
    }

    #[test]
    fn test_outcome_message() {
        let none = SeedOutcome { prompts: vec![], inserted: 0 };
        assert_eq!("All default prompts already exist, nothing to add", none.message());

        let one = SeedOutcome { prompts: vec![], inserted: 1 };
        assert_eq!("Added 1 default prompt", one.message());

        let two = seed(&[], &model());
        assert_eq!("Added 2 default prompts", two.message());
    }
}
