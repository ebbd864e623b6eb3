//! # Default Prompt Catalog
//!
//! The built-in prompts offered to every user. Each entry has a permanently fixed id, which is
//! what seeding uses to recognise an entry the user already has. Ids are never reassigned: to
//! retire an entry, move its id into [`RESERVED_IDS`] instead of deleting it.

use crate::model::Model;
use crate::prompt::Prompt;

pub const TRANSLATOR_ID: &str = "d804fdf8-e10f-45c8-9a10-2ec3906cad2d";
pub const TRAVEL_GUIDE_ID: &str = "264ed64a-f968-4320-a675-51c36f1a8410";

/// Ids set aside for future or retired entries. They must never be handed out to anything else.
pub const RESERVED_IDS: [&str; 6] = [
    "b1400913-69b9-4b8d-8e36-51c1fed4e8de",
    "bc03b874-b689-4b51-891c-e8b13fb00629",
    "269906b3-e694-4015-9369-3ecb7a08b9de",
    "99c15c9e-e825-4816-977f-2b68792392f2",
    "56eb2605-7d05-4a59-8b6e-2234393fb8f1",
    "7d9908c9-0f47-45c0-b764-af5f1bd3548e",
];

struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    content: &'static str,
}

const ENTRIES: [CatalogEntry; 2] = [
    CatalogEntry {
        id: TRANSLATOR_ID,
        name: "翻译官",
        description: "使用更高级的用法翻译你的句子为英文",
        content: "I want you to act as an English translator, spelling corrector and improver. I will speak to you in any language and you will detect the language, translate it and answer in the corrected and improved version of my text, in English. I want you to replace my simplified A0-level words and sentences with more beautiful and elegant, upper level English words and sentences. Keep the meaning same, but make them more literary. I want you to only reply the correction, the improvements and nothing else, do not write explanations. My first sentence is “{{ 内容 }}”",
    },
    CatalogEntry {
        id: TRAVEL_GUIDE_ID,
        name: "导游",
        description: "帮你规划旅行路线，可以问他：“我在北京，我想去故宫游玩”",
        content: "I want you to act as a travel guide. I will write you my location and you will suggest a place to visit near my location. In some cases, I will also give you the type of places I will visit. You will also suggest me places of similar type that are close to my first location. My first suggestion request is “{{ 旅行问题 }}”",
    },
];

/// Returns the catalog, in declaration order, bound to `model`.
pub fn catalog_for(model: &Model) -> Vec<Prompt> {
    ENTRIES
        .iter()
        .map(|entry| Prompt {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            description: entry.description.to_string(),
            content: entry.content.to_string(),
            model: model.clone(),
            folder_id: None,
        })
        .collect()
}

pub fn is_catalog_id(id: &str) -> bool {
    ENTRIES.iter().any(|entry| entry.id == id)
}

pub fn is_reserved(id: &str) -> bool {
    RESERVED_IDS.contains(&id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelId;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_order_and_ids() {
        let catalog = catalog_for(&Model::from_id(ModelId::Gpt35Turbo));
        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(vec![TRANSLATOR_ID, TRAVEL_GUIDE_ID], ids);
    }

    #[test]
    fn test_catalog_binds_model() {
        let model = Model::from_id(ModelId::Gpt4_32k);
        for prompt in catalog_for(&model) {
            assert_eq!(model, prompt.model);
            assert!(prompt.folder_id.is_none());
        }
    }

    #[test]
    fn test_catalog_is_deterministic() {
        let model = Model::from_id(ModelId::Gpt4);
        assert_eq!(catalog_for(&model), catalog_for(&model));
    }

    #[test]
    fn test_catalog_entries_are_templates() {
        for prompt in catalog_for(&Model::from_id(ModelId::Gpt4)) {
            let template = prompt.template().expect("catalog content should parse");
            assert_eq!(1, template.variables().len());
        }
    }

    #[test]
    fn test_ids_are_unique_and_not_reserved() {
        let mut seen = HashSet::new();
        for entry in ENTRIES.iter() {
            assert!(seen.insert(entry.id), "duplicate catalog id {}", entry.id);
            assert!(!is_reserved(entry.id));
        }
        for id in RESERVED_IDS {
            assert!(seen.insert(id), "duplicate reserved id {}", id);
        }
    }

    #[test]
    fn test_is_catalog_id() {
        assert!(is_catalog_id(TRANSLATOR_ID));
        assert!(is_catalog_id(TRAVEL_GUIDE_ID));
        assert!(!is_catalog_id(RESERVED_IDS[0]));
        assert!(!is_catalog_id("not-an-id"));
    }
}
