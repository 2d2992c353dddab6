//! Humor template registry.
//!
//! The catalog is a constant, ordered table. Order is display order and key
//! uniqueness is checked by the tests below. Adding a template only touches
//! `catalog.rs`; composers read whatever the table carries.

use serde::Serialize;

use crate::errors::JokeError;

mod catalog;

pub use catalog::BUILTIN_TEMPLATES;

/// One few-shot pair shown to the remote model.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct JokeExample {
    pub input: &'static str,
    pub joke: &'static str,
}

/// Fixed sentences used by the local composer.
///
/// Every `setup` line contains a `{seed}` placeholder; one of `endings` is
/// appended at random.
#[derive(Debug, Clone, Copy)]
pub struct Phrasebook {
    pub setup: &'static [&'static str],
    pub endings: &'static [&'static str],
}

/// A named humor style. Immutable and `'static`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HumorTemplate {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub prompt_focus: &'static str,
    pub examples: &'static [JokeExample],
    #[serde(skip)]
    pub phrasebook: Phrasebook,
}

/// Ordered lookup table over a static slice of templates.
#[derive(Debug, Clone, Copy)]
pub struct TemplateRegistry {
    templates: &'static [HumorTemplate],
}

impl TemplateRegistry {
    pub const fn new(templates: &'static [HumorTemplate]) -> Self {
        Self { templates }
    }

    /// The registry shipped with the service.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_TEMPLATES)
    }

    pub fn list(&self) -> &'static [HumorTemplate] {
        self.templates
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.templates.iter().map(|t| t.key).collect()
    }

    pub fn get(&self, key: &str) -> Result<&'static HumorTemplate, JokeError> {
        self.templates
            .iter()
            .find(|t| t.key == key)
            .ok_or_else(|| JokeError::NotFound(format!("Unknown template key: {key}")))
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_every_listed_key_resolves_to_itself() {
        let registry = TemplateRegistry::builtin();
        for key in registry.keys() {
            assert_eq!(registry.get(key).unwrap().key, key);
        }
    }

    #[test]
    fn test_unknown_key_is_not_found() {
        let err = TemplateRegistry::builtin().get("nonexistent-key").unwrap_err();
        assert!(matches!(err, JokeError::NotFound(_)));
        assert!(err.to_string().contains("nonexistent-key"));
    }

    #[test]
    fn test_keys_are_unique() {
        let keys = TemplateRegistry::builtin().keys();
        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len(), "duplicate template key in catalog");
    }

    #[test]
    fn test_display_order_is_stable() {
        let registry = TemplateRegistry::builtin();
        let keys = registry.keys();
        assert_eq!(keys.first(), Some(&"domheid"));
        assert_eq!(keys.last(), Some(&"antihumor"));
        assert_eq!(keys.len(), 14);
        let listed: Vec<_> = registry.list().iter().map(|t| t.key).collect();
        assert_eq!(listed, keys);
    }

    #[test]
    fn test_catalog_entries_are_usable_by_both_composers() {
        for template in TemplateRegistry::builtin().list() {
            assert!(!template.name.is_empty());
            assert!(!template.description.is_empty());
            assert!(!template.prompt_focus.is_empty());
            assert!(!template.examples.is_empty(), "{} has no examples", template.key);
            let book = &template.phrasebook;
            assert!(
                (2..=3).contains(&book.setup.len()),
                "{} needs 2-3 setup lines",
                template.key
            );
            assert!(
                (2..=3).contains(&book.endings.len()),
                "{} needs 2-3 endings",
                template.key
            );
            assert!(
                book.setup.iter().any(|line| line.contains("{seed}")),
                "{} never mentions the seed",
                template.key
            );
        }
    }

    #[test]
    fn test_empty_registry_lists_nothing_and_finds_nothing() {
        let registry = TemplateRegistry::new(&[]);
        assert!(registry.list().is_empty());
        assert!(registry.keys().is_empty());
        assert!(matches!(registry.get("domheid"), Err(JokeError::NotFound(_))));
    }
}
