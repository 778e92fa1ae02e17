//! TemplateRegistry - id → template blueprint (DashMap)
//!
//! Registration is idempotent: the first blueprint registered under an id
//! stays, later registrations for the same id are ignored.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dom::Fragment;
use crate::error::Result;

use super::validate::validate_template_id;

/// A named template blueprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub content: Fragment,
}

impl Template {
    pub fn new(id: impl Into<String>, content: Fragment) -> Self {
        Self {
            id: id.into(),
            content,
        }
    }
}

static GLOBAL: Lazy<Arc<TemplateRegistry>> = Lazy::new(|| Arc::new(TemplateRegistry::new()));

/// Thread-safe template registry
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    templates: DashMap<String, Arc<Template>>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry shared by everything that does not bring its own
    pub fn global() -> Arc<TemplateRegistry> {
        Arc::clone(&GLOBAL)
    }

    /// Register a template unless its id is taken
    ///
    /// Returns `true` if the template was inserted.
    pub fn register_once(&self, template: Template) -> Result<bool> {
        validate_template_id(&template.id)?;

        // Entry API keeps check-and-insert atomic
        match self.templates.entry(template.id.clone()) {
            Entry::Occupied(_) => {
                debug!(id = %template.id, "template already registered");
                Ok(false)
            }
            Entry::Vacant(e) => {
                debug!(id = %template.id, "template registered");
                e.insert(Arc::new(template));
                Ok(true)
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<Arc<Template>> {
        self.templates.get(id).map(|t| Arc::clone(t.value()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// Registered ids, sorted
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.templates.iter().map(|t| t.key().clone()).collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;

    fn template(id: &str, text: &str) -> Template {
        Template::new(id, Fragment::new(vec![Element::new("p").text(text).into()]))
    }

    #[test]
    fn register_once_is_idempotent() {
        let registry = TemplateRegistry::new();
        assert!(registry.register_once(template("card-template", "first")).unwrap());
        assert!(!registry.register_once(template("card-template", "second")).unwrap());

        let stored = registry.get("card-template").unwrap();
        assert_eq!(stored.content.text_content(), "first");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_rejects_invalid_ids() {
        let registry = TemplateRegistry::new();
        let err = registry.register_once(template("Bad_Id", "x")).unwrap_err();
        assert!(err.to_string().contains("SKY-003"));
        assert!(registry.is_empty());
    }

    #[test]
    fn ids_are_sorted() {
        let registry = TemplateRegistry::new();
        registry.register_once(template("b-template", "b")).unwrap();
        registry.register_once(template("a-template", "a")).unwrap();
        assert_eq!(registry.ids(), vec!["a-template", "b-template"]);
    }

    #[test]
    fn global_is_shared() {
        let a = TemplateRegistry::global();
        let b = TemplateRegistry::global();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn get_missing_is_none() {
        let registry = TemplateRegistry::new();
        assert!(registry.get("nope").is_none());
        assert!(!registry.contains("nope"));
    }
}
