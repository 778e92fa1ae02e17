//! TemplateHost - clones registered templates for mounting

use std::sync::Arc;

use tracing::debug;

use crate::dom::Fragment;
use crate::error::{Result, SkyslotError};

use super::registry::TemplateRegistry;

/// Id a host falls back to when it names no template: `<tag>-template`
pub fn default_template_id(tag_name: &str) -> String {
    format!("{tag_name}-template")
}

/// Instantiates templates from an injected registry
#[derive(Debug, Clone)]
pub struct TemplateHost {
    registry: Arc<TemplateRegistry>,
}

impl TemplateHost {
    pub fn new(registry: Arc<TemplateRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<TemplateRegistry> {
        &self.registry
    }

    /// Deep-clone the template named by `template_id`, or `<tag>-template`
    ///
    /// A missing template is a configuration error; nothing falls back.
    pub fn instantiate(&self, template_id: Option<&str>, tag_name: &str) -> Result<Fragment> {
        let id = match template_id {
            Some(id) => id.to_string(),
            None => default_template_id(tag_name),
        };

        let template = self
            .registry
            .get(&id)
            .ok_or_else(|| SkyslotError::TemplateNotFound { id: id.clone() })?;

        debug!(%id, tag = tag_name, "instantiating template");
        Ok(template.content.clone())
    }
}
