//! Template files (YAML)
//!
//! ```yaml
//! templates:
//!   - id: compact-post-template
//!     content:
//!       - tag: p
//!         attrs: { data-key: record.text }
//!       - tag: img
//!         attrs: { data-key: author.avatar, data-role: image }
//!       - "♥ "
//!       - tag: span
//!         attrs: { data-key: likeCount }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{Result, SkyslotError};

use super::registry::{Template, TemplateRegistry};

#[derive(Debug, Deserialize)]
struct TemplateFile {
    #[serde(default)]
    templates: Vec<Template>,
}

/// Parse the templates declared in a YAML document
///
/// `origin` names the source in error messages.
pub fn parse_templates(yaml: &str, origin: &str) -> Result<Vec<Template>> {
    let file: TemplateFile = serde_yaml::from_str(yaml).map_err(|e| SkyslotError::TemplateParse {
        path: origin.to_string(),
        details: e.to_string(),
    })?;
    Ok(file.templates)
}

/// Load a template file into the registry
///
/// Returns the ids that were newly registered; ids already present keep their
/// first blueprint.
pub fn load_file(path: impl AsRef<Path>, registry: &TemplateRegistry) -> Result<Vec<String>> {
    let path = path.as_ref();
    let yaml = std::fs::read_to_string(path)?;
    let templates = parse_templates(&yaml, &path.display().to_string())?;

    let mut registered = Vec::with_capacity(templates.len());
    for template in templates {
        let id = template.id.clone();
        if registry.register_once(template)? {
            registered.push(id);
        }
    }

    info!(path = %path.display(), count = registered.len(), "loaded templates");
    Ok(registered)
}
