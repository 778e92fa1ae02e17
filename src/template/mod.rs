//! Template Module - registry and instantiation
//!
//! - `registry`: id → blueprint, idempotent `register_once`
//! - `host`: clones a blueprint for one mount (`<tag>-template` fallback)
//! - `builtin`: the default `bluesky-post-template`
//! - `file`: YAML template files
//! - `validate`: id and tag name rules

mod builtin;
mod file;
mod host;
mod registry;
mod validate;

// Re-export public types
pub use builtin::{bluesky_post_template, register_default, DEFAULT_TAG, DEFAULT_TEMPLATE_ID};
pub use file::{load_file, parse_templates};
pub use host::{default_template_id, TemplateHost};
pub use registry::{Template, TemplateRegistry};
pub use validate::{validate_tag_name, validate_template_id};
