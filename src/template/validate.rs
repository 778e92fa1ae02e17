//! Template ID and tag name validation
//!
//! Template ids and host tag names follow kebab-case:
//! - Start with lowercase letter
//! - Contain only lowercase letters, digits, dashes
//!
//! Tag names additionally need at least one dash, like custom element names,
//! so the derived `<tag>-template` id never collides with a plain HTML tag.
//!
//! Manual single-pass check, no regex.

use crate::error::SkyslotError;

const KEBAB_REASON: &str =
    "must start with lowercase letter (a-z), then lowercase letters, digits, or dashes";

/// Validate a template id
pub fn validate_template_id(id: &str) -> Result<(), SkyslotError> {
    check_kebab(id).map_err(|reason| SkyslotError::InvalidTemplateId {
        id: id.to_string(),
        reason: reason.into(),
    })
}

/// Validate a host tag name (kebab-case with at least one dash)
pub fn validate_tag_name(tag: &str) -> Result<(), SkyslotError> {
    let invalid = |reason: &str| SkyslotError::InvalidTemplateId {
        id: format!("{tag}-template"),
        reason: format!("tag name {reason}"),
    };
    check_kebab(tag).map_err(invalid)?;
    if !tag.contains('-') {
        return Err(invalid("must contain a dash"));
    }
    Ok(())
}

fn check_kebab(id: &str) -> Result<(), &'static str> {
    let Some(&first) = id.as_bytes().first() else {
        return Err("cannot be empty");
    };
    if !first.is_ascii_lowercase() {
        return Err(KEBAB_REASON);
    }
    if id.bytes().skip(1).any(|b| !(b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')) {
        return Err(KEBAB_REASON);
    }
    Ok(())
}
