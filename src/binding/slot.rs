//! SlotSpec - what a marked element asks for, and how it gets written
//!
//! Roles are declared with `data-role`; the element's tag name plays no part.

use std::str::FromStr;

use tracing::warn;

use crate::dom::Element;
use crate::util::{BODY_TEXT_PATH, ROLE_ATTRIBUTE};

use super::value::SlotValue;

/// Declared write role of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotRole {
    /// URLs go to `src`
    Image,
    /// URLs go to `href`
    Link,
    /// Everything is text content
    #[default]
    Text,
}

impl SlotRole {
    /// Attribute that receives URL values, if any
    pub fn url_attribute(self) -> Option<&'static str> {
        match self {
            SlotRole::Image => Some("src"),
            SlotRole::Link => Some("href"),
            SlotRole::Text => None,
        }
    }
}

impl FromStr for SlotRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "image" => Ok(SlotRole::Image),
            "link" => Ok(SlotRole::Link),
            "text" => Ok(SlotRole::Text),
            other => Err(format!("unknown slot role '{other}'")),
        }
    }
}

/// One marked element's bindings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSpec {
    /// Path expressions, in order of appearance
    pub keys: Vec<String>,
    pub role: SlotRole,
}

impl SlotSpec {
    /// Read a slot from an element's marker and role attributes
    pub fn from_element(element: &Element, marker: &str) -> Option<Self> {
        let keys = parse_keys(element.get_attr(marker)?);
        let role = match element.get_attr(ROLE_ATTRIBUTE) {
            None => SlotRole::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!(tag = %element.tag, "{e}, writing as text");
                SlotRole::Text
            }),
        };
        Some(Self { keys, role })
    }
}

/// Split a marker value into trimmed, non-empty path expressions
pub fn parse_keys(marker: &str) -> Vec<String> {
    marker
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// A single write decided by the policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotWrite {
    /// Replace children with unescaped markup (body text only)
    Markup(String),
    /// Set an attribute
    Attribute(&'static str, String),
    /// Replace children with plain text
    Text(String),
}

impl SlotWrite {
    /// Choose the write for `value` resolved from `key` into a slot with `role`
    pub fn plan(key: &str, value: &SlotValue<'_>, role: SlotRole) -> Self {
        if key == BODY_TEXT_PATH {
            return SlotWrite::Markup(value.display().replace('\n', "<br/>"));
        }
        if let (SlotValue::Url(url), Some(attribute)) = (value, role.url_attribute()) {
            return SlotWrite::Attribute(attribute, (*url).to_string());
        }
        SlotWrite::Text(value.display().into_owned())
    }

    pub fn apply(self, element: &mut Element) {
        match self {
            SlotWrite::Markup(html) => element.set_inner_html(html),
            SlotWrite::Attribute(name, value) => element.set_attr(name, value),
            SlotWrite::Text(text) => element.set_text_content(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_keys_trims_and_drops_empty() {
        assert_eq!(parse_keys("url, author.avatar ,,"), vec!["url", "author.avatar"]);
        assert!(parse_keys(" ").is_empty());
    }

    #[test]
    fn role_from_attribute() {
        let el = Element::new("img").attr("data-key", "a,b").attr("data-role", "image");
        let spec = SlotSpec::from_element(&el, "data-key").unwrap();
        assert_eq!(spec.keys, vec!["a", "b"]);
        assert_eq!(spec.role, SlotRole::Image);
    }

    #[test]
    fn role_ignores_tag_name() {
        let el = Element::new("a").attr("data-key", "url");
        assert_eq!(SlotSpec::from_element(&el, "data-key").unwrap().role, SlotRole::Text);
    }

    #[test]
    fn unknown_role_is_text() {
        let el = Element::new("p").attr("data-key", "url").attr("data-role", "video");
        assert_eq!(SlotSpec::from_element(&el, "data-key").unwrap().role, SlotRole::Text);
    }

    #[test]
    fn unmarked_element_is_not_a_slot() {
        assert!(SlotSpec::from_element(&Element::new("p"), "data-key").is_none());
    }

    #[test]
    fn url_into_image_sets_src() {
        let v = json!("http://example.com/x.png");
        let write = SlotWrite::plan("author.avatar", &SlotValue::classify(Some(&v)), SlotRole::Image);
        assert_eq!(write, SlotWrite::Attribute("src", "http://example.com/x.png".into()));
    }

    #[test]
    fn url_into_text_slot_is_text() {
        let v = json!("https://bsky.app/x");
        let write = SlotWrite::plan("url", &SlotValue::classify(Some(&v)), SlotRole::Text);
        assert_eq!(write, SlotWrite::Text("https://bsky.app/x".into()));
    }

    #[test]
    fn scalar_into_link_slot_is_text() {
        let v = json!("alice.test");
        let write = SlotWrite::plan("username", &SlotValue::classify(Some(&v)), SlotRole::Link);
        assert_eq!(write, SlotWrite::Text("alice.test".into()));
    }

    #[test]
    fn body_text_gets_line_breaks() {
        let v = json!("line1\nline2");
        let write = SlotWrite::plan("record.text", &SlotValue::classify(Some(&v)), SlotRole::Text);
        assert_eq!(write, SlotWrite::Markup("line1<br/>line2".into()));
    }

    #[test]
    fn body_text_keeps_blank_lines() {
        let v = json!("a\n\nb\n");
        let write = SlotWrite::plan("record.text", &SlotValue::classify(Some(&v)), SlotRole::Text);
        assert_eq!(write, SlotWrite::Markup("a<br/><br/>b<br/>".into()));
    }

    #[test]
    fn body_text_markup_passes_through() {
        let v = json!("<a href=\"https://x.test\">link</a>");
        let write = SlotWrite::plan("record.text", &SlotValue::classify(Some(&v)), SlotRole::Link);
        assert_eq!(write, SlotWrite::Markup("<a href=\"https://x.test\">link</a>".into()));
    }

    #[test]
    fn absent_body_text_is_undefined() {
        let write = SlotWrite::plan("record.text", &SlotValue::Absent, SlotRole::Text);
        assert_eq!(write, SlotWrite::Markup("undefined".into()));
    }
}
