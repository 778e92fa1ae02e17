//! SlotValue - resolved values tagged for writing
//!
//! A resolved value is either absent, an absolute http(s) URL, or any other
//! scalar/structure. Only URLs are eligible for `src`/`href` writes.

use std::borrow::Cow;

use serde_json::{Number, Value};
use url::Url;

use crate::util::UNDEFINED;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotValue<'a> {
    /// Path did not resolve
    Absent,
    /// String holding an absolute http(s) URL
    Url(&'a str),
    /// Anything else
    Scalar(&'a Value),
}

impl<'a> SlotValue<'a> {
    pub fn classify(resolved: Option<&'a Value>) -> Self {
        match resolved {
            None => SlotValue::Absent,
            Some(Value::String(s)) if is_web_url(s) => SlotValue::Url(s),
            Some(v) => SlotValue::Scalar(v),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, SlotValue::Absent)
    }

    /// Text form written into slots
    pub fn display(&self) -> Cow<'a, str> {
        match *self {
            SlotValue::Absent => Cow::Borrowed(UNDEFINED),
            SlotValue::Url(s) => Cow::Borrowed(s),
            SlotValue::Scalar(v) => display_value(v),
        }
    }
}

fn is_web_url(s: &str) -> bool {
    Url::parse(s)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Script-style string conversion of a JSON value
///
/// Strings verbatim, `null`, numbers and booleans in JSON form, arrays joined
/// with `,` (null items empty), objects as `[object Object]`.
pub fn display_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Null => Cow::Borrowed("null"),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Number(n) => Cow::Owned(display_number(n)),
        Value::Array(items) => Cow::Owned(
            items
                .iter()
                .map(|item| match item {
                    Value::Null => Cow::Borrowed(""),
                    other => display_value(other),
                })
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Cow::Borrowed("[object Object]"),
    }
}

/// Whole floats print without a fraction (`2.0` as `2`), like script numbers
fn display_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classify_urls() {
        let v = json!("https://bsky.app/profile/alice.test/post/abc123");
        assert!(matches!(SlotValue::classify(Some(&v)), SlotValue::Url(_)));

        let v = json!("http://example.com/x.png");
        assert_eq!(SlotValue::classify(Some(&v)), SlotValue::Url("http://example.com/x.png"));
    }

    #[test]
    fn non_web_strings_are_scalars() {
        for s in ["alice.test", "at://did:plc:xyz/app.bsky.feed.post/1", "httpish", "mailto:a@b.c"] {
            let v = json!(s);
            assert!(matches!(SlotValue::classify(Some(&v)), SlotValue::Scalar(_)), "{s}");
        }
    }

    #[test]
    fn absent_displays_undefined() {
        assert_eq!(SlotValue::classify(None).display(), "undefined");
        assert!(SlotValue::classify(None).is_absent());
    }

    #[test]
    fn display_scalars() {
        assert_eq!(display_value(&json!(5)), "5");
        assert_eq!(display_value(&json!(0)), "0");
        assert_eq!(display_value(&json!(2.5)), "2.5");
        assert_eq!(display_value(&json!(2.0)), "2");
        assert_eq!(display_value(&json!(-0.0)), "0");
        assert_eq!(display_value(&json!(1e20)), "100000000000000000000");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&json!(null)), "null");
        assert_eq!(display_value(&json!("hi")), "hi");
    }

    #[test]
    fn display_structures() {
        assert_eq!(display_value(&json!([1, "a", null, [2, 3]])), "1,a,,2,3");
        assert_eq!(display_value(&json!({"a": 1})), "[object Object]");
        assert_eq!(display_value(&json!([])), "");
    }
}
