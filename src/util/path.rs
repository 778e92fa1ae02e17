//! Path expressions for slot keys
//!
//! Supports:
//! - a.b.c (dot notation)
//! - a[0].b (bracket index)
//! - a.0.b (numeric segment, same as a[0].b)
//!
//! Does NOT support:
//! - Negative indices: a[-1]
//! - Wildcards: a[*]
//! - Escaped delimiters: a\.b
//!
//! Resolution is permissive: a missing step yields `None` instead of an error.

use serde_json::Value;

/// A parsed path segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Property access: .field
    Field(String),
    /// Numeric access: [0] or .0
    Index(usize),
}

impl Segment {
    /// Whole non-negative numbers in any float form (`1`, `1.`, `1e0`) index;
    /// everything else is a field name
    fn from_token(token: &str) -> Self {
        if let Ok(index) = token.parse::<usize>() {
            return Segment::Index(index);
        }
        match token.parse::<f64>() {
            Ok(n) if n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= usize::MAX as f64 => {
                Segment::Index(n as usize)
            }
            _ => Segment::Field(token.to_string()),
        }
    }
}

/// Parse a path expression into segments
///
/// Splits on `.`, `[` and `]` and drops empty tokens, so
/// `"items[0].name"` and `"items.0.name"` both give
/// `[Field("items"), Index(0), Field("name")]`.
pub fn parse(expression: &str) -> Vec<Segment> {
    expression
        .trim()
        .split(['.', '[', ']'])
        .filter(|token| !token.is_empty())
        .map(Segment::from_token)
        .collect()
}

/// Apply segments to a value, borrowing into it
pub fn apply<'a>(value: &'a Value, segments: &[Segment]) -> Option<&'a Value> {
    segments
        .iter()
        .try_fold(value, |current, segment| step(current, segment))
}

fn step<'a>(current: &'a Value, segment: &Segment) -> Option<&'a Value> {
    match (segment, current) {
        (Segment::Index(idx), Value::Array(items)) => items.get(*idx),
        // Objects answer numeric lookups by their decimal key
        (Segment::Index(idx), Value::Object(map)) => map.get(&idx.to_string()),
        (Segment::Field(name), Value::Object(map)) => map.get(name),
        _ => None,
    }
}

/// Parse and apply a path expression in one step
pub fn resolve<'a>(expression: &str, value: &'a Value) -> Option<&'a Value> {
    apply(value, &parse(expression))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_simple_path() {
        let segments = parse("record.text");
        assert_eq!(
            segments,
            vec![
                Segment::Field("record".to_string()),
                Segment::Field("text".to_string()),
            ]
        );
    }

    #[test]
    fn parse_with_bracket_index() {
        let segments = parse("embed.images[0].thumb");
        assert_eq!(
            segments,
            vec![
                Segment::Field("embed".to_string()),
                Segment::Field("images".to_string()),
                Segment::Index(0),
                Segment::Field("thumb".to_string()),
            ]
        );
    }

    #[test]
    fn bracket_and_dot_indices_parse_the_same() {
        assert_eq!(parse("a[0].b"), parse("a.0.b"));
        assert_eq!(parse("a[0].b"), parse("a[0]b"));
    }

    #[test]
    fn parse_drops_empty_tokens_and_whitespace() {
        assert_eq!(parse("  likeCount "), vec![Segment::Field("likeCount".into())]);
        assert_eq!(parse("a..b"), parse("a.b"));
        assert!(parse("").is_empty());
        assert!(parse("[]").is_empty());
    }

    #[test]
    fn negative_numbers_are_fields() {
        assert_eq!(parse("a[-1]"), vec![Segment::Field("a".into()), Segment::Field("-1".into())]);
    }

    #[test]
    fn whole_float_forms_are_indices() {
        assert_eq!(parse("items.1e0"), vec![Segment::Field("items".into()), Segment::Index(1)]);
        assert_eq!(parse("items[2E0]"), parse("items[2]"));
        assert_eq!(parse("a.inf"), vec![Segment::Field("a".into()), Segment::Field("inf".into())]);
        assert_eq!(parse("a.NaN"), vec![Segment::Field("a".into()), Segment::Field("NaN".into())]);
        assert_eq!(parse("a[1e-1]"), vec![Segment::Field("a".into()), Segment::Field("1e-1".into())]);
    }

    #[test]
    fn resolve_exponent_index() {
        let value = json!({"items": ["x", "y"]});
        assert_eq!(resolve("items.1e0", &value), Some(&json!("y")));
    }

    #[test]
    fn resolve_simple() {
        let value = json!({"record": {"text": "hello"}});
        assert_eq!(resolve("record.text", &value), Some(&json!("hello")));
    }

    #[test]
    fn resolve_array_index() {
        let value = json!({"labels": ["first", "second", "third"]});
        assert_eq!(resolve("labels[1]", &value), Some(&json!("second")));
        assert_eq!(resolve("labels.2", &value), Some(&json!("third")));
    }

    #[test]
    fn resolve_numeric_key_on_object() {
        let value = json!({"counts": {"0": "zero"}});
        assert_eq!(resolve("counts[0]", &value), Some(&json!("zero")));
    }

    #[test]
    fn resolve_missing_is_none() {
        let value = json!({"a": 1});
        assert_eq!(resolve("b", &value), None);
        assert_eq!(resolve("b.c.d", &value), None);
        assert_eq!(resolve("a.c", &value), None);
        assert_eq!(resolve("a[0]", &value), None);
    }

    #[test]
    fn resolve_out_of_range_is_none() {
        let value = json!({"posts": []});
        assert_eq!(resolve("posts[0].likeCount", &value), None);
    }

    #[test]
    fn resolve_empty_path_is_root() {
        let value = json!({"a": 1});
        assert_eq!(resolve("", &value), Some(&value));
    }

    #[test]
    fn resolve_null_leaf() {
        let value = json!({"a": null});
        assert_eq!(resolve("a", &value), Some(&Value::Null));
        assert_eq!(resolve("a.b", &value), None);
    }
}
