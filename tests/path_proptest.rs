//! Property-based tests for path expressions
//!
//! Resolution is checked against `serde_json::Value::pointer`, which walks the
//! same tokens by hand: numeric tokens index arrays and name keys on objects.

use proptest::prelude::*;
use serde_json::Value;
use skyslot::util::path;

#[derive(Debug, Clone)]
enum Token {
    Field(String),
    Index(usize),
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z ]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map(r"[ab]{1,2}|[0-2]", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn arb_tokens() -> impl Strategy<Value = Vec<(Token, bool)>> {
    let token = prop_oneof![
        "[ab]{1,2}".prop_map(Token::Field),
        (0usize..3).prop_map(Token::Index),
    ];
    // bool: write an index as `[i]` instead of `.i`
    prop::collection::vec((token, any::<bool>()), 0..5)
}

fn expression(tokens: &[(Token, bool)], force_dots: bool) -> String {
    let mut out = String::new();
    for (i, (token, bracket)) in tokens.iter().enumerate() {
        match token {
            Token::Index(idx) if *bracket && !force_dots => out.push_str(&format!("[{idx}]")),
            Token::Index(idx) => {
                if i > 0 {
                    out.push('.');
                }
                out.push_str(&idx.to_string());
            }
            Token::Field(name) => {
                if i > 0 {
                    out.push('.');
                }
                out.push_str(name);
            }
        }
    }
    out
}

fn pointer(tokens: &[(Token, bool)]) -> String {
    tokens
        .iter()
        .map(|(token, _)| match token {
            Token::Field(name) => format!("/{name}"),
            Token::Index(idx) => format!("/{idx}"),
        })
        .collect()
}

proptest! {
    /// Property: resolving matches manual traversal of the same tokens
    #[test]
    fn resolve_matches_manual_traversal(data in arb_json(), tokens in arb_tokens()) {
        let expr = expression(&tokens, false);
        prop_assert_eq!(path::resolve(&expr, &data), data.pointer(&pointer(&tokens)));
    }

    /// Property: `a[0].b` and `a.0.b` resolve identically
    #[test]
    fn bracket_and_dot_forms_agree(data in arb_json(), tokens in arb_tokens()) {
        let bracketed = expression(&tokens, false);
        let dotted = expression(&tokens, true);
        prop_assert_eq!(path::parse(&bracketed), path::parse(&dotted));
        prop_assert_eq!(path::resolve(&bracketed, &data), path::resolve(&dotted, &data));
    }

    /// Property: parsing never panics and never yields empty field names
    #[test]
    fn parse_never_panics(expr in ".*") {
        for segment in path::parse(&expr) {
            if let path::Segment::Field(name) = segment {
                prop_assert!(!name.is_empty());
                prop_assert!(!name.contains(['.', '[', ']']));
            }
        }
    }
}
