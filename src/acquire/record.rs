//! BoundRecord - fetched post merged with link fields
//!
//! Built once per render and read-only afterwards.

use serde_json::{Map, Value};

use crate::util::path;

use super::link::LinkFields;

/// Read-only record that slots resolve against
#[derive(Debug, Clone, PartialEq)]
pub struct BoundRecord {
    root: Value,
}

impl BoundRecord {
    /// Wrap an already-merged mapping
    pub fn new(fields: Map<String, Value>) -> Self {
        Self {
            root: Value::Object(fields),
        }
    }

    /// Merge a post (if any) with link fields; link fields win
    ///
    /// An absent link field removes the post's same-named key, so it
    /// resolves to nothing rather than to the server's value.
    pub fn merge(post: Option<Value>, link: &LinkFields) -> Self {
        let mut fields = match post {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };

        fields.insert("url".to_string(), Value::String(link.url.clone()));
        for (key, value) in [
            ("hostname", &link.hostname),
            ("username", &link.username),
            ("postId", &link.post_id),
        ] {
            match value {
                Some(v) => {
                    fields.insert(key.to_string(), Value::String(v.clone()));
                }
                None => {
                    fields.remove(key);
                }
            }
        }

        Self::new(fields)
    }

    /// Resolve a path expression against the record
    pub fn resolve(&self, expression: &str) -> Option<&Value> {
        path::resolve(expression, &self.root)
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }
}
