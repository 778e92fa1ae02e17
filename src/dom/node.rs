//! Fragment tree: elements, text, and the handful of mutations slot binding needs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A node in a fragment tree
///
/// Deserializes untagged, so template files can write plain strings for text
/// and `{tag, attrs, children}` maps for elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Element(Element),
    /// Markup printed verbatim; only produced by binding, never read from files
    #[serde(skip_deserializing)]
    Raw(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// A `<br>` element
    pub fn line_break() -> Self {
        Node::Element(Element::new("br"))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) | Node::Raw(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element with attributes and children
///
/// Attributes are kept sorted so serialization is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder: add an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Builder: append a child
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Builder: append a text child
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    /// Replace all children with a single text node
    pub fn set_text_content(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
    }

    /// Replace all children with unescaped markup
    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        self.children = vec![Node::Raw(html.into())];
    }

    /// Replace all children with the given nodes
    pub fn set_content(&mut self, nodes: Vec<Node>) {
        self.children = nodes;
    }

    /// Concatenated text of all descendants (elements contribute nothing themselves)
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => collect_text(&e.children, out),
            Node::Raw(html) => push_markup_text(html, out),
        }
    }
}

/// Text of raw markup with tags dropped (entities are left as written)
fn push_markup_text(html: &str, out: &mut String) {
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
}

/// A detached list of nodes: what a template instantiates into
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fragment {
    pub nodes: Vec<Node>,
}

impl Fragment {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Visit every element carrying `attribute`, in document order
    ///
    /// The visitor runs before the element's children are walked, so children
    /// it replaces are the ones visited afterwards.
    pub fn for_each_marked_mut<F>(&mut self, attribute: &str, mut visit: F)
    where
        F: FnMut(&mut Element),
    {
        walk_marked_mut(&mut self.nodes, attribute, &mut visit);
    }

    /// Elements carrying `attribute`, in document order
    pub fn find_marked(&self, attribute: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        walk_marked(&self.nodes, attribute, &mut found);
        found
    }

    /// First element whose `attribute` equals `value`
    pub fn find_by_attr(&self, attribute: &str, value: &str) -> Option<&Element> {
        self.find_marked(attribute)
            .into_iter()
            .find(|e| e.get_attr(attribute) == Some(value))
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.nodes, &mut out);
        out
    }
}

fn walk_marked_mut<F>(nodes: &mut [Node], attribute: &str, visit: &mut F)
where
    F: FnMut(&mut Element),
{
    for node in nodes {
        if let Node::Element(element) = node {
            if element.attrs.contains_key(attribute) {
                visit(element);
            }
            walk_marked_mut(&mut element.children, attribute, visit);
        }
    }
}

fn walk_marked<'a>(nodes: &'a [Node], attribute: &str, found: &mut Vec<&'a Element>) {
    for node in nodes {
        if let Node::Element(element) = node {
            if element.attrs.contains_key(attribute) {
                found.push(element);
            }
            walk_marked(&element.children, attribute, found);
        }
    }
}
