//! HTML serialization of fragment trees
//!
//! Text and attribute values are escaped, raw markup nodes are printed as-is,
//! and void elements print as `<br/>`.

use std::fmt::Write;

use super::node::{Element, Fragment, Node};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Print serialized HTML
pub trait ToHtml {
    fn print_html(&self, out: &mut String);

    fn to_html_string(&self) -> String {
        let mut out = String::new();
        self.print_html(&mut out);
        out
    }
}

impl ToHtml for Node {
    fn print_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => escape_into(text, false, out),
            Node::Element(element) => element.print_html(out),
            Node::Raw(html) => out.push_str(html),
        }
    }
}

impl ToHtml for Element {
    fn print_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            // Infallible for String
            let _ = write!(out, " {name}=\"");
            escape_into(value, true, out);
            out.push('"');
        }
        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            child.print_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

impl ToHtml for Fragment {
    fn print_html(&self, out: &mut String) {
        for node in &self.nodes {
            node.print_html(out);
        }
    }
}

/// Inner HTML of an element (children only)
pub fn inner_html(element: &Element) -> String {
    let mut out = String::new();
    for child in &element.children {
        child.print_html(&mut out);
    }
    out
}

fn escape_into(s: &str, in_attribute: bool, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}
