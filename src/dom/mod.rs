//! In-memory host platform: fragment trees and their HTML form
//!
//! Provides exactly what slot binding needs from a document: deep-cloneable
//! fragments, lookup of elements carrying a marker attribute, and setters for
//! attributes, text content and rich content.

mod html;
mod node;

pub use html::{inner_html, ToHtml};
pub use node::{Element, Fragment, Node};
