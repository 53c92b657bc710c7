//! Sitedown HTML
//!
//! Element tree and block builder for sitedown. Blocks classified by
//! `sitedown-parser` become [`HtmlNode`] subtrees that serialize to markup.
//!
//! # Example
//!
//! ```
//! use sitedown_html::markdown_to_html;
//!
//! let html = markdown_to_html("# Hello\n\nSome *text*").unwrap();
//! assert_eq!(html, "<div><h1>Hello</h1><p>Some <i>text</i></p></div>");
//! ```

pub mod builder;
pub mod node;
pub mod span;

pub use builder::{block_to_node, build_document, HtmlBuilder};
pub use node::HtmlNode;

use sitedown_core::Result;

/// Build a document and serialize it in one step.
pub fn markdown_to_html(document: &str) -> Result<String> {
    build_document(document)?.to_html()
}

