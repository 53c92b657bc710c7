//! Core enums for sitedown parsing.
//!
//! These enums name the structural kinds a document is broken into:
//! block types assigned by the classifier and span kinds produced by
//! the inline tokenizer.

use serde::{Deserialize, Serialize};

/// Structural type of a top-level block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockType {
    /// Plain text, the fallback
    Paragraph,
    /// `#` to `######` followed by a space
    Heading,
    /// Fenced with three backticks
    Code,
    /// Every line starts with `> `
    Quote,
    /// Lines numbered `1. `, `2. `, ...
    OrderedList,
    /// Every line starts with `* ` or `- `
    UnorderedList,
}

impl BlockType {
    /// HTML tag of the element the block becomes.
    ///
    /// Headings are levelled (`h1`..`h6`) so they report the bare prefix.
    pub fn tag(&self) -> &'static str {
        match self {
            BlockType::Paragraph => "p",
            BlockType::Heading => "h",
            BlockType::Code => "pre",
            BlockType::Quote => "blockquote",
            BlockType::OrderedList => "ol",
            BlockType::UnorderedList => "ul",
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockType::Paragraph => write!(f, "paragraph"),
            BlockType::Heading => write!(f, "heading"),
            BlockType::Code => write!(f, "code"),
            BlockType::Quote => write!(f, "quote"),
            BlockType::OrderedList => write!(f, "ordered_list"),
            BlockType::UnorderedList => write!(f, "unordered_list"),
        }
    }
}

/// Kind of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpanKind {
    /// Unformatted text
    Plain,
    /// `**bold**`
    Bold,
    /// `*italic*`
    Italic,
    /// `` `code` ``
    Code,
    /// `![alt](url)`
    Image,
    /// `[text](url)`
    Link,
}

impl std::fmt::Display for SpanKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpanKind::Plain => write!(f, "plain"),
            SpanKind::Bold => write!(f, "bold"),
            SpanKind::Italic => write!(f, "italic"),
            SpanKind::Code => write!(f, "code"),
            SpanKind::Image => write!(f, "image"),
            SpanKind::Link => write!(f, "link"),
        }
    }
}
