//! Inline markdown parser.
//!
//! This module defines the [`Span`] value produced for every run of
//! inline content and the [`InlineParser`] pipeline that produces them:
//! bold, italic and code delimiters first, then images, then links.
//! Each stage only re-scans spans that are still plain text.

use log::trace;
use sitedown_core::{Result, SpanKind};

use crate::tokenizer::{split_delimiter, split_images, split_links};

/// A typed run of inline content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Plain text
    Plain(String),
    /// Bold text
    Bold(String),
    /// Italic text
    Italic(String),
    /// Inline code
    Code(String),
    /// An image
    Image { alt: String, url: String },
    /// A link
    Link { text: String, url: String },
}

impl Span {
    /// The kind tag of this span.
    pub fn kind(&self) -> SpanKind {
        match self {
            Span::Plain(_) => SpanKind::Plain,
            Span::Bold(_) => SpanKind::Bold,
            Span::Italic(_) => SpanKind::Italic,
            Span::Code(_) => SpanKind::Code,
            Span::Image { .. } => SpanKind::Image,
            Span::Link { .. } => SpanKind::Link,
        }
    }

    /// Display text. For images this is the alt text.
    pub fn content(&self) -> &str {
        match self {
            Span::Plain(s) | Span::Bold(s) | Span::Italic(s) | Span::Code(s) => s,
            Span::Image { alt, .. } => alt,
            Span::Link { text, .. } => text,
        }
    }

    /// URL of an image or link.
    pub fn target(&self) -> Option<&str> {
        match self {
            Span::Image { url, .. } | Span::Link { url, .. } => Some(url),
            _ => None,
        }
    }
}

/// Inline markdown parser.
///
/// Runs the delimiter, image and link stages in a fixed order. Image and
/// link recognition can be switched off, in which case that markup stays
/// plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineParser {
    /// Whether to process links
    pub process_links: bool,
    /// Whether to process images
    pub process_images: bool,
}

impl Default for InlineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineParser {
    /// Create a new inline parser with every stage enabled.
    pub fn new() -> Self {
        Self {
            process_links: true,
            process_images: true,
        }
    }

    /// Create parser with specific settings.
    pub fn with_settings(process_links: bool, process_images: bool) -> Self {
        Self {
            process_links,
            process_images,
        }
    }

    /// Parse a run of text into spans.
    ///
    /// Fails with `UnbalancedDelimiter` when `**`, `*` or `` ` `` appears an
    /// odd number of times in text that is still plain at that stage.
    pub fn parse(&self, text: &str) -> Result<Vec<Span>> {
        let mut spans = vec![Span::Plain(text.to_string())];

        // Bold must run before italic so `**` is never read as two `*`.
        spans = split_delimiter(spans, "**", Span::Bold)?;
        spans = split_delimiter(spans, "*", Span::Italic)?;
        spans = split_delimiter(spans, "`", Span::Code)?;

        if self.process_images {
            spans = split_images(spans)?;
        }
        if self.process_links {
            spans = split_links(spans)?;
        }

        trace!("Inline {:?} -> {} spans", text, spans.len());
        Ok(spans)
    }
}

/// Parse text with the default inline parser.
pub fn text_to_spans(text: &str) -> Result<Vec<Span>> {
    InlineParser::new().parse(text)
}
