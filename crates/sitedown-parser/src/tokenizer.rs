//! Splitting stages of the inline tokenizer.
//!
//! Every stage takes the spans produced so far and returns a new sequence
//! in which only the [`Span::Plain`] entries have been re-scanned. Typed
//! spans pass through untouched.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use sitedown_core::{Result, SitedownError};

use crate::inline::Span;

/// Regex for matching images: ![alt](url)
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// Regex for matching links: [text](url)
///
/// Image syntax is excluded by checking the preceding byte in [`find_links`].
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// One image or link found in a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Markup {
    label: String,
    url: String,
    range: Range<usize>,
}

fn find_images(text: &str) -> Vec<Markup> {
    IMAGE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(Markup {
                label: caps[1].to_string(),
                url: caps[2].to_string(),
                range: whole.range(),
            })
        })
        .collect()
}

fn find_links(text: &str) -> Vec<Markup> {
    let mut found = Vec::new();
    let mut start = 0;

    while let Some(caps) = LINK_RE.captures_at(text, start) {
        let Some(whole) = caps.get(0) else { break };
        if text[..whole.start()].ends_with('!') {
            // `[` is one byte; retry just past it.
            start = whole.start() + 1;
            continue;
        }
        found.push(Markup {
            label: caps[1].to_string(),
            url: caps[2].to_string(),
            range: whole.range(),
        });
        start = whole.end();
    }

    found
}

/// Extract `(alt, url)` pairs of every `![alt](url)` in `text`.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    find_images(text)
        .into_iter()
        .map(|m| (m.label, m.url))
        .collect()
}

/// Extract `(text, url)` pairs of every `[text](url)` in `text` that is not
/// part of an image.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    find_links(text)
        .into_iter()
        .map(|m| (m.label, m.url))
        .collect()
}

/// Split plain spans on a paired delimiter.
///
/// Fragments at odd positions between delimiters are wrapped with `wrap`,
/// the others stay plain. Empty plain fragments are dropped.
pub fn split_delimiter(
    spans: Vec<Span>,
    delimiter: &str,
    wrap: fn(String) -> Span,
) -> Result<Vec<Span>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            Span::Plain(text) => text,
            other => {
                result.push(other);
                continue;
            }
        };

        if text.matches(delimiter).count() % 2 != 0 {
            return Err(SitedownError::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                text,
            });
        }

        for (i, section) in text.split(delimiter).enumerate() {
            if i % 2 == 1 {
                result.push(wrap(section.to_string()));
            } else if !section.is_empty() {
                result.push(Span::Plain(section.to_string()));
            }
        }
    }

    Ok(result)
}

/// Split `![alt](url)` out of plain spans into [`Span::Image`].
pub fn split_images(spans: Vec<Span>) -> Result<Vec<Span>> {
    split_markup(
        spans,
        find_images,
        |label, url| Span::Image { alt: label, url },
        SitedownError::UnclosedImageMarkup,
    )
}

/// Split `[text](url)` out of plain spans into [`Span::Link`].
pub fn split_links(spans: Vec<Span>) -> Result<Vec<Span>> {
    split_markup(
        spans,
        find_links,
        |label, url| Span::Link { text: label, url },
        SitedownError::UnclosedLinkMarkup,
    )
}

fn split_markup(
    spans: Vec<Span>,
    find: fn(&str) -> Vec<Markup>,
    make: fn(String, String) -> Span,
    unclosed: fn(String) -> SitedownError,
) -> Result<Vec<Span>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            Span::Plain(text) => text,
            other => {
                result.push(other);
                continue;
            }
        };

        let found = find(&text);
        if found.is_empty() {
            result.push(Span::Plain(text));
            continue;
        }

        let mut cursor = 0;
        for markup in found {
            let Some(before) = text.get(cursor..markup.range.start) else {
                return Err(unclosed(text.clone()));
            };
            if !before.is_empty() {
                result.push(Span::Plain(before.to_string()));
            }
            cursor = markup.range.end;
            result.push(make(markup.label, markup.url));
        }

        if let Some(rest) = text.get(cursor..).filter(|rest| !rest.is_empty()) {
            result.push(Span::Plain(rest.to_string()));
        }
    }

    Ok(result)
}
