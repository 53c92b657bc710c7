//! Property-based tests for sitedown.
//!
//! These tests use proptest to generate random inputs and verify
//! that splitting, building and serialization behave consistently.

use proptest::prelude::*;

use sitedown_core::SpanKind;
use sitedown_html::{build_document, markdown_to_html};
use sitedown_parser::{split_blocks, text_to_spans, Span};

/// Generate a random markdown-like string.
fn markdown_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x20-\x7E\n\t]*").unwrap()
}

/// Generate a random line of text free of inline markup characters.
fn safe_text() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z0-9 .,:/]{0,40}").unwrap()
}

/// Generate a heading.
fn heading() -> impl Strategy<Value = String> {
    (1..=6usize, "[a-z]{1,20}").prop_map(|(level, text)| format!("{} {}", "#".repeat(level), text))
}

/// Generate a list.
fn list() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,20}", 1..10).prop_map(|items| {
        items
            .iter()
            .map(|item| format!("- {}", item))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

/// Generate a document of well-formed blocks.
fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![heading(), list(), "[a-z]{1,20}( [a-z]{1,10}){0,5}"], 0..8)
        .prop_map(|blocks| blocks.join("\n\n"))
}

proptest! {
    /// Building should never panic, whatever the outcome.
    #[test]
    fn build_never_panics(input in markdown_string()) {
        let _ = markdown_to_html(&input);
    }

    /// The same input always renders to the same bytes.
    #[test]
    fn build_is_deterministic(input in markdown_string()) {
        let first = markdown_to_html(&input).ok();
        let second = markdown_to_html(&input).ok();
        prop_assert_eq!(first, second);
    }

    /// Every block becomes exactly one child of the root.
    #[test]
    fn block_count_matches_children(input in markdown_string()) {
        if let Ok(root) = build_document(&input) {
            prop_assert_eq!(root.children.len(), split_blocks(&input).len());
        }
    }

    /// Well-formed documents always build.
    #[test]
    fn well_formed_documents_build(doc in document()) {
        let root = build_document(&doc).unwrap();
        prop_assert_eq!(root.children.len(), split_blocks(&doc).len());
        prop_assert!(root.to_html().is_ok(), "well-formed tree failed to serialize");
    }

    /// Image markup is never read as a link.
    #[test]
    fn image_is_never_link(alt in safe_text(), url in safe_text()) {
        let spans = text_to_spans(&format!("![{}]({})", alt, url)).unwrap();
        prop_assert!(
            !spans.iter().any(|s| s.kind() == SpanKind::Link),
            "image markup produced a link: {:?}",
            spans
        );
        prop_assert_eq!(spans, vec![Span::Image { alt, url }]);
    }

    /// Text without markup stays a single plain span.
    #[test]
    fn plain_text_is_one_span(text in "[a-z][a-z ]{0,40}") {
        let spans = text_to_spans(&text).unwrap();
        prop_assert_eq!(spans, vec![Span::Plain(text)]);
    }
}
