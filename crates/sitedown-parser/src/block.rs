//! Block splitting and classification.
//!
//! A document is cut into blocks on blank lines, each line of a block is
//! trimmed, and every block is given a [`BlockType`] by a line-by-line scan.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use sitedown_core::BlockType;

/// Regex for a block boundary: any run of blank or whitespace-only lines.
static BLANK_LINES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// A classified block of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Block text with every line trimmed
    pub text: String,
    /// Structural type
    pub block_type: BlockType,
}

impl Block {
    /// Classify `text` and wrap it as a block.
    pub fn classify(text: impl Into<String>) -> Self {
        let text = text.into();
        let block_type = classify_block(&text);
        Self { text, block_type }
    }
}

/// Split a document into block strings.
///
/// The document is trimmed, cut on runs of blank lines, and each line of
/// each block is trimmed. Blocks left empty are dropped.
pub fn split_blocks(document: &str) -> Vec<String> {
    BLANK_LINES_RE
        .split(document.trim())
        .map(|block| block.split('\n').map(str::trim).collect::<Vec<_>>().join("\n"))
        .filter(|block| !block.is_empty())
        .collect()
}

/// Split a document and classify every block.
pub fn parse_blocks(document: &str) -> Vec<Block> {
    let blocks: Vec<Block> = split_blocks(document)
        .into_iter()
        .map(Block::classify)
        .collect();
    debug!("Split document into {} blocks", blocks.len());
    blocks
}

/// Level of a heading line: 1 to 6 `#` followed by a space.
pub fn heading_level(line: &str) -> Option<usize> {
    let level = line.len() - line.trim_start_matches('#').len();
    if (1..=6).contains(&level) && line[level..].starts_with(' ') {
        Some(level)
    } else {
        None
    }
}

fn is_quote_line(line: &str) -> bool {
    line.starts_with('>') && line.trim_start_matches('>').starts_with(' ')
}

fn is_bullet_line(line: &str) -> bool {
    (line.starts_with('*') || line.starts_with('-'))
        && line.trim_start_matches(&['*', '-'][..]).starts_with(' ')
}

/// Classify a block.
///
/// Any heading line makes the whole block a heading. Otherwise quote,
/// unordered and ordered lines are tallied and the block takes the first
/// of those types that every line matched, then code, then paragraph.
pub fn classify_block(block: &str) -> BlockType {
    let lines: Vec<&str> = block.split('\n').collect();

    let mut quote = 0;
    let mut unordered = 0;
    let mut ordered = 0;
    let mut expected = 1;

    for line in &lines {
        if heading_level(line).is_some() {
            return BlockType::Heading;
        }
        if is_quote_line(line) {
            quote += 1;
        }
        if is_bullet_line(line) {
            unordered += 1;
        }
        // Only a single leading digit is read, so lists stop at 9.
        if let Some(number) = line.chars().next().and_then(|c| c.to_digit(10)) {
            if number == expected && line[1..].starts_with(". ") {
                ordered += 1;
                expected += 1;
            }
        }
    }

    let block_type = if quote == lines.len() {
        BlockType::Quote
    } else if unordered == lines.len() {
        BlockType::UnorderedList
    } else if ordered == lines.len() {
        BlockType::OrderedList
    } else if is_fenced(&lines) {
        BlockType::Code
    } else {
        BlockType::Paragraph
    };

    debug!("Classified block as {}", block_type);
    block_type
}

fn is_fenced(lines: &[&str]) -> bool {
    match (lines.first(), lines.last()) {
        (Some(first), Some(last)) => first.starts_with("```") && last.starts_with("```"),
        _ => false,
    }
}
