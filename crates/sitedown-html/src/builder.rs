//! Block builder.
//!
//! Turns each classified block into one element subtree, running every
//! text run through the inline parser, and gathers the blocks of a
//! document under a single `div`.

use log::debug;
use sitedown_core::{BlockType, Result, SitedownError};
use sitedown_parser::{heading_level, parse_blocks, Block, InlineParser};

use crate::node::HtmlNode;

/// Opening and closing line of a code block.
const FENCE: &str = "```";

/// Width of the `1. ` marker stripped from ordered list items.
const ORDERED_MARKER_WIDTH: usize = 3;

/// Width of the `- ` marker stripped from unordered list items.
const BULLET_MARKER_WIDTH: usize = 2;

/// Builds element trees from markdown documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlBuilder {
    inline: InlineParser,
}

impl HtmlBuilder {
    /// Create a builder with every inline stage enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with specific inline settings.
    pub fn with_settings(process_links: bool, process_images: bool) -> Self {
        Self {
            inline: InlineParser::with_settings(process_links, process_images),
        }
    }

    /// Build a whole document into a `div` holding one node per block.
    ///
    /// The first failing block aborts the build.
    pub fn build_document(&self, document: &str) -> Result<HtmlNode> {
        let children = parse_blocks(document)
            .iter()
            .map(|block| self.build_block(block))
            .collect::<Result<Vec<_>>>()?;
        debug!("Built document with {} blocks", children.len());
        Ok(HtmlNode::parent("div", children))
    }

    /// Build and serialize a document.
    pub fn render(&self, document: &str) -> Result<String> {
        self.build_document(document)?.to_html()
    }

    /// Build one classified block.
    pub fn build_block(&self, block: &Block) -> Result<HtmlNode> {
        let text = block.text.as_str();
        match block.block_type {
            BlockType::Paragraph => self.paragraph(text),
            BlockType::Heading => self.heading(text),
            BlockType::Code => self.code(text),
            BlockType::Quote => self.quote(text),
            BlockType::OrderedList => self.list(text, BlockType::OrderedList, ORDERED_MARKER_WIDTH),
            BlockType::UnorderedList => {
                self.list(text, BlockType::UnorderedList, BULLET_MARKER_WIDTH)
            }
        }
    }

    fn text_to_children(&self, text: &str) -> Result<Vec<HtmlNode>> {
        Ok(self
            .inline
            .parse(text)?
            .into_iter()
            .map(HtmlNode::from)
            .collect())
    }

    fn paragraph(&self, block: &str) -> Result<HtmlNode> {
        let text = block.split('\n').collect::<Vec<_>>().join(" ");
        Ok(HtmlNode::parent(
            BlockType::Paragraph.tag(),
            self.text_to_children(&text)?,
        ))
    }

    /// Only the leading marker of the block is stripped; any further lines
    /// stay in the heading text as they are.
    fn heading(&self, block: &str) -> Result<HtmlNode> {
        let invalid = || SitedownError::InvalidHeading(block.to_string());
        let level = heading_level(block).ok_or_else(invalid)?;
        let text = &block[level + 1..];
        if text.is_empty() {
            return Err(invalid());
        }
        Ok(HtmlNode::parent(
            format!("{}{}", BlockType::Heading.tag(), level),
            self.text_to_children(text)?,
        ))
    }

    fn code(&self, block: &str) -> Result<HtmlNode> {
        let lines: Vec<&str> = block.split('\n').collect();
        let fenced =
            lines.len() >= 2 && lines.first() == Some(&FENCE) && lines.last() == Some(&FENCE);
        if !fenced {
            return Err(SitedownError::InvalidCodeBlock(block.to_string()));
        }

        // Every body line keeps its newline, including the last.
        let body: String = lines[1..lines.len() - 1]
            .iter()
            .map(|line| format!("{line}\n"))
            .collect();

        let code = HtmlNode::parent("code", self.text_to_children(&body)?);
        Ok(HtmlNode::parent(BlockType::Code.tag(), vec![code]))
    }

    fn list(&self, block: &str, block_type: BlockType, marker_width: usize) -> Result<HtmlNode> {
        let items = block
            .split('\n')
            .map(|line| -> Result<HtmlNode> {
                let children = self.text_to_children(strip_chars(line, marker_width))?;
                Ok(HtmlNode::parent("li", children))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(HtmlNode::parent(block_type.tag(), items))
    }

    fn quote(&self, block: &str) -> Result<HtmlNode> {
        let lines = block
            .split('\n')
            .map(|line| {
                if line.starts_with('>') {
                    Ok(line.trim_start_matches('>').trim())
                } else {
                    Err(SitedownError::InvalidQuote(block.to_string()))
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(HtmlNode::parent(
            BlockType::Quote.tag(),
            self.text_to_children(&lines.join(" "))?,
        ))
    }
}

/// Drop the first `count` characters of `line`.
fn strip_chars(line: &str, count: usize) -> &str {
    line.char_indices()
        .nth(count)
        .map_or("", |(i, _)| &line[i..])
}

/// Build a document with the default builder.
pub fn build_document(document: &str) -> Result<HtmlNode> {
    HtmlBuilder::new().build_document(document)
}

/// Build one block of the given type with the default builder.
pub fn block_to_node(text: &str, block_type: BlockType) -> Result<HtmlNode> {
    HtmlBuilder::new().build_block(&Block {
        text: text.to_string(),
        block_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html(text: &str, block_type: BlockType) -> String {
        block_to_node(text, block_type).unwrap().to_html().unwrap()
    }

    #[test]
    fn test_paragraph_joins_lines() {
        assert_eq!(
            html("This is **bolded** paragraph\ntext in a p\ntag here", BlockType::Paragraph),
            "<p>This is <b>bolded</b> paragraph text in a p tag here</p>"
        );
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(html("# one", BlockType::Heading), "<h1>one</h1>");
        assert_eq!(html("###### six", BlockType::Heading), "<h6>six</h6>");
    }

    #[test]
    fn test_heading_keeps_following_lines() {
        assert_eq!(
            html("# Title\nplain line", BlockType::Heading),
            "<h1>Title\nplain line</h1>"
        );
    }

    #[test]
    fn test_heading_without_leading_marker_fails() {
        assert!(matches!(
            block_to_node("plain line\n# Title", BlockType::Heading),
            Err(SitedownError::InvalidHeading(_))
        ));
    }

    #[test]
    fn test_heading_without_text_fails() {
        assert!(matches!(
            block_to_node("# ", BlockType::Heading),
            Err(SitedownError::InvalidHeading(_))
        ));
        assert!(matches!(
            block_to_node("#", BlockType::Heading),
            Err(SitedownError::InvalidHeading(_))
        ));
    }

    #[test]
    fn test_code_block() {
        assert_eq!(
            html("```\nsome code\n```", BlockType::Code),
            "<pre><code>some code\n</code></pre>"
        );
        assert_eq!(
            html("```\nline one\nline two\n```", BlockType::Code),
            "<pre><code>line one\nline two\n</code></pre>"
        );
    }

    #[test]
    fn test_empty_code_block() {
        assert_eq!(html("```\n```", BlockType::Code), "<pre><code></code></pre>");
    }

    #[test]
    fn test_code_block_with_language_fails() {
        assert!(matches!(
            block_to_node("```rust\nfn main() {}\n```", BlockType::Code),
            Err(SitedownError::InvalidCodeBlock(_))
        ));
    }

    #[test]
    fn test_single_line_code_block_fails() {
        assert!(matches!(
            block_to_node("```x```", BlockType::Code),
            Err(SitedownError::InvalidCodeBlock(_))
        ));
        assert!(matches!(
            block_to_node("```", BlockType::Code),
            Err(SitedownError::InvalidCodeBlock(_))
        ));
    }

    #[test]
    fn test_code_body_is_tokenized() {
        assert_eq!(
            html("```\nlet **x** = 1\n```", BlockType::Code),
            "<pre><code>let <b>x</b> = 1\n</code></pre>"
        );
    }

    #[test]
    fn test_lists() {
        assert_eq!(
            html("- This is a list\n- with items\n- and *more* items", BlockType::UnorderedList),
            "<ul><li>This is a list</li><li>with items</li><li>and <i>more</i> items</li></ul>"
        );
        assert_eq!(
            html("1. This is an `ordered` list\n2. with items", BlockType::OrderedList),
            "<ol><li>This is an <code>ordered</code> list</li><li>with items</li></ol>"
        );
    }

    #[test]
    fn test_list_item_with_only_marker() {
        let node = block_to_node("1.", BlockType::OrderedList).unwrap();
        assert_eq!(node.children.len(), 1);
        assert!(node.children[0].children.is_empty());
        assert_eq!(node.to_html().unwrap(), "<ol><li></li></ol>");
    }

    #[test]
    fn test_quote() {
        assert_eq!(
            html("> This is a\n> blockquote block", BlockType::Quote),
            "<blockquote>This is a blockquote block</blockquote>"
        );
        assert_eq!(
            html(">> nested >  marker", BlockType::Quote),
            "<blockquote>nested >  marker</blockquote>"
        );
    }

    #[test]
    fn test_quote_line_without_marker_fails() {
        assert!(matches!(
            block_to_node("> a\nb", BlockType::Quote),
            Err(SitedownError::InvalidQuote(_))
        ));
    }

    #[test]
    fn test_inline_error_propagates() {
        assert!(matches!(
            build_document("fine\n\nnot **fine"),
            Err(SitedownError::UnbalancedDelimiter { .. })
        ));
    }

    #[test]
    fn test_build_document_counts() {
        let node = build_document("# a\n\nb\n\n- c").unwrap();
        assert_eq!(node.tag.as_deref(), Some("div"));
        assert!(node.attributes.is_empty());
        assert_eq!(node.children.len(), 3);
    }

    #[test]
    fn test_builder_settings() {
        let builder = HtmlBuilder::with_settings(false, false);
        let node = builder.build_document("[a](b) ![c](d)").unwrap();
        assert_eq!(node.to_html().unwrap(), "<div><p>[a](b) ![c](d)</p></div>");
    }

    #[test]
    fn test_strip_chars_multibyte() {
        assert_eq!(strip_chars("- é", 2), "é");
        assert_eq!(strip_chars("-", 2), "");
    }
}
