//! Sitedown Parser
//!
//! The two parsing stages of sitedown: a block splitter and classifier
//! that cuts a document into typed blocks, and an inline tokenizer that
//! turns a run of text into typed [`Span`]s.
//!
//! # Example
//!
//! ```
//! use sitedown_core::BlockType;
//! use sitedown_parser::{parse_blocks, text_to_spans, Span};
//!
//! let blocks = parse_blocks("# Title\n\nSome **bold** text");
//! assert_eq!(blocks[0].block_type, BlockType::Heading);
//! assert_eq!(blocks[1].block_type, BlockType::Paragraph);
//!
//! let spans = text_to_spans(&blocks[1].text).unwrap();
//! assert_eq!(spans[1], Span::Bold("bold".to_string()));
//! ```

pub mod block;
pub mod inline;
pub mod tokenizer;

pub use block::{classify_block, heading_level, parse_blocks, split_blocks, Block};
pub use inline::{text_to_spans, InlineParser, Span};
pub use tokenizer::{
    extract_markdown_images, extract_markdown_links, split_delimiter, split_images, split_links,
};
