//! Error types for sitedown

use thiserror::Error;

/// Main error type for sitedown operations
#[derive(Error, Debug)]
pub enum SitedownError {
    /// An emphasis or code delimiter appears an odd number of times
    #[error("Unbalanced delimiter {delimiter:?}: formatted section not closed in {text:?}")]
    UnbalancedDelimiter { delimiter: String, text: String },

    /// A detected image could not be isolated from its surrounding text
    #[error("Unclosed image markup: {0}")]
    UnclosedImageMarkup(String),

    /// A detected link could not be isolated from its surrounding text
    #[error("Unclosed link markup: {0}")]
    UnclosedLinkMarkup(String),

    /// Heading block without a valid marker or text
    #[error("Invalid heading: {0:?}")]
    InvalidHeading(String),

    /// Code block without matching fences
    #[error("Invalid code block: {0:?}")]
    InvalidCodeBlock(String),

    /// Quote block containing a line without a `>` marker
    #[error("Invalid quote block: {0:?}")]
    InvalidQuote(String),

    /// Node with no tag, no value and no children
    #[error("Malformed node: nothing to render")]
    MalformedNode,

    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SitedownError {
    /// Whether the error was caused by the document content rather than
    /// the environment.
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, SitedownError::Io(_) | SitedownError::Config(_))
    }
}

/// Result type alias for sitedown operations
pub type Result<T> = std::result::Result<T, SitedownError>;
