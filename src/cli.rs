//! Command-line interface for Sitedown.

use clap::Parser;
use std::path::PathBuf;

/// Sitedown - converts a small markdown dialect into HTML.
///
/// Each input file is rendered independently to a `<div>` of block
/// elements. Output goes to stdout unless `--output` is given.
#[derive(Parser, Debug)]
#[command(
    name = "sitedown",
    author = "Sitedown Contributors",
    version,
    about = "Converts a small markdown dialect into HTML",
    after_help = "Examples:\n  \
                  cat post.md | sitedown\n  \
                  sitedown index.md -o index.html\n  \
                  sitedown --no-images -c '[output]\\nTrailingNewline = false' notes.md"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Write HTML to this file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Leave `![alt](url)` as plain text
    #[arg(long = "no-images")]
    pub no_images: bool,

    /// Leave `[text](url)` as plain text
    #[arg(long = "no-links")]
    pub no_links: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Show paths information.
pub fn show_paths() {
    use sitedown_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
