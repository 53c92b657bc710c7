//! Sitedown - converts a small markdown dialect into HTML.
//!
//! This binary reads markdown from files or stdin, renders each document
//! with the sitedown library, and writes the HTML to stdout or a file.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::fs;
use std::io::{self, Read, Write};

use sitedown_config::Config;
use sitedown_core::Result;
use sitedown_html::HtmlBuilder;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("Sitedown v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    debug!("Loaded config: {:?}", config);

    let (mut process_links, mut process_images) = config.inline_settings();
    process_links &= !cli.no_links;
    process_images &= !cli.no_images;
    let builder = HtmlBuilder::with_settings(process_links, process_images);

    let mut html = String::new();
    for document in read_inputs(cli)? {
        html.push_str(&builder.render(&document)?);
        if config.output.trailing_newline {
            html.push('\n');
        }
    }

    match &cli.output {
        Some(path) => {
            info!("Writing {}", path.display());
            fs::write(path, html)?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Load configuration with the optional `--config` override.
fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::load_with_override(cli.config.as_deref())?;
    if cli.config.is_some() {
        debug!("Merged config override");
    }
    Ok(config)
}

/// Read every input document, stdin when no files are given.
fn read_inputs(cli: &Cli) -> Result<Vec<String>> {
    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut document = String::new();
        io::stdin().read_to_string(&mut document)?;
        return Ok(vec![document]);
    }

    cli.files
        .iter()
        .map(|path| -> Result<String> {
            info!("Processing file: {}", path.display());
            Ok(fs::read_to_string(path)?)
        })
        .collect()
}
