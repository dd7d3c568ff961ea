// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The folio authors

//! folio - portfolio search and rendering quality tools
//!
//! Entry point for the folio CLI application.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio::cli::{Cli, Commands};
use folio::commands;
use folio::config::Settings;
use folio::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = env_filter(rust_log.as_deref(), cli.verbose);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Load settings
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    settings.validate()?;

    // Dispatch to appropriate command
    match &cli.command {
        Commands::Search(args) => commands::search::execute(args, &settings, cli.format)?,
        Commands::Tags(args) => commands::tags::execute(args, cli.format)?,
        Commands::Quality(args) => commands::quality::execute(args, &settings, cli.format).await?,
    }

    Ok(())
}

/// Build the log filter. A non-empty, parseable `RUST_LOG` is used as is;
/// otherwise folio logs at `warn`, `-v` shows its own decisions and `-vv`
/// everything.
fn env_filter(rust_log: Option<&str>, verbose: u8) -> EnvFilter {
    if let Some(directives) = rust_log.filter(|d| !d.trim().is_empty()) {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("Ignoring invalid {}: {}", EnvFilter::DEFAULT_ENV, e),
        }
    }

    let directives: &[&str] = match verbose {
        0 => &[],
        1 => &["folio=debug"],
        _ => &["folio=trace", "debug"],
    };
    let mut filter = EnvFilter::new("warn");
    for directive in directives {
        if let Ok(parsed) = directive.parse() {
            filter = filter.add_directive(parsed);
        }
    }
    filter
}
