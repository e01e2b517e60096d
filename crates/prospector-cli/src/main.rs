//! Prospector CLI - Extract prospect records from agent reports.

use clap::Parser;
use prospector_cli::commands;
use prospector_cli::{Cli, Command, Config, Formatter};
use prospector_extractor::Extractor;
use prospector_gatekeeper::Gatekeeper;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON output
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let color_enabled = !cli.no_color;
    if let Err(e) = run(cli).await {
        let formatter = Formatter::new(prospector_cli::config::OutputFormat::Table, color_enabled);
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> prospector_cli::Result<()> {
    // Load config, falling back to defaults when the file does not exist
    let path = Config::resolve_path(cli.config.as_deref())?;
    let mut config = Config::load_from(&path)?;
    if cli.strict {
        config = config.into_strict();
    }
    tracing::debug!(path = %path.display(), strict = cli.strict, "Loaded configuration");

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let extractor = Arc::new(Extractor::new(
        Gatekeeper::new(config.validation.clone()),
        config.extractor.clone(),
    )?);

    match cli.command {
        Command::Extract(args) => {
            commands::execute_extract(args, extractor, &formatter).await?;
        }
        Command::Detect(args) => {
            commands::execute_detect(args, &extractor, &formatter)?;
        }
        Command::Segment(args) => {
            commands::execute_segment(args, &extractor, &formatter)?;
        }
        Command::Config(args) => {
            commands::execute_config(args, &config, &path, &formatter)?;
        }
    }

    Ok(())
}
