//! Binary entry point for `digest-bot`.
//!
//! This module provides the command-line interface for digest-bot with options
//! for configuration file paths and logging verbosity. The external scheduler
//! invokes it with the digest kind to produce for this run.

use clap::Parser;
use digest_bot::base::{
    config::Config,
    types::{DigestKind, DigestOutcome, Void},
};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

/// Digest-bot – a scheduled Gemini digest mailer.
///
/// Configuration can come from `config.toml` or environment variables.
/// Each invocation generates one digest (business news, tech news, or
/// business-English vocabulary) and emails it to the configured recipient.
#[derive(Parser, Debug)]
#[command(version, author, about, long_about = None)]
struct Args {
    /// Which digest to generate and send.
    #[arg(value_enum)]
    kind: DigestKind,
    /// Override the config file path (optional).
    ///
    /// By default, the bot will look for a config file at `.hidden/config.toml`
    /// in the current directory.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
    /// Increase log verbosity (-v, -vv, etc.).
    ///
    /// Use multiple times to increase verbosity:
    /// - No flag: INFO level
    /// - -v: DEBUG level
    /// - -vv or more: TRACE level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Main entry point for the digest-bot binary.
///
/// Sets up logging based on verbosity, loads and validates configuration, and
/// runs one digest. A missing credential aborts here, before any network call.
#[tokio::main]
async fn main() -> Void {
    let args = Args::parse();

    // Construct the level filter.

    let level = match args.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    // Prepare the log layer.

    let stdout = tracing_subscriber::fmt::layer()
        .with_ansi(true)
        .with_level(true)
        .with_file(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE);

    tracing_subscriber::registry().with(level_filter).with(stdout).init();

    let config = Config::load(args.config.as_deref())?;

    let outcome = digest_bot::start(config, args.kind).await?;

    // A skipped run already logged its cause; surface it to the scheduler
    // through the exit status so a silent gap in the inbox is not the only
    // signal.
    if outcome == DigestOutcome::Skipped {
        std::process::exit(1);
    }

    Ok(())
}
