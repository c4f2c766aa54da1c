// pia-alerts - campaign countdowns and expiration alerts for Pass It Along

mod cli;
mod config;
mod countdown;
mod error;
mod format;
mod models;
mod template;

use clap::Parser;
use error::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Logs go to stderr so payloads on stdout stay machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    cli::execute(args)
}
