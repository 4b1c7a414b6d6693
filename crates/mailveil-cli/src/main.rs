mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries command output only
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Commands::Sanitize { file, report } => commands::sanitize::handle(file, report).await,
        cli::Commands::Redact { file, only, report } => {
            commands::redact::handle(file, only, report).await
        }
        cli::Commands::Anonymize { addresses } => commands::anonymize::handle(addresses),
        cli::Commands::Link {
            to,
            cc,
            subject,
            body,
            client,
        } => commands::link::handle(to, cc, subject, body, client),
        cli::Commands::Reply {
            thread,
            body,
            body_file,
            client,
        } => commands::reply::handle(thread, body, body_file, client).await,
        cli::Commands::Config { path } => commands::config::handle(path),
    }
}
