use anyhow::Result;
use mailveil_config::Config;
use mailveil_core::parse_thread;
use mailveil_security::{RedactionSummary, SanitizedThread, ThreadSanitizer};
use std::path::PathBuf;

use super::{read_input, to_json};

pub async fn handle(file: Option<PathBuf>, report: bool) -> Result<()> {
    let config = Config::load()?;
    let input = read_input(file.as_deref()).await?;
    let thread = sanitize(&input)?;

    if report || config.output.report {
        print_report(&thread.redactions, thread.messages.len());
    }

    println!("{}", to_json(&thread.messages, config.output.pretty)?);
    Ok(())
}

pub fn sanitize(input: &str) -> Result<SanitizedThread> {
    let messages = parse_thread(input)?;
    tracing::debug!(messages = messages.len(), "Parsed email thread");

    Ok(ThreadSanitizer::default().sanitize(&messages))
}

fn print_report(redactions: &[RedactionSummary], total: usize) {
    if redactions.is_empty() {
        eprintln!("No redactions in {} message(s).", total);
        return;
    }

    eprintln!("Redactions:");
    for summary in redactions {
        let types: Vec<_> = summary
            .types
            .iter()
            .map(|kind| kind.placeholder())
            .collect();
        eprintln!(
            "  message #{}: {} ({})",
            summary.index,
            summary.count,
            types.join(", ")
        );
    }
}
