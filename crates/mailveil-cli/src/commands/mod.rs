pub mod anonymize;
pub mod config;
pub mod link;
pub mod redact;
pub mod reply;
pub mod sanitize;

use anyhow::{Context, Result};
use mailveil_config::Config;
use mailveil_links::MailClient;
use serde::Serialize;
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Read a whole file, or stdin when no path is given
pub async fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// The `--client` flag wins; the config file is only read without one
pub fn resolve_client(client: Option<MailClient>) -> Result<MailClient> {
    match client {
        Some(client) => Ok(client),
        None => Ok(Config::load()?.links.client),
    }
}

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
