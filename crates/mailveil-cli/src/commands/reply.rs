use anyhow::Result;
use mailveil_core::parse_thread;
use mailveil_links::{MailClient, ReplyDraft};
use std::path::PathBuf;

use super::{read_input, resolve_client};

pub async fn handle(
    thread: PathBuf,
    body: Option<String>,
    body_file: Option<PathBuf>,
    client: Option<MailClient>,
) -> Result<()> {
    let input = read_input(Some(thread.as_path())).await?;
    let body = match (body, body_file) {
        (Some(body), _) => body,
        (None, Some(path)) => read_input(Some(path.as_path())).await?,
        (None, None) => String::new(),
    };
    let client = resolve_client(client)?;

    println!("{}", compose(&input, body, client)?);
    Ok(())
}

pub fn compose(thread_json: &str, body: String, client: MailClient) -> Result<String> {
    let messages = parse_thread(thread_json)?;
    let draft = ReplyDraft::from_thread(&messages, body)?;
    tracing::info!(%client, messages = messages.len(), "Composed reply link");

    Ok(draft.link(client))
}
