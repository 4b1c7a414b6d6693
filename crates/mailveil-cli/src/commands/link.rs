use anyhow::Result;
use mailveil_links::MailClient;

use super::resolve_client;

pub fn handle(
    to: String,
    cc: String,
    subject: String,
    body: String,
    client: Option<MailClient>,
) -> Result<()> {
    let client = resolve_client(client)?;
    tracing::debug!(%client, "Building compose link");

    println!("{}", client.compose_link(&to, &cc, &subject, &body));
    Ok(())
}
