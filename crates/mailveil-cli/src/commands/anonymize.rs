use anyhow::Result;
use mailveil_security::anonymize;

pub fn handle(addresses: Vec<String>) -> Result<()> {
    for address in &addresses {
        println!("{}", anonymize(address));
    }
    Ok(())
}
