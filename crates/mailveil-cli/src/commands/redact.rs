use anyhow::Result;
use mailveil_config::Config;
use mailveil_security::{EmailRedactor, PhoneRedactor, RedactionInfo, Redactor};
use std::path::PathBuf;

use super::read_input;
use crate::cli::RedactTarget;

pub async fn handle(
    file: Option<PathBuf>,
    only: RedactTarget,
    report: bool,
) -> Result<()> {
    let config = Config::load()?;
    let input = read_input(file.as_deref()).await?;
    let (redacted, infos) = redact(&input, only);

    if report || config.output.report {
        for info in &infos {
            eprintln!(
                "  {} x{} ({})",
                info.redaction_type.placeholder(),
                info.count,
                info.pattern
            );
        }
    }

    print!("{}", redacted);
    Ok(())
}

pub fn redact(text: &str, only: RedactTarget) -> (String, Vec<RedactionInfo>) {
    match only {
        RedactTarget::All => Redactor::global().redact(text),
        RedactTarget::Emails => EmailRedactor::new().redact(text),
        RedactTarget::Phones => PhoneRedactor::new().redact(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "Email: a.b@example.com\nTel: 03-1234-5678\n";

    #[test]
    fn test_redact_targets() {
        assert_eq!(
            redact(TEXT, RedactTarget::All).0,
            "Email: [メールアドレス]\nTel: [電話番号]\n"
        );
        assert_eq!(
            redact(TEXT, RedactTarget::Emails).0,
            "Email: [メールアドレス]\nTel: 03-1234-5678\n"
        );
        assert_eq!(
            redact(TEXT, RedactTarget::Phones).0,
            "Email: a.b@example.com\nTel: [電話番号]\n"
        );
    }
}
