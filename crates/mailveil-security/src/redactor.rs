//! Email address and phone number redaction

use lazy_static::lazy_static;
use regex::{Captures, NoExpand, Regex, Replacer};
use serde::{Deserialize, Serialize};

/// Token substituted for a detected email address.
pub const EMAIL_PLACEHOLDER: &str = "[メールアドレス]";

/// Token substituted for a detected phone number.
pub const PHONE_PLACEHOLDER: &str = "[電話番号]";

const ADDRESS: &str = r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}";

// Horizontal whitespace only, so a pattern never runs across lines.
const BLANK: &str = r"[\t\p{Zs}]*";

lazy_static! {
    static ref DEFAULT_REDACTOR: Redactor = Redactor::new();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionKind {
    EmailAddress,
    PhoneNumber,
}

impl RedactionKind {
    pub fn placeholder(self) -> &'static str {
        match self {
            RedactionKind::EmailAddress => EMAIL_PLACEHOLDER,
            RedactionKind::PhoneNumber => PHONE_PLACEHOLDER,
        }
    }
}

/// What a single pattern replaced. Never carries the matched text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionInfo {
    pub redaction_type: RedactionKind,
    pub pattern: String,
    pub count: usize,
}

/// Replaces email addresses with [`EMAIL_PLACEHOLDER`].
///
/// Signature forms (`Email:`, `E-mail:`, `メール：`, an address alone on its
/// line) are handled first and keep their label; the general address pattern
/// then sweeps up whatever is left.
pub struct EmailRedactor {
    signature_patterns: Vec<(&'static str, Regex)>,
    general: Regex,
}

impl EmailRedactor {
    pub fn new() -> Self {
        let signature_patterns = vec![
            (
                "email_label",
                Regex::new(&format!(
                    r"(?i:E[- ]?mail){}[:：]{}(?P<address>{})",
                    BLANK, BLANK, ADDRESS
                ))
                .unwrap(),
            ),
            (
                "mail_label_ja",
                Regex::new(&format!(
                    r"メール{}[:：]{}(?P<address>{})",
                    BLANK, BLANK, ADDRESS
                ))
                .unwrap(),
            ),
            (
                "own_line",
                Regex::new(&format!(r"(?mR)^{}(?P<address>{}){}$", BLANK, ADDRESS, BLANK))
                    .unwrap(),
            ),
        ];

        Self {
            signature_patterns,
            general: Regex::new(ADDRESS).unwrap(),
        }
    }

    pub fn redact(&self, content: &str) -> (String, Vec<RedactionInfo>) {
        let mut result = content.to_string();
        let mut redactions = Vec::new();

        for (name, pattern) in &self.signature_patterns {
            apply(
                &mut result,
                &mut redactions,
                RedactionKind::EmailAddress,
                name,
                pattern,
                mask_address,
            );
        }
        apply(
            &mut result,
            &mut redactions,
            RedactionKind::EmailAddress,
            "address",
            &self.general,
            NoExpand(EMAIL_PLACEHOLDER),
        );

        (result, redactions)
    }
}

impl Default for EmailRedactor {
    fn default() -> Self {
        Self::new()
    }
}

/// Replaces Japanese-style phone numbers with [`PHONE_PLACEHOLDER`].
pub struct PhoneRedactor {
    patterns: Vec<(&'static str, Regex)>,
}

impl PhoneRedactor {
    pub fn new() -> Self {
        // Applied in order; ASCII digits only
        let patterns = vec![
            (
                "hyphenated",
                Regex::new(r"[0-9]{2,4}-[0-9]{2,4}-[0-9]{4}").unwrap(),
            ),
            ("digit_run", Regex::new(r"[0-9]{10,11}").unwrap()),
            (
                "international",
                Regex::new(r"\+81[- ]?[0-9]{1,4}[- ]?[0-9]{4}").unwrap(),
            ),
        ];

        Self { patterns }
    }

    pub fn redact(&self, content: &str) -> (String, Vec<RedactionInfo>) {
        let mut result = content.to_string();
        let mut redactions = Vec::new();

        for (name, pattern) in &self.patterns {
            apply(
                &mut result,
                &mut redactions,
                RedactionKind::PhoneNumber,
                name,
                pattern,
                NoExpand(PHONE_PLACEHOLDER),
            );
        }

        (result, redactions)
    }
}

impl Default for PhoneRedactor {
    fn default() -> Self {
        Self::new()
    }
}

/// Address redaction followed by phone redaction
pub struct Redactor {
    email: EmailRedactor,
    phone: PhoneRedactor,
}

impl Redactor {
    pub fn new() -> Self {
        Self {
            email: EmailRedactor::new(),
            phone: PhoneRedactor::new(),
        }
    }

    /// Process-wide instance, compiled on first use
    pub fn global() -> &'static Redactor {
        &DEFAULT_REDACTOR
    }

    /// Redact addresses, then phone numbers in the address-redacted text
    pub fn redact(&self, content: &str) -> (String, Vec<RedactionInfo>) {
        let (addressless, mut redactions) = self.email.redact(content);
        let (result, phone_redactions) = self.phone.redact(&addressless);
        redactions.extend(phone_redactions);

        (result, redactions)
    }

    pub fn redact_email_addresses(&self, content: &str) -> String {
        self.email.redact(content).0
    }

    pub fn redact_phone_numbers(&self, content: &str) -> String {
        self.phone.redact(content).0
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace every email address in `text` with [`EMAIL_PLACEHOLDER`]
pub fn redact_email_addresses(text: &str) -> String {
    Redactor::global().redact_email_addresses(text)
}

/// Replace every phone number in `text` with [`PHONE_PLACEHOLDER`]
pub fn redact_phone_numbers(text: &str) -> String {
    Redactor::global().redact_phone_numbers(text)
}

fn apply<R: Replacer>(
    text: &mut String,
    redactions: &mut Vec<RedactionInfo>,
    kind: RedactionKind,
    name: &str,
    pattern: &Regex,
    replacer: R,
) {
    let count = pattern.find_iter(text.as_str()).count();
    if count == 0 {
        return;
    }

    *text = pattern.replace_all(text.as_str(), replacer).into_owned();
    redactions.push(RedactionInfo {
        redaction_type: kind,
        pattern: name.to_string(),
        count,
    });
}

/// Swap the `address` group for the placeholder, keeping any label around it
fn mask_address(caps: &Captures<'_>) -> String {
    let whole = &caps[0];
    match (caps.get(0), caps.name("address")) {
        (Some(outer), Some(address)) => {
            let start = address.start() - outer.start();
            let end = address.end() - outer.start();
            format!("{}{}{}", &whole[..start], EMAIL_PLACEHOLDER, &whole[end..])
        }
        _ => whole.to_string(),
    }
}
