//! Privacy filters applied to email threads before they leave the host
//!
//! - [`anonymize`]: turns an address into a display label
//! - [`Redactor`]: replaces email addresses and phone numbers in free text
//! - [`ThreadSanitizer`]: applies both to every message of a thread

pub mod anonymize;
pub mod redactor;
pub mod sanitizer;

pub use anonymize::{GENERIC_LABEL, HONORIFIC, anonymize};
pub use redactor::{
    EMAIL_PLACEHOLDER, EmailRedactor, PHONE_PLACEHOLDER, PhoneRedactor, RedactionInfo,
    RedactionKind, Redactor, redact_email_addresses, redact_phone_numbers,
};
pub use sanitizer::{
    RedactionSummary, SanitizedThread, ThreadSanitizer, sanitize_message, sanitize_thread,
};
