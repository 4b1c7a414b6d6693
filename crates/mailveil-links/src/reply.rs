use std::fmt;
use std::str::FromStr;

use mailveil_core::{EmailMessage, Error, Result};
use serde::{Deserialize, Serialize};

use crate::compose::{gmail_compose_link, mailto_link, outlook_web_compose_link};

/// Where a reply draft gets opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MailClient {
    /// The system handler for `mailto:` links
    #[default]
    #[serde(rename = "default", alias = "mailto")]
    Mailto,
    Gmail,
    Outlook,
}

#[derive(thiserror::Error, Debug)]
#[error("Unknown mail client: {0} (expected default, gmail or outlook)")]
pub struct UnknownMailClient(pub String);

impl MailClient {
    pub fn compose_link(self, to: &str, cc: &str, subject: &str, body: &str) -> String {
        match self {
            MailClient::Mailto => mailto_link(to, cc, subject, body),
            MailClient::Gmail => gmail_compose_link(to, cc, subject, body),
            MailClient::Outlook => outlook_web_compose_link(to, cc, subject, body),
        }
    }
}

impl FromStr for MailClient {
    type Err = UnknownMailClient;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "mailto" => Ok(MailClient::Mailto),
            "gmail" => Ok(MailClient::Gmail),
            "outlook" => Ok(MailClient::Outlook),
            _ => Err(UnknownMailClient(s.to_string())),
        }
    }
}

impl fmt::Display for MailClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MailClient::Mailto => "default",
            MailClient::Gmail => "gmail",
            MailClient::Outlook => "outlook",
        };
        f.write_str(name)
    }
}

/// A reply to the last message of a thread.
///
/// Built from the original messages, never from the sanitized copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyDraft {
    pub to: String,
    pub cc: String,
    pub subject: String,
    pub body: String,
}

impl ReplyDraft {
    pub fn from_thread(thread: &[EmailMessage], body: impl Into<String>) -> Result<Self> {
        let last = thread.last().ok_or(Error::EmptyThread)?;

        Ok(Self {
            to: last.from.clone(),
            cc: last.cc.as_deref().map(|cc| cc.join(", ")).unwrap_or_default(),
            subject: reply_subject(&last.subject),
            body: body.into(),
        })
    }

    pub fn link(&self, client: MailClient) -> String {
        client.compose_link(&self.to, &self.cc, &self.subject, &self.body)
    }
}

fn reply_subject(subject: &str) -> String {
    let already_reply = subject
        .trim_start()
        .get(..3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("re:"));

    if already_reply {
        subject.to_string()
    } else {
        format!("Re: {}", subject)
    }
}
