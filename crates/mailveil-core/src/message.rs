use serde::{Deserialize, Serialize};

use crate::Result;

/// Direction of a message within a thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Received,
    Sent,
    Reply,
}

/// One message of a thread as delivered by the mail provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Vec<String>>,
    pub subject: String,
    pub body: String,
    pub date: String,
    #[serde(rename = "type")]
    pub message_type: MessageType,
}

impl EmailMessage {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        date: impl Into<String>,
        message_type: MessageType,
    ) -> Self {
        Self {
            id: None,
            from: from.into(),
            to: to.into(),
            cc: None,
            bcc: None,
            subject: subject.into(),
            body: body.into(),
            date: date.into(),
            message_type,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_cc(mut self, cc: Vec<String>) -> Self {
        self.cc = Some(cc);
        self
    }

    pub fn with_bcc(mut self, bcc: Vec<String>) -> Self {
        self.bcc = Some(bcc);
        self
    }
}

/// A message that is safe to hand to an external AI service.
///
/// There is deliberately no `bcc` field: blind copies never leave the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizedEmailMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub from: String,
    pub to: String,
    /// Anonymized labels joined with `", "`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,
    pub subject: String,
    pub body: String,
    pub date: String,
    #[serde(rename = "type")]
    pub message_type: MessageType,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ThreadDocument {
    Messages(Vec<EmailMessage>),
    Task { email_thread: Vec<EmailMessage> },
}

/// Parse a thread from JSON.
///
/// Accepts either a bare array of messages or a task object carrying the
/// array under `email_thread`.
pub fn parse_thread(json: &str) -> Result<Vec<EmailMessage>> {
    let document: ThreadDocument = serde_json::from_str(json)?;
    Ok(match document {
        ThreadDocument::Messages(messages) => messages,
        ThreadDocument::Task { email_thread } => email_thread,
    })
}
