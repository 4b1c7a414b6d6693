//! Thread sanitization
//!
//! Produces a copy of an email thread that can be sent to an external AI
//! service: participants are anonymized, bodies are redacted and blind copies
//! are dropped. Subjects, dates and message types pass through untouched.

use mailveil_core::{EmailMessage, SanitizedEmailMessage};
use serde::{Deserialize, Serialize};

use crate::anonymize::anonymize;
use crate::redactor::{RedactionInfo, RedactionKind, Redactor};

/// Redactions applied to one message of a thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionSummary {
    /// Position of the message in the thread
    pub index: usize,
    pub count: usize,
    pub types: Vec<RedactionKind>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SanitizedThread {
    pub messages: Vec<SanitizedEmailMessage>,
    pub redactions: Vec<RedactionSummary>,
}

#[derive(Clone, Copy)]
pub struct ThreadSanitizer<'r> {
    redactor: &'r Redactor,
}

impl<'r> ThreadSanitizer<'r> {
    pub fn new(redactor: &'r Redactor) -> Self {
        Self { redactor }
    }

    /// Sanitize every message, keeping count and order
    pub fn sanitize(&self, messages: &[EmailMessage]) -> SanitizedThread {
        let mut sanitized = Vec::with_capacity(messages.len());
        let mut redactions = Vec::new();

        for (index, message) in messages.iter().enumerate() {
            let (clean, infos) = self.sanitize_message(message);
            sanitized.push(clean);

            if let Some(summary) = summarize(index, &infos) {
                redactions.push(summary);
            }
        }

        tracing::debug!(
            messages = sanitized.len(),
            redacted_messages = redactions.len(),
            "Sanitized email thread"
        );

        SanitizedThread {
            messages: sanitized,
            redactions,
        }
    }

    pub fn sanitize_message(
        &self,
        message: &EmailMessage,
    ) -> (SanitizedEmailMessage, Vec<RedactionInfo>) {
        let (body, infos) = self.redactor.redact(&message.body);

        let sanitized = SanitizedEmailMessage {
            id: message.id.clone(),
            from: anonymize(&message.from),
            to: anonymize(&message.to),
            cc: message.cc.as_ref().map(|cc| {
                cc.iter()
                    .map(|address| anonymize(address))
                    .collect::<Vec<_>>()
                    .join(", ")
            }),
            subject: message.subject.clone(),
            body,
            date: message.date.clone(),
            message_type: message.message_type,
        };

        (sanitized, infos)
    }
}

impl Default for ThreadSanitizer<'static> {
    fn default() -> Self {
        Self::new(Redactor::global())
    }
}

/// Sanitize a thread with the shared redactor
pub fn sanitize_thread(messages: &[EmailMessage]) -> Vec<SanitizedEmailMessage> {
    ThreadSanitizer::default().sanitize(messages).messages
}

pub fn sanitize_message(message: &EmailMessage) -> SanitizedEmailMessage {
    ThreadSanitizer::default().sanitize_message(message).0
}

fn summarize(index: usize, infos: &[RedactionInfo]) -> Option<RedactionSummary> {
    if infos.is_empty() {
        return None;
    }

    let mut types = Vec::new();
    for info in infos {
        if !types.contains(&info.redaction_type) {
            types.push(info.redaction_type);
        }
    }

    Some(RedactionSummary {
        index,
        count: infos.iter().map(|info| info.count).sum(),
        types,
    })
}
