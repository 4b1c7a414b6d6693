//! "Open in mail client" links for reply drafts
//!
//! These builders work on the real, unsanitized addresses: the reply has to
//! reach the actual recipient.

pub mod compose;
pub mod reply;

pub use compose::{
    GMAIL_COMPOSE_URL, OUTLOOK_COMPOSE_URL, gmail_compose_link, mailto_link,
    outlook_web_compose_link,
};
pub use reply::{MailClient, ReplyDraft, UnknownMailClient};
