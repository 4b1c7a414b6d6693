//! Core domain models for mailveil
//!
//! This crate contains:
//! - Email thread records (raw and sanitized)
//! - The shared error type

pub mod error;
pub mod message;

pub use error::{Error, Result};
pub use message::{EmailMessage, MessageType, SanitizedEmailMessage, parse_thread};
