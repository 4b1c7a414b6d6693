use clap::{Parser, Subcommand, ValueEnum};
use mailveil_links::MailClient;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mailveil")]
#[command(about = "Strip personal data from email threads before they reach an AI service", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sanitize a JSON email thread
    Sanitize {
        /// Thread file: a JSON array of messages or a task with `email_thread` (stdin if omitted)
        file: Option<PathBuf>,

        /// Print a redaction report to stderr
        #[arg(long)]
        report: bool,
    },

    /// Redact email addresses and phone numbers from free text
    Redact {
        /// Text file (stdin if omitted)
        file: Option<PathBuf>,

        /// Restrict redaction to one kind of data
        #[arg(long, value_enum, default_value = "all")]
        only: RedactTarget,

        /// Print a redaction report to stderr
        #[arg(long)]
        report: bool,
    },

    /// Print the anonymized label for each address
    Anonymize {
        #[arg(required = true)]
        addresses: Vec<String>,
    },

    /// Build a compose link for a mail client
    Link {
        /// Recipient address
        #[arg(long)]
        to: String,

        #[arg(long, default_value = "")]
        cc: String,

        #[arg(long, default_value = "")]
        subject: String,

        #[arg(long, default_value = "")]
        body: String,

        /// default (mailto), gmail or outlook (default from config)
        #[arg(long)]
        client: Option<MailClient>,
    },

    /// Build a link replying to the last message of an original thread
    Reply {
        /// Unsanitized thread file
        thread: PathBuf,

        /// Reply body
        #[arg(long, conflicts_with = "body_file", required_unless_present = "body_file")]
        body: Option<String>,

        /// Read the reply body from a file
        #[arg(long)]
        body_file: Option<PathBuf>,

        /// default (mailto), gmail or outlook (default from config)
        #[arg(long)]
        client: Option<MailClient>,
    },

    /// Show the effective configuration
    Config {
        /// Print the config file location instead
        #[arg(long)]
        path: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RedactTarget {
    All,
    Emails,
    Phones,
}
