use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Email thread is empty")]
    EmptyThread,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
