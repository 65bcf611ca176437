use std::io;
use thiserror::Error;

/// Errors surfaced by the pattern demos.
///
/// Only `InvalidDiscriminant` and `UnknownPrototype` are domain failures; the
/// rest wrap the ambient plumbing (scenario parsing, writing demo output).
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("invalid {kind} discriminant: '{value}'")]
    InvalidDiscriminant { kind: &'static str, value: String },

    #[error("no prototype registered under '{0}'")]
    UnknownPrototype(String),

    #[error("invalid scenario: {0}")]
    Config(String),

    #[error("failed to parse scenario: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to write demo output: {0}")]
    Io(#[from] io::Error),

    #[error("worker thread panicked")]
    WorkerPanicked,
}

impl PatternError {
    pub fn invalid_discriminant(kind: &'static str, value: impl ToString) -> Self {
        Self::InvalidDiscriminant {
            kind,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
