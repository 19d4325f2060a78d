use thiserror::Error;

/// Rejection produced by a question's validator. The message is shown to the
/// user verbatim at the point of entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("type catalog has no selectable types")]
    EmptyCatalog,
    #[error("type '{0}' has no emoji")]
    MissingEmoji(String),
    #[error("type '{0}' has no description")]
    MissingDescription(String),
    #[error("{0} must be greater than zero")]
    ZeroWidth(&'static str),
    #[error("default type '{0}' is not a selectable type")]
    UnknownDefaultType(String),
    #[error("{key} expects a whole number, got '{value}'")]
    InvalidNumber { key: String, value: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid answer for '{question}': {source}")]
    Validation {
        question: &'static str,
        #[source]
        source: ValidationError,
    },
    #[error("no answer given for '{0}'")]
    MissingAnswer(&'static str),
    #[error("unknown commit type '{0}'")]
    UnknownType(String),
    #[error("prompt aborted")]
    Aborted,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Host(#[from] anyhow::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
