//! Error types for pwsmith.
//!
//! Generation, clipboard and session failures each get their own enum so
//! callers can tell a bad configuration apart from an unusable clipboard.

use thiserror::Error;

/// Reasons a password cannot be generated from a configuration.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    #[error("At least one character type must be selected.")]
    InvalidConfiguration,

    #[error("Password length must be a positive integer.")]
    InvalidLength,
}

/// Failures reported by a clipboard collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard init error: {0}")]
    Unavailable(String),

    #[error("Clipboard set error: {0}")]
    Write(String),
}

/// Errors that end a password session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("invalid {field}: '{input}' is not a valid integer")]
    Parse { field: &'static str, input: String },

    #[error("Password count must be a positive integer.")]
    InvalidCount,

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    pub fn parse<T: Into<String>>(field: &'static str, input: T) -> Self {
        Self::Parse {
            field,
            input: input.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
