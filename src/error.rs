//! Error types for the Base64 editor commands

use thiserror::Error;

/// Errors raised by a codec while transforming text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The input is not well-formed Base64 (bad symbol, bad padding, trailing bits)
    #[error("Invalid Base64 input: {0}")]
    InvalidBase64(String),

    /// The decoded bytes are not valid UTF-8
    #[error("Decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(String),
}

/// Reasons a single command invocation did not complete.
///
/// These never escape a command: each one is reported to the user as a
/// notification and handed back inside the invocation's
/// [`Outcome`](crate::command::Outcome).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// No editable document has focus
    #[error("No active editor")]
    NoActiveEditor,

    /// The selection is absent or empty; carries the prompt shown to the user
    #[error("{0}")]
    EmptySelection(String),

    /// The codec rejected the selected text
    #[error("{0}")]
    TransformFailure(#[from] CodecError),
}

/// Errors that can occur in the extension, registry and settings layers
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(String),

    /// A selection does not fit the document
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// No command is registered under the given id
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A command with the same id is already registered
    #[error("Duplicate command: {0}")]
    DuplicateCommand(String),

    /// The extension has not been activated
    #[error("Not activated")]
    NotActivated,

    /// The extension is already active
    #[error("Already active")]
    AlreadyActive,
}

/// Result type using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::JsonError(err.to_string())
    }
}
