//! Error types for the alias generator
//!
//! A single error type with a kind, a message and optional note/help
//! context, shared by every stage of the pipeline.

use std::fmt;

/// Additional context attached to an error
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub note: Option<String>,
    pub help: Option<String>,
}

/// Main error type for the alias generator
#[derive(Debug, Clone)]
pub struct ConvertError {
    pub kind: ErrorKind,
    pub message: String,
    pub context: ErrorContext,
}

impl ConvertError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.context.note = Some(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context.help = Some(help.into());
        self
    }
}

/// Categories of errors that can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Input errors
    FileNotFound,
    IoError,

    // Pattern compilation errors
    InvalidPattern,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::FileNotFound => "file not found",
            ErrorKind::IoError => "I/O error",
            ErrorKind::InvalidPattern => "invalid pattern",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;

        if let Some(note) = &self.context.note {
            write!(f, "\nnote: {}", note)?;
        }

        if let Some(help) = &self.context.help {
            write!(f, "\nhelp: {}", help)?;
        }

        Ok(())
    }
}

impl std::error::Error for ConvertError {}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        let kind = if err.kind() == std::io::ErrorKind::NotFound {
            ErrorKind::FileNotFound
        } else {
            ErrorKind::IoError
        };
        ConvertError::new(kind, err.to_string())
    }
}

impl From<regex::Error> for ConvertError {
    fn from(err: regex::Error) -> Self {
        ConvertError::new(ErrorKind::InvalidPattern, err.to_string())
    }
}

/// Result type for alias generation
pub type Result<T> = std::result::Result<T, ConvertError>;
