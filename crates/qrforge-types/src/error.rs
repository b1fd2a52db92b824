use std::fmt;

/// Result type for qrforge-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Identifier does not name a content type
    UnknownContentType(String),

    /// Identifier does not name a closed-set option (encryption, frame style, level)
    UnknownOption { kind: &'static str, value: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownContentType(value) => write!(f, "Unknown content type: {}", value),
            Error::UnknownOption { kind, value } => write!(f, "Unknown {}: {}", kind, value),
        }
    }
}

impl std::error::Error for Error {}
