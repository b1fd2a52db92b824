use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use qrforge_engine::EncodeError;

/// Result type for qrforge-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Encoder rejected the active content (missing or malformed field)
    Encode(EncodeError),

    /// Asynchronous collaborator failed (geolocation, image read)
    External(ExternalError),

    /// IO operation failed
    Io(std::io::Error),

    /// Stored data could not be (de)serialized
    Serialization(serde_json::Error),

    /// Configuration error
    Config(String),

    /// A value is outside what the setting accepts
    InvalidValue(String),

    /// Invalid operation or state
    InvalidOperation(String),

    /// Requested item does not exist
    NotFound(String),

    /// Identifier parsing failed in the types layer
    Types(qrforge_types::Error),
}

/// Failures of the collaborators that complete asynchronously.
#[derive(Debug)]
pub enum ExternalError {
    GeolocationUnavailable(String),
    GeolocationTimeout(Duration),
    ImageRead {
        path: PathBuf,
        source: std::io::Error,
    },
    UnsupportedImage(PathBuf),
}

impl fmt::Display for ExternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExternalError::GeolocationUnavailable(msg) => {
                write!(f, "Location unavailable: {}", msg)
            }
            ExternalError::GeolocationTimeout(after) => {
                write!(f, "Location request timed out after {}s", after.as_secs_f32())
            }
            ExternalError::ImageRead { path, source } => {
                write!(f, "Could not read image {}: {}", path.display(), source)
            }
            ExternalError::UnsupportedImage(path) => {
                write!(f, "Unsupported image type: {}", path.display())
            }
        }
    }
}

impl std::error::Error for ExternalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExternalError::ImageRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Encode(err) => write!(f, "{}", err),
            Error::External(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Serialization(err) => write!(f, "Serialization error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::InvalidValue(msg) => write!(f, "Invalid value: {}", msg),
            Error::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::Types(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Encode(err) => Some(err),
            Error::External(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Serialization(err) => Some(err),
            Error::Types(err) => Some(err),
            Error::Config(_)
            | Error::InvalidValue(_)
            | Error::InvalidOperation(_)
            | Error::NotFound(_) => None,
        }
    }
}

impl From<EncodeError> for Error {
    fn from(err: EncodeError) -> Self {
        Error::Encode(err)
    }
}

impl From<ExternalError> for Error {
    fn from(err: ExternalError) -> Self {
        Error::External(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err)
    }
}

impl From<qrforge_types::Error> for Error {
    fn from(err: qrforge_types::Error) -> Self {
        Error::Types(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
