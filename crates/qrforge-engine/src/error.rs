use qrforge_types::ContentType;
use std::fmt;

/// Result type for qrforge-engine operations
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Reasons an encoder refuses its input.
///
/// Encoders return these as values; nothing in the engine panics on user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Every listed field is required and blank.
    MissingFields {
        content_type: ContentType,
        fields: Vec<&'static str>,
    },

    /// At least one of the listed fields must be filled in.
    MissingAnyOf {
        content_type: ContentType,
        fields: Vec<&'static str>,
    },

    /// A field is present but cannot be interpreted (e.g. an unparseable date).
    Format {
        content_type: ContentType,
        field: &'static str,
        reason: String,
    },
}

impl EncodeError {
    pub fn content_type(&self) -> ContentType {
        match self {
            EncodeError::MissingFields { content_type, .. }
            | EncodeError::MissingAnyOf { content_type, .. }
            | EncodeError::Format { content_type, .. } => *content_type,
        }
    }

    /// Fields the error is about, in display order.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            EncodeError::MissingFields { fields, .. }
            | EncodeError::MissingAnyOf { fields, .. } => fields.clone(),
            EncodeError::Format { field, .. } => vec![field],
        }
    }

    /// Missing-input errors, as opposed to format errors.
    pub fn is_validation(&self) -> bool {
        !matches!(self, EncodeError::Format { .. })
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::MissingFields {
                content_type,
                fields,
            } => write!(
                f,
                "Missing required field(s) for {}: {}",
                content_type,
                fields.join(", ")
            ),
            EncodeError::MissingAnyOf {
                content_type,
                fields,
            } => write!(
                f,
                "{} requires at least one of: {}",
                content_type,
                fields.join(", ")
            ),
            EncodeError::Format {
                content_type,
                field,
                reason,
            } => write!(f, "Invalid {} for {}: {}", field, content_type, reason),
        }
    }
}

impl std::error::Error for EncodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_names_fields() {
        let err = EncodeError::MissingFields {
            content_type: ContentType::Vevent,
            fields: vec!["summary", "startDate"],
        };
        assert_eq!(
            err.to_string(),
            "Missing required field(s) for vevent: summary, startDate"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_format_error_is_not_validation() {
        let err = EncodeError::Format {
            content_type: ContentType::Vevent,
            field: "startDate",
            reason: "unparseable date 'x'".to_string(),
        };
        assert!(!err.is_validation());
        assert_eq!(err.fields(), vec!["startDate"]);
        assert_eq!(
            err.to_string(),
            "Invalid startDate for vevent: unparseable date 'x'"
        );
    }
}
