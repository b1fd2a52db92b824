mod calendar;
mod contact;
mod links;
mod messaging;
mod structured;
mod wifi;

use qrforge_types::{ContentType, is_blank};

use crate::{EncodeError, Result};

/// Final encodable text plus the label stored as the history entry's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub value: String,
    pub label: String,
}

impl Encoded {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Encoder implemented by every per-type field record.
///
/// `encode` validates first and only then builds the text, so a returned
/// error always means no output was produced.
pub trait Encode {
    const CONTENT_TYPE: ContentType;

    fn encode(&self) -> Result<Encoded>;
}

/// Fail with every blank field of `fields` named.
fn require(content_type: ContentType, fields: &[(&'static str, &str)]) -> Result<()> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(EncodeError::MissingFields {
            content_type,
            fields: missing,
        })
    }
}

/// Fail unless at least one of `fields` is filled in.
fn require_any(content_type: ContentType, fields: &[(&'static str, &str)]) -> Result<()> {
    if fields.iter().any(|(_, value)| !is_blank(value)) {
        Ok(())
    } else {
        Err(EncodeError::MissingAnyOf {
            content_type,
            fields: fields.iter().map(|(name, _)| *name).collect(),
        })
    }
}

/// Percent-encode a query parameter value
fn encode_component(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_lists_all_blank_fields() {
        let err = require(
            ContentType::Vevent,
            &[("summary", " "), ("startDate", ""), ("location", "x")],
        )
        .unwrap_err();
        assert_eq!(err.fields(), vec!["summary", "startDate"]);
    }

    #[test]
    fn test_require_any_accepts_one() {
        assert!(
            require_any(
                ContentType::Vcard,
                &[("firstName", ""), ("organization", "Acme")]
            )
            .is_ok()
        );
        let err = require_any(
            ContentType::Vcard,
            &[("firstName", ""), ("organization", "")],
        )
        .unwrap_err();
        assert!(matches!(err, EncodeError::MissingAnyOf { .. }));
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("Hello world & more"), "Hello%20world%20%26%20more");
        assert_eq!(encode_component(""), "");
    }
}
