//! Assertions over the JSON the CLI prints with `--format json`.

use anyhow::{Context, Result};
use qrforge_types::ContentType;
use serde_json::Value;

fn history_entries(json: &Value) -> Result<&Vec<Value>> {
    json["entries"]
        .as_array()
        .context("Expected 'entries' array in JSON")
}

/// Assert that a `history list` output holds `expected` entries.
pub fn assert_history_len(json: &Value, expected: usize) -> Result<()> {
    let entries = history_entries(json)?;
    if entries.len() != expected {
        anyhow::bail!("Expected {} history entries, got {}", expected, entries.len());
    }
    Ok(())
}

/// Assert the content types of a `history list` output, newest first.
pub fn assert_history_types(json: &Value, expected: &[ContentType]) -> Result<()> {
    let actual: Vec<&str> = history_entries(json)?
        .iter()
        .map(|e| e["contentType"].as_str().unwrap_or("<missing>"))
        .collect();
    let expected: Vec<&str> = expected.iter().map(|t| t.as_str()).collect();

    if actual != expected {
        anyhow::bail!("Expected history types {:?}, got {:?}", expected, actual);
    }
    Ok(())
}

/// Assert whether a `types list` output shows `ty` as visible.
pub fn assert_visible(json: &Value, ty: ContentType, visible: bool) -> Result<()> {
    let list = json["visible"]
        .as_array()
        .context("Expected 'visible' array in JSON")?;
    let found = list.iter().any(|v| v.as_str() == Some(ty.as_str()));

    if found != visible {
        anyhow::bail!(
            "Expected {} to be {}, visible list is {:?}",
            ty,
            if visible { "visible" } else { "hidden" },
            list
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assert_history_types() {
        let json = json!({
            "entries": [
                {"contentType": "wifi"},
                {"contentType": "url"}
            ]
        });

        assert!(assert_history_len(&json, 2).is_ok());
        assert!(assert_history_types(&json, &[ContentType::Wifi, ContentType::Url]).is_ok());
        assert!(assert_history_types(&json, &[ContentType::Url]).is_err());
    }

    #[test]
    fn test_assert_visible() {
        let json = json!({ "visible": ["url", "whatsappGroup"], "hidden": ["pix"] });

        assert!(assert_visible(&json, ContentType::WhatsappGroup, true).is_ok());
        assert!(assert_visible(&json, ContentType::Pix, false).is_ok());
        assert!(assert_visible(&json, ContentType::Pix, true).is_err());
    }
}
