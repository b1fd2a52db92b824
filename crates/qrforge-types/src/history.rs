use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AppearanceSnapshot, ContentPayload, ContentType};

/// Immutable record of one successful generation.
///
/// Holds everything needed to put the settings back exactly as they were:
/// the payload of the generated type, the appearance snapshot and the
/// encoded value itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Time-ordered unique identifier (UUIDv7).
    pub id: String,
    pub content_type: ContentType,
    /// Human-readable input shown in history lists.
    pub original_input: String,
    /// Exact text handed to the renderer.
    pub encoded: String,
    pub appearance: AppearanceSnapshot,
    pub payload: ContentPayload,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(
        original_input: impl Into<String>,
        encoded: impl Into<String>,
        appearance: AppearanceSnapshot,
        payload: ContentPayload,
    ) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            content_type: payload.content_type(),
            original_input: original_input.into(),
            encoded: encoded.into(),
            appearance,
            payload,
            created_at: Utc::now(),
        }
    }
}
