use qrforge_types::{AppearanceSnapshot, HistoryEntry};
use serde::Serialize;
use tracing::{debug, info};

use crate::history::HistoryStore;
use crate::settings::SettingsStore;
use crate::storage::KeyValueStore;
use crate::Result;

/// Outcome of a successful generation.
#[derive(Debug, Clone, Serialize)]
pub struct Generated {
    pub value: String,
    pub entry: HistoryEntry,
}

/// Encode the active content and record it.
///
/// On success the history gains a new newest entry and `settings.qr_value()`
/// holds the encoded text. On any failure, validation or storage, neither
/// store is changed.
pub fn generate<S: KeyValueStore>(
    settings: &mut SettingsStore,
    history: &mut HistoryStore<S>,
) -> Result<Generated> {
    let payload = settings.active_payload();
    let content_type = payload.content_type();

    let encoded = qrforge_engine::encode(&payload).inspect_err(|err| {
        debug!(%content_type, error = %err, "generation rejected");
    })?;

    let entry = HistoryEntry::new(
        encoded.label,
        encoded.value.clone(),
        AppearanceSnapshot::capture(settings.appearance()),
        payload,
    );
    history.push(entry.clone())?;
    settings.set_qr_value(encoded.value.clone());

    info!(%content_type, id = %entry.id, "generated");
    Ok(Generated {
        value: encoded.value,
        entry,
    })
}
