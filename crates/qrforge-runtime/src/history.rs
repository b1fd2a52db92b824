use qrforge_types::HistoryEntry;
use tracing::{debug, warn};

use crate::storage::KeyValueStore;
use crate::{Error, Result};

pub const HISTORY_KEY: &str = "qr_history";
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Bounded, newest-first list of generations backed by a key-value store.
///
/// Every change is written through before it is committed in memory, so a
/// failed write leaves the list exactly as it was. An empty history removes
/// its storage key instead of writing `[]`.
pub struct HistoryStore<S: KeyValueStore> {
    store: S,
    capacity: usize,
    entries: Vec<HistoryEntry>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Load persisted entries. Malformed data is treated as an empty history.
    pub fn load(store: S, capacity: usize) -> Result<Self> {
        let capacity = capacity.max(1);
        let entries = match store.get(HISTORY_KEY)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(mut entries) => {
                    entries.truncate(capacity);
                    entries
                }
                Err(err) => {
                    warn!(error = %err, "discarding unreadable history");
                    Vec::new()
                }
            },
        };

        debug!(count = entries.len(), capacity, "history loaded");
        Ok(Self {
            store,
            capacity,
            entries,
        })
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Look an entry up by full id or unique id prefix.
    pub fn resolve(&self, id_or_prefix: &str) -> Result<&HistoryEntry> {
        if let Some(entry) = self.get(id_or_prefix) {
            return Ok(entry);
        }

        let mut matches = self
            .entries
            .iter()
            .filter(|e| !id_or_prefix.is_empty() && e.id.starts_with(id_or_prefix));
        match (matches.next(), matches.next()) {
            (Some(entry), None) => Ok(entry),
            (Some(_), Some(_)) => Err(Error::InvalidOperation(format!(
                "history id prefix '{}' is ambiguous",
                id_or_prefix
            ))),
            (None, _) => Err(Error::NotFound(format!("history entry '{}'", id_or_prefix))),
        }
    }

    /// Add `entry` as the newest item, dropping the oldest beyond capacity.
    pub fn push(&mut self, entry: HistoryEntry) -> Result<()> {
        let mut next = Vec::with_capacity(self.capacity);
        next.push(entry);
        next.extend(self.entries.iter().take(self.capacity - 1).cloned());

        self.persist(&next)?;
        if self.entries.len() + 1 > self.capacity {
            debug!(capacity = self.capacity, "oldest history entry dropped");
        }
        self.entries = next;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.persist(&[])?;
        self.entries.clear();
        Ok(())
    }

    fn persist(&self, entries: &[HistoryEntry]) -> Result<()> {
        if entries.is_empty() {
            return self.store.remove(HISTORY_KEY);
        }
        let json = serde_json::to_string(entries)?;
        self.store.set(HISTORY_KEY, &json)
    }
}
