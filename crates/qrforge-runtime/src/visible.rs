use std::str::FromStr;

use qrforge_types::ContentType;
use tracing::{debug, warn};

use crate::storage::KeyValueStore;
use crate::{Error, Result};

pub const VISIBLE_TYPES_KEY: &str = "visible_content_types";

/// Ordered set of content types offered to the user.
///
/// Persisted on its own key, independent of history. At least one type is
/// always visible.
pub struct VisibleTypes<S: KeyValueStore> {
    store: S,
    types: Vec<ContentType>,
}

impl<S: KeyValueStore> VisibleTypes<S> {
    /// Load the stored list. Unknown identifiers are dropped; unreadable or
    /// empty data falls back to the default subset.
    pub fn load(store: S) -> Result<Self> {
        let types = match store.get(VISIBLE_TYPES_KEY)? {
            None => ContentType::default_visible(),
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(ids) => {
                    let mut types = Vec::new();
                    for id in &ids {
                        match ContentType::from_str(id) {
                            Ok(ty) if !types.contains(&ty) => types.push(ty),
                            Ok(_) => {}
                            Err(_) => debug!(id = %id, "ignoring unknown content type"),
                        }
                    }
                    if types.is_empty() {
                        ContentType::default_visible()
                    } else {
                        types
                    }
                }
                Err(err) => {
                    warn!(error = %err, "discarding unreadable visible types");
                    ContentType::default_visible()
                }
            },
        };

        Ok(Self { store, types })
    }

    pub fn types(&self) -> &[ContentType] {
        &self.types
    }

    pub fn is_visible(&self, ty: ContentType) -> bool {
        self.types.contains(&ty)
    }

    /// Append `ty`. Returns false when it was already visible.
    pub fn show(&mut self, ty: ContentType) -> Result<bool> {
        if self.is_visible(ty) {
            return Ok(false);
        }
        let mut next = self.types.clone();
        next.push(ty);
        self.commit(next)?;
        Ok(true)
    }

    /// Remove `ty`. Returns false when it was not visible.
    pub fn hide(&mut self, ty: ContentType) -> Result<bool> {
        if !self.is_visible(ty) {
            return Ok(false);
        }
        if self.types.len() == 1 {
            return Err(Error::InvalidOperation(format!(
                "cannot hide {}: at least one content type must stay visible",
                ty
            )));
        }
        let next = self.types.iter().copied().filter(|t| *t != ty).collect();
        self.commit(next)?;
        Ok(true)
    }

    /// Replace the whole list, keeping first occurrences in order.
    pub fn set(&mut self, types: impl IntoIterator<Item = ContentType>) -> Result<()> {
        let mut next = Vec::new();
        for ty in types {
            if !next.contains(&ty) {
                next.push(ty);
            }
        }
        if next.is_empty() {
            return Err(Error::InvalidOperation(
                "at least one content type must stay visible".to_string(),
            ));
        }
        self.commit(next)
    }

    /// Back to the default subset; the stored list is removed.
    pub fn reset(&mut self) -> Result<()> {
        self.store.remove(VISIBLE_TYPES_KEY)?;
        self.types = ContentType::default_visible();
        Ok(())
    }

    fn commit(&mut self, next: Vec<ContentType>) -> Result<()> {
        let json = serde_json::to_string(&next)?;
        self.store.set(VISIBLE_TYPES_KEY, &json)?;
        self.types = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults_when_nothing_stored() {
        let store = MemoryStore::new();
        let visible = VisibleTypes::load(&store).unwrap();
        assert_eq!(visible.types(), ContentType::DEFAULT_VISIBLE.as_slice());
        assert!(!visible.is_visible(ContentType::Pix));
    }

    #[test]
    fn test_unknown_ids_dropped_and_order_kept() {
        let store = MemoryStore::new().with(
            VISIBLE_TYPES_KEY,
            r#"["coupon","hologram","url","coupon"]"#,
        );
        let visible = VisibleTypes::load(&store).unwrap();
        assert_eq!(visible.types(), &[ContentType::Coupon, ContentType::Url]);
    }

    #[test]
    fn test_malformed_or_empty_falls_back() {
        for raw in ["nope", "[]", r#"["hologram"]"#] {
            let store = MemoryStore::new().with(VISIBLE_TYPES_KEY, raw);
            let visible = VisibleTypes::load(&store).unwrap();
            assert_eq!(visible.types().len(), ContentType::DEFAULT_VISIBLE.len());
        }
    }

    #[test]
    fn test_show_hide_persist() {
        let store = MemoryStore::new();
        let mut visible = VisibleTypes::load(&store).unwrap();

        assert!(visible.show(ContentType::Menu).unwrap());
        assert!(!visible.show(ContentType::Menu).unwrap());
        assert!(visible.hide(ContentType::Url).unwrap());

        let reloaded = VisibleTypes::load(&store).unwrap();
        assert!(reloaded.is_visible(ContentType::Menu));
        assert!(!reloaded.is_visible(ContentType::Url));
        assert_eq!(reloaded.types().last(), Some(&ContentType::Menu));
    }

    #[test]
    fn test_last_type_cannot_be_hidden() {
        let store = MemoryStore::new();
        let mut visible = VisibleTypes::load(&store).unwrap();
        visible.set([ContentType::Geo, ContentType::Geo]).unwrap();
        assert_eq!(visible.types(), &[ContentType::Geo]);

        assert!(matches!(
            visible.hide(ContentType::Geo),
            Err(Error::InvalidOperation(_))
        ));
        assert!(visible.set(Vec::new()).is_err());
    }

    #[test]
    fn test_reset_removes_key() {
        let store = MemoryStore::new();
        let mut visible = VisibleTypes::load(&store).unwrap();
        visible.show(ContentType::Pix).unwrap();

        visible.reset().unwrap();
        assert!(!store.contains(VISIBLE_TYPES_KEY));
        assert!(!visible.is_visible(ContentType::Pix));
    }
}
