use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::external::{Coordinates, LocationProvider, locate};
use crate::history::HistoryStore;
use crate::settings::SettingsStore;
use crate::storage::FileStore;
use crate::visible::VisibleTypes;
use crate::Result;

/// Everything a session needs, opened from one data directory.
///
/// Config is read from `config.toml`; history and visible types share a
/// `FileStore` rooted at the same directory.
pub struct Workspace {
    data_dir: PathBuf,
    config: Config,
    store: FileStore,
}

impl Workspace {
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let config = Config::load_from(&Config::path_in(&data_dir))?;
        debug!(data_dir = %data_dir.display(), "workspace opened");

        Ok(Self {
            store: FileStore::new(&data_dir),
            data_dir,
            config,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fresh settings starting from the configured appearance.
    pub fn settings(&self) -> Result<SettingsStore> {
        Ok(SettingsStore::with_defaults(
            self.config.appearance.to_settings()?,
        ))
    }

    pub fn history(&self) -> Result<HistoryStore<&FileStore>> {
        HistoryStore::load(&self.store, self.config.history.capacity)
    }

    pub fn visible_types(&self) -> Result<VisibleTypes<&FileStore>> {
        VisibleTypes::load(&self.store)
    }

    /// Ask `provider` for a position within the configured geolocation
    /// timeout and write it into the geo fields of `settings`.
    pub async fn fill_location<P: LocationProvider>(
        &self,
        provider: &P,
        settings: &mut SettingsStore,
    ) -> Result<Coordinates> {
        let position = locate(provider, self.config.geolocation.timeout()).await?;
        settings.apply_location(position);
        Ok(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ExternalError};
    use crate::generate::generate;
    use crate::settings::{ContentEdit, PhoneEdit};
    use qrforge_types::ContentType;
    use std::time::Duration;
    use tempfile::TempDir;

    struct Fixed(Coordinates);

    impl LocationProvider for Fixed {
        async fn current_position(&self) -> std::result::Result<Coordinates, ExternalError> {
            Ok(self.0)
        }
    }

    struct Stalled;

    impl LocationProvider for Stalled {
        async fn current_position(&self) -> std::result::Result<Coordinates, ExternalError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Err(ExternalError::GeolocationUnavailable("never".to_string()))
        }
    }

    #[test]
    fn test_history_survives_reopen() -> Result<()> {
        let temp_dir = TempDir::new()?;

        {
            let workspace = Workspace::open(temp_dir.path())?;
            let mut settings = workspace.settings()?;
            let mut history = workspace.history()?;
            settings.select_type(ContentType::Phone);
            settings.apply(ContentEdit::Phone(PhoneEdit::Number("+1 555 0100".to_string())))?;
            generate(&mut settings, &mut history)?;
        }

        let workspace = Workspace::open(temp_dir.path())?;
        let history = workspace.history()?;
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().unwrap().encoded, "tel:15550100");
        assert!(temp_dir.path().join("qr_history.json").exists());

        Ok(())
    }

    #[test]
    fn test_configured_capacity_applies() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let mut config = Config::default();
        config.history.capacity = 2;
        config.save_to(&Config::path_in(temp_dir.path()))?;

        let workspace = Workspace::open(temp_dir.path())?;
        assert_eq!(workspace.history()?.capacity(), 2);
        Ok(())
    }

    #[test]
    fn test_undecodable_stored_data_falls_back() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(temp_dir.path().join("qr_history.json"), [0xff, 0xfe, b'[', b']'])?;
        std::fs::write(temp_dir.path().join("visible_content_types.json"), [0xff, b'['])?;

        let workspace = Workspace::open(temp_dir.path())?;
        assert!(workspace.history()?.is_empty());
        assert_eq!(
            workspace.visible_types()?.types(),
            ContentType::DEFAULT_VISIBLE.as_slice()
        );

        let mut settings = workspace.settings()?;
        let mut history = workspace.history()?;
        settings.select_type(ContentType::Phone);
        settings.apply(ContentEdit::Phone(PhoneEdit::Number("5550100".to_string())))?;
        generate(&mut settings, &mut history)?;
        assert_eq!(workspace.history()?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_fill_location_writes_geo_fields() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let workspace = Workspace::open(temp_dir.path())?;
        let mut settings = workspace.settings()?;

        let here = Coordinates {
            latitude: -23.5505,
            longitude: -46.6333,
        };
        workspace.fill_location(&Fixed(here), &mut settings).await?;

        assert_eq!(settings.fields().geo.latitude, "-23.550500");
        assert_eq!(settings.fields().geo.longitude, "-46.633300");
        Ok(())
    }

    #[tokio::test]
    async fn test_fill_location_uses_configured_timeout() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(
            Config::path_in(temp_dir.path()),
            "[geolocation]\ntimeout_secs = 1\n",
        )?;

        let workspace = Workspace::open(temp_dir.path())?;
        let mut settings = workspace.settings()?;
        let before = settings.clone();

        let err = workspace
            .fill_location(&Stalled, &mut settings)
            .await
            .unwrap_err();
        match err {
            Error::External(ExternalError::GeolocationTimeout(after)) => {
                assert_eq!(after, Duration::from_secs(1))
            }
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(settings, before);
        Ok(())
    }
}
