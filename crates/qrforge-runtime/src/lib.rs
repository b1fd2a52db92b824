// Runtime layer - mutable session state on top of the encoding engine
// Settings, history and visible types live here; the CLI is a thin consumer

pub mod config;
pub mod error;
pub mod external;
pub mod generate;
pub mod history;
pub mod settings;
pub mod storage;
pub mod visible;
pub mod workspace;

pub use config::{Config, resolve_data_dir};
pub use error::{Error, ExternalError, Result};
pub use external::{
    Coordinates, DEFAULT_GEOLOCATION_TIMEOUT, LocationProvider, locate, read_image_data_uri,
};
pub use generate::{Generated, generate};
pub use history::{DEFAULT_HISTORY_CAPACITY, HISTORY_KEY, HistoryStore};
pub use settings::{AppearanceEdit, ContentEdit, SettingsAction, SettingsStore};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use visible::{VISIBLE_TYPES_KEY, VisibleTypes};
pub use workspace::Workspace;
