//! Collaborators that complete asynchronously: geolocation and image reads.
//!
//! Neither mutates settings; callers apply the result (`apply_location`,
//! `AppearanceEdit::LogoImage`) once it arrives.

use std::future::Future;
use std::path::Path;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ExternalError;

pub const DEFAULT_GEOLOCATION_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Source of the device position.
pub trait LocationProvider {
    fn current_position(
        &self,
    ) -> impl Future<Output = Result<Coordinates, ExternalError>> + Send;
}

/// Ask `provider` for a position, giving up after `timeout`.
pub async fn locate<P: LocationProvider>(
    provider: &P,
    timeout: Duration,
) -> Result<Coordinates, ExternalError> {
    match tokio::time::timeout(timeout, provider.current_position()).await {
        Ok(Ok(position)) => {
            debug!(?position, "location resolved");
            Ok(position)
        }
        Ok(Err(err)) => {
            warn!(error = %err, "location lookup failed");
            Err(err)
        }
        Err(_) => {
            warn!(timeout_secs = timeout.as_secs_f32(), "location lookup timed out");
            Err(ExternalError::GeolocationTimeout(timeout))
        }
    }
}

/// Read an image file into a `data:` URI suitable for logo or background use.
pub async fn read_image_data_uri(path: &Path) -> Result<String, ExternalError> {
    let mime = image_mime(path).ok_or_else(|| ExternalError::UnsupportedImage(path.to_path_buf()))?;

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ExternalError::ImageRead {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), bytes = bytes.len(), "image loaded");
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Fixed(Coordinates);

    impl LocationProvider for Fixed {
        async fn current_position(&self) -> Result<Coordinates, ExternalError> {
            Ok(self.0)
        }
    }

    struct Stalled;

    impl LocationProvider for Stalled {
        async fn current_position(&self) -> Result<Coordinates, ExternalError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Err(ExternalError::GeolocationUnavailable("never".to_string()))
        }
    }

    struct Denied;

    impl LocationProvider for Denied {
        async fn current_position(&self) -> Result<Coordinates, ExternalError> {
            Err(ExternalError::GeolocationUnavailable(
                "permission denied".to_string(),
            ))
        }
    }

    #[tokio::test]
    async fn test_locate_returns_position() {
        let here = Coordinates {
            latitude: 51.5,
            longitude: -0.12,
        };
        let position = locate(&Fixed(here), DEFAULT_GEOLOCATION_TIMEOUT)
            .await
            .unwrap();
        assert_eq!(position, here);
    }

    #[tokio::test]
    async fn test_locate_times_out() {
        let err = locate(&Stalled, Duration::from_millis(20)).await.unwrap_err();
        assert!(matches!(err, ExternalError::GeolocationTimeout(_)));
    }

    #[tokio::test]
    async fn test_locate_passes_provider_failure_through() {
        let err = locate(&Denied, DEFAULT_GEOLOCATION_TIMEOUT)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Location unavailable: permission denied");
    }

    #[tokio::test]
    async fn test_read_image_data_uri() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logo.PNG");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let uri = read_image_data_uri(&path).await.unwrap();
        assert_eq!(uri, "data:image/png;base64,iVBORw==");
    }

    #[tokio::test]
    async fn test_read_image_errors() {
        let missing = read_image_data_uri(Path::new("/nonexistent/logo.png"))
            .await
            .unwrap_err();
        assert!(matches!(missing, ExternalError::ImageRead { .. }));

        let unsupported = read_image_data_uri(Path::new("notes.txt")).await.unwrap_err();
        assert!(matches!(unsupported, ExternalError::UnsupportedImage(_)));
    }
}
