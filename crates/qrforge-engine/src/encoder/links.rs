use qrforge_types::{AppstoreFields, ContentType, GeoFields, MediaLinkFields, UrlFields, is_blank};

use super::{Encode, Encoded, require, require_any};
use crate::url::normalize_url;
use crate::{EncodeError, Result};

impl Encode for UrlFields {
    const CONTENT_TYPE: ContentType = ContentType::Url;

    fn encode(&self) -> Result<Encoded> {
        require(Self::CONTENT_TYPE, &[("text", &self.text)])?;
        Ok(Encoded::new(normalize_url(&self.text), self.text.trim()))
    }
}

impl Encode for GeoFields {
    const CONTENT_TYPE: ContentType = ContentType::Geo;

    fn encode(&self) -> Result<Encoded> {
        require(
            Self::CONTENT_TYPE,
            &[("latitude", &self.latitude), ("longitude", &self.longitude)],
        )?;

        let latitude = self.latitude.trim();
        let longitude = self.longitude.trim();
        coordinate("latitude", latitude, 90.0)?;
        coordinate("longitude", longitude, 180.0)?;

        let label = format!("{},{}", latitude, longitude);
        Ok(Encoded::new(format!("geo:{}", label), label))
    }
}

fn coordinate(field: &'static str, value: &str, limit: f64) -> Result<()> {
    let reason = match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v.abs() <= limit => return Ok(()),
        Ok(_) => format!("'{}' is outside ±{}", value, limit),
        Err(_) => format!("'{}' is not a number", value),
    };
    Err(EncodeError::Format {
        content_type: ContentType::Geo,
        field,
        reason,
    })
}

impl Encode for MediaLinkFields {
    const CONTENT_TYPE: ContentType = ContentType::MediaLink;

    fn encode(&self) -> Result<Encoded> {
        require(Self::CONTENT_TYPE, &[("url", &self.url)])?;

        let url = self.url.trim();
        let label = if is_blank(&self.platform) {
            url.to_string()
        } else {
            format!("{}: {}", self.platform.trim(), url)
        };
        Ok(Encoded::new(normalize_url(url), label))
    }
}

impl Encode for AppstoreFields {
    const CONTENT_TYPE: ContentType = ContentType::Appstore;

    /// A single store link encodes as the bare URL so scanners open it directly.
    fn encode(&self) -> Result<Encoded> {
        require_any(
            Self::CONTENT_TYPE,
            &[("iosUrl", &self.ios_url), ("androidUrl", &self.android_url)],
        )?;

        let ios = normalize_url(&self.ios_url);
        let android = normalize_url(&self.android_url);
        let app_name = self.app_name.trim();

        let value = match (ios.is_empty(), android.is_empty()) {
            (false, true) => ios.clone(),
            (true, false) => android.clone(),
            _ => {
                let mut lines = Vec::new();
                if !app_name.is_empty() {
                    lines.push(app_name.to_string());
                }
                lines.push(format!("iOS: {}", ios));
                lines.push(format!("Android: {}", android));
                lines.join("\n")
            }
        };

        let label = if app_name.is_empty() {
            if ios.is_empty() { android } else { ios }
        } else {
            app_name.to_string()
        };
        Ok(Encoded::new(value, label))
    }
}
