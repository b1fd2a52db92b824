use serde::{Deserialize, Serialize};

use crate::{AppearanceSettings, ErrorCorrectionLevel};

/// Input of the external rendering collaborator.
///
/// Carries the encoded text and the visual parameters, nothing about module
/// geometry. Logo fields are present only while an enabled logo has an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub text: String,
    pub size: u32,
    pub foreground_color: String,
    pub background_color: String,
    pub error_correction_level: ErrorCorrectionLevel,
    pub margin: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_size_ratio: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_cutout: Option<bool>,
}

impl RenderRequest {
    pub fn new(text: impl Into<String>, appearance: &AppearanceSettings) -> Self {
        let logo_image = if appearance.logo.enabled {
            appearance.logo.image.clone()
        } else {
            None
        };
        let has_logo = logo_image.is_some();

        Self {
            text: text.into(),
            size: appearance.size,
            foreground_color: appearance.foreground_color.clone(),
            background_color: appearance.background_color.clone(),
            error_correction_level: appearance.error_correction,
            margin: appearance.margin,
            logo_image,
            logo_size_ratio: has_logo.then_some(appearance.logo.size_ratio),
            logo_cutout: has_logo.then_some(appearance.logo.cutout),
        }
    }
}
