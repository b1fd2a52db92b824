use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

pub const MIN_SIZE: u32 = 50;
pub const MAX_SIZE: u32 = 1000;
pub const DEFAULT_SIZE: u32 = 256;
pub const MAX_MARGIN: u32 = 40;
pub const DEFAULT_MARGIN: u32 = 4;
pub const MIN_LOGO_RATIO: f32 = 0.05;
pub const MAX_LOGO_RATIO: f32 = 0.95;
pub const DEFAULT_LOGO_RATIO: f32 = 0.2;
pub const DEFAULT_FOREGROUND: &str = "#000000";
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Redundancy tier of the rendered code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCorrectionLevel {
    L,
    #[default]
    M,
    Q,
    H,
}

impl fmt::Display for ErrorCorrectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCorrectionLevel::L => write!(f, "L"),
            ErrorCorrectionLevel::M => write!(f, "M"),
            ErrorCorrectionLevel::Q => write!(f, "Q"),
            ErrorCorrectionLevel::H => write!(f, "H"),
        }
    }
}

impl FromStr for ErrorCorrectionLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" | "LOW" => Ok(ErrorCorrectionLevel::L),
            "M" | "MEDIUM" => Ok(ErrorCorrectionLevel::M),
            "Q" | "QUARTILE" => Ok(ErrorCorrectionLevel::Q),
            "H" | "HIGH" => Ok(ErrorCorrectionLevel::H),
            _ => Err(Error::UnknownOption {
                kind: "error-correction level",
                value: s.to_string(),
            }),
        }
    }
}

/// Decorative frame drawn around the code by the rendering collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FrameStyle {
    #[default]
    None,
    Square,
    Rounded,
    Banner,
    Bubble,
}

impl fmt::Display for FrameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameStyle::None => write!(f, "none"),
            FrameStyle::Square => write!(f, "square"),
            FrameStyle::Rounded => write!(f, "rounded"),
            FrameStyle::Banner => write!(f, "banner"),
            FrameStyle::Bubble => write!(f, "bubble"),
        }
    }
}

impl FromStr for FrameStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(FrameStyle::None),
            "square" => Ok(FrameStyle::Square),
            "rounded" => Ok(FrameStyle::Rounded),
            "banner" => Ok(FrameStyle::Banner),
            "bubble" => Ok(FrameStyle::Bubble),
            _ => Err(Error::UnknownOption {
                kind: "frame style",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoOverlay {
    pub enabled: bool,
    /// Image as a `data:` URI
    pub image: Option<String>,
    pub size_ratio: f32,
    /// Clear the modules underneath the logo instead of drawing over them
    pub cutout: bool,
}

impl Default for LogoOverlay {
    fn default() -> Self {
        Self {
            enabled: false,
            image: None,
            size_ratio: DEFAULT_LOGO_RATIO,
            cutout: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackgroundImage {
    pub enabled: bool,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrameSettings {
    pub enabled: bool,
    pub style: FrameStyle,
    pub caption: Option<String>,
}

/// Everything about how the code looks, independent of what it encodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppearanceSettings {
    pub foreground_color: String,
    pub background_color: String,
    pub size: u32,
    pub error_correction: ErrorCorrectionLevel,
    pub margin: u32,
    pub logo: LogoOverlay,
    pub background_image: BackgroundImage,
    pub frame: FrameSettings,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            foreground_color: DEFAULT_FOREGROUND.to_string(),
            background_color: DEFAULT_BACKGROUND.to_string(),
            size: DEFAULT_SIZE,
            error_correction: ErrorCorrectionLevel::default(),
            margin: DEFAULT_MARGIN,
            logo: LogoOverlay::default(),
            background_image: BackgroundImage::default(),
            frame: FrameSettings::default(),
        }
    }
}

impl AppearanceSettings {
    /// Background color is owned by the background image or frame while either is active.
    pub fn background_color_editable(&self) -> bool {
        let image_active = self.background_image.enabled && self.background_image.image.is_some();
        let frame_active = self.frame.enabled && self.frame.style != FrameStyle::None;
        !image_active && !frame_active
    }
}

pub fn clamp_size(size: u32) -> u32 {
    size.clamp(MIN_SIZE, MAX_SIZE)
}

pub fn clamp_margin(margin: u32) -> u32 {
    margin.min(MAX_MARGIN)
}

pub fn clamp_logo_ratio(ratio: f32) -> f32 {
    if ratio.is_nan() {
        return DEFAULT_LOGO_RATIO;
    }
    ratio.clamp(MIN_LOGO_RATIO, MAX_LOGO_RATIO)
}

/// `#rgb` or `#rrggbb`
pub fn is_hex_color(value: &str) -> bool {
    let Some(hex) = value.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

// ==========================================
// History snapshot
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub size_ratio: f32,
    #[serde(default)]
    pub cutout: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSnapshot {
    pub style: FrameStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Appearance as recorded in a history entry.
///
/// Optional customizations are present exactly when they were enabled at
/// generation time; restoring derives the enable flags from that presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceSnapshot {
    pub foreground_color: String,
    pub background_color: String,
    pub size: u32,
    pub error_correction: ErrorCorrectionLevel,
    pub margin: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<LogoSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<FrameSnapshot>,
}

impl AppearanceSnapshot {
    pub fn capture(settings: &AppearanceSettings) -> Self {
        let logo = settings.logo.enabled.then(|| LogoSnapshot {
            image: settings.logo.image.clone(),
            size_ratio: settings.logo.size_ratio,
            cutout: settings.logo.cutout,
        });
        let background_image = if settings.background_image.enabled {
            settings.background_image.image.clone()
        } else {
            None
        };
        let frame = settings.frame.enabled.then(|| FrameSnapshot {
            style: settings.frame.style,
            caption: settings.frame.caption.clone(),
        });

        Self {
            foreground_color: settings.foreground_color.clone(),
            background_color: settings.background_color.clone(),
            size: settings.size,
            error_correction: settings.error_correction,
            margin: settings.margin,
            logo,
            background_image,
            frame,
        }
    }

    pub fn restore(&self) -> AppearanceSettings {
        let logo = match &self.logo {
            Some(logo) => LogoOverlay {
                enabled: true,
                image: logo.image.clone(),
                size_ratio: clamp_logo_ratio(logo.size_ratio),
                cutout: logo.cutout,
            },
            None => LogoOverlay::default(),
        };
        let background_image = BackgroundImage {
            enabled: self.background_image.is_some(),
            image: self.background_image.clone(),
        };
        let frame = match &self.frame {
            Some(frame) => FrameSettings {
                enabled: true,
                style: frame.style,
                caption: frame.caption.clone(),
            },
            None => FrameSettings::default(),
        };

        AppearanceSettings {
            foreground_color: self.foreground_color.clone(),
            background_color: self.background_color.clone(),
            size: clamp_size(self.size),
            error_correction: self.error_correction,
            margin: clamp_margin(self.margin),
            logo,
            background_image,
            frame,
        }
    }
}
