mod action;

pub use action::*;

use qrforge_engine::normalize_url;
use qrforge_types::{
    AppearanceSettings, BackgroundImage, ContentFields, ContentPayload, ContentType,
    FrameSettings, HistoryEntry, LogoOverlay, RenderRequest, clamp_logo_ratio,
    clamp_margin, clamp_size, is_hex_color,
};
use tracing::debug;

use crate::external::Coordinates;
use crate::{Error, Result};

/// Single source of truth for what the preview shows.
///
/// Field records of every content type are retained across type switches;
/// only `qr_value` is tied to the active type and cleared when it changes.
/// Every mutation either applies completely or returns an error with the
/// store untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsStore {
    content_type: ContentType,
    fields: ContentFields,
    appearance: AppearanceSettings,
    qr_value: String,
    defaults: AppearanceSettings,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::with_defaults(AppearanceSettings::default())
    }
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from configured appearance defaults; resets return to these.
    pub fn with_defaults(defaults: AppearanceSettings) -> Self {
        Self {
            content_type: ContentType::Url,
            fields: ContentFields::default(),
            appearance: defaults.clone(),
            qr_value: String::new(),
            defaults,
        }
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn fields(&self) -> &ContentFields {
        &self.fields
    }

    pub fn appearance(&self) -> &AppearanceSettings {
        &self.appearance
    }

    /// Last generated text; empty until a generation succeeds.
    pub fn qr_value(&self) -> &str {
        &self.qr_value
    }

    pub fn active_payload(&self) -> ContentPayload {
        self.fields.payload(self.content_type)
    }

    pub(crate) fn set_qr_value(&mut self, value: String) {
        self.qr_value = value;
    }

    pub fn apply(&mut self, action: impl Into<SettingsAction>) -> Result<()> {
        match action.into() {
            SettingsAction::SelectType(ty) => {
                self.select_type(ty);
                Ok(())
            }
            SettingsAction::Content(edit) => {
                edit.apply(&mut self.fields);
                Ok(())
            }
            SettingsAction::Appearance(edit) => self.edit_appearance(edit),
        }
    }

    /// Switch the active type. Selecting the current type is a no-op.
    pub fn select_type(&mut self, ty: ContentType) {
        if ty != self.content_type {
            debug!(from = %self.content_type, to = %ty, "content type switched");
            self.content_type = ty;
            self.qr_value.clear();
        }
    }

    fn edit_appearance(&mut self, edit: AppearanceEdit) -> Result<()> {
        let a = &mut self.appearance;
        match edit {
            AppearanceEdit::ForegroundColor(color) => {
                a.foreground_color = checked_color("foreground", color)?;
            }
            AppearanceEdit::BackgroundColor(color) => {
                if !a.background_color_editable() {
                    return Err(Error::InvalidOperation(
                        "background color is controlled by the background image or frame"
                            .to_string(),
                    ));
                }
                a.background_color = checked_color("background", color)?;
            }
            AppearanceEdit::Size(size) => a.size = clamp_size(size),
            AppearanceEdit::ErrorCorrection(level) => a.error_correction = level,
            AppearanceEdit::Margin(margin) => a.margin = clamp_margin(margin),

            // Disabling a customization drops its data; enabling never fills it in.
            AppearanceEdit::LogoEnabled(true) => a.logo.enabled = true,
            AppearanceEdit::LogoEnabled(false) => a.logo = LogoOverlay::default(),
            AppearanceEdit::LogoImage(image) => {
                require_enabled(a.logo.enabled, "logo")?;
                a.logo.image = image;
            }
            AppearanceEdit::LogoSizeRatio(ratio) => a.logo.size_ratio = clamp_logo_ratio(ratio),
            AppearanceEdit::LogoCutout(cutout) => a.logo.cutout = cutout,

            AppearanceEdit::BackgroundImageEnabled(true) => a.background_image.enabled = true,
            AppearanceEdit::BackgroundImageEnabled(false) => {
                a.background_image = BackgroundImage::default()
            }
            AppearanceEdit::BackgroundImage(image) => {
                require_enabled(a.background_image.enabled, "background image")?;
                a.background_image.image = image;
            }

            AppearanceEdit::FrameEnabled(true) => a.frame.enabled = true,
            AppearanceEdit::FrameEnabled(false) => a.frame = FrameSettings::default(),
            AppearanceEdit::FrameStyle(style) => {
                require_enabled(a.frame.enabled, "frame")?;
                a.frame.style = style;
            }
            AppearanceEdit::FrameCaption(caption) => {
                require_enabled(a.frame.enabled, "frame")?;
                a.frame.caption = caption.filter(|c| !c.trim().is_empty());
            }
        }
        Ok(())
    }

    /// Clear one type's fields, or every field plus the generated value.
    pub fn reset_fields(&mut self, ty: Option<ContentType>) {
        match ty {
            Some(ty) => self.fields.reset(ty),
            None => {
                self.fields = ContentFields::default();
                self.qr_value.clear();
            }
        }
    }

    /// Base options only; logo, background image and frame keep their state.
    pub fn reset_appearance(&mut self) {
        let a = &mut self.appearance;
        a.foreground_color = self.defaults.foreground_color.clone();
        a.background_color = self.defaults.background_color.clone();
        a.size = self.defaults.size;
        a.error_correction = self.defaults.error_correction;
        a.margin = self.defaults.margin;
    }

    pub fn reset_logo(&mut self) {
        self.appearance.logo = LogoOverlay::default();
    }

    pub fn reset_background(&mut self) {
        self.appearance.background_image = BackgroundImage::default();
    }

    pub fn reset_frame(&mut self) {
        self.appearance.frame = FrameSettings::default();
    }

    pub fn reset_all(&mut self) {
        *self = Self::with_defaults(self.defaults.clone());
    }

    /// Put the store back in the state a history entry was generated from.
    pub fn restore(&mut self, entry: &HistoryEntry) {
        self.content_type = entry.content_type;
        self.fields.store(entry.payload.clone());
        self.appearance = entry.appearance.restore();
        self.qr_value = entry.encoded.clone();
    }

    /// Normalize the url field in place (the on-blur step).
    pub fn normalize_url_input(&mut self) {
        let normalized = normalize_url(&self.fields.url.text);
        self.fields.url.text = normalized;
    }

    pub fn apply_location(&mut self, position: Coordinates) {
        self.fields.geo.latitude = format!("{:.6}", position.latitude);
        self.fields.geo.longitude = format!("{:.6}", position.longitude);
    }

    /// Input for the renderer, or `None` while nothing has been generated.
    pub fn render_request(&self) -> Option<RenderRequest> {
        if self.qr_value.is_empty() {
            return None;
        }
        Some(RenderRequest::new(self.qr_value.clone(), &self.appearance))
    }
}

fn checked_color(which: &str, color: String) -> Result<String> {
    let color = color.trim().to_ascii_lowercase();
    if is_hex_color(&color) {
        Ok(color)
    } else {
        Err(Error::InvalidValue(format!(
            "{} color '{}' is not #rgb or #rrggbb",
            which, color
        )))
    }
}

fn require_enabled(enabled: bool, category: &str) -> Result<()> {
    if enabled {
        Ok(())
    } else {
        Err(Error::InvalidOperation(format!("{} is disabled", category)))
    }
}
