use qrforge_runtime::settings::{VcardEdit, WifiEdit};
use qrforge_runtime::{
    AppearanceEdit, ContentEdit, HistoryStore, MemoryStore, SettingsStore, generate,
};
use qrforge_types::{ContentType, ErrorCorrectionLevel, FrameStyle, WifiEncryption};

const LOGO: &str = "data:image/png;base64,iVBORw==";

fn wifi_settings() -> SettingsStore {
    let mut settings = SettingsStore::new();
    settings.select_type(ContentType::Wifi);
    for edit in [
        WifiEdit::Ssid("My;Net".to_string()),
        WifiEdit::Password("p\"w".to_string()),
        WifiEdit::Encryption(WifiEncryption::Wpa),
        WifiEdit::Hidden(true),
    ] {
        settings.apply(ContentEdit::Wifi(edit)).unwrap();
    }
    settings
}

#[test]
fn test_replay_reproduces_identical_output() {
    // Given: a generation with a customized appearance
    let store = MemoryStore::new();
    let mut history = HistoryStore::load(&store, 10).unwrap();
    let mut settings = wifi_settings();
    for edit in [
        AppearanceEdit::ForegroundColor("#123456".to_string()),
        AppearanceEdit::ErrorCorrection(ErrorCorrectionLevel::H),
        AppearanceEdit::LogoEnabled(true),
        AppearanceEdit::LogoImage(Some(LOGO.to_string())),
        AppearanceEdit::FrameEnabled(true),
        AppearanceEdit::FrameStyle(FrameStyle::Rounded),
        AppearanceEdit::FrameCaption(Some("Guest WiFi".to_string())),
    ] {
        settings.apply(edit).unwrap();
    }
    let original = generate(&mut settings, &mut history).unwrap();
    assert_eq!(original.value, r#"WIFI:T:WPA;S:My\;Net;P:p\"w;H:true;;"#);
    let generated_from = settings.clone();

    // When: state drifts, then the entry is replayed and regenerated
    settings.reset_all();
    settings.select_type(ContentType::Url);
    let entry = history.latest().unwrap().clone();
    settings.restore(&entry);
    assert_eq!(settings.qr_value(), original.value);
    let again = generate(&mut settings, &mut history).unwrap();

    // Then: byte-identical output and the same settings
    assert_eq!(again.value, original.value);
    assert_eq!(settings.content_type(), ContentType::Wifi);
    assert_eq!(settings.fields().wifi, generated_from.fields().wifi);
    assert_eq!(settings.appearance(), generated_from.appearance());
    assert_eq!(history.len(), 2);
}

#[test]
fn test_disabled_customization_not_recorded() {
    let store = MemoryStore::new();
    let mut history = HistoryStore::load(&store, 10).unwrap();
    let mut settings = wifi_settings();
    settings.apply(AppearanceEdit::LogoEnabled(true)).unwrap();
    settings
        .apply(AppearanceEdit::LogoImage(Some(LOGO.to_string())))
        .unwrap();
    settings.apply(AppearanceEdit::LogoEnabled(false)).unwrap();

    let generated = generate(&mut settings, &mut history).unwrap();
    assert!(generated.entry.appearance.logo.is_none());
    assert!(generated.entry.appearance.frame.is_none());

    let render = settings.render_request().unwrap();
    assert!(render.logo_image.is_none());
}

#[test]
fn test_eleventh_entry_drops_oldest() {
    let store = MemoryStore::new();
    let mut history = HistoryStore::load(&store, 10).unwrap();
    let mut settings = SettingsStore::new();
    settings.select_type(ContentType::Vcard);

    for i in 0..11 {
        settings
            .apply(ContentEdit::Vcard(VcardEdit::Organization(format!("Org {}", i))))
            .unwrap();
        generate(&mut settings, &mut history).unwrap();
    }

    let labels: Vec<&str> = history
        .entries()
        .iter()
        .map(|e| e.original_input.as_str())
        .collect();
    assert_eq!(labels.len(), 10);
    assert_eq!(labels.first(), Some(&"Org 10"));
    assert_eq!(labels.last(), Some(&"Org 1"));
}

#[test]
fn test_type_switch_clears_output_but_preserves_fields() {
    let store = MemoryStore::new();
    let mut history = HistoryStore::load(&store, 10).unwrap();
    let mut settings = wifi_settings();
    generate(&mut settings, &mut history).unwrap();
    assert!(!settings.qr_value().is_empty());

    settings.select_type(ContentType::Url);
    settings.select_type(ContentType::Wifi);

    assert_eq!(settings.fields().wifi.ssid, "My;Net");
    assert_eq!(settings.qr_value(), "");
    assert!(settings.render_request().is_none());
}

#[test]
fn test_generation_is_repeatable() {
    let store = MemoryStore::new();
    let mut history = HistoryStore::load(&store, 10).unwrap();
    let mut settings = wifi_settings();

    let first = generate(&mut settings, &mut history).unwrap();
    let second = generate(&mut settings, &mut history).unwrap();

    assert_eq!(first.value, second.value);
    assert_eq!(first.entry.payload, second.entry.payload);
    assert_eq!(first.entry.appearance, second.entry.appearance);
    assert_ne!(first.entry.id, second.entry.id);
}
