use qrforge_types::*;

#[test]
fn test_digits_only() {
    assert_eq!(digits_only("+1 (555) 010-2000"), "15550102000");
    assert_eq!(digits_only("no digits"), "");
}

#[test]
fn test_is_blank() {
    assert!(is_blank(""));
    assert!(is_blank("  \t\n"));
    assert!(!is_blank(" x "));
}

#[test]
fn test_truncate() {
    let short = "short";
    assert_eq!(truncate(short, 10), "short");

    let long = "this is a very long string";
    let truncated = truncate(long, 10);
    assert_eq!(truncated, "this is a ...");
}

#[test]
fn test_history_entry_round_trips_through_json() {
    let mut fields = ContentFields::default();
    fields.wifi.ssid = "Cafe".to_string();
    let entry = HistoryEntry::new(
        "Cafe",
        "WIFI:T:WPA;S:Cafe;;",
        AppearanceSnapshot::capture(&AppearanceSettings::default()),
        fields.payload(ContentType::Wifi),
    );

    let json = serde_json::to_string(&entry).unwrap();
    let back: HistoryEntry = serde_json::from_str(&json).unwrap();
    assert_eq!(back, entry);
    assert_eq!(back.content_type, ContentType::Wifi);
}

#[test]
fn test_history_entry_ids_are_unique() {
    let snapshot = AppearanceSnapshot::capture(&AppearanceSettings::default());
    let payload = ContentFields::default().payload(ContentType::Url);
    let a = HistoryEntry::new("a", "a", snapshot.clone(), payload.clone());
    let b = HistoryEntry::new("b", "b", snapshot, payload);
    assert_ne!(a.id, b.id);
}
