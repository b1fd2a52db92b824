use anyhow::Result;
use qrforge_testing::TestWorld;
use qrforge_testing::assertions::{assert_history_len, assert_history_types};
use qrforge_types::ContentType;

fn generate_url(world: &TestWorld, text: &str) -> Result<()> {
    let result = world.run(&["generate", "url", "--set", &format!("text={}", text)])?;
    assert!(result.success(), "generate failed: {}", result.stderr());
    Ok(())
}

#[test]
fn test_history_keeps_ten_newest() -> Result<()> {
    let world = TestWorld::new();

    for i in 0..11 {
        generate_url(&world, &format!("site{}.com", i))?;
    }

    let json = world.run_json(&["history", "list"])?.json()?;
    assert_history_len(&json, 10)?;
    assert_eq!(json["entries"][0]["originalInput"], "site10.com");
    assert_eq!(json["entries"][9]["originalInput"], "site1.com");
    Ok(())
}

#[test]
fn test_configured_capacity() -> Result<()> {
    let world = TestWorld::new().with_config("[history]\ncapacity = 2\n");

    for text in ["a.com", "b.com", "c.com"] {
        generate_url(&world, text)?;
    }

    let json = world.run_json(&["history", "list"])?.json()?;
    assert_history_len(&json, 2)?;
    assert_eq!(json["entries"][1]["originalInput"], "b.com");
    Ok(())
}

#[test]
fn test_replay_reproduces_value_and_appearance() -> Result<()> {
    let world = TestWorld::new();

    let first = world
        .run_json(&[
            "generate",
            "wifi",
            "--set",
            "ssid=Office",
            "--set",
            "password=hunter2",
            "--set",
            "encryption=WPA",
            "--fg",
            "#112233",
            "--frame",
            "banner",
            "--frame-caption",
            "Scan me",
        ])?
        .json()?;
    let id = first["entry"]["id"].as_str().unwrap().to_string();

    generate_url(&world, "example.com")?;

    let replayed = world.run_json(&["history", "replay", &id])?.json()?;
    assert_eq!(replayed["value"], first["value"]);
    assert_eq!(replayed["render"], first["render"]);
    assert_eq!(replayed["entry"]["appearance"], first["entry"]["appearance"]);
    assert_eq!(replayed["entry"]["payload"], first["entry"]["payload"]);
    assert_ne!(replayed["entry"]["id"], first["entry"]["id"]);

    let json = world.run_json(&["history", "list"])?.json()?;
    assert_history_types(&json, &[ContentType::Wifi, ContentType::Url, ContentType::Wifi])?;
    Ok(())
}

#[test]
fn test_show_accepts_id_prefix() -> Result<()> {
    let world = TestWorld::new();
    generate_url(&world, "example.com")?;

    let list = world.run_json(&["history", "list"])?.json()?;
    let id = list["entries"][0]["id"].as_str().unwrap().to_string();

    let shown = world.run_json(&["history", "show", &id[..18]])?.json()?;
    assert_eq!(shown["id"], id.as_str());
    assert_eq!(shown["encoded"], "https://example.com");

    let plain = world.run(&["history", "show", &id])?;
    assert!(plain.stdout().contains("https://example.com"));
    Ok(())
}

#[test]
fn test_unknown_id_fails() -> Result<()> {
    let world = TestWorld::new();
    generate_url(&world, "example.com")?;

    let result = world.run(&["history", "replay", "does-not-exist"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("Not found"), "{}", result.stderr());
    Ok(())
}

#[test]
fn test_clear_removes_stored_history() -> Result<()> {
    let world = TestWorld::new();
    generate_url(&world, "example.com")?;
    assert!(world.stored("qr_history").is_some());

    let result = world.run(&["history", "clear"])?;
    assert!(result.success());
    assert_eq!(result.stdout().trim(), "Cleared 1 history entries.");
    assert!(world.stored("qr_history").is_none());

    let list = world.run(&["history", "list"])?;
    assert_eq!(list.stdout().trim(), "No history yet.");
    Ok(())
}

#[test]
fn test_corrupt_history_reads_as_empty() -> Result<()> {
    let world = TestWorld::new();
    std::fs::write(world.data_dir().join("qr_history.json"), "{broken")?;

    let json = world.run_json(&["history", "list"])?.json()?;
    assert_history_len(&json, 0)?;

    generate_url(&world, "example.com")?;
    let json = world.run_json(&["history", "list"])?.json()?;
    assert_history_len(&json, 1)?;
    Ok(())
}
