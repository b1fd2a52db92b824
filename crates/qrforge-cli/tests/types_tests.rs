use anyhow::Result;
use qrforge_testing::TestWorld;
use qrforge_testing::assertions::assert_visible;
use qrforge_types::ContentType;

#[test]
fn test_default_visible_types() -> Result<()> {
    let world = TestWorld::new();

    let json = world.run_json(&["types", "list"])?.json()?;
    assert_eq!(json["visible"].as_array().unwrap().len(), 9);
    assert_eq!(json["hidden"].as_array().unwrap().len(), 7);
    assert_visible(&json, ContentType::Url, true)?;
    assert_visible(&json, ContentType::Coupon, false)?;
    Ok(())
}

#[test]
fn test_show_and_hide_persist() -> Result<()> {
    let world = TestWorld::new();

    assert!(world.run(&["types", "show", "media-link"])?.success());
    let hide = world.run(&["types", "hide", "sms"])?;
    assert_eq!(hide.stdout().trim(), "sms is now hidden.");

    let json = world.run_json(&["types", "list"])?.json()?;
    assert_visible(&json, ContentType::MediaLink, true)?;
    assert_visible(&json, ContentType::Sms, false)?;
    assert_eq!(json["visible"].as_array().unwrap().last().unwrap(), "mediaLink");

    let again = world.run(&["types", "hide", "sms"])?;
    assert_eq!(again.stdout().trim(), "sms is already hidden.");
    Ok(())
}

#[test]
fn test_last_visible_type_cannot_be_hidden() -> Result<()> {
    let world = TestWorld::new();
    std::fs::write(
        world.data_dir().join("visible_content_types.json"),
        r#"["geo"]"#,
    )?;

    let result = world.run(&["types", "hide", "geo"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("at least one content type"), "{}", result.stderr());

    let json = world.run_json(&["types", "list"])?.json()?;
    assert_visible(&json, ContentType::Geo, true)?;
    Ok(())
}

#[test]
fn test_reset_restores_defaults() -> Result<()> {
    let world = TestWorld::new();
    world.run(&["types", "show", "pix"])?;
    assert!(world.stored("visible_content_types").is_some());

    let json = world.run_json(&["types", "reset"])?.json()?;
    assert_visible(&json, ContentType::Pix, false)?;
    assert!(world.stored("visible_content_types").is_none());
    Ok(())
}

#[test]
fn test_unknown_type_is_a_usage_error() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["types", "show", "hologram"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("hologram"), "{}", result.stderr());
    Ok(())
}

#[test]
fn test_plain_listing() -> Result<()> {
    let world = TestWorld::new();
    world.run(&["types", "hide", "geo"])?;
    world.run(&["types", "show", "menu"])?;

    let result = world.run(&["types", "list"])?;
    insta::assert_snapshot!(result.stdout(), @r"
    [x] url
    [x] wifi
    [x] vcard
    [x] vevent
    [x] email
    [x] sms
    [x] whatsapp
    [x] phone
    [x] menu
    [ ] geo
    [ ] whatsappGroup
    [ ] pix
    [ ] appstore
    [ ] mediaLink
    [ ] meeting
    [ ] coupon
    ");
    Ok(())
}
