use contactview_testing::TestWorld;
use contactview_testing::assertions::assert_row_names;

#[test]
fn test_theme_defaults_to_dark() {
    let world = TestWorld::new();
    let (result, json) = world.run_json(&["theme", "show"]).unwrap();
    assert!(result.success());
    assert_eq!(json["content"]["theme"], "dark");
    assert_eq!(json["content"]["source"], "default");
    assert_eq!(json["content"]["aria_pressed"], true);
}

#[test]
fn test_ambient_light_background() {
    let world = TestWorld::new().with_env("COLORFGBG", "0;15");
    let (_, json) = world.run_json(&["theme", "show"]).unwrap();
    assert_eq!(json["content"]["theme"], "light");
    assert_eq!(json["content"]["source"], "ambient");
    assert_eq!(json["content"]["aria_pressed"], false);
}

#[test]
fn test_stored_theme_beats_ambient() {
    let world = TestWorld::new().with_env("COLORFGBG", "15;0");
    let result = world.run(&["theme", "set", "light"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(world.read_config().unwrap().contains("theme = \"light\""));

    let (_, json) = world.run_json(&["theme", "show"]).unwrap();
    assert_eq!(json["content"]["theme"], "light");
    assert_eq!(json["content"]["source"], "config");
}

#[test]
fn test_toggle_flips_and_persists() {
    let world = TestWorld::new();
    let (_, json) = world.run_json(&["theme", "toggle"]).unwrap();
    assert_eq!(json["content"]["theme"], "light");

    let (_, json) = world.run_json(&["theme", "toggle"]).unwrap();
    assert_eq!(json["content"]["theme"], "dark");
    assert!(world.read_config().unwrap().contains("theme = \"dark\""));
}

#[test]
fn test_invalid_theme_is_rejected() {
    let world = TestWorld::new();
    let result = world.run(&["theme", "set", "sepia"]).unwrap();
    assert!(!result.success());
    assert!(world.read_config().is_none());
}

#[test]
fn test_config_set_data_changes_default_location() {
    let world = TestWorld::new();
    world
        .write_file("people.json", r#"[{"name": "Stored"}]"#)
        .unwrap();

    let (result, json) = world
        .run_json(&["config", "set-data", "people.json"])
        .unwrap();
    assert!(result.success());
    assert_eq!(json["content"]["data_location"], "people.json");
    assert_eq!(json["content"]["data_location_source"], "config");

    let (_, json) = world.run_json(&["list"]).unwrap();
    assert_row_names(&json, &["Stored"]).unwrap();
}

#[test]
fn test_data_flag_overrides_config() {
    let world = TestWorld::new();
    world
        .write_file("people.json", r#"[{"name": "Stored"}]"#)
        .unwrap();
    world
        .write_file("other.json", r#"[{"name": "Flagged"}]"#)
        .unwrap();
    world.run(&["config", "set-data", "people.json"]).unwrap();

    let (_, json) = world
        .run_json(&["--data", "other.json", "list"])
        .unwrap();
    assert_row_names(&json, &["Flagged"]).unwrap();
    assert_eq!(json["content"]["source"], "other.json");
}

#[test]
fn test_config_show_without_file() {
    let world = TestWorld::new();
    let (result, json) = world.run_json(&["config", "show"]).unwrap();
    assert!(result.success());
    assert_eq!(json["content"]["config_exists"], false);
    assert_eq!(json["badge"]["level"], "info");
    assert_eq!(json["content"]["data_location"], "contacts.json");
    assert_eq!(json["content"]["data_location_source"], "default");
}
