use contactview_testing::TestWorld;
use contactview_testing::assertions::{
    assert_aria_sort, assert_body_state, assert_row_names, assert_status,
};
use contactview_testing::fixtures::SAMPLE_CONTACTS;

fn world() -> TestWorld {
    TestWorld::new().with_contacts(SAMPLE_CONTACTS)
}

#[test]
fn test_list_without_query_shows_every_record() {
    let (result, json) = world().run_json(&["list"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    assert_row_names(
        &json,
        &["", "Ann", "Bob", "Émile Zola", "Jane Smith", "John Doe"],
    )
    .unwrap();
    assert_status(&json, "total", None, Some(6)).unwrap();
    assert_aria_sort(&json, ["none", "ascending", "none"]).unwrap();
}

#[test]
fn test_query_is_case_insensitive_substring() {
    let (_, json) = world().run_json(&["list", "--query", "JO"]).unwrap();
    assert_row_names(&json, &["John Doe"]).unwrap();
    assert_status(&json, "filtered", Some(1), Some(6)).unwrap();
}

#[test]
fn test_query_matches_phone_text() {
    let (_, json) = world().run_json(&["list", "--query", "555"]).unwrap();
    assert_row_names(&json, &["Bob", "John Doe"]).unwrap();
}

#[test]
fn test_sentinel_text_is_searchable() {
    let (_, json) = world().run_json(&["list", "--query", "n/a"]).unwrap();
    assert_row_names(&json, &["Jane Smith"]).unwrap();
}

#[test]
fn test_whitespace_query_matches_everything() {
    let (_, json) = world().run_json(&["list", "--query", "   "]).unwrap();
    assert_status(&json, "total", None, Some(6)).unwrap();
}

#[test]
fn test_no_match_renders_empty_body() {
    let (result, json) = world().run_json(&["list", "--query", "zzz"]).unwrap();
    assert!(result.success());
    assert_body_state(&json, "empty").unwrap();
    assert_status(&json, "filtered", Some(0), Some(6)).unwrap();
}

#[test]
fn test_cells_follow_sentinel_rules() {
    let (_, json) = world().run_json(&["list", "--query", "smith"]).unwrap();
    let row = &json["content"]["body"]["rows"][0];
    assert_eq!(row["alias"]["kind"], "missing");
    assert_eq!(row["phone"]["kind"], "missing");

    let (_, json) = world().run_json(&["list", "--query", "zola"]).unwrap();
    let row = &json["content"]["body"]["rows"][0];
    assert_eq!(row["alias"]["kind"], "copyable");
    assert_eq!(row["alias"]["text"], "Home");
    assert_eq!(row["phone"]["href"], "tel:+33123456789");
    assert_eq!(row["phone"]["text"], "+33 1 23 45 67 89");
}

#[test]
fn test_plain_output_shows_rows_and_status() {
    let result = world().run(&["list", "--query", "jo"]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("John Doe"));
    assert!(result.stdout().contains("1 of 6"));
    assert!(!result.stdout().contains("Jane Smith"));
}

#[test]
fn test_quiet_output_is_tab_separated() {
    let result = world().run(&["list", "--quiet", "--query", "555"]).unwrap();
    assert_eq!(
        result.stdout(),
        "N/A\tBob\t555 0000\nWork\tJohn Doe\t555-1234\n"
    );
}

#[test]
fn test_csv_output() {
    let result = world().run(&["--format", "csv", "list"]).unwrap();
    assert!(result.success());
    insta::assert_snapshot!(result.stdout().trim_end(), @r"
    alias,name,phone
    N/A,,N/A
    N/A,Ann,N/A
    N/A,Bob,555 0000
    Home,Émile Zola,+33 1 23 45 67 89
    N/A,Jane Smith,N/A
    Work,John Doe,555-1234
    ");
}

#[test]
fn test_browse_without_terminal_prints_list() {
    let (result, json) = world().run_json(&[]).unwrap();
    assert!(result.success());
    assert_status(&json, "total", None, Some(6)).unwrap();
}

#[test]
fn test_csv_output_replaces_control_characters() {
    let world = TestWorld::new()
        .with_contacts(r#"[{"name": "Eve\u001b]0;pwned\u0007\u001b[2J", "phone": "1"}]"#);
    let result = world.run(&["--format", "csv", "list"]).unwrap();

    assert!(result.success());
    assert!(!result.stdout().contains('\u{1b}'));
    assert!(!result.stdout().contains('\u{7}'));
    assert!(result.stdout().contains("Eve\u{FFFD}]0;pwned"));
}
