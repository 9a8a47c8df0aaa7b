use contactview_testing::TestWorld;
use contactview_testing::assertions::{assert_aria_sort, assert_row_names};
use contactview_testing::fixtures::{ACCENTED_CONTACTS, PHONE_CONTACTS, SAMPLE_CONTACTS};

#[test]
fn test_name_sort_folds_case_and_accents() {
    let world = TestWorld::new().with_contacts(ACCENTED_CONTACTS);
    let (_, json) = world.run_json(&["list"]).unwrap();
    assert_row_names(&json, &["Adam", "Ångström", "émile", "Zoë"]).unwrap();
}

#[test]
fn test_descending_reverses_order() {
    let world = TestWorld::new().with_contacts(ACCENTED_CONTACTS);
    let (_, json) = world.run_json(&["list", "--desc"]).unwrap();
    assert_row_names(&json, &["Zoë", "émile", "Ångström", "Adam"]).unwrap();
    assert_aria_sort(&json, ["none", "descending", "none"]).unwrap();
}

#[test]
fn test_phone_sort_is_numeric() {
    let world = TestWorld::new().with_contacts(PHONE_CONTACTS);
    let (_, json) = world.run_json(&["list", "--sort", "phone"]).unwrap();
    assert_row_names(&json, &["Nine", "Twenty", "Hundred"]).unwrap();
    assert_aria_sort(&json, ["none", "none", "ascending"]).unwrap();

    let (_, json) = world
        .run_json(&["list", "--sort", "phone", "--desc"])
        .unwrap();
    assert_row_names(&json, &["Hundred", "Twenty", "Nine"]).unwrap();
}

#[test]
fn test_alias_sort_treats_absent_as_empty() {
    let world = TestWorld::new().with_contacts(SAMPLE_CONTACTS);
    let (_, json) = world
        .run_json(&["list", "--sort", "alias", "--query", "o"])
        .unwrap();
    // Bob has no alias; Home < Work
    assert_row_names(&json, &["Bob", "Émile Zola", "John Doe"]).unwrap();
    assert_aria_sort(&json, ["ascending", "none", "none"]).unwrap();
}

#[test]
fn test_unknown_sort_column_is_rejected() {
    let world = TestWorld::new().with_contacts(SAMPLE_CONTACTS);
    let result = world.run(&["list", "--sort", "email"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("unknown sort column"));
}
