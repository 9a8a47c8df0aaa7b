//! Contact documents shared by integration tests.

/// Mixed document: sentinel values, an absent field, non-string values and
/// a non-object element.
pub const SAMPLE_CONTACTS: &str = r#"[
  {"alias": "Work", "name": "John Doe", "phone": "555-1234"},
  {"alias": "N/A", "name": "Jane Smith", "phone": "N/A"},
  {"alias": "Home", "name": "Émile Zola", "phone": "+33 1 23 45 67 89"},
  {"name": "Bob", "phone": "555 0000"},
  {"alias": 42, "name": "Ann", "phone": null},
  "not an object"
]"#;

/// Names that only sort correctly with accent folding.
pub const ACCENTED_CONTACTS: &str = r#"[
  {"name": "Zoë"},
  {"name": "Ångström"},
  {"name": "émile"},
  {"name": "Adam"}
]"#;

/// Phones that differ in numeric and lexical order.
pub const PHONE_CONTACTS: &str = r#"[
  {"name": "Nine", "phone": "9"},
  {"name": "Hundred", "phone": "100"},
  {"name": "Twenty", "phone": "20"}
]"#;

/// Valid JSON with the wrong top-level shape.
pub const OBJECT_DOCUMENT: &str = r#"{"contacts": []}"#;

/// Not JSON at all.
pub const TRUNCATED_DOCUMENT: &str = r#"[{"name": "Jo"#;
