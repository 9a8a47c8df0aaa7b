use contactview_types::ContactRecord;

/// Trim and lower-case raw search text into the comparison basis.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// A record matches when the normalized query is a substring of its alias,
/// name or phone (lower-cased, absent fields as empty).
///
/// `normalized` must already be the output of [`normalize_query`]. An empty
/// query matches every record.
pub fn matches_query(record: &ContactRecord, normalized: &str) -> bool {
    if normalized.is_empty() {
        return true;
    }

    [
        record.alias_or_empty(),
        record.name_or_empty(),
        record.phone_or_empty(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(normalized))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(alias: Option<&str>, name: Option<&str>, phone: Option<&str>) -> ContactRecord {
        ContactRecord::new(alias, name, phone)
    }

    #[test]
    fn test_normalize_query_trims_and_lowercases() {
        assert_eq!(normalize_query("  JoHn "), "john");
        assert_eq!(normalize_query("   "), "");
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(matches_query(&ContactRecord::default(), ""));
    }

    #[test]
    fn test_matches_any_field_case_insensitively() {
        let r = record(Some("Work"), Some("John Doe"), Some("555-1234"));
        assert!(matches_query(&r, "work"));
        assert!(matches_query(&r, "doe"));
        assert!(matches_query(&r, "5-12"));
        assert!(!matches_query(&r, "jane"));
    }

    #[test]
    fn test_absent_fields_are_empty_not_sentinel() {
        let r = record(None, Some("Jane"), None);
        assert!(!matches_query(&r, "n/a"));

        let literal = record(Some("N/A"), Some("Jane"), None);
        assert!(matches_query(&literal, "n/a"));
    }
}
