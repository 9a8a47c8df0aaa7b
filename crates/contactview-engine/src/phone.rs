use contactview_types::ContactRecord;
use std::cmp::Ordering;

/// Digits of a phone value with every non-digit removed and leading zeros
/// stripped. An empty result stands for the number 0.
pub fn phone_digits(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .skip_while(|c| *c == '0')
        .collect()
}

/// Compare two digit strings as non-negative integers of any length.
fn compare_digit_strings(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Numeric phone ordering: `"100"` sorts before `"+1-555-000-0200"`.
pub fn compare_phone(a: &ContactRecord, b: &ContactRecord) -> Ordering {
    compare_digit_strings(
        &phone_digits(a.phone_or_empty()),
        &phone_digits(b.phone_or_empty()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_phone(phone: Option<&str>) -> ContactRecord {
        ContactRecord::new(None, None, phone)
    }

    #[test]
    fn test_phone_digits_strips_formatting() {
        assert_eq!(phone_digits("+1 (555) 000-0200"), "15550000200");
        assert_eq!(phone_digits("N/A"), "");
        assert_eq!(phone_digits("007"), "7");
        assert_eq!(phone_digits("000"), "");
    }

    #[test]
    fn test_full_digit_string_compares_numerically() {
        let long = with_phone(Some("+1-555-000-0200"));
        let short = with_phone(Some("100"));
        assert_eq!(compare_phone(&short, &long), Ordering::Less);
        assert_eq!(compare_phone(&long, &short), Ordering::Greater);
    }

    #[test]
    fn test_missing_and_digitless_phones_are_zero() {
        let missing = with_phone(None);
        let sentinel = with_phone(Some("n/a"));
        let zero = with_phone(Some("0"));
        assert_eq!(compare_phone(&missing, &sentinel), Ordering::Equal);
        assert_eq!(compare_phone(&missing, &zero), Ordering::Equal);
        assert_eq!(compare_phone(&missing, &with_phone(Some("1"))), Ordering::Less);
    }

    #[test]
    fn test_numbers_beyond_u64_still_order() {
        let a = with_phone(Some("123456789012345678901234567890"));
        let b = with_phone(Some("123456789012345678901234567891"));
        assert_eq!(compare_phone(&a, &b), Ordering::Less);
    }
}
