//! Fixed-locale string collation with base-letter sensitivity.
//!
//! Case and diacritics never decide an ordering: `"Émile"`, `"emile"` and
//! `"EMILE"` collate as equal so the stable sort keeps their source order.
//! The rules approximate the `en` root collation: whitespace and punctuation
//! sort before digits, digits before letters.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Other,
    Digit,
    Letter,
}

fn classify(c: char) -> CharClass {
    if c.is_numeric() {
        CharClass::Digit
    } else if c.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Other
    }
}

/// Sort key for `value`: NFD-decomposed, combining marks dropped, lower-cased,
/// each character tagged with its class.
pub fn collation_key(value: &str) -> Vec<(u8, char)> {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| (classify(c) as u8, c))
        .collect()
}

pub fn collate(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_accents_are_ignored() {
        assert_eq!(collate("Émile", "emile"), Ordering::Equal);
        assert_eq!(collate("ZOË", "zoe"), Ordering::Equal);
        assert_eq!(collate("alice", "ALICE"), Ordering::Equal);
    }

    #[test]
    fn test_base_letters_order_alphabetically() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Ángel", "bob"), Ordering::Less);
        assert_eq!(collate("zed", "Álvaro"), Ordering::Greater);
    }

    #[test]
    fn test_empty_sorts_first() {
        assert_eq!(collate("", "a"), Ordering::Less);
        assert_eq!(collate("", ""), Ordering::Equal);
    }

    #[test]
    fn test_punctuation_before_digits_before_letters() {
        assert_eq!(collate("-x", "1x"), Ordering::Less);
        assert_eq!(collate("9", "a"), Ordering::Less);
        assert_eq!(collate("~", "a"), Ordering::Less);
    }
}
