use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Literal used by the data format (and the UI) for "intentionally no value".
pub const NOT_AVAILABLE: &str = "N/A";

/// Returns true when `value` is the "N/A" sentinel, compared case-insensitively.
///
/// The sentinel is a content convention: `"n/a"`, `"N/A"` and `"N/a"` all mean
/// the field has no usable value. Surrounding whitespace is not trimmed.
pub fn is_sentinel(value: &str) -> bool {
    value.eq_ignore_ascii_case(NOT_AVAILABLE)
}

/// One entry of the contact list.
///
/// All fields are optional free-form text. Records are never mutated after
/// loading; a reload replaces the whole set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ContactRecord {
    pub fn new(alias: Option<&str>, name: Option<&str>, phone: Option<&str>) -> Self {
        Self {
            alias: alias.map(str::to_string),
            name: name.map(str::to_string),
            phone: phone.map(str::to_string),
        }
    }

    /// Build a record from an arbitrary JSON element.
    ///
    /// Individual records are not validated: non-object elements yield an empty
    /// record and non-string values are treated as absent.
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Self {
            alias: field("alias"),
            name: field("name"),
            phone: field("phone"),
        }
    }

    pub fn alias_or_empty(&self) -> &str {
        self.alias.as_deref().unwrap_or("")
    }

    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn phone_or_empty(&self) -> &str {
        self.phone.as_deref().unwrap_or("")
    }

    /// Alias usable as a value, or `None` when absent or the sentinel.
    pub fn usable_alias(&self) -> Option<&str> {
        self.alias.as_deref().filter(|a| !is_sentinel(a))
    }

    /// Phone usable as a value, or `None` when absent or the sentinel.
    pub fn usable_phone(&self) -> Option<&str> {
        self.phone.as_deref().filter(|p| !is_sentinel(p))
    }
}
