use std::fmt;

/// Result type for loading the contact list
pub type Result<T> = std::result::Result<T, LoadError>;

/// Reasons the data source can fail to yield a contact list.
///
/// A load either produces the whole list or one of these; there is no
/// partial data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The resource could not be fetched at all
    Transport(String),

    /// The transport answered with a non-success status
    Status(u16),

    /// The body is not valid JSON
    Parse(String),

    /// The JSON is valid but the top-level value is not an array
    Shape(&'static str),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Transport(msg) => write!(f, "Transport error: {}", msg),
            LoadError::Status(status) => write!(f, "Request failed with status {}", status),
            LoadError::Parse(msg) => write!(f, "Invalid JSON: {}", msg),
            LoadError::Shape(found) => {
                write!(f, "Expected a JSON array of contacts, found {}", found)
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}
