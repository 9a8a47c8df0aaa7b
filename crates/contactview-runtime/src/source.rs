//! Data source adapter: fetch a JSON document and turn it into contacts.
//!
//! The adapter never touches view state. Callers hand the returned
//! `Result` to the view, which decides how to display a failure.

use contactview_types::{ContactRecord, LoadError};
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

/// Location used when neither the command line nor the config names one.
pub const DEFAULT_LOCATION: &str = "contacts.json";

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw response from a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can fetch the bytes behind a location.
pub trait Transport {
    fn fetch(&self, location: &str) -> std::result::Result<FetchResponse, LoadError>;
}

/// Reads locations as filesystem paths, relative paths resolved against `base`.
#[derive(Debug, Clone, Default)]
pub struct FileTransport {
    base: Option<PathBuf>,
}

impl FileTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    pub fn resolve(&self, location: &str) -> PathBuf {
        let path = PathBuf::from(location);
        match &self.base {
            Some(base) if path.is_relative() => base.join(path),
            _ => path,
        }
    }
}

impl Transport for FileTransport {
    fn fetch(&self, location: &str) -> std::result::Result<FetchResponse, LoadError> {
        let path = self.resolve(location);
        let body = std::fs::read(&path)
            .map_err(|e| LoadError::Transport(format!("{}: {}", path.display(), e)))?;
        Ok(FetchResponse::ok(body))
    }
}

/// Fetches `http://` and `https://` locations.
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl HttpTransport {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new().timeout(HTTP_TIMEOUT).build();
        Self { agent }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, location: &str) -> std::result::Result<FetchResponse, LoadError> {
        let response = match self.agent.get(location).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(transport)) => {
                return Err(LoadError::Transport(transport.to_string()));
            }
        };

        let status = response.status();
        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        Ok(FetchResponse { status, body })
    }
}

/// True for `http://` and `https://` locations.
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Pick the transport that understands `location`.
pub fn transport_for(location: &str) -> Box<dyn Transport> {
    if is_remote(location) {
        Box::new(HttpTransport::new())
    } else {
        Box::new(FileTransport::new())
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Turn a response into contacts: success status, valid JSON, top-level array.
pub fn parse_response(
    response: &FetchResponse,
) -> std::result::Result<Vec<ContactRecord>, LoadError> {
    if !response.is_success() {
        return Err(LoadError::Status(response.status));
    }

    let value: Value = serde_json::from_slice(&response.body)?;
    match value {
        Value::Array(items) => Ok(items.iter().map(ContactRecord::from_value).collect()),
        other => Err(LoadError::Shape(describe(&other))),
    }
}

/// Fetch `location` through `transport` and parse the contact list.
pub fn load(
    transport: &dyn Transport,
    location: &str,
) -> std::result::Result<Vec<ContactRecord>, LoadError> {
    let result = transport
        .fetch(location)
        .and_then(|response| parse_response(&response));

    match &result {
        Ok(records) => tracing::info!(location, count = records.len(), "contacts loaded"),
        Err(err) => tracing::warn!(location, error = %err, "failed to load contacts"),
    }

    result
}

/// Load using the default transport for `location`.
pub fn load_from(location: &str) -> std::result::Result<Vec<ContactRecord>, LoadError> {
    load(transport_for(location).as_ref(), location)
}
