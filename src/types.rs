//! Core types and errors for the prober.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

/// Marker attached to status checks that could not reach the target.
pub const UNREACHABLE: &str = "UNREACHABLE";

/// Errors raised while setting up or driving the tool.
#[derive(Error, Debug)]
pub enum WebEnumError {
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WebEnumError>;

/// Failure of a single probe. Carried back to the caller as data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The target could not be reached at all (DNS, refused, timed out).
    #[error("{message}")]
    Unreachable { message: String },

    /// Any other transport or protocol failure.
    #[error("{message}")]
    Request { message: String },
}

impl ProbeError {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ProbeError::Unreachable { .. })
    }
}

/// Outcome of one probe, exactly one shape per invocation.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ProbeResult {
    Headers(HeaderResult),
    Status(StatusResult),
    Params(ParamResult),
    Error(ErrorResult),
}

impl ProbeResult {
    /// Fold a probe outcome into a renderable result.
    pub fn from_outcome<T>(outcome: std::result::Result<T, ProbeError>) -> Self
    where
        T: Into<ProbeResult>,
    {
        match outcome {
            Ok(result) => result.into(),
            Err(e) => ProbeResult::Error(e.into()),
        }
    }
}

/// Response headers plus the security checklist.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeaderResult {
    pub url: String,
    pub status_code: u16,
    /// All response headers; repeated headers are joined with ", ".
    ///
    /// Keys are lowercase: `reqwest` normalises header names on receipt,
    /// so the casing the server sent is not available.
    pub headers: BTreeMap<String, String>,
    pub server: String,
    pub security_headers: SecurityReport,
}

/// Verdict per tracked security header.
///
/// Each value is either `"Present: <value>"` or the fixed warning for
/// that header. Entries keep checklist order and serialize as a map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityReport(pub Vec<(String, String)>);

impl SecurityReport {
    pub fn get(&self, header: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == header)
            .map(|(_, verdict)| verdict.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SecurityReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, verdict) in &self.0 {
            map.serialize_entry(name, verdict)?;
        }
        map.end()
    }
}

/// Reachability and timing for a HEAD request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusResult {
    pub url: String,
    pub status_code: u16,
    pub status_message: String,
    /// Round trip in seconds.
    pub response_time: f64,
}

/// Response to a GET carrying query parameters.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ParamResult {
    /// Final URL, including the encoded query string.
    pub url: String,
    pub status_code: u16,
    /// Body size in bytes.
    pub content_length: usize,
    pub content_type: String,
    pub preview: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorResult {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl From<ProbeError> for ErrorResult {
    fn from(e: ProbeError) -> Self {
        let status = e.is_unreachable().then(|| UNREACHABLE.to_string());
        Self {
            error: e.to_string(),
            status,
        }
    }
}

impl From<HeaderResult> for ProbeResult {
    fn from(r: HeaderResult) -> Self {
        ProbeResult::Headers(r)
    }
}

impl From<StatusResult> for ProbeResult {
    fn from(r: StatusResult) -> Self {
        ProbeResult::Status(r)
    }
}

impl From<ParamResult> for ProbeResult {
    fn from(r: ParamResult) -> Self {
        ProbeResult::Params(r)
    }
}

impl From<ErrorResult> for ProbeResult {
    fn from(r: ErrorResult) -> Self {
        ProbeResult::Error(r)
    }
}

/// Query parameters in the order they were given. Later keys replace
/// earlier ones in place.
pub type Params = Vec<(String, String)>;

/// Configuration for HTTP requests.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub user_agent: String,
    /// Timeout for header and status checks.
    pub probe_timeout: Duration,
    /// Timeout for parameter tests.
    pub params_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: "WebEnumTool/1.0 (Ethical Security Tool)".to_string(),
            probe_timeout: Duration::from_secs(10),
            params_timeout: Duration::from_secs(15),
        }
    }
}
