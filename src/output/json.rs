//! JSON output formatting

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Envelope for JSON output: the payload, the server's message, and metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a, T: ?Sized> {
    pub data: &'a T,

    /// Message the service attached to the response, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'a str>,

    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// When the output was produced (RFC 3339, UTC)
    pub timestamp: String,

    /// fctask version
    pub version: &'static str,
}

impl Metadata {
    fn now() -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Format data as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    format_json_with_message(data, None)
}

/// Format data as pretty-printed JSON, carrying the service message along
pub fn format_json_with_message<T: Serialize + ?Sized>(
    data: &T,
    message: Option<&str>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput {
        data,
        message,
        meta: Metadata::now(),
    })
}
