//! Response envelope shared by every endpoint

use serde::{Deserialize, Deserializer, Serialize};

/// Body returned by the fctask service: `{ code, message, data }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Service status code, when the server sends one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,

    /// Human-readable status message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Operation payload
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// Error body; only the message is of interest.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Deserialize an explicit `null` the same way as a missing key.
///
/// Pair with `#[serde(default)]`; `default` alone only covers absent keys.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
