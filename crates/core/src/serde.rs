//! Serde helpers for partial-update payloads.

use serde::{Deserialize, Deserializer};

/// Deserializes a field that is present in the payload as `Some(value)`,
/// with an explicit `null` becoming `Some(None)`.
///
/// Combine with `#[serde(default)]` so a missing field stays `None`.
pub fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
