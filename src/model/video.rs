use serde::de::{DeserializeOwned, Deserializer};
use serde_json::Value;

use super::*;

/// One row of the channel table.
///
/// Upstream values are not validated. A field that cannot be read as its type
/// reads as zero or empty, and the rest of the record still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    #[serde(default, deserialize_with = "or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "or_default")]
    pub views: u64,
    #[serde(default, deserialize_with = "or_default")]
    pub likes: u64,
    #[serde(default, with = "crate::model::timestamp::lenient")]
    pub published_at: Option<Timestamp>,
    #[serde(default, rename = "thumbnail", deserialize_with = "or_default")]
    pub thumbnail_url: String,
    #[serde(default, rename = "youtubeUrl", deserialize_with = "or_default")]
    pub external_url: String,
}

fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }

    match T::deserialize(&value) {
        Ok(field) => Ok(field),
        Err(error) => {
            tracing::warn!(%value, %error, "ignoring malformed video field");
            Ok(T::default())
        }
    }
}
