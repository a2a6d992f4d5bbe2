use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use snafu::Snafu;

/// Publication instant of a video, kept in the offset it was reported in.
///
/// Ordering and equality compare the instant, not the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<FixedOffset>);

impl Timestamp {
    /// The calendar date in the timestamp's own offset.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }
}

#[derive(Debug, Snafu, PartialEq)]
#[snafu(display("`{text}` is neither an RFC 3339 timestamp nor a YYYY-MM-DD date"))]
pub struct ParseTimestampError {
    text: String,
}

impl std::str::FromStr for Timestamp {
    type Err = ParseTimestampError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();

        if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
            return Ok(Self(datetime));
        }

        // date-only values are taken as midnight UTC
        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|datetime| Self(datetime.and_utc().fixed_offset()))
            .ok_or_else(|| ParseTimestampError {
                text: input.to_string(),
            })
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.to_rfc3339().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Field adapter for upstream payloads: anything that is not a readable date
/// becomes `None` instead of failing the whole document.
pub mod lenient {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    use super::Timestamp;

    pub fn serialize<S: Serializer>(
        value: &Option<Timestamp>, serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Timestamp>, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;

        let timestamp = match value {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => match text.parse() {
                Ok(timestamp) => Some(timestamp),
                Err(error) => {
                    tracing::warn!(%error, "ignoring unreadable publish date");
                    None
                }
            },
            Some(other) => {
                tracing::warn!(value = %other, "ignoring non-text publish date");
                None
            }
        };

        Ok(timestamp)
    }
}
