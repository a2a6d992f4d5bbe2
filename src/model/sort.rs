use std::cmp::Ordering;

use snafu::Snafu;

use super::*;

/// A column the table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "views")]
    Views,
    #[serde(rename = "likes")]
    Likes,
    #[serde(rename = "publishedAt")]
    PublishedAt,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Title,
        SortKey::Views,
        SortKey::Likes,
        SortKey::PublishedAt,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Views => "views",
            SortKey::Likes => "likes",
            SortKey::PublishedAt => "publishedAt",
        }
    }

    /// Ascending comparison of two records on this key.
    ///
    /// A record without a publish date orders before any dated record.
    pub fn compare(self, a: &VideoRecord, b: &VideoRecord) -> Ordering {
        match self {
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Views => a.views.cmp(&b.views),
            SortKey::Likes => a.likes.cmp(&b.likes),
            SortKey::PublishedAt => a.published_at.cmp(&b.published_at),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Snafu, PartialEq)]
#[snafu(display("unknown sort key `{key}`"))]
pub struct ParseSortKeyError {
    key: String,
}

impl std::str::FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == input)
            .ok_or_else(|| ParseSortKeyError {
                key: input.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn flip(self) -> Direction {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Ascending => "↑",
            Direction::Descending => "↓",
        }
    }
}

/// The active ordering of the table. Starts at most-viewed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct SortState {
    pub key: SortKey,
    pub direction: Direction,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Views,
            direction: Direction::Descending,
        }
    }
}

impl SortState {
    /// State after a click on `key`: the active key flips, any other key
    /// enters ascending.
    pub fn toggled(self, key: SortKey) -> SortState {
        let direction = if self.key == key {
            self.direction.flip()
        } else {
            Direction::Ascending
        };

        SortState { key, direction }
    }

    pub fn compare(self, a: &VideoRecord, b: &VideoRecord) -> Ordering {
        self.direction.apply(self.key.compare(a, b))
    }
}
