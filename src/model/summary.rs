use super::*;

/// Channel-wide counters shown above the table.
///
/// Built once from the upstream response and never derived from the
/// records afterwards; `sum_of_views` is whatever the server computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct ChannelSummary {
    pub name: Option<String>,
    pub subscriber_count: Option<u64>,
    pub channel_total_views: Option<u64>,
    pub video_count: u64,
    pub sum_of_views: Option<u64>,
}
