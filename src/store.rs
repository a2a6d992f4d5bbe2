use derive_new::new;

use crate::model::{ChannelSummary, VideoRecord};

/// The loaded channel data: a reorderable list of records and the summary
/// that came with it.
#[derive(Debug, Clone, Default, PartialEq, new)]
pub struct DataStore {
    #[new(default)]
    records: Vec<VideoRecord>,
    #[new(default)]
    summary: Option<ChannelSummary>,
}

impl DataStore {
    /// Replace the records and the summary wholesale.
    pub fn load(&mut self, records: Vec<VideoRecord>, summary: ChannelSummary) {
        if self.is_loaded() {
            tracing::warn!("replacing previously loaded channel data");
        }

        self.records = records;
        self.summary = Some(summary);
    }

    /// The records in their present order: the last sort, or fetch order.
    pub fn ordered_records(&self) -> &[VideoRecord] {
        &self.records
    }

    pub fn summary(&self) -> Option<&ChannelSummary> {
        self.summary.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.summary.is_some()
    }

    /// Reorder in place. Records are never added or removed here.
    pub(crate) fn reorder(&mut self, reorder: impl FnOnce(&mut [VideoRecord])) {
        reorder(&mut self.records);
    }
}
