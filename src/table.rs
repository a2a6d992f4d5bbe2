use tracing::instrument;

use crate::model::{ChannelSummary, SortKey, SortState, VideoRecord};
use crate::store::DataStore;

/// Owns the [DataStore] and the active [SortState], and applies header
/// clicks to both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableController {
    store: DataStore,
    sort: SortState,
}

impl TableController {
    /// Load fetched data and order it by the active sort state, so the first
    /// render agrees with the header indicator.
    pub fn load(&mut self, records: Vec<VideoRecord>, summary: ChannelSummary) {
        self.store.load(records, summary);
        self.apply_sort();
    }

    /// Handle a click on the header of `key`.
    ///
    /// Clicking the active key flips its direction; any other key starts
    /// ascending. The sort is stable, so equal records keep their relative
    /// order within a single pass.
    #[instrument(skip(self), fields(previous = ?self.sort))]
    pub fn sort_by(&mut self, key: SortKey) -> SortState {
        self.sort = self.sort.toggled(key);
        self.apply_sort();

        tracing::debug!(sort = ?self.sort, records = self.store.ordered_records().len(), "sorted table");
        self.sort
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn records(&self) -> &[VideoRecord] {
        self.store.ordered_records()
    }

    pub fn summary(&self) -> Option<&ChannelSummary> {
        self.store.summary()
    }

    fn apply_sort(&mut self) {
        let sort = self.sort;
        self.store
            .reorder(|records| records.sort_by(|a, b| sort.compare(a, b)));
    }
}
