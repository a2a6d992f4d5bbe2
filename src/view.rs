use std::any::Any;
use std::error::Error;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::instrument;

use crate::model::{SortKey, SortState};
use crate::page::Page;
use crate::source::VideoSource;
use crate::table::TableController;

/// Where the view is in its single load.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Ready(TableController),
    Failed { message: String },
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

/// A mounted channel view: one fetch, then a sortable table.
///
/// The fetch runs as its own task and is aborted when the view is dropped.
#[derive(Debug)]
pub struct View {
    state: Arc<watch::Sender<ViewState>>,
    fetch: JoinHandle<()>,
}

impl View {
    /// Start the one fetch this view will ever make.
    pub fn mount<S: VideoSource>(source: S) -> View {
        let (state, _) = watch::channel(ViewState::Loading);
        let state = Arc::new(state);

        let fetch = tokio::spawn(load(source, state.clone()));

        View { state, fetch }
    }

    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn page(&self) -> Page {
        Page::from_state(&self.state.borrow())
    }

    /// Whether the fetch task is still running.
    pub fn is_fetching(&self) -> bool {
        !self.fetch.is_finished()
    }

    /// Apply a header click. Ignored until the table has loaded.
    pub fn sort_by(&self, key: SortKey) -> Option<SortState> {
        let mut applied = None;

        self.state.send_if_modified(|state| match state {
            ViewState::Ready(table) => {
                applied = Some(table.sort_by(key));
                true
            }
            ViewState::Loading | ViewState::Failed { .. } => false,
        });

        if applied.is_none() {
            tracing::debug!(%key, "ignoring sort, table is not loaded");
        }

        applied
    }

    /// Wait until the load has either succeeded or failed.
    pub async fn settled(&self) -> ViewState {
        let mut receiver = self.state.subscribe();
        let result = receiver.wait_for(|state| !state.is_loading()).await;

        match result {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        }
    }
}

impl Drop for View {
    fn drop(&mut self) {
        if !self.fetch.is_finished() {
            tracing::debug!("view dropped, cancelling pending fetch");
            self.fetch.abort();
        }
    }
}

/// Settles the state exactly once, even when the source panics.
#[instrument(skip_all)]
async fn load<S: VideoSource>(source: S, state: Arc<watch::Sender<ViewState>>) {
    let next = match AssertUnwindSafe(source.fetch()).catch_unwind().await {
        Ok(Ok(data)) => {
            let mut table = TableController::default();
            table.load(data.records, data.summary);
            ViewState::Ready(table)
        }
        Ok(Err(error)) => {
            let message = error_chain(&error);
            tracing::error!(error = %message, "could not fetch channel data");
            ViewState::Failed { message }
        }
        Err(panic) => {
            let message = format!("fetch panicked: {}", panic_message(panic.as_ref()));
            tracing::error!(error = %message, "could not fetch channel data");
            ViewState::Failed { message }
        }
    };

    state.send_replace(next);
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown cause"
    }
}

/// `outer: inner: innermost`
fn error_chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}
