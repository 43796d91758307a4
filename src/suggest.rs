use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::api::SuggestionSource;
use crate::config::SearchConfig;
use crate::document::Surface;
use crate::view;

/// Debounced search-suggestion dropdown for one input element.
///
/// Every keystroke cancels the previously scheduled fetch and, for
/// queries of at least the minimum length, schedules a new one after the
/// quiet period. Responses carry a sequence number so a stale response
/// can never overwrite the result of a newer query.
pub struct SearchSuggester {
    source: Arc<dyn SuggestionSource>,
    panel: Arc<dyn Surface>,
    search_page: String,
    quiet_period: Duration,
    min_query_len: usize,
    seq: AtomicU64,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl SearchSuggester {
    pub fn new(
        source: Arc<dyn SuggestionSource>,
        panel: Arc<dyn Surface>,
        search: &SearchConfig,
    ) -> Arc<Self> {
        Arc::new(Self {
            source,
            panel,
            search_page: search.page_path.clone(),
            quiet_period: Duration::from_millis(search.debounce_ms),
            min_query_len: search.min_query_len,
            seq: AtomicU64::new(0),
            pending: Mutex::new(None),
        })
    }

    /// Handle an input-change event with the current text of the box.
    pub fn on_input(self: &Arc<Self>, raw: &str) {
        let query = raw.trim().to_string();

        // Invalidates any response still in flight for an older query.
        let my_seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.cancel_pending();

        if query.chars().count() < self.min_query_len {
            self.panel.set_visible(false);
            return;
        }

        let this = Arc::clone(self);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(this.quiet_period).await;
            this.fetch_and_render(my_seq, &query).await;
        });
        *self.pending.lock().unwrap() = Some(handle);
    }

    async fn fetch_and_render(&self, my_seq: u64, query: &str) {
        let result = self.source.suggestions(query).await;

        if self.seq.load(Ordering::SeqCst) != my_seq {
            debug!(query, "discarding stale suggestion response");
            return;
        }

        match result {
            Ok(payload) if !payload.suggestions.is_empty() => {
                self.panel
                    .replace_html(&view::render_suggestions(&payload.suggestions, &self.search_page));
                self.panel.set_visible(true);
            }
            Ok(_) => {
                // Prior content stays as-is, only the box goes away.
                self.panel.set_visible(false);
            }
            Err(e) => {
                warn!("Suggestion request for {:?} failed: {}", query, e);
            }
        }
    }

    /// Handle a pointer click outside both the input and the panel.
    pub fn on_outside_click(&self) {
        self.panel.set_visible(false);
    }

    /// Cancel pending work so no timer or task outlives the component.
    pub fn detach(&self) {
        self.cancel_pending();
    }

    /// Await the currently scheduled fetch, if any. Used for orderly
    /// shutdown and deterministic tests.
    pub async fn flush(&self) {
        let handle = self.pending.lock().unwrap().take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }

    fn cancel_pending(&self) {
        if let Some(handle) = self.pending.lock().unwrap().take() {
            handle.abort();
        }
    }
}
