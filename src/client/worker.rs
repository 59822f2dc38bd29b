//! Runs wiki requests off the event loop.
//!
//! Each request gets its own thread. The thread performs one blocking call and
//! posts exactly one completion event back through the channel; it never touches
//! application state.

use crate::client::WikiApi;
use crate::model::WikiSource;
use crate::state::{AppEvent, RequestId};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use tracing::debug;

/// Dispatches [`WikiApi`] calls to background threads.
pub struct RequestWorker {
    api: Arc<dyn WikiApi>,
    events: Sender<AppEvent>,
}

impl RequestWorker {
    /// Create a worker that answers on `events`.
    pub fn new(api: Arc<dyn WikiApi>, events: Sender<AppEvent>) -> Self {
        Self { api, events }
    }

    /// Search in the background; answers with [`AppEvent::SearchCompleted`].
    pub fn search(&self, id: RequestId, term: String, source: WikiSource) {
        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        thread::spawn(move || {
            let result = api.search(&term, source);
            // Receiver gone means the app is shutting down
            if events.send(AppEvent::SearchCompleted { id, term, result }).is_err() {
                debug!("Dropped search completion, event loop has exited");
            }
        });
    }

    /// Fetch in the background; answers with [`AppEvent::FetchCompleted`].
    pub fn fetch_article(&self, id: RequestId, title: String, source: WikiSource) {
        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        thread::spawn(move || {
            let result = api.fetch_article(&title, source);
            let event = AppEvent::FetchCompleted { id, title, result };
            if events.send(event).is_err() {
                debug!("Dropped fetch completion, event loop has exited");
            }
        });
    }
}
