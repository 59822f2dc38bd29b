//! Events consumed by [`crate::state::update`] and the effects it requests.

use crate::model::{Article, SearchResult, WikiError, WikiSource};
use crossterm::event::KeyEvent;

/// Identifies one issued request so its completion can be matched to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RequestId(pub u64);

impl RequestId {
    /// The id following this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Everything the event loop feeds into the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A key press.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
    /// A search issued through [`Effect::Search`] finished.
    SearchCompleted {
        /// Id carried by the originating effect.
        id: RequestId,
        /// The term that was searched.
        term: String,
        /// Results in server order, or why the search failed.
        result: Result<Vec<SearchResult>, WikiError>,
    },
    /// A fetch issued through [`Effect::FetchArticle`] finished.
    FetchCompleted {
        /// Id carried by the originating effect.
        id: RequestId,
        /// The requested title.
        title: String,
        /// The readable article, or why the fetch failed.
        result: Result<Article, WikiError>,
    },
}

/// Side effects requested by a transition. Performed by the caller, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Search `source` for `term`; answer with [`AppEvent::SearchCompleted`].
    Search {
        /// Echoed back in the completion.
        id: RequestId,
        /// Trimmed query.
        term: String,
        /// Wiki to search.
        source: WikiSource,
    },
    /// Fetch the article `title`; answer with [`AppEvent::FetchCompleted`].
    FetchArticle {
        /// Echoed back in the completion.
        id: RequestId,
        /// Article title as returned by the search.
        title: String,
        /// Wiki to fetch from.
        source: WikiSource,
    },
    /// Open `url` in the system browser. Failures are logged and ignored.
    OpenInBrowser {
        /// Page URL of the article.
        url: String,
    },
    /// Leave the application.
    Quit,
}
