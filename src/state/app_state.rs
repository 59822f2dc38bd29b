//! Application state.
//!
//! AppState is the root state type containing all UI state. It is plain data:
//! transitions live in [`crate::state::update`] and the handler modules, each a
//! pure function from the old state to the new one.

use crate::config::KeyBindings;
use crate::model::{SearchResult, WikiSource};
use crate::state::{ArticleView, RequestId, TextInput};

/// Rows of the terminal not available to the article body (title and footer).
pub const ARTICLE_CHROME_HEIGHT: usize = 4;

// ===== Screen =====

/// Which screen is displayed.
///
/// ```text
/// WikiSelect -> SearchResults -> Article <-> ArticleSearch
///      ^              |   ^         |             |
///      +---- esc -----+   +-- esc --+------esc----+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Choosing which wiki to search.
    #[default]
    WikiSelect,
    /// Typing a query or browsing its results.
    SearchResults,
    /// Reading an article.
    Article,
    /// Typing an in-article search query over the article.
    ArticleSearch,
}

/// An outstanding request issued to the wiki client.
///
/// While one is pending, the inputs that would issue another are ignored.
/// Leaving the results screen abandons it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingRequest {
    /// A search is in flight.
    Search,
    /// An article fetch is in flight.
    Fetch,
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current screen.
    pub screen: Screen,

    /// Highlighted row of the wiki selection menu, index into [`WikiSource::ALL`].
    pub wiki_cursor: usize,

    /// Wiki that searches and fetches go to.
    pub wiki: WikiSource,

    /// Query box on the search results screen.
    pub query_input: TextInput,

    /// Results of the last successful search, in server order.
    pub results: Vec<SearchResult>,

    /// Highlighted result. Always `< results.len()` when results exist.
    pub result_cursor: usize,

    /// Status line text.
    pub status: String,

    /// Request awaiting its completion event, if any.
    pub pending: Option<PendingRequest>,

    /// Id of the most recently issued request. Only its completion is applied.
    pub request_id: RequestId,

    /// Article being read. `None` outside the article screens.
    pub article: Option<ArticleView>,

    /// In-article search box.
    pub article_query_input: TextInput,

    /// First wrapped line shown in the article viewport.
    pub scroll_offset: usize,

    /// Terminal width in columns. Articles are wrapped to this.
    pub terminal_width: usize,

    /// Terminal height in rows.
    pub terminal_height: usize,

    /// Key to action mapping used when no text input has focus.
    pub key_bindings: KeyBindings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl AppState {
    /// Initial state for a terminal of the given size.
    pub fn new(terminal_width: usize, terminal_height: usize) -> Self {
        Self {
            screen: Screen::WikiSelect,
            wiki_cursor: 0,
            wiki: WikiSource::Wikipedia,
            query_input: TextInput::query(),
            results: Vec::new(),
            result_cursor: 0,
            status: String::new(),
            pending: None,
            request_id: RequestId::default(),
            article: None,
            article_query_input: TextInput::article_query(),
            scroll_offset: 0,
            terminal_width,
            terminal_height,
            key_bindings: KeyBindings::default(),
        }
    }

    /// Rows available to the article body.
    pub fn article_height(&self) -> usize {
        self.terminal_height.saturating_sub(ARTICLE_CHROME_HEIGHT)
    }

    /// Largest valid scroll offset for the current article and viewport.
    pub fn max_scroll(&self) -> usize {
        self.article
            .as_ref()
            .map(|article| article.line_count().saturating_sub(self.article_height()))
            .unwrap_or(0)
    }

    /// Scroll so that `line` is the first visible line, clamped to the valid range.
    pub fn scroll_to(mut self, line: usize) -> Self {
        self.scroll_offset = line.min(self.max_scroll());
        self
    }

    /// Scroll by `delta` lines, clamped to the valid range.
    pub fn scroll_by(self, delta: isize) -> Self {
        let target = self.scroll_offset.saturating_add_signed(delta);
        self.scroll_to(target)
    }

    /// The highlighted search result, if any.
    pub fn selected_result(&self) -> Option<&SearchResult> {
        self.results.get(self.result_cursor)
    }

    /// Whether a text input currently receives keystrokes.
    pub fn input_focused(&self) -> bool {
        match self.screen {
            Screen::SearchResults => self.query_input.is_focused(),
            Screen::ArticleSearch => self.article_query_input.is_focused(),
            Screen::WikiSelect | Screen::Article => false,
        }
    }
}
