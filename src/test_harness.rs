//! Acceptance Test Harness for TUI testing
//!
//! Wraps TuiApp<TestBackend> with an in-memory wiki and a recording browser so
//! user stories can be driven key by key, including the asynchronous search and
//! fetch round trips.

use crate::client::{BrowserLauncher, WikiApi};
use crate::model::{Article, LaunchError, SearchResult, WikiError, WikiSource};
use crate::state::AppState;
use crate::view::TuiApp;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How long to wait for a request completion before giving up.
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(5);

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Empty trailing lines are removed to keep snapshots clean.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

// ===== Fakes =====

/// In-memory wiki.
///
/// Search returns every known title containing the term (case-insensitive), in
/// insertion order. Fetch returns the stored content, or `missingtitle`.
#[derive(Debug, Default, Clone)]
pub struct FakeWiki {
    titles: Vec<String>,
    articles: HashMap<String, String>,
    search_error: Option<WikiError>,
}

impl FakeWiki {
    /// Add an article.
    pub fn with_article(mut self, title: &str, content: &str) -> Self {
        self.titles.push(title.to_string());
        self.articles.insert(title.to_string(), content.to_string());
        self
    }

    /// Add a search hit with no article behind it.
    pub fn with_listing(mut self, title: &str) -> Self {
        self.titles.push(title.to_string());
        self
    }

    /// Make every search fail with `error`.
    pub fn failing_search(mut self, error: WikiError) -> Self {
        self.search_error = Some(error);
        self
    }
}

impl WikiApi for FakeWiki {
    fn search(&self, term: &str, _source: WikiSource) -> Result<Vec<SearchResult>, WikiError> {
        if let Some(error) = &self.search_error {
            return Err(error.clone());
        }
        let term = term.to_lowercase();
        Ok(self
            .titles
            .iter()
            .filter(|title| title.to_lowercase().contains(&term))
            .map(SearchResult::new)
            .collect())
    }

    fn fetch_article(&self, title: &str, _source: WikiSource) -> Result<Article, WikiError> {
        self.articles
            .get(title)
            .map(|content| Article::new(title, content.as_str()))
            .ok_or_else(|| WikiError::Api {
                code: "missingtitle".to_string(),
                info: "The page you specified doesn't exist.".to_string(),
            })
    }
}

/// Browser launcher that records URLs instead of opening them.
#[derive(Debug, Default, Clone)]
pub struct RecordingBrowser {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingBrowser {
    /// URLs opened so far.
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

impl BrowserLauncher for RecordingBrowser {
    fn open(&self, url: &str) -> Result<(), LaunchError> {
        if let Ok(mut urls) = self.opened.lock() {
            urls.push(url.to_string());
        }
        Ok(())
    }
}

// ===== Harness =====

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    browser: RecordingBrowser,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Start the app against `wiki` with default terminal size (80x24).
    pub fn new(wiki: FakeWiki) -> Self {
        Self::with_size(wiki, 80, 24)
    }

    /// Start the app against `wiki` with a custom terminal size.
    pub fn with_size(wiki: FakeWiki, width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        let browser = RecordingBrowser::default();
        let app = TuiApp::with_terminal(terminal, Arc::new(wiki), Box::new(browser.clone()))
            .expect("app builds");
        Self {
            app,
            browser,
            running: true,
        }
    }

    /// Send a single key, then wait for any request it issued to complete.
    ///
    /// Returns true if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }

        if self.app.handle_event(crate::state::AppEvent::Key(KeyEvent::new(key, mods))) {
            self.running = false;
            return true;
        }
        self.settle();
        false
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Deliver a resize event. The test backend keeps its original size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app
            .handle_event(crate::state::AppEvent::Resize { width, height });
    }

    /// Apply completions until no request is pending.
    fn settle(&mut self) {
        while self.app.state().pending.is_some() {
            if !self.app.wait_for_completion(COMPLETION_TIMEOUT) {
                break;
            }
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.state()
    }

    /// Whether the app is still running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// URLs handed to the browser.
    pub fn opened_urls(&self) -> Vec<String> {
        self.browser.opened()
    }

    /// Draw a frame and return it as text.
    pub fn render_to_string(&mut self) -> String {
        self.app.draw().expect("draw succeeds");
        buffer_to_string(self.app.backend().buffer())
    }
}
