//! External collaborators.
//!
//! The state machine never talks to the network or the OS directly. It emits
//! effects, and the shell performs them through these seams:
//! - [`WikiApi`] searches a wiki and fetches readable articles
//! - [`BrowserLauncher`] opens a page in the user's browser
//! - [`RequestWorker`] runs wiki requests off the event loop and posts completions

use crate::model::{Article, LaunchError, SearchResult, WikiError, WikiSource};

pub mod browser;
pub mod extract;
pub mod http;
pub mod worker;

pub use browser::SystemBrowser;
pub use extract::readable_text;
pub use http::{parse_article_response, parse_search_response, HttpWikiClient};
pub use worker::RequestWorker;

/// Search and fetch operations against a MediaWiki installation.
///
/// Calls block until the request finishes or times out; run them off the
/// event loop (see [`RequestWorker`]).
pub trait WikiApi: Send + Sync {
    /// Search `source` for `term`. Results are in server order.
    fn search(&self, term: &str, source: WikiSource) -> Result<Vec<SearchResult>, WikiError>;

    /// Fetch the article titled `title` and reduce it to readable plain text.
    fn fetch_article(&self, title: &str, source: WikiSource) -> Result<Article, WikiError>;
}

/// Opens URLs outside the terminal.
pub trait BrowserLauncher {
    /// Open `url`. Best effort: returning does not mean a browser appeared.
    fn open(&self, url: &str) -> Result<(), LaunchError>;
}
