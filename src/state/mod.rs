//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal or
//! network. [`update`] is the entry point; the handler modules hold the
//! per-concern transitions it dispatches to.

pub mod app_state;
pub mod article_view;
pub mod event;
pub mod match_navigation;
pub mod scroll_handler;
pub mod text_input;
pub mod update;

// Re-export for convenience
pub use app_state::{AppState, PendingRequest, Screen, ARTICLE_CHROME_HEIGHT};
pub use article_view::ArticleView;
pub use event::{AppEvent, Effect, RequestId};
pub use match_navigation::{next_match, prev_match, scroll_to_current_match};
pub use scroll_handler::handle_scroll_action;
pub use text_input::{TextInput, ARTICLE_QUERY_CHAR_LIMIT, QUERY_CHAR_LIMIT};
pub use update::update;
