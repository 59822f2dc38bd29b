//! Article scrolling keyboard action handler.
//!
//! Pure functions that transform AppState in response to scroll actions.

use crate::model::KeyAction;
use crate::state::AppState;

/// Handle a scroll keyboard action on the article viewport.
///
/// Half-page moves scroll by half the viewport height (at least one line).
/// Every move is clamped to `[0, max_scroll]`. Non-scroll actions and states
/// without an article are returned unchanged.
pub fn handle_scroll_action(state: AppState, action: KeyAction) -> AppState {
    if state.article.is_none() {
        return state;
    }

    let half_page = (state.article_height() / 2).max(1) as isize;

    match action {
        KeyAction::MoveUp => state.scroll_by(-1),
        KeyAction::MoveDown => state.scroll_by(1),
        KeyAction::HalfPageUp => state.scroll_by(-half_page),
        KeyAction::HalfPageDown => state.scroll_by(half_page),
        KeyAction::ScrollToTop => state.scroll_to(0),
        KeyAction::ScrollToBottom => {
            let bottom = state.max_scroll();
            state.scroll_to(bottom)
        }
        _ => state,
    }
}

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;
