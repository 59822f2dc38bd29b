//! Match navigation handler.
//!
//! Pure functions for moving between in-article search matches.
//! Navigation is cyclic and scrolls the viewport to the selected match's line.

use crate::state::AppState;

// ===== Public API =====

/// Navigate to the next match, wrapping from the last to the first.
///
/// Does nothing without an article or when the active query has no matches.
pub fn next_match(state: AppState) -> AppState {
    step(state, |current, count| (current + 1) % count)
}

/// Navigate to the previous match, wrapping from the first to the last.
///
/// Does nothing without an article or when the active query has no matches.
pub fn prev_match(state: AppState) -> AppState {
    step(state, |current, count| (current + count - 1) % count)
}

/// Scroll so the current match's line is the first visible line.
pub fn scroll_to_current_match(state: AppState) -> AppState {
    match state.article.as_ref().and_then(|a| a.current_match_line()) {
        Some(line) => state.scroll_to(line),
        None => state,
    }
}

// ===== Helpers =====

fn step(mut state: AppState, next_index: impl Fn(usize, usize) -> usize) -> AppState {
    let Some(article) = state.article.take() else {
        return state;
    };

    let count = article.matches().len();
    if count == 0 {
        state.article = Some(article);
        return state;
    }

    let index = next_index(article.current_match(), count);
    state.article = Some(article.select_match(index));
    scroll_to_current_match(state)
}

#[cfg(test)]
#[path = "match_navigation_tests.rs"]
mod tests;
