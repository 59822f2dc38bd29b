//! Tests for match navigation handler.

use super::*;
use crate::model::Article;
use crate::state::ArticleView;

// ===== Test Helpers =====

/// 40 short lines; "needle" on lines 3, 10 and 27.
fn haystack() -> String {
    (0..40)
        .map(|i| match i {
            3 | 10 | 27 => format!("needle {i}"),
            _ => format!("hay {i}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn searching(query: &str) -> AppState {
    let mut state = AppState::new(80, 14);
    state.article = Some(ArticleView::new(Article::new("T", haystack()), 80).search(query));
    scroll_to_current_match(state)
}

fn current(state: &AppState) -> usize {
    state.article.as_ref().map(|a| a.current_match()).unwrap_or(usize::MAX)
}

fn match_lines(state: &AppState) -> Vec<usize> {
    let article = state.article.as_ref().expect("article present");
    article
        .matches()
        .iter()
        .map(|&offset| crate::text::line_of_offset(article.wrapped(), offset))
        .collect()
}

// ===== next_match Tests =====

#[test]
fn matches_sit_on_expected_lines() {
    assert_eq!(match_lines(&searching("needle")), vec![3, 10, 27]);
}

#[test]
fn next_match_advances_and_scrolls() {
    let state = next_match(searching("needle"));
    assert_eq!(current(&state), 1);
    assert_eq!(state.scroll_offset, 10);
}

#[test]
fn next_match_wraps_from_last_to_first() {
    let state = next_match(next_match(searching("needle")));
    assert_eq!(current(&state), 2);

    let state = next_match(state);
    assert_eq!(current(&state), 0);
    assert_eq!(state.scroll_offset, 3);
}

// ===== prev_match Tests =====

#[test]
fn prev_match_wraps_from_first_to_last() {
    let state = prev_match(searching("needle"));
    assert_eq!(current(&state), 2);
}

#[test]
fn prev_match_retreats() {
    let state = prev_match(prev_match(searching("needle")));
    assert_eq!(current(&state), 1);
    assert_eq!(state.scroll_offset, 10);
}

#[test]
fn scroll_is_clamped_near_the_end() {
    // 40 lines, 10 visible: max offset 30, line 27 fits
    let state = prev_match(searching("needle"));
    assert_eq!(state.scroll_offset, 27);

    let mut state = AppState::new(80, 24);
    state.article = Some(ArticleView::new(Article::new("T", haystack()), 80).search("needle"));
    let state = prev_match(state);
    assert_eq!(state.scroll_offset, 20);
}

// ===== No-op Tests =====

#[test]
fn no_matches_is_noop() {
    let state = next_match(searching("absent"));
    assert_eq!(current(&state), 0);
    assert_eq!(state.scroll_offset, 0);
}

#[test]
fn no_article_is_noop() {
    let state = prev_match(AppState::new(80, 24));
    assert!(state.article.is_none());
}
