//! Screen layout rendering.
//!
//! One render function per [`Screen`]. Every screen ends with a key hint
//! line; the search and article screens also carry a status line.

use crate::model::WikiSource;
use crate::state::{AppState, Screen};
use crate::view::article::article_lines;
use crate::view::constants::{
    HELP_BAR_HEIGHT, SEARCH_BAR_HEIGHT, STATUS_BAR_HEIGHT, TITLE_HEIGHT,
};
use crate::view::styles;
use crate::view::text_input::TextInputWidget;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const WIKI_SELECT_HELP: &str = "Press Enter to select, 'q' to quit.";
const SEARCH_RESULTS_HELP: &str =
    "Enter to search/select, Up/Down to navigate, '/' to edit query, 'o' to open in browser, 'q' to quit.";
const ARTICLE_HELP: &str =
    "Esc to go back, Up/Down to scroll, '/' to search, 'n/p' to jump between matches, 'q' to quit.";
const ARTICLE_SEARCH_HELP: &str = "Press Enter to search, Esc to cancel.";

/// Render the screen for the current state.
pub fn render_layout(frame: &mut Frame, state: &AppState) {
    match state.screen {
        Screen::WikiSelect => render_wiki_select(frame, frame.area(), state),
        Screen::SearchResults => render_search_results(frame, frame.area(), state),
        Screen::Article | Screen::ArticleSearch => render_article(frame, frame.area(), state),
    }
}

fn cursor_marker(selected: bool) -> Span<'static> {
    if selected {
        Span::styled("> ", styles::CURSOR)
    } else {
        Span::raw("  ")
    }
}

fn help_line(text: &str) -> Paragraph<'_> {
    Paragraph::new(Line::styled(text, styles::DIM))
}

// ===== Wiki selection =====

fn render_wiki_select(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    let mut lines = vec![
        Line::styled("Select a Wiki to Search:", styles::TEXT),
        Line::default(),
    ];
    lines.extend(WikiSource::ALL.iter().enumerate().map(|(i, wiki)| {
        Line::from(vec![
            cursor_marker(i == state.wiki_cursor),
            Span::styled(wiki.name(), styles::TEXT),
        ])
    }));

    frame.render_widget(Paragraph::new(lines), chunks[0]);
    frame.render_widget(help_line(WIKI_SELECT_HELP), chunks[1]);
}

// ===== Search results =====

fn render_search_results(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                 // Query input
            Constraint::Length(1),
            Constraint::Length(STATUS_BAR_HEIGHT), // Status
            Constraint::Length(1),
            Constraint::Min(0),                    // Results
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    frame.render_widget(TextInputWidget::new(&state.query_input), chunks[0]);
    frame.render_widget(
        Paragraph::new(Line::styled(state.status.as_str(), styles::TEXT)),
        chunks[2],
    );

    if !state.results.is_empty() {
        render_result_list(frame, chunks[4], state);
    }

    frame.render_widget(help_line(SEARCH_RESULTS_HELP), chunks[5]);
}

fn render_result_list(frame: &mut Frame, area: Rect, state: &AppState) {
    // One row goes to the header
    let visible = usize::from(area.height.saturating_sub(1)).max(1);
    let first = (state.result_cursor + 1).saturating_sub(visible);

    let mut lines = vec![Line::styled("Search Results:", styles::TEXT)];
    lines.extend(
        state
            .results
            .iter()
            .enumerate()
            .skip(first)
            .take(visible)
            .map(|(i, result)| {
                Line::from(vec![
                    cursor_marker(i == state.result_cursor),
                    Span::styled(result.title.as_str(), styles::TEXT),
                ])
            }),
    );

    frame.render_widget(Paragraph::new(lines), area);
}

// ===== Article =====

fn render_article(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(article) = state.article.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::styled(article.article().title(), styles::TITLE)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::styled(state.status.as_str(), styles::DIM)),
        chunks[1],
    );

    let body = article_lines(article, state.scroll_offset, usize::from(chunks[2].height));
    frame.render_widget(Paragraph::new(body), chunks[2]);

    if state.screen == Screen::ArticleSearch {
        frame.render_widget(TextInputWidget::new(&state.article_query_input), chunks[3]);
        frame.render_widget(help_line(ARTICLE_SEARCH_HELP), chunks[4]);
    } else {
        frame.render_widget(Paragraph::new(match_counter(state)), chunks[3]);
        frame.render_widget(help_line(ARTICLE_HELP), chunks[4]);
    }
}

/// `[i/N] matches for 'query'`, or why there are none.
fn match_counter(state: &AppState) -> Line<'static> {
    let Some(article) = state.article.as_ref() else {
        return Line::default();
    };
    if article.query().is_empty() {
        return Line::default();
    }

    let text = match article.matches().len() {
        0 => format!("No matches for '{}'", article.query()),
        n => format!(
            "[{}/{}] matches for '{}'",
            article.current_match() + 1,
            n,
            article.query()
        ),
    };
    Line::styled(text, styles::TEXT)
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
