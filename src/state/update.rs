//! The state machine's transition function.
//!
//! [`update`] is the only way state changes. It never performs I/O; anything
//! with a side effect is returned as an [`Effect`] for the caller to run.

use crate::model::{Article, KeyAction, SearchResult, WikiError, WikiSource};
use crate::state::{
    handle_scroll_action, next_match, prev_match, scroll_to_current_match, AppEvent, AppState,
    ArticleView, Effect, PendingRequest, RequestId, Screen, TextInput,
};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info, warn};

/// Apply `event` to `state`, returning the new state and the effects to perform.
pub fn update(state: AppState, event: AppEvent) -> (AppState, Vec<Effect>) {
    match event {
        AppEvent::Key(key) => handle_key(state, key),
        AppEvent::Resize { width, height } => (resize(state, width, height), Vec::new()),
        AppEvent::SearchCompleted { id, term, result } => {
            (search_completed(state, id, &term, result), Vec::new())
        }
        AppEvent::FetchCompleted { id, title, result } => {
            (fetch_completed(state, id, &title, result), Vec::new())
        }
    }
}

// ===== Keys =====

fn handle_key(state: AppState, key: KeyEvent) -> (AppState, Vec<Effect>) {
    if key.kind != KeyEventKind::Press {
        return (state, Vec::new());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return (state, vec![Effect::Quit]);
    }

    if state.input_focused() {
        return handle_input_key(state, key);
    }

    match state.key_bindings.get(key) {
        Some(action) => handle_action(state, action),
        None => (state, Vec::new()),
    }
}

/// Keys typed while a text input has focus.
fn handle_input_key(mut state: AppState, key: KeyEvent) -> (AppState, Vec<Effect>) {
    match key.code {
        KeyCode::Esc => return handle_action(state, KeyAction::Back),
        KeyCode::Enter => return submit_input(state),
        // The result list stays navigable while the query box has focus
        KeyCode::Up if state.screen == Screen::SearchResults => {
            return search_results_action(state, KeyAction::MoveUp)
        }
        KeyCode::Down if state.screen == Screen::SearchResults => {
            return search_results_action(state, KeyAction::MoveDown)
        }
        _ => {}
    }

    let edit = |input: TextInput| match key.code {
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            input.insert_char(ch)
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.cursor_left(),
        KeyCode::Right => input.cursor_right(),
        KeyCode::Home => input.cursor_home(),
        KeyCode::End => input.cursor_end(),
        _ => input,
    };

    if state.screen == Screen::ArticleSearch {
        state.article_query_input = edit(state.article_query_input);
    } else {
        state.query_input = edit(state.query_input);
    }
    (state, Vec::new())
}

fn submit_input(state: AppState) -> (AppState, Vec<Effect>) {
    match state.screen {
        Screen::ArticleSearch => (submit_article_search(state), Vec::new()),
        _ => submit_search(state),
    }
}

fn submit_search(mut state: AppState) -> (AppState, Vec<Effect>) {
    let term = state.query_input.value().trim().to_string();
    if term.is_empty() || state.pending.is_some() {
        return (state, Vec::new());
    }

    info!(wiki = %state.wiki, %term, "Searching");
    state.query_input = state.query_input.blur();
    state.status = "Searching...".to_string();
    let (state, id) = issue_request(state, PendingRequest::Search);
    let source = state.wiki;
    (state, vec![Effect::Search { id, term, source }])
}

fn submit_article_search(mut state: AppState) -> AppState {
    state.article_query_input = state.article_query_input.blur();
    state.screen = Screen::Article;

    let query = state.article_query_input.value().to_string();
    let Some(article) = state.article.take() else {
        return state;
    };
    let article = article.search(&query);
    debug!(%query, matches = article.matches().len(), "In-article search");
    state.article = Some(article);
    scroll_to_current_match(state)
}

// ===== Actions =====

fn handle_action(state: AppState, action: KeyAction) -> (AppState, Vec<Effect>) {
    if action == KeyAction::Quit {
        return (state, vec![Effect::Quit]);
    }

    match state.screen {
        Screen::WikiSelect => wiki_select_action(state, action),
        Screen::SearchResults => search_results_action(state, action),
        Screen::Article => (article_action(state, action), Vec::new()),
        Screen::ArticleSearch => match action {
            KeyAction::Back => (back_to_results(state), Vec::new()),
            _ => (state, Vec::new()),
        },
    }
}

fn wiki_select_action(mut state: AppState, action: KeyAction) -> (AppState, Vec<Effect>) {
    match action {
        KeyAction::MoveUp => state.wiki_cursor = state.wiki_cursor.saturating_sub(1),
        KeyAction::MoveDown => {
            state.wiki_cursor = (state.wiki_cursor + 1).min(WikiSource::ALL.len() - 1)
        }
        KeyAction::Select => {
            state.wiki = WikiSource::ALL[state.wiki_cursor.min(WikiSource::ALL.len() - 1)];
            debug!(wiki = %state.wiki, "Selected wiki");
            state.screen = Screen::SearchResults;
            state.query_input = state.query_input.clear().focus();
            state.results.clear();
            state.result_cursor = 0;
            state.status.clear();
        }
        KeyAction::Back => return (state, vec![Effect::Quit]),
        _ => {}
    }
    (state, Vec::new())
}

fn search_results_action(mut state: AppState, action: KeyAction) -> (AppState, Vec<Effect>) {
    match action {
        KeyAction::MoveUp => state.result_cursor = state.result_cursor.saturating_sub(1),
        KeyAction::MoveDown => {
            state.result_cursor =
                (state.result_cursor + 1).min(state.results.len().saturating_sub(1))
        }
        KeyAction::Select => {
            if state.pending.is_some() {
                return (state, Vec::new());
            }
            if let Some(title) = state.selected_result().map(|r| r.title.clone()) {
                info!(wiki = %state.wiki, %title, "Fetching article");
                state.status = "Fetching article...".to_string();
                let (state, id) = issue_request(state, PendingRequest::Fetch);
                let source = state.wiki;
                return (state, vec![Effect::FetchArticle { id, title, source }]);
            }
        }
        KeyAction::StartSearch => {
            if state.pending.is_none() {
                state.query_input = state.query_input.focus();
            }
        }
        KeyAction::OpenInBrowser => {
            if let Some(result) = state.selected_result() {
                let url = state.wiki.page_url(&result.title);
                info!(%url, "Opening in browser");
                return (state, vec![Effect::OpenInBrowser { url }, Effect::Quit]);
            }
        }
        KeyAction::Back => {
            if let Some(abandoned) = state.pending.take() {
                debug!(?abandoned, id = state.request_id.0, "Abandoning request");
            }
            state.query_input = state.query_input.blur();
            state.screen = Screen::WikiSelect;
        }
        _ => {}
    }
    (state, Vec::new())
}

fn article_action(mut state: AppState, action: KeyAction) -> AppState {
    match action {
        KeyAction::Back => back_to_results(state),
        KeyAction::StartSearch => {
            state.screen = Screen::ArticleSearch;
            state.article_query_input = state.article_query_input.focus();
            state
        }
        KeyAction::NextMatch => next_match(state),
        KeyAction::PrevMatch => prev_match(state),
        _ => handle_scroll_action(state, action),
    }
}

fn back_to_results(mut state: AppState) -> AppState {
    state.screen = Screen::SearchResults;
    state.article = None;
    state.scroll_offset = 0;
    state.article_query_input = state.article_query_input.blur();
    state.query_input = state.query_input.focus();
    state
}

// ===== Resize =====

fn resize(mut state: AppState, width: u16, height: u16) -> AppState {
    state.terminal_width = usize::from(width);
    state.terminal_height = usize::from(height);

    let Some(article) = state.article.take() else {
        return state;
    };
    state.article = Some(article.rewrap(state.terminal_width));

    if state
        .article
        .as_ref()
        .is_some_and(|article| !article.matches().is_empty())
    {
        scroll_to_current_match(state)
    } else {
        let offset = state.scroll_offset;
        state.scroll_to(offset)
    }
}

// ===== Completions =====

/// Mark `kind` as pending under a fresh id.
fn issue_request(mut state: AppState, kind: PendingRequest) -> (AppState, RequestId) {
    state.request_id = state.request_id.next();
    state.pending = Some(kind);
    let id = state.request_id;
    (state, id)
}

/// Whether a completion answers the request currently pending.
fn awaiting(state: &AppState, kind: PendingRequest, id: RequestId) -> bool {
    state.pending == Some(kind) && state.request_id == id
}

fn search_completed(
    mut state: AppState,
    id: RequestId,
    term: &str,
    result: Result<Vec<SearchResult>, WikiError>,
) -> AppState {
    if !awaiting(&state, PendingRequest::Search, id) {
        debug!(%term, id = id.0, "Ignoring stale search completion");
        return state;
    }
    state.pending = None;

    match result {
        Ok(results) => {
            info!(%term, count = results.len(), "Search completed");
            state.status = format!(
                "Found {} results for '{}'. Press Enter to select one.",
                results.len(),
                term
            );
            state.results = results;
            state.result_cursor = 0;
        }
        Err(err) => {
            warn!(%term, error = %err, "Search failed");
            state.status = format!("Error: {err}");
            state.query_input = state.query_input.focus();
        }
    }
    state
}

fn fetch_completed(
    mut state: AppState,
    id: RequestId,
    title: &str,
    result: Result<Article, WikiError>,
) -> AppState {
    if !awaiting(&state, PendingRequest::Fetch, id) {
        debug!(%title, id = id.0, "Ignoring stale fetch completion");
        return state;
    }
    state.pending = None;

    match result {
        Ok(article) => {
            info!(%title, chars = article.content().chars().count(), "Article fetched");
            state.status = format!("Displaying article: {}", article.title());
            state.article = Some(ArticleView::new(article, state.terminal_width));
            state.article_query_input = TextInput::article_query();
            state.scroll_offset = 0;
            state.screen = Screen::Article;
        }
        Err(err) => {
            warn!(%title, error = %err, "Fetch failed");
            state.status = format!("Error: {err}");
            state.query_input = state.query_input.focus();
        }
    }
    state
}

#[cfg(test)]
#[path = "update_tests.rs"]
mod tests;
