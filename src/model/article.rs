//! Article and search result payloads.

use serde::Deserialize;

/// A single hit returned by the wiki search API.
///
/// Results are kept in server order and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
    /// Page title, used both for display and for fetching the article.
    pub title: String,
}

impl SearchResult {
    /// Create a search result for `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// A fetched article reduced to readable plain text.
///
/// Replaced wholesale on every successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    title: String,
    content: String,
}

impl Article {
    /// Create an article from its title and extracted plain text.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Page title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Raw (unwrapped) plain-text body.
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_result_deserializes_from_api_hit() {
        let hit: SearchResult =
            serde_json::from_str(r#"{"ns":0,"title":"Go (programming language)","pageid":25039021}"#)
                .expect("valid search hit");
        assert_eq!(hit.title, "Go (programming language)");
    }

    #[test]
    fn article_exposes_title_and_content() {
        let article = Article::new("Rust", "Rust is a language.");
        assert_eq!(article.title(), "Rust");
        assert_eq!(article.content(), "Rust is a language.");
    }
}
