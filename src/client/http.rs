//! MediaWiki action API client over blocking HTTP.

use crate::client::{extract::readable_text, WikiApi};
use crate::config::ResolvedConfig;
use crate::model::{Article, SearchResult, WikiError, WikiSource};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

// ===== Wire types =====

/// In-band error object the API returns with a 200 status.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: String,
    info: String,
}

impl From<ApiErrorBody> for WikiError {
    fn from(body: ApiErrorBody) -> Self {
        WikiError::Api {
            code: body.code,
            info: body.info,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    query: Option<SearchQuery>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    search: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct ParseResponse {
    parse: Option<ParseBody>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ParseBody {
    text: ParseText,
}

#[derive(Debug, Deserialize)]
struct ParseText {
    #[serde(rename = "*")]
    html: String,
}

// ===== Parsing =====

/// Decode an `action=query&list=search` response body.
///
/// # Errors
///
/// [`WikiError::Api`] for an in-band API error, [`WikiError::Decode`] for
/// malformed JSON or a body with neither results nor an error.
pub fn parse_search_response(body: &str) -> Result<Vec<SearchResult>, WikiError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| WikiError::Decode(e.to_string()))?;

    if let Some(error) = response.error {
        return Err(error.into());
    }
    response
        .query
        .map(|query| query.search)
        .ok_or_else(|| WikiError::Decode("missing `query` in search response".to_string()))
}

/// Decode an `action=parse` response body into the article's HTML.
///
/// # Errors
///
/// Same as [`parse_search_response`].
pub fn parse_article_response(body: &str) -> Result<String, WikiError> {
    let response: ParseResponse =
        serde_json::from_str(body).map_err(|e| WikiError::Decode(e.to_string()))?;

    if let Some(error) = response.error {
        return Err(error.into());
    }
    response
        .parse
        .map(|parse| parse.text.html)
        .ok_or_else(|| WikiError::Decode("missing `parse` in article response".to_string()))
}

// ===== Client =====

/// [`WikiApi`] backed by `reqwest`'s blocking client.
#[derive(Debug, Clone)]
pub struct HttpWikiClient {
    client: Client,
}

impl HttpWikiClient {
    /// Build a client with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::Transport`] if the TLS backend cannot be initialized.
    pub fn new(config: &ResolvedConfig) -> Result<Self, WikiError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| WikiError::Transport(e.to_string()))?;
        Ok(Self { client })
    }

    fn get(&self, source: WikiSource, params: &[(&str, &str)]) -> Result<String, WikiError> {
        debug!(url = source.api_url(), ?params, "GET");
        let response = self
            .client
            .get(source.api_url())
            .query(params)
            .send()
            .map_err(|e| WikiError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(WikiError::HttpStatus {
                status: status.as_u16(),
            });
        }

        response
            .text()
            .map_err(|e| WikiError::Transport(e.to_string()))
    }
}

impl WikiApi for HttpWikiClient {
    fn search(&self, term: &str, source: WikiSource) -> Result<Vec<SearchResult>, WikiError> {
        let body = self.get(
            source,
            &[
                ("action", "query"),
                ("format", "json"),
                ("list", "search"),
                ("srsearch", term),
            ],
        )?;
        parse_search_response(&body)
    }

    fn fetch_article(&self, title: &str, source: WikiSource) -> Result<Article, WikiError> {
        let body = self.get(
            source,
            &[("action", "parse"), ("format", "json"), ("page", title)],
        )?;
        let html = parse_article_response(&body)?;
        Ok(Article::new(title, readable_text(&html)?))
    }
}
