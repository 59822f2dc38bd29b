//! Error types for wikiterm.
//!
//! - [`WikiError`] - request failures at the wiki client boundary. Non-fatal:
//!   converted to a status message and shown to the user.
//! - [`LaunchError`] - browser launch failures. Logged and otherwise ignored.
//! - [`AppError`] - startup and terminal failures. Fatal: the process exits with
//!   status 1.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// A failed search or article fetch.
///
/// Carries owned strings rather than the transport's error types so that
/// completion events stay cheap to clone and compare.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WikiError {
    /// Connection failure or timeout.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-200 status.
    #[error("API request failed with status code: {status}")]
    HttpStatus {
        /// HTTP status code returned by the server.
        status: u16,
    },

    /// The MediaWiki API reported an error in its response body.
    #[error("{info} ({code})")]
    Api {
        /// Machine-readable error code (e.g. `missingtitle`).
        code: String,
        /// Human-readable description.
        info: String,
    },

    /// Malformed JSON or content that could not be made readable.
    #[error("failed to parse API response: {0}")]
    Decode(String),
}

/// The system browser could not be opened.
#[derive(Debug, Error)]
#[error("failed to open {url} in browser: {source}")]
pub struct LaunchError {
    /// URL that was being opened.
    pub url: String,
    /// Underlying OS error.
    #[source]
    pub source: std::io::Error,
}

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal setup, rendering or event reading failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The configuration file exists but is unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(WikiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_message_includes_code() {
        let err = WikiError::HttpStatus { status: 503 };
        assert_eq!(
            err.to_string(),
            "API request failed with status code: 503"
        );
    }

    #[test]
    fn api_error_message_shows_info_first() {
        let err = WikiError::Api {
            code: "missingtitle".to_string(),
            info: "The page you specified doesn't exist.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "The page you specified doesn't exist. (missingtitle)"
        );
    }

    #[test]
    fn io_error_converts_to_terminal_app_error() {
        let err: AppError = std::io::Error::other("no tty").into();
        assert!(matches!(err, AppError::Terminal(_)));
        assert!(err.to_string().contains("no tty"));
    }

    #[test]
    fn launch_error_names_url() {
        let err = LaunchError {
            url: "https://example.org".to_string(),
            source: std::io::Error::other("no browser"),
        };
        assert!(err.to_string().contains("https://example.org"));
    }
}
