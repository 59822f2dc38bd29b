//! Domain model types.
//!
//! Plain data exchanged between the wiki client and the view state:
//! - [`Article`] and [`SearchResult`] produced by the client
//! - [`WikiSource`] selecting which wiki is queried
//! - [`KeyAction`] describing user intent independent of key bindings
//! - the error taxonomy in [`error`]

pub mod article;
pub mod error;
pub mod key_action;
pub mod wiki_source;

pub use article::{Article, SearchResult};
pub use error::{AppError, LaunchError, WikiError};
pub use key_action::KeyAction;
pub use wiki_source::WikiSource;
