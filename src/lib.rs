//! wikiterm
//!
//! Terminal reader for MediaWiki sites: pick a wiki, search it, and read
//! articles with in-text search and link highlighting.
//!
//! Pure Core / Impure Shell: `text` and `state` are pure and testable without
//! a terminal or network; `client` and `view` perform the I/O.

pub mod client;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod text;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
