//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout-related numeric values.

use std::time::Duration;

/// Height of the article title bar in lines.
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the status line in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the line under the article holding the search input or match counter.
pub const SEARCH_BAR_HEIGHT: u16 = 1;

/// Height of the key hint line at the bottom of every screen.
pub const HELP_BAR_HEIGHT: u16 = 1;

/// How long the event loop waits for terminal input before checking for
/// request completions.
pub const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);
