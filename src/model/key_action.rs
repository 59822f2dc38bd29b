//! Domain-level keyboard actions independent of key bindings.

/// Actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
/// Keys typed into a focused text input bypass this mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Go back one screen. Default: Esc
    Back,
    /// Select the highlighted wiki or search result. Default: Enter
    Select,
    /// Move the cursor up, or scroll the article up one line. Default: k/↑
    MoveUp,
    /// Move the cursor down, or scroll the article down one line. Default: j/↓
    MoveDown,
    /// Scroll the article up by half a page. Default: Ctrl+u/Page Up
    HalfPageUp,
    /// Scroll the article down by half a page. Default: Ctrl+d/Page Down
    HalfPageDown,
    /// Jump to the top of the article. Default: g/Home
    ScrollToTop,
    /// Jump to the bottom of the article. Default: G/End
    ScrollToBottom,
    /// Focus the query input (wiki search or in-article search). Default: /
    StartSearch,
    /// Jump to the next in-article match. Default: n
    NextMatch,
    /// Jump to the previous in-article match. Default: p/N
    PrevMatch,
    /// Open the highlighted search result in the system browser. Default: o
    OpenInBrowser,
}
