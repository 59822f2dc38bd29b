//! Single-line text input (pure state transitions).
//!
//! Backs both the wiki query box and the in-article search box.
//! Every edit is a pure `TextInput -> TextInput` function and is a no-op
//! while the input is blurred.

/// Character limit of the wiki query input.
pub const QUERY_CHAR_LIMIT: usize = 150;

/// Character limit of the in-article search input.
pub const ARTICLE_QUERY_CHAR_LIMIT: usize = 100;

/// Editable single-line text field with a character cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    /// Cursor position in characters, `0..=value.chars().count()`.
    cursor: usize,
    focused: bool,
    char_limit: usize,
    prompt: &'static str,
    placeholder: &'static str,
}

impl TextInput {
    /// Create an empty, blurred input.
    pub fn new(prompt: &'static str, placeholder: &'static str, char_limit: usize) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            char_limit,
            prompt,
            placeholder,
        }
    }

    /// The wiki query input.
    pub fn query() -> Self {
        Self::new("> ", "Enter your search query...", QUERY_CHAR_LIMIT)
    }

    /// The in-article search input.
    pub fn article_query() -> Self {
        Self::new("/", "Search this article...", ARTICLE_QUERY_CHAR_LIMIT)
    }

    /// Current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether keystrokes go to this input.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Prompt rendered before the text.
    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    /// Hint rendered while the input is empty.
    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(byte, _)| byte)
            .unwrap_or(self.value.len())
    }

    /// Give the input keyboard focus. The cursor moves to the end.
    pub fn focus(mut self) -> Self {
        self.focused = true;
        self.cursor = self.char_count();
        self
    }

    /// Remove keyboard focus.
    pub fn blur(mut self) -> Self {
        self.focused = false;
        self
    }

    /// Erase the text and reset the cursor.
    pub fn clear(mut self) -> Self {
        self.value.clear();
        self.cursor = 0;
        self
    }

    /// Insert `ch` at the cursor and advance it.
    ///
    /// Ignored when blurred, for control characters, or at the character limit.
    pub fn insert_char(mut self, ch: char) -> Self {
        if !self.focused || ch.is_control() || self.char_count() >= self.char_limit {
            return self;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
        self
    }

    /// Delete the character before the cursor.
    pub fn backspace(mut self) -> Self {
        if !self.focused || self.cursor == 0 {
            return self;
        }
        let at = self.byte_index(self.cursor - 1);
        self.value.remove(at);
        self.cursor -= 1;
        self
    }

    /// Delete the character under the cursor.
    pub fn delete(mut self) -> Self {
        if !self.focused || self.cursor >= self.char_count() {
            return self;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        self
    }

    /// Move the cursor one character left. Saturates at 0.
    pub fn cursor_left(mut self) -> Self {
        if self.focused {
            self.cursor = self.cursor.saturating_sub(1);
        }
        self
    }

    /// Move the cursor one character right. Saturates at the end of the text.
    pub fn cursor_right(mut self) -> Self {
        if self.focused {
            self.cursor = (self.cursor + 1).min(self.char_count());
        }
        self
    }

    /// Move the cursor to the start of the text.
    pub fn cursor_home(mut self) -> Self {
        if self.focused {
            self.cursor = 0;
        }
        self
    }

    /// Move the cursor to the end of the text.
    pub fn cursor_end(mut self) -> Self {
        if self.focused {
            self.cursor = self.char_count();
        }
        self
    }
}

#[cfg(test)]
#[path = "text_input_tests.rs"]
mod tests;
