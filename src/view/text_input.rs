//! Text input widget.

use crate::state::TextInput;
use crate::view::styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Renders a [`TextInput`] on a single line: prompt, text, and a block cursor
/// while focused. An empty input shows its placeholder.
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
}

impl<'a> TextInputWidget<'a> {
    /// Create a widget for `input`.
    pub fn new(input: &'a TextInput) -> Self {
        Self { input }
    }

    fn line(&self) -> Line<'a> {
        let input = self.input;
        let mut spans = vec![Span::styled(input.prompt(), styles::TEXT)];

        if input.value().is_empty() {
            if input.is_focused() {
                spans.push(Span::styled(" ", styles::INPUT_CURSOR));
            }
            spans.push(Span::styled(input.placeholder(), styles::DIM));
            return Line::from(spans);
        }

        if !input.is_focused() {
            spans.push(Span::styled(input.value(), styles::TEXT));
            return Line::from(spans);
        }

        // Split the value around the cursor cell
        let before: String = input.value().chars().take(input.cursor()).collect();
        let mut rest = input.value().chars().skip(input.cursor());
        let under = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let after: String = rest.collect();

        spans.push(Span::styled(before, styles::TEXT));
        spans.push(Span::styled(under, styles::INPUT_CURSOR));
        spans.push(Span::styled(after, styles::TEXT));
        Line::from(spans)
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}
