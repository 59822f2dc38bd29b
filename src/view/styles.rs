//! Colors and text styles.

use crate::text::SegmentStyle;
use ratatui::style::{Color, Modifier, Style};

/// Article title.
pub const TITLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Cursor marker in the wiki and result lists.
pub const CURSOR: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Regular foreground text.
pub const TEXT: Style = Style::new().fg(Color::White);

/// Key hints and input placeholders.
pub const DIM: Style = Style::new().fg(Color::DarkGray);

/// Character under the text input cursor.
pub const INPUT_CURSOR: Style = Style::new().fg(Color::Black).bg(Color::White);

/// Style for a planned article segment.
pub fn segment_style(style: SegmentStyle) -> Style {
    match style {
        SegmentStyle::Default => TEXT,
        SegmentStyle::SearchMatch => Style::new().fg(Color::Black).bg(Color::Yellow),
        SegmentStyle::CurrentMatch => Style::new().fg(Color::Black).bg(Color::LightYellow),
        SegmentStyle::Url => Style::new().fg(Color::LightBlue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_match_is_distinct_from_other_matches() {
        assert_ne!(
            segment_style(SegmentStyle::CurrentMatch),
            segment_style(SegmentStyle::SearchMatch)
        );
    }

    #[test]
    fn urls_are_light_blue() {
        assert_eq!(segment_style(SegmentStyle::Url).fg, Some(Color::LightBlue));
    }
}
