//! Article body rendering.
//!
//! Turns the planned segments of the wrapped buffer into ratatui lines.
//! Lines that read like section headings (all caps) are emboldened here,
//! at render time; the text buffer itself is never changed.

use crate::state::ArticleView;
use crate::view::styles;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Whether `line` renders as a heading: it has a letter and no lowercase.
pub fn is_heading(line: &str) -> bool {
    line.chars().any(char::is_alphabetic) && !line.chars().any(char::is_lowercase)
}

/// Build the `height` visible lines of `article` starting at wrapped line `scroll`.
pub fn article_lines(article: &ArticleView, scroll: usize, height: usize) -> Vec<Line<'_>> {
    let mut lines: Vec<Vec<Span<'_>>> = vec![Vec::new()];

    for segment in article.segments() {
        let style = styles::segment_style(segment.style);
        for (i, piece) in segment.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(Vec::new());
            }
            if !piece.is_empty() {
                if let Some(line) = lines.last_mut() {
                    line.push(Span::styled(piece, style));
                }
            }
        }
    }
    // The wrapped buffer ends every line with '\n'
    lines.truncate(article.line_count());

    article
        .wrapped()
        .lines()
        .zip(lines)
        .skip(scroll)
        .take(height)
        .map(|(text, spans)| {
            let line = Line::from(spans);
            if is_heading(text) {
                line.patch_style(Style::new().add_modifier(Modifier::BOLD))
            } else {
                line
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Article;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn view(content: &str) -> ArticleView {
        ArticleView::new(Article::new("T", content), 80)
    }

    #[test]
    fn heading_detection() {
        assert!(is_heading("HISTORY"));
        assert!(is_heading("SEE ALSO (2)"));
        assert!(!is_heading("History"));
        assert!(!is_heading("1999"));
        assert!(!is_heading(""));
    }

    #[test]
    fn lines_follow_wrapped_buffer() {
        let v = view("first\n\nthird");
        let lines = article_lines(&v, 0, 10);
        let texts: Vec<String> = lines.iter().map(text_of).collect();
        assert_eq!(texts, vec!["first", "", "third"]);
    }

    #[test]
    fn scroll_and_height_select_window() {
        let v = view("a\nb\nc\nd\ne");
        let texts: Vec<String> = article_lines(&v, 1, 2).iter().map(text_of).collect();
        assert_eq!(texts, vec!["b", "c"]);
    }

    #[test]
    fn headings_are_bold_and_body_is_not() {
        let v = view("OVERVIEW\nGo is a language.");
        let lines = article_lines(&v, 0, 10);
        assert!(lines[0].style.add_modifier.contains(Modifier::BOLD));
        assert!(!lines[1].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn matches_are_styled() {
        let v = view("go and Go").search("go");
        let lines = article_lines(&v, 0, 10);
        let styled: Vec<(String, Style)> = lines[0]
            .spans
            .iter()
            .map(|span| (span.content.to_string(), span.style))
            .collect();
        assert_eq!(
            styled,
            vec![
                (
                    "go".to_string(),
                    styles::segment_style(crate::text::SegmentStyle::CurrentMatch)
                ),
                (" and ".to_string(), styles::TEXT),
                (
                    "Go".to_string(),
                    styles::segment_style(crate::text::SegmentStyle::SearchMatch)
                ),
            ]
        );
    }
}
