//! The article as it is currently laid out on screen.
//!
//! Owns the raw [`Article`] plus everything derived from it at the current
//! width: the wrapped buffer, URL spans, and the in-article search matches.
//! Every derived field is rebuilt from the raw content on [`ArticleView::rewrap`],
//! never from the previous wrapped buffer.

use crate::model::Article;
use crate::text::{find_matches, find_url_spans, line_of_offset, plan, wrap, Segment};

/// A fetched article wrapped to a fixed width, with its highlight state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleView {
    article: Article,
    width: usize,
    wrapped: String,
    line_count: usize,
    url_spans: Vec<(usize, usize)>,
    query: String,
    matches: Vec<usize>,
    current_match: usize,
}

impl ArticleView {
    /// Wrap `article` to `width` columns. No query is active.
    pub fn new(article: Article, width: usize) -> Self {
        let mut view = Self {
            article,
            width,
            wrapped: String::new(),
            line_count: 0,
            url_spans: Vec::new(),
            query: String::new(),
            matches: Vec::new(),
            current_match: 0,
        };
        view.relayout();
        view
    }

    fn relayout(&mut self) {
        self.wrapped = wrap(self.article.content(), self.width);
        self.line_count = self.wrapped.lines().count();
        self.url_spans = find_url_spans(&self.wrapped);
        self.matches = find_matches(&self.wrapped, &self.query);
        self.current_match = match self.matches.len() {
            0 => 0,
            n => self.current_match.min(n - 1),
        };
    }

    /// Re-wrap the raw content at `width`.
    ///
    /// URL spans and matches for the active query are recomputed over the new
    /// buffer. The current match index is kept, clamped to the new match count.
    pub fn rewrap(mut self, width: usize) -> Self {
        if width != self.width {
            self.width = width;
            self.relayout();
        }
        self
    }

    /// Run an in-article search for `query` and select the first match.
    pub fn search(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self.matches = find_matches(&self.wrapped, &self.query);
        self.current_match = 0;
        self
    }

    /// Select the match at `index`. Out-of-range indices are ignored.
    pub fn select_match(mut self, index: usize) -> Self {
        if index < self.matches.len() {
            self.current_match = index;
        }
        self
    }

    /// The fetched article.
    pub fn article(&self) -> &Article {
        &self.article
    }

    /// Width the content is currently wrapped to.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The wrapped content.
    pub fn wrapped(&self) -> &str {
        &self.wrapped
    }

    /// Number of lines in the wrapped content.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// URL character ranges over the wrapped content.
    pub fn url_spans(&self) -> &[(usize, usize)] {
        &self.url_spans
    }

    /// The active in-article query, empty when none.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Character offsets of every match of the active query.
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    /// Index into [`ArticleView::matches`] of the current match.
    pub fn current_match(&self) -> usize {
        self.current_match
    }

    /// Wrapped line holding the current match, if there is one.
    pub fn current_match_line(&self) -> Option<usize> {
        self.matches
            .get(self.current_match)
            .map(|&offset| line_of_offset(&self.wrapped, offset))
    }

    /// Rendering plan for the whole wrapped buffer.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        plan(
            &self.wrapped,
            &self.query,
            &self.matches,
            self.current_match,
            &self.url_spans,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::SegmentStyle;

    fn view(content: &str, width: usize) -> ArticleView {
        ArticleView::new(Article::new("Test", content), width)
    }

    #[test]
    fn new_wraps_and_counts_lines() {
        let v = view("one two three four", 9);
        assert_eq!(v.wrapped(), "one two\nthree\nfour\n");
        assert_eq!(v.line_count(), 3);
    }

    #[test]
    fn url_spans_are_over_wrapped_buffer() {
        let v = view("intro\n\nsee https://go.dev now", 80);
        let (start, end) = v.url_spans()[0];
        let url: String = v.wrapped().chars().skip(start).take(end - start).collect();
        assert_eq!(url, "https://go.dev");
    }

    #[test]
    fn search_selects_first_match() {
        let v = view("alpha beta\nAlpha gamma", 80).search("alpha");
        assert_eq!(v.matches(), &[0, 11]);
        assert_eq!(v.current_match(), 0);
        assert_eq!(v.current_match_line(), Some(0));
    }

    #[test]
    fn no_match_has_no_current_line() {
        let v = view("alpha beta", 80).search("zeta");
        assert!(v.matches().is_empty());
        assert_eq!(v.current_match_line(), None);
    }

    #[test]
    fn rewrap_recomputes_matches_against_new_buffer() {
        let v = view("aaa bbb ccc bbb", 80).search("bbb").select_match(1);
        assert_eq!(v.current_match_line(), Some(0));

        let v = v.rewrap(4);
        assert_eq!(v.wrapped(), "aaa\nbbb\nccc\nbbb\n");
        assert_eq!(v.matches(), &[4, 12]);
        assert_eq!(v.current_match(), 1);
        assert_eq!(v.current_match_line(), Some(3));
    }

    #[test]
    fn rewrap_is_derived_from_raw_content() {
        let original = view("the quick brown fox jumps over the lazy dog", 40);
        let narrowed_then_widened = original.clone().rewrap(10).rewrap(40);
        assert_eq!(narrowed_then_widened.wrapped(), original.wrapped());
    }

    #[test]
    fn select_match_ignores_out_of_range() {
        let v = view("x y x", 80).search("x").select_match(5);
        assert_eq!(v.current_match(), 0);
    }

    #[test]
    fn segments_cover_wrapped_buffer() {
        let v = view("find me at https://example.org and find again", 20).search("find");
        let joined: String = v.segments().iter().map(|s| s.text).collect();
        assert_eq!(joined, v.wrapped());
        assert!(v
            .segments()
            .iter()
            .any(|s| s.style == SegmentStyle::CurrentMatch && s.text == "find"));
        assert!(v.segments().iter().any(|s| s.style == SegmentStyle::Url));
    }
}
