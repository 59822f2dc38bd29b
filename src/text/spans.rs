//! Highlight planning.
//!
//! Merges search-match spans and URL spans over the wrapped article buffer
//! into an ordered, gap-free list of styled [`Segment`]s.
//!
//! # Overlap policy
//!
//! Spans are stably sorted by start offset. Search spans are collected before
//! URL spans, so on a tie the search styling wins. A span that starts inside an
//! already emitted span is clipped to begin where the previous one ended, and is
//! dropped entirely when it is fully covered. The output therefore covers the
//! content exactly once, in order.

use regex::Regex;
use std::sync::LazyLock;

/// URLs as they appear in extracted article text.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://[^\s/$.?#].[^\s]*").expect("URL pattern is a valid regex")
});

/// Kind of a highlighted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// A search hit that is not the current one.
    SearchMatch,
    /// The search hit the user navigated to.
    CurrentMatch,
    /// A URL occurring in the text.
    Url,
}

/// Half-open character range `[start, end)` over the wrapped buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    /// First character of the span.
    pub start: usize,
    /// One past the last character of the span.
    pub end: usize,
    /// What the span highlights.
    pub kind: SpanKind,
}

/// Rendering style of a planned segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentStyle {
    /// Plain article text.
    Default,
    /// A search hit that is not the current one.
    SearchMatch,
    /// The current search hit.
    CurrentMatch,
    /// A URL.
    Url,
}

impl From<SpanKind> for SegmentStyle {
    fn from(kind: SpanKind) -> Self {
        match kind {
            SpanKind::SearchMatch => SegmentStyle::SearchMatch,
            SpanKind::CurrentMatch => SegmentStyle::CurrentMatch,
            SpanKind::Url => SegmentStyle::Url,
        }
    }
}

/// A contiguous slice of the content with a single style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The covered text, borrowed from the planned content.
    pub text: &'a str,
    /// How to render it.
    pub style: SegmentStyle,
}

/// Locate URLs in `content` and return their character ranges.
pub fn find_url_spans(content: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut chars_before = 0;
    let mut last_byte = 0;

    for found in URL_PATTERN.find_iter(content) {
        chars_before += content[last_byte..found.start()].chars().count();
        let len = found.as_str().chars().count();
        spans.push((chars_before, chars_before + len));
        chars_before += len;
        last_byte = found.end();
    }

    spans
}

/// Build the rendering plan for `content`.
///
/// Each offset in `search_matches` becomes a span of `query`'s character length,
/// styled [`SegmentStyle::CurrentMatch`] when its index equals
/// `current_match_index` and [`SegmentStyle::SearchMatch`] otherwise. Every entry
/// of `url_spans` becomes a [`SegmentStyle::Url`] span. Gaps between spans are
/// emitted as [`SegmentStyle::Default`] segments.
///
/// Concatenating the returned segments' text reproduces `content` exactly.
/// Spans reaching past the end of `content` are truncated.
pub fn plan<'a>(
    content: &'a str,
    query: &str,
    search_matches: &[usize],
    current_match_index: usize,
    url_spans: &[(usize, usize)],
) -> Vec<Segment<'a>> {
    let query_len = query.chars().count();

    let mut spans: Vec<MatchSpan> = search_matches
        .iter()
        .enumerate()
        .map(|(index, &start)| MatchSpan {
            start,
            end: start + query_len,
            kind: if index == current_match_index {
                SpanKind::CurrentMatch
            } else {
                SpanKind::SearchMatch
            },
        })
        .collect();
    spans.extend(url_spans.iter().map(|&(start, end)| MatchSpan {
        start,
        end,
        kind: SpanKind::Url,
    }));
    spans.sort_by_key(|span| span.start);

    // Byte position of every char boundary, including the end of the content
    let boundaries: Vec<usize> = content
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(content.len()))
        .collect();
    let total_chars = boundaries.len() - 1;
    let slice = |from: usize, to: usize| &content[boundaries[from]..boundaries[to]];

    let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
    let mut last = 0;

    for span in spans {
        let start = span.start.max(last);
        let end = span.end.min(total_chars);
        if start >= end {
            continue;
        }
        if start > last {
            segments.push(Segment {
                text: slice(last, start),
                style: SegmentStyle::Default,
            });
        }
        segments.push(Segment {
            text: slice(start, end),
            style: span.kind.into(),
        });
        last = end;
    }

    if last < total_chars {
        segments.push(Segment {
            text: slice(last, total_chars),
            style: SegmentStyle::Default,
        });
    }

    segments
}

#[cfg(test)]
#[path = "spans_tests.rs"]
mod tests;
