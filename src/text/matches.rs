//! Case-insensitive substring search over wrapped article text.

/// Fold a character to lowercase while keeping a one-to-one char mapping.
///
/// Characters whose lowercase form expands to several chars (e.g. `İ`) are left
/// as they are, so folded text and original text share character positions.
fn fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Find every case-insensitive occurrence of `query` in `content`.
///
/// Returns ascending character offsets of each match start. Overlapping
/// occurrences are all reported: the scan resumes one character after each
/// match start, so `"aa"` in `"aaaa"` yields `[0, 1, 2]`.
///
/// An empty query matches nothing.
pub fn find_matches(content: &str, query: &str) -> Vec<usize> {
    if query.is_empty() {
        return Vec::new();
    }

    let haystack: Vec<char> = content.chars().map(fold).collect();
    let needle: Vec<char> = query.chars().map(fold).collect();

    if needle.len() > haystack.len() {
        return Vec::new();
    }

    haystack
        .windows(needle.len())
        .enumerate()
        .filter(|(_, window)| *window == needle.as_slice())
        .map(|(offset, _)| offset)
        .collect()
}

/// Zero-based line number containing the character at `offset`.
///
/// Counts the newlines that precede `offset`. Offsets past the end of
/// `content` resolve to the last line.
pub fn line_of_offset(content: &str, offset: usize) -> usize {
    content
        .chars()
        .take(offset)
        .filter(|&c| c == '\n')
        .count()
}
