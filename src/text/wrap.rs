//! Greedy word wrapping.

/// Reflow `text` so that no output line is wider than `width` characters.
///
/// Each input line (split at `\n`) is wrapped independently: whitespace-delimited
/// words are accumulated onto the current line until adding the next word plus a
/// separating space would exceed `width`. Blank input lines survive as blank output
/// lines. A single word longer than `width` gets a line of its own and is never split.
///
/// Every output line is terminated with `\n`. A `width` of zero disables wrapping
/// and returns `text` unchanged.
pub fn wrap(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + text.len() / width);

    for line in text.split('\n') {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            out.push('\n');
            continue;
        };

        let mut current = String::from(first);
        let mut current_len = first.chars().count();

        for word in words {
            let word_len = word.chars().count();
            if current_len + 1 + word_len > width {
                out.push_str(&current);
                out.push('\n');
                current.clear();
                current.push_str(word);
                current_len = word_len;
            } else {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
            }
        }

        out.push_str(&current);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_returns_text_unchanged() {
        let text = "a  b\n\nc   d";
        assert_eq!(wrap(text, 0), text);
    }

    #[test]
    fn breaks_when_next_word_would_overflow() {
        assert_eq!(wrap("hello world", 5), "hello\nworld\n");
    }

    #[test]
    fn line_exactly_at_width_is_kept() {
        assert_eq!(wrap("one two three", 7), "one two\nthree\n");
    }

    #[test]
    fn long_word_gets_its_own_line_unsplit() {
        assert_eq!(
            wrap("supercalifragilistic is long", 5),
            "supercalifragilistic\nis\nlong\n"
        );
    }

    #[test]
    fn blank_lines_are_preserved() {
        assert_eq!(wrap("para one\n\npara two", 80), "para one\n\npara two\n");
    }

    #[test]
    fn runs_of_whitespace_collapse_to_single_spaces() {
        assert_eq!(wrap("  leading   spaces \t here ", 80), "leading spaces here\n");
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        // 11 characters, 13 bytes
        assert_eq!(wrap("héllo wörld", 11), "héllo wörld\n");
    }

    #[test]
    fn trailing_newline_yields_trailing_blank_line() {
        assert_eq!(wrap("abc\n", 10), "abc\n\n");
    }

    #[test]
    fn same_input_same_output() {
        let text = "The quick brown fox jumps over the lazy dog.\n\nAnother paragraph here.";
        assert_eq!(wrap(text, 12), wrap(text, 12));
    }

    #[test]
    fn empty_text_yields_single_blank_line() {
        assert_eq!(wrap("", 10), "\n");
    }
}
