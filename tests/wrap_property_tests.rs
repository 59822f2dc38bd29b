//! Property-based tests for the text pipeline's public API.
//!
//! Tests validate:
//! 1. No wrapped line exceeds the width unless it is a single over-long word
//! 2. Wrapping is deterministic and keeps every word in order
//! 3. Blank lines survive wrapping
//! 4. Match offsets always point at a case-insensitive occurrence
//! 5. Planned segments reproduce the content exactly

use proptest::prelude::*;
use wikiterm::text::{find_matches, find_url_spans, plan, wrap};

// ===== Arbitrary Strategies =====

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Zé]{1,15}( {1,3}[a-zA-Z]{1,15}){0,20}|", 0..12)
        .prop_map(|lines| lines.join("\n"))
}

// ===== Wrapping =====

proptest! {
    #[test]
    fn lines_fit_unless_single_long_word(text in arb_text(), width in 1usize..60) {
        for line in wrap(&text, width).lines() {
            let fits = line.chars().count() <= width;
            let single_word = !line.contains(' ');
            prop_assert!(fits || single_word, "line {:?} exceeds width {}", line, width);
        }
    }

    #[test]
    fn wrapping_is_deterministic(text in arb_text(), width in 0usize..60) {
        prop_assert_eq!(wrap(&text, width), wrap(&text, width));
    }

    #[test]
    fn words_are_preserved_in_order(text in arb_text(), width in 1usize..60) {
        let wrapped = wrap(&text, width);
        let before: Vec<&str> = text.split_whitespace().collect();
        let after: Vec<&str> = wrapped.split_whitespace().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn blank_lines_survive(text in arb_text(), width in 1usize..60) {
        let blank_in = text.split('\n').filter(|l| l.trim().is_empty()).count();
        let blank_out = wrap(&text, width).lines().filter(|l| l.is_empty()).count();
        prop_assert!(blank_out >= blank_in);
    }

    #[test]
    fn zero_width_is_identity(text in arb_text()) {
        prop_assert_eq!(wrap(&text, 0), text);
    }
}

// ===== Matching and planning =====

proptest! {
    #[test]
    fn matches_point_at_query(text in arb_text(), query in "[a-e]{1,3}") {
        let chars: Vec<char> = text.chars().collect();
        let len = query.chars().count();
        let matches = find_matches(&text, &query);

        prop_assert!(matches.windows(2).all(|pair| pair[0] < pair[1]));
        for start in matches {
            let found: String = chars[start..start + len].iter().collect();
            prop_assert_eq!(found.to_lowercase(), query.to_lowercase());
        }
    }

    #[test]
    fn plan_covers_content(text in arb_text(), query in "[a-e]{1,2}", current in 0usize..5) {
        let wrapped = wrap(&text, 30);
        let matches = find_matches(&wrapped, &query);
        let urls = find_url_spans(&wrapped);
        let joined: String = plan(&wrapped, &query, &matches, current, &urls)
            .iter()
            .map(|segment| segment.text)
            .collect();
        prop_assert_eq!(joined, wrapped);
    }
}

#[test]
fn documented_examples() {
    assert!(find_matches("anything", "").is_empty());
    assert_eq!(find_matches("aaaa", "aa"), vec![0, 1, 2]);
    assert_eq!(find_matches("Hello World", "world"), vec![6]);
}
