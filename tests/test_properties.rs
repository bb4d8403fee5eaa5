//! Property tests for the locator and the line rectangle builder.

use proptest::prelude::*;
use quote_locator::layout::{build_rects, group_lines, TextFragment};
use quote_locator::search::{MatchRange, SpanLocator};
use quote_locator::text::normalize_whitespace;

const VIEWPORT_HEIGHT: f32 = 792.0;

/// Fragments on lines 14 units apart, a few runs per line, starting near the page top.
fn page_strategy() -> impl Strategy<Value = Vec<TextFragment>> {
    prop::collection::vec(
        prop::collection::vec(("[a-z]{0,6}( )?", 1.0f32..40.0), 1..4),
        1..8,
    )
    .prop_map(|lines| {
        let mut fragments = Vec::new();
        for (line_idx, runs) in lines.iter().enumerate() {
            let y = 740.0 - 14.0 * line_idx as f32;
            let mut x = 72.0;
            let last = runs.len() - 1;
            for (run_idx, (text, width)) in runs.iter().enumerate() {
                fragments.push(TextFragment::new(text.clone(), x, y, *width, 10.0, run_idx == last));
                x += width;
            }
        }
        fragments
    })
}

fn composed(fragments: &[TextFragment]) -> String {
    let mut text = String::new();
    for fragment in fragments {
        text.push_str(&fragment.text);
        if fragment.ends_line {
            text.push(' ');
        }
    }
    normalize_whitespace(&text)
}

proptest! {
    #[test]
    fn located_range_contains_quote(
        fragments in page_strategy(),
        start in 0usize..64,
        len in 1usize..24,
    ) {
        let page_text = composed(&fragments);
        prop_assume!(!page_text.is_empty());
        let start = start % page_text.len();
        let end = (start + len).min(page_text.len());
        let quote = &page_text[start..end];
        prop_assume!(!quote.trim().is_empty());

        let range = SpanLocator::locate(&fragments, quote);
        prop_assert!(range.is_some(), "quote {:?} taken from {:?} not found", quote, page_text);
        let range = range.unwrap();
        prop_assert!(range.start <= range.end && range.end < fragments.len());

        let matched = composed(&fragments[range.start..=range.end]);
        prop_assert!(matched.contains(&normalize_whitespace(quote)));
    }

    #[test]
    fn located_end_is_earliest_containing_prefix(
        fragments in page_strategy(),
        start in 0usize..64,
        len in 1usize..24,
    ) {
        let page_text = composed(&fragments);
        prop_assume!(!page_text.is_empty());
        let start = start % page_text.len();
        let end = (start + len).min(page_text.len());
        let quote = normalize_whitespace(&page_text[start..end]);
        prop_assume!(!quote.is_empty());

        let expected_end = (0..fragments.len())
            .find(|&j| composed(&fragments[..=j]).contains(&quote));
        let range = SpanLocator::locate(&fragments, &quote);
        prop_assert_eq!(range.map(|r| r.end), expected_end);
    }

    #[test]
    fn empty_inputs_are_not_found(fragments in page_strategy(), quote in "[a-z ]{0,8}") {
        prop_assert_eq!(SpanLocator::locate(&fragments, ""), None);
        prop_assert_eq!(SpanLocator::locate(&[], &quote), None);
    }

    #[test]
    fn one_rect_per_line_run(fragments in page_strategy()) {
        let range = MatchRange::new(0, fragments.len() - 1);
        let rects = build_rects(&fragments, range, VIEWPORT_HEIGHT).unwrap();
        prop_assert_eq!(rects.len(), group_lines(&fragments, 2.0).len());

        for (a, b) in rects.iter().zip(rects.iter().skip(1)) {
            prop_assert!(a.y < b.y);
        }
        for rect in &rects {
            prop_assert!(rect.x >= 0.0 && rect.y >= 0.0);
            prop_assert!(rect.y + rect.height <= VIEWPORT_HEIGHT);
        }
    }

    #[test]
    fn build_is_deterministic(fragments in page_strategy()) {
        let range = MatchRange::new(0, fragments.len() - 1);
        let first = build_rects(&fragments, range, VIEWPORT_HEIGHT).unwrap();
        let second = build_rects(&fragments, range, VIEWPORT_HEIGHT).unwrap();
        prop_assert_eq!(first, second);
    }
}
