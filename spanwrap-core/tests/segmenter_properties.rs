//! Property tests for the segmenter

use proptest::prelude::*;
use spanwrap_core::{tokenize, Element, SeparatorSpec, TextSegmenter, Token, LINE_BREAK_MARKER};

/// Pieces the generated markup is built from; no stray `<` besides markers
fn piece() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["ab", "c", " ", "  ", "<br>", "xyz", "é", "日本"])
}

fn markup() -> impl Strategy<Value = String> {
    prop::collection::vec(piece(), 0..24).prop_map(|pieces| pieces.concat())
}

fn lines() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-z]{1,8}", 0..6), 1..5)
}

proptest! {
    #[test]
    fn single_word_is_wrapped_whole(word in "[a-z]{1,20}") {
        let output = TextSegmenter::new().segment_text(&word);
        let trailing = if word.len() > 1 { " " } else { "" };
        prop_assert_eq!(output.html, format!("<span>{word}</span>{trailing}"));
        prop_assert_eq!(output.wrappers.len(), 1);
    }

    #[test]
    fn wrapper_count_matches_qualifying_tokens(text in markup()) {
        let separator = SeparatorSpec::default();
        let expected = tokenize(&text, LINE_BREAK_MARKER, &separator)
            .into_iter()
            .filter_map(|token| token.as_segment())
            .filter(|segment| !segment.is_empty() && *segment != " " && *segment != LINE_BREAK_MARKER)
            .count();

        let mut content = text.clone();
        let wrappers = TextSegmenter::new().segment(&mut content);
        prop_assert_eq!(wrappers.len(), expected);
    }

    #[test]
    fn markers_survive_in_order(text in markup()) {
        let mut content = text.clone();
        TextSegmenter::new().segment(&mut content);
        prop_assert_eq!(
            content.matches(LINE_BREAK_MARKER).count(),
            text.matches(LINE_BREAK_MARKER).count()
        );
    }

    #[test]
    fn wrappers_reconstruct_normalized_input(lines in lines()) {
        let input = lines
            .iter()
            .map(|words| words.join(" "))
            .collect::<Vec<_>>()
            .join(LINE_BREAK_MARKER);

        let mut content = input.clone();
        let wrappers = TextSegmenter::new().segment(&mut content);
        let mut texts = wrappers.iter().map(Element::text_content);

        let rebuilt = lines
            .iter()
            .map(|words| {
                words
                    .iter()
                    .map(|_| texts.next().unwrap_or_default())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join(LINE_BREAK_MARKER);

        prop_assert_eq!(rebuilt, input);
        prop_assert!(texts.next().is_none());
    }

    #[test]
    fn lone_markers_are_never_wrapped(count in 1usize..6) {
        let text = LINE_BREAK_MARKER.repeat(count);
        let output = TextSegmenter::new().segment_text(&text);
        prop_assert_eq!(&output.html, &text);
        prop_assert!(output.wrappers.is_empty());
    }

    #[test]
    fn tokens_preserve_marker_count(text in markup()) {
        let tokens = tokenize(&text, LINE_BREAK_MARKER, " ");
        let breaks = tokens.iter().filter(|token| **token == Token::LineBreak).count();
        prop_assert_eq!(breaks, text.matches(LINE_BREAK_MARKER).count());
    }
}
