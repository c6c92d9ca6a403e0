//! Leaf-count and word-order invariants of positional rehydration

use crate::common::word;
use pagekit_babel::node::{count_text_leaves, text_leaves};
use pagekit_babel::rehydrate::redistribute_words;
use pagekit_babel::ContentNode;
use proptest::prelude::*;

/// `leaves` paragraphs, the odd ones wrapping their text in `<em>`.
fn previous_forest(leaves: usize) -> Vec<ContentNode> {
    (0..leaves)
        .map(|i| {
            let leaf = ContentNode::text(format!("old{i}"));
            let inner = if i % 2 == 1 {
                ContentNode::element("em").with_children([leaf])
            } else {
                leaf
            };
            ContentNode::element("p").with_children([inner])
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_leaf_count_is_preserved(
        leaves in 1usize..8,
        words in prop::collection::vec(word(), 0..40),
    ) {
        let previous = previous_forest(leaves);
        let rehydrated = redistribute_words(&words.join(" "), &previous);
        prop_assert_eq!(count_text_leaves(&rehydrated), leaves);
    }

    #[test]
    fn prop_words_keep_their_order(
        leaves in 1usize..8,
        words in prop::collection::vec(word(), 0..40),
    ) {
        let previous = previous_forest(leaves);
        let rehydrated = redistribute_words(&words.join(" "), &previous);
        let joined = text_leaves(&rehydrated)
            .into_iter()
            .filter(|leaf| !leaf.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(joined, words.join(" "));
    }

    #[test]
    fn prop_each_leaf_gets_its_ceil_share(
        leaves in 1usize..8,
        words in prop::collection::vec(word(), 0..40),
    ) {
        let previous = previous_forest(leaves);
        let rehydrated = redistribute_words(&words.join(" "), &previous);
        let share = words.len().div_ceil(leaves);
        for (i, leaf) in text_leaves(&rehydrated).into_iter().enumerate() {
            let start = (i * share).min(words.len());
            let end = ((i + 1) * share).min(words.len());
            prop_assert_eq!(leaf, words[start..end].join(" "));
        }
    }

    #[test]
    fn prop_markup_is_untouched(
        leaves in 1usize..8,
        words in prop::collection::vec(word(), 0..40),
    ) {
        let previous = previous_forest(leaves);
        let rehydrated = redistribute_words(&words.join(" "), &previous);
        let tags = |nodes: &[ContentNode]| -> Vec<Option<String>> {
            nodes
                .iter()
                .map(|n| n.children().first().and_then(|c| c.tag()).map(str::to_string))
                .collect()
        };
        prop_assert_eq!(tags(&rehydrated), tags(&previous));
    }
}

#[test]
fn test_fewer_words_than_leaves_boundary() {
    let rehydrated = redistribute_words("alpha beta", &previous_forest(4));
    assert_eq!(text_leaves(&rehydrated), vec!["alpha", "beta", "", ""]);
}

#[test]
fn test_one_word_insertion_shifts_later_leaves() {
    let previous = previous_forest(3);
    let before = redistribute_words("a b c d e f", &previous);
    let after = redistribute_words("a X b c d e f", &previous);
    assert_eq!(text_leaves(&before), vec!["a b", "c d", "e f"]);
    assert_eq!(text_leaves(&after), vec!["a X b", "c d e", "f"]);
}
