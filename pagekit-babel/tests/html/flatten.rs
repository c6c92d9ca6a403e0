//! Text flattening in both environments

use crate::common::phrase;
use pagekit_babel::text::flatten_markup;
use pagekit_babel::{DomParser, HtmlParser, TagSplitParser};
use proptest::prelude::*;

#[test]
fn test_entity_scenario() {
    let text = flatten_markup("<p>Caf&eacute;? No &mdash; use &amp; and &lt;b&gt;");
    assert_eq!(text, "Caf&eacute;? No &mdash; use & and <b>");
    assert!(!text.contains('\n'));
    assert!(!text.contains("<p>"));
}

#[test]
fn test_dom_decodes_every_entity() {
    let text = DomParser.to_text("<p>Caf&eacute;? No &mdash; use &amp; and &lt;b&gt;");
    assert_eq!(text, "Café? No — use & and <b>");
}

#[test]
fn test_environments_diverge_on_block_boundaries() {
    let html = "<h2>Pricing</h2><ul><li>Free</li><li>Pro</li></ul>";
    assert_eq!(TagSplitParser.to_text(html), "PricingFreePro");
    assert_eq!(DomParser.to_text(html), "Pricing\nFree\nPro");
}

#[test]
fn test_ampersand_is_decoded_before_other_entities() {
    assert_eq!(flatten_markup("&amp;lt;tag&amp;gt;"), "<tag>");
}

#[test]
fn test_script_and_style_never_reach_text() {
    let html = "<p>a</p><script type=\"module\">import x from 'y';</script><style>\n.b{}\n</style><p>b</p>";
    assert_eq!(TagSplitParser.to_text(html), "ab");
    assert_eq!(DomParser.to_text(html), "a\nb");
}

proptest! {
    #[test]
    fn prop_flatten_is_idempotent(words in prop::collection::vec(phrase(), 0..6)) {
        let html: String = words.iter().map(|p| format!("<p>{p}</p>\n")).collect();
        let once = flatten_markup(&html);
        prop_assert_eq!(flatten_markup(&once), once);
    }

    #[test]
    fn prop_flatten_plain_text_only_collapses_whitespace(text in "[a-zA-Z0-9 \t\n]{0,64}") {
        let expected = text.split_whitespace().collect::<Vec<_>>().join(" ");
        prop_assert_eq!(flatten_markup(&text), expected);
    }
}
