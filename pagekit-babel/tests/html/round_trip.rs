//! HTML → nodes → HTML round trips
//!
//! These tests check that what the DOM parser reads, the serializer writes back with
//! the same tags, attributes and text.

use crate::common::{block_forest, landing_section};
use insta::assert_snapshot;
use pagekit_babel::node::text_leaves;
use pagekit_babel::{serialize, ContentNode, DomParser, HtmlParser, TagSplitParser};
use proptest::prelude::*;

#[test]
fn test_landing_section_round_trip() {
    let html = serialize(&landing_section());
    assert_snapshot!(html, @r#"<section class="hero"><h1>Build faster</h1><p>Ship pages<strong>without code</strong>today.</p><img src="/hero.png" alt="Hero" /></section>"#);
    assert_eq!(DomParser.parse(&html), landing_section());
}

#[test]
fn test_void_tags_parse_without_children() {
    let nodes = DomParser.parse(r#"<p>one<br>two</p><hr><input type="text" name="q">"#);
    assert_eq!(
        serialize(&nodes),
        r#"<p>one<br />two</p><hr /><input type="text" name="q" />"#
    );
}

#[test]
fn test_incidental_whitespace_is_not_preserved() {
    let html = "<ul>\n  <li>  One </li>\n  <li>Two</li>\n</ul>\n";
    let nodes = DomParser.parse(html);
    assert_eq!(serialize(&nodes), "<ul><li>One</li><li>Two</li></ul>");
}

#[test]
fn test_tag_split_round_trip_is_flat() {
    let html = "<div><h1>Title</h1><p>Hello world</p></div>";
    let nodes = TagSplitParser.parse(html);
    assert_snapshot!(serialize(&nodes), @"<div></div><h1></h1>Title<p></p>Hello world");
    assert_eq!(text_leaves(&nodes), vec!["Title", "Hello world"]);
}

#[test]
fn test_parsers_agree_on_leaf_text() {
    let html = r#"<article><h2>News</h2><p>First <a href="/a">link</a> here</p></article>"#;
    let dom = DomParser.parse(html);
    let flat = TagSplitParser.parse(html);
    assert_eq!(text_leaves(&dom), text_leaves(&flat));
}

#[test]
fn test_document_input_keeps_only_body() {
    let html = "<!DOCTYPE html><html><head><title>T</title></head><body><p>Body</p></body></html>";
    let nodes = DomParser.parse(html);
    assert_eq!(
        nodes,
        vec![ContentNode::element("p").with_children([ContentNode::text("Body")])]
    );
}

proptest! {
    #[test]
    fn prop_dom_round_trip(forest in block_forest()) {
        let html = serialize(&forest);
        prop_assert_eq!(DomParser.parse(&html), forest);
    }

    #[test]
    fn prop_serialize_is_stable(forest in block_forest()) {
        let once = serialize(&forest);
        let twice = serialize(&DomParser.parse(&once));
        prop_assert_eq!(once, twice);
    }
}
