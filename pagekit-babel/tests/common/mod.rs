//! Shared fixtures and strategies for the integration tests.

use pagekit_babel::ContentNode;
use proptest::prelude::*;

/// A small landing page section used across tests.
pub fn landing_section() -> Vec<ContentNode> {
    vec![ContentNode::element("section")
        .with_attribute("class", "hero")
        .with_children([
            ContentNode::element("h1").with_children([ContentNode::text("Build faster")]),
            ContentNode::element("p").with_children([
                ContentNode::text("Ship pages"),
                ContentNode::element("strong").with_children([ContentNode::text("without code")]),
                ContentNode::text("today."),
            ]),
            ContentNode::element("img")
                .with_attribute("src", "/hero.png")
                .with_attribute("alt", "Hero"),
        ])]
}

pub fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

/// One to four words separated by single spaces.
pub fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..4).prop_map(|words| words.join(" "))
}

fn maybe_class(node: ContentNode, class: Option<String>) -> ContentNode {
    match class {
        Some(class) => node.with_attribute("class", class),
        None => node,
    }
}

fn inline() -> impl Strategy<Value = ContentNode> {
    (
        prop::sample::select(vec!["span", "em", "strong"]),
        proptest::option::of(word()),
        phrase(),
    )
        .prop_map(|(tag, class, text)| {
            maybe_class(ContentNode::element(tag), class).with_children([ContentNode::text(text)])
        })
}

fn paragraph() -> impl Strategy<Value = ContentNode> {
    (proptest::option::of(word()), prop::collection::vec(inline(), 0..4)).prop_map(
        |(class, children)| maybe_class(ContentNode::element("p"), class).with_children(children),
    )
}

/// Forests of `div > p > (span|em|strong) > text`, which html5ever parses back without
/// restructuring.
pub fn block_forest() -> impl Strategy<Value = Vec<ContentNode>> {
    let div = (proptest::option::of(word()), prop::collection::vec(paragraph(), 0..4)).prop_map(
        |(class, children)| maybe_class(ContentNode::element("div"), class).with_children(children),
    );
    prop::collection::vec(div, 0..4)
}
