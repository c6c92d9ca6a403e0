//! Rehydration through the converter, with and without previous structure

use crate::common::landing_section;
use insta::assert_snapshot;
use pagekit_babel::node::text_leaves;
use pagekit_babel::{Converter, ContentFormat};

#[test]
fn test_edit_keeps_landing_markup() {
    let converter = Converter::dom();
    let previous = landing_section();
    let html = converter.convert(
        "Build quicker Ship sites without any code now.",
        ContentFormat::Text,
        ContentFormat::Html,
        Some(previous.as_slice()),
    );
    assert_snapshot!(html, @r#"<section class="hero"><h1>Build quicker</h1><p>Ship sites<strong>without any</strong>code now.</p><img src="/hero.png" alt="Hero" /></section>"#);
}

#[test]
fn test_text_to_json_reparses_rehydrated_html() {
    let converter = Converter::dom();
    let previous = landing_section();
    let json = converter.convert(
        "one two three four five six seven eight",
        ContentFormat::Text,
        ContentFormat::Json,
        Some(previous.as_slice()),
    );
    let nodes: Vec<pagekit_babel::ContentNode> = serde_json::from_str(&json).unwrap();
    assert_eq!(
        text_leaves(&nodes),
        vec!["one two", "three four", "five six", "seven eight"]
    );
}

#[test]
fn test_new_document_guesses_structure() {
    let converter = Converter::dom();
    let text = "OUR SERVICES\n\nWe design and build websites.\n\n- Design\n\n- Development\n\n3. Hosting";
    let html = converter.convert(text, ContentFormat::Text, ContentFormat::Html, Some(&[][..]));
    assert_snapshot!(html, @r"
    <h2>OUR SERVICES</h2>
    <p>We design and build websites.</p>
    <li>Design</li>
    <li>Development</li>
    <li>Hosting</li>
    ");
}

#[test]
fn test_empty_leaves_render_as_empty_elements() {
    let converter = Converter::dom();
    let previous = landing_section();
    let html = converter.convert("Solo", ContentFormat::Text, ContentFormat::Html, Some(previous.as_slice()));
    assert_eq!(
        html,
        r#"<section class="hero"><h1>Solo</h1><p><strong></strong></p><img src="/hero.png" alt="Hero" /></section>"#
    );
}
