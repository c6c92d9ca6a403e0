//! End-to-end editor and storage flows

use pagekit_babel::import::{import_html, ImportOptions};
use pagekit_babel::page::{MemoryPageStore, PageStore};
use pagekit_babel::ContentFormat::{Html, Json, Text};
use pagekit_babel::{serialize, ContentNode, Converter, DomParser, HtmlParser};

#[test]
fn test_parse_serialize_flatten() {
    let html = "<div><h1>Title</h1><p>Hello world</p></div>";

    let nodes = DomParser.parse(html);
    assert_eq!(
        nodes,
        vec![ContentNode::element("div").with_children([
            ContentNode::element("h1").with_children([ContentNode::text("Title")]),
            ContentNode::element("p").with_children([ContentNode::text("Hello world")]),
        ])]
    );

    let serialized = serialize(&nodes);
    assert_eq!(serialized, html);

    let text = DomParser.to_text(&serialized);
    assert_eq!(text.split_whitespace().collect::<Vec<_>>().join(" "), "Title Hello world");
}

#[test]
fn test_editor_session() {
    let converter = Converter::dom();

    // HTML mode: the author types markup, the editor keeps the tree alongside it
    let html = r#"<h2>Menu</h2><p>Soup of the day</p>"#;
    let tree = converter.parse(html);

    // Text mode: edits are rehydrated into the last known tree, then reparsed
    let text = converter.convert(html, Html, Text, None);
    assert_eq!(text, "Menu\nSoup of the day");
    let edited = text.replace("Soup", "Salad");
    let new_html = converter.convert(&edited, Text, Html, Some(tree.as_slice()));
    assert_eq!(new_html, "<h2>Menu Salad of</h2><p>the day</p>");
    let new_tree = converter.parse(&new_html);
    assert_eq!(new_tree.len(), tree.len());

    // Persisted JSON regenerates the same HTML on read
    let json = converter.convert(&new_html, Html, Json, None);
    assert_eq!(converter.convert(&json, Json, Html, None), new_html);
}

#[test]
fn test_import_save_and_render() {
    let converter = Converter::dom();
    let raw = r#"<html><head><title>Opening Hours</title></head><body>
        <nav><a href="/">Home</a></nav>
        <h1>Opening hours</h1>
        <p>Monday to Friday, nine to five. Weekends by appointment only, please call ahead.</p>
        <footer>Footer</footer>
    </body></html>"#;

    let page = import_html(
        raw,
        Some("https://example.com/visit/hours"),
        &ImportOptions::default(),
        &converter,
    )
    .unwrap();
    assert_eq!(page.slug, "visit/hours");

    let store = MemoryPageStore::new();
    store.save(page.into_record()).unwrap();

    let record = store.load("visit/hours").unwrap();
    let view = record.render(&converter);
    assert_eq!(
        view.html,
        "<h1>Opening hours</h1><p>Monday to Friday, nine to five. Weekends by appointment only, please call ahead.</p>"
    );
    assert_eq!(view.stats().word_count, 15);
}
