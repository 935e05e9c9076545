use dom::{Selection, parse_html};
use std::cell::Cell;
use traverse::Traverse;

#[test]
fn tap_runs_the_effect_and_returns_the_selection_unchanged() {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = parse_html("<html><body><p></p><p></p></body></html>");
    let paragraphs = Selection::select(&tree, "p");
    let before = paragraphs.clone();

    let seen = Cell::new(0);
    let after = paragraphs.tap(|selection| seen.set(selection.len()));
    assert_eq!(seen.get(), 2);
    assert_eq!(after, before);
}

#[test]
fn tap_chains_through_other_operators() {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = parse_html(
        r#"<html><body><p id="a">Hello</p><p id="b">bye</p></body></html>"#,
    );

    let seen = Cell::new(0);
    let hits = Selection::select(&tree, "p")
        .tap(|selection| seen.set(selection.len()))
        .contains_text(&tree, Some("Hello".into()));
    assert_eq!(seen.get(), 2);
    assert_eq!(hits.len(), 1);
}

#[test]
fn exists_tracks_length_through_the_chain() {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = parse_html(r#"<html><body><p id="a">Hello</p></body></html>"#);

    let paragraphs = Selection::select(&tree, "p");
    assert!(paragraphs.exists());

    let none = paragraphs.contains_text(&tree, Some("absent".into()));
    assert!(!none.exists());
    assert!(!Selection::new().exists());
}

#[test]
fn version_matches_the_manifest() {
    let _ = env_logger::builder().is_test(true).try_init();
    assert_eq!(traverse::version(), env!("CARGO_PKG_VERSION"));
}
