use dom::{DomTree, Selection, parse_html};
use traverse::Traverse;

fn ids(tree: &DomTree, selection: &Selection) -> Vec<String> {
    selection
        .iter()
        .map(|node| tree.attribute(node, "id").unwrap_or("").to_string())
        .collect()
}

const DOC: &str = r#"<html><body>
    <section id="s1">
        <p id="p1" class="note"></p>
        <p id="p2" class="note"></p>
    </section>
    <section id="s2">
        <div><p id="p3" class="note"></p></div>
    </section>
</body></html>"#;

#[test]
fn one_descendant_per_input_element() {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = parse_html(DOC);

    let sections = Selection::select(&tree, "section");
    let notes = sections.find_first(&tree, ".note");
    // First match per section, not every match.
    assert_eq!(ids(&tree, &notes), ["p1", "p3"]);
}

#[test]
fn finds_nested_descendants_in_document_order() {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = parse_html(DOC);

    let second = Selection::select(&tree, "#s2");
    let note = second.find_first(&tree, ".note");
    assert_eq!(ids(&tree, &note), ["p3"]);
}

#[test]
fn blank_selectors_yield_empty_without_traversal() {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = parse_html(DOC);
    let sections = Selection::select(&tree, "section");

    assert!(sections.find_first(&tree, "").is_empty());
    assert!(sections.find_first(&tree, "   ").is_empty());
    assert!(sections.find_first(&tree, "p[[").is_empty());
}

#[test]
fn converging_scopes_collapse_to_one_result() {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = parse_html(
        r#"<html><body>
            <div id="outer"><div id="inner"><p id="only"></p></div></div>
        </body></html>"#,
    );

    let scopes = Selection::select(&tree, "#outer, #inner");
    assert_eq!(scopes.len(), 2);
    let hit = scopes.find_first(&tree, "p");
    assert_eq!(hit.len(), 1);
    assert_eq!(ids(&tree, &hit), ["only"]);
}

#[test]
fn scope_element_itself_is_never_matched() {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = parse_html(r#"<html><body><p id="root"><p id="child"></p></p></body></html>"#);

    // html5ever closes the outer <p> before the inner one opens, so query
    // from body instead: the scope tag matching the selector is fine as a
    // descendant, but a scope with no matching descendants yields nothing.
    let body = Selection::select(&tree, "body");
    let hits = body.find_first(&tree, "p");
    assert_eq!(hits.len(), 1);

    let first_p = Selection::select(&tree, "#root");
    assert!(first_p.find_first(&tree, "p").is_empty());
}

#[test]
fn elements_without_matches_contribute_nothing() {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = parse_html(
        r#"<html><body>
            <section id="s1"><p id="p1"></p></section>
            <section id="empty"></section>
        </body></html>"#,
    );

    let sections = Selection::select(&tree, "section");
    let hits = sections.find_first(&tree, "p");
    assert_eq!(ids(&tree, &hits), ["p1"]);
}
