use dom::{Selection, Selector, parse_html};

#[test]
fn matches_type_id_class_and_attribute_selectors() {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = parse_html(
        r#"<html><body>
            <div id="x" class="c1 c2" data-kind="primary"></div>
            <span class="c1"></span>
        </body></html>"#,
    );
    let div = Selection::select(&tree, "div").first().unwrap();
    let span = Selection::select(&tree, "span").first().unwrap();

    assert!(Selector::parse("div").unwrap().matches(&tree, div));
    assert!(!Selector::parse("div").unwrap().matches(&tree, span));
    assert!(Selector::parse("#x").unwrap().matches(&tree, div));
    assert!(Selector::parse(".c2").unwrap().matches(&tree, div));
    assert!(Selector::parse(".c1").unwrap().matches(&tree, span));
    assert!(
        Selector::parse(r#"[data-kind="primary"]"#)
            .unwrap()
            .matches(&tree, div)
    );
    assert!(
        Selector::parse(r#"[data-kind^="pri"]"#)
            .unwrap()
            .matches(&tree, div)
    );
    assert!(
        !Selector::parse(r#"[data-kind="other"]"#)
            .unwrap()
            .matches(&tree, div)
    );
}

#[test]
fn matches_combinators() {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = parse_html(
        r#"<html><body>
            <div id="outer"><p id="inner"><em id="deep"></em></p></div>
            <section id="first"></section>
            <section id="second"></section>
        </body></html>"#,
    );
    let inner = Selection::select(&tree, "#inner").first().unwrap();
    let deep = Selection::select(&tree, "#deep").first().unwrap();
    let second = Selection::select(&tree, "#second").first().unwrap();

    assert!(Selector::parse("div p").unwrap().matches(&tree, inner));
    assert!(Selector::parse("div > p").unwrap().matches(&tree, inner));
    assert!(Selector::parse("div em").unwrap().matches(&tree, deep));
    assert!(!Selector::parse("div > em").unwrap().matches(&tree, deep));
    assert!(
        Selector::parse("section + section")
            .unwrap()
            .matches(&tree, second)
    );
    assert!(Selector::parse("div ~ section").unwrap().matches(&tree, second));
}

#[test]
fn selector_lists_match_any_member() {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = parse_html("<html><body><p></p><span></span></body></html>");
    let span = Selection::select(&tree, "span").first().unwrap();

    let list = Selector::parse("p, span").unwrap();
    assert!(list.matches(&tree, span));
    assert_eq!(list.source(), "p, span");
}

#[test]
fn rejects_invalid_and_unsupported_selectors() {
    let _ = env_logger::builder().is_test(true).try_init();
    assert!(Selector::parse("p[[").is_err());
    assert!(Selector::parse(":hover").is_err());
    assert!(Selector::parse("").is_err());
}

#[test]
fn selection_from_selector_is_in_document_order() {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = parse_html(
        r#"<html><body>
            <i id="one"></i><b></b><i id="two"></i><p><i id="three"></i></p>
        </body></html>"#,
    );

    let italics = Selection::select(&tree, "i");
    let ids: Vec<&str> = italics
        .iter()
        .map(|node| tree.attribute(node, "id").unwrap())
        .collect();
    assert_eq!(ids, ["one", "two", "three"]);
}

#[test]
fn selection_from_bad_selector_is_empty() {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = parse_html("<html><body><p></p></body></html>");
    assert!(Selection::select(&tree, "p[[").is_empty());
}
