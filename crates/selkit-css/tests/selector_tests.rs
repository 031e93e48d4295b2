//! Integration tests for building compound selectors.

use selkit_css::{Fragment, FragmentKind, Selector, SelectorError, builder};

#[test]
fn test_id_with_classes() {
    let selector = builder::id("main")
        .class("container")
        .unwrap()
        .class("editable")
        .unwrap();
    assert_eq!(selector.stringify(), "#main.container.editable");
}

#[test]
fn test_element_attribute_pseudo_class() {
    let selector = builder::element("a")
        .attr(r#"href$=".png""#)
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(selector.stringify(), r#"a[href$=".png"]:focus"#);
}

#[test]
fn test_every_kind_once() {
    let selector = builder::element("li")
        .id("first")
        .unwrap()
        .class("item")
        .unwrap()
        .attr("data-x")
        .unwrap()
        .pseudo_class("hover")
        .unwrap()
        .pseudo_element("before")
        .unwrap();
    assert_eq!(selector.stringify(), "li#first.item[data-x]:hover::before");
    assert_eq!(selector.to_string(), selector.stringify());
}

#[test]
fn test_repeatable_kinds() {
    let selector = builder::class("a")
        .class("b")
        .unwrap()
        .attr("x")
        .unwrap()
        .attr("y")
        .unwrap()
        .pseudo_class("first-child")
        .unwrap()
        .pseudo_class("nth-of-type(even)")
        .unwrap();
    assert_eq!(selector.stringify(), ".a.b[x][y]:first-child:nth-of-type(even)");
}

// Ordering errors

#[test]
fn test_class_before_id_is_order_error() {
    let result = builder::element("div").class("a").unwrap().id("b");
    assert_eq!(
        result,
        Err(SelectorError::Order {
            kind: FragmentKind::Id,
            after: FragmentKind::Class,
        })
    );
}

#[test]
fn test_element_after_anything_is_order_error() {
    for start in [
        builder::id("x"),
        builder::class("x"),
        builder::attr("x"),
        builder::pseudo_class("x"),
        builder::pseudo_element("x"),
    ] {
        assert!(matches!(
            start.element("div"),
            Err(SelectorError::Order {
                kind: FragmentKind::Element,
                ..
            })
        ));
    }
}

#[test]
fn test_attribute_after_pseudo_class_is_order_error() {
    let result = builder::pseudo_class("focus").attr("href");
    assert!(matches!(result, Err(SelectorError::Order { .. })));
}

#[test]
fn test_pseudo_class_after_pseudo_element_is_order_error() {
    let result = builder::pseudo_element("after").pseudo_class("hover");
    assert!(matches!(result, Err(SelectorError::Order { .. })));
}

#[test]
fn test_order_error_message() {
    let err = builder::class("a").id("b").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    );
}

// Duplicate errors

#[test]
fn test_duplicate_id() {
    assert_eq!(
        builder::id("x").id("y"),
        Err(SelectorError::DuplicateFragment {
            kind: FragmentKind::Id
        })
    );
}

#[test]
fn test_duplicate_element() {
    assert_eq!(
        builder::element("div").element("span"),
        Err(SelectorError::DuplicateFragment {
            kind: FragmentKind::Element
        })
    );
}

#[test]
fn test_duplicate_pseudo_element() {
    assert_eq!(
        builder::pseudo_element("before").pseudo_element("after"),
        Err(SelectorError::DuplicateFragment {
            kind: FragmentKind::PseudoElement
        })
    );
}

#[test]
fn test_duplicate_wins_even_when_out_of_order() {
    // A second element after an id is both repeated and out of order;
    // the repetition is what gets reported.
    let result = builder::element("div").id("main").unwrap().element("p");
    assert!(matches!(
        result,
        Err(SelectorError::DuplicateFragment {
            kind: FragmentKind::Element
        })
    ));
}

#[test]
fn test_duplicate_error_message() {
    let err = builder::element("div").element("p").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Element, id and pseudo-element should not occur more then one time inside the selector"
    );
}

// State after errors

#[test]
fn test_push_error_keeps_fragments() {
    let mut selector = Selector::new();
    selector
        .push(Fragment::new(FragmentKind::Element, "div"))
        .unwrap();
    selector
        .push(Fragment::new(FragmentKind::Class, "a"))
        .unwrap();

    assert!(selector.push(Fragment::new(FragmentKind::Id, "b")).is_err());
    assert!(
        selector
            .push(Fragment::new(FragmentKind::Element, "p"))
            .is_err()
    );

    assert_eq!(selector.len(), 2);
    assert_eq!(selector.stringify(), "div.a");

    // Still usable afterwards.
    selector
        .push(Fragment::new(FragmentKind::PseudoClass, "hover"))
        .unwrap();
    assert_eq!(selector.stringify(), "div.a:hover");
}

#[test]
fn test_stringify_is_pure() {
    let selector = builder::element("p").class("lead").unwrap();
    let first = selector.stringify();
    let second = selector.stringify();
    assert_eq!(first, second);
    assert_eq!(selector.len(), 2);
}

#[test]
fn test_accessors() {
    let selector = builder::element("p").class("lead").unwrap();
    assert!(selector.contains(FragmentKind::Element));
    assert!(!selector.contains(FragmentKind::Id));
    assert_eq!(selector.max_kind(), Some(FragmentKind::Class));
    assert_eq!(
        selector.fragments(),
        [
            Fragment::new(FragmentKind::Element, "p"),
            Fragment::new(FragmentKind::Class, "lead"),
        ]
    );
}
