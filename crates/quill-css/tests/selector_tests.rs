//! Integration tests for the CSS selector builder.

use quickcheck_macros::quickcheck;
use quill_common::warning::already_warned;
use quill_css::selector::{
    Combinator, PartKind, SelectorBuilder, SelectorError, css_selector_builder,
};

#[test]
fn test_empty_builder_stringifies_to_empty() {
    assert_eq!(css_selector_builder().stringify(), "");
    assert!(css_selector_builder().parts().is_empty());
}

#[test]
fn test_all_parts_in_order() {
    let selector = css_selector_builder()
        .element("a")
        .unwrap()
        .id("b")
        .unwrap()
        .class("c")
        .unwrap()
        .attr("d")
        .unwrap()
        .pseudo_class("e")
        .unwrap()
        .pseudo_element("f")
        .unwrap();
    assert_eq!(selector.stringify(), "a#b.c[d]:e::f");
    assert_eq!(selector.parts(), &PartKind::ALL);
}

#[test]
fn test_id_with_repeated_classes() {
    let selector = css_selector_builder()
        .id("main")
        .unwrap()
        .class("container")
        .unwrap()
        .class("editable")
        .unwrap();
    assert_eq!(selector.stringify(), "#main.container.editable");
}

#[test]
fn test_attribute_value_is_taken_verbatim() {
    let selector = css_selector_builder()
        .element("a")
        .unwrap()
        .attr(r#"href$=".png""#)
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(selector.stringify(), r#"a[href$=".png"]:focus"#);
}

#[test]
fn test_repeatable_parts() {
    let classes = css_selector_builder().class("a").unwrap().class("b").unwrap();
    assert_eq!(classes.stringify(), ".a.b");

    let attrs = css_selector_builder().attr("x").unwrap().attr("y").unwrap();
    assert_eq!(attrs.stringify(), "[x][y]");

    let pseudo = css_selector_builder()
        .pseudo_class("hover")
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(pseudo.stringify(), ":hover:focus");
}

// Duplicate singleton parts

#[test]
fn test_duplicate_element_fails() {
    let err = css_selector_builder()
        .element("a")
        .unwrap()
        .element("b")
        .unwrap_err();
    assert_eq!(
        err,
        SelectorError::DuplicateSingletonPart {
            kind: PartKind::Element
        }
    );
}

#[test]
fn test_duplicate_id_fails() {
    let err = css_selector_builder().id("a").unwrap().id("b").unwrap_err();
    assert!(matches!(
        err,
        SelectorError::DuplicateSingletonPart { kind: PartKind::Id }
    ));
}

#[test]
fn test_duplicate_pseudo_element_fails() {
    let err = css_selector_builder()
        .pseudo_element("before")
        .unwrap()
        .pseudo_element("after")
        .unwrap_err();
    assert!(matches!(
        err,
        SelectorError::DuplicateSingletonPart {
            kind: PartKind::PseudoElement
        }
    ));
}

#[test]
fn test_duplicate_is_reported_before_ordering() {
    // `#a.b#c` is both out of order and a repeated id
    let err = css_selector_builder()
        .id("a")
        .unwrap()
        .class("b")
        .unwrap()
        .id("c")
        .unwrap_err();
    assert!(matches!(err, SelectorError::DuplicateSingletonPart { .. }));
}

#[test]
fn test_duplicate_error_message() {
    let err = css_selector_builder()
        .element("a")
        .unwrap()
        .element("b")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Element, id and pseudo-element should not occur more then one time inside the selector (repeated element)"
    );
}

// Ordering

#[test]
fn test_class_before_element_fails() {
    let err = css_selector_builder()
        .class("x")
        .unwrap()
        .element("a")
        .unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrderPart {
            previous: PartKind::Class,
            next: PartKind::Element,
        }
    );
}

#[test]
fn test_out_of_order_pairs_fail() {
    let cases: Vec<Result<SelectorBuilder, SelectorError>> = vec![
        css_selector_builder().id("a").and_then(|s| s.element("b")),
        css_selector_builder().attr("a").and_then(|s| s.class("b")),
        css_selector_builder().pseudo_class("a").and_then(|s| s.attr("b")),
        css_selector_builder()
            .pseudo_element("a")
            .and_then(|s| s.pseudo_class("b")),
        css_selector_builder().class("a").and_then(|s| s.id("b")),
    ];
    for case in cases {
        assert!(matches!(case, Err(SelectorError::OutOfOrderPart { .. })));
    }
}

#[test]
fn test_ordering_error_message() {
    let err = css_selector_builder()
        .pseudo_element("after")
        .unwrap()
        .class("x")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element (got class after pseudo-element)"
    );
}

#[test]
fn test_error_messages_name_the_parts() {
    let err = css_selector_builder()
        .pseudo_element("before")
        .unwrap()
        .pseudo_element("after")
        .unwrap_err();
    assert!(err.to_string().ends_with("(repeated pseudo-element)"));

    let err = css_selector_builder()
        .attr("href")
        .unwrap()
        .id("main")
        .unwrap_err();
    assert!(err.to_string().ends_with("(got id after attribute)"));
}

#[test]
fn test_failed_call_leaves_builder_usable() {
    let base = css_selector_builder().element("div").unwrap();
    assert!(base.element("span").is_err());
    let next = base.class("ok").unwrap();
    assert_eq!(base.stringify(), "div");
    assert_eq!(next.stringify(), "div.ok");
}

#[test]
fn test_branches_from_shared_prefix_are_independent() {
    let base = css_selector_builder().element("li").unwrap();
    let first = base.class("first").unwrap();
    let second = base.id("second").unwrap();
    assert_eq!(first.stringify(), "li.first");
    assert_eq!(second.stringify(), "li#second");
}

#[test]
fn test_builders_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SelectorBuilder>();
    assert_send_sync::<SelectorError>();
}

#[test]
fn test_builders_move_across_threads() {
    let base = css_selector_builder().element("nav").unwrap();
    let handles: Vec<_> = ["a", "b", "c"]
        .into_iter()
        .map(|class| {
            let base = base.clone();
            std::thread::spawn(move || base.class(class).unwrap().to_string())
        })
        .collect();
    let built: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(built, vec!["nav.a", "nav.b", "nav.c"]);
    assert_eq!(base.stringify(), "nav");
}

// Combinators
// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

#[test]
fn test_combine_next_sibling() {
    let left = css_selector_builder()
        .element("div")
        .unwrap()
        .id("main")
        .unwrap();
    let right = css_selector_builder().element("span").unwrap();
    let combined = SelectorBuilder::combine(&left, "+", &right);
    assert_eq!(combined.stringify(), "div#main + span");
    assert!(combined.is_combined());
}

#[test]
fn test_combine_with_enum_symbol() {
    let left = css_selector_builder().element("ul").unwrap();
    let right = css_selector_builder().element("li").unwrap();
    let combined = SelectorBuilder::combine(&left, Combinator::Child.as_str(), &right);
    assert_eq!(combined.to_string(), "ul > li");
}

#[test]
fn test_nested_combine() {
    let builder = css_selector_builder();
    let selector = SelectorBuilder::combine(
        &builder
            .element("div")
            .unwrap()
            .id("main")
            .unwrap()
            .class("container")
            .unwrap()
            .class("draggable")
            .unwrap(),
        "+",
        &SelectorBuilder::combine(
            &builder.element("table").unwrap().id("data").unwrap(),
            "~",
            &SelectorBuilder::combine(
                &builder
                    .element("tr")
                    .unwrap()
                    .pseudo_class("nth-of-type(even)")
                    .unwrap(),
                " ",
                &builder
                    .element("td")
                    .unwrap()
                    .pseudo_class("nth-of-type(even)")
                    .unwrap(),
            ),
        ),
    );
    assert_eq!(
        selector.stringify(),
        "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
    );
}

#[test]
fn test_combine_left_nested() {
    let a = css_selector_builder().element("a").unwrap();
    let b = css_selector_builder().element("b").unwrap();
    let c = css_selector_builder().element("c").unwrap();
    let ab = SelectorBuilder::combine(&a, ">", &b);
    assert_eq!(SelectorBuilder::combine(&ab, "~", &c).stringify(), "a > b ~ c");
}

#[test]
fn test_combined_selector_restarts_part_sequence() {
    let left = css_selector_builder().element("p").unwrap().class("x").unwrap();
    let right = css_selector_builder().element("em").unwrap();
    let combined = SelectorBuilder::combine(&left, " ", &right);
    assert!(combined.parts().is_empty());

    let extended = combined.element("b").unwrap();
    assert_eq!(extended.stringify(), "p.x   emb");
    assert_eq!(extended.parts(), &[PartKind::Element]);
}

#[test]
fn test_unknown_combinator_is_kept_and_warned() {
    let left = css_selector_builder().element("a").unwrap();
    let right = css_selector_builder().element("b").unwrap();
    let combined = SelectorBuilder::combine(&left, "&", &right);
    assert_eq!(combined.stringify(), "a & b");
    assert!(already_warned(
        "Selector",
        "unknown combinator '&' passed to combine"
    ));
}

// Properties

fn kinds_from(seeds: &[u8]) -> Vec<PartKind> {
    let mut kinds: Vec<PartKind> = seeds
        .iter()
        .map(|seed| PartKind::ALL[usize::from(*seed) % PartKind::ALL.len()])
        .collect();
    kinds.sort();
    let mut seen = Vec::new();
    kinds.retain(|kind| {
        if kind.is_singleton() {
            if seen.contains(kind) {
                return false;
            }
            seen.push(*kind);
        }
        true
    });
    kinds
}

#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn prop_ordered_parts_render_in_call_order(seeds: Vec<u8>) -> bool {
    let kinds = kinds_from(&seeds);
    let mut builder = css_selector_builder();
    let mut expected = String::new();
    for (index, kind) in kinds.iter().enumerate() {
        let value = format!("v{index}");
        expected.push_str(&kind.render(&value));
        builder = match builder.push(*kind, &value) {
            Ok(next) => next,
            Err(_) => return false,
        };
    }
    builder.stringify() == expected && builder.parts() == kinds.as_slice()
}

#[quickcheck]
fn prop_lower_rank_after_higher_rank_fails(a: u8, b: u8) -> bool {
    let first = PartKind::ALL[usize::from(a) % PartKind::ALL.len()];
    let second = PartKind::ALL[usize::from(b) % PartKind::ALL.len()];
    let result = css_selector_builder()
        .push(first, "x")
        .and_then(|s| s.push(second, "y"));
    if first == second && first.is_singleton() {
        matches!(result, Err(SelectorError::DuplicateSingletonPart { .. }))
    } else if first.rank() > second.rank() {
        matches!(result, Err(SelectorError::OutOfOrderPart { .. }))
    } else {
        result.is_ok()
    }
}
