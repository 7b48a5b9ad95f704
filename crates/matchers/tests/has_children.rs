mod common;

use common::*;
use dom_matchers::{
    contains_in_any_order, has_child, has_children, has_children_matching, has_size, has_tag,
    has_text,
};

#[test]
fn test_total_over_null_and_unknown_types() {
    assert_total(&has_children(vec![has_tag("li")]));
}

#[test]
fn test_matches_when_all_children_match() {
    assert_matches(
        "does not match children",
        &has_children(vec![has_text("should match"), has_text("should match too")]),
        &element("<ol><li>should match</li><li>should match too</li></ol>"),
    );
    assert_does_not_match(
        "matches invalid child",
        &has_children(vec![has_tag("span")]),
        &element("<div><p>should not match</p></div>"),
    );
    assert_does_not_match(
        "matches one invalid child",
        &has_children(vec![has_tag("span"), has_tag("span")]),
        &element("<div><p>should fail match</p><span>should match</span></div>"),
    );
    assert_does_not_match(
        "matches missing child",
        &has_children(vec![has_tag("span")]),
        &element("<div></div>"),
    );
}

#[test]
fn test_only_considers_first_level_children() {
    assert_does_not_match(
        "matches grand children",
        &has_children(vec![has_tag("span")]),
        &element("<div><p><span>should not match</span></p></div>"),
    );
}

#[test]
fn test_text_and_comments_are_not_children() {
    let list = element("<ul> text <!-- note --><li>one</li>\n<li>two</li></ul>");

    assert_matches("counts non-elements", &has_children_matching(has_size(2)), &list);
}

#[test]
fn test_single_child_among_many() {
    assert_matches(
        "does not match child among many",
        &has_child(has_tag("span")),
        &element("<div><p>won't match</p><span>should match</span></div>"),
    );
    assert_does_not_match(
        "matches childless",
        &has_child(has_tag("span")),
        &element("<div></div>"),
    );
}

#[test]
fn test_children_in_any_order() {
    let list = element("<ol><li>second</li><li>first</li></ol>");

    assert_matches(
        "does not match reordered children",
        &has_children_matching(contains_in_any_order(vec![has_text("first"), has_text("second")])),
        &list,
    );
}

#[test]
fn test_readable_descriptions() {
    assert_description(
        "has children iterable containing [has content text \"should match\"]",
        &has_children(vec![has_text("should match")]),
    );
    assert_mismatch_description(
        "children item 0: text was \"does not match\"",
        &has_children(vec![has_text("should not match")]),
        &element("<div><p>does not match</p></div>"),
    );
}
