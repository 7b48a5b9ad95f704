mod common;

use common::*;
use dom::Element;
use dom_matchers::{
    equal_to, has_attribute, has_attribute_matching, has_attribute_value, has_class_name, has_id,
    has_name, is_checked, is_disabled, is_read_only, is_selected, Description,
};

fn element_with_attribute(name: &str) -> Element {
    element(&format!("<input {name}=\"\"/>"))
}

fn an_element_with_attribute(name: &str, value: &str) -> Element {
    element(&format!("<div {name}=\"{value}\"></div>"))
}

#[test]
fn test_total_over_null_and_unknown_types() {
    assert_total(&has_attribute("selected"));
    assert_total(&has_attribute_matching("name", equal_to("Submit")));
}

#[test]
fn test_matches_on_attribute_presence() {
    let selected = element_with_attribute("selected");
    let read_only = element_with_attribute("readonly");

    assert_matches("attribute not found", &has_attribute("selected"), &selected);
    assert_does_not_match("attribute found", &has_attribute("selected"), &read_only);
}

#[test]
fn test_boolean_attribute_shortcuts() {
    let selected = element_with_attribute("selected");
    let read_only = element_with_attribute("readonly");
    let checked = element_with_attribute("checked");
    let disabled = element_with_attribute("disabled");

    assert_matches("not selected", &is_selected(), &selected);
    assert_does_not_match("selected", &is_selected(), &read_only);

    assert_matches("not readonly", &is_read_only(), &read_only);
    assert_does_not_match("readonly", &is_read_only(), &checked);

    assert_matches("not checked", &is_checked(), &checked);
    assert_does_not_match("checked", &is_checked(), &disabled);

    assert_matches("not disabled", &is_disabled(), &disabled);
    assert_does_not_match("disabled", &is_disabled(), &selected);
}

#[test]
fn test_presence_description() {
    assert_description("has attribute \"name\"", &has_attribute("name"));
    assert_mismatch_description(
        "no attribute \"name\"",
        &has_attribute("name"),
        &element_with_attribute("other"),
    );
}

#[test]
fn test_matches_when_attribute_value_matches() {
    let submit = an_element_with_attribute("name", "submit");

    assert_matches(
        "does not match attribute",
        &has_attribute_matching("name", equal_to("submit")),
        &submit,
    );
    assert_does_not_match(
        "matches when value differs",
        &has_attribute_matching("name", equal_to("commit")),
        &submit,
    );
    assert_does_not_match(
        "matches missing attribute",
        &has_attribute_matching("value", equal_to("submit")),
        &submit,
    );
}

#[test]
fn test_value_shortcut_is_case_sensitive() {
    let submit = an_element_with_attribute("name", "submit");

    assert_matches("does not match", &has_attribute_value("name", "submit"), &submit);
    assert_does_not_match("matches other case", &has_attribute_value("name", "Submit"), &submit);
    assert_does_not_match("matches other value", &has_attribute_value("name", "commit"), &submit);
    assert_does_not_match("matches missing", &has_attribute_value("value", "submit"), &submit);
}

#[test]
fn test_id_and_name_shortcuts() {
    let content = an_element_with_attribute("id", "content");
    let header = an_element_with_attribute("id", "header");
    let field = an_element_with_attribute("name", "fieldName");
    let other_field = an_element_with_attribute("name", "incorrectName");

    assert_matches("does not match id", &has_id("content"), &content);
    assert_does_not_match("matches a different id", &has_id("content"), &header);

    assert_matches("does not match name", &has_name("fieldName"), &field);
    assert_does_not_match("matches a different name", &has_name("fieldName"), &other_field);
}

#[test]
fn test_class_name_is_a_token_match() {
    let matcher = has_class_name("text");
    let with_class = |value: &str| an_element_with_attribute("class", value);

    assert_matches("does not match class", &matcher, &with_class("text"));
    assert_does_not_match("matches another class", &matcher, &with_class("number"));
    assert_matches("does not match first class", &matcher, &with_class("text strong"));
    assert_matches("does not match last class", &matcher, &with_class("strong text"));
    assert_matches("does not match center class", &matcher, &with_class("bold text strong"));
    assert_does_not_match("matches look-alike class", &matcher, &with_class("textlongtext"));
    assert_does_not_match(
        "matches missing class",
        &matcher,
        &an_element_with_attribute("id", "text"),
    );
}

#[test]
fn test_class_name_description_is_stable() {
    let matcher = has_class_name("text");
    let first = Description::of(&matcher);

    assert_eq!(
        first,
        concat!(
            "has attribute \"class\" with value (\"text\" or a string starting with \"text \" ",
            "or a string ending with \" text\" or a string containing \" text \")"
        )
    );
    assert_eq!(Description::of(&matcher), first);
}

#[test]
fn test_value_descriptions() {
    let matcher = has_attribute_value("name", "submit");

    assert_description("has attribute \"name\" with value \"submit\"", &matcher);
    assert_mismatch_description(
        "\"name\" value was \"Commit\"",
        &matcher,
        &an_element_with_attribute("name", "Commit"),
    );
    assert_mismatch_description(
        "\"name\" value was \"\"",
        &matcher,
        &an_element_with_attribute("value", "submit"),
    );
}
