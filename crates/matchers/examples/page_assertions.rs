//! Page assertions example - structural checks over a rendered page

use dom::{Document, ElementRenderer, RenderConfig};
use dom_matchers::{
    an_element, check, has_attribute_value, has_class_name, has_no_selector, has_selector_with,
    has_text, has_unique_selector_with, is_checked,
};

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <nav><ul class="menu">
    <li class="active">Home</li>
    <li>Products</li>
    <li>Contact</li>
  </ul></nav>
  <form id="newsletter">
    <input type="email" name="email">
    <input type="checkbox" name="consent" checked>
  </form>
</body>
</html>"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let document = Document::parse(PAGE);
    let page = document.root_element();

    let config = RenderConfig::from_json(r#"{"max_text_length": 20}"#)?;
    let renderer = ElementRenderer::with_config(config);
    for item in page.select("ul.menu > li")? {
        println!("menu item: {} from {}", renderer.render(&item), item.outer_html());
    }

    let checks = vec![
        has_unique_selector_with(
            "ul.menu > li.active",
            vec![an_element(vec![has_class_name("active"), has_text("Home")])],
        ),
        has_selector_with("ul.menu > li", vec![has_text("Products"), has_text("About")]),
        has_selector_with(
            "form#newsletter input",
            vec![an_element(vec![has_attribute_value("name", "consent"), is_checked()])],
        ),
        has_no_selector(".error"),
    ];

    for matcher in &checks {
        let report = check(&page, matcher);
        println!("{}", report.to_json()?);
        if !report.matched {
            println!("{report}");
        }
    }

    Ok(())
}
