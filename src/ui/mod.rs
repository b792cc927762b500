//! Target-independent pieces of the presentational components: prop defaults
//! and inline style handling. The Leptos components that render them live in
//! `web::components` and are only built for the browser.

mod style;

pub use style::Style;

pub const DEFAULT_BUTTON_LABEL: &str = "Submit";
pub const DEFAULT_BUTTON_TYPE: &str = "button";
pub const DEFAULT_INPUT_TYPE: &str = "text";

/// Base look of `Button`; caller overrides are merged on top.
pub fn button_style() -> Style {
    Style::from_pairs(&[
        ("padding", "10px 14px"),
        ("background-color", "#2563EB"),
        ("color", "#fff"),
        ("border", "none"),
        ("border-radius", "8px"),
        ("cursor", "pointer"),
    ])
}

pub fn text_input_wrapper_style() -> Style {
    Style::from_pairs(&[("margin-bottom", "12px")])
}

pub fn text_input_label_style() -> Style {
    Style::from_pairs(&[("display", "block"), ("margin-bottom", "6px")])
}

pub fn text_input_style() -> Style {
    Style::from_pairs(&[
        ("width", "100%"),
        ("padding", "8px 10px"),
        ("border-radius", "6px"),
        ("border", "1px solid #ddd"),
    ])
}
