pub mod arrow_function;
pub mod async_await;
pub mod css_variables;
pub mod fetch_api;
pub mod media_element;
pub mod modern_layout;
pub mod viewport_meta;

use super::Rule;

/// Script rules, in evaluation order.
pub fn script_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(async_await::AsyncAwaitRule),
        Box::new(arrow_function::ArrowFunctionRule),
        Box::new(fetch_api::FetchApiRule),
    ]
}

/// Markup rules, in evaluation order.
pub fn markup_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(media_element::MediaElementRule),
        Box::new(viewport_meta::ViewportMetaRule),
    ]
}

/// Stylesheet rules, in evaluation order.
pub fn stylesheet_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(modern_layout::ModernLayoutRule),
        Box::new(css_variables::CssVariablesRule),
    ]
}
