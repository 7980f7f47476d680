//! Standalone page for a single rendered message

use maud::{Markup, PreEscaped, html};

use crate::assets::STYLESHEET_PATH;
use crate::components::layout::page_wrapper;

/// Generates HTML page around already rendered markdown
///
/// # Arguments
///
/// * `fragment`: HTML produced by the markdown renderer, embedded verbatim
/// * `title`: Page title
///
/// # Returns
///
/// Rendered HTML markup
///
/// # Examples
///
/// ```
/// use chatmark::pages::document::generate;
///
/// let page = generate(&chatmark::render("**hi**"), "Reply").into_string();
/// assert!(page.contains("<strong>hi</strong>"));
/// ```
pub fn generate(fragment: &str, title: &str) -> Markup {
    page_wrapper(
        title,
        &[STYLESHEET_PATH],
        html! {
            main class="document" {
                (PreEscaped(fragment))
            }
        },
    )
}
