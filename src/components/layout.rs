//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;

/// Wraps rendered chat content in a complete HTML document
///
/// Every generated page shares one head: charset, viewport, generator tag
/// and the stylesheets passed in. The body holds the caller's markup in a
/// centered container followed by the footer.
///
/// # Arguments
///
/// * `title`: Page title text, suffixed with the tool name
/// * `stylesheets`: CSS paths relative to the page
/// * `body`: Page-specific body markup
pub fn page_wrapper(title: &str, stylesheets: &[&str], body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="generator" content=(concat!("chatmark ", env!("CARGO_PKG_VERSION")));
                title { (title) " - Chatmark" }
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body class="chatmark" {
                div class="container" {
                    (body)
                }
                (footer())
            }
        }
    }
}
