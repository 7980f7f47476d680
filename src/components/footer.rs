//! Page footer component

use maud::{Markup, html};

/// Renders footer shared by all generated pages.
pub fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            "Rendered by "
            a href="https://crates.io/crates/chatmark" { "chatmark" }
            " v" (env!("CARGO_PKG_VERSION"))
        }
    }
}
