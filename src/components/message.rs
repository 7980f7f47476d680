//! Chat message display components

use maud::{Markup, PreEscaped, html};

use crate::chat::{Message, Role};

/// Renders one message as a role-classed bubble.
///
/// The message text goes through the markdown renderer and is embedded
/// as-is. Nothing is escaped, so markup inside the text reaches the page.
pub fn bubble(message: &Message) -> Markup {
    html! {
        article class=(format!("message message-{}", message.role.as_str())) {
            div class="message-role" { (role_label(message.role)) }
            div class="message-body" {
                (PreEscaped(message.html()))
            }
        }
    }
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "You",
        Role::Model => "Model",
    }
}
