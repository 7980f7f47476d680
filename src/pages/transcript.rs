//! Transcript page generation for a full conversation

use maud::{Markup, html};

use crate::assets::STYLESHEET_PATH;
use crate::chat::Conversation;
use crate::components::layout::page_wrapper;
use crate::components::message::bubble;

/// Generates HTML page listing every message of a conversation
///
/// Messages appear in conversation order, each rendered from markdown
/// into its own bubble. An empty conversation shows an empty state.
///
/// # Arguments
///
/// * `conversation`: Messages to display
/// * `title`: Page title
///
/// # Returns
///
/// Rendered HTML markup
pub fn generate(conversation: &Conversation, title: &str) -> Markup {
    page_wrapper(
        title,
        &[STYLESHEET_PATH],
        html! {
            header class="chat-header" {
                h1 { (title) }
                span class="message-count" { (conversation.len()) " messages" }
            }
            main class="chat" {
                @if conversation.is_empty() {
                    p class="empty-state" { "No messages yet" }
                } @else {
                    @for message in conversation.messages() {
                        (bubble(message))
                    }
                }
            }
        },
    )
}
