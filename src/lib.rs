//! Markdown rendering for chat front ends.

mod assets;
pub mod chat;
pub mod components;
mod config;
mod markdown;
pub mod pages;

pub use assets::{STYLESHEET_PATH, write_css_assets};
pub use chat::{
    ChatError, ChatRequest, ChatResponse, Conversation, HISTORY_LIMIT, HistoryEntry, Message,
    Part, Role,
};
pub use config::Config;
pub use markdown::{MarkdownRenderer, render};
