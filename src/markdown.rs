//! Lightweight markdown rendering for chat messages.
//!
//! This module converts a small markdown dialect (emphasis, links, images,
//! headings, code, quotes, list items and pipe tables) into HTML through an
//! ordered table of regex substitutions. There is no document tree: every
//! rule rewrites the whole text in turn.

mod renderer;
mod rules;

pub use renderer::{MarkdownRenderer, render};
