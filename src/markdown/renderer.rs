//! Markdown to HTML rendering for chat messages.

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::path::Path;

use super::rules::{RULES, Rule};

/// Renders markdown to HTML with the built-in rule table.
///
/// Shorthand for `MarkdownRenderer::new().render(text)`.
pub fn render(text: &str) -> String {
    MarkdownRenderer::new().render(text)
}

/// Rewrites the chat markdown dialect into HTML.
///
/// Applies an ordered table of regex substitutions. Each rule scans the
/// full output of the previous one, so rule order is observable: bold runs
/// before italic, links before images, and pipe rows go through a global
/// header pass followed by a global body pass.
///
/// Output is not escaped. Raw `<`, `>` and `&` in the input reach the
/// result untouched, and callers embedding it in a page inherit that.
/// Multi-line lists and tables are not guaranteed to be well formed:
/// every list line is wrapped in its own `<ul>`/`<ol>`, and every pipe row
/// becomes its own `<thead>…</thead><tbody>`.
#[derive(Clone, Copy)]
pub struct MarkdownRenderer {
    rules: &'static [Rule],
}

impl MarkdownRenderer {
    /// Creates renderer over the built-in rule table.
    ///
    /// The table is compiled once per process on first use and shared by
    /// every renderer afterwards.
    pub fn new() -> Self {
        Self { rules: &RULES }
    }

    /// Names of the rules in application order.
    pub fn rules(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(Rule::name)
    }

    /// Renders markdown content to HTML string.
    ///
    /// Total over all inputs: text that matches no rule is returned
    /// unchanged, and the empty string renders to the empty string.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML as string
    pub fn render(&self, content: &str) -> String {
        self.rules.iter().fold(content.to_owned(), |html, rule| {
            let rewritten = match rule.apply(&html) {
                Cow::Owned(next) => Some(next),
                Cow::Borrowed(_) => None,
            };

            match rewritten {
                Some(next) => {
                    tracing::trace!(rule = rule.name(), "rule rewrote text");
                    next
                }
                None => html,
            }
        })
    }

    /// Renders markdown file at given path.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;
        Ok(self.render(&content))
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MarkdownRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkdownRenderer")
            .field("rules", &self.rules().collect::<Vec<_>>())
            .finish()
    }
}
