//! Ordered substitution rules for the chat markdown dialect.
//!
//! Every rule is a compiled pattern paired with a replacement producer.
//! Rules run in table order and each one scans the whole current text,
//! including markup emitted by the rules before it.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Produces the substitution text for one match.
pub enum Replacement {
    /// `$n` expansion template handed straight to the regex engine.
    Template(&'static str),
    /// Computed replacement for rules that inspect their captures.
    With(fn(&Captures<'_>) -> String),
}

/// One pattern/replacement pair applied globally as a single pass.
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    replacement: Replacement,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, replacement: Replacement) -> Self {
        // Patterns are fixed literals below; a failure here is a programming error.
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid pattern for rule {name}: {e}"));

        Self {
            name,
            pattern,
            replacement,
        }
    }

    /// Rule name used in trace output and by [`super::MarkdownRenderer::rules`].
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Runs one pass of this rule over `text`, rewriting every
    /// non-overlapping match left to right.
    ///
    /// Returns `Cow::Borrowed` when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.replacement {
            Replacement::Template(template) => self.pattern.replace_all(text, *template),
            Replacement::With(produce) => self
                .pattern
                .replace_all(text, |caps: &Captures<'_>| produce(caps)),
        }
    }
}

/// Built-in rule table in application order.
pub static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    use Replacement::{Template, With};

    vec![
        Rule::new("bold", r"\*\*(.*?)\*\*", Template("<strong>${1}</strong>")),
        Rule::new("italic", r"\*(.*?)\*", Template("<em>${1}</em>")),
        Rule::new("strikethrough", r"~~(.*?)~~", Template("<del>${1}</del>")),
        Rule::new("link", r"(!?)\[(.*?)\]\((.*?)\)", With(link)),
        Rule::new("heading", r"(?mR)^(#{1,6})\s*(.*?)$", With(heading)),
        Rule::new("inline_code", r"(``+)|`([^`\n]+)`", With(inline_code)),
        Rule::new(
            "fenced_code",
            r"(?s)```(.*?)```",
            Template("<pre><code>${1}</code></pre>"),
        ),
        Rule::new(
            "blockquote",
            r"(?mR)^>\s*(.*?)$",
            Template("<blockquote>${1}</blockquote>"),
        ),
        Rule::new(
            "unordered_item",
            r"(?mR)^\* (.*?)$",
            Template("<ul><li>${1}</li></ul>"),
        ),
        Rule::new(
            "ordered_item",
            r"(?mR)^\d+\. (.*?)$",
            Template("<ol><li>${1}</li></ol>"),
        ),
        Rule::new(
            "image",
            r"!\[(.*?)\]\((.*?)\)",
            Template(r#"<img src="${2}" alt="${1}"/>"#),
        ),
        Rule::new("table_header", TABLE_ROW, With(table_header)),
        Rule::new("table_body", TABLE_ROW, With(table_body)),
    ]
});

/// A whole line opening and closing with a pipe.
const TABLE_ROW: &str = r"(?mR)^\|(.+)\|$";

/// Bracket spans preceded by `!` are images and stay untouched for the image rule.
fn link(caps: &Captures<'_>) -> String {
    if !caps[1].is_empty() {
        return caps[0].to_string();
    }
    format!(r#"<a href="{}">{}</a>"#, &caps[3], &caps[2])
}

fn heading(caps: &Captures<'_>) -> String {
    let level = caps[1].len();
    format!("<h{level}>{}</h{level}>", &caps[2])
}

/// Runs of two or more backticks match on their own and are kept verbatim
/// for the fenced block rule, so they never pair with a single backtick.
fn inline_code(caps: &Captures<'_>) -> String {
    match caps.get(2) {
        Some(content) => format!("<code>{}</code>", content.as_str()),
        None => caps[0].to_string(),
    }
}

fn table_header(caps: &Captures<'_>) -> String {
    format!("<thead><tr>{}</tr></thead><tbody>", cells(&caps[1], "th"))
}

fn table_body(caps: &Captures<'_>) -> String {
    format!("<tr>{}</tr></tbody></table>", cells(&caps[1], "td"))
}

fn cells(row: &str, tag: &str) -> String {
    row.split('|')
        .map(|cell| format!("<{tag}>{}</{tag}>", cell.trim()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> &'static Rule {
        RULES
            .iter()
            .find(|r| r.name() == name)
            .expect("rule should exist")
    }

    #[test]
    fn test_rule_table_order() {
        // Arrange
        let expected = [
            "bold",
            "italic",
            "strikethrough",
            "link",
            "heading",
            "inline_code",
            "fenced_code",
            "blockquote",
            "unordered_item",
            "ordered_item",
            "image",
            "table_header",
            "table_body",
        ];

        // Act
        let names: Vec<_> = RULES.iter().map(Rule::name).collect();

        // Assert
        assert_eq!(names, expected);
    }

    #[test]
    fn test_apply_without_match_borrows() {
        // Arrange
        let text = "nothing to see";

        // Act
        let result = rule("bold").apply(text);

        // Assert
        assert!(matches!(result, Cow::Borrowed(_)), "Should not allocate");
        assert_eq!(result, text);
    }

    #[test]
    fn test_bold_multiple_occurrences() {
        // Act
        let result = rule("bold").apply("**a** and **b**");

        // Assert
        assert_eq!(result, "<strong>a</strong> and <strong>b</strong>");
    }

    #[test]
    fn test_link_skips_image_syntax() {
        // Act
        let result = rule("link").apply("![alt](x.png) [site](x.com)");

        // Assert
        assert_eq!(result, r#"![alt](x.png) <a href="x.com">site</a>"#);
    }

    #[test]
    fn test_link_adjacent_spans() {
        // Act
        let result = rule("link").apply("[a](x)[b](y)");

        // Assert
        assert_eq!(result, r#"<a href="x">a</a><a href="y">b</a>"#);
    }

    #[test]
    fn test_heading_level_from_hash_count() {
        // Act
        let result = rule("heading").apply("# one\n###### six");

        // Assert
        assert_eq!(result, "<h1>one</h1>\n<h6>six</h6>");
    }

    #[test]
    fn test_heading_caps_at_six_hashes() {
        // Act
        let result = rule("heading").apply("####### seven");

        // Assert
        assert_eq!(result, "<h6># seven</h6>");
    }

    #[test]
    fn test_heading_not_mid_line() {
        // Act
        let result = rule("heading").apply("issue #42");

        // Assert
        assert_eq!(result, "issue #42");
    }

    #[test]
    fn test_inline_code_leaves_fences() {
        // Act
        let result = rule("inline_code").apply("```block``` and `x`");

        // Assert
        assert_eq!(result, "```block``` and <code>x</code>");
    }

    #[test]
    fn test_inline_code_ignores_empty_span() {
        // Act
        let result = rule("inline_code").apply("``");

        // Assert
        assert_eq!(result, "``");
    }

    #[test]
    fn test_fenced_code_spans_lines() {
        // Act
        let result = rule("fenced_code").apply("```\nfn main() {}\n```");

        // Assert
        assert_eq!(result, "<pre><code>\nfn main() {}\n</code></pre>");
    }

    #[test]
    fn test_table_header_rewrites_every_row() {
        // Act
        let result = rule("table_header").apply("|a|b|\n|c|d|");

        // Assert
        assert_eq!(
            result,
            "<thead><tr><th>a</th><th>b</th></tr></thead><tbody>\n\
             <thead><tr><th>c</th><th>d</th></tr></thead><tbody>"
        );
    }

    #[test]
    fn test_table_body_finds_nothing_after_header_pass() {
        // Arrange
        let headers = rule("table_header").apply("|a|\n|b|").into_owned();

        // Act
        let result = rule("table_body").apply(&headers);

        // Assert
        assert!(matches!(result, Cow::Borrowed(_)), "Header rows no longer match");
    }

    #[test]
    fn test_inline_code_after_double_backtick() {
        // Act
        let result = rule("inline_code").apply("a `` b `c` d");

        // Assert
        assert_eq!(result, "a `` b <code>c</code> d");
    }

    #[test]
    fn test_line_rules_exclude_carriage_return() {
        // Act
        let heading = rule("heading").apply("# T\r\nnext");
        let item = rule("unordered_item").apply("* x\r\n");
        let row = rule("table_header").apply("|a|\r\n");

        // Assert
        assert_eq!(heading, "<h1>T</h1>\r\nnext");
        assert_eq!(item, "<ul><li>x</li></ul>\r\n");
        assert_eq!(row, "<thead><tr><th>a</th></tr></thead><tbody>\r\n");
    }

    #[test]
    fn test_table_cells_are_trimmed() {
        // Act
        let result = rule("table_body").apply("| a | b |");

        // Assert
        assert_eq!(result, "<tr><td>a</td><td>b</td></tr></tbody></table>");
    }
}
