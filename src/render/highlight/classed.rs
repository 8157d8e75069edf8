//! Classed highlighter: wraps tokens in spans carrying stable CSS
//! classes so a stylesheet picks the colors. No grammar definitions
//! are needed, which keeps the output identical across languages.

use super::Highlighter;
use crate::error::Result;

/// Highlighter emitting classed token spans and line numbers.
pub struct ClassedHighlighter;

impl ClassedHighlighter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClassedHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for ClassedHighlighter {
    fn highlight(&self, code: &str, _language: Option<&str>) -> Result<String> {
        let mut lines: Vec<&str> = code.lines().collect();
        while matches!(lines.last(), Some(line) if line.trim().is_empty()) {
            lines.pop();
        }

        let width = lines.len().to_string().len();
        let mut output = String::new();

        for (i, line) in lines.iter().enumerate() {
            let number = i + 1;
            output.push_str(&format!(
                r#"<span class="hl-line-number">{number:>width$}</span> "#
            ));
            if is_comment_line(line) {
                output.push_str(&format!(
                    r#"<span class="hl-comment-line">{}</span>"#,
                    escape_html(line)
                ));
            } else {
                output.push_str(&highlight_line(line));
            }
            output.push('\n');
        }

        Ok(output)
    }

    fn head_content(&self) -> Option<String> {
        Some(CLASSED_STYLES.to_string())
    }
}

/// Lines that are entirely a comment are dimmed as a unit instead of
/// being tokenized.
fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("//")
        || trimmed.starts_with('#')
        || trimmed.starts_with("<!--")
        || trimmed.starts_with("/*")
        || (trimmed.starts_with('*') && !trimmed.starts_with("*/"))
}

fn highlight_line(line: &str) -> String {
    let mut output = String::new();
    let mut i = 0;

    while i < line.len() {
        let rest = &line[i..];
        let c = match rest.chars().next() {
            Some(c) => c,
            None => break,
        };

        if rest.starts_with("//") {
            push_span(&mut output, "hl-comment", rest);
            break;
        }

        if c == '"' || c == '\'' || c == '`' {
            let len = string_token_len(rest, c);
            push_span(&mut output, "hl-string", &rest[..len]);
            i += len;
            continue;
        }

        if c.is_ascii_digit() {
            let len = rest
                .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '.' || ch == '_'))
                .unwrap_or(rest.len());
            push_span(&mut output, "hl-number", &rest[..len]);
            i += len;
            continue;
        }

        if c.is_alphabetic() || c == '_' {
            let len = rest
                .find(|ch: char| !(ch.is_alphanumeric() || ch == '_'))
                .unwrap_or(rest.len());
            let word = &rest[..len];
            if KEYWORDS.contains(&word) {
                push_span(&mut output, "hl-keyword", word);
            } else {
                output.push_str(&escape_html(word));
            }
            i += len;
            continue;
        }

        output.push_str(&escape_html(&rest[..c.len_utf8()]));
        i += c.len_utf8();
    }

    output
}

/// Length of a quoted string token, honoring backslash escapes. An
/// unterminated string runs to the end of the line.
fn string_token_len(rest: &str, quote: char) -> usize {
    let mut escaped = false;
    for (idx, ch) in rest.char_indices().skip(1) {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            c if c == quote => return idx + c.len_utf8(),
            _ => {}
        }
    }
    rest.len()
}

fn push_span(output: &mut String, class: &str, text: &str) {
    output.push_str(&format!(
        r#"<span class="{}">{}</span>"#,
        class,
        escape_html(text)
    ));
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Keywords shared across the languages long-form posts tend to quote.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "case", "catch", "class", "const",
    "continue", "def", "default", "else", "enum", "export", "fn", "for",
    "from", "function", "if", "impl", "import", "in", "interface", "let",
    "loop", "match", "mod", "mut", "new", "pub", "return", "static", "struct",
    "switch", "trait", "try", "type", "use", "var", "where", "while",
];

const CLASSED_STYLES: &str = r#"<style>
.hl-keyword { color: #f47067; }
.hl-string { color: #96d0ff; }
.hl-number { color: #6cb6ff; }
.hl-comment, .hl-comment-line { color: #768390; }
.hl-line-number { color: #768390; opacity: 0.6; user-select: none; }
</style>"#;
