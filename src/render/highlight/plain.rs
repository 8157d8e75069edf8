//! Plain highlighter: escapes the code and nothing else.

use super::Highlighter;
use crate::error::Result;

pub struct PlainHighlighter;

impl PlainHighlighter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for PlainHighlighter {
    fn highlight(&self, code: &str, _language: Option<&str>) -> Result<String> {
        Ok(escape_html(code))
    }

    fn head_content(&self) -> Option<String> {
        None
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escapes_without_markup() {
        let highlighter = PlainHighlighter::new();
        let html = highlighter.highlight("if a < b { }", Some("rust")).unwrap();
        assert_eq!(html, "if a &lt; b { }");
        assert!(!html.contains("<span"));
    }
}
