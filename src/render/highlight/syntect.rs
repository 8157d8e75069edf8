//! Themed highlighter backed by syntect's bundled grammars.

use super::Highlighter;
use crate::error::{RenderError, Result};

use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

const THEME: &str = "base16-ocean.dark";

/// Highlighter producing HTML with inline colors from a fixed theme.
pub struct SyntectHighlighter {
    syntaxes: SyntaxSet,
    themes: ThemeSet,
}

impl SyntectHighlighter {
    pub fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            themes: ThemeSet::load_defaults(),
        }
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for SyntectHighlighter {
    fn highlight(&self, code: &str, language: Option<&str>) -> Result<String> {
        let syntax = language
            .and_then(|lang| self.syntaxes.find_syntax_by_token(lang))
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());

        let theme = self
            .themes
            .themes
            .get(THEME)
            .ok_or_else(|| RenderError::Highlight(format!("missing theme {THEME}")))?;

        highlighted_html_for_string(code, &self.syntaxes, syntax, theme)
            .map_err(|err| RenderError::Highlight(err.to_string()).into())
    }

    fn head_content(&self) -> Option<String> {
        None
    }
}
