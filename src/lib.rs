//! # markdown-longform
//!
//! A Markdown parser and renderer for long-form writing: numbered
//! footnotes, annotated code blocks, callouts, and in-page navigation.
//!
//! ## Features
//!
//! - **Footnotes**: digit markers like `^[1]` in running text, defined on
//!   trailing `^[1] ...` lines, numbered by order of first use
//! - **Two marker dialects**: caret (`^[1]`) and bare bracket (`[1]`),
//!   selected by configuration
//! - **Syntax highlighting**: classed token spans colored by CSS, with an
//!   optional themed backend
//! - **Callouts**: blockquotes opening with **Note:**, **Warning:** or
//!   **Tip:** become styled asides
//! - **Figures**: a paragraph holding a single image renders as a
//!   `<figure>` with its alt text as the caption
//! - **Front matter**: TOML metadata between `+++` fences
//!
//! ## Quick Start
//!
//! ```rust
//! use markdown_longform::{parse, annotate, render_html, FootnoteConfig, HtmlConfig};
//!
//! let input = r#"
//! The cache is per-node.^[1] Invalidation is broadcast.^[2]
//!
//! ^[1] Sixty-four megabytes by default.
//! ^[2] Over the gossip channel.
//! "#;
//!
//! // Parse the document, stripping footnote definitions
//! let config = FootnoteConfig::default();
//! let doc = parse(input, &config).unwrap();
//!
//! // Bind markers to their definitions
//! let annotated = annotate(doc, &config).unwrap();
//!
//! // Render to HTML
//! let html = render_html(&annotated, &HtmlConfig::default()).unwrap();
//! assert!(html.contains("Footnotes"));
//! ```
//!
//! ## Syntax Reference
//!
//! ### Front Matter (TOML)
//!
//! ```text
//! +++
//! title = "My Post"
//! author = "Jane Doe"
//! date = "2024-06-01"
//! +++
//! ```
//!
//! ### Footnotes
//!
//! A marker is a digit id in brackets; a definition is a line of its own
//! starting with the same marker, followed by the footnote's content:
//!
//! ```text
//! Releases ship monthly.^[1] Hotfixes go out as needed.^[1]
//!
//! ^[1] Except December.
//! ```
//!
//! Definitions may sit anywhere in the document; they are stripped from
//! the body and listed at the end. Every marker for an id shows the same
//! number, and numbers count up from 1 in order of first use. A marker
//! with no definition is left in the text untouched.
//!
//! The bracket dialect drops the caret: `[1]` in text, `[1] ...` as the
//! definition line. In that dialect a bracketed number is read as a
//! footnote marker before it is read as a link, so `[1](https://...)`
//! keeps its footnote meaning.
//!
//! ### Callouts
//!
//! ```text
//! > **Note:** blockquotes opening with a bold label become callouts.
//! ```
//!
//! ## Configuration
//!
//! ### Highlight Backends
//!
//! - `Classed` (default): token spans with stable CSS classes
//! - `Plain`: escaped code, no markup
//! - `Syntect`: themed inline colors (requires the `syntect-backend` feature)
//!
//! ### HTML Output
//!
//! - Fragment mode (default): just the content, no `<html>` wrapper
//! - Standalone mode: complete HTML document with styles
//!
//! ## Features
//!
//! - `syntect-backend`: enable the syntect highlighting backend

pub mod ast;
pub mod error;
pub mod footnotes;
pub mod nav;
pub mod parser;
pub mod render;

// Convenience re-exports
pub use ast::{AnnotatedDocument, Block, Document, FootnoteNode, Inline};
pub use error::{Error, ParseError, RenderError, Result};
pub use footnotes::{annotate, FootnoteConfig, FootnoteRegistry, MarkerDialect};
pub use parser::parse;
pub use render::{render_html, HighlightBackend, HtmlConfig};

/// Parse, annotate, and render Markdown to HTML in one step.
///
/// This is a convenience function that combines `parse`, `annotate`, and
/// `render_html`.
///
/// # Example
///
/// ```rust
/// use markdown_longform::render;
///
/// let html = render("# Hello *world*", None, None).unwrap();
/// assert!(html.contains("<h1"));
/// ```
pub fn render(
    input: &str,
    footnote_config: Option<&FootnoteConfig>,
    html_config: Option<&HtmlConfig>,
) -> Result<String> {
    let default_config = FootnoteConfig::default();
    let config = footnote_config.unwrap_or(&default_config);

    let doc = parse(input, config)?;
    let annotated = annotate(doc, config)?;
    render_html(&annotated, html_config.unwrap_or(&HtmlConfig::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pipeline() {
        let input = r#"+++
title = "Release Notes"
author = "Dana Scully"
+++

# Schedule

Releases ship monthly.^[1] Hotfixes go out as needed.^[2] The cadence held all year.^[1]

^[1] Except December.
^[2] Within one business day.
"#;

        let html = render(input, None, None).unwrap();

        assert!(html.contains("<h1 id=\"schedule\">"));
        assert!(html.contains("aria-label=\"Go to footnote 1\">[1]</a>"));
        assert!(html.contains("aria-label=\"Go to footnote 2\">[2]</a>"));
        // First and repeated use of id 1 show the same number.
        assert_eq!(html.matches("aria-label=\"Go to footnote 1\"").count(), 2);
        assert!(html.contains("id=\"fn-1\""));
        assert!(html.contains("Except December."));
        assert!(html.contains("Within one business day."));
    }

    #[test]
    fn test_bracket_dialect() {
        let config = FootnoteConfig {
            dialect: MarkerDialect::Bracket,
        };
        let input = "Shipped in v2.[1]\n\n[1] Behind a feature flag.";
        let html = render(input, Some(&config), None).unwrap();

        assert!(html.contains("aria-label=\"Go to footnote 1\">[1]</a>"));
        assert!(html.contains("Behind a feature flag."));
    }

    #[test]
    fn test_numbers_follow_first_use() {
        let input = "B first.^[9] Then A.^[2]\n\n^[2] alpha\n^[9] beta";
        let html = render(input, None, None).unwrap();

        let first = html.find("aria-label=\"Go to footnote 1\"").unwrap();
        let second = html.find("aria-label=\"Go to footnote 2\"").unwrap();
        assert!(first < second);
        assert!(html.contains("id=\"fn-9\""));

        // The definition list follows the same order.
        let beta = html.find("beta").unwrap();
        let alpha = html.find("alpha").unwrap();
        assert!(beta < alpha);
    }

    #[test]
    fn test_no_markers_renders_clean() {
        let html = render("Plain prose only.", None, None).unwrap();
        assert_eq!(html, "<p>Plain prose only.</p>\n");
    }

    #[test]
    fn test_simple_markdown() {
        let input = "# Hello\n\n**Bold** and *italic* text.";
        let html = render(input, None, None).unwrap();

        assert!(html.contains("<h1"));
        assert!(html.contains("<strong>Bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn test_code_block() {
        let input = "```rust\nfn main() {}\n```";
        let html = render(input, None, None).unwrap();

        assert!(html.contains("<pre><code"));
        assert!(html.contains("language-rust"));
    }

    #[test]
    fn test_list() {
        let input = "- Item 1\n- Item 2\n- Item 3";
        let html = render(input, None, None).unwrap();

        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>"));
    }

    #[test]
    fn test_table() {
        let input = "| Name | Count |\n| ---- | ----- |\n| a    | 1     |";
        let html = render(input, None, None).unwrap();

        assert!(html.contains("<table"));
        assert!(html.contains("<th>"));
        assert!(html.contains("<td>"));
    }
}
