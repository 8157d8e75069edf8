//! HTML renderer for annotated documents.

use crate::ast::{Alignment, AnnotatedDocument, Block, FootnoteNode, Inline};
use crate::error::Result;
use crate::footnotes::FootnoteRegistry;
use crate::nav::{definition_anchor, reference_anchor};
use crate::render::highlight::{create_highlighter, HighlightBackend, Highlighter};

/// Configuration for HTML rendering.
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Syntax highlighting backend.
    pub highlight_backend: HighlightBackend,
    /// Whether to generate a complete HTML document or just the body content.
    pub standalone: bool,
    /// Document title (for standalone mode).
    pub title: Option<String>,
    /// Additional CSS to include.
    pub custom_css: Option<String>,
    /// CSS class prefix for styling.
    pub class_prefix: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            highlight_backend: HighlightBackend::default(),
            standalone: false,
            title: None,
            custom_css: None,
            class_prefix: "lf".to_string(),
        }
    }
}

/// Render an annotated document to HTML.
///
/// Footnote numbering starts fresh on every call: the registry lives
/// for exactly one pass, so re-rendering a document always produces
/// the same numbers.
pub fn render_html(doc: &AnnotatedDocument, config: &HtmlConfig) -> Result<String> {
    let mut renderer = HtmlRenderer::new(doc, config);
    renderer.render()
}

struct HtmlRenderer<'a> {
    doc: &'a AnnotatedDocument,
    config: &'a HtmlConfig,
    highlighter: Box<dyn Highlighter>,
    registry: FootnoteRegistry,
    output: String,
}

impl<'a> HtmlRenderer<'a> {
    fn new(doc: &'a AnnotatedDocument, config: &'a HtmlConfig) -> Self {
        Self {
            doc,
            config,
            highlighter: create_highlighter(config.highlight_backend),
            registry: FootnoteRegistry::new(),
            output: String::new(),
        }
    }

    fn render(&mut self) -> Result<String> {
        if self.config.standalone {
            self.render_standalone()
        } else {
            self.render_body()
        }
    }

    fn render_standalone(&mut self) -> Result<String> {
        let title = self
            .config
            .title
            .clone()
            .or_else(|| self.doc.document.metadata.title.clone())
            .unwrap_or_else(|| "Document".to_string());

        self.output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        self.output.push_str("<meta charset=\"UTF-8\">\n");
        self.output.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        self.output.push_str(&format!("<title>{}</title>\n", escape_html(&title)));

        if let Some(head) = self.highlighter.head_content() {
            self.output.push_str(&head);
            self.output.push('\n');
        }

        self.output.push_str(&self.default_styles());

        if let Some(ref css) = self.config.custom_css {
            self.output.push_str("<style>\n");
            self.output.push_str(css);
            self.output.push_str("\n</style>\n");
        }

        self.output.push_str("</head>\n<body>\n");
        self.output.push_str(&format!(
            "<article class=\"{}document\">\n",
            self.config.class_prefix
        ));

        self.render_body_content()?;

        self.output.push_str("</article>\n");
        self.output.push_str("</body>\n</html>");

        Ok(std::mem::take(&mut self.output))
    }

    fn render_body(&mut self) -> Result<String> {
        self.render_body_content()?;
        Ok(std::mem::take(&mut self.output))
    }

    fn render_body_content(&mut self) -> Result<()> {
        for block in &self.doc.document.blocks {
            self.render_block(block)?;
        }

        // Nothing was registered, nothing to list.
        if !self.registry.is_empty() {
            self.render_footnotes_section()?;
        }

        Ok(())
    }

    fn render_block(&mut self, block: &Block) -> Result<()> {
        match block {
            Block::Paragraph(inlines) => {
                if let [Inline::Image { url, alt, title }] = inlines.as_slice() {
                    self.render_figure(url, alt, title.as_deref())?;
                } else {
                    self.output.push_str("<p>");
                    self.render_inlines(inlines)?;
                    self.output.push_str("</p>\n");
                }
            }
            Block::Heading { level, content } => {
                let tag = format!("h{}", level);
                let slug = slugify(&inline_text(content));

                self.output.push('<');
                self.output.push_str(&tag);
                if !slug.is_empty() {
                    self.output.push_str(&format!(r#" id="{}""#, slug));
                }
                self.output.push('>');

                // Invisible self-link so headings are addressable by hover
                if !slug.is_empty() {
                    self.output.push_str(&format!(
                        "<a href=\"#{}\" class=\"{}anchor\" aria-hidden=\"true\"></a>",
                        slug, self.config.class_prefix
                    ));
                }

                self.render_inlines(content)?;

                self.output.push_str("</");
                self.output.push_str(&tag);
                self.output.push_str(">\n");
            }
            Block::CodeBlock { language, content } => {
                self.render_code_block(language.as_deref(), content)?;
            }
            Block::ThematicBreak => {
                self.output.push_str("<hr>\n");
            }
            Block::BlockQuote(blocks) => {
                match callout_class(blocks) {
                    Some(kind) => self.output.push_str(&format!(
                        "<blockquote class=\"{}{}\">\n",
                        self.config.class_prefix, kind
                    )),
                    None => self.output.push_str("<blockquote>\n"),
                }
                for block in blocks {
                    self.render_block(block)?;
                }
                self.output.push_str("</blockquote>\n");
            }
            Block::List { ordered, start, items } => {
                if *ordered {
                    self.output.push_str("<ol");
                    if let Some(start) = start {
                        if *start != 1 {
                            self.output.push_str(&format!(r#" start="{}""#, start));
                        }
                    }
                    self.output.push_str(">\n");
                } else {
                    self.output.push_str("<ul>\n");
                }

                for item in items {
                    self.output.push_str("<li>");
                    if let Some(checked) = item.checked {
                        let checkbox = if checked {
                            r#"<input type="checkbox" checked disabled> "#
                        } else {
                            r#"<input type="checkbox" disabled> "#
                        };
                        self.output.push_str(checkbox);
                    }
                    for block in &item.content {
                        // Inline single paragraphs in list items
                        if item.content.len() == 1 {
                            if let Block::Paragraph(inlines) = block {
                                self.render_inlines(inlines)?;
                                continue;
                            }
                        }
                        self.render_block(block)?;
                    }
                    self.output.push_str("</li>\n");
                }

                if *ordered {
                    self.output.push_str("</ol>\n");
                } else {
                    self.output.push_str("</ul>\n");
                }
            }
            Block::Table { headers, alignments, rows } => {
                self.render_table(headers, alignments, rows)?;
            }
            Block::RawHtml(html) => {
                self.output.push_str(html);
                self.output.push('\n');
            }
        }

        Ok(())
    }

    fn render_code_block(&mut self, language: Option<&str>, content: &str) -> Result<()> {
        self.output.push_str(&format!(
            "<div class=\"{}code-block\">\n",
            self.config.class_prefix
        ));
        if let Some(lang) = language {
            self.output.push_str(&format!(
                "<span class=\"{}code-language\">{}</span>\n",
                self.config.class_prefix,
                escape_html(lang)
            ));
        }

        self.output.push_str("<pre><code");
        if let Some(lang) = language {
            self.output.push_str(&format!(r#" class="language-{}""#, escape_html(lang)));
        }
        self.output.push('>');

        match self.highlighter.highlight(content, language) {
            Ok(html) => self.output.push_str(&html),
            Err(err) => {
                log::warn!("highlighting failed: {err}; emitting plain code");
                self.output.push_str(&escape_html(content));
            }
        }

        self.output.push_str("</code></pre>\n</div>\n");

        Ok(())
    }

    fn render_figure(&mut self, url: &str, alt: &str, title: Option<&str>) -> Result<()> {
        self.output.push_str(&format!(
            "<figure class=\"{}figure\">\n",
            self.config.class_prefix
        ));
        self.output.push_str(&format!(
            r#"<img src="{}" alt="{}""#,
            escape_html(url),
            escape_html(alt)
        ));
        if let Some(title) = title {
            self.output
                .push_str(&format!(r#" title="{}""#, escape_html(title)));
        }
        self.output.push_str(">\n");
        if !alt.is_empty() {
            self.output
                .push_str(&format!("<figcaption>{}</figcaption>\n", escape_html(alt)));
        }
        self.output.push_str("</figure>\n");
        Ok(())
    }

    fn render_table(
        &mut self,
        headers: &[Vec<Inline>],
        alignments: &[Alignment],
        rows: &[Vec<Vec<Inline>>],
    ) -> Result<()> {
        self.output.push_str(&format!(
            "<table class=\"{}table\">\n",
            self.config.class_prefix
        ));

        self.output.push_str("<thead>\n<tr>\n");
        for (i, cell) in headers.iter().enumerate() {
            let align = alignments.get(i).copied().unwrap_or_default();
            let style = alignment_style(align);
            self.output.push_str(&format!("<th{}>", style));
            self.render_inlines(cell)?;
            self.output.push_str("</th>\n");
        }
        self.output.push_str("</tr>\n</thead>\n");

        self.output.push_str("<tbody>\n");
        for row in rows {
            self.output.push_str("<tr>\n");
            for (i, cell) in row.iter().enumerate() {
                let align = alignments.get(i).copied().unwrap_or_default();
                let style = alignment_style(align);
                self.output.push_str(&format!("<td{}>", style));
                self.render_inlines(cell)?;
                self.output.push_str("</td>\n");
            }
            self.output.push_str("</tr>\n");
        }
        self.output.push_str("</tbody>\n");

        self.output.push_str("</table>\n");

        Ok(())
    }

    fn render_inlines(&mut self, inlines: &[Inline]) -> Result<()> {
        for inline in inlines {
            self.render_inline(inline)?;
        }
        Ok(())
    }

    fn render_inline(&mut self, inline: &Inline) -> Result<()> {
        match inline {
            Inline::Text(text) => {
                self.output.push_str(&escape_html(text));
            }
            Inline::Emphasis(inlines) => {
                self.output.push_str("<em>");
                self.render_inlines(inlines)?;
                self.output.push_str("</em>");
            }
            Inline::Strong(inlines) => {
                self.output.push_str("<strong>");
                self.render_inlines(inlines)?;
                self.output.push_str("</strong>");
            }
            Inline::Strikethrough(inlines) => {
                self.output.push_str("<del>");
                self.render_inlines(inlines)?;
                self.output.push_str("</del>");
            }
            Inline::Code(code) => {
                self.output.push_str("<code>");
                self.output.push_str(&escape_html(code));
                self.output.push_str("</code>");
            }
            Inline::Link { url, title, content } => {
                self.output.push_str(&format!(r#"<a href="{}""#, escape_html(url)));
                if let Some(title) = title {
                    self.output.push_str(&format!(r#" title="{}""#, escape_html(title)));
                }
                if is_external_url(url) {
                    self.output.push_str(r#" target="_blank" rel="noopener noreferrer""#);
                }
                self.output.push('>');
                self.render_inlines(content)?;
                self.output.push_str("</a>");
            }
            Inline::Image { url, alt, title } => {
                self.output.push_str(&format!(
                    r#"<img src="{}" alt="{}""#,
                    escape_html(url),
                    escape_html(alt)
                ));
                if let Some(title) = title {
                    self.output.push_str(&format!(r#" title="{}""#, escape_html(title)));
                }
                self.output.push('>');
            }
            Inline::FootnoteMark { raw, .. } => {
                // Un-annotated markers print as their source text.
                self.output.push_str(&escape_html(raw));
            }
            Inline::Footnote(node) => {
                self.render_footnote(node)?;
            }
            Inline::SoftBreak => {
                self.output.push('\n');
            }
            Inline::HardBreak => {
                self.output.push_str("<br>\n");
            }
            Inline::RawHtml(html) => {
                self.output.push_str(html);
            }
        }

        Ok(())
    }

    fn render_footnote(&mut self, node: &FootnoteNode) -> Result<()> {
        match node {
            FootnoteNode::Bound { id, content } => {
                let number = self.registry.register(id, content.clone());
                self.output.push_str(&format!(
                    "<sup id=\"{}\" class=\"{}footnote-ref\"><a href=\"#{}\" aria-label=\"Go to footnote {}\">[{}]</a></sup>",
                    reference_anchor(id),
                    self.config.class_prefix,
                    definition_anchor(id),
                    number,
                    number
                ));
            }
            FootnoteNode::Repeat { id } => match self.registry.lookup(id) {
                // Repeats reuse the number but only the first occurrence
                // carries the back-link target id.
                Some(number) => {
                    self.output.push_str(&format!(
                        "<sup class=\"{}footnote-ref\"><a href=\"#{}\" aria-label=\"Go to footnote {}\">[{}]</a></sup>",
                        self.config.class_prefix,
                        definition_anchor(id),
                        number,
                        number
                    ));
                }
                None => {
                    log::warn!("repeated footnote {id} was never bound; dropping the reference");
                }
            },
            FootnoteNode::Literal(raw) => {
                self.output.push_str(&escape_html(raw));
            }
        }

        Ok(())
    }

    fn render_footnotes_section(&mut self) -> Result<()> {
        let entries = self.registry.entries().to_vec();

        self.output.push_str(&format!(
            "<section class=\"{}footnotes\">\n",
            self.config.class_prefix
        ));
        self.output.push_str("<hr>\n");
        self.output.push_str(&format!(
            "<h2 class=\"{}footnotes-title\">Footnotes</h2>\n",
            self.config.class_prefix
        ));

        for entry in &entries {
            self.output.push_str(&format!(
                "<div class=\"{}footnote\" id=\"{}\">\n",
                self.config.class_prefix,
                definition_anchor(&entry.id)
            ));
            self.output.push_str(&format!(
                "<a class=\"{}footnote-back\" href=\"#{}\" aria-label=\"Back to reference {}\">[{}]</a> ",
                self.config.class_prefix,
                reference_anchor(&entry.id),
                entry.number,
                entry.number
            ));
            self.render_inlines(&entry.content)?;
            self.output.push_str("\n</div>\n");
        }

        self.output.push_str("</section>\n");

        Ok(())
    }

    fn default_styles(&self) -> String {
        format!(
            r#"<style>
.{p}document {{ max-width: 720px; margin: 0 auto; padding: 2em; font-family: Georgia, serif; line-height: 1.6; }}
.{p}anchor {{ text-decoration: none; }}
h1:hover .{p}anchor::after, h2:hover .{p}anchor::after, h3:hover .{p}anchor::after {{ content: '#'; color: #bbb; margin-right: 0.3em; }}
.{p}note {{ border-left: 3px solid #0969da; padding: 0.5em 1em; background: #f6f8fa; }}
.{p}warning {{ border-left: 3px solid #d1242f; padding: 0.5em 1em; background: #fff8f8; }}
.{p}tip {{ border-left: 3px solid #1a7f37; padding: 0.5em 1em; background: #f6fff8; }}
.{p}figure {{ margin: 2em 0; text-align: center; }}
.{p}figure img {{ max-width: 100%; }}
.{p}figure figcaption {{ color: #666; font-size: 0.9em; }}
.{p}table {{ border-collapse: collapse; margin: 1em auto; }}
.{p}table th, .{p}table td {{ border: 1px solid #ddd; padding: 0.5em 1em; }}
.{p}table th {{ background: #f0f0f0; }}
.{p}code-block {{ margin: 1.5em 0; position: relative; }}
.{p}code-block pre {{ background: #f8f8f8; padding: 1em; overflow-x: auto; border-radius: 4px; }}
.{p}code-language {{ position: absolute; top: 0.4em; right: 0.6em; color: #888; font-size: 0.75em; text-transform: uppercase; }}
.{p}footnotes {{ margin-top: 3em; font-size: 0.9em; color: #666; }}
.{p}footnotes-title {{ font-size: 1em; }}
.{p}footnote {{ margin: 0.5em 0; }}
.{p}footnote:target {{ background: #fff8c5; }}
.{p}footnote-ref {{ font-size: 0.8em; }}
.{p}footnote-ref a {{ color: #0066cc; text-decoration: none; }}
.{p}footnote-back {{ color: #0066cc; text-decoration: none; }}
</style>
"#,
            p = self.config.class_prefix
        )
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn alignment_style(align: Alignment) -> &'static str {
    match align {
        Alignment::Left => "",
        Alignment::Center => r#" style="text-align: center""#,
        Alignment::Right => r#" style="text-align: right""#,
    }
}

/// Links to other pages or fragments stay in the tab; everything else
/// opens in a new one.
fn is_external_url(url: &str) -> bool {
    !(url.starts_with('/') || url.starts_with('#'))
}

/// Blockquotes opening with a bold Note, Warning or Tip label become
/// styled callouts.
fn callout_class(blocks: &[Block]) -> Option<&'static str> {
    if let Some(Block::Paragraph(inlines)) = blocks.first() {
        if let Some(Inline::Strong(inner)) = inlines.first() {
            if let Some(Inline::Text(text)) = inner.first() {
                return match text.trim().trim_end_matches(':').to_lowercase().as_str() {
                    "note" => Some("note"),
                    "warning" => Some("warning"),
                    "tip" => Some("tip"),
                    _ => None,
                };
            }
        }
    }
    None
}

/// Plain text of an inline run, for heading anchors.
fn inline_text(inlines: &[Inline]) -> String {
    let mut text = String::new();
    collect_text(inlines, &mut text);
    text
}

fn collect_text(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Text(text) | Inline::Code(text) => out.push_str(text),
            Inline::Emphasis(inner) | Inline::Strong(inner) | Inline::Strikethrough(inner) => {
                collect_text(inner, out)
            }
            Inline::Link { content, .. } => collect_text(content, out),
            _ => {}
        }
    }
}

/// Turn heading text into a URL-safe anchor id.
fn slugify(text: &str) -> String {
    let mut slug = String::new();
    for c in text.trim().to_lowercase().chars() {
        match c {
            '&' => slug.push_str("-and-"),
            c if c.is_alphanumeric() => slug.push(c),
            c if c.is_whitespace() => slug.push('-'),
            '-' | '_' => slug.push('-'),
            _ => {}
        }
    }

    let mut out = String::with_capacity(slug.len());
    for c in slug.chars() {
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }
    out.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Definitions, Document, Metadata};
    use crate::footnotes::{annotate, FootnoteConfig};
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    fn render_str(input: &str) -> String {
        let config = FootnoteConfig::default();
        let doc = parse(input, &config).unwrap();
        let annotated = annotate(doc, &config).unwrap();
        render_html(&annotated, &HtmlConfig::default()).unwrap()
    }

    #[test]
    fn test_render_simple() {
        let html = render_str("# Hello\n\nThis is a paragraph.");
        assert!(html.contains("<h1"));
        assert!(html.contains("Hello"));
        assert!(html.contains("<p>This is a paragraph.</p>"));
    }

    #[test]
    fn test_footnote_reference_markup() {
        let html = render_str("Some claim.^[1] Another.^[2]\n\n^[1] first\n^[2] second");

        assert!(html.contains(
            "<sup id=\"fn-ref-1\" class=\"lffootnote-ref\"><a href=\"#fn-1\" aria-label=\"Go to footnote 1\">[1]</a></sup>"
        ));
        assert!(html.contains("aria-label=\"Go to footnote 2\">[2]</a>"));
    }

    #[test]
    fn test_footnote_section_lists_definitions_in_order() {
        let html = render_str("A.^[2] B.^[1]\n\n^[1] one\n^[2] two");

        assert!(html.contains("<section class=\"lffootnotes\">"));
        assert!(html.contains("<h2 class=\"lffootnotes-title\">Footnotes</h2>"));

        // First-use order: id 2 gets number 1.
        let first = html.find("id=\"fn-2\"").unwrap();
        let second = html.find("id=\"fn-1\"").unwrap();
        assert!(first < second);
        assert!(html.contains(
            "<a class=\"lffootnote-back\" href=\"#fn-ref-2\" aria-label=\"Back to reference 1\">[1]</a> two"
        ));
    }

    #[test]
    fn test_repeated_marker_reuses_number_without_anchor_id() {
        let html = render_str("One.^[1] Again.^[1]\n\n^[1] shared");

        assert_eq!(html.matches("id=\"fn-ref-1\"").count(), 1);
        assert_eq!(html.matches("aria-label=\"Go to footnote 1\"").count(), 2);
    }

    #[test]
    fn test_no_footnotes_no_section() {
        let html = render_str("Just a paragraph.");
        assert!(!html.contains("<section"));
        assert!(!html.contains("<hr>"));
    }

    #[test]
    fn test_unmatched_marker_stays_literal() {
        let html = render_str("Stray.^[7]");
        assert!(html.contains("Stray.^[7]"));
        assert!(!html.contains("<sup"));
        assert!(!html.contains("<section"));
    }

    #[test]
    fn test_repeat_without_registration_renders_nothing() {
        // A Repeat node with no registered number only arises from a
        // hand-built tree; the renderer drops the marker and keeps the text.
        let document = Document {
            metadata: Metadata::default(),
            blocks: vec![Block::Paragraph(vec![
                Inline::Text("Before ".to_string()),
                Inline::Footnote(FootnoteNode::Repeat { id: "9".to_string() }),
                Inline::Text(" after.".to_string()),
            ])],
            definitions: Definitions::new(),
        };
        let annotated = AnnotatedDocument {
            document,
            referenced: Vec::new(),
        };
        let html = render_html(&annotated, &HtmlConfig::default()).unwrap();

        assert!(html.contains("Before  after."));
        assert!(!html.contains("<sup"));
        assert!(!html.contains("<section"));
    }

    #[test]
    fn test_heading_gets_slug_anchor() {
        let html = render_str("## Hello & Goodbye World");
        assert!(html.contains("<h2 id=\"hello-and-goodbye-world\">"));
        assert!(html.contains(
            "<a href=\"#hello-and-goodbye-world\" class=\"lfanchor\" aria-hidden=\"true\"></a>"
        ));
    }

    #[test]
    fn test_link_targets() {
        let html = render_str("[guide](/guide) and [site](https://example.com)");
        assert!(html.contains("<a href=\"/guide\">guide</a>"));
        assert!(html.contains(
            "<a href=\"https://example.com\" target=\"_blank\" rel=\"noopener noreferrer\">site</a>"
        ));
    }

    #[test]
    fn test_standalone_image_becomes_figure() {
        let html = render_str("![Quarterly totals](chart.png \"2024\")");
        assert!(html.contains("<figure class=\"lffigure\">"));
        assert!(html.contains(r#"<img src="chart.png" alt="Quarterly totals" title="2024">"#));
        assert!(html.contains("<figcaption>Quarterly totals</figcaption>"));
    }

    #[test]
    fn test_figure_without_alt_has_no_caption() {
        let html = render_str("![](chart.png)");
        assert!(html.contains("<figure"));
        assert!(!html.contains("<figcaption>"));
    }

    #[test]
    fn test_code_block_language_label() {
        let html = render_str("```rust\nfn main() {}\n```");
        assert!(html.contains("<span class=\"lfcode-language\">rust</span>"));
        assert!(html.contains("class=\"language-rust\""));
        assert!(html.contains("<span class=\"hl-keyword\">fn</span>"));
    }

    #[test]
    fn test_callout_blockquote() {
        let html = render_str("> **Note:** Stay hydrated.");
        assert!(html.contains("<blockquote class=\"lfnote\">"));
    }

    #[test]
    fn test_render_standalone() {
        let config = FootnoteConfig::default();
        let doc = parse("# Test", &config).unwrap();
        let annotated = annotate(doc, &config).unwrap();
        let html_config = HtmlConfig {
            standalone: true,
            title: Some("Test Doc".to_string()),
            ..Default::default()
        };
        let html = render_html(&annotated, &html_config).unwrap();

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("<title>Test Doc</title>"));
        assert!(html.contains(".hl-keyword"));
        assert!(html.contains("<article class=\"lfdocument\">"));
    }

    #[test]
    fn test_standalone_styles_are_complete() {
        let config = FootnoteConfig::default();
        let doc = parse("# Test", &config).unwrap();
        let annotated = annotate(doc, &config).unwrap();
        let html_config = HtmlConfig {
            standalone: true,
            ..Default::default()
        };
        let html = render_html(&annotated, &html_config).unwrap();

        // The heading-anchor hover rule sits mid-sheet; everything after it
        // must still be present, down to the closing tag.
        assert!(html.contains("content: '#'"));
        assert!(html.contains(".lffootnote-back"));
        assert!(html.contains("</style>"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Spaced  Out  "), "spaced-out");
        assert_eq!(slugify("Ends & Means"), "ends-and-means");
        assert_eq!(slugify("C'est l'été!"), "cest-lété");
    }
}
