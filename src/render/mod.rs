//! Rendering layer for converting annotated documents to output formats.

pub mod highlight;
pub mod html;

pub use highlight::{create_highlighter, HighlightBackend, Highlighter};
pub use html::{render_html, HtmlConfig};
