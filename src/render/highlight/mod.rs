//! Syntax highlighting backends for fenced code blocks, plus the
//! copy-to-clipboard affordance rendered code blocks expose.

mod classed;
mod plain;
#[cfg(feature = "syntect-backend")]
mod syntect;

pub use classed::ClassedHighlighter;
pub use plain::PlainHighlighter;
#[cfg(feature = "syntect-backend")]
pub use syntect::SyntectHighlighter;

use std::time::{Duration, Instant};

use crate::error::Result;

/// How long the copied indicator stays visible after a successful copy.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

/// Highlighting backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightBackend {
    /// Token spans with CSS classes, colored by a stylesheet.
    #[default]
    Classed,
    /// Escaped code with no token markup.
    Plain,
    /// Themed highlighting with inline colors via syntect.
    #[cfg(feature = "syntect-backend")]
    Syntect,
}

/// Trait for code highlighters.
pub trait Highlighter {
    /// Render a code block body to HTML. The output goes inside a
    /// `<pre><code>` element, so it must be escaped.
    fn highlight(&self, code: &str, language: Option<&str>) -> Result<String>;

    /// Get any required HTML head content (styles).
    fn head_content(&self) -> Option<String>;
}

/// Create a highlighter for the given backend.
pub fn create_highlighter(backend: HighlightBackend) -> Box<dyn Highlighter> {
    match backend {
        HighlightBackend::Classed => Box::new(ClassedHighlighter::new()),
        HighlightBackend::Plain => Box::new(PlainHighlighter::new()),
        #[cfg(feature = "syntect-backend")]
        HighlightBackend::Syntect => Box::new(SyntectHighlighter::new()),
    }
}

/// Destination for the copy button on a code block.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> std::io::Result<()>;
}

/// State of the copy button on a single code block.
///
/// A successful copy shows a confirmation indicator that expires after
/// [`COPY_FEEDBACK_DURATION`]. A failed copy is logged and leaves the
/// indicator untouched.
#[derive(Debug, Default)]
pub struct CopyState {
    copied_at: Option<Instant>,
}

impl CopyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `text` to the clipboard, returning whether the write succeeded.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, text: &str, now: Instant) -> bool {
        match clipboard.write_text(text) {
            Ok(()) => {
                self.copied_at = Some(now);
                true
            }
            Err(err) => {
                log::error!("failed to copy text: {err}");
                false
            }
        }
    }

    /// Whether the copied indicator should currently be shown.
    pub fn show_copied(&self, now: Instant) -> bool {
        match self.copied_at {
            Some(at) => now.saturating_duration_since(at) < COPY_FEEDBACK_DURATION,
            None => false,
        }
    }
}
