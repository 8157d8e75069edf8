//! Footnote pipeline: definition extraction, marker annotation, and
//! render-time numbering.
//!
//! Processing happens in three stages:
//!
//! 1. [`extract`] strips definition lines from the raw body and collects
//!    them into [`crate::ast::Definitions`] (runs inside
//!    [`crate::parser::parse`], between front matter and block parsing);
//! 2. [`annotate`] binds each inline marker to its definition, so that
//!    exactly one node per id carries the content;
//! 3. [`FootnoteRegistry`] assigns display numbers in order of first
//!    appearance while a renderer walks the annotated tree.
//!
//! Definitions that are never referenced survive stage 1 but are invisible
//! to stages 2 and 3: they never register and never render.

mod extract;
mod registry;
mod transform;

pub use extract::extract;
pub use registry::{FootnoteRegistry, RegisteredFootnote};
pub use transform::annotate;

/// Which marker syntax a document uses.
///
/// The two dialects are separate grammars that share no state. A document
/// is processed under exactly one of them; the other dialect's syntax is
/// ordinary text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerDialect {
    /// `^[3]` inline markers, `^[3] content` definition lines
    #[default]
    Caret,
    /// `[3]` inline markers, `[3] content` definition lines honored only
    /// for ids that also occur as inline markers
    Bracket,
}

/// Configuration for footnote processing.
#[derive(Debug, Clone, Default)]
pub struct FootnoteConfig {
    /// Marker syntax in effect for the whole document
    pub dialect: MarkerDialect,
}
