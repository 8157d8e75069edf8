//! Abstract Syntax Tree definitions for the long-form Markdown language.

use std::collections::HashMap;

/// A complete parsed document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Front matter metadata
    pub metadata: Metadata,
    /// Document content as a sequence of blocks
    pub blocks: Vec<Block>,
    /// Footnote definitions extracted from the body, in textual order
    pub definitions: Definitions,
}

/// Document metadata from TOML front matter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,
    /// Document author(s)
    pub authors: Vec<String>,
    /// Publication date
    pub date: Option<String>,
    /// Short summary shown in listings
    pub summary: Option<String>,
    /// Cover image path
    pub image: Option<String>,
}

/// Block-level elements.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A paragraph of inline content
    Paragraph(Vec<Inline>),

    /// A heading with level (1-6) and content
    Heading { level: u8, content: Vec<Inline> },

    /// A fenced code block
    CodeBlock {
        language: Option<String>,
        content: String,
    },

    /// A block quote
    BlockQuote(Vec<Block>),

    /// An ordered or unordered list
    List {
        ordered: bool,
        start: Option<u32>,
        items: Vec<ListItem>,
    },

    /// A thematic break (horizontal rule)
    ThematicBreak,

    /// Raw HTML passthrough
    RawHtml(String),

    /// A table
    Table {
        headers: Vec<Vec<Inline>>,
        alignments: Vec<Alignment>,
        rows: Vec<Vec<Vec<Inline>>>,
    },
}

/// List item containing blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub content: Vec<Block>,
    pub checked: Option<bool>,
}

/// Table column alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Inline-level elements.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    /// Plain text
    Text(String),

    /// Emphasized text (italic)
    Emphasis(Vec<Inline>),

    /// Strong text (bold)
    Strong(Vec<Inline>),

    /// Strikethrough text
    Strikethrough(Vec<Inline>),

    /// Inline code
    Code(String),

    /// A link
    Link {
        url: String,
        title: Option<String>,
        content: Vec<Inline>,
    },

    /// An image
    Image {
        url: String,
        alt: String,
        title: Option<String>,
    },

    /// A footnote marker as parsed, before annotation
    FootnoteMark {
        /// Digit identifier between the brackets
        id: String,
        /// Exact source text, kept for literal fallback
        raw: String,
    },

    /// An annotated footnote reference
    Footnote(FootnoteNode),

    /// A soft line break
    SoftBreak,

    /// A hard line break
    HardBreak,

    /// Raw HTML inline
    RawHtml(String),
}

/// An annotated footnote reference.
///
/// Of all markers sharing an id, exactly one is `Bound` per annotation
/// pass: the textually first. Later markers become `Repeat` and markers
/// with no matching definition become `Literal`.
#[derive(Debug, Clone, PartialEq)]
pub enum FootnoteNode {
    /// First occurrence of an id; carries the definition content
    Bound { id: String, content: Vec<Inline> },
    /// Later occurrence of an already-bound id
    Repeat { id: String },
    /// Marker with no matching definition, rendered as its source text
    Literal(String),
}

/// A footnote definition stripped from the document body.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    /// Digit identifier from the definition line
    pub id: String,
    /// Raw content, trimmed, not yet parsed as inlines
    pub content: String,
}

/// Footnote definitions keyed by id, in textual order.
///
/// A duplicate id overwrites the earlier content but keeps the earlier
/// list position, so iteration order stays the order of first sighting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Definitions {
    items: Vec<Definition>,
    index: HashMap<String, usize>,
}

impl Definitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition. The last content for an id wins.
    pub fn insert(&mut self, id: &str, content: String) {
        match self.index.get(id) {
            Some(&slot) => self.items[slot].content = content,
            None => {
                self.index.insert(id.to_string(), self.items.len());
                self.items.push(Definition {
                    id: id.to_string(),
                    content,
                });
            }
        }
    }

    /// Look up the content for an id.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.index
            .get(id)
            .map(|&slot| self.items[slot].content.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A document whose footnote markers have been annotated.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedDocument {
    pub document: Document,
    /// Ids bound during the pass, in textual order of first occurrence
    pub referenced: Vec<String>,
}
