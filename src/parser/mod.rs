//! Parser for long-form Markdown with footnote markers.

mod block;
mod inline;
pub(crate) mod lexer;

pub use block::parse_blocks;
pub use inline::parse_inlines;

use crate::ast::{Document, Metadata};
use crate::error::{ParseError, Result};
use crate::footnotes::{extract, FootnoteConfig};
use serde::Deserialize;

/// Parse a complete document from source text.
///
/// Footnote definition lines are stripped from the body before block
/// parsing; the cleaned body and the collected definitions travel
/// together in the returned [`Document`].
pub fn parse(input: &str, config: &FootnoteConfig) -> Result<Document> {
    let (metadata, content) = parse_front_matter(input)?;
    let (content, definitions) = extract(content, config);
    let blocks = parse_blocks(&content, config.dialect)?;

    Ok(Document {
        metadata,
        blocks,
        definitions,
    })
}

/// Parse TOML front matter delimited by `+++`.
fn parse_front_matter(input: &str) -> Result<(Metadata, &str)> {
    let trimmed = input.trim_start();

    if !trimmed.starts_with("+++") {
        return Ok((Metadata::default(), input));
    }

    let after_open = &trimmed[3..];
    let close_pos = after_open
        .find("\n+++")
        .ok_or_else(|| ParseError::FrontMatter("Unclosed front matter (missing closing +++)".into()))?;

    let front_matter_str = &after_open[..close_pos];
    let content_start = 3 + close_pos + 4; // "+++" + content + "\n+++"
    let content = trimmed[content_start..].trim_start_matches('\n');

    let raw: RawFrontMatter = toml::from_str(front_matter_str)
        .map_err(|e| ParseError::FrontMatter(format!("Invalid TOML: {}", e)))?;

    Ok((convert_front_matter(raw), content))
}

/// Raw front matter structure for deserialization.
#[derive(Debug, Deserialize, Default)]
struct RawFrontMatter {
    title: Option<String>,
    #[serde(default)]
    authors: Vec<String>,
    author: Option<String>,
    date: Option<String>,
    summary: Option<String>,
    image: Option<String>,
}

/// Convert raw front matter to metadata.
fn convert_front_matter(raw: RawFrontMatter) -> Metadata {
    let mut authors = raw.authors;
    if let Some(author) = raw.author {
        if authors.is_empty() {
            authors.push(author);
        }
    }

    Metadata {
        title: raw.title,
        authors,
        date: raw.date,
        summary: raw.summary,
        image: raw.image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Block;

    #[test]
    fn test_no_front_matter() {
        let input = "# Hello\n\nSome text.";
        let (meta, content) = parse_front_matter(input).unwrap();
        assert_eq!(meta, Metadata::default());
        assert_eq!(content, input);
    }

    #[test]
    fn test_with_front_matter() {
        let input = r#"+++
title = "Thoughts on Tooling"
author = "Jane Doe"
date = "2024-03-01"
summary = "Why the boring tool wins."
+++

# Hello

Some text."#;

        let (meta, content) = parse_front_matter(input).unwrap();
        assert_eq!(meta.title, Some("Thoughts on Tooling".to_string()));
        assert_eq!(meta.authors, vec!["Jane Doe".to_string()]);
        assert_eq!(meta.date, Some("2024-03-01".to_string()));
        assert_eq!(meta.summary, Some("Why the boring tool wins.".to_string()));
        assert!(content.starts_with("# Hello"));
    }

    #[test]
    fn test_authors_list_wins_over_author() {
        let input = "+++\nauthors = [\"A\", \"B\"]\nauthor = \"C\"\n+++\nbody";
        let (meta, _) = parse_front_matter(input).unwrap();
        assert_eq!(meta.authors, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_unclosed_front_matter() {
        let input = "+++\ntitle = \"Oops\"\n\nbody";
        assert!(parse_front_matter(input).is_err());
    }

    #[test]
    fn test_parse_collects_definitions() {
        let input = "Body^[1] text.\n\n^[1] A note.";
        let doc = parse(input, &FootnoteConfig::default()).unwrap();
        assert_eq!(doc.definitions.get("1"), Some("A note."));
        // The definition line is gone from the block structure.
        assert_eq!(doc.blocks.len(), 1);
        assert!(matches!(doc.blocks[0], Block::Paragraph(_)));
    }
}
