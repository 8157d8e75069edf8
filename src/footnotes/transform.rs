//! Marker annotation: bind footnote markers to their definitions.

use std::collections::HashSet;

use crate::ast::{AnnotatedDocument, Block, Definitions, Document, FootnoteNode, Inline, ListItem};
use crate::error::Result;
use crate::footnotes::{FootnoteConfig, MarkerDialect};
use crate::parser::parse_inlines;

/// Annotate a parsed document, binding each marker to its definition.
///
/// The pass walks the tree in document order. The first marker for an id
/// with a definition becomes [`FootnoteNode::Bound`] and carries the
/// definition content; every later marker for that id becomes
/// [`FootnoteNode::Repeat`]. Markers with no definition stay literal.
/// Running the pass on an already annotated document is the identity.
pub fn annotate(document: Document, config: &FootnoteConfig) -> Result<AnnotatedDocument> {
    let Document {
        metadata,
        blocks,
        definitions,
    } = document;

    let mut state = BindState {
        definitions: &definitions,
        dialect: config.dialect,
        seen: HashSet::new(),
        referenced: Vec::new(),
    };

    let blocks = blocks
        .into_iter()
        .map(|block| annotate_block(block, &mut state))
        .collect::<Result<Vec<_>>>()?;
    let referenced = state.referenced;

    Ok(AnnotatedDocument {
        document: Document {
            metadata,
            blocks,
            definitions,
        },
        referenced,
    })
}

struct BindState<'a> {
    definitions: &'a Definitions,
    dialect: MarkerDialect,
    seen: HashSet<String>,
    referenced: Vec<String>,
}

fn annotate_block(block: Block, state: &mut BindState<'_>) -> Result<Block> {
    Ok(match block {
        Block::Paragraph(inlines) => Block::Paragraph(annotate_inlines(inlines, state)?),
        Block::Heading { level, content } => Block::Heading {
            level,
            content: annotate_inlines(content, state)?,
        },
        Block::BlockQuote(blocks) => Block::BlockQuote(
            blocks
                .into_iter()
                .map(|b| annotate_block(b, state))
                .collect::<Result<_>>()?,
        ),
        Block::List {
            ordered,
            start,
            items,
        } => Block::List {
            ordered,
            start,
            items: items
                .into_iter()
                .map(|item| {
                    Ok(ListItem {
                        content: item
                            .content
                            .into_iter()
                            .map(|b| annotate_block(b, state))
                            .collect::<Result<_>>()?,
                        checked: item.checked,
                    })
                })
                .collect::<Result<_>>()?,
        },
        Block::Table {
            headers,
            alignments,
            rows,
        } => Block::Table {
            headers: headers
                .into_iter()
                .map(|cell| annotate_inlines(cell, state))
                .collect::<Result<_>>()?,
            alignments,
            rows: rows
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|cell| annotate_inlines(cell, state))
                        .collect::<Result<_>>()
                })
                .collect::<Result<_>>()?,
        },
        // Code, breaks and raw HTML carry no markers
        other => other,
    })
}

fn annotate_inlines(inlines: Vec<Inline>, state: &mut BindState<'_>) -> Result<Vec<Inline>> {
    inlines
        .into_iter()
        .map(|inline| annotate_inline(inline, state))
        .collect()
}

fn annotate_inline(inline: Inline, state: &mut BindState<'_>) -> Result<Inline> {
    Ok(match inline {
        Inline::FootnoteMark { id, raw } => {
            let definitions = state.definitions;
            match definitions.get(&id) {
                Some(content) => {
                    if state.seen.insert(id.clone()) {
                        // Definition content is parsed but not annotated:
                        // footnotes do not nest, so any marker inside it
                        // renders as literal text.
                        let content = parse_inlines(content, state.dialect)?;
                        state.referenced.push(id.clone());
                        Inline::Footnote(FootnoteNode::Bound { id, content })
                    } else {
                        Inline::Footnote(FootnoteNode::Repeat { id })
                    }
                }
                None => {
                    log::warn!("no definition for footnote marker {id}; leaving it as text");
                    Inline::Footnote(FootnoteNode::Literal(raw))
                }
            }
        }
        Inline::Emphasis(inner) => Inline::Emphasis(annotate_inlines(inner, state)?),
        Inline::Strong(inner) => Inline::Strong(annotate_inlines(inner, state)?),
        Inline::Strikethrough(inner) => Inline::Strikethrough(annotate_inlines(inner, state)?),
        Inline::Link {
            url,
            title,
            content,
        } => Inline::Link {
            url,
            title,
            content: annotate_inlines(content, state)?,
        },
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    fn annotated(input: &str) -> AnnotatedDocument {
        let config = FootnoteConfig::default();
        let doc = parse(input, &config).unwrap();
        annotate(doc, &config).unwrap()
    }

    fn footnote_nodes(blocks: &[Block]) -> Vec<FootnoteNode> {
        let mut nodes = Vec::new();
        for block in blocks {
            if let Block::Paragraph(inlines) | Block::Heading { content: inlines, .. } = block {
                for inline in inlines {
                    if let Inline::Footnote(node) = inline {
                        nodes.push(node.clone());
                    }
                }
            }
        }
        nodes
    }

    #[test]
    fn test_first_marker_carries_content() {
        let annotated = annotated("Start^[1] middle^[2] end^[1]\n\n^[1] first\n^[2] second");
        let nodes = footnote_nodes(&annotated.document.blocks);
        assert_eq!(nodes.len(), 3);
        assert!(
            matches!(&nodes[0], FootnoteNode::Bound { id, content } if id == "1"
                && content == &vec![Inline::Text("first".to_string())])
        );
        assert!(matches!(&nodes[1], FootnoteNode::Bound { id, .. } if id == "2"));
        assert!(matches!(&nodes[2], FootnoteNode::Repeat { id } if id == "1"));
        assert_eq!(annotated.referenced, vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_unknown_marker_stays_literal() {
        let annotated = annotated("Mystery^[7] here.");
        let nodes = footnote_nodes(&annotated.document.blocks);
        assert_eq!(nodes, vec![FootnoteNode::Literal("^[7]".to_string())]);
        assert!(annotated.referenced.is_empty());
    }

    #[test]
    fn test_marker_in_heading_binds() {
        let annotated = annotated("# Title^[1]\n\n^[1] heading note");
        let nodes = footnote_nodes(&annotated.document.blocks);
        assert!(matches!(&nodes[0], FootnoteNode::Bound { id, .. } if id == "1"));
    }

    #[test]
    fn test_orphan_definition_is_retained_but_never_bound() {
        let annotated = annotated("No markers here.\n\n^[5] orphan");
        assert_eq!(annotated.document.definitions.get("5"), Some("orphan"));
        assert!(annotated.referenced.is_empty());
        assert!(footnote_nodes(&annotated.document.blocks).is_empty());
    }

    #[test]
    fn test_no_recursion_into_definition_content() {
        let annotated = annotated("a^[1] b^[2]\n\n^[1] see ^[2] also\n^[2] other");
        let nodes = footnote_nodes(&annotated.document.blocks);
        let FootnoteNode::Bound { content, .. } = &nodes[0] else {
            panic!("Expected bound node");
        };
        assert!(content
            .iter()
            .any(|i| matches!(i, Inline::FootnoteMark { id, .. } if id == "2")));
    }

    #[test]
    fn test_annotate_is_idempotent() {
        let config = FootnoteConfig::default();
        let doc = parse("One^[1] two^[1]\n\n^[1] note", &config).unwrap();
        let once = annotate(doc, &config).unwrap();
        let twice = annotate(once.document.clone(), &config).unwrap();
        assert_eq!(once.document, twice.document);
    }
}
