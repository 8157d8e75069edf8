//! Block-level parsing for Markdown.

use crate::ast::{Alignment, Block, Inline, ListItem};
use crate::error::Result;
use crate::footnotes::MarkerDialect;
use crate::parser::inline::parse_inlines;
use crate::parser::lexer::{
    fenced_code_start, heading, list_item_marker, thematic_break, ListMarker, Token,
};

/// Parse all blocks from content.
pub fn parse_blocks(input: &str, dialect: MarkerDialect) -> Result<Vec<Block>> {
    let mut blocks = Vec::new();
    let lines: Vec<&str> = input.lines().collect();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim_start();

        // Skip blank lines
        if trimmed.is_empty() {
            i += 1;
            continue;
        }

        // Try parsing different block types
        if let Some((block, consumed)) = try_parse_heading(line, dialect)? {
            blocks.push(block);
            i += consumed;
        } else if let Some((block, consumed)) = try_parse_thematic_break(line)? {
            blocks.push(block);
            i += consumed;
        } else if let Some((block, consumed)) = try_parse_fenced_code(&lines[i..])? {
            blocks.push(block);
            i += consumed;
        } else if let Some((block, consumed)) = try_parse_block_quote(&lines[i..], dialect)? {
            blocks.push(block);
            i += consumed;
        } else if let Some((block, consumed)) = try_parse_list(&lines[i..], dialect)? {
            blocks.push(block);
            i += consumed;
        } else if let Some((block, consumed)) = try_parse_table(&lines[i..], dialect)? {
            blocks.push(block);
            i += consumed;
        } else {
            // Default: paragraph
            let (block, consumed) = parse_paragraph(&lines[i..], dialect)?;
            blocks.push(block);
            i += consumed;
        }
    }

    Ok(blocks)
}

fn try_parse_heading(line: &str, dialect: MarkerDialect) -> Result<Option<(Block, usize)>> {
    if !line.trim_start().starts_with('#') {
        return Ok(None);
    }

    match heading(line.trim_start()) {
        Ok((_, Token::Heading(level, content))) => {
            let inlines = parse_inlines(content, dialect)?;
            Ok(Some((
                Block::Heading {
                    level,
                    content: inlines,
                },
                1,
            )))
        }
        _ => Ok(None),
    }
}

fn try_parse_thematic_break(line: &str) -> Result<Option<(Block, usize)>> {
    let trimmed = line.trim_start();
    if thematic_break(trimmed).is_ok() {
        Ok(Some((Block::ThematicBreak, 1)))
    } else {
        Ok(None)
    }
}

fn try_parse_fenced_code(lines: &[&str]) -> Result<Option<(Block, usize)>> {
    let first = lines[0].trim_start();

    if !first.starts_with("```") && !first.starts_with("~~~") {
        return Ok(None);
    }

    let fence = if first.starts_with("```") { "```" } else { "~~~" };

    match fenced_code_start(first) {
        Ok((_, Token::FencedCodeStart(lang))) => {
            let mut content = String::new();
            let mut i = 1;

            while i < lines.len() {
                let line = lines[i];
                if line.trim_start().starts_with(fence) {
                    return Ok(Some((
                        Block::CodeBlock {
                            language: if lang.is_empty() {
                                None
                            } else {
                                Some(lang.to_string())
                            },
                            content,
                        },
                        i + 1,
                    )));
                }
                if !content.is_empty() {
                    content.push('\n');
                }
                content.push_str(line);
                i += 1;
            }

            // Unclosed fence - treat rest as code
            Ok(Some((
                Block::CodeBlock {
                    language: if lang.is_empty() {
                        None
                    } else {
                        Some(lang.to_string())
                    },
                    content,
                },
                lines.len(),
            )))
        }
        _ => Ok(None),
    }
}

fn try_parse_block_quote(lines: &[&str], dialect: MarkerDialect) -> Result<Option<(Block, usize)>> {
    let first = lines[0].trim_start();

    if !first.starts_with('>') {
        return Ok(None);
    }

    let mut quote_lines = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim_start();

        if trimmed.starts_with('>') {
            // Remove the > prefix
            let content = if trimmed.len() > 1 && trimmed.chars().nth(1) == Some(' ') {
                &trimmed[2..]
            } else {
                &trimmed[1..]
            };
            quote_lines.push(content);
            i += 1;
        } else if trimmed.is_empty()
            && i + 1 < lines.len()
            && lines[i + 1].trim_start().starts_with('>')
        {
            // Blank line within quote
            quote_lines.push("");
            i += 1;
        } else {
            break;
        }
    }

    let inner_content = quote_lines.join("\n");
    let inner_blocks = parse_blocks(&inner_content, dialect)?;

    Ok(Some((Block::BlockQuote(inner_blocks), i)))
}

fn try_parse_list(lines: &[&str], dialect: MarkerDialect) -> Result<Option<(Block, usize)>> {
    let first = lines[0];
    let trimmed = first.trim_start();
    let indent = first.len() - trimmed.len();

    let Ok((_, Token::ListItemMarker(marker_type))) = list_item_marker(trimmed) else {
        return Ok(None);
    };

    let ordered = matches!(marker_type, ListMarker::Ordered(_));
    let start = if let ListMarker::Ordered(n) = marker_type {
        Some(n)
    } else {
        None
    };

    let mut items = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim_start();
        let current_indent = line.len() - trimmed.len();

        // Check for list item at same or lesser indent
        if let Ok((rest, Token::ListItemMarker(m))) = list_item_marker(trimmed) {
            // Check if same list type
            let same_type = matches!(
                (&marker_type, &m),
                (ListMarker::Ordered(_), ListMarker::Ordered(_))
                    | (ListMarker::Unordered, ListMarker::Unordered)
                    | (ListMarker::Unordered, ListMarker::Checkbox(_))
                    | (ListMarker::Checkbox(_), ListMarker::Unordered)
                    | (ListMarker::Checkbox(_), ListMarker::Checkbox(_))
            );

            if current_indent <= indent && same_type {
                // Collect item content
                let mut item_lines = vec![rest];
                i += 1;

                while i < lines.len() {
                    let next_line = lines[i];
                    let next_trimmed = next_line.trim_start();
                    let next_indent = next_line.len() - next_trimmed.len();

                    // Check for new list item
                    if let Ok((_, Token::ListItemMarker(_))) = list_item_marker(next_trimmed) {
                        if next_indent <= indent {
                            break;
                        }
                    }

                    if next_trimmed.is_empty() {
                        // Check if next non-blank continues the item
                        let mut j = i + 1;
                        while j < lines.len() && lines[j].trim().is_empty() {
                            j += 1;
                        }
                        if j < lines.len() {
                            let future_indent = lines[j].len() - lines[j].trim_start().len();
                            if future_indent <= indent {
                                break;
                            }
                        }
                    }

                    // Content belongs to this item
                    item_lines.push(next_trimmed);
                    i += 1;
                }

                let content = item_lines.join("\n");
                let content_blocks = parse_blocks(&content, dialect)?;
                let checked = if let ListMarker::Checkbox(c) = m {
                    Some(c)
                } else {
                    None
                };

                items.push(ListItem {
                    content: content_blocks,
                    checked,
                });
            } else {
                break;
            }
        } else if current_indent > indent || trimmed.is_empty() {
            // Continuation of previous item
            i += 1;
        } else {
            break;
        }
    }

    if items.is_empty() {
        return Ok(None);
    }

    Ok(Some((
        Block::List {
            ordered,
            start,
            items,
        },
        i,
    )))
}

fn try_parse_table(lines: &[&str], dialect: MarkerDialect) -> Result<Option<(Block, usize)>> {
    // Check for pipe table
    let first = lines[0];
    if !first.contains('|') {
        return Ok(None);
    }

    // Need at least header row and delimiter row
    if lines.len() < 2 {
        return Ok(None);
    }

    // Check for delimiter row
    let second = lines[1];
    if !is_table_delimiter(second) {
        return Ok(None);
    }

    // Parse header
    let headers = parse_table_row(first, dialect)?;
    let alignments = parse_alignments(second);

    // Parse body rows
    let mut rows = Vec::new();
    let mut i = 2;

    while i < lines.len() {
        let line = lines[i];
        if !line.contains('|') || line.trim().is_empty() {
            break;
        }
        rows.push(parse_table_row(line, dialect)?);
        i += 1;
    }

    Ok(Some((
        Block::Table {
            headers,
            alignments,
            rows,
        },
        i,
    )))
}

fn is_table_delimiter(line: &str) -> bool {
    let trimmed = line.trim();
    if !trimmed.contains('|') {
        return false;
    }

    // Remove leading/trailing pipes
    let inner = trimmed.trim_matches('|');

    // Check each cell is a valid delimiter
    for cell in inner.split('|') {
        let cell = cell.trim();
        if cell.is_empty() {
            continue;
        }

        let valid = cell.chars().all(|c| c == '-' || c == ':');
        if !valid || cell.chars().filter(|&c| c == '-').count() < 1 {
            return false;
        }
    }

    true
}

fn parse_alignments(line: &str) -> Vec<Alignment> {
    let trimmed = line.trim().trim_matches('|');
    trimmed
        .split('|')
        .map(|cell| {
            let cell = cell.trim();
            let left = cell.starts_with(':');
            let right = cell.ends_with(':');
            match (left, right) {
                (true, true) => Alignment::Center,
                (false, true) => Alignment::Right,
                _ => Alignment::Left,
            }
        })
        .collect()
}

fn parse_table_row(line: &str, dialect: MarkerDialect) -> Result<Vec<Vec<Inline>>> {
    let trimmed = line.trim().trim_matches('|');
    trimmed
        .split('|')
        .map(|cell| parse_inlines(cell.trim(), dialect))
        .collect()
}

fn parse_paragraph(lines: &[&str], dialect: MarkerDialect) -> Result<(Block, usize)> {
    let mut para_lines = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim();

        // End paragraph on blank line
        if trimmed.is_empty() {
            break;
        }

        // End paragraph on block-level element
        if trimmed.starts_with('#')
            || trimmed.starts_with("```")
            || trimmed.starts_with("~~~")
            || trimmed.starts_with('>')
            || trimmed == "---"
            || trimmed == "***"
            || trimmed == "___"
        {
            break;
        }

        // Check for list markers
        if list_item_marker(trimmed).is_ok() {
            break;
        }

        para_lines.push(line);
        i += 1;
    }

    let content = para_lines.join("\n");
    let inlines = parse_inlines(&content, dialect)?;

    Ok((Block::Paragraph(inlines), i.max(1)))
}
