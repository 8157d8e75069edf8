//! Inline-level parsing for Markdown.

use crate::ast::Inline;
use crate::error::Result;
use crate::footnotes::MarkerDialect;
use crate::parser::lexer::{bracket_marker, caret_marker, emphasis, inline_code, strong, Token};

/// Parse inline content from a string.
///
/// Footnote markers are recognized according to `dialect`; the other
/// dialect's syntax is ordinary text.
pub fn parse_inlines(input: &str, dialect: MarkerDialect) -> Result<Vec<Inline>> {
    let mut inlines = Vec::new();
    let mut remaining = input;

    while !remaining.is_empty() {
        // Try to parse special inline elements
        if let Some((inline, rest)) = try_parse_inline(remaining, dialect)? {
            inlines.push(inline);
            remaining = rest;
        } else {
            // Consume plain text until the next special character or end
            let (text, rest) = consume_text(remaining, dialect);
            if !text.is_empty() {
                // Handle line breaks in text
                if text.contains('\n') {
                    let parts: Vec<&str> = text.split('\n').collect();
                    for (i, part) in parts.iter().enumerate() {
                        if !part.is_empty() {
                            inlines.push(Inline::Text(part.to_string()));
                        }
                        if i < parts.len() - 1 {
                            // Check for hard break (two trailing spaces or backslash)
                            if part.ends_with("  ") || part.ends_with('\\') {
                                inlines.push(Inline::HardBreak);
                            } else {
                                inlines.push(Inline::SoftBreak);
                            }
                        }
                    }
                } else {
                    inlines.push(Inline::Text(text.to_string()));
                }
                remaining = rest;
            } else if rest == remaining {
                // No progress made - consume one character to avoid infinite loop
                let c = remaining.chars().next().unwrap();
                inlines.push(Inline::Text(c.to_string()));
                remaining = &remaining[c.len_utf8()..];
            } else {
                remaining = rest;
            }
        }
    }

    Ok(inlines)
}

fn try_parse_inline(input: &str, dialect: MarkerDialect) -> Result<Option<(Inline, &str)>> {
    // Order matters - try more specific patterns first

    // Strong (**...** or __...__)
    if input.starts_with("**") || input.starts_with("__") {
        if let Ok((rest, Token::Strong(content))) = strong(input) {
            let inner = parse_inlines(content, dialect)?;
            return Ok(Some((Inline::Strong(inner), rest)));
        }
    }

    // Emphasis (*...* or _..._)
    if (input.starts_with('*') && !input.starts_with("**"))
        || (input.starts_with('_') && !input.starts_with("__"))
    {
        if let Ok((rest, Token::Emphasis(content))) = emphasis(input) {
            let inner = parse_inlines(content, dialect)?;
            return Ok(Some((Inline::Emphasis(inner), rest)));
        }
    }

    // Strikethrough (~~...~~)
    if input.starts_with("~~") {
        if let Some(end) = input[2..].find("~~") {
            let content = &input[2..2 + end];
            let rest = &input[2 + end + 2..];
            let inner = parse_inlines(content, dialect)?;
            return Ok(Some((Inline::Strikethrough(inner), rest)));
        }
    }

    // Inline code (`...`)
    if input.starts_with('`') && !input.starts_with("```") {
        if let Ok((rest, Token::InlineCode(content))) = inline_code(input) {
            return Ok(Some((Inline::Code(content.to_string()), rest)));
        }
    }

    // Caret footnote marker (^[3])
    if dialect == MarkerDialect::Caret && input.starts_with("^[") {
        if let Ok((rest, Token::FootnoteMarker(id))) = caret_marker(input) {
            let raw = &input[..input.len() - rest.len()];
            return Ok(Some((
                Inline::FootnoteMark {
                    id: id.to_string(),
                    raw: raw.to_string(),
                },
                rest,
            )));
        }
    }

    // Bracket footnote marker ([3]). This arm runs before links: the
    // marker substitution happens on raw text ahead of any link syntax,
    // so `[3](url)` is a marker followed by literal text.
    if dialect == MarkerDialect::Bracket && input.starts_with('[') {
        if let Ok((rest, Token::FootnoteMarker(id))) = bracket_marker(input) {
            let raw = &input[..input.len() - rest.len()];
            return Ok(Some((
                Inline::FootnoteMark {
                    id: id.to_string(),
                    raw: raw.to_string(),
                },
                rest,
            )));
        }
    }

    // Link ([text](url "title"))
    if input.starts_with('[') {
        if let Some((inline, rest)) = try_parse_link(input, dialect)? {
            return Ok(Some((inline, rest)));
        }
    }

    // Image (![alt](url "title"))
    if input.starts_with("![") {
        if let Some((inline, rest)) = try_parse_image(input)? {
            return Ok(Some((inline, rest)));
        }
    }

    // Raw HTML (<tag>)
    if input.starts_with('<') {
        if let Some((inline, rest)) = try_parse_raw_html(input)? {
            return Ok(Some((inline, rest)));
        }
    }

    Ok(None)
}

fn try_parse_link(input: &str, dialect: MarkerDialect) -> Result<Option<(Inline, &str)>> {
    // [text](url "title")
    if !input.starts_with('[') {
        return Ok(None);
    }

    let mut depth = 0;
    let mut text_end = None;

    for (i, c) in input.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    text_end = Some(i);
                    break;
                }
            }
            _ => {}
        }
    }

    let text_end = match text_end {
        Some(e) => e,
        None => return Ok(None),
    };

    let text = &input[1..text_end];
    let after_text = &input[text_end + 1..];

    if !after_text.starts_with('(') {
        return Ok(None);
    }

    // Find closing paren, handling nested parens
    let mut depth = 0;
    let mut url_end = None;

    for (i, c) in after_text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    url_end = Some(i);
                    break;
                }
            }
            _ => {}
        }
    }

    let url_end = match url_end {
        Some(e) => e,
        None => return Ok(None),
    };

    let url_part = &after_text[1..url_end];
    let rest = &after_text[url_end + 1..];

    // Parse URL and optional title
    let (url, title) = parse_url_and_title(url_part);

    let content = parse_inlines(text, dialect)?;

    Ok(Some((
        Inline::Link {
            url: url.to_string(),
            title: title.map(String::from),
            content,
        },
        rest,
    )))
}

fn try_parse_image(input: &str) -> Result<Option<(Inline, &str)>> {
    // ![alt](url "title")
    if !input.starts_with("![") {
        return Ok(None);
    }

    let close_bracket = match input[2..].find(']') {
        Some(i) => i + 2,
        None => return Ok(None),
    };

    let alt = &input[2..close_bracket];
    let after_alt = &input[close_bracket + 1..];

    if !after_alt.starts_with('(') {
        return Ok(None);
    }

    let close_paren = match after_alt.find(')') {
        Some(i) => i,
        None => return Ok(None),
    };

    let url_part = &after_alt[1..close_paren];
    let rest = &after_alt[close_paren + 1..];

    let (url, title) = parse_url_and_title(url_part);

    Ok(Some((
        Inline::Image {
            url: url.to_string(),
            alt: alt.to_string(),
            title: title.map(String::from),
        },
        rest,
    )))
}

fn parse_url_and_title(input: &str) -> (&str, Option<&str>) {
    let input = input.trim();

    // Check for title in quotes
    if let Some(quote_start) = input.find('"') {
        if let Some(quote_end) = input[quote_start + 1..].find('"') {
            let url = input[..quote_start].trim();
            let title = &input[quote_start + 1..quote_start + 1 + quote_end];
            return (url, Some(title));
        }
    }

    // Check for title in single quotes
    if let Some(quote_start) = input.find('\'') {
        if let Some(quote_end) = input[quote_start + 1..].find('\'') {
            let url = input[..quote_start].trim();
            let title = &input[quote_start + 1..quote_start + 1 + quote_end];
            return (url, Some(title));
        }
    }

    (input, None)
}

fn try_parse_raw_html(input: &str) -> Result<Option<(Inline, &str)>> {
    if !input.starts_with('<') {
        return Ok(None);
    }

    // Find the closing >
    let close = match input.find('>') {
        Some(i) => i,
        None => return Ok(None),
    };

    // Check if it looks like a tag
    let tag_content = &input[1..close];
    if tag_content.is_empty() || !tag_content.chars().next().unwrap().is_alphabetic() {
        return Ok(None);
    }

    let html = &input[..=close];
    let rest = &input[close + 1..];

    Ok(Some((Inline::RawHtml(html.to_string()), rest)))
}

fn consume_text(input: &str, dialect: MarkerDialect) -> (&str, &str) {
    // Special characters that might start inline elements
    const SPECIAL: &[char] = &['*', '_', '`', '[', '!', '^', '<', '~', '\n'];

    let mut end = 0;
    let mut chars = input.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if SPECIAL.contains(&c) {
            // Check for escaped character
            if i > 0 && input.as_bytes()[i - 1] == b'\\' {
                end = i + c.len_utf8();
                continue;
            }

            // Special handling for potential inline elements
            if c == '*' || c == '_' {
                // Check if followed by non-space (potential emphasis/strong)
                if let Some(&(_, next)) = chars.peek() {
                    if !next.is_whitespace() {
                        if end == 0 && i == 0 {
                            return ("", input);
                        }
                        return (&input[..end.max(i)], &input[end.max(i)..]);
                    }
                }
                end = i + c.len_utf8();
                continue;
            }

            if c == '~' {
                // Check for strikethrough
                if let Some(&(_, next)) = chars.peek() {
                    if next == '~' {
                        if end == 0 && i == 0 {
                            return ("", input);
                        }
                        return (&input[..i], &input[i..]);
                    }
                }
                end = i + c.len_utf8();
                continue;
            }

            if c == '!' {
                // Check for image (![ )
                if let Some(&(_, next)) = chars.peek() {
                    if next == '[' {
                        if end == 0 && i == 0 {
                            return ("", input);
                        }
                        return (&input[..i], &input[i..]);
                    }
                }
                end = i + c.len_utf8();
                continue;
            }

            if c == '^' {
                // Only a caret-dialect marker start (^[ ) is special
                if dialect == MarkerDialect::Caret {
                    if let Some(&(_, next)) = chars.peek() {
                        if next == '[' {
                            if end == 0 && i == 0 {
                                return ("", input);
                            }
                            return (&input[..i], &input[i..]);
                        }
                    }
                }
                end = i + c.len_utf8();
                continue;
            }

            if c == '<' {
                // Check for HTML tag
                if let Some(&(_, next)) = chars.peek() {
                    if next.is_alphabetic() || next == '/' {
                        if end == 0 && i == 0 {
                            return ("", input);
                        }
                        return (&input[..i], &input[i..]);
                    }
                }
                end = i + c.len_utf8();
                continue;
            }

            // For remaining special chars ([, `, \n), stop here
            if end == 0 && i == 0 {
                return ("", input);
            }
            return (&input[..end.max(i)], &input[end.max(i)..]);
        }

        end = i + c.len_utf8();
    }

    (input, "")
}
