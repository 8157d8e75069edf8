//! Definition extraction: strip footnote definition lines from a body.

use std::collections::HashSet;

use crate::ast::Definitions;
use crate::footnotes::{FootnoteConfig, MarkerDialect};
use crate::parser::lexer::{bracket_marker, caret_marker, Token};

/// Split a raw body into cleaned text and its footnote definitions.
///
/// A definition is a line starting (unindented) with the dialect's marker,
/// followed by optional spaces and non-empty content running to the end of
/// the line. Matched lines are removed from the body; everything else is
/// left alone. Lines inside fenced code blocks are never definitions.
pub fn extract(body: &str, config: &FootnoteConfig) -> (String, Definitions) {
    match config.dialect {
        MarkerDialect::Caret => extract_caret(body),
        MarkerDialect::Bracket => extract_bracket(body),
    }
}

/// Caret dialect: every definition line is collected, referenced or not.
fn extract_caret(body: &str) -> (String, Definitions) {
    let mut definitions = Definitions::new();
    let mut kept = Vec::new();
    let mut fences = FenceTracker::new();

    for line in body.lines() {
        if fences.observe(line) {
            kept.push(line);
            continue;
        }

        match definition_line(line, MarkerDialect::Caret) {
            Some((id, content)) => insert_definition(&mut definitions, id, content),
            None => kept.push(line),
        }
    }

    (kept.join("\n").trim().to_string(), definitions)
}

/// Bracket dialect: a definition line is honored only when its id also
/// occurs as an inline marker somewhere outside a definition-shaped line.
/// Unhonored definition-shaped lines stay in the body as ordinary text.
fn extract_bracket(body: &str) -> (String, Definitions) {
    let mut referenced: HashSet<&str> = HashSet::new();
    let mut fences = FenceTracker::new();

    for line in body.lines() {
        if fences.observe(line) || definition_line(line, MarkerDialect::Bracket).is_some() {
            continue;
        }
        collect_bracket_ids(line, &mut referenced);
    }

    let mut definitions = Definitions::new();
    let mut kept = Vec::new();
    let mut fences = FenceTracker::new();

    for line in body.lines() {
        if fences.observe(line) {
            kept.push(line);
            continue;
        }

        match definition_line(line, MarkerDialect::Bracket) {
            Some((id, content)) if referenced.contains(id) => {
                insert_definition(&mut definitions, id, content)
            }
            _ => kept.push(line),
        }
    }

    (kept.join("\n").trim().to_string(), definitions)
}

fn insert_definition(definitions: &mut Definitions, id: &str, content: &str) {
    if definitions.contains(id) {
        log::warn!("footnote {id} defined more than once; keeping the last definition");
    }
    definitions.insert(id, content.to_string());
}

/// Match a whole line against the definition shape, yielding id and
/// trimmed content.
fn definition_line(line: &str, dialect: MarkerDialect) -> Option<(&str, &str)> {
    let parsed = match dialect {
        MarkerDialect::Caret => caret_marker(line),
        MarkerDialect::Bracket => bracket_marker(line),
    };

    let (rest, token) = parsed.ok()?;
    let Token::FootnoteMarker(id) = token else {
        return None;
    };

    let content = rest.trim();
    if content.is_empty() {
        return None;
    }
    Some((id, content))
}

/// Collect every `[digits]` occurrence in a line.
fn collect_bracket_ids<'a>(line: &'a str, out: &mut HashSet<&'a str>) {
    let mut rest = line;
    while let Some(open) = rest.find('[') {
        match bracket_marker(&rest[open..]) {
            Ok((after, Token::FootnoteMarker(id))) => {
                out.insert(id);
                rest = after;
            }
            _ => rest = &rest[open + 1..],
        }
    }
}

/// Fence state across a line scan, so fence interiors are never mistaken
/// for definitions.
struct FenceTracker {
    fence: Option<&'static str>,
}

impl FenceTracker {
    fn new() -> Self {
        Self { fence: None }
    }

    /// Returns true if `line` delimits or sits inside a fenced code block.
    fn observe(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start();
        match self.fence {
            Some(f) => {
                if trimmed.starts_with(f) {
                    self.fence = None;
                }
                true
            }
            None => {
                if trimmed.starts_with("```") {
                    self.fence = Some("```");
                    true
                } else if trimmed.starts_with("~~~") {
                    self.fence = Some("~~~");
                    true
                } else {
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn caret() -> FootnoteConfig {
        FootnoteConfig {
            dialect: MarkerDialect::Caret,
        }
    }

    fn bracket() -> FootnoteConfig {
        FootnoteConfig {
            dialect: MarkerDialect::Bracket,
        }
    }

    #[test]
    fn test_caret_collects_and_strips() {
        let body = "Start^[1] middle.\n\n^[1] first\n^[2] second";
        let (cleaned, defs) = extract(body, &caret());
        assert_eq!(cleaned, "Start^[1] middle.");
        assert_eq!(defs.get("1"), Some("first"));
        assert_eq!(defs.get("2"), Some("second"));
        let ids: Vec<&str> = defs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_no_definitions_leaves_body_alone() {
        let body = "Just a paragraph.\n\nAnother one.";
        let (cleaned, defs) = extract(body, &caret());
        assert_eq!(cleaned, body);
        assert!(defs.is_empty());
    }

    #[test]
    fn test_duplicate_id_last_content_first_position() {
        let body = "^[1] first\n^[2] middle\n^[1] second";
        let (_, defs) = extract(body, &caret());
        assert_eq!(defs.get("1"), Some("second"));
        assert_eq!(defs.len(), 2);
        let ids: Vec<&str> = defs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_content_may_touch_the_marker() {
        let (_, defs) = extract("^[4]packed content", &caret());
        assert_eq!(defs.get("4"), Some("packed content"));
    }

    #[test]
    fn test_bare_marker_line_is_not_a_definition() {
        let body = "^[1]\n^[2]   ";
        let (cleaned, defs) = extract(body, &caret());
        assert!(defs.is_empty());
        assert_eq!(cleaned, "^[1]\n^[2]");
    }

    #[test]
    fn test_indented_line_is_not_a_definition() {
        let (cleaned, defs) = extract("  ^[1] indented", &caret());
        assert!(defs.is_empty());
        assert_eq!(cleaned, "^[1] indented");
    }

    #[test]
    fn test_fenced_code_is_opaque() {
        let body = "```sh\n^[1] looks like a definition\n```\n\n^[1] real one";
        let (cleaned, defs) = extract(body, &caret());
        assert!(cleaned.contains("^[1] looks like a definition"));
        assert_eq!(defs.get("1"), Some("real one"));
        assert_eq!(defs.len(), 1);
    }

    #[test]
    fn test_bracket_honors_referenced_ids_only() {
        let body = "Text [1] here.\n\n[1] a note\n[2] an orphan";
        let (cleaned, defs) = extract(body, &bracket());
        assert_eq!(defs.get("1"), Some("a note"));
        assert!(!defs.contains("2"));
        assert!(cleaned.contains("[2] an orphan"));
        assert!(!cleaned.contains("[1] a note"));
    }

    #[test]
    fn test_bracket_definition_lines_do_not_reference_themselves() {
        // The only [1] occurrence is the definition line itself.
        let (cleaned, defs) = extract("Some text.\n\n[1] self-referential", &bracket());
        assert!(defs.is_empty());
        assert!(cleaned.contains("[1] self-referential"));
    }

    #[test]
    fn test_bracket_ignores_caret_syntax() {
        let body = "Caret^[1] marker.\n\n^[1] caret definition";
        let (cleaned, defs) = extract(body, &bracket());
        assert!(defs.is_empty());
        // The caret definition line survives untouched.
        assert!(cleaned.contains("^[1] caret definition"));
    }

    #[test]
    fn test_definitions_insert_semantics() {
        let mut defs = Definitions::new();
        defs.insert("9", "old".to_string());
        defs.insert("3", "other".to_string());
        defs.insert("9", "new".to_string());
        assert_eq!(defs.get("9"), Some("new"));
        let ids: Vec<&str> = defs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["9", "3"]);
    }
}
