//! Render-time footnote numbering.

use std::collections::HashMap;

use crate::ast::Inline;

/// A footnote that has been assigned a display number.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredFootnote {
    pub id: String,
    /// 1-based, dense, in first-registration order
    pub number: u32,
    pub content: Vec<Inline>,
}

/// Assigns footnote numbers in order of first registration.
///
/// A registry lives exactly as long as one document render: the renderer
/// creates it, fills it while walking the body, reads it back for the
/// definition list, and drops it with the pass. Numbers are never reused
/// across documents because the registry itself never is.
#[derive(Debug, Clone, Default)]
pub struct FootnoteRegistry {
    entries: Vec<RegisteredFootnote>,
    index: HashMap<String, u32>,
}

impl FootnoteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a footnote, returning its number.
    ///
    /// The first registration of an id appends an entry and assigns the
    /// next number. Registering the same id again returns the existing
    /// number and leaves the entry untouched, so callers need no guard
    /// of their own against re-evaluation.
    pub fn register(&mut self, id: &str, content: Vec<Inline>) -> u32 {
        if let Some(&number) = self.index.get(id) {
            return number;
        }

        let number = self.entries.len() as u32 + 1;
        self.entries.push(RegisteredFootnote {
            id: id.to_string(),
            number,
            content,
        });
        self.index.insert(id.to_string(), number);
        number
    }

    /// Look up a previously assigned number without registering.
    pub fn lookup(&self, id: &str) -> Option<u32> {
        self.index.get(id).copied()
    }

    /// Registered footnotes in numeric order.
    pub fn entries(&self) -> &[RegisteredFootnote] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Vec<Inline> {
        vec![Inline::Text(s.to_string())]
    }

    #[test]
    fn test_numbers_follow_first_registration_order() {
        let mut registry = FootnoteRegistry::new();
        assert_eq!(registry.register("9", text("ninth")), 1);
        assert_eq!(registry.register("2", text("second")), 2);
        assert_eq!(registry.register("5", text("fifth")), 3);

        let numbers: Vec<u32> = registry.entries().iter().map(|e| e.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = FootnoteRegistry::new();
        let first = registry.register("1", text("original"));
        let again = registry.register("1", text("changed"));

        assert_eq!(first, again);
        assert_eq!(registry.len(), 1);
        // The original content is kept.
        assert_eq!(registry.entries()[0].content, text("original"));
    }

    #[test]
    fn test_lookup_before_register_is_none() {
        let registry = FootnoteRegistry::new();
        assert_eq!(registry.lookup("1"), None);
    }

    #[test]
    fn test_lookup_has_no_side_effects() {
        let mut registry = FootnoteRegistry::new();
        registry.register("1", text("note"));
        assert_eq!(registry.lookup("2"), None);
        assert_eq!(registry.lookup("1"), Some(1));
        assert_eq!(registry.len(), 1);
    }
}
