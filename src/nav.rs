//! In-page navigation between footnote references and definitions.
//!
//! Rendered documents link each reference marker to its definition and
//! each definition back to its reference. This module models the motion
//! itself: which anchor to scroll to, how to align it, and the transient
//! highlight applied to the target. Hosts drive a [`Viewport`] with their
//! own clock and translate [`NavAction`]s into whatever scrolling their
//! environment provides.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::footnotes::FootnoteRegistry;

/// How long a navigation target stays visually highlighted.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(2000);

/// Anchor id of a footnote definition.
pub fn definition_anchor(id: &str) -> String {
    format!("fn-{id}")
}

/// Anchor id of the first reference marker for a footnote.
pub fn reference_anchor(id: &str) -> String {
    format!("fn-ref-{id}")
}

/// Where the scroll target should land in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlignment {
    /// Top of the viewport (jumping down to a definition)
    Start,
    /// Middle of the viewport (jumping back up to a reference)
    Center,
}

/// A scroll request produced by activating a marker or back-link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavAction {
    pub anchor: String,
    pub alignment: ScrollAlignment,
}

/// A transient highlight on one anchor.
#[derive(Debug, Clone)]
pub struct Highlight {
    anchor: String,
    applied_at: Instant,
}

impl Highlight {
    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    /// Active strictly within [`HIGHLIGHT_DURATION`] of application, gone
    /// from that instant on.
    pub fn is_active(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.applied_at) < HIGHLIGHT_DURATION
    }
}

/// Scroll-and-highlight state for one rendered document.
///
/// Holds the set of anchors the document actually contains and at most
/// one active highlight. Navigation to an anchor the document does not
/// have is a no-op: the request is dropped and logged, nothing changes.
#[derive(Debug, Default)]
pub struct Viewport {
    anchors: HashSet<String>,
    highlight: Option<Highlight>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a viewport with the anchors a registry's footnotes produce.
    pub fn from_registry(registry: &FootnoteRegistry) -> Self {
        let mut viewport = Self::new();
        for entry in registry.entries() {
            viewport.insert_anchor(definition_anchor(&entry.id));
            viewport.insert_anchor(reference_anchor(&entry.id));
        }
        viewport
    }

    /// Declare an anchor present in the rendered document.
    pub fn insert_anchor(&mut self, anchor: impl Into<String>) {
        self.anchors.insert(anchor.into());
    }

    /// Activate a reference marker: scroll to the definition.
    pub fn follow_reference(&mut self, id: &str, now: Instant) -> Option<NavAction> {
        self.activate(definition_anchor(id), ScrollAlignment::Start, now)
    }

    /// Activate a definition back-link: scroll to the reference marker.
    pub fn follow_backlink(&mut self, id: &str, now: Instant) -> Option<NavAction> {
        self.activate(reference_anchor(id), ScrollAlignment::Center, now)
    }

    /// The anchor currently highlighted, if the highlight is still live.
    pub fn highlighted(&self, now: Instant) -> Option<&str> {
        self.highlight
            .as_ref()
            .filter(|h| h.is_active(now))
            .map(Highlight::anchor)
    }

    fn activate(
        &mut self,
        anchor: String,
        alignment: ScrollAlignment,
        now: Instant,
    ) -> Option<NavAction> {
        if !self.anchors.contains(&anchor) {
            log::warn!("navigation target {anchor} not present in document");
            return None;
        }

        self.highlight = Some(Highlight {
            anchor: anchor.clone(),
            applied_at: now,
        });

        Some(NavAction { anchor, alignment })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Inline;
    use pretty_assertions::assert_eq;

    fn viewport_with(ids: &[&str]) -> Viewport {
        let mut registry = FootnoteRegistry::new();
        for id in ids {
            registry.register(id, vec![Inline::Text("note".to_string())]);
        }
        Viewport::from_registry(&registry)
    }

    #[test]
    fn test_anchor_shapes() {
        assert_eq!(definition_anchor("3"), "fn-3");
        assert_eq!(reference_anchor("3"), "fn-ref-3");
    }

    #[test]
    fn test_follow_reference_targets_definition() {
        let mut viewport = viewport_with(&["1"]);
        let action = viewport.follow_reference("1", Instant::now()).unwrap();
        assert_eq!(
            action,
            NavAction {
                anchor: "fn-1".to_string(),
                alignment: ScrollAlignment::Start,
            }
        );
    }

    #[test]
    fn test_follow_backlink_targets_reference() {
        let mut viewport = viewport_with(&["1"]);
        let action = viewport.follow_backlink("1", Instant::now()).unwrap();
        assert_eq!(
            action,
            NavAction {
                anchor: "fn-ref-1".to_string(),
                alignment: ScrollAlignment::Center,
            }
        );
    }

    #[test]
    fn test_highlight_clears_after_two_seconds_and_not_before() {
        let mut viewport = viewport_with(&["1"]);
        let t0 = Instant::now();
        viewport.follow_reference("1", t0);

        assert_eq!(viewport.highlighted(t0), Some("fn-1"));
        assert_eq!(
            viewport.highlighted(t0 + Duration::from_millis(1999)),
            Some("fn-1")
        );
        assert_eq!(viewport.highlighted(t0 + HIGHLIGHT_DURATION), None);
        assert_eq!(viewport.highlighted(t0 + Duration::from_millis(2001)), None);
    }

    #[test]
    fn test_new_highlight_replaces_old() {
        let mut viewport = viewport_with(&["1", "2"]);
        let t0 = Instant::now();
        viewport.follow_reference("1", t0);
        viewport.follow_reference("2", t0 + Duration::from_millis(500));

        assert_eq!(
            viewport.highlighted(t0 + Duration::from_millis(600)),
            Some("fn-2")
        );
    }

    #[test]
    fn test_missing_anchor_is_a_logged_no_op() {
        let mut viewport = viewport_with(&["1"]);
        let t0 = Instant::now();
        assert_eq!(viewport.follow_reference("99", t0), None);
        assert_eq!(viewport.highlighted(t0), None);
    }
}
