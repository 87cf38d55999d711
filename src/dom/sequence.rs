//! `NodeSequence`: ordered, append-only list of nodes.

use super::node::{Element, Node};

/// An ordered, appendable collection of nodes forming a subtree.
///
/// Rendering concatenates each child's markup in insertion order. A
/// sequence owns its nodes exclusively; a `Container` embeds one to nest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeSequence {
    nodes: Vec<Node>,
}

impl NodeSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node. No deduplication.
    pub fn append(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    /// Append a node (builder).
    pub fn with(mut self, node: impl Into<Node>) -> Self {
        self.append(node);
        self
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether there are no direct children.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate direct children in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Direct children as a slice.
    pub fn as_slice(&self) -> &[Node] {
        &self.nodes
    }

    /// Append every child's markup to `out`, in order.
    pub fn render_into(&self, out: &mut String) {
        for node in &self.nodes {
            node.render_into(out);
        }
    }

    /// Render the sequence to markup.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

impl Extend<Node> for NodeSequence {
    fn extend<I: IntoIterator<Item = Node>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}

impl FromIterator<Node> for NodeSequence {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for NodeSequence {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a NodeSequence {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::ElementExt;
    use crate::elements::{Button, Canvas, Container, Heading, Text};
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Node> {
        vec![
            Heading::new("Clicks: 0").with_id("heading").into(),
            Canvas::sized(600, 400).with_id("whiteboard").into(),
            Button::new("I Count Clicks").with_on_click("doButtonOne").into(),
        ]
    }

    // ── Render ───────────────────────────────────────────────────────

    #[test]
    fn empty_sequence_renders_empty() {
        assert_eq!(NodeSequence::new().render(), "");
    }

    #[test]
    fn render_is_concatenation_in_append_order() {
        let nodes = sample();
        let mut seq = NodeSequence::new();
        for node in nodes.clone() {
            seq.append(node);
        }
        let expected: String = nodes.iter().map(|n| n.render()).collect();
        assert_eq!(seq.render(), expected);
    }

    #[test]
    fn reordering_changes_output() {
        let nodes = sample();
        let forward: NodeSequence = nodes.clone().into_iter().collect();
        let backward: NodeSequence = nodes.into_iter().rev().collect();
        assert_ne!(forward.render(), backward.render());
    }

    #[test]
    fn render_is_idempotent() {
        let seq: NodeSequence = sample().into_iter().collect();
        assert_eq!(seq.render(), seq.render());
    }

    #[test]
    fn nested_sequences_render_recursively() {
        let inner = Container::new().with_id("inner").with_child(Text::new("deep"));
        let seq = NodeSequence::new().with(Container::new().with_id("outer").with_child(inner));
        assert_eq!(
            seq.render(),
            r#"<div id="outer"><div id="inner"><span>deep</span></div></div>"#
        );
    }

    // ── Append ───────────────────────────────────────────────────────

    #[test]
    fn append_keeps_duplicates() {
        let mut seq = NodeSequence::new();
        seq.append(Text::new("same"));
        seq.append(Text::new("same"));
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.render(), "<span>same</span><span>same</span>");
    }

    #[test]
    fn extend_and_iterate() {
        let mut seq = NodeSequence::new();
        seq.extend(sample());
        assert_eq!(seq.len(), 3);
        let tags: Vec<_> = seq.iter().map(|n| n.tag()).collect();
        assert_eq!(tags, vec!["h1", "canvas", "button"]);
        assert_eq!((&seq).into_iter().count(), 3);
        assert_eq!(seq.as_slice().len(), 3);
    }
}
