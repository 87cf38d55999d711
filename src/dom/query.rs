//! Tree queries over a `NodeSequence`: depth-first walk, lookup by id.

use super::node::{Element, Node};
use super::sequence::NodeSequence;
use crate::elements::Button;

impl NodeSequence {
    /// Visit every node depth-first, parents before their children.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        for node in self.iter() {
            visit(node);
            if let Some(children) = node.children() {
                children.walk(visit);
            }
        }
    }

    /// All nodes of the tree in depth-first order.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut nodes = Vec::new();
        self.walk(&mut |node| nodes.push(node));
        nodes
    }

    /// Find the first node (depth-first) with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        self.descendants()
            .into_iter()
            .find(|node| node.name() == Some(id))
    }

    /// Every id in the tree, in depth-first order. Duplicates are kept.
    pub fn ids(&self) -> Vec<&str> {
        self.descendants()
            .into_iter()
            .filter_map(|node| node.name())
            .collect()
    }

    /// Every button in the tree, in depth-first order.
    pub fn buttons(&self) -> Vec<&Button> {
        self.descendants()
            .into_iter()
            .filter_map(Node::as_button)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::node::{Element, ElementExt};
    use crate::dom::sequence::NodeSequence;
    use crate::elements::{Button, Container, Heading, Text};

    /// ```text
    /// tabs (div)         pageOne (div)
    ///  ├─ showPageOne     ├─ heading (h1)
    ///  └─ showPageTwo     └─ inner (div)
    ///                         └─ button1
    /// ```
    fn build_tree() -> NodeSequence {
        NodeSequence::new()
            .with(
                Container::new()
                    .with_id("tabs")
                    .with_child(Button::new("Page One").with_on_click("showPageOne").with_id("showPageOne"))
                    .with_child(Button::new("Page Two").with_on_click("showPageTwo").with_id("showPageTwo")),
            )
            .with(
                Container::new()
                    .with_id("pageOne")
                    .with_child(Heading::new("Clicks: 0").with_id("heading"))
                    .with_child(
                        Container::new()
                            .with_id("inner")
                            .with_child(Button::new("Count").with_on_click("doButtonOne").with_id("button1")),
                    ),
            )
    }

    #[test]
    fn walk_is_depth_first_preorder() {
        let tree = build_tree();
        assert_eq!(
            tree.ids(),
            vec!["tabs", "showPageOne", "showPageTwo", "pageOne", "heading", "inner", "button1"]
        );
    }

    #[test]
    fn descendants_counts_all_nodes() {
        assert_eq!(build_tree().descendants().len(), 7);
    }

    #[test]
    fn find_by_id_nested() {
        let tree = build_tree();
        let node = tree.find_by_id("button1").unwrap();
        assert_eq!(node.tag(), "button");
        assert!(tree.find_by_id("missing").is_none());
    }

    #[test]
    fn ids_keep_duplicates() {
        let tree = NodeSequence::new()
            .with(Text::new("a").with_id("dup"))
            .with(Text::new("b").with_id("dup"));
        assert_eq!(tree.ids(), vec!["dup", "dup"]);
    }

    #[test]
    fn buttons_in_order() {
        let tree = build_tree();
        let callbacks: Vec<_> = tree.buttons().into_iter().map(Button::callback).collect();
        assert_eq!(callbacks, vec!["showPageOne", "showPageTwo", "doButtonOne"]);
    }
}
