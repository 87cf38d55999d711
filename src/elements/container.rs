//! Container element: a `<div>` holding a nested node sequence.

use crate::dom::markup::{write_close_tag, write_open_tag};
use crate::dom::node::{Attrs, Element, Node};
use crate::dom::sequence::NodeSequence;

// ---------------------------------------------------------------------------
// Container
// ---------------------------------------------------------------------------

/// A `<div>` that owns an ordered list of children.
///
/// # Examples
///
/// ```ignore
/// use dali::elements::{Button, Container};
/// use dali::dom::ElementExt;
///
/// let tabs = Container::new()
///     .with_id("tabs")
///     .with_child(Button::new("Page One").with_on_click("showPageOne"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    attrs: Attrs,
    children: NodeSequence,
}

impl Container {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child (builder pattern).
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.append(child);
        self
    }

    /// Append every node of a sequence as children (builder pattern).
    pub fn with_children(mut self, children: NodeSequence) -> Self {
        self.children.extend(children);
        self
    }

    /// Add a child in place.
    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.append(child);
    }

    /// Borrow the children.
    pub fn children_ref(&self) -> &NodeSequence {
        &self.children
    }

    /// The number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl From<NodeSequence> for Container {
    fn from(children: NodeSequence) -> Self {
        Self {
            attrs: Attrs::default(),
            children,
        }
    }
}

impl Element for Container {
    fn tag(&self) -> &'static str {
        "div"
    }

    fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }

    fn render_into(&self, out: &mut String) {
        write_open_tag(out, self.tag(), &self.attrs, &[], false);
        self.children.render_into(out);
        write_close_tag(out, self.tag());
    }

    fn children(&self) -> Option<&NodeSequence> {
        Some(&self.children)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::ElementExt;
    use crate::elements::{Button, Text};

    #[test]
    fn empty_container() {
        let c = Container::new();
        assert_eq!(c.child_count(), 0);
        assert_eq!(c.render(), "<div></div>");
    }

    #[test]
    fn renders_children_in_order() {
        let c = Container::new()
            .with_child(Text::new("a"))
            .with_child(Text::new("b"));
        assert_eq!(c.render(), "<div><span>a</span><span>b</span></div>");
    }

    #[test]
    fn push_in_place() {
        let mut c = Container::new();
        c.push(Text::new("x"));
        assert_eq!(c.child_count(), 1);
        assert_eq!(c.children_ref().len(), 1);
    }

    #[test]
    fn renders_attrs() {
        let c = Container::new()
            .with_id("pageTwo")
            .with_style_property("visibility", "hidden")
            .with_child(Button::new("b").with_on_click("cb"));
        assert_eq!(
            c.render(),
            r#"<div id="pageTwo" style="visibility:hidden;"><button onclick="cb()">b</button></div>"#
        );
    }

    #[test]
    fn tag_and_children_capabilities() {
        let c = Container::new().with_child(Text::new("a"));
        assert_eq!(c.tag(), "div");
        assert_eq!(c.children().map(NodeSequence::len), Some(1));
        assert!(!c.is_interactive());
    }

    #[test]
    fn sequence_embeds_as_children() {
        let seq = NodeSequence::new().with(Text::new("a")).with(Text::new("b"));
        let wrapped = Container::from(seq.clone()).with_id("pane");
        assert_eq!(wrapped.render(), format!(r#"<div id="pane">{}</div>"#, seq.render()));
        let appended = Container::new().with_child(Text::new("first")).with_children(seq);
        assert_eq!(appended.child_count(), 3);
    }
}
