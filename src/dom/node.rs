//! Node types: the `Element` capability trait, shared `Attrs`, and the closed
//! `Node` enum over every element variant.

use crate::elements::{
    Button, Canvas, Container, Heading, LineBreak, Script, StyleSheetLink, Text, Title,
};
use crate::style::StyleSet;

use super::sequence::NodeSequence;

// ---------------------------------------------------------------------------
// Attrs
// ---------------------------------------------------------------------------

/// Attributes common to every element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    /// Stable identifier, used by generated scripts for DOM lookups.
    pub id: Option<String>,
    /// CSS class name.
    pub class: Option<String>,
    /// Inline style. Omitted from markup when empty.
    pub style: StyleSet,
}

// ---------------------------------------------------------------------------
// Element trait
// ---------------------------------------------------------------------------

/// Capability set shared by all elements.
///
/// Rendering is pure: the same element always produces the same markup.
pub trait Element {
    /// HTML tag name (e.g. `"button"`, `"div"`).
    fn tag(&self) -> &'static str;

    /// Shared attributes.
    fn attrs(&self) -> &Attrs;

    /// Shared attributes, mutably.
    fn attrs_mut(&mut self) -> &mut Attrs;

    /// Append this element's markup to `out`.
    fn render_into(&self, out: &mut String);

    /// Render this element to a fresh string.
    fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Class name, if set.
    fn class(&self) -> Option<&str> {
        self.attrs().class.as_deref()
    }

    /// Rendered inline style; empty when no properties are set.
    fn inline_style(&self) -> String {
        self.attrs().style.render()
    }

    /// Identifying name (the element id), if set.
    fn name(&self) -> Option<&str> {
        self.attrs().id.as_deref()
    }

    /// Whether the element accepts a click. Only buttons do.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Nested children, for elements that hold a sequence.
    fn children(&self) -> Option<&NodeSequence> {
        None
    }
}

// ---------------------------------------------------------------------------
// ElementExt
// ---------------------------------------------------------------------------

/// Builder-style setters for the shared attributes.
///
/// Automatically implemented for every `Element`.
pub trait ElementExt: Element {
    /// Set the element id (builder).
    fn with_id(mut self, id: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.attrs_mut().id = Some(id.into());
        self
    }

    /// Set the class name (builder).
    fn with_class(mut self, class: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.attrs_mut().class = Some(class.into());
        self
    }

    /// Replace the whole style set (builder).
    fn with_style(mut self, style: StyleSet) -> Self
    where
        Self: Sized,
    {
        self.attrs_mut().style = style;
        self
    }

    /// Set a single style property (builder).
    fn with_style_property(mut self, property: impl Into<String>, value: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.attrs_mut().style.set(property, value);
        self
    }
}

impl<T: Element> ElementExt for T {}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A single typed UI element. The set of variants is closed.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Container(Container),
    Button(Button),
    Text(Text),
    Heading(Heading),
    Canvas(Canvas),
    Script(Script),
    Title(Title),
    StyleSheetLink(StyleSheetLink),
    LineBreak(LineBreak),
}

impl Node {
    fn as_element(&self) -> &dyn Element {
        match self {
            Node::Container(e) => e,
            Node::Button(e) => e,
            Node::Text(e) => e,
            Node::Heading(e) => e,
            Node::Canvas(e) => e,
            Node::Script(e) => e,
            Node::Title(e) => e,
            Node::StyleSheetLink(e) => e,
            Node::LineBreak(e) => e,
        }
    }

    fn as_element_mut(&mut self) -> &mut dyn Element {
        match self {
            Node::Container(e) => e,
            Node::Button(e) => e,
            Node::Text(e) => e,
            Node::Heading(e) => e,
            Node::Canvas(e) => e,
            Node::Script(e) => e,
            Node::Title(e) => e,
            Node::StyleSheetLink(e) => e,
            Node::LineBreak(e) => e,
        }
    }

    /// The button payload, if this node is a button.
    pub fn as_button(&self) -> Option<&Button> {
        match self {
            Node::Button(button) => Some(button),
            _ => None,
        }
    }
}

impl Element for Node {
    fn tag(&self) -> &'static str {
        self.as_element().tag()
    }

    fn attrs(&self) -> &Attrs {
        self.as_element().attrs()
    }

    fn attrs_mut(&mut self) -> &mut Attrs {
        self.as_element_mut().attrs_mut()
    }

    fn render_into(&self, out: &mut String) {
        self.as_element().render_into(out);
    }

    fn is_interactive(&self) -> bool {
        self.as_element().is_interactive()
    }

    fn children(&self) -> Option<&NodeSequence> {
        self.as_element().children()
    }
}

macro_rules! impl_from_element {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(element: $variant) -> Self {
                    Node::$variant(element)
                }
            }
        )*
    };
}

impl_from_element!(
    Container,
    Button,
    Text,
    Heading,
    Canvas,
    Script,
    Title,
    StyleSheetLink,
    LineBreak,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_delegates_capabilities() {
        let node: Node = Button::new("Go")
            .with_on_click("doGo")
            .with_id("go")
            .with_class("primary")
            .into();
        assert_eq!(node.tag(), "button");
        assert_eq!(node.name(), Some("go"));
        assert_eq!(node.class(), Some("primary"));
        assert!(node.is_interactive());
        assert!(node.children().is_none());
    }

    #[test]
    fn only_buttons_are_interactive() {
        let nodes: Vec<Node> = vec![
            Container::new().into(),
            Text::new("t").into(),
            Heading::new("h").into(),
            Canvas::new().into(),
            Script::new("").into(),
            Title::new("t").into(),
            StyleSheetLink::new("a.css").into(),
            LineBreak::new().into(),
        ];
        assert!(nodes.iter().all(|n| !n.is_interactive()));
        assert!(Node::from(Button::new("b")).is_interactive());
    }

    #[test]
    fn inline_style_through_node() {
        let node: Node = Text::new("x").with_style_property("color", "red").into();
        assert_eq!(node.inline_style(), "color:red;");
    }

    #[test]
    fn empty_inline_style() {
        let node: Node = Text::new("x").into();
        assert_eq!(node.inline_style(), "");
    }

    #[test]
    fn attrs_mut_through_node() {
        let mut node: Node = Canvas::new().into();
        node.attrs_mut().id = Some("whiteboard".into());
        assert_eq!(node.name(), Some("whiteboard"));
    }

    #[test]
    fn as_button() {
        let node: Node = Button::new("b").with_on_click("cb").into();
        assert_eq!(node.as_button().map(Button::callback), Some("cb"));
        assert!(Node::from(Text::new("t")).as_button().is_none());
    }

    #[test]
    fn container_exposes_children() {
        let node: Node = Container::new().with_child(Text::new("a")).into();
        assert_eq!(node.children().map(NodeSequence::len), Some(1));
    }
}
