//! Button element: the only interactive variant.
//!
//! A button carries its label and the symbolic name of the binding it
//! invokes. Clicking renders as `onclick="name()"`, which calls the function
//! the runtime installed for that binding.

use crate::dom::markup::{escape_text, write_close_tag, write_open_tag};
use crate::dom::node::{Attrs, Element};

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

/// A clickable button bound to a named callback.
///
/// A button with an empty callback name still renders, without an `onclick`
/// attribute, and does nothing when clicked. The window's validation pass
/// reports such buttons.
///
/// # Examples
///
/// ```ignore
/// let btn = Button::new("I Count Clicks").with_on_click("doButtonOne");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Button {
    attrs: Attrs,
    label: String,
    callback: String,
}

impl Button {
    /// Create a new button with the given label and no callback.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the bound callback name (builder pattern).
    pub fn with_on_click(mut self, callback: impl Into<String>) -> Self {
        self.callback = callback.into();
        self
    }

    /// Return the button label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Return the bound callback name. Empty when the button is inert.
    pub fn callback(&self) -> &str {
        &self.callback
    }

    /// Whether clicking this button reaches a callback name at all.
    pub fn is_inert(&self) -> bool {
        self.callback.trim().is_empty()
    }
}

impl Element for Button {
    fn tag(&self) -> &'static str {
        "button"
    }

    fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }

    fn render_into(&self, out: &mut String) {
        if self.is_inert() {
            write_open_tag(out, self.tag(), &self.attrs, &[], false);
        } else {
            let onclick = format!("{}()", self.callback);
            write_open_tag(out, self.tag(), &self.attrs, &[("onclick", &onclick)], false);
        }
        out.push_str(&escape_text(&self.label));
        write_close_tag(out, self.tag());
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::ElementExt;

    #[test]
    fn accessors() {
        let b = Button::new("Submit").with_on_click("doSubmit");
        assert_eq!(b.label(), "Submit");
        assert_eq!(b.callback(), "doSubmit");
        assert!(!b.is_inert());
    }

    #[test]
    fn renders_onclick() {
        let b = Button::new("I Count Clicks")
            .with_on_click("doButtonOne")
            .with_id("button1");
        assert_eq!(
            b.render(),
            r#"<button id="button1" onclick="doButtonOne()">I Count Clicks</button>"#
        );
    }

    #[test]
    fn empty_callback_renders_inert() {
        let b = Button::new("Nothing");
        assert!(b.is_inert());
        assert_eq!(b.render(), "<button>Nothing</button>");
    }

    #[test]
    fn label_is_escaped() {
        let b = Button::new("<b>&</b>").with_on_click("x");
        assert_eq!(b.render(), r#"<button onclick="x()">&lt;b&gt;&amp;&lt;/b&gt;</button>"#);
    }

    #[test]
    fn is_interactive() {
        assert!(Button::new("x").is_interactive());
    }

    #[test]
    fn class_and_style() {
        let b = Button::new("x")
            .with_class("tab")
            .with_style_property("color", "blue");
        assert_eq!(b.class(), Some("tab"));
        assert_eq!(b.inline_style(), "color:blue;");
        assert_eq!(b.render(), r#"<button class="tab" style="color:blue;">x</button>"#);
    }
}
