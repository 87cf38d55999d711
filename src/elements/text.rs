//! Text elements: inline `<span>` text and the `<br/>` line break.

use crate::dom::markup::{escape_text, write_close_tag, write_open_tag};
use crate::dom::node::{Attrs, Element};

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// Fixed inline text, rendered as a `<span>`.
///
/// Give it an id to rewrite its content later from a script
/// (see [`crate::script::set_inner_html`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    attrs: Attrs,
    text: String,
}

impl Text {
    /// Create a text node.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            attrs: Attrs::default(),
            text: text.into(),
        }
    }

    /// Return the text content.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Element for Text {
    fn tag(&self) -> &'static str {
        "span"
    }

    fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }

    fn render_into(&self, out: &mut String) {
        write_open_tag(out, self.tag(), &self.attrs, &[], false);
        out.push_str(&escape_text(&self.text));
        write_close_tag(out, self.tag());
    }
}

// ---------------------------------------------------------------------------
// LineBreak
// ---------------------------------------------------------------------------

/// A `<br/>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBreak {
    attrs: Attrs,
}

impl LineBreak {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Element for LineBreak {
    fn tag(&self) -> &'static str {
        "br"
    }

    fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }

    fn render_into(&self, out: &mut String) {
        write_open_tag(out, self.tag(), &self.attrs, &[], true);
    }
}
