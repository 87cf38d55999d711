//! Title element: the document `<title>`.

use crate::dom::markup::{escape_text, write_close_tag, write_open_tag};
use crate::dom::node::{Attrs, Element};

/// Document title. Belongs in the head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Title {
    attrs: Attrs,
    text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            attrs: Attrs::default(),
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Element for Title {
    fn tag(&self) -> &'static str {
        "title"
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
