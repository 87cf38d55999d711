//! Stylesheet link element: `<link rel="stylesheet" href="...">`.

use crate::dom::markup::write_open_tag;
use crate::dom::node::{Attrs, Element};

/// Reference to an external stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheetLink {
    attrs: Attrs,
    href: String,
}

impl StyleSheetLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            attrs: Attrs::default(),
            href: href.into(),
        }
    }

    pub fn href(&self) -> &str {
        &self.href
    }
}

impl Element for StyleSheetLink {
    fn tag(&self) -> &'static str {
        "link"
    }

    fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }

    fn render_into(&self, out: &mut String) {
        write_open_tag(
            out,
            self.tag(),
            &self.attrs,
            &[("rel", "stylesheet"), ("href", &self.href)],
            false,
        );
    }
}
