//! Heading element: `<h1>` … `<h6>`.

use crate::dom::markup::{escape_text, write_close_tag, write_open_tag};
use crate::dom::node::{Attrs, Element};

const TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// A section heading. Levels outside 1–6 are clamped into range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    attrs: Attrs,
    level: u8,
    text: String,
}

impl Heading {
    /// Create a level-1 heading.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            attrs: Attrs::default(),
            level: 1,
            text: text.into(),
        }
    }

    /// Set the heading level, clamped to 1–6 (builder pattern).
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level.clamp(1, 6);
        self
    }

    /// Return the heading level (1–6).
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Return the heading text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Element for Heading {
    fn tag(&self) -> &'static str {
        TAGS[usize::from(self.level - 1)]
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
