//! Script element: inline source and/or an external `src`.
//!
//! Script source is written verbatim. It is not HTML-escaped.

use crate::dom::markup::{write_close_tag, write_open_tag};
use crate::dom::node::{Attrs, Element};

/// A `<script>` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    attrs: Attrs,
    code: String,
    src: Option<String>,
}

impl Script {
    /// Create an inline script.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    /// Create a script that loads from a URL.
    pub fn external(src: impl Into<String>) -> Self {
        Self::new("").with_src(src)
    }

    /// Set the external source URL (builder pattern).
    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    /// Return the inline source.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Return the external source URL, if any.
    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }
}

impl Element for Script {
    fn tag(&self) -> &'static str {
        "script"
    }

    fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }

    fn render_into(&self, out: &mut String) {
        match self.src.as_deref() {
            Some(src) => write_open_tag(out, self.tag(), &self.attrs, &[("src", src)], false),
            None => write_open_tag(out, self.tag(), &self.attrs, &[], false),
        }
        out.push_str(&self.code);
        write_close_tag(out, self.tag());
    }
}
