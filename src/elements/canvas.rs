//! Canvas element: a fixed-size drawing surface for scripts.

use crate::dom::markup::{write_close_tag, write_open_tag};
use crate::dom::node::{Attrs, Element};

/// Browser default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 300;
/// Browser default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 150;

/// A `<canvas>` with pixel dimensions.
///
/// Canvases need an id to be drawn on, see [`crate::script::draw_line`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    attrs: Attrs,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create a canvas with the browser default size (300×150).
    pub fn new() -> Self {
        Self::sized(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Create a canvas with the given size in pixels.
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            attrs: Attrs::default(),
            width,
            height,
        }
    }

    /// Set the width in pixels (builder pattern).
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set the height in pixels (builder pattern).
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for Canvas {
    fn tag(&self) -> &'static str {
        "canvas"
    }

    fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }

    fn render_into(&self, out: &mut String) {
        let width = self.width.to_string();
        let height = self.height.to_string();
        write_open_tag(
            out,
            self.tag(),
            &self.attrs,
            &[("width", &width), ("height", &height)],
            false,
        );
        write_close_tag(out, self.tag());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::ElementExt;

    #[test]
    fn default_size() {
        let c = Canvas::new();
        assert_eq!((c.width(), c.height()), (300, 150));
        assert_eq!(c.render(), r#"<canvas width="300" height="150"></canvas>"#);
    }

    #[test]
    fn sized_with_id_and_style() {
        let c = Canvas::sized(600, 400)
            .with_id("whiteboard")
            .with_style_property("border", "1px solid #000000");
        assert_eq!(
            c.render(),
            r#"<canvas id="whiteboard" style="border:1px solid #000000;" width="600" height="400"></canvas>"#
        );
    }

    #[test]
    fn builder_dimensions() {
        let c = Canvas::new().with_width(10).with_height(20);
        assert_eq!((c.width(), c.height()), (10, 20));
    }
}
