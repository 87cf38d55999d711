//! Full-page document assembly and the `data:` URL handed to the runtime.

use crate::dom::{Element, NodeSequence};
use crate::elements::{StyleSheetLink, Title};

const DOCTYPE: &str = "<!DOCTYPE html>";
const DATA_URL_PREFIX: &str = "data:text/html,";

/// A borrowed view of everything that goes into one HTML page.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    title: Option<&'a str>,
    stylesheet: Option<&'a str>,
    head: &'a NodeSequence,
    body: &'a NodeSequence,
}

impl<'a> Document<'a> {
    pub fn new(head: &'a NodeSequence, body: &'a NodeSequence) -> Self {
        Self {
            title: None,
            stylesheet: None,
            head,
            body,
        }
    }

    /// Emit a `<title>` first in the head (builder).
    pub fn with_title(mut self, title: Option<&'a str>) -> Self {
        self.title = title;
        self
    }

    /// Link an external stylesheet right after the title (builder).
    pub fn with_stylesheet(mut self, href: Option<&'a str>) -> Self {
        self.stylesheet = href;
        self
    }

    /// Serialize the whole page.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(256);
        out.push_str(DOCTYPE);
        out.push_str("<html><head>");
        if let Some(title) = self.title {
            Title::new(title).render_into(&mut out);
        }
        if let Some(href) = self.stylesheet {
            StyleSheetLink::new(href).render_into(&mut out);
        }
        self.head.render_into(&mut out);
        out.push_str("</head><body>");
        self.body.render_into(&mut out);
        out.push_str("</body></html>");
        out
    }

    /// The page as a `data:text/html,` URI, percent-encoded.
    pub fn to_data_url(&self) -> String {
        data_url(&self.render())
    }
}

/// Wrap already rendered markup in a `data:text/html,` URI.
pub fn data_url(markup: &str) -> String {
    let encoded = urlencoding::encode(markup);
    let mut url = String::with_capacity(DATA_URL_PREFIX.len() + encoded.len());
    url.push_str(DATA_URL_PREFIX);
    url.push_str(&encoded);
    url
}
