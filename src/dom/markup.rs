//! Markup writing helpers: escaping and opening tags.
//!
//! Every element funnels its start tag through [`write_open_tag`], which fixes
//! the attribute order (`id`, `class`, `style`, then element-specific ones) so
//! rendering stays deterministic.

use std::borrow::Cow;

use super::node::Attrs;

/// Escape `&`, `<` and `>` in text content.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    escape(text, false)
}

/// Escape `&`, `<`, `>` and `"` in a double-quoted attribute value.
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    escape(value, true)
}

fn escape(input: &str, quotes: bool) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '&' | '<' | '>') || (quotes && c == '"');
    if !input.contains(needs_escape) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Append ` name="value"` with the value attribute-escaped.
pub fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

/// Write `<tag id=".." class=".." style=".." extra..>`.
///
/// Absent ids/classes and empty style sets produce no attribute at all.
/// With `void` set the tag is closed inline (`<br/>`).
pub fn write_open_tag(out: &mut String, tag: &str, attrs: &Attrs, extra: &[(&str, &str)], void: bool) {
    out.push('<');
    out.push_str(tag);
    if let Some(id) = attrs.id.as_deref() {
        write_attr(out, "id", id);
    }
    if let Some(class) = attrs.class.as_deref() {
        write_attr(out, "class", class);
    }
    if !attrs.style.is_empty() {
        write_attr(out, "style", &attrs.style.render());
    }
    for (name, value) in extra {
        write_attr(out, name, value);
    }
    out.push_str(if void { "/>" } else { ">" });
}

/// Write `</tag>`.
pub fn write_close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleSet;

    #[test]
    fn escape_text_borrows_when_clean() {
        assert!(matches!(escape_text("Clicks: 0"), Cow::Borrowed(_)));
    }

    #[test]
    fn escape_text_entities() {
        assert_eq!(escape_text("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape_text("say \"hi\""), "say \"hi\"");
    }

    #[test]
    fn escape_attr_quotes() {
        assert_eq!(escape_attr("say \"hi\""), "say &quot;hi&quot;");
    }

    #[test]
    fn open_tag_without_attrs() {
        let mut out = String::new();
        write_open_tag(&mut out, "div", &Attrs::default(), &[], false);
        assert_eq!(out, "<div>");
    }

    #[test]
    fn open_tag_attribute_order() {
        let attrs = Attrs {
            id: Some("pageOne".into()),
            class: Some("page".into()),
            style: StyleSet::new().with("display", "none"),
        };
        let mut out = String::new();
        write_open_tag(&mut out, "div", &attrs, &[("data-x", "1")], false);
        assert_eq!(
            out,
            r#"<div id="pageOne" class="page" style="display:none;" data-x="1">"#
        );
    }

    #[test]
    fn empty_style_omits_attribute() {
        let attrs = Attrs {
            id: Some("x".into()),
            ..Attrs::default()
        };
        let mut out = String::new();
        write_open_tag(&mut out, "span", &attrs, &[], false);
        assert!(!out.contains("style"));
    }

    #[test]
    fn void_tag() {
        let mut out = String::new();
        write_open_tag(&mut out, "br", &Attrs::default(), &[], true);
        assert_eq!(out, "<br/>");
    }

    #[test]
    fn close_tag() {
        let mut out = String::new();
        write_close_tag(&mut out, "h1");
        assert_eq!(out, "</h1>");
    }
}
