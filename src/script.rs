//! JavaScript statements for driving a live page through `UiHandle::eval`.
//!
//! Every string that ends up inside a script is encoded as a JSON string
//! literal, which is also a valid JavaScript literal.

use std::fmt::{Display, Write};

use chrono::{DateTime, TimeZone};

/// Encode `text` as a JavaScript string literal, quotes included.
pub fn js_string(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}

/// `document.getElementById("id")`
pub fn get_element(id: &str) -> String {
    format!("document.getElementById({})", js_string(id))
}

/// Replace the inner HTML of the element with identifier `id`.
pub fn set_inner_html(id: &str, html: &str) -> String {
    format!("{}.innerHTML={};", get_element(id), js_string(html))
}

/// Set one inline style property on the element with identifier `id`.
pub fn set_style(id: &str, property: &str, value: &str) -> String {
    format!(
        "{}.style.setProperty({}, {});",
        get_element(id),
        js_string(property),
        js_string(value)
    )
}

/// Make the element displayed and visible.
pub fn show(id: &str) -> String {
    let mut script = set_style(id, "display", "block");
    script.push_str(&set_style(id, "visibility", "visible"));
    script
}

/// Remove the element from layout and hide it.
pub fn hide(id: &str) -> String {
    let mut script = set_style(id, "display", "none");
    script.push_str(&set_style(id, "visibility", "hidden"));
    script
}

fn canvas_context(out: &mut String, canvas_id: &str) {
    let _ = write!(out, "var ctx={}.getContext(\"2d\");", get_element(canvas_id));
}

/// Stroke a straight line on a 2D canvas.
pub fn draw_line(canvas_id: &str, from: (f32, f32), to: (f32, f32)) -> String {
    let mut out = String::from("(function(){");
    canvas_context(&mut out, canvas_id);
    let _ = write!(
        out,
        "ctx.beginPath();ctx.moveTo({:.2},{:.2});ctx.lineTo({:.2},{:.2});ctx.stroke();",
        from.0, from.1, to.0, to.1
    );
    out.push_str("})();");
    out
}

/// Load an image from `url` and paint it at the canvas origin once loaded.
pub fn draw_image(canvas_id: &str, url: &str) -> String {
    let mut out = String::from("(function(){");
    canvas_context(&mut out, canvas_id);
    let _ = write!(
        out,
        "var img=new Image();img.onload=function(){{ctx.drawImage(img,0,0);}};img.src={};",
        js_string(url)
    );
    out.push_str("})();");
    out
}

/// Clock text in RFC 1123 layout, e.g. `Tue, 05 Mar 2024 14:07:09 UTC`.
///
/// The zone is written as `UTC` only for [`chrono::Utc`]. Other zones,
/// including `Local`, print their numeric offset such as `+02:00`.
pub fn format_clock<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format("%a, %d %b %Y %H:%M:%S %Z").to_string()
}
