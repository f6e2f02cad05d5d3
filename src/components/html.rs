//! HTML serialization helpers

use super::attrs::{AttrValue, Attributes};

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Serialize attributes, each prefixed by a space
///
/// `true` renders the bare attribute name and `false` drops the attribute.
pub fn render_attrs(attrs: &Attributes) -> String {
    let mut out = String::new();
    for (name, value) in attrs {
        match value {
            AttrValue::Bool(false) => {}
            AttrValue::Bool(true) => {
                out.push(' ');
                out.push_str(name);
            }
            AttrValue::Text(s) => {
                out.push_str(&format!(r#" {}="{}""#, name, html_escape(s)));
            }
            AttrValue::Int(n) => {
                out.push_str(&format!(r#" {}="{}""#, name, n));
            }
        }
    }
    out
}

/// Render an element with already rendered children
pub fn element(tag: &str, attrs: &Attributes, children: &str) -> String {
    format!("<{tag}{}>{children}</{tag}>", render_attrs(attrs))
}

/// Render a void element such as `<meta>` or `<link>`
pub fn void_element(tag: &str, attrs: &Attributes) -> String {
    format!("<{tag}{}>", render_attrs(attrs))
}
