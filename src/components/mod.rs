//! Reusable HTML components
//!
//! Every component takes the caller's options and applies them on top of
//! its own defaults, so classes added by the caller are merged with the
//! component's classes instead of replacing them.

mod attrs;
mod html;

pub use attrs::{
    class, merge_attr, new_attrs, with_attrs, AttrOption, AttrValue, Attributes, Options, WithAttrs,
};
pub use html::{element, html_escape, render_attrs, void_element};

use chrono::{DateTime, Utc};

/// An anchor. External links open in a new tab.
pub fn link(href: &str, text: &str, opts: &[&dyn AttrOption]) -> String {
    let target = with_attrs(&["href", href]);
    let attrs = if is_external(href) {
        let external = with_attrs(&["target", "_blank", "rel", "noopener"]);
        new_attrs(opts, &[&target, &external])
    } else {
        new_attrs(opts, &[&target])
    };
    element("a", &attrs, &html_escape(text))
}

/// A heading of the given level, clamped to `h1`..=`h6`
pub fn heading(level: u8, text: &str, opts: &[&dyn AttrOption]) -> String {
    let tag = format!("h{}", level.clamp(1, 6));
    let attrs = new_attrs(opts, &[&class(&["heading"])]);
    element(&tag, &attrs, &html_escape(text))
}

/// A `<time>` element carrying the machine readable timestamp
pub fn time(date: &DateTime<Utc>, opts: &[&dyn AttrOption]) -> String {
    let datetime = date.to_rfc3339();
    let attrs = new_attrs(opts, &[&with_attrs(&["datetime", datetime.as_str()])]);
    element("time", &attrs, &html_escape(&date.format("%B %d, %Y").to_string()))
}

/// A list of tag badges; empty when there are no tags
pub fn tags(tags: &[String], opts: &[&dyn AttrOption]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let item = new_attrs(&[], &[&class(&["tag"])]);
    let items: String = tags
        .iter()
        .map(|t| element("li", &item, &html_escape(t)))
        .collect();
    let attrs = new_attrs(opts, &[&class(&["tags"])]);
    element("ul", &attrs, &items)
}

/// A generic container element with pre-rendered children
pub fn container(tag: &str, children: &str, opts: &[&dyn AttrOption]) -> String {
    element(tag, &new_attrs(opts, &[]), children)
}

fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}
