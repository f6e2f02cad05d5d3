//! Attribute options
//!
//! Components build their element attributes by applying a list of default
//! options followed by the caller's options to a fresh [`Attributes`] map.
//! Class-like attributes are merged as whitespace separated token sets, so a
//! caller can add classes to a component without knowing its defaults.

use indexmap::{IndexMap, IndexSet};

/// A single attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    Bool(bool),
    Int(i64),
}

impl AttrValue {
    /// Text content, if this is a text value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        AttrValue::Int(n)
    }
}

/// Attributes of one HTML element, in insertion order
pub type Attributes = IndexMap<String, AttrValue>;

/// Something that mutates an element's attributes
pub trait AttrOption {
    fn apply(&self, attrs: &mut Attributes);
}

impl<F> AttrOption for F
where
    F: Fn(&mut Attributes),
{
    fn apply(&self, attrs: &mut Attributes) {
        self(attrs)
    }
}

/// Structured options accepted by every component
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub id: String,
    pub classes: Vec<String>,
    /// Copied verbatim into the attribute map
    pub style: IndexMap<String, AttrValue>,
}

impl Options {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl AttrOption for Options {
    fn apply(&self, attrs: &mut Attributes) {
        if !self.id.is_empty() {
            attrs.insert("id".to_string(), AttrValue::Text(self.id.clone()));
        }
        if !self.classes.is_empty() {
            let merged = merge_attr(text_attr(attrs, "class"), &self.classes);
            attrs.insert("class".to_string(), AttrValue::Text(merged));
        }
        for (key, value) in &self.style {
            attrs.insert(key.clone(), value.clone());
        }
    }
}

/// Option that sets or merges name/value pairs
#[derive(Debug, Clone)]
pub struct WithAttrs {
    pairs: Vec<(String, String)>,
}

impl AttrOption for WithAttrs {
    fn apply(&self, attrs: &mut Attributes) {
        for (name, value) in &self.pairs {
            let merged = match attrs.get(name) {
                None => value.clone(),
                Some(existing) => {
                    merge_attr(existing.as_str().unwrap_or(""), std::slice::from_ref(value))
                }
            };
            attrs.insert(name.clone(), AttrValue::Text(merged));
        }
    }
}

/// Build an option from alternating name, value tokens.
///
/// Every pair is set when the attribute is absent and merged into the
/// existing value otherwise.
///
/// # Panics
///
/// Panics if `pairs` has an odd length.
pub fn with_attrs<S: AsRef<str>>(pairs: &[S]) -> WithAttrs {
    if pairs.len() % 2 != 0 {
        panic!("odd attrs: expected name/value pairs, got {} tokens", pairs.len());
    }
    WithAttrs {
        pairs: pairs
            .chunks_exact(2)
            .map(|pair| (pair[0].as_ref().to_string(), pair[1].as_ref().to_string()))
            .collect(),
    }
}

/// Option that adds CSS classes
pub fn class<S: AsRef<str>>(classes: &[S]) -> WithAttrs {
    let joined = classes
        .iter()
        .map(|c| c.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    with_attrs(&["class", joined.as_str()])
}

/// Apply `defaults` then `opts` to an empty attribute map
pub fn new_attrs(opts: &[&dyn AttrOption], defaults: &[&dyn AttrOption]) -> Attributes {
    let mut attrs = Attributes::new();
    for option in defaults.iter().chain(opts) {
        option.apply(&mut attrs);
    }
    attrs
}

/// Union of whitespace separated tokens, existing tokens first
pub fn merge_attr<S: AsRef<str>>(existing: &str, new: &[S]) -> String {
    let tokens: IndexSet<&str> = existing
        .split_whitespace()
        .chain(new.iter().flat_map(|v| v.as_ref().split_whitespace()))
        .collect();
    tokens.into_iter().collect::<Vec<_>>().join(" ")
}

fn text_attr<'a>(attrs: &'a Attributes, name: &str) -> &'a str {
    attrs.get(name).and_then(AttrValue::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn tokens(attrs: &Attributes, name: &str) -> BTreeSet<String> {
        text_attr(attrs, name)
            .split_whitespace()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_class_merge_deduplicates() {
        let attrs = new_attrs(&[&class(&["b", "c"])], &[&class(&["a", "b"])]);
        let expected: BTreeSet<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(tokens(&attrs, "class"), expected);
        assert_eq!(text_attr(&attrs, "class"), "a b c");
    }

    #[test]
    fn test_class_is_idempotent() {
        let once = new_attrs(&[], &[&class(&["x", "y"])]);
        let twice = new_attrs(&[&class(&["y", "x"])], &[&class(&["x", "y"])]);
        assert_eq!(tokens(&once, "class"), tokens(&twice, "class"));
    }

    #[test]
    fn test_merge_attr_drops_empty_tokens() {
        assert_eq!(merge_attr("  a  b ", &["b  c", "", " "]), "a b c");
        assert_eq!(merge_attr("", &["a a a"]), "a");
        assert_eq!(merge_attr::<&str>("", &[]), "");
    }

    #[test]
    fn test_merge_attr_with_itself() {
        assert_eq!(merge_attr("p q r", &["p q r"]), "p q r");
    }

    #[test]
    fn test_with_attrs_processes_every_pair() {
        let defaults = with_attrs(&["rel", "noopener", "href", "/"]);
        let attrs = new_attrs(&[&with_attrs(&["rel", "noreferrer", "target", "_blank"])], &[&defaults]);
        assert_eq!(text_attr(&attrs, "rel"), "noopener noreferrer");
        assert_eq!(text_attr(&attrs, "href"), "/");
        assert_eq!(text_attr(&attrs, "target"), "_blank");
    }

    #[test]
    #[should_panic(expected = "odd attrs")]
    fn test_with_attrs_odd_length_panics() {
        with_attrs(&["href", "/", "rel"]);
    }

    #[test]
    #[should_panic(expected = "odd attrs")]
    fn test_with_attrs_single_token_panics() {
        with_attrs(&["class"]);
    }

    #[test]
    fn test_options_last_id_wins() {
        let first = Options::with_id("first");
        let second = Options::with_id("second");
        let attrs = new_attrs(&[&second], &[&first]);
        assert_eq!(text_attr(&attrs, "id"), "second");
    }

    #[test]
    fn test_options_empty_id_is_absent() {
        let opts = Options {
            classes: vec!["card".to_string()],
            ..Default::default()
        };
        let attrs = new_attrs(&[&opts], &[]);
        assert!(!attrs.contains_key("id"));
        assert_eq!(text_attr(&attrs, "class"), "card");
    }

    #[test]
    fn test_options_empty_id_keeps_previous() {
        let attrs = new_attrs(&[&Options::default()], &[&Options::with_id("keep")]);
        assert_eq!(text_attr(&attrs, "id"), "keep");
    }

    #[test]
    fn test_options_style_copied_verbatim() {
        let mut style = IndexMap::new();
        style.insert("style".to_string(), AttrValue::from("color: red"));
        style.insert("tabindex".to_string(), AttrValue::from(0i64));
        style.insert("hidden".to_string(), AttrValue::from(true));
        let opts = Options {
            style,
            ..Default::default()
        };
        let attrs = new_attrs(&[&opts], &[&with_attrs(&["style", "color: blue"])]);
        assert_eq!(attrs.get("style"), Some(&AttrValue::from("color: red")));
        assert_eq!(attrs.get("tabindex"), Some(&AttrValue::Int(0)));
        assert_eq!(attrs.get("hidden"), Some(&AttrValue::Bool(true)));
    }

    #[test]
    fn test_options_classes_merge_with_defaults() {
        let opts = Options {
            classes: vec!["wide post".to_string(), "post".to_string()],
            ..Default::default()
        };
        let attrs = new_attrs(&[&opts], &[&class(&["post"])]);
        assert_eq!(text_attr(&attrs, "class"), "post wide");
    }

    #[test]
    fn test_merge_over_non_text_value() {
        let mut style = IndexMap::new();
        style.insert("data-count".to_string(), AttrValue::Int(3));
        let opts = Options {
            style,
            ..Default::default()
        };
        let attrs = new_attrs(&[&with_attrs(&["data-count", "four"])], &[&opts]);
        assert_eq!(text_attr(&attrs, "data-count"), "four");
    }

    #[test]
    fn test_closure_option() {
        let disable = |attrs: &mut Attributes| {
            attrs.insert("disabled".to_string(), AttrValue::Bool(true));
        };
        let attrs = new_attrs(&[&disable], &[]);
        assert_eq!(attrs.get("disabled"), Some(&AttrValue::Bool(true)));
    }

    #[test]
    fn test_plain_attribute_last_write_wins() {
        let close = |attrs: &mut Attributes| {
            attrs.insert("href".to_string(), AttrValue::from("/blog.html"));
        };
        let attrs = new_attrs(&[&close], &[&with_attrs(&["href", "/"])]);
        assert_eq!(text_attr(&attrs, "href"), "/blog.html");
    }
}
