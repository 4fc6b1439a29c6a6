//! Raw tag extraction
//!
//! Each tag type has exactly one lookup rule. Lookups never fail: a missing
//! element or an empty attribute both leave the tag absent.

use std::collections::HashMap;

use crate::document::DocumentQuery;
use crate::types::TagType;

/// How a tag's raw value is read from the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupRule {
    /// Concatenated text of the matching elements
    Text(&'static str),
    /// Attribute of the first matching element
    Attr(&'static str, &'static str),
    /// Text of the first matching element
    FirstText(&'static str),
    /// Only the number of matches is surfaced
    Count(&'static str),
}

pub fn lookup_rule(tag: TagType) -> LookupRule {
    use LookupRule::*;

    match tag {
        TagType::Title => Text("title"),
        TagType::Description => Attr(r#"meta[name="description"]"#, "content"),
        TagType::Viewport => Attr(r#"meta[name="viewport"]"#, "content"),
        TagType::Robots => Attr(r#"meta[name="robots"]"#, "content"),
        TagType::Canonical => Attr(r#"link[rel="canonical"]"#, "href"),
        TagType::OgTitle => Attr(r#"meta[property="og:title"]"#, "content"),
        TagType::OgDescription => Attr(r#"meta[property="og:description"]"#, "content"),
        TagType::OgImage => Attr(r#"meta[property="og:image"]"#, "content"),
        TagType::OgUrl => Attr(r#"meta[property="og:url"]"#, "content"),
        TagType::OgType => Attr(r#"meta[property="og:type"]"#, "content"),
        TagType::OgSiteName => Attr(r#"meta[property="og:site_name"]"#, "content"),
        TagType::TwitterCard => Attr(r#"meta[name="twitter:card"]"#, "content"),
        TagType::TwitterTitle => Attr(r#"meta[name="twitter:title"]"#, "content"),
        TagType::TwitterDescription => Attr(r#"meta[name="twitter:description"]"#, "content"),
        TagType::TwitterImage => Attr(r#"meta[name="twitter:image"]"#, "content"),
        TagType::TwitterSite => Attr(r#"meta[name="twitter:site"]"#, "content"),
        TagType::TwitterCreator => Attr(r#"meta[name="twitter:creator"]"#, "content"),
        TagType::Schema => FirstText(r#"script[type="application/ld+json"]"#),
        TagType::Hreflang => Count(r#"link[rel="alternate"][hreflang]"#),
        TagType::OpenSearch => Attr(
            r#"link[rel="search"][type="application/opensearchdescription+xml"]"#,
            "href",
        ),
    }
}

/// Raw, possibly absent, value of every recognized tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTagValues {
    values: HashMap<TagType, String>,
}

impl RawTagValues {
    /// Raw value of `tag`; for hreflang this is the number of alternate links
    pub fn get(&self, tag: TagType) -> Option<&str> {
        self.values.get(&tag).map(String::as_str)
    }

    pub fn hreflang_count(&self) -> usize {
        self.get(TagType::Hreflang)
            .and_then(|count| count.parse().ok())
            .unwrap_or(0)
    }

    /// Record a value; empty strings are treated as absent
    pub fn insert(&mut self, tag: TagType, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&tag);
        } else {
            self.values.insert(tag, value);
        }
    }

    pub fn present(&self) -> impl Iterator<Item = TagType> + '_ {
        TagType::ALL
            .into_iter()
            .filter(|tag| self.values.contains_key(tag))
    }
}

/// Read every tag type from `document`
pub fn extract(document: &impl DocumentQuery) -> RawTagValues {
    let mut raw = RawTagValues::default();

    for tag in TagType::ALL {
        let value = match lookup_rule(tag) {
            LookupRule::Text(selector) => document.text(selector),
            LookupRule::Attr(selector, name) => document.attr(selector, name),
            LookupRule::FirstText(selector) => document.inner_text(selector),
            LookupRule::Count(selector) => match document.count(selector) {
                0 => None,
                count => Some(count.to_string()),
            },
        };

        if let Some(value) = value {
            raw.insert(tag, value);
        }
    }

    raw
}
