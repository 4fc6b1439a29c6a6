//! Document provider seam
//!
//! The extractor only needs a handful of selector lookups. They are expressed
//! as a trait so the engine can run against synthetic documents in tests and
//! against `scraper` in production.

use log::warn;
use scraper::{Html, Selector};

/// Selector operations the extractor relies on.
///
/// Every method is total: a selector that matches nothing yields `None` or `0`.
pub trait DocumentQuery {
    /// Concatenated text of every element matching `selector`
    fn text(&self, selector: &str) -> Option<String>;

    /// Attribute `name` of the first element matching `selector`
    fn attr(&self, selector: &str, name: &str) -> Option<String>;

    /// Text of the first element matching `selector`
    fn inner_text(&self, selector: &str) -> Option<String>;

    /// Number of elements matching `selector`
    fn count(&self, selector: &str) -> usize;
}

/// `scraper`-backed document
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse markup. Malformed input never fails; html5ever recovers the same
    /// way a browser would.
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    fn selector(selector: &str) -> Option<Selector> {
        match Selector::parse(selector) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                warn!("unable to parse selector {selector:?}: {err}");
                None
            }
        }
    }
}

impl DocumentQuery for HtmlDocument {
    fn text(&self, selector: &str) -> Option<String> {
        let selector = Self::selector(selector)?;
        let mut matched = false;
        let mut text = String::new();
        for element in self.html.select(&selector) {
            matched = true;
            text.extend(element.text());
        }
        matched.then_some(text)
    }

    fn attr(&self, selector: &str, name: &str) -> Option<String> {
        let selector = Self::selector(selector)?;
        self.html
            .select(&selector)
            .next()
            .and_then(|element| element.value().attr(name))
            .map(str::to_string)
    }

    fn inner_text(&self, selector: &str) -> Option<String> {
        let selector = Self::selector(selector)?;
        self.html
            .select(&selector)
            .next()
            .map(|element| element.text().collect::<String>())
    }

    fn count(&self, selector: &str) -> usize {
        Self::selector(selector)
            .map(|selector| self.html.select(&selector).count())
            .unwrap_or(0)
    }
}
