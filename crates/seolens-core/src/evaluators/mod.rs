//! Tag evaluators
//!
//! One pure function per tag type turns a raw, possibly absent, value into a
//! classified [`Finding`]. Evaluators are looked up through an explicit
//! registry, so adding a tag type only means adding an entry here; the
//! section, score and recommendation stages work off statuses alone.
//!
//! Evaluators never fail. Absence and malformed content are both classified
//! outcomes.

pub mod basic;
pub mod social;
pub mod technical;

use std::collections::HashMap;

use log::{debug, warn};
use once_cell::sync::Lazy;
use url::Url;

use crate::extractor::RawTagValues;
use crate::types::{Finding, Status, TagType};

/// Everything an evaluator may need besides the raw value
#[derive(Debug, Clone)]
pub struct EvalContext {
    pub page_url: Url,
}

impl EvalContext {
    pub fn new(page_url: Url) -> Self {
        Self { page_url }
    }
}

/// Signature shared by every evaluator
pub type Evaluator = fn(Option<&str>, &EvalContext) -> Finding;

static REGISTRY: Lazy<HashMap<TagType, Evaluator>> = Lazy::new(|| {
    let entries: [(TagType, Evaluator); 20] = [
        (TagType::Title, basic::evaluate_title),
        (TagType::Description, basic::evaluate_description),
        (TagType::Viewport, basic::evaluate_viewport),
        (TagType::Robots, basic::evaluate_robots),
        (TagType::OgTitle, social::evaluate_og_title),
        (TagType::OgDescription, social::evaluate_og_description),
        (TagType::OgImage, social::evaluate_og_image),
        (TagType::OgUrl, social::evaluate_og_url),
        (TagType::OgType, social::evaluate_og_type),
        (TagType::OgSiteName, social::evaluate_og_site_name),
        (TagType::TwitterCard, social::evaluate_twitter_card),
        (TagType::TwitterTitle, social::evaluate_twitter_title),
        (TagType::TwitterDescription, social::evaluate_twitter_description),
        (TagType::TwitterImage, social::evaluate_twitter_image),
        (TagType::TwitterSite, social::evaluate_twitter_site),
        (TagType::TwitterCreator, social::evaluate_twitter_creator),
        (TagType::Canonical, technical::evaluate_canonical),
        (TagType::Hreflang, technical::evaluate_hreflang),
        (TagType::Schema, technical::evaluate_schema),
        (TagType::OpenSearch, technical::evaluate_open_search),
    ];
    entries.into_iter().collect()
});

/// Evaluator registered for `tag`
pub fn evaluator(tag: TagType) -> Option<Evaluator> {
    REGISTRY.get(&tag).copied()
}

/// Classify one tag. Empty raw values are treated as absent.
pub fn evaluate(tag: TagType, raw: Option<&str>, ctx: &EvalContext) -> Finding {
    let raw = raw.filter(|value| !value.is_empty());

    let finding = match evaluator(tag) {
        Some(evaluate) => evaluate(raw, ctx),
        None => {
            warn!("no evaluator registered for {tag}");
            ungraded(tag, raw)
        }
    };

    debug!("{tag}: {:?} ({})", finding.status, finding.status_text);
    finding
}

/// Classify every tag in `tags`, in the given order
pub fn evaluate_all(raw: &RawTagValues, ctx: &EvalContext, tags: &[TagType]) -> Vec<Finding> {
    tags.iter()
        .map(|&tag| evaluate(tag, raw.get(tag), ctx))
        .collect()
}

fn ungraded(tag: TagType, raw: Option<&str>) -> Finding {
    Finding {
        tag,
        name: tag.as_str().to_string(),
        content: raw.map(str::to_string),
        status: Status::NotApplicable,
        status_text: "N/A".to_string(),
        description: String::new(),
        best_practices: Vec::new(),
        recommendation: None,
    }
}

/// Static display data shared by every outcome of one evaluator
pub(crate) struct TagProfile {
    pub tag: TagType,
    pub name: &'static str,
    pub description: &'static str,
    pub best_practices: &'static [&'static str],
}

impl TagProfile {
    /// Finding for a tag that is present in the document
    pub fn finding(&self, content: &str, status: Status, status_text: &str) -> Finding {
        Finding {
            tag: self.tag,
            name: self.name.to_string(),
            content: Some(content.to_string()),
            status,
            status_text: status_text.to_string(),
            description: self.description.to_string(),
            best_practices: self.best_practices.iter().map(|s| s.to_string()).collect(),
            recommendation: None,
        }
    }

    /// Finding for a tag absent from the document
    pub fn missing(&self, recommendation: impl Into<String>) -> Finding {
        Finding {
            content: None,
            ..self.finding("", Status::Missing, "Missing")
        }
        .recommend(recommendation)
    }

    /// Present → optimal/"Present", absent → missing
    pub fn presence(&self, raw: Option<&str>, add_tag: impl Into<String>) -> Finding {
        match raw {
            Some(content) => self.finding(content, Status::Optimal, "Present"),
            None => self.missing(add_tag),
        }
    }
}

impl Finding {
    pub(crate) fn recommend(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }

    pub(crate) fn with_best_practices<I, S>(mut self, practices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.best_practices = practices.into_iter().map(Into::into).collect();
        self
    }
}

/// Length in characters, not bytes
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
pub(crate) fn test_context() -> EvalContext {
    EvalContext::new(Url::parse("https://x.com/page").unwrap())
}
