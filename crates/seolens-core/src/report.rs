//! Assembling the full report
//!
//! Evaluation of individual tags is independent; the rollups below only run
//! once every finding for the page is available.

use std::collections::BTreeMap;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::document::{DocumentQuery, HtmlDocument};
use crate::error::Result;
use crate::evaluators::{EvalContext, evaluate_all};
use crate::extractor::{RawTagValues, extract};
use crate::recommendations::generate_recommendations;
use crate::score::calculate_score;
use crate::sections::build_section;
use crate::types::{AnalysisResult, Category, Finding, Status, TagType};
use crate::url_utils::parse_page_url;

/// Analyze raw markup fetched from `url`. The report echoes `url` as given.
pub fn analyze_html(url: &str, html: &str) -> Result<AnalysisResult> {
    let page_url = parse_page_url(url)?;
    let document = HtmlDocument::parse(html);
    Ok(analyze_document(&page_url, &document).with_url(url))
}

/// Analyze an already parsed document
pub fn analyze_document(page_url: &Url, document: &impl DocumentQuery) -> AnalysisResult {
    let raw = extract(document);
    build_report(page_url, &raw)
}

/// Grade extracted values and derive sections, score and recommendations
pub fn build_report(page_url: &Url, raw: &RawTagValues) -> AnalysisResult {
    let ctx = EvalContext::new(page_url.clone());
    debug!(
        "{page_url}: {} of {} tags found, {} hreflang alternates",
        raw.present().count(),
        TagType::ALL.len(),
        raw.hreflang_count()
    );

    let tags_by_category: BTreeMap<Category, Vec<Finding>> = Category::ALL
        .into_iter()
        .map(|category| (category, evaluate_all(raw, &ctx, category.members())))
        .collect();

    let sections = tags_by_category
        .iter()
        .map(|(&category, findings)| build_section(category, findings.clone()))
        .collect();

    let all: Vec<Finding> = tags_by_category.values().flatten().cloned().collect();
    let count = |wanted: fn(Status) -> bool| all.iter().filter(|f| wanted(f.status)).count();

    let result = AnalysisResult {
        url: page_url.to_string(),
        score: calculate_score(&all),
        present_count: count(Status::is_present),
        improve_count: count(|status| status == Status::Improve),
        missing_count: count(|status| status == Status::Missing),
        recommendations: generate_recommendations(&all),
        tags_by_category,
        sections,
    };

    info!(
        "analyzed {}: score {} ({} present, {} to improve, {} missing)",
        result.url, result.score, result.present_count, result.improve_count, result.missing_count
    );

    result
}

/// Report plus the findings for tags outside every category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInspection {
    #[serde(flatten)]
    pub report: AnalysisResult,
    pub supplementary: Vec<Finding>,
}

/// Findings for the tags that are extracted but not graded in any category
pub fn supplementary_findings(page_url: &Url, raw: &RawTagValues) -> Vec<Finding> {
    let ctx = EvalContext::new(page_url.clone());
    let ungraded: Vec<TagType> = TagType::ALL
        .into_iter()
        .filter(|tag| tag.category().is_none())
        .collect();
    evaluate_all(raw, &ctx, &ungraded)
}
