//! Recommendation synthesis

use crate::types::{Finding, RecommendationGroup, RecommendationKind, Status};

/// Generic hints that apply to every page
pub const ADDITIONAL_CONSIDERATIONS: [&str; 3] = [
    "Ensure proper heading structure (H1, H2, H3) throughout the page",
    "Optimize image alt text for better accessibility and SEO",
    "Consider adding breadcrumb navigation for improved user experience",
];

/// Always returns the critical, improvement and additional groups, in that order
pub fn generate_recommendations(findings: &[Finding]) -> Vec<RecommendationGroup> {
    let critical = collect_items(findings, Status::Missing, "Add");
    let improvements = collect_items(findings, Status::Improve, "Improve");

    vec![
        RecommendationGroup {
            kind: RecommendationKind::Critical,
            title: "Add Critical Missing Tags".to_string(),
            description: "Implement the following missing tags to improve SEO performance:"
                .to_string(),
            items: or_placeholder(critical, "No critical missing tags found"),
        },
        RecommendationGroup {
            kind: RecommendationKind::Improvement,
            title: "Optimize Existing Tags".to_string(),
            description: "Improve these tags to enhance visibility:".to_string(),
            items: or_placeholder(improvements, "All existing tags are well optimized"),
        },
        RecommendationGroup {
            kind: RecommendationKind::Additional,
            title: "Additional Considerations".to_string(),
            description: "These improvements could further enhance your SEO:".to_string(),
            items: ADDITIONAL_CONSIDERATIONS
                .iter()
                .map(|item| item.to_string())
                .collect(),
        },
    ]
}

fn collect_items(findings: &[Finding], status: Status, verb: &str) -> Vec<String> {
    findings
        .iter()
        .filter(|finding| finding.status == status)
        .map(|finding| {
            finding
                .recommendation
                .clone()
                .unwrap_or_else(|| format!("{verb} {}", finding.name))
        })
        .collect()
}

fn or_placeholder(items: Vec<String>, placeholder: &str) -> Vec<String> {
    if items.is_empty() {
        vec![placeholder.to_string()]
    } else {
        items
    }
}
