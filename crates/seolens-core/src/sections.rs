//! Category rollups

use crate::types::{Category, Finding, Section, Severity, Status};

/// Worst severity among `findings`; `NotApplicable` findings are ignored
pub fn worst_severity(findings: &[Finding]) -> Option<Severity> {
    findings
        .iter()
        .filter_map(|finding| finding.status.severity())
        .max()
}

/// Build the section for `category` from its findings
pub fn build_section(category: Category, findings: Vec<Finding>) -> Section {
    let (status, status_text) = match worst_severity(&findings) {
        Some(Severity::Absent) => (Status::Missing, "Missing Tags"),
        Some(Severity::NeedsWork) => (Status::Improve, "Needs Improvement"),
        Some(Severity::Healthy) | None => (Status::Optimal, "Good"),
    };

    Section {
        category,
        title: category.title().to_string(),
        icon: category.icon().to_string(),
        status,
        status_text: status_text.to_string(),
        tags: findings,
    }
}
