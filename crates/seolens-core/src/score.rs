//! Overall score

use crate::types::Finding;

/// Weighted 0-100 score over every finding that has a weight.
///
/// `NotApplicable` findings are left out entirely; with nothing left the
/// score is 0.
pub fn calculate_score(findings: &[Finding]) -> u8 {
    let weights: Vec<f64> = findings
        .iter()
        .filter_map(|finding| finding.status.weight())
        .collect();

    if weights.is_empty() {
        return 0;
    }

    let total: f64 = weights.iter().sum();
    let score = (total / weights.len() as f64 * 100.0).round();
    score.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Status, TagType};

    fn findings(statuses: &[Status]) -> Vec<Finding> {
        statuses
            .iter()
            .map(|&status| Finding {
                tag: TagType::Title,
                name: String::new(),
                content: None,
                status,
                status_text: String::new(),
                description: String::new(),
                best_practices: Vec::new(),
                recommendation: None,
            })
            .collect()
    }

    #[test]
    fn weighted_average() {
        let score = calculate_score(&findings(&[
            Status::Optimal,
            Status::Optimal,
            Status::Missing,
            Status::Improve,
        ]));
        assert_eq!(score, 60);
    }

    #[test]
    fn good_weighs_less_than_optimal() {
        assert_eq!(calculate_score(&findings(&[Status::Good])), 80);
        assert_eq!(calculate_score(&findings(&[Status::Optimal])), 100);
        assert_eq!(calculate_score(&findings(&[Status::Missing])), 0);
    }

    #[test]
    fn not_applicable_is_excluded() {
        let score = calculate_score(&findings(&[Status::Optimal, Status::NotApplicable]));
        assert_eq!(score, 100);
    }

    #[test]
    fn nothing_to_grade_scores_zero() {
        assert_eq!(calculate_score(&findings(&[Status::NotApplicable])), 0);
        assert_eq!(calculate_score(&[]), 0);
    }

    #[test]
    fn rounds_to_nearest() {
        // (1 + 0.4 + 0) / 3 = 46.67
        let score = calculate_score(&findings(&[
            Status::Optimal,
            Status::Improve,
            Status::Missing,
        ]));
        assert_eq!(score, 47);
    }
}
