//! Terminal rendering of analysis reports

use std::fmt::Write as _;

use seolens_core::{AnalysisResult, Category, Finding, PageInspection, RecommendationGroup, Status};

const DIVIDER: &str = "─────────────────────────────────────────────────────────────";
const LABEL_WIDTH: usize = 16;

fn push_section_header(buf: &mut String, icon: &str, title: &str) {
    let _ = writeln!(buf, "{DIVIDER}");
    let _ = writeln!(buf, "{icon} {title}");
    let _ = writeln!(buf, "{DIVIDER}");
}

fn push_key_value(buf: &mut String, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    let _ = writeln!(buf, "• {:<width$} : {}", label, value, width = LABEL_WIDTH);
}

fn status_icon(status: Status) -> &'static str {
    match status {
        Status::Optimal | Status::Good => "✅",
        Status::Improve => "⚠️",
        Status::Missing => "❌",
        Status::NotApplicable => "➖",
    }
}

fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Basic => "🔍",
        Category::SocialMedia => "📣",
        Category::Technical => "⚙️",
    }
}

pub fn render_inspection(buf: &mut String, inspection: &PageInspection, extended: bool) {
    render_report(buf, &inspection.report);

    if extended && !inspection.supplementary.is_empty() {
        push_section_header(buf, "🧩", "Other Tags");
        for finding in &inspection.supplementary {
            render_finding(buf, finding);
        }
        buf.push('\n');
    }
}

pub fn render_report(buf: &mut String, report: &AnalysisResult) {
    push_section_header(buf, "📊", &format!("SEO Report for {}", report.url));
    push_key_value(buf, "Score", &format!("{}/100", report.score));
    push_key_value(buf, "Present", &report.present_count.to_string());
    push_key_value(buf, "Needs work", &report.improve_count.to_string());
    push_key_value(buf, "Missing", &report.missing_count.to_string());
    buf.push('\n');

    for section in &report.sections {
        let title = format!(
            "{} {} ({})",
            section.title,
            status_icon(section.status),
            section.status_text
        );
        push_section_header(buf, category_icon(section.category), &title);
        for finding in &section.tags {
            render_finding(buf, finding);
        }
        buf.push('\n');
    }

    for group in &report.recommendations {
        render_recommendations(buf, group);
    }
}

fn render_finding(buf: &mut String, finding: &Finding) {
    let _ = writeln!(
        buf,
        "{} {:<width$} : {}",
        status_icon(finding.status),
        finding.name,
        finding.status_text,
        width = LABEL_WIDTH
    );
    if let Some(content) = finding.content.as_deref() {
        let _ = writeln!(buf, "    {content}");
    }
    if let Some(recommendation) = finding.recommendation.as_deref() {
        let _ = writeln!(buf, "    → {recommendation}");
    }
}

fn render_recommendations(buf: &mut String, group: &RecommendationGroup) {
    push_section_header(buf, "💡", &group.title);
    if !group.description.is_empty() {
        let _ = writeln!(buf, "{}", group.description);
    }
    for item in &group.items {
        let _ = writeln!(buf, "  • {item}");
    }
    buf.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use seolens_core::{TagType, analyze_html};

    #[test]
    fn key_value_skips_empty_values() {
        let mut buf = String::new();
        push_key_value(&mut buf, "Score", "");
        assert!(buf.is_empty());

        push_key_value(&mut buf, "Score", "42/100");
        assert_eq!(buf, format!("• {:<16} : 42/100\n", "Score"));
    }

    #[test]
    fn report_lists_sections_and_recommendations() {
        let report = analyze_html(
            "https://x.com/",
            "<head><title>Short</title></head>",
        )
        .unwrap();

        let mut buf = String::new();
        render_report(&mut buf, &report);

        assert!(buf.contains("SEO Report for https://x.com/"));
        assert!(buf.contains("Basic SEO Tags"));
        assert!(buf.contains("Social Media Tags"));
        assert!(buf.contains("Technical SEO Tags"));
        assert!(buf.contains("⚠️ Title Tag"));
        assert!(buf.contains("Add Critical Missing Tags"));
        assert!(buf.contains(&format!("{}/100", report.score)));
    }

    #[test]
    fn supplementary_tags_only_in_extended_mode() {
        let report = analyze_html("https://x.com/", "").unwrap();
        let supplementary = report
            .findings()
            .filter(|f| f.tag == TagType::Title)
            .cloned()
            .collect();
        let inspection = PageInspection {
            report,
            supplementary,
        };

        let mut plain = String::new();
        render_inspection(&mut plain, &inspection, false);
        assert!(!plain.contains("Other Tags"));

        let mut extended = String::new();
        render_inspection(&mut extended, &inspection, true);
        assert!(extended.contains("Other Tags"));
    }
}
