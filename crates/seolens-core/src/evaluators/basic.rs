//! Basic SEO tags: title, meta description, viewport and robots

use super::{EvalContext, TagProfile, char_len};
use crate::types::{Finding, Status, TagType};

const TITLE: TagProfile = TagProfile {
    tag: TagType::Title,
    name: "Title Tag",
    description: "Defines the page title in search results",
    best_practices: &[
        "55-60 characters in length",
        "Include primary keyword near the beginning",
        "Unique for each page",
        "Be descriptive and compelling",
    ],
};

const TITLE_MIN: usize = 10;
const TITLE_MAX: usize = 70;

pub fn evaluate_title(raw: Option<&str>, _ctx: &EvalContext) -> Finding {
    let Some(content) = raw else {
        return TITLE.missing("Add a descriptive title tag that includes your primary keyword");
    };

    let length = char_len(content);
    let practices = [
        format!("55-60 characters in length (current: {length})"),
        "Include primary keyword near the beginning".to_string(),
        "Unique for each page".to_string(),
        "Be descriptive and compelling".to_string(),
    ];

    let finding = if length < TITLE_MIN {
        TITLE
            .finding(content, Status::Improve, "Too Short")
            .recommend("Make your title longer and more descriptive (aim for 55-60 characters)")
    } else if length > TITLE_MAX {
        TITLE
            .finding(content, Status::Improve, "Too Long")
            .recommend(
                "Shorten your title to prevent truncation in search results (aim for 55-60 characters)",
            )
    } else {
        TITLE.finding(content, Status::Optimal, "Optimal")
    };

    finding.with_best_practices(practices)
}

const DESCRIPTION: TagProfile = TagProfile {
    tag: TagType::Description,
    name: "Meta Description",
    description: "Provides a summary shown in search results",
    best_practices: &[
        "120-158 characters in length",
        "Include relevant keywords naturally",
        "Provide a compelling reason to click",
        "Accurately summarize page content",
    ],
};

const DESCRIPTION_MIN: usize = 70;
const DESCRIPTION_MAX: usize = 160;

pub fn evaluate_description(raw: Option<&str>, _ctx: &EvalContext) -> Finding {
    let Some(content) = raw else {
        return DESCRIPTION.missing("Add a meta description that summarizes your page content");
    };

    let length = char_len(content);
    let practices = [
        format!("120-158 characters in length (current: {length})"),
        "Include relevant keywords naturally".to_string(),
        "Provide a compelling reason to click".to_string(),
        "Accurately summarize page content".to_string(),
    ];

    let finding = if length < DESCRIPTION_MIN {
        DESCRIPTION
            .finding(content, Status::Improve, "Too Short")
            .recommend("Add more specific details to reach optimal length (120-158 characters)")
    } else if length > DESCRIPTION_MAX {
        DESCRIPTION
            .finding(content, Status::Improve, "Too Long")
            .recommend(
                "Shorten your description to prevent truncation in search results (aim for 120-158 characters)",
            )
    } else {
        DESCRIPTION.finding(content, Status::Optimal, "Optimal")
    };

    finding.with_best_practices(practices)
}

const VIEWPORT: TagProfile = TagProfile {
    tag: TagType::Viewport,
    name: "Viewport Meta Tag",
    description: "Controls how page displays on mobile devices",
    best_practices: &[
        "Include width=device-width to match screen width",
        "Set initial-scale=1.0 for proper zoom level",
        "Avoid user-scalable=no as it hurts accessibility",
        "Essential for mobile-friendly pages and SEO",
    ],
};

pub fn evaluate_viewport(raw: Option<&str>, _ctx: &EvalContext) -> Finding {
    let Some(content) = raw else {
        return VIEWPORT.missing(
            r#"Add viewport meta tag: <meta name="viewport" content="width=device-width, initial-scale=1.0">"#,
        );
    };

    let has_device_width = content.contains("width=device-width");
    let has_initial_scale = content.contains("initial-scale=1");

    if !has_device_width || !has_initial_scale {
        return VIEWPORT
            .finding(content, Status::Improve, "Incomplete")
            .recommend(
                r#"Use complete viewport tag: <meta name="viewport" content="width=device-width, initial-scale=1.0">"#,
            );
    }

    if content.contains("user-scalable=no") {
        return VIEWPORT
            .finding(content, Status::Improve, "Accessibility Issue")
            .recommend("Remove user-scalable=no to improve accessibility for users who need to zoom");
    }

    VIEWPORT.finding(content, Status::Optimal, "Optimal")
}

const ROBOTS: TagProfile = TagProfile {
    tag: TagType::Robots,
    name: "Robots Meta Tag",
    description: "Controls search engine crawling behavior",
    best_practices: &[
        "Use index,follow for most public pages",
        "Use noindex for duplicate or low-value pages",
        "Use nofollow for untrusted content",
        "Consider using max-snippet and other directives",
    ],
};

pub fn evaluate_robots(raw: Option<&str>, _ctx: &EvalContext) -> Finding {
    let Some(content) = raw else {
        return ROBOTS
            .missing(r#"Add <meta name="robots" content="index, follow"> for most public pages"#);
    };

    if content.contains("noindex") {
        return ROBOTS
            .finding(content, Status::Improve, "Blocking Indexing")
            .recommend(
                "This page is set to not be indexed. If this is a public page, change to 'index, follow'",
            );
    }

    ROBOTS.finding(content, Status::Optimal, "Optimal")
}
