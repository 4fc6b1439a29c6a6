//! Technical SEO tags: canonical link, hreflang alternates, JSON-LD and OpenSearch

use serde_json::Value as JsonValue;

use super::{EvalContext, TagProfile};
use crate::types::{Finding, Status, TagType};
use crate::url_utils::truncate_for_display;

const CANONICAL: TagProfile = TagProfile {
    tag: TagType::Canonical,
    name: "Canonical URL",
    description: "Specifies the preferred version of a page",
    best_practices: &[
        "Should point to the most authoritative version of the page",
        "Use absolute URLs with protocol (https://)",
        "Should match the current URL for unique pages",
        "Essential for pages with multiple entry points or parameters",
    ],
};

pub fn evaluate_canonical(raw: Option<&str>, ctx: &EvalContext) -> Finding {
    let Some(content) = raw else {
        return CANONICAL.missing(format!(
            r#"Add <link rel="canonical" href="{}">"#,
            ctx.page_url
        ));
    };

    // Relative hrefs resolve against the page; only the path is compared.
    match ctx.page_url.join(content) {
        Ok(canonical) if canonical.path() == ctx.page_url.path() => {
            CANONICAL.finding(content, Status::Optimal, "Present")
        }
        Ok(_) => CANONICAL
            .finding(content, Status::Improve, "Different URL")
            .recommend(
                "Current canonical URL points to a different page, which may be intentional for duplicate content",
            ),
        Err(_) => CANONICAL
            .finding(content, Status::Improve, "Invalid URL")
            .recommend(format!(
                r#"Canonical URL cannot be resolved. Use an absolute URL such as <link rel="canonical" href="{}">"#,
                ctx.page_url
            )),
    }
}

const HREFLANG: TagProfile = TagProfile {
    tag: TagType::Hreflang,
    name: "Hreflang Tags",
    description: "Indicates language/region variants of the page",
    best_practices: &[
        "Use for pages that target multiple languages or regions",
        "Include self-referencing hreflang tags",
        "Use correct language and region codes (e.g., en-us)",
        "All referenced pages should have reciprocal hreflang tags",
    ],
};

/// Absence is not a defect: single-language sites have no alternates.
pub fn evaluate_hreflang(raw: Option<&str>, _ctx: &EvalContext) -> Finding {
    if raw.is_none() {
        return Finding {
            content: None,
            ..HREFLANG.finding("", Status::NotApplicable, "N/A")
        }
        .recommend("Only needed for multilingual sites with specific regional targeting");
    }

    HREFLANG.finding("Multiple hreflang tags present", Status::Optimal, "Present")
}

const SCHEMA: TagProfile = TagProfile {
    tag: TagType::Schema,
    name: "Schema.org Markup",
    description: "Structured data for rich search results",
    best_practices: &[
        "Use appropriate Schema.org type for your content",
        "Include all required properties for your Schema type",
        "Test with Google's Structured Data Testing Tool",
        "Consider multiple Schema types if appropriate",
    ],
};

const SCHEMA_DISPLAY_CHARS: usize = 100;
const SCHEMA_MIN_PROPERTIES: usize = 4;

pub fn evaluate_schema(raw: Option<&str>, _ctx: &EvalContext) -> Finding {
    let Some(content) = raw else {
        return SCHEMA.missing("Add structured data in JSON-LD format based on your content type");
    };

    let display = truncate_for_display(content, SCHEMA_DISPLAY_CHARS);

    let parsed: JsonValue = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(_) => {
            return SCHEMA
                .finding(&display, Status::Improve, "Invalid Format")
                .recommend("Your Schema.org markup has invalid JSON. Check for syntax errors.");
        }
    };

    let has_context = parsed.get("@context").is_some_and(is_truthy);
    let has_type = parsed.get("@type").is_some_and(is_truthy);
    if !has_context || !has_type {
        return SCHEMA
            .finding(&display, Status::Improve, "Incomplete")
            .recommend("Schema.org markup is missing required properties (@context or @type)");
    }

    let property_count = parsed.as_object().map_or(0, |object| object.len());
    if property_count < SCHEMA_MIN_PROPERTIES {
        return SCHEMA
            .finding(&display, Status::Improve, "Basic Only")
            .recommend("Add more properties to your Schema.org markup for richer search results");
    }

    SCHEMA.finding(&display, Status::Optimal, "Present")
}

/// `@context: ""` or `@type: null` do not count as declared
fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(flag) => *flag,
        JsonValue::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        JsonValue::String(text) => !text.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}

const OPEN_SEARCH: TagProfile = TagProfile {
    tag: TagType::OpenSearch,
    name: "Open Search",
    description: "Allows browsers to search your site directly",
    best_practices: &[
        "Create an XML file with search parameters",
        "Link to it from your HTML",
        "Include a descriptive title for your search",
        "Specify the search URL template with parameters",
    ],
};

pub fn evaluate_open_search(raw: Option<&str>, _ctx: &EvalContext) -> Finding {
    OPEN_SEARCH.presence(
        raw,
        r#"Add <link rel="search" type="application/opensearchdescription+xml" title="Search Your Site" href="/opensearch.xml">"#,
    )
}
