//! OpenGraph and Twitter Card tags

use super::{EvalContext, TagProfile, char_len};
use crate::types::{Finding, Status, TagType};

const OG_TITLE: TagProfile = TagProfile {
    tag: TagType::OgTitle,
    name: "og:title",
    description: "Title displayed when shared on Facebook",
    best_practices: &[
        "Keep under 60 characters",
        "Be specific and engaging",
        "Include branding if relevant",
        "Should match or be similar to page title",
    ],
};

const OG_TITLE_MAX: usize = 90;

pub fn evaluate_og_title(raw: Option<&str>, _ctx: &EvalContext) -> Finding {
    let Some(content) = raw else {
        return OG_TITLE.missing(
            r#"Add <meta property="og:title" content="Your Page Title"> for better social sharing"#,
        );
    };

    let length = char_len(content);
    let practices = [
        format!("Keep under 60 characters (current: {length})"),
        "Be specific and engaging".to_string(),
        "Include branding if relevant".to_string(),
        "Should match or be similar to page title".to_string(),
    ];

    let finding = if length > OG_TITLE_MAX {
        OG_TITLE
            .finding(content, Status::Improve, "Too Long")
            .recommend("Shorten your og:title to under 60 characters for optimal display")
    } else {
        OG_TITLE.finding(content, Status::Optimal, "Present")
    };

    finding.with_best_practices(practices)
}

const OG_DESCRIPTION: TagProfile = TagProfile {
    tag: TagType::OgDescription,
    name: "og:description",
    description: "Description displayed in social shares",
    best_practices: &[
        "Aim for 2-4 sentences (around 200 characters)",
        "Be compelling and informative",
        "Include a call to action if appropriate",
        "Can be similar to meta description",
    ],
};

const OG_DESCRIPTION_MIN: usize = 100;

pub fn evaluate_og_description(raw: Option<&str>, _ctx: &EvalContext) -> Finding {
    let Some(content) = raw else {
        return OG_DESCRIPTION.missing(
            r#"Add <meta property="og:description" content="Your description"> for better social sharing"#,
        );
    };

    let length = char_len(content);
    let practices = [
        "Aim for 2-4 sentences (around 200 characters)".to_string(),
        format!("Current length: {length} characters"),
        "Be compelling and informative".to_string(),
        "Include a call to action if appropriate".to_string(),
    ];

    let finding = if length < OG_DESCRIPTION_MIN {
        OG_DESCRIPTION
            .finding(content, Status::Improve, "Too Short")
            .recommend("Extend your og:description to be more informative (aim for ~200 characters)")
    } else {
        OG_DESCRIPTION.finding(content, Status::Optimal, "Present")
    };

    finding.with_best_practices(practices)
}

const OG_IMAGE: TagProfile = TagProfile {
    tag: TagType::OgImage,
    name: "og:image",
    description: "Image displayed in social shares",
    best_practices: &[
        "Use images at least 1200×630 pixels (ideal ratio 1.91:1)",
        "Keep file size under 8MB",
        "Use PNG, JPEG or GIF format",
        "Include branding and relevant content",
    ],
};

pub fn evaluate_og_image(raw: Option<&str>, _ctx: &EvalContext) -> Finding {
    OG_IMAGE.presence(
        raw,
        r#"Add <meta property="og:image" content="https://yoursite.com/images/social-share.jpg"> for better visibility"#,
    )
}

const OG_URL: TagProfile = TagProfile {
    tag: TagType::OgUrl,
    name: "og:url",
    description: "Canonical address used when the page is shared",
    best_practices: &[
        "Use the absolute URL of the page",
        "Should match the canonical link tag",
        "Leave out tracking parameters",
    ],
};

pub fn evaluate_og_url(raw: Option<&str>, ctx: &EvalContext) -> Finding {
    OG_URL.presence(
        raw,
        format!(
            r#"Add <meta property="og:url" content="{}">"#,
            ctx.page_url
        ),
    )
}

const OG_TYPE: TagProfile = TagProfile {
    tag: TagType::OgType,
    name: "og:type",
    description: "Kind of object being shared",
    best_practices: &[
        "Use website for home and landing pages",
        "Use article for blog posts and news",
        "Use product for product pages",
    ],
};

pub fn evaluate_og_type(raw: Option<&str>, _ctx: &EvalContext) -> Finding {
    OG_TYPE.presence(raw, r#"Add <meta property="og:type" content="website">"#)
}

const OG_SITE_NAME: TagProfile = TagProfile {
    tag: TagType::OgSiteName,
    name: "og:site_name",
    description: "Name of the overall site shown in social shares",
    best_practices: &[
        "Use your brand name, not the page title",
        "Keep it identical across every page",
    ],
};

pub fn evaluate_og_site_name(raw: Option<&str>, _ctx: &EvalContext) -> Finding {
    OG_SITE_NAME.presence(
        raw,
        r#"Add <meta property="og:site_name" content="Your Site Name">"#,
    )
}

const TWITTER_CARD: TagProfile = TagProfile {
    tag: TagType::TwitterCard,
    name: "twitter:card",
    description: "Controls Twitter share display type",
    best_practices: &[
        "Use summary_large_image for better visibility",
        "summary is acceptable but less engaging",
        "app card for mobile applications",
        "player card for media content",
    ],
};

pub fn evaluate_twitter_card(raw: Option<&str>, _ctx: &EvalContext) -> Finding {
    let Some(content) = raw else {
        return TWITTER_CARD.missing(
            r#"Add <meta name="twitter:card" content="summary_large_image"> for better Twitter visibility"#,
        );
    };

    if content == "summary" {
        return TWITTER_CARD
            .finding(content, Status::Improve, "Suboptimal")
            .recommend(
                r#"Change to <meta name="twitter:card" content="summary_large_image"> for better visibility"#,
            );
    }

    TWITTER_CARD.finding(content, Status::Optimal, "Optimal")
}

const TWITTER_TITLE: TagProfile = TagProfile {
    tag: TagType::TwitterTitle,
    name: "twitter:title",
    description: "Title for Twitter shares",
    best_practices: &[
        "Keep under 70 characters",
        "Twitter falls back to og:title when absent",
    ],
};

pub fn evaluate_twitter_title(raw: Option<&str>, _ctx: &EvalContext) -> Finding {
    TWITTER_TITLE.presence(
        raw,
        r#"Add <meta name="twitter:title" content="Your Page Title">"#,
    )
}

const TWITTER_DESCRIPTION: TagProfile = TagProfile {
    tag: TagType::TwitterDescription,
    name: "twitter:description",
    description: "Description for Twitter shares",
    best_practices: &[
        "Keep under 200 characters",
        "Twitter falls back to og:description when absent",
    ],
};

pub fn evaluate_twitter_description(raw: Option<&str>, _ctx: &EvalContext) -> Finding {
    TWITTER_DESCRIPTION.presence(
        raw,
        r#"Add <meta name="twitter:description" content="Your description">"#,
    )
}

const TWITTER_IMAGE: TagProfile = TagProfile {
    tag: TagType::TwitterImage,
    name: "twitter:image",
    description: "Image for Twitter shares",
    best_practices: &[
        "Minimum size of 144x144 pixels",
        "For summary_large_image: 300x157 pixels minimum",
        "Maximum file size of 5MB",
        "Use png, jpg, or gif format",
    ],
};

pub fn evaluate_twitter_image(raw: Option<&str>, _ctx: &EvalContext) -> Finding {
    TWITTER_IMAGE.presence(
        raw,
        r#"Add <meta name="twitter:image" content="https://yoursite.com/images/twitter.jpg"> for better engagement"#,
    )
}

const TWITTER_SITE: TagProfile = TagProfile {
    tag: TagType::TwitterSite,
    name: "twitter:site",
    description: "Twitter account of the website",
    best_practices: &["Use the @username of the site owner"],
};

pub fn evaluate_twitter_site(raw: Option<&str>, _ctx: &EvalContext) -> Finding {
    TWITTER_SITE.presence(raw, r#"Add <meta name="twitter:site" content="@yoursite">"#)
}

const TWITTER_CREATOR: TagProfile = TagProfile {
    tag: TagType::TwitterCreator,
    name: "twitter:creator",
    description: "Twitter account of the content author",
    best_practices: &["Use the @username of the author"],
};

pub fn evaluate_twitter_creator(raw: Option<&str>, _ctx: &EvalContext) -> Finding {
    TWITTER_CREATOR.presence(raw, r#"Add <meta name="twitter:creator" content="@author">"#)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluators::test_context;

    #[test]
    fn og_title_over_ninety_chars_is_too_long() {
        let ctx = test_context();
        let ok = evaluate_og_title(Some(&"a".repeat(90)), &ctx);
        assert_eq!(ok.status, Status::Optimal);
        assert_eq!(ok.status_text, "Present");

        let long = evaluate_og_title(Some(&"a".repeat(91)), &ctx);
        assert_eq!(long.status, Status::Improve);
        assert_eq!(long.status_text, "Too Long");
    }

    #[test]
    fn og_description_under_hundred_chars_is_too_short() {
        let ctx = test_context();
        let short = evaluate_og_description(Some(&"a".repeat(99)), &ctx);
        assert_eq!(short.status_text, "Too Short");
        assert_eq!(short.best_practices[1], "Current length: 99 characters");

        let ok = evaluate_og_description(Some(&"a".repeat(100)), &ctx);
        assert_eq!(ok.status, Status::Optimal);
    }

    #[test]
    fn og_image_has_no_length_rule() {
        let finding = evaluate_og_image(Some("a.png"), &test_context());
        assert_eq!(finding.status, Status::Optimal);
        assert_eq!(finding.status_text, "Present");
    }

    #[test]
    fn summary_card_is_suboptimal() {
        let ctx = test_context();
        let summary = evaluate_twitter_card(Some("summary"), &ctx);
        assert_eq!(summary.status, Status::Improve);
        assert_eq!(summary.status_text, "Suboptimal");

        let large = evaluate_twitter_card(Some("summary_large_image"), &ctx);
        assert_eq!(large.status, Status::Optimal);
    }

    #[test]
    fn missing_og_url_suggests_page_url() {
        let finding = evaluate_og_url(None, &test_context());
        assert_eq!(finding.status, Status::Missing);
        assert_eq!(
            finding.recommendation.as_deref(),
            Some(r#"Add <meta property="og:url" content="https://x.com/page">"#)
        );
    }
}
