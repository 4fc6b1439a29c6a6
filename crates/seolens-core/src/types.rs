//! Common types used across seolens

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Every tag the extractor knows how to look up
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TagType {
    Title,
    Description,
    Viewport,
    Robots,
    Canonical,
    OgTitle,
    OgDescription,
    OgImage,
    OgUrl,
    OgType,
    OgSiteName,
    TwitterCard,
    TwitterTitle,
    TwitterDescription,
    TwitterImage,
    TwitterSite,
    TwitterCreator,
    Schema,
    Hreflang,
    OpenSearch,
}

impl TagType {
    pub const ALL: [TagType; 20] = [
        TagType::Title,
        TagType::Description,
        TagType::Viewport,
        TagType::Robots,
        TagType::Canonical,
        TagType::OgTitle,
        TagType::OgDescription,
        TagType::OgImage,
        TagType::OgUrl,
        TagType::OgType,
        TagType::OgSiteName,
        TagType::TwitterCard,
        TagType::TwitterTitle,
        TagType::TwitterDescription,
        TagType::TwitterImage,
        TagType::TwitterSite,
        TagType::TwitterCreator,
        TagType::Schema,
        TagType::Hreflang,
        TagType::OpenSearch,
    ];

    /// Wire identifier, identical to the serialized form
    pub fn as_str(self) -> &'static str {
        match self {
            TagType::Title => "title",
            TagType::Description => "description",
            TagType::Viewport => "viewport",
            TagType::Robots => "robots",
            TagType::Canonical => "canonical",
            TagType::OgTitle => "ogTitle",
            TagType::OgDescription => "ogDescription",
            TagType::OgImage => "ogImage",
            TagType::OgUrl => "ogUrl",
            TagType::OgType => "ogType",
            TagType::OgSiteName => "ogSiteName",
            TagType::TwitterCard => "twitterCard",
            TagType::TwitterTitle => "twitterTitle",
            TagType::TwitterDescription => "twitterDescription",
            TagType::TwitterImage => "twitterImage",
            TagType::TwitterSite => "twitterSite",
            TagType::TwitterCreator => "twitterCreator",
            TagType::Schema => "schema",
            TagType::Hreflang => "hreflang",
            TagType::OpenSearch => "openSearch",
        }
    }

    /// Report category this tag is graded under.
    ///
    /// Tags without a category are extracted and can be evaluated, but they
    /// never contribute to sections, the score or recommendations.
    pub fn category(self) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.members().contains(&self))
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a single finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    Optimal,
    Good,
    Improve,
    Missing,
    NotApplicable,
}

/// How bad a status is, worst last
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Healthy,
    NeedsWork,
    Absent,
}

impl Status {
    /// Severity rank used by every rollup.
    ///
    /// `NotApplicable` has no severity: it neither drags a section down nor
    /// counts toward its health.
    pub fn severity(self) -> Option<Severity> {
        match self {
            Status::Optimal | Status::Good => Some(Severity::Healthy),
            Status::Improve => Some(Severity::NeedsWork),
            Status::Missing => Some(Severity::Absent),
            Status::NotApplicable => None,
        }
    }

    pub fn is_present(self) -> bool {
        matches!(self, Status::Optimal | Status::Good)
    }

    /// Contribution of one finding to the overall score
    pub fn weight(self) -> Option<f64> {
        match self {
            Status::Optimal => Some(1.0),
            Status::Good => Some(0.8),
            Status::Improve => Some(0.4),
            Status::Missing => Some(0.0),
            Status::NotApplicable => None,
        }
    }
}

/// The classified result of evaluating one tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    #[serde(rename = "type")]
    pub tag: TagType,
    pub name: String,
    /// Raw value, `None` iff the tag was absent from the document
    pub content: Option<String>,
    pub status: Status,
    pub status_text: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub best_practices: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Basic,
    SocialMedia,
    Technical,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Basic, Category::SocialMedia, Category::Technical];

    /// Fixed membership, in display order
    pub fn members(self) -> &'static [TagType] {
        match self {
            Category::Basic => &[
                TagType::Title,
                TagType::Description,
                TagType::Viewport,
                TagType::Robots,
            ],
            Category::SocialMedia => &[
                TagType::OgTitle,
                TagType::OgDescription,
                TagType::OgImage,
                TagType::TwitterCard,
                TagType::TwitterImage,
            ],
            Category::Technical => &[
                TagType::Canonical,
                TagType::Hreflang,
                TagType::Schema,
                TagType::OpenSearch,
            ],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Basic => "Basic SEO Tags",
            Category::SocialMedia => "Social Media Tags",
            Category::Technical => "Technical SEO Tags",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Basic => "search",
            Category::SocialMedia => "share-alt",
            Category::Technical => "cogs",
        }
    }
}

/// Category-level rollup of findings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub category: Category,
    pub title: String,
    pub icon: String,
    pub status: Status,
    pub status_text: String,
    pub tags: Vec<Finding>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecommendationKind {
    Critical,
    Improvement,
    Additional,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationGroup {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    pub items: Vec<String>,
}

/// A complete SEO report for one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub url: String,
    /// Overall score (0-100)
    pub score: u8,
    #[serde(rename = "tags")]
    pub tags_by_category: BTreeMap<Category, Vec<Finding>>,
    pub sections: Vec<Section>,
    pub present_count: usize,
    pub improve_count: usize,
    pub missing_count: usize,
    pub recommendations: Vec<RecommendationGroup>,
}

impl AnalysisResult {
    /// Report the page under `url` instead of its parsed form
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// All graded findings in category order
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.tags_by_category.values().flatten()
    }

    pub fn finding(&self, tag: TagType) -> Option<&Finding> {
        self.findings().find(|finding| finding.tag == tag)
    }

    pub fn section(&self, category: Category) -> Option<&Section> {
        self.sections
            .iter()
            .find(|section| section.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_missing_above_improve() {
        assert!(Status::Missing.severity() > Status::Improve.severity());
        assert!(Status::Improve.severity() > Status::Optimal.severity());
        assert_eq!(Status::Optimal.severity(), Status::Good.severity());
        assert_eq!(Status::NotApplicable.severity(), None);
    }

    #[test]
    fn category_membership_is_fixed() {
        assert_eq!(TagType::Title.category(), Some(Category::Basic));
        assert_eq!(TagType::TwitterImage.category(), Some(Category::SocialMedia));
        assert_eq!(TagType::Hreflang.category(), Some(Category::Technical));
        assert_eq!(TagType::OgUrl.category(), None);
        assert_eq!(TagType::TwitterCreator.category(), None);

        let graded: usize = Category::ALL.iter().map(|c| c.members().len()).sum();
        assert_eq!(graded, 13);
    }

    #[test]
    fn tag_type_serializes_as_wire_identifier() {
        for tag in TagType::ALL {
            let json = serde_json::to_value(tag).unwrap();
            assert_eq!(json, tag.as_str());
        }
    }

    #[test]
    fn finding_serializes_camel_case_and_skips_empty_optionals() {
        let finding = Finding {
            tag: TagType::OgImage,
            name: "og:image".to_string(),
            content: None,
            status: Status::NotApplicable,
            status_text: "N/A".to_string(),
            description: "Image displayed in social shares".to_string(),
            best_practices: Vec::new(),
            recommendation: None,
        };

        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["type"], "ogImage");
        assert_eq!(json["status"], "notApplicable");
        assert_eq!(json["statusText"], "N/A");
        assert!(json["content"].is_null());
        assert!(json.get("bestPractices").is_none());
        assert!(json.get("recommendation").is_none());
    }
}
