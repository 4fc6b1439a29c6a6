//! # seolens-core
//!
//! Tag evaluation and scoring engine behind seolens.
//!
//! This library provides:
//! - Extraction of ~20 SEO-relevant tags from a parsed HTML document
//! - One evaluator per tag type, classifying raw values into findings
//! - Category rollups, a weighted 0-100 score and prioritized recommendations
//! - Seams for the page fetcher and the request log
//!
//! ## Features
//!
//! - `default`: the engine and the collaborator traits, no network access
//! - `http`: [`HttpFetcher`], a reqwest-backed page fetcher
//!
//! ## Example
//!
//! ```
//! use seolens_core::{Status, TagType, analyze_html};
//!
//! # fn example() -> Result<(), seolens_core::SeoError> {
//! let html = r#"
//!     <html><head>
//!         <title>Handmade bicycles from Utrecht</title>
//!         <meta name="robots" content="noindex">
//!     </head></html>
//! "#;
//!
//! let report = analyze_html("https://example.com/", html)?;
//! let robots = report.finding(TagType::Robots).unwrap();
//! assert_eq!(robots.status, Status::Improve);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod document;
pub mod error;
pub mod evaluators;
pub mod extractor;
pub mod fetch;
pub mod recommendations;
pub mod report;
pub mod request_log;
pub mod score;
pub mod sections;
pub mod service;
pub mod types;
pub mod url_utils;

// Re-export commonly used types
pub use types::{
    AnalysisResult, Category, Finding, RecommendationGroup, RecommendationKind, Section, Severity,
    Status, TagType,
};

pub use document::{DocumentQuery, HtmlDocument};
pub use error::SeoError;
pub use evaluators::{EvalContext, evaluate};
pub use extractor::{RawTagValues, extract};
pub use fetch::{FetchResponse, Fetcher};
pub use report::{
    PageInspection, analyze_document, analyze_html, build_report, supplementary_findings,
};
pub use request_log::{InMemoryRequestLog, RequestLog, RequestRecord};
pub use service::SeoService;

#[cfg(feature = "http")]
pub use fetch::{FetchConfig, HttpFetcher};
