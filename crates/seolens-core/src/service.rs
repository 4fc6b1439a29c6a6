//! Analysis service: validation, request logging, fetching and analysis

use log::{debug, warn};
use url::Url;

use crate::document::HtmlDocument;
use crate::error::{Result, SeoError};
use crate::extractor::extract;
use crate::fetch::Fetcher;
use crate::report::{PageInspection, analyze_document, build_report, supplementary_findings};
use crate::request_log::{RequestLog, RequestRecord};
use crate::types::AnalysisResult;
use crate::url_utils::{normalize_input_url, parse_page_url};

struct FetchedPage {
    /// Normalized input, echoed back in the report
    requested: String,
    url: Url,
    body: String,
}

pub struct SeoService<F, L> {
    fetcher: F,
    request_log: L,
}

impl<F: Fetcher, L: RequestLog> SeoService<F, L> {
    pub fn new(fetcher: F, request_log: L) -> Self {
        Self {
            fetcher,
            request_log,
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn request_log(&self) -> &L {
        &self.request_log
    }

    /// Fetch and analyze one page.
    ///
    /// The URL is validated before anything else happens. A non-success
    /// upstream status is relayed as [`SeoError::FetchFailed`] unchanged.
    pub async fn analyze_url(&self, raw_url: &str) -> Result<AnalysisResult> {
        let page = self.fetch_page(raw_url).await?;
        let report = analyze_document(&page.url, &HtmlDocument::parse(&page.body));
        Ok(report.with_url(page.requested))
    }

    /// Like [`analyze_url`](Self::analyze_url), additionally grading the
    /// tags that belong to no report category.
    pub async fn inspect_url(&self, raw_url: &str) -> Result<PageInspection> {
        let page = self.fetch_page(raw_url).await?;
        let raw = extract(&HtmlDocument::parse(&page.body));
        Ok(PageInspection {
            report: build_report(&page.url, &raw).with_url(page.requested),
            supplementary: supplementary_findings(&page.url, &raw),
        })
    }

    async fn fetch_page(&self, raw_url: &str) -> Result<FetchedPage> {
        let normalized = normalize_input_url(raw_url);
        if normalized.is_empty() {
            return Err(SeoError::invalid_url(raw_url));
        }
        let page_url = parse_page_url(&normalized)?;

        self.record_request(page_url.as_str());

        let response = self.fetcher.fetch(&page_url).await?;
        if !response.is_ok() {
            return Err(SeoError::FetchFailed {
                status: response.status,
                status_text: response.status_text,
            });
        }
        debug!("fetched {} bytes from {page_url}", response.body.len());

        Ok(FetchedPage {
            requested: normalized,
            url: page_url,
            body: response.body,
        })
    }

    fn record_request(&self, url: &str) {
        if let Err(err) = self.request_log.record(RequestRecord::now(url)) {
            warn!("{err}");
        }
    }
}
