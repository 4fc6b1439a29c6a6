//! Integration tests for the analysis service
//!
//! A stub fetcher serves canned pages so nothing touches the network.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use seolens_core::{
    FetchResponse, Fetcher, InMemoryRequestLog, RequestLog, RequestRecord, SeoError, SeoService,
    Status, TagType,
};
use url::Url;

#[derive(Default)]
struct StubFetcher {
    pages: HashMap<String, FetchResponse>,
    calls: AtomicUsize,
}

impl StubFetcher {
    fn with_page(mut self, url: &str, status: u16, status_text: &str, body: &str) -> Self {
        self.pages.insert(
            url.to_string(),
            FetchResponse {
                status,
                status_text: status_text.to_string(),
                body: body.to_string(),
            },
        );
        self
    }
}

impl Fetcher for StubFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchResponse, SeoError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| SeoError::Transport {
                message: format!("connection refused: {url}"),
            })
    }
}

struct BrokenLog;

impl RequestLog for BrokenLog {
    fn record(&self, _record: RequestRecord) -> Result<(), SeoError> {
        Err(SeoError::RequestLog {
            message: "disk full".to_string(),
        })
    }

    fn by_url(&self, _url: &str) -> Vec<RequestRecord> {
        Vec::new()
    }

    fn all(&self) -> Vec<RequestRecord> {
        Vec::new()
    }
}

const PAGE: &str = r#"
    <html><head>
        <title>Seasonal menu | Harbour Kitchen</title>
        <meta name="viewport" content="width=device-width, initial-scale=1.0, user-scalable=no">
        <link rel="canonical" href="/other-page">
        <script type="application/ld+json">{"@context":"https://schema.org","@type":"Restaurant"}</script>
    </head></html>
"#;

#[tokio::test]
async fn analyzes_fetched_page() {
    let fetcher = StubFetcher::default().with_page("https://x.com/page", 200, "OK", PAGE);
    let service = SeoService::new(fetcher, InMemoryRequestLog::new());

    let report = service.analyze_url("https://x.com/page").await.unwrap();

    let viewport = report.finding(TagType::Viewport).unwrap();
    assert_eq!(viewport.status_text, "Accessibility Issue");

    let canonical = report.finding(TagType::Canonical).unwrap();
    assert_eq!(canonical.status_text, "Different URL");

    let schema = report.finding(TagType::Schema).unwrap();
    assert_eq!(schema.status_text, "Basic Only");

    let title = report.finding(TagType::Title).unwrap();
    assert_eq!(title.status, Status::Optimal);

    assert_eq!(service.request_log().by_url("https://x.com/page").len(), 1);
}

#[tokio::test]
async fn adds_missing_scheme() {
    let fetcher = StubFetcher::default().with_page("https://x.com/page", 200, "OK", PAGE);
    let service = SeoService::new(fetcher, InMemoryRequestLog::new());

    let report = service.analyze_url("  x.com/page ").await.unwrap();
    assert_eq!(report.url, "https://x.com/page");
}

#[tokio::test]
async fn report_echoes_the_requested_url() {
    let fetcher = StubFetcher::default().with_page("https://x.com/", 200, "OK", PAGE);
    let service = SeoService::new(fetcher, InMemoryRequestLog::new());

    let report = service.analyze_url("https://x.com").await.unwrap();
    assert_eq!(report.url, "https://x.com");

    let inspection = service.inspect_url("x.com").await.unwrap();
    assert_eq!(inspection.report.url, "https://x.com");
}

#[tokio::test]
async fn request_is_recorded_even_when_fetch_fails() {
    let service = SeoService::new(StubFetcher::default(), InMemoryRequestLog::new());

    assert!(service.analyze_url("https://unreachable.test/").await.is_err());

    let records = service.request_log().all();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].url, "https://unreachable.test/");
}

#[tokio::test]
async fn invalid_url_fails_before_fetching() {
    let fetcher = StubFetcher::default();
    let service = SeoService::new(fetcher, InMemoryRequestLog::new());

    for input in ["", "   ", "https://", "http://exa mple.com"] {
        let err = service.analyze_url(input).await.unwrap_err();
        assert!(matches!(err, SeoError::InvalidUrl { .. }), "{input:?}");
        assert_eq!(err.http_status(), 400);
    }

    assert!(service.request_log().is_empty());
    assert_eq!(service.fetcher().calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn upstream_status_is_relayed_verbatim() {
    let fetcher =
        StubFetcher::default().with_page("https://x.com/gone", 410, "Gone", "<h1>Gone</h1>");
    let service = SeoService::new(fetcher, InMemoryRequestLog::new());

    let err = service.analyze_url("https://x.com/gone").await.unwrap_err();
    match &err {
        SeoError::FetchFailed {
            status,
            status_text,
        } => {
            assert_eq!(*status, 410);
            assert_eq!(status_text, "Gone");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.http_status(), 410);
}

#[tokio::test]
async fn transport_failure_is_not_retried() {
    let service = SeoService::new(StubFetcher::default(), InMemoryRequestLog::new());

    let err = service.analyze_url("https://unreachable.test/").await.unwrap_err();
    assert!(matches!(err, SeoError::Transport { .. }));
    assert_eq!(err.http_status(), 502);
    assert_eq!(service.fetcher().calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn broken_request_log_does_not_fail_analysis() {
    let fetcher = StubFetcher::default().with_page("https://x.com/page", 200, "OK", PAGE);
    let service = SeoService::new(fetcher, BrokenLog);

    let report = service.analyze_url("https://x.com/page").await.unwrap();
    assert_eq!(report.url, "https://x.com/page");
}

#[tokio::test]
async fn concurrent_analyses_are_independent() {
    let fetcher = StubFetcher::default()
        .with_page("https://a.test/", 200, "OK", "<title>Alpha site home page</title>")
        .with_page("https://b.test/", 200, "OK", "");
    let service = SeoService::new(fetcher, InMemoryRequestLog::new());

    let (a, b) = tokio::join!(
        service.analyze_url("https://a.test/"),
        service.analyze_url("https://b.test/")
    );

    let a = a.unwrap();
    let b = b.unwrap();
    assert_eq!(a.finding(TagType::Title).unwrap().status, Status::Optimal);
    assert_eq!(b.finding(TagType::Title).unwrap().status, Status::Missing);
    assert_eq!(service.request_log().len(), 2);
}

#[tokio::test]
async fn inspection_adds_supplementary_findings() {
    let html = r#"<head><meta property="og:site_name" content="Harbour Kitchen"></head>"#;
    let fetcher = StubFetcher::default().with_page("https://x.com/", 200, "OK", html);
    let service = SeoService::new(fetcher, InMemoryRequestLog::new());

    let inspection = service.inspect_url("https://x.com/").await.unwrap();
    assert_eq!(inspection.supplementary.len(), 7);

    let site_name = inspection
        .supplementary
        .iter()
        .find(|finding| finding.tag == TagType::OgSiteName)
        .unwrap();
    assert_eq!(site_name.status, Status::Optimal);
    assert!(inspection.report.finding(TagType::OgSiteName).is_none());

    let json = serde_json::to_value(&inspection).unwrap();
    assert!(json["score"].is_number());
    assert!(json["supplementary"].is_array());
}
