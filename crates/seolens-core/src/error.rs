//! Error taxonomy for the analysis service
//!
//! Missing or malformed markup is never an error: the extractor and the
//! evaluators classify it as a finding. Errors only arise around the engine,
//! when a URL is rejected or a collaborator fails.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeoError {
    /// The requested URL is not a well-formed http(s) URL
    #[error("Invalid URL format: {url}. Make sure to include https://")]
    InvalidUrl {
        url: String,
        #[source]
        source: Option<url::ParseError>,
    },

    /// The upstream server answered with a non-success status
    #[error("Failed to fetch URL: {status_text}")]
    FetchFailed { status: u16, status_text: String },

    /// The page could not be fetched at all
    #[error("Failed to fetch URL: {message}")]
    Transport { message: String },

    /// The request log rejected a record
    #[error("Failed to record analysis request: {message}")]
    RequestLog { message: String },

    /// Anything else the host layer could not handle
    #[error("Failed to analyze website. Please try again.")]
    Unexpected { message: String },
}

impl SeoError {
    pub fn invalid_url(url: impl Into<String>) -> Self {
        SeoError::InvalidUrl {
            url: url.into(),
            source: None,
        }
    }

    /// HTTP status a host service should answer with
    pub fn http_status(&self) -> u16 {
        match self {
            SeoError::InvalidUrl { .. } => 400,
            SeoError::FetchFailed { status, .. } => *status,
            SeoError::Transport { .. } => 502,
            SeoError::RequestLog { .. } | SeoError::Unexpected { .. } => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, SeoError>;
