//! Page fetching seam
//!
//! The engine never performs I/O itself. Callers hand the service a
//! [`Fetcher`]; the `http` feature provides one backed by reqwest.

use std::future::Future;

use url::Url;

use crate::error::Result;

/// What the fetcher got back from the upstream server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl FetchResponse {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait Fetcher: Send + Sync {
    /// Fetch `url`. Non-success statuses are returned, not raised; only
    /// transport failures are errors. No retries.
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<FetchResponse>> + Send;
}

#[cfg(feature = "http")]
pub use http::{HttpFetcher, FetchConfig};

#[cfg(feature = "http")]
mod http {
    use std::time::Duration;

    use log::debug;
    use url::Url;

    use super::{FetchResponse, Fetcher};
    use crate::error::{Result, SeoError};

    #[derive(Debug, Clone)]
    pub struct FetchConfig {
        pub timeout: Duration,
        pub user_agent: String,
    }

    impl Default for FetchConfig {
        fn default() -> Self {
            Self {
                timeout: Duration::from_secs(15),
                user_agent: format!(
                    "Mozilla/5.0 (compatible; seolens/{})",
                    env!("CARGO_PKG_VERSION")
                ),
            }
        }
    }

    /// reqwest-backed fetcher
    #[derive(Debug, Clone)]
    pub struct HttpFetcher {
        client: reqwest::Client,
    }

    impl HttpFetcher {
        pub fn new(config: &FetchConfig) -> Result<Self> {
            let client = reqwest::Client::builder()
                .user_agent(config.user_agent.clone())
                .timeout(config.timeout)
                .build()
                .map_err(|err| SeoError::Unexpected {
                    message: format!("unable to build HTTP client: {err}"),
                })?;
            Ok(Self { client })
        }
    }

    impl Fetcher for HttpFetcher {
        async fn fetch(&self, url: &Url) -> Result<FetchResponse> {
            let transport = |err: reqwest::Error| SeoError::Transport {
                message: err.to_string(),
            };

            let response = self
                .client
                .get(url.as_str())
                .send()
                .await
                .map_err(transport)?;

            let status = response.status();
            debug!("GET {url} -> {status}");

            let body = response.text().await.map_err(transport)?;

            Ok(FetchResponse {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_2xx_is_ok() {
        let response = |status| FetchResponse {
            status,
            status_text: String::new(),
            body: String::new(),
        };
        assert!(response(200).is_ok());
        assert!(response(204).is_ok());
        assert!(!response(301).is_ok());
        assert!(!response(404).is_ok());
        assert!(!response(500).is_ok());
    }
}
