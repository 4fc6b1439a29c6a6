//! Log of analysis requests
//!
//! Only the request metadata is kept, never the report. Recording is
//! best-effort: the service swallows failures so they cannot affect an
//! analysis.

use chrono::{SecondsFormat, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRecord {
    pub id: Uuid,
    pub url: String,
    /// RFC 3339 timestamp
    pub request_date: String,
}

impl RequestRecord {
    pub fn now(url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            url: url.into(),
            request_date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

pub trait RequestLog: Send + Sync {
    /// Called on the request path before the page is fetched.
    /// Implementations must not block: a durable log should hand the record
    /// to a queue or background task and return immediately. Errors are
    /// logged by the caller and never fail the analysis.
    fn record(&self, record: RequestRecord) -> Result<()>;

    fn by_url(&self, url: &str) -> Vec<RequestRecord>;

    fn all(&self) -> Vec<RequestRecord>;
}

/// Process-local request log
#[derive(Debug, Default)]
pub struct InMemoryRequestLog {
    records: Mutex<Vec<RequestRecord>>,
}

impl InMemoryRequestLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl RequestLog for InMemoryRequestLog {
    fn record(&self, record: RequestRecord) -> Result<()> {
        self.records.lock().push(record);
        Ok(())
    }

    fn by_url(&self, url: &str) -> Vec<RequestRecord> {
        self.records
            .lock()
            .iter()
            .filter(|record| record.url == url)
            .cloned()
            .collect()
    }

    fn all(&self) -> Vec<RequestRecord> {
        self.records.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_filters_by_url() {
        let log = InMemoryRequestLog::new();
        log.record(RequestRecord::now("https://a.com/")).unwrap();
        log.record(RequestRecord::now("https://b.com/")).unwrap();
        log.record(RequestRecord::now("https://a.com/")).unwrap();

        assert_eq!(log.len(), 3);
        assert_eq!(log.by_url("https://a.com/").len(), 2);
        assert!(log.by_url("https://c.com/").is_empty());

        let urls: Vec<String> = log.all().into_iter().map(|record| record.url).collect();
        assert_eq!(urls, ["https://a.com/", "https://b.com/", "https://a.com/"]);
    }

    #[test]
    fn record_ids_are_unique() {
        let first = RequestRecord::now("https://a.com/");
        let second = RequestRecord::now("https://a.com/");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn request_date_is_rfc3339() {
        let record = RequestRecord::now("https://a.com/");
        assert!(chrono::DateTime::parse_from_rfc3339(&record.request_date).is_ok());
        assert!(record.request_date.ends_with('Z'));
    }
}
