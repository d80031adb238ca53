//! In-memory log of outbound read API calls.
//!
//! Every request is recorded before it is sent and completed once the
//! response (or transport error) arrives. The log is observational: nothing
//! in the client reads it back.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Default number of calls kept before the oldest are evicted.
pub const DEFAULT_CAPACITY: usize = 100;

/// One logged request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCall {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub method: String,
    pub url: String,
    /// Shell command that reproduces the request.
    pub curl: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Bounded, shareable call log. Clones share the same storage.
#[derive(Debug, Clone)]
pub struct ApiCallLog {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    capacity: usize,
    next_id: AtomicU64,
    calls: Mutex<VecDeque<ApiCall>>,
}

impl Default for ApiCallLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ApiCallLog {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                capacity: capacity.max(1),
                next_id: AtomicU64::new(1),
                calls: Mutex::new(VecDeque::new()),
            }),
        }
    }

    /// Record a call that is about to be sent and return its id.
    pub fn record(&self, method: &str, url: &str, curl: String) -> String {
        let id = format!("call-{}", self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let mut calls = self.lock();
        if calls.len() == self.inner.capacity {
            calls.pop_front();
        }
        calls.push_back(ApiCall {
            id: id.clone(),
            timestamp: Utc::now(),
            method: method.to_string(),
            url: url.to_string(),
            curl,
            status: None,
            duration_ms: None,
            error: None,
        });
        id
    }

    /// Attach the response status and elapsed time to a recorded call.
    pub fn complete(&self, id: &str, status: u16, duration_ms: u64) {
        self.update(id, |call| {
            call.status = Some(status);
            call.duration_ms = Some(duration_ms);
        });
    }

    /// Attach a transport error and elapsed time to a recorded call.
    pub fn fail(&self, id: &str, error: String, duration_ms: u64) {
        self.update(id, |call| {
            call.error = Some(error);
            call.duration_ms = Some(duration_ms);
        });
    }

    /// Calls currently held, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ApiCall> {
        self.lock().iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn update(&self, id: &str, apply: impl FnOnce(&mut ApiCall)) {
        // Evicted calls are silently ignored.
        if let Some(call) = self.lock().iter_mut().rev().find(|c| c.id == id) {
            apply(call);
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<ApiCall>> {
        self.inner.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Render a request as a copy-pasteable `curl` command.
#[must_use]
pub fn to_curl(method: &str, url: &str, headers: &[(&str, &str)], body: Option<&Value>) -> String {
    let mut parts = vec![format!("curl -X {method} {}", shell_quote(url))];
    for (name, value) in headers {
        parts.push(format!("-H {}", shell_quote(&format!("{name}: {value}"))));
    }
    if let Some(body) = body {
        parts.push(format!("-d {}", shell_quote(&body.to_string())));
    }
    parts.join(" \\\n  ")
}

fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn curl_for_get() {
        assert_eq!(
            to_curl("GET", "https://api.test/v1/entities/E1/metadata", &[], None),
            "curl -X GET 'https://api.test/v1/entities/E1/metadata'"
        );
    }

    #[test]
    fn curl_for_post_with_body_and_headers() {
        let curl = to_curl(
            "POST",
            "https://api.test/search",
            &[("Content-Type", "application/json")],
            Some(&json!({"name": "O'Brien"})),
        );
        assert_eq!(
            curl,
            "curl -X POST 'https://api.test/search' \\\n  \
             -H 'Content-Type: application/json' \\\n  \
             -d '{\"name\":\"O'\\''Brien\"}'"
        );
    }

    #[test]
    fn record_then_complete() {
        let log = ApiCallLog::default();
        let id = log.record("POST", "https://api.test/search", "curl ...".to_string());
        assert!(log.snapshot()[0].status.is_none());

        log.complete(&id, 200, 12);
        let call = &log.snapshot()[0];
        assert_eq!(call.status, Some(200));
        assert_eq!(call.duration_ms, Some(12));
        assert!(call.error.is_none());
    }

    #[test]
    fn failed_call_keeps_error() {
        let log = ApiCallLog::default();
        let id = log.record("GET", "https://api.test", String::new());
        log.fail(&id, "connection refused".to_string(), 3);
        assert_eq!(log.snapshot()[0].error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn oldest_calls_are_evicted() {
        let log = ApiCallLog::with_capacity(2);
        let first = log.record("GET", "a", String::new());
        log.record("GET", "b", String::new());
        log.record("GET", "c", String::new());

        let urls: Vec<String> = log.snapshot().into_iter().map(|c| c.url).collect();
        assert_eq!(urls, vec!["b", "c"]);

        // Completing an evicted call is a no-op.
        log.complete(&first, 200, 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn clones_share_storage() {
        let log = ApiCallLog::default();
        let other = log.clone();
        other.record("GET", "x", String::new());
        assert_eq!(log.len(), 1);
        log.clear();
        assert!(other.is_empty());
    }
}
