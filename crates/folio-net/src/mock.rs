//! Deterministic [`Fetcher`] with canned responses.
//!
//! Used by tests and by the host's offline mode. Contains no transport
//! logic.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use folio_types::error::FolioError;

use crate::fetch::{FetchFuture, Fetcher};

/// A canned reply for one URL.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Json(serde_json::Value),
    Fail(String),
}

#[derive(Debug, Clone)]
struct Route {
    response: MockResponse,
    delay: Duration,
}

/// Serves canned JSON per URL; unknown URLs fail.
#[derive(Debug, Default)]
pub struct MockFetcher {
    routes: HashMap<String, Route>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `url` with `response` immediately.
    #[must_use]
    pub fn route(self, url: &str, response: MockResponse) -> Self {
        self.route_delayed(url, response, Duration::ZERO)
    }

    /// Reply to `url` with `response` after `delay`.
    #[must_use]
    pub fn route_delayed(mut self, url: &str, response: MockResponse, delay: Duration) -> Self {
        self.routes.insert(url.to_string(), Route { response, delay });
        self
    }

    /// URLs requested so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl Fetcher for MockFetcher {
    fn get_json<'a>(&'a self, url: &'a str) -> FetchFuture<'a> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }
        let route = self.routes.get(url).cloned();
        Box::pin(async move {
            let Some(route) = route else {
                return Err(FolioError::Fetch(format!("GET {url}: no mock route")));
            };
            if !route.delay.is_zero() {
                tokio::time::sleep(route.delay).await;
            }
            match route.response {
                MockResponse::Json(value) => Ok(value),
                MockResponse::Fail(reason) => Err(FolioError::Fetch(format!("GET {url}: {reason}"))),
            }
        })
    }
}
