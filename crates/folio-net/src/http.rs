//! reqwest-backed [`Fetcher`].

use std::time::Duration;

use reqwest::Client;

use folio_types::error::{FolioError, Result};

use crate::fetch::{FetchFuture, Fetcher};

const USER_AGENT: &str = concat!("folio-os/", env!("CARGO_PKG_VERSION"));

/// HTTPS client used for live commands.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FolioError::Fetch(format!("client init: {e}")))?;
        Ok(Self { http })
    }
}

impl Fetcher for HttpFetcher {
    fn get_json<'a>(&'a self, url: &'a str) -> FetchFuture<'a> {
        Box::pin(async move {
            log::debug!("GET {url}");
            let response = self
                .http
                .get(url)
                .send()
                .await
                .map_err(|e| FolioError::Fetch(format!("GET {url}: {e}")))?;
            let status = response.status();
            if !status.is_success() {
                return Err(FolioError::Fetch(format!("GET {url}: HTTP {status}")));
            }
            let body = response
                .bytes()
                .await
                .map_err(|e| FolioError::Fetch(format!("GET {url}: {e}")))?;
            Ok(serde_json::from_slice(&body)?)
        })
    }
}
