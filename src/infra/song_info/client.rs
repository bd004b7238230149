// Responsible for all communication with the external song info service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::domain::song::SongDetail;
use crate::infra::config::Config;
use crate::infra::song_info::{LookupError, SongInfoLookup};

/// HTTP client for `GET {base}/info?group=&song=`.
#[derive(Clone)]
pub struct SongInfoClient {
    http: Client,
    base_url: String,
}

impl SongInfoClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn from_config(config: &Config) -> Result<Self, LookupError> {
        Self::new(config.external_api_url.clone(), config.external_api_timeout)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn info_url(&self) -> String {
        format!("{}/info", self.base_url)
    }

    /// Sends a bare GET to the base URL. Any HTTP answer counts as reachable.
    pub async fn probe(&self) -> Result<u16, LookupError> {
        let resp = self.http.get(&self.base_url).send().await?;
        Ok(resp.status().as_u16())
    }
}

#[async_trait]
impl SongInfoLookup for SongInfoClient {
    async fn fetch(&self, group: &str, song: &str) -> Result<SongDetail, LookupError> {
        let url = self.info_url();
        debug!(%url, group, song, "Requesting song info");

        let resp = self
            .http
            .get(&url)
            .query(&[("group", group), ("song", song)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), group, song, "Song info service rejected lookup");
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        let detail: SongDetail = serde_json::from_str(&body)?;
        Ok(detail)
    }
}
