//! Song info lookup (release date, lyrics and link for a group + title).

pub mod client;

pub use client::SongInfoClient;

use crate::domain::song::SongDetail;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    /// The service answered with a non-success status.
    #[error("external API error: status {0}")]
    Status(u16),

    /// Connection failure, timeout or an unreadable response body.
    #[error("external API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("external API returned malformed song info: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait SongInfoLookup: Send + Sync {
    /// Issues exactly one request for `group` / `song`; never retries.
    async fn fetch(&self, group: &str, song: &str) -> Result<SongDetail, LookupError>;
}
