//! The song catalog service.
//!
//! Sits between the HTTP handlers and the two collaborators it is built with:
//! 1.  a [`SongRepository`] holding the persisted songs,
//! 2.  a [`SongInfoLookup`] used to enrich new songs before they are stored.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::domain::song::{paginate_verses, Page, Song, SongFilter, SongPayload};
use crate::infra::song_info::{LookupError, SongInfoLookup};
use crate::storage::songs::{SongRepository, StoreError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("song {0} not found")]
    NotFound(i32),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ServiceError::NotFound(id),
            other => ServiceError::Store(other),
        }
    }
}

pub struct SongService {
    store: Arc<dyn SongRepository>,
    lookup: Arc<dyn SongInfoLookup>,
}

impl SongService {
    pub fn new(store: Arc<dyn SongRepository>, lookup: Arc<dyn SongInfoLookup>) -> Self {
        Self { store, lookup }
    }

    pub async fn list_songs(
        &self,
        filter: &SongFilter,
        page: Page,
    ) -> Result<Vec<Song>, ServiceError> {
        info!(
            filters = ?filter.conditions(),
            limit = page.limit,
            offset = page.offset,
            "Getting filtered songs"
        );
        Ok(self.store.list(filter, page).await?)
    }

    pub async fn get_song(&self, id: i32) -> Result<Song, ServiceError> {
        info!(id, "Getting song by id");
        Ok(self.store.get(id).await?)
    }

    /// Returns one page of verses of the song's lyrics.
    ///
    /// An unknown id yields an empty page; only `get_song` reports not-found.
    pub async fn song_text(&self, id: i32, page: i64, per_page: i64) -> Result<String, ServiceError> {
        info!(id, page, per_page, "Getting song text");
        match self.store.get(id).await {
            Ok(song) => Ok(paginate_verses(&song.lyrics, page, per_page)),
            Err(StoreError::NotFound(_)) => {
                warn!(id, "Song text requested for unknown song");
                Ok(String::new())
            }
            Err(e) => {
                error!(id, error = %e, "Failed to load song for text");
                Err(e.into())
            }
        }
    }

    /// Enriches `payload` from the song info service and stores it.
    ///
    /// Nothing is persisted if validation or the lookup fails.
    pub async fn add_song(&self, payload: SongPayload) -> Result<i32, ServiceError> {
        info!(group = %payload.group_name, song = %payload.song_title, "Adding song");
        payload
            .validate_for_create()
            .map_err(ServiceError::Validation)?;

        let detail = self
            .lookup
            .fetch(&payload.group_name, &payload.song_title)
            .await
            .map_err(|e| {
                error!(
                    group = %payload.group_name,
                    song = %payload.song_title,
                    error = %e,
                    "Song info lookup failed"
                );
                e
            })?;

        let song = payload.enrich(detail);
        let id = self.store.insert(&song).await?;
        info!(id, "Song added");
        Ok(id)
    }

    /// Overwrites the editable fields of song `id`. A missing id is a no-op.
    pub async fn update_song(&self, id: i32, payload: SongPayload) -> Result<(), ServiceError> {
        info!(id, group = %payload.group_name, song = %payload.song_title, "Updating song");
        let affected = self.store.update(id, &payload).await?;
        debug!(id, affected, "Song update applied");
        Ok(())
    }

    /// Removes song `id`. A missing id is a no-op.
    pub async fn delete_song(&self, id: i32) -> Result<(), ServiceError> {
        info!(id, "Deleting song");
        let affected = self.store.delete(id).await?;
        debug!(id, affected, "Song delete applied");
        Ok(())
    }

    pub async fn health(&self) -> Result<(), ServiceError> {
        Ok(self.store.ping().await?)
    }
}
