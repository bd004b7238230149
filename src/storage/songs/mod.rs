pub mod postgres;

pub use postgres::PgSongStore;

use crate::domain::song::{Page, Song, SongFilter, SongPayload};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("song {0} not found")]
    NotFound(i32),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence contract for song records.
///
/// `update` and `delete` report the number of affected rows; a missing id is
/// not an error for them. Only `get` signals [`StoreError::NotFound`].
#[async_trait]
pub trait SongRepository: Send + Sync {
    async fn list(&self, filter: &SongFilter, page: Page) -> Result<Vec<Song>, StoreError>;

    async fn get(&self, id: i32) -> Result<Song, StoreError>;

    /// Inserts a new row, stamping `created_at` with the current time.
    /// Returns the assigned id.
    async fn insert(&self, song: &SongPayload) -> Result<i32, StoreError>;

    async fn update(&self, id: i32, song: &SongPayload) -> Result<u64, StoreError>;

    async fn delete(&self, id: i32) -> Result<u64, StoreError>;

    /// Cheap connectivity check.
    async fn ping(&self) -> Result<(), StoreError>;
}
