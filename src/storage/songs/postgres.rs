//! Song store backed by PostgreSQL.

use crate::domain::song::filter::build_list_query;
use crate::domain::song::{Page, Song, SongFilter, SongPayload};
use crate::infra::config::DatabaseConfig;
use crate::storage::songs::{SongRepository, StoreError};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

const CREATE_SONGS_TABLE: &str = "CREATE TABLE IF NOT EXISTS songs (
    id SERIAL PRIMARY KEY,
    group_name TEXT NOT NULL,
    song_title TEXT NOT NULL,
    release_date TEXT NOT NULL DEFAULT '',
    lyrics TEXT NOT NULL DEFAULT '',
    youtube_link TEXT NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)";

#[derive(Clone)]
pub struct PgSongStore {
    pool: PgPool,
}

impl PgSongStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the database and makes sure the `songs` table exists.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(config.connect_options()?)
            .await?;

        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_SONGS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Whether the `songs` table is present in the current schema.
    pub async fn songs_table_exists(&self) -> Result<bool, StoreError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (
                SELECT 1 FROM information_schema.tables
                WHERE table_schema = current_schema() AND table_name = 'songs'
            )",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}

#[async_trait]
impl SongRepository for PgSongStore {
    async fn list(&self, filter: &SongFilter, page: Page) -> Result<Vec<Song>, StoreError> {
        let mut qb = build_list_query(filter, page);
        let songs = qb.build_query_as::<Song>().fetch_all(&self.pool).await?;
        Ok(songs)
    }

    async fn get(&self, id: i32) -> Result<Song, StoreError> {
        sqlx::query_as::<_, Song>(
            "SELECT id, group_name, song_title, release_date, lyrics, youtube_link, created_at
             FROM songs
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))
    }

    async fn insert(&self, song: &SongPayload) -> Result<i32, StoreError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO songs (group_name, song_title, release_date, lyrics, youtube_link, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(&song.group_name)
        .bind(&song.song_title)
        .bind(&song.release_date)
        .bind(&song.lyrics)
        .bind(&song.youtube_link)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update(&self, id: i32, song: &SongPayload) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "UPDATE songs
             SET group_name = $1, song_title = $2, release_date = $3, lyrics = $4, youtube_link = $5
             WHERE id = $6",
        )
        .bind(&song.group_name)
        .bind(&song.song_title)
        .bind(&song.release_date)
        .bind(&song.lyrics)
        .bind(&song.youtube_link)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM songs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
