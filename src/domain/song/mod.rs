//! Song catalog records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod filter;
pub mod lyrics;

pub use filter::{Page, SongFilter, FILTER_COLUMNS};
pub use lyrics::paginate_verses;

/// A persisted song as stored in the `songs` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Song {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Muse")]
    pub group_name: String,
    #[schema(example = "Supermassive Black Hole")]
    pub song_title: String,
    /// Free-form date text as provided by the song info service.
    #[schema(example = "16.07.2006")]
    pub release_date: String,
    /// Verses separated by a blank line.
    pub lyrics: String,
    #[schema(example = "https://youtu.be/Xsp3_a-PMTw")]
    pub youtube_link: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

/// Client-supplied song fields for create and update requests.
///
/// Missing fields decode as empty strings; `id` and `created_at` are ignored
/// if present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SongPayload {
    #[schema(example = "Muse")]
    pub group_name: String,
    #[schema(example = "Supermassive Black Hole")]
    pub song_title: String,
    pub release_date: String,
    pub lyrics: String,
    pub youtube_link: String,
}

impl SongPayload {
    pub fn new(group_name: impl Into<String>, song_title: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            song_title: song_title.into(),
            ..Self::default()
        }
    }

    /// Checks the fields required to create a song.
    pub fn validate_for_create(&self) -> Result<(), String> {
        let mut missing = Vec::new();
        if self.group_name.is_empty() {
            missing.push("group_name");
        }
        if self.song_title.is_empty() {
            missing.push("song_title");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!("missing required field(s): {}", missing.join(", ")))
        }
    }

    /// Replaces release date, lyrics and link with the looked-up values,
    /// even when the looked-up values are empty.
    pub fn enrich(mut self, detail: SongDetail) -> Self {
        self.release_date = detail.release_date;
        self.lyrics = detail.text;
        self.youtube_link = detail.link;
        self
    }
}

/// Response of the song info service. Never stored as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SongDetail {
    #[serde(rename = "releaseDate", default)]
    pub release_date: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub link: String,
}
