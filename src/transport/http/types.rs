use crate::app::song_service::SongService;
use crate::domain::song::FILTER_COLUMNS;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub songs: Arc<SongService>,
}

impl AppState {
    pub fn new(songs: SongService) -> Self {
        Self {
            songs: Arc::new(songs),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CreatedResponse {
    pub id: i32,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

/// Query string of `GET /songs`.
///
/// Built from raw pairs with [`ListSongsQuery::from_pairs`]; repeated keys
/// keep their first value and numeric values that do not parse are treated
/// as absent.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListSongsQuery {
    /// Exact group name.
    pub group: Option<String>,
    /// Exact song title.
    pub song: Option<String>,
    /// Exact release date text.
    pub release_date: Option<String>,
    /// Exact lyrics text.
    pub lyrics: Option<String>,
    /// Exact media link.
    pub link: Option<String>,
    /// Page size (default 10).
    #[param(value_type = Option<i64>)]
    pub limit: Option<String>,
    /// Rows to skip (default 0).
    #[param(value_type = Option<i64>)]
    pub offset: Option<String>,
}

impl ListSongsQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            group: first_value(pairs, "group"),
            song: first_value(pairs, "song"),
            release_date: first_value(pairs, "release_date"),
            lyrics: first_value(pairs, "lyrics"),
            link: first_value(pairs, "link"),
            limit: first_value(pairs, "limit"),
            offset: first_value(pairs, "offset"),
        }
    }

    /// `(filter key, value)` pairs; `release_date` maps to the `release` key.
    pub fn filter_params(&self) -> Vec<(&'static str, &str)> {
        let values = [
            &self.group,
            &self.song,
            &self.release_date,
            &self.lyrics,
            &self.link,
        ];
        FILTER_COLUMNS
            .iter()
            .zip(values)
            .filter_map(|((key, _), value)| value.as_deref().map(|v| (*key, v)))
            .collect()
    }

    pub fn limit(&self) -> Option<i64> {
        parse_lenient(self.limit.as_deref())
    }

    pub fn offset(&self) -> Option<i64> {
        parse_lenient(self.offset.as_deref())
    }
}

/// Query string of `GET /songs/{id}/text`.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SongTextQuery {
    /// 1-based page number (default 1).
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
    /// Verses per page (default 3).
    #[param(value_type = Option<i64>)]
    pub per_page: Option<String>,
}

impl SongTextQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            page: first_value(pairs, "page"),
            per_page: first_value(pairs, "per_page"),
        }
    }

    /// Missing or unparsable values read as 0, which the paginator replaces
    /// with its defaults.
    pub fn page(&self) -> i64 {
        parse_lenient(self.page.as_deref()).unwrap_or(0)
    }

    pub fn per_page(&self) -> i64 {
        parse_lenient(self.per_page.as_deref()).unwrap_or(0)
    }
}

fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

fn parse_lenient(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.parse::<i64>().ok())
}
