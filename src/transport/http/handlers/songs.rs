use crate::domain::song::{Page, Song, SongFilter, SongPayload};
use crate::transport::http::handlers::common::{invalid_id, json_400};
use crate::transport::http::types::{
    ApiResponse, AppState, CreatedResponse, ListSongsQuery, SongTextQuery, StatusResponse,
};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, info};

#[utoipa::path(
    get,
    path = "/songs",
    params(ListSongsQuery),
    responses(
        (status = 200, description = "Songs matching every supplied filter", body = [Song]),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn list_songs_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    info!("Handling GET all songs request");
    let query = ListSongsQuery::from_pairs(&pairs);
    let filter = SongFilter::from_params(query.filter_params());
    let page = Page::new(query.limit(), query.offset());

    match state.songs.list_songs(&filter, page).await {
        Ok(songs) => Json(songs).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to get songs");
            e.into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/songs/{id}",
    params(
        ("id" = i32, Path, description = "Song ID")
    ),
    responses(
        (status = 200, description = "Song found", body = Song),
        (status = 400, description = "Invalid song ID", body = ApiResponse),
        (status = 404, description = "Song not found", body = ApiResponse)
    )
)]
pub async fn get_song_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(v) => v,
        Err(e) => return invalid_id(e),
    };
    info!(song_id = id, "Handling GET song request");

    match state.songs.get_song(id).await {
        Ok(song) => Json(song).into_response(),
        Err(e) => {
            error!(song_id = id, error = %e, "Failed to get song");
            e.into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/songs/{id}/text",
    params(
        ("id" = i32, Path, description = "Song ID"),
        SongTextQuery
    ),
    responses(
        (status = 200, description = "Requested verses as plain text (empty for an unknown song)", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid song ID", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn song_text_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let Path(id) = match id {
        Ok(v) => v,
        Err(e) => return invalid_id(e),
    };
    let query = SongTextQuery::from_pairs(&pairs);
    info!(song_id = id, "Handling GET song text request");

    match state.songs.song_text(id, query.page(), query.per_page()).await {
        Ok(text) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            text,
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/songs",
    request_body = SongPayload,
    responses(
        (status = 201, description = "Song enriched and stored", body = CreatedResponse),
        (status = 400, description = "Missing group_name/song_title or invalid body", body = ApiResponse),
        (status = 500, description = "Song info lookup or storage failed", body = ApiResponse)
    )
)]
pub async fn add_song_handler(
    State(state): State<AppState>,
    payload: Result<Json<SongPayload>, JsonRejection>,
) -> Response {
    info!("Handling POST song request");
    let Json(payload) = match payload {
        Ok(v) => v,
        Err(e) => {
            error!(error = %e, "Failed to decode request body");
            return json_400(e);
        }
    };

    match state.songs.add_song(payload).await {
        Ok(id) => (StatusCode::CREATED, Json(CreatedResponse { id })).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to add song");
            e.into_response()
        }
    }
}

#[utoipa::path(
    put,
    path = "/songs/{id}",
    params(
        ("id" = i32, Path, description = "Song ID")
    ),
    request_body = SongPayload,
    responses(
        (status = 200, description = "Song updated (or no such song)", body = StatusResponse),
        (status = 400, description = "Invalid song ID or body", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn update_song_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<SongPayload>, JsonRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(v) => v,
        Err(e) => return invalid_id(e),
    };
    info!(song_id = id, "Handling PUT song request");
    let Json(payload) = match payload {
        Ok(v) => v,
        Err(e) => return json_400(e),
    };

    match state.songs.update_song(id, payload).await {
        Ok(()) => Json(StatusResponse::success()).into_response(),
        Err(e) => {
            error!(song_id = id, error = %e, "Failed to update song");
            e.into_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/songs/{id}",
    params(
        ("id" = i32, Path, description = "Song ID")
    ),
    responses(
        (status = 200, description = "Song deleted (or no such song)", body = StatusResponse),
        (status = 400, description = "Invalid song ID", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn delete_song_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(v) => v,
        Err(e) => return invalid_id(e),
    };
    info!(song_id = id, "Handling DELETE song request");

    match state.songs.delete_song(id).await {
        Ok(()) => Json(StatusResponse::success()).into_response(),
        Err(e) => {
            error!(song_id = id, error = %e, "Failed to delete song");
            e.into_response()
        }
    }
}
