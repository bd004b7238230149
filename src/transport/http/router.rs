use crate::domain::song::{Song, SongDetail, SongPayload};
use crate::transport::http::handlers::{health, songs};
use crate::transport::http::types::{ApiResponse, CreatedResponse, StatusResponse};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Music API", description = "API for managing a music library"),
    paths(
        health::healthcheck_handler,
        songs::list_songs_handler,
        songs::get_song_handler,
        songs::song_text_handler,
        songs::add_song_handler,
        songs::update_song_handler,
        songs::delete_song_handler
    ),
    components(schemas(
        ApiResponse,
        CreatedResponse,
        StatusResponse,
        Song,
        SongPayload,
        SongDetail
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/songs",
            get(songs::list_songs_handler).post(songs::add_song_handler),
        )
        .route(
            "/songs/:id",
            get(songs::get_song_handler)
                .put(songs::update_song_handler)
                .delete(songs::delete_song_handler),
        )
        .route("/songs/:id/text", get(songs::song_text_handler))
        .with_state(app_state)
}
