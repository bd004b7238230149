use crate::app::song_service::ServiceError;
use crate::transport::http::types::ApiResponse;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub fn service_error_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Lookup(_) | ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = service_error_status(&self);
        (status, Json(ApiResponse::error(self.to_string()))).into_response()
    }
}

pub fn json_400(err: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error(format!("Invalid request body: {}", err))),
    )
        .into_response()
}

pub fn invalid_id(err: PathRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error(format!("Invalid song ID: {}", err))),
    )
        .into_response()
}
