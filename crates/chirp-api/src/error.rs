use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("User not found")]
    UserNotFound,
    #[error("Tweet not found")]
    TweetNotFound,
    #[error("User already exists")]
    EmailTaken,
    #[error("Incorrect password")]
    WrongPassword,
    #[error("Token missing")]
    TokenMissing,
    #[error("Invalid token")]
    TokenInvalid,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UserNotFound | ApiError::TweetNotFound => StatusCode::NOT_FOUND,
            ApiError::EmailTaken => StatusCode::CONFLICT,
            ApiError::WrongPassword | ApiError::TokenMissing => StatusCode::UNAUTHORIZED,
            ApiError::TokenInvalid => StatusCode::FORBIDDEN,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(e) = &self {
            // Logged server-side; the body stays generic.
            error!("internal error: {e:#}");
        }
        let body = Json(json!({ "message": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}
