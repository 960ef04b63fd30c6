use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::auth::AppState;
use crate::error::ApiError;
use crate::token;

/// Extract and verify the JWT from the Authorization header. The header
/// value is the raw token; a `Bearer ` prefix is tolerated and stripped.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::TokenMissing)?;

    let raw = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

    let claims = token::verify(&state.jwt_secret, raw).map_err(|_| ApiError::TokenInvalid)?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
