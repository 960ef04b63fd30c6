use std::sync::Arc;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::{SaltString, rand_core::OsRng}};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use uuid::Uuid;

use chirp_db::Database;
use chirp_db::models::UserRow;
use chirp_types::api::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

use crate::error::ApiError;
use crate::token;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub jwt_secret: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // Validate input
    if req.username.is_empty() || req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::BadRequest(
            "username, email and password are required".into(),
        ));
    }

    // Hash password with Argon2id
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(req.password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("password hash: {e}"))?
        .to_string();

    let user_id = Uuid::new_v4();

    // The UNIQUE constraint on email is the duplicate check; no
    // read-then-insert window.
    let inserted = state.db.create_user(
        &user_id.to_string(),
        &req.username,
        &req.email,
        &password_hash,
    )?;
    if !inserted {
        return Err(ApiError::EmailTaken);
    }

    let user = state
        .db
        .get_user_by_id(&user_id.to_string())?
        .ok_or_else(|| anyhow::anyhow!("user {user_id} vanished after insert"))?;

    let token = token::issue(&state.jwt_secret, user_id)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: user_response(user),
            token,
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .db
        .get_user_by_email(&req.email)?
        .ok_or(ApiError::UserNotFound)?;

    // Verify password
    let parsed_hash = PasswordHash::new(&user.password)
        .map_err(|e| anyhow::anyhow!("stored hash for {} unparseable: {e}", user.id))?;

    Argon2::default()
        .verify_password(req.password.as_bytes(), &parsed_hash)
        .map_err(|_| ApiError::WrongPassword)?;

    let user_id: Uuid = user
        .id
        .parse()
        .map_err(|e| anyhow::anyhow!("corrupt user id '{}': {e}", user.id))?;

    let token = token::issue(&state.jwt_secret, user_id)?;

    Ok(Json(AuthResponse {
        user: user_response(user),
        token,
    }))
}

fn user_response(row: UserRow) -> UserResponse {
    let created_at = crate::parse_timestamp(&row.created_at, "user", &row.id);
    UserResponse {
        id: row.id.parse().unwrap_or_default(),
        username: row.username,
        email: row.email,
        pic: row.pic,
        created_at,
    }
}
