pub mod auth;
pub mod error;
pub mod middleware;
pub mod token;
pub mod tweets;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post},
};
use chrono::{DateTime, Utc};
use tracing::warn;

use auth::AppState;

/// Build the full API router. The tweet-lifecycle routes sit behind the
/// auth guard; register and login are public.
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/api/user/tweets/{id}", get(tweets::list_tweets))
        .route("/api/user/tweets/{id}", post(tweets::add_tweet))
        .route("/api/user/tweets/{user_id}/{tweet_id}/action", post(tweets::apply_action))
        .route("/api/user/tweets/{user_id}/{tweet_id}", delete(tweets::delete_tweet))
        .layer(from_fn_with_state(state.clone(), middleware::require_auth))
        .with_state(state);

    Router::new().merge(public_routes).merge(protected_routes)
}

pub(crate) fn parse_timestamp(value: &str, entity: &str, id: &str) -> DateTime<Utc> {
    value
        .parse::<DateTime<Utc>>()
        .or_else(|_| {
            // SQLite stores timestamps as "YYYY-MM-DD HH:MM:SS" without timezone.
            // Parse as naive UTC and convert.
            chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
                .map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            warn!("Corrupt created_at '{}' on {} '{}': {}", value, entity, id, e);
            DateTime::default()
        })
}
