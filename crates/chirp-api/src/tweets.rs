use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use tracing::warn;
use uuid::Uuid;

use chirp_db::models::TweetRow;
use chirp_types::api::{ActionRequest, ActionResponse, AddTweetRequest, TweetResponse, TweetView};
use chirp_types::models::TweetAction;

use crate::auth::AppState;
use crate::error::ApiError;

pub async fn list_tweets(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let uid = user_id.to_string();
    state.db.get_user_by_id(&uid)?.ok_or(ApiError::UserNotFound)?;

    let views: Vec<TweetView> = state
        .db
        .get_tweets(&uid)?
        .into_iter()
        .map(|row| TweetView::from(tweet_response(row)))
        .collect();

    Ok(Json(views))
}

pub async fn add_tweet(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<AddTweetRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let uid = user_id.to_string();
    state.db.get_user_by_id(&uid)?.ok_or(ApiError::UserNotFound)?;

    let tweet_id = Uuid::new_v4();
    state.db.insert_tweet(
        &tweet_id.to_string(),
        &uid,
        &req.post_description,
        req.like,
        req.comment,
        req.share_count,
    )?;

    // The full updated sequence, matching the list order.
    let tweets: Vec<TweetResponse> = state
        .db
        .get_tweets(&uid)?
        .into_iter()
        .map(tweet_response)
        .collect();

    Ok((StatusCode::CREATED, Json(tweets)))
}

pub async fn apply_action(
    State(state): State<AppState>,
    Path((user_id, tweet_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<ActionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let uid = user_id.to_string();
    let tid = tweet_id.to_string();
    state.db.get_user_by_id(&uid)?.ok_or(ApiError::UserNotFound)?;

    // An unrecognized action increments nothing but still succeeds.
    if let Some(action) = TweetAction::parse(&req.action) {
        let updated = state.db.increment_action(&uid, &tid, action)?;
        if !updated {
            return Err(ApiError::TweetNotFound);
        }
    }

    let tweet = state
        .db
        .get_tweet(&uid, &tid)?
        .ok_or(ApiError::TweetNotFound)?;

    Ok(Json(ActionResponse {
        message: "Action count updated successfully".into(),
        updated_tweet: tweet_response(tweet),
    }))
}

pub async fn delete_tweet(
    State(state): State<AppState>,
    Path((user_id, tweet_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    let uid = user_id.to_string();
    state.db.get_user_by_id(&uid)?.ok_or(ApiError::UserNotFound)?;

    let deleted = state.db.delete_tweet(&uid, &tweet_id.to_string())?;
    if !deleted {
        return Err(ApiError::TweetNotFound);
    }

    Ok(Json(json!({ "message": "Tweet deleted successfully" })))
}

fn tweet_response(row: TweetRow) -> TweetResponse {
    let created_at = crate::parse_timestamp(&row.created_at, "tweet", &row.id);
    TweetResponse {
        id: row.id.parse().unwrap_or_else(|e| {
            warn!("Corrupt tweet id '{}': {}", row.id, e);
            Uuid::default()
        }),
        post_description: row.post_description,
        like: row.like,
        comment: row.comment,
        share_count: row.share_count,
        retweet: row.retweet,
        share: row.share,
        created_at,
    }
}
