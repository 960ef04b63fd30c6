use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// -- JWT Claims --

/// JWT claims shared between the token service (issuing) and the auth
/// middleware (verification). Canonical definition lives here in
/// chirp-types to eliminate duplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: usize,
}

// -- Auth --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user. Never carries the password hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub pic: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

// -- Tweets --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AddTweetRequest {
    pub post_description: String,
    #[serde(default)]
    pub like: i64,
    #[serde(default)]
    pub comment: i64,
    #[serde(default)]
    pub share_count: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetResponse {
    pub id: Uuid,
    pub post_description: String,
    pub like: i64,
    pub comment: i64,
    pub share_count: i64,
    pub retweet: i64,
    pub share: i64,
    pub created_at: DateTime<Utc>,
}

/// List-view of a tweet: the raw fields plus derived counter aliases.
/// The third alias is `shareActionCount`, not the raw field's name
/// `shareCount`, so the raw field is never shadowed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetView {
    #[serde(flatten)]
    pub tweet: TweetResponse,
    pub like_count: i64,
    pub retweet_count: i64,
    pub share_action_count: i64,
}

impl From<TweetResponse> for TweetView {
    fn from(tweet: TweetResponse) -> Self {
        Self {
            like_count: tweet.like,
            retweet_count: tweet.retweet,
            share_action_count: tweet.share,
            tweet,
        }
    }
}

// -- Actions --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionRequest {
    pub action: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub message: String,
    pub updated_tweet: TweetResponse,
}
