/// Database row types — these map directly to SQLite rows.
/// Distinct from chirp-types API models to keep the DB layer independent.

pub struct UserRow {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub pic: Option<String>,
    pub created_at: String,
}

pub struct TweetRow {
    pub id: String,
    pub user_id: String,
    pub post_description: String,
    pub like: i64,
    pub comment: i64,
    pub share_count: i64,
    pub retweet: i64,
    pub share: i64,
    pub created_at: String,
}
