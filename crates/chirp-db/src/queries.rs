use crate::Database;
use crate::models::{TweetRow, UserRow};
use anyhow::Result;
use chirp_types::models::TweetAction;
use rusqlite::Connection;

const TWEET_COLUMNS: &str =
    "id, user_id, post_description, \"like\", comment, share_count, retweet, share, created_at";

impl Database {
    // -- Users --

    /// Insert a new user. Returns false when the email is already taken:
    /// the UNIQUE constraint on email is the uniqueness check, so no
    /// read precedes the write.
    pub fn create_user(
        &self,
        id: &str,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<bool> {
        self.with_conn(|conn| {
            match conn.execute(
                "INSERT INTO users (id, username, email, password) VALUES (?1, ?2, ?3, ?4)",
                (id, username, email, password_hash),
            ) {
                Ok(_) => Ok(true),
                Err(rusqlite::Error::SqliteFailure(e, _))
                    if e.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    Ok(false)
                }
                Err(e) => Err(e.into()),
            }
        })
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user(conn, "email", email))
    }

    pub fn get_user_by_id(&self, id: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user(conn, "id", id))
    }

    // -- Tweets --

    pub fn insert_tweet(
        &self,
        id: &str,
        user_id: &str,
        post_description: &str,
        like: i64,
        comment: i64,
        share_count: i64,
    ) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO tweets (id, user_id, post_description, \"like\", comment, share_count)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![id, user_id, post_description, like, comment, share_count],
            )?;
            Ok(())
        })
    }

    /// All tweets of a user in insertion order.
    pub fn get_tweets(&self, user_id: &str) -> Result<Vec<TweetRow>> {
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT {TWEET_COLUMNS} FROM tweets WHERE user_id = ?1 ORDER BY rowid"
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map([user_id], tweet_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn get_tweet(&self, user_id: &str, tweet_id: &str) -> Result<Option<TweetRow>> {
        self.with_conn(|conn| {
            let sql = format!("SELECT {TWEET_COLUMNS} FROM tweets WHERE id = ?1 AND user_id = ?2");
            let mut stmt = conn.prepare(&sql)?;
            let row = stmt.query_row([tweet_id, user_id], tweet_from_row).optional()?;
            Ok(row)
        })
    }

    /// Increment one counter by exactly 1 in a single UPDATE, so
    /// concurrent increments never lose updates. Returns false when no
    /// such tweet exists for the user.
    pub fn increment_action(
        &self,
        user_id: &str,
        tweet_id: &str,
        action: TweetAction,
    ) -> Result<bool> {
        let column = match action {
            TweetAction::Like => "\"like\"",
            TweetAction::Retweet => "retweet",
            TweetAction::Share => "share",
        };

        self.with_conn(|conn| {
            let sql = format!(
                "UPDATE tweets SET {column} = {column} + 1 WHERE id = ?1 AND user_id = ?2"
            );
            let affected = conn.execute(&sql, [tweet_id, user_id])?;
            Ok(affected > 0)
        })
    }

    /// Returns false when no such tweet exists for the user.
    pub fn delete_tweet(&self, user_id: &str, tweet_id: &str) -> Result<bool> {
        self.with_conn(|conn| {
            let affected = conn.execute(
                "DELETE FROM tweets WHERE id = ?1 AND user_id = ?2",
                [tweet_id, user_id],
            )?;
            Ok(affected > 0)
        })
    }
}

fn query_user(conn: &Connection, key: &str, value: &str) -> Result<Option<UserRow>> {
    let sql = format!(
        "SELECT id, username, email, password, pic, created_at FROM users WHERE {key} = ?1"
    );
    let mut stmt = conn.prepare(&sql)?;

    let row = stmt
        .query_row([value], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                username: row.get(1)?,
                email: row.get(2)?,
                password: row.get(3)?,
                pic: row.get(4)?,
                created_at: row.get(5)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn tweet_from_row(row: &rusqlite::Row<'_>) -> std::result::Result<TweetRow, rusqlite::Error> {
    Ok(TweetRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        post_description: row.get(2)?,
        like: row.get(3)?,
        comment: row.get(4)?,
        share_count: row.get(5)?,
        retweet: row.get(6)?,
        share: row.get(7)?,
        created_at: row.get(8)?,
    })
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
