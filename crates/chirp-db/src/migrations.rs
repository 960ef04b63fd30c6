use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id          TEXT PRIMARY KEY,
            username    TEXT NOT NULL,
            email       TEXT NOT NULL UNIQUE,
            password    TEXT NOT NULL,
            pic         TEXT,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- Tweets are owned by exactly one user; deleting the user
        -- deletes its tweets. Insertion order is rowid order.
        CREATE TABLE IF NOT EXISTS tweets (
            id                TEXT PRIMARY KEY,
            user_id           TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            post_description  TEXT NOT NULL,
            \"like\"          INTEGER NOT NULL DEFAULT 0,
            comment           INTEGER NOT NULL DEFAULT 0,
            share_count       INTEGER NOT NULL DEFAULT 0,
            retweet           INTEGER NOT NULL DEFAULT 0,
            share             INTEGER NOT NULL DEFAULT 0,
            created_at        TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_tweets_user
            ON tweets(user_id);
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
