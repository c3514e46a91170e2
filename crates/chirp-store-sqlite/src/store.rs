//! [`SqliteStore`] — the SQLite implementation of [`TweetStore`].

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use chirp_core::{
  store::TweetStore,
  tweet::{NewTweet, Tweet},
};

use crate::{
  Result,
  encode::{RawTweet, encode_doc, encode_uuid},
  schema::SCHEMA,
};

/// A Chirp tweet store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Upsert the document for `tweet` under its id.
  async fn put_doc(&self, tweet: &Tweet) -> Result<()> {
    let id_str  = encode_uuid(tweet.tweet_id);
    let doc_str = encode_doc(tweet)?;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO tweets (tweet_id, doc) VALUES (?1, ?2)
           ON CONFLICT (tweet_id) DO UPDATE SET doc = excluded.doc",
          rusqlite::params![id_str, doc_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

/// Current time truncated to millisecond precision.
///
/// The document wire form carries epoch milliseconds, so the tweet we hand
/// back from `insert` must match what a later `find_by_id` decodes.
fn now_millis() -> DateTime<Utc> {
  let now = Utc::now();
  DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

// ─── TweetStore impl ─────────────────────────────────────────────────────────

impl TweetStore for SqliteStore {
  type Error = crate::Error;

  async fn find_all(&self) -> Result<Vec<Tweet>> {
    let raws: Vec<RawTweet> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare("SELECT doc FROM tweets")?;
        let rows = stmt
          .query_map([], |row| Ok(RawTweet { doc: row.get(0)? }))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawTweet::into_tweet).collect()
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Tweet>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawTweet> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT doc FROM tweets WHERE tweet_id = ?1",
              rusqlite::params![id_str],
              |row| Ok(RawTweet { doc: row.get(0)? }),
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawTweet::into_tweet).transpose()
  }

  async fn insert(&self, input: NewTweet) -> Result<Tweet> {
    let tweet = Tweet {
      tweet_id:   Uuid::new_v4(),
      text:       input.text,
      created_at: now_millis(),
    };

    self.put_doc(&tweet).await?;
    Ok(tweet)
  }

  async fn save(&self, tweet: &Tweet) -> Result<()> {
    self.put_doc(tweet).await
  }

  async fn delete(&self, id: Uuid) -> Result<()> {
    let id_str = encode_uuid(id);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "DELETE FROM tweets WHERE tweet_id = ?1",
          rusqlite::params![id_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
