//! Integration tests for `SqliteStore` against an in-memory database.

use std::collections::HashSet;

use chirp_core::{store::TweetStore, tweet::NewTweet};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

// ─── Insert / find ───────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_find_by_id() {
  let s = store().await;

  let tweet = s.insert(NewTweet::new("tweet1")).await.unwrap();
  assert_eq!(tweet.text, "tweet1");

  let fetched = s.find_by_id(tweet.tweet_id).await.unwrap();
  assert_eq!(fetched, Some(tweet));
}

#[tokio::test]
async fn insert_assigns_distinct_ids() {
  let s = store().await;

  let a = s.insert(NewTweet::new("a")).await.unwrap();
  let b = s.insert(NewTweet::new("b")).await.unwrap();
  assert_ne!(a.tweet_id, b.tweet_id);
}

#[tokio::test]
async fn find_by_id_missing_returns_none() {
  let s = store().await;
  let result = s.find_by_id(Uuid::new_v4()).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn find_all_returns_every_tweet() {
  let s = store().await;

  let mut inserted = HashSet::new();
  for text in ["one", "two", "three"] {
    inserted.insert(s.insert(NewTweet::new(text)).await.unwrap().tweet_id);
  }

  let all = s.find_all().await.unwrap();
  assert_eq!(all.len(), 3);
  let found: HashSet<_> = all.iter().map(|t| t.tweet_id).collect();
  assert_eq!(found, inserted);
}

#[tokio::test]
async fn find_all_empty_store() {
  let s = store().await;
  assert!(s.find_all().await.unwrap().is_empty());
}

// ─── Save (overwrite) ────────────────────────────────────────────────────────

#[tokio::test]
async fn save_replaces_text_and_preserves_identity() {
  let s = store().await;

  let mut tweet = s.insert(NewTweet::new("tweet1")).await.unwrap();
  let original_id = tweet.tweet_id;
  let original_at = tweet.created_at;

  tweet.text = "tweet1-edited".into();
  s.save(&tweet).await.unwrap();

  let fetched = s.find_by_id(original_id).await.unwrap().unwrap();
  assert_eq!(fetched.text, "tweet1-edited");
  assert_eq!(fetched.tweet_id, original_id);
  assert_eq!(fetched.created_at, original_at);

  // No second row appeared.
  assert_eq!(s.find_all().await.unwrap().len(), 1);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_the_tweet() {
  let s = store().await;

  let tweet = s.insert(NewTweet::new("tweet1")).await.unwrap();
  s.delete(tweet.tweet_id).await.unwrap();

  assert!(s.find_by_id(tweet.tweet_id).await.unwrap().is_none());
  assert!(s.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_missing_id_is_a_no_op() {
  let s = store().await;
  s.insert(NewTweet::new("keep me")).await.unwrap();

  s.delete(Uuid::new_v4()).await.unwrap();
  assert_eq!(s.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_leaves_other_tweets_alone() {
  let s = store().await;

  let a = s.insert(NewTweet::new("a")).await.unwrap();
  let b = s.insert(NewTweet::new("b")).await.unwrap();

  s.delete(a.tweet_id).await.unwrap();

  let all = s.find_all().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].tweet_id, b.tweet_id);
}
