//! The `TweetStore` trait — the storage port implemented by backends
//! (e.g. `chirp-store-sqlite`).
//!
//! Higher layers (`chirp-api`) depend on this abstraction, not on any
//! concrete backend. Each method corresponds to a single atomic store
//! operation; there is no cross-call transaction, so read-modify-write
//! sequences built on top of it can race under concurrent writers.

use std::future::Future;

use uuid::Uuid;

use crate::tweet::{NewTweet, Tweet};

/// Abstraction over a Chirp tweet store backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait TweetStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Return every stored tweet. Ordering is unspecified.
  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Tweet>, Self::Error>> + Send + '_;

  /// Retrieve a tweet by id. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Tweet>, Self::Error>> + Send + '_;

  /// Persist a new tweet and return it. The `tweet_id` and `created_at`
  /// fields are assigned by the store.
  fn insert(
    &self,
    input: NewTweet,
  ) -> impl Future<Output = Result<Tweet, Self::Error>> + Send + '_;

  /// Overwrite the document keyed by `tweet.tweet_id` with `tweet`.
  ///
  /// Used after a fetch to replace a tweet's text. Callers must preserve
  /// `tweet_id` and `created_at` from the fetched tweet.
  fn save<'a>(
    &'a self,
    tweet: &'a Tweet,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Remove the tweet with the given id. A no-op if the id is absent;
  /// callers that need "not found" semantics check existence first.
  fn delete(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
