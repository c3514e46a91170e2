//! Error types for `chirp-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("tweet not found: {0}")]
  TweetNotFound(Uuid),

  #[error("tweet text must not be blank")]
  BlankText,

  #[error("tweet text is {0} characters, maximum is {max}", max = crate::tweet::MAX_TEXT_CHARS)]
  TextTooLong(usize),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
