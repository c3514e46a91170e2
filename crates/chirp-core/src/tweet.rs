//! Tweet — the single persisted record type.
//!
//! A tweet is a short text message plus identity metadata. The id and
//! creation timestamp are assigned by the store on insert and never change
//! afterwards; only the text may be replaced.

use chrono::{DateTime, Utc, serde::ts_milliseconds};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum tweet length, in characters.
pub const MAX_TEXT_CHARS: usize = 140;

/// A stored tweet.
///
/// Wire form: `{"id":"...","text":"...","createdAt":1505383305602}` —
/// `created_at` serialises as integer epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
  #[serde(rename = "id")]
  pub tweet_id:   Uuid,
  pub text:       String,
  #[serde(rename = "createdAt", with = "ts_milliseconds")]
  pub created_at: DateTime<Utc>,
}

/// A tweet that has not been persisted yet. The store assigns `tweet_id`
/// and `created_at` on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTweet {
  pub text: String,
}

impl NewTweet {
  pub fn new(text: impl Into<String>) -> Self { Self { text: text.into() } }
}

/// Check that `text` satisfies the tweet constraints: non-blank and at most
/// [`MAX_TEXT_CHARS`] characters.
pub fn validate_text(text: &str) -> crate::Result<()> {
  if text.trim().is_empty() {
    return Err(crate::Error::BlankText);
  }
  let chars = text.chars().count();
  if chars > MAX_TEXT_CHARS {
    return Err(crate::Error::TextTooLong(chars));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn validate_accepts_ordinary_text() {
    assert!(validate_text("tweet1").is_ok());
  }

  #[test]
  fn validate_rejects_empty_and_whitespace() {
    assert!(matches!(validate_text(""), Err(crate::Error::BlankText)));
    assert!(matches!(validate_text("   \t"), Err(crate::Error::BlankText)));
  }

  #[test]
  fn validate_rejects_overlong_text() {
    let long = "x".repeat(MAX_TEXT_CHARS + 1);
    assert!(matches!(
      validate_text(&long),
      Err(crate::Error::TextTooLong(141))
    ));
    assert!(validate_text(&"x".repeat(MAX_TEXT_CHARS)).is_ok());
  }

  #[test]
  fn tweet_serialises_created_at_as_epoch_millis() {
    let tweet = Tweet {
      tweet_id:   Uuid::nil(),
      text:       "tweet1".into(),
      created_at: DateTime::from_timestamp_millis(1_505_383_305_602).unwrap(),
    };
    let json = serde_json::to_value(&tweet).unwrap();
    assert_eq!(json["createdAt"], serde_json::json!(1_505_383_305_602_i64));
    assert_eq!(json["text"], serde_json::json!("tweet1"));

    let back: Tweet = serde_json::from_value(json).unwrap();
    assert_eq!(back, tweet);
  }
}
