//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! The document column holds the tweet's compact JSON wire form; UUIDs are
//! stored as hyphenated lowercase strings in the key column.

use chirp_core::tweet::Tweet;
use uuid::Uuid;

use crate::Result;

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn encode_doc(tweet: &Tweet) -> Result<String> {
  Ok(serde_json::to_string(tweet)?)
}

/// A `tweets` row as it comes out of SQLite, before JSON decoding.
pub struct RawTweet {
  pub doc: String,
}

impl RawTweet {
  pub fn into_tweet(self) -> Result<Tweet> {
    Ok(serde_json::from_str(&self.doc)?)
  }
}

#[cfg(test)]
mod tests {
  use chrono::DateTime;

  use super::*;

  #[test]
  fn doc_round_trip() {
    let tweet = Tweet {
      tweet_id:   Uuid::new_v4(),
      text:       "hello".into(),
      created_at: DateTime::from_timestamp_millis(1_505_383_305_602).unwrap(),
    };
    let doc = encode_doc(&tweet).unwrap();
    let back = RawTweet { doc }.into_tweet().unwrap();
    assert_eq!(back, tweet);
  }
}
