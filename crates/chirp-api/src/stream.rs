//! Handler for the `GET /stream/tweets` server-sent-events endpoint.
//!
//! Delivers the same set of tweets as `GET /tweets`, but as a
//! `text/event-stream` response with one event per tweet. The stream is a
//! snapshot taken at request start: it is finite, ends after the last tweet,
//! and does not tail subsequent inserts. Each event is written out as the
//! client consumes the stream, so a slow reader naturally paces delivery.

use std::sync::Arc;

use axum::{
  extract::State,
  response::sse::{Event, Sse},
};
use chirp_core::store::TweetStore;
use futures::stream::{self, Stream};

use crate::error::ApiError;

/// `GET /stream/tweets`
pub async fn tweets<S>(
  State(store): State<Arc<S>>,
) -> Result<Sse<impl Stream<Item = Result<Event, axum::Error>>>, ApiError>
where
  S: TweetStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let snapshot = store.find_all().await.map_err(ApiError::store)?;

  let events = stream::iter(
    snapshot
      .into_iter()
      .map(|tweet| Event::default().json_data(tweet)),
  );

  Ok(Sse::new(events))
}
