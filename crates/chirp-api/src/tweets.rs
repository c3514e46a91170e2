//! Handlers for `/tweets` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/tweets` | All tweets as a JSON array, order unspecified |
//! | `POST`   | `/tweets` | Body: `{"text":"..."}`; returns 201 + stored tweet |
//! | `GET`    | `/tweets/:id` | 404 (empty body) if not found |
//! | `PUT`    | `/tweets/:id` | Replaces the text field only |
//! | `DELETE` | `/tweets/:id` | 200 empty body, or 404 |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use chirp_core::{
  store::TweetStore,
  tweet::{self, NewTweet, Tweet},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;

/// JSON body accepted by `POST /tweets` and `PUT /tweets/:id`.
#[derive(Debug, Deserialize)]
pub struct TweetBody {
  pub text: String,
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /tweets`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Tweet>>, ApiError>
where
  S: TweetStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let tweets = store.find_all().await.map_err(ApiError::store)?;
  Ok(Json(tweets))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /tweets` — body: `{"text":"..."}`; returns 201 + the stored tweet,
/// with its store-assigned id and creation timestamp.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<TweetBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TweetStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  tweet::validate_text(&body.text)?;
  let stored = store
    .insert(NewTweet::new(body.text))
    .await
    .map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(stored)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /tweets/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Tweet>, ApiError>
where
  S: TweetStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let found = store
    .find_by_id(id)
    .await
    .map_err(ApiError::store)?
    .ok_or(chirp_core::Error::TweetNotFound(id))?;
  Ok(Json(found))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /tweets/:id` — fetch-then-overwrite of the text field only.
///
/// Id and creation timestamp are carried over from the stored tweet. The
/// fetch and the save are two separate store calls; a concurrent writer on
/// the same id can interleave between them (lost update, accepted).
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<TweetBody>,
) -> Result<Json<Tweet>, ApiError>
where
  S: TweetStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  tweet::validate_text(&body.text)?;

  let mut existing = store
    .find_by_id(id)
    .await
    .map_err(ApiError::store)?
    .ok_or(chirp_core::Error::TweetNotFound(id))?;

  existing.text = body.text;
  store.save(&existing).await.map_err(ApiError::store)?;
  Ok(Json(existing))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /tweets/:id` — fetch-then-remove; 200 with empty body on success.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: TweetStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store
    .find_by_id(id)
    .await
    .map_err(ApiError::store)?
    .ok_or(chirp_core::Error::TweetNotFound(id))?;

  store.delete(id).await.map_err(ApiError::store)?;
  Ok(StatusCode::OK)
}
