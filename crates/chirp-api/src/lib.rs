//! JSON REST + SSE API for Chirp.
//!
//! Exposes an axum [`Router`] backed by any [`chirp_core::store::TweetStore`].
//! TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = chirp_api::router(store.clone());
//! ```

pub mod error;
pub mod stream;
pub mod tweets;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use chirp_core::store::TweetStore;
use serde::Deserialize;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn router<S>(store: Arc<S>) -> Router<()>
where
  S: TweetStore + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/tweets", get(tweets::list::<S>).post(tweets::create::<S>))
    .route(
      "/tweets/{id}",
      get(tweets::get_one::<S>)
        .put(tweets::update_one::<S>)
        .delete(tweets::delete_one::<S>),
    )
    .route("/stream/tweets", get(stream::tweets::<S>))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
