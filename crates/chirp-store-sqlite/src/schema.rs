//! SQL schema for the Chirp SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// A single document table: the primary key duplicates the `id` field inside
/// the JSON document so lookups stay a plain keyed read. No secondary
/// indexes.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS tweets (
    tweet_id  TEXT PRIMARY KEY,
    doc       TEXT NOT NULL    -- JSON: {\"id\":...,\"text\":...,\"createdAt\":...}
);

PRAGMA user_version = 1;
";
