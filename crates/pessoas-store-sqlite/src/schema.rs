//! SQL schema for the Pessoas SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Rows are never updated or deleted.
CREATE TABLE IF NOT EXISTS people (
    id     TEXT PRIMARY KEY,      -- hyphenated UUIDv7; sorts by creation time
    nick   TEXT NOT NULL UNIQUE,
    name   TEXT NOT NULL,
    birth  TEXT NOT NULL,         -- YYYY-MM-DD
    stack  TEXT NOT NULL DEFAULT '[]'  -- JSON array, caller order
);

PRAGMA user_version = 1;
";
