//! SQL schema for the tally SQLite store.
//!
//! The `games` DDL is plain `CREATE TABLE` (no `IF NOT EXISTS`): application
//! and revert are explicit, directional operations checked against the
//! current state first. `PRAGMA user_version` records which side of the
//! migration the database is on.

/// Connection-level pragmas, run once at open.
pub const PRAGMAS: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;
";

/// Forward DDL: creates the `games` table and stamps the schema version.
pub const CREATE_GAMES: &str = "
CREATE TABLE games (
    id          TEXT PRIMARY KEY,   -- hyphenated lowercase UUID
    letters     TEXT,               -- unconstrained, nullable
    scores      TEXT,               -- opaque score text, nullable
    created_at  TEXT NOT NULL,      -- RFC 3339 UTC, never rewritten
    updated_at  TEXT NOT NULL       -- RFC 3339 UTC, refreshed on mutation
);

PRAGMA user_version = 1;
";

/// Inverse DDL: drops the `games` table and resets the schema version.
pub const DROP_GAMES: &str = "
DROP TABLE games;

PRAGMA user_version = 0;
";
