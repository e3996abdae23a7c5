//! Conversions between domain types and the text representations SQLite
//! stores.
//!
//! Timestamps are stored as RFC 3339 strings; UUIDs as hyphenated lowercase
//! strings. `letters` and `scores` pass through untouched.

use chrono::{DateTime, Utc};
use tally_core::game::Game;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `games` row.
pub struct RawGame {
  pub id:         String,
  pub letters:    Option<String>,
  pub scores:     Option<String>,
  pub created_at: String,
  pub updated_at: String,
}

impl RawGame {
  pub fn into_game(self) -> Result<Game> {
    Ok(Game {
      id:         decode_uuid(&self.id)?,
      letters:    self.letters,
      scores:     self.scores,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}
