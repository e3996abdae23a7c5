//! The `Game` entity: the persisted record of a single play.
//!
//! A game row holds the drawn letters and the recorded scores as opaque
//! text. Neither column is validated or interpreted here; scoring lives in
//! whatever application embeds the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted game record.
///
/// `created_at` is set once at insertion and never rewritten. `updated_at`
/// equals `created_at` at insertion and is refreshed by every mutation, so
/// `created_at <= updated_at` always holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
  pub id:         Uuid,
  /// The letters drawn for this game. Unconstrained; may be absent.
  pub letters:    Option<String>,
  /// Recorded score data, kept as opaque text (e.g. `"5,3,1"`).
  pub scores:     Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Input for [`GameStore::create_game`](crate::store::GameStore::create_game).
/// The id and both timestamps are assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct NewGame {
  pub letters: Option<String>,
  pub scores:  Option<String>,
}

/// A partial update for [`GameStore::update_game`](crate::store::GameStore::update_game).
///
/// A `None` field is left unchanged; an update cannot null out a column.
#[derive(Debug, Clone, Default)]
pub struct GameUpdate {
  pub letters: Option<String>,
  pub scores:  Option<String>,
}
