//! The `GameStore` trait and the schema lifecycle state machine.
//!
//! The trait is implemented by storage backends (e.g. `tally-store-sqlite`).
//! Schema operations are explicit and non-idempotent: sequencing and
//! ledger-keeping belong to an external migration runner, which invokes
//! `apply_schema` exactly once per environment and `revert_schema` only for
//! rollback.

use std::future::Future;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::{Game, GameUpdate, NewGame};

// ─── Schema lifecycle ────────────────────────────────────────────────────────

/// Whether the `games` table currently exists in the backing store.
///
/// `apply_schema` transitions `Absent → Present` and `revert_schema`
/// transitions `Present → Absent`; both fail when invoked from the wrong
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaState {
  Absent,
  Present,
}

impl SchemaState {
  pub fn is_present(&self) -> bool { matches!(self, Self::Present) }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a tally game store backend.
///
/// Every method returns a `Send` future, so implementations work on
/// multi-threaded async runtimes.
pub trait GameStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Schema lifecycle ──────────────────────────────────────────────────

  /// Create the `games` table. Not idempotent: fails with a schema-conflict
  /// error if the table already exists, leaving the store untouched.
  fn apply_schema(
    &self,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Drop the `games` table, inverting [`apply_schema`](Self::apply_schema).
  /// Fails with a schema-not-found error if the table does not exist.
  fn revert_schema(
    &self,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Report whether the `games` table exists, without attempting a
  /// transition.
  fn schema_state(
    &self,
  ) -> impl Future<Output = Result<SchemaState, Self::Error>> + Send + '_;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Insert a new game. The store assigns the id and stamps both timestamps
  /// with the same instant.
  fn create_game(
    &self,
    input: NewGame,
  ) -> impl Future<Output = Result<Game, Self::Error>> + Send + '_;

  /// Apply a partial update to an existing game, refreshing `updated_at`.
  /// `id` and `created_at` are never rewritten.
  fn update_game(
    &self,
    id: Uuid,
    update: GameUpdate,
  ) -> impl Future<Output = Result<Game, Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Retrieve a game by id. Returns `None` if not found.
  fn get_game(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Game>, Self::Error>> + Send + '_;

  /// List all games, oldest first.
  fn list_games(
    &self,
  ) -> impl Future<Output = Result<Vec<Game>, Self::Error>> + Send + '_;
}
