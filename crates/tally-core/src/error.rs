//! Error types for `tally-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  /// Schema application attempted while the `games` table already exists.
  #[error("games schema already exists")]
  SchemaConflict,

  /// Schema revert attempted while the `games` table does not exist.
  #[error("games schema does not exist")]
  SchemaNotFound,

  #[error("game not found: {0}")]
  GameNotFound(Uuid),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
