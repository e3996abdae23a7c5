//! [`SqliteStore`], the SQLite implementation of [`GameStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use tally_core::{
  game::{Game, GameUpdate, NewGame},
  store::{GameStore, SchemaState},
};

use crate::{
  encode::{encode_dt, encode_uuid, RawGame},
  schema::{CREATE_GAMES, DROP_GAMES, PRAGMAS},
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A game store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted. Opening a
/// store does not create the `games` table; that is
/// [`GameStore::apply_schema`]'s job, invoked by the migration runner.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a database file at `path` and configure the
  /// connection. Fails with [`Error::StorageUnavailable`] if the file
  /// cannot be opened.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path)
      .await
      .map_err(Error::StorageUnavailable)?;
    let store = Self { conn };
    store.configure().await?;
    Ok(store)
  }

  /// Open an ephemeral in-memory store.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory()
      .await
      .map_err(Error::StorageUnavailable)?;
    let store = Self { conn };
    store.configure().await?;
    Ok(store)
  }

  async fn configure(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(PRAGMAS)?;
        Ok(())
      })
      .await?;
    tracing::debug!("sqlite connection configured");
    Ok(())
  }

  /// Probe `sqlite_master` for the `games` table.
  async fn games_table_exists(&self) -> Result<bool> {
    let exists: bool = self
      .conn
      .call(|conn| {
        let exists: bool = conn
          .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'games'",
            [],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);
        Ok(exists)
      })
      .await?;
    Ok(exists)
  }
}

// ─── GameStore impl ──────────────────────────────────────────────────────────

impl GameStore for SqliteStore {
  type Error = Error;

  // ── Schema lifecycle ──────────────────────────────────────────────────────

  async fn apply_schema(&self) -> Result<()> {
    // Check-then-act; the external runner guarantees schema operations are
    // applied sequentially, never concurrently.
    if self.games_table_exists().await? {
      return Err(tally_core::Error::SchemaConflict.into());
    }

    self
      .conn
      .call(|conn| {
        conn.execute_batch(CREATE_GAMES)?;
        Ok(())
      })
      .await?;

    tracing::info!("applied games schema");
    Ok(())
  }

  async fn revert_schema(&self) -> Result<()> {
    if !self.games_table_exists().await? {
      return Err(tally_core::Error::SchemaNotFound.into());
    }

    self
      .conn
      .call(|conn| {
        conn.execute_batch(DROP_GAMES)?;
        Ok(())
      })
      .await?;

    tracing::info!("reverted games schema");
    Ok(())
  }

  async fn schema_state(&self) -> Result<SchemaState> {
    Ok(if self.games_table_exists().await? {
      SchemaState::Present
    } else {
      SchemaState::Absent
    })
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn create_game(&self, input: NewGame) -> Result<Game> {
    let now = Utc::now();
    let game = Game {
      id:         Uuid::new_v4(),
      letters:    input.letters,
      scores:     input.scores,
      created_at: now,
      updated_at: now,
    };

    let id_str      = encode_uuid(game.id);
    let letters     = game.letters.clone();
    let scores      = game.scores.clone();
    let created_str = encode_dt(game.created_at);
    let updated_str = encode_dt(game.updated_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO games (id, letters, scores, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id_str, letters, scores, created_str, updated_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(game)
  }

  async fn update_game(&self, id: Uuid, update: GameUpdate) -> Result<Game> {
    let mut game = self
      .get_game(id)
      .await?
      .ok_or(tally_core::Error::GameNotFound(id))?;

    if let Some(letters) = update.letters {
      game.letters = Some(letters);
    }
    if let Some(scores) = update.scores {
      game.scores = Some(scores);
    }
    game.updated_at = Utc::now();

    let id_str      = encode_uuid(game.id);
    let letters     = game.letters.clone();
    let scores      = game.scores.clone();
    let updated_str = encode_dt(game.updated_at);

    // `id` and `created_at` are never part of the SET list.
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE games SET letters = ?2, scores = ?3, updated_at = ?4
           WHERE id = ?1",
          rusqlite::params![id_str, letters, scores, updated_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(game)
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn get_game(&self, id: Uuid) -> Result<Option<Game>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawGame> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, letters, scores, created_at, updated_at
               FROM games WHERE id = ?1",
              rusqlite::params![id_str],
              |row| {
                Ok(RawGame {
                  id:         row.get(0)?,
                  letters:    row.get(1)?,
                  scores:     row.get(2)?,
                  created_at: row.get(3)?,
                  updated_at: row.get(4)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawGame::into_game).transpose()
  }

  async fn list_games(&self) -> Result<Vec<Game>> {
    let raws: Vec<RawGame> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, letters, scores, created_at, updated_at
           FROM games ORDER BY created_at",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawGame {
              id:         row.get(0)?,
              letters:    row.get(1)?,
              scores:     row.get(2)?,
              created_at: row.get(3)?,
              updated_at: row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawGame::into_game).collect()
  }
}
