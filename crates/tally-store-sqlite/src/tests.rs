//! `SqliteStore` tests, run against in-memory databases.

use std::time::Duration;

use tally_core::{
  game::{GameUpdate, NewGame},
  store::{GameStore, SchemaState},
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

/// A store with the games schema already applied.
async fn migrated_store() -> SqliteStore {
  let s = store().await;
  s.apply_schema().await.expect("apply schema");
  s
}

/// Column names of the `games` table, in declaration order.
async fn games_columns(s: &SqliteStore) -> Vec<String> {
  s.conn
    .call(|conn| {
      let mut stmt = conn.prepare("PRAGMA table_info(games)")?;
      let cols = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
      Ok(cols)
    })
    .await
    .expect("table_info")
}

// ─── Schema lifecycle ────────────────────────────────────────────────────────

#[tokio::test]
async fn fresh_store_schema_absent() {
  let s = store().await;
  assert_eq!(s.schema_state().await.unwrap(), SchemaState::Absent);
}

#[tokio::test]
async fn apply_creates_exactly_the_declared_columns() {
  let s = migrated_store().await;
  assert!(s.schema_state().await.unwrap().is_present());

  let cols = games_columns(&s).await;
  assert_eq!(cols, ["id", "letters", "scores", "created_at", "updated_at"]);
}

#[tokio::test]
async fn apply_twice_conflicts() {
  let s = migrated_store().await;

  let err = s.apply_schema().await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(tally_core::Error::SchemaConflict)
  ));

  // The failed re-apply must leave the schema in place.
  assert!(s.schema_state().await.unwrap().is_present());
}

#[tokio::test]
async fn revert_without_schema_errors() {
  let s = store().await;

  let err = s.revert_schema().await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(tally_core::Error::SchemaNotFound)
  ));
}

#[tokio::test]
async fn revert_drops_the_table() {
  let s = migrated_store().await;
  s.revert_schema().await.unwrap();
  assert_eq!(s.schema_state().await.unwrap(), SchemaState::Absent);
}

#[tokio::test]
async fn apply_revert_apply_roundtrip() {
  let s = migrated_store().await;
  let first_shape = games_columns(&s).await;

  s.revert_schema().await.unwrap();
  s.apply_schema().await.unwrap();

  assert!(s.schema_state().await.unwrap().is_present());
  assert_eq!(games_columns(&s).await, first_shape);
}

// ─── Row operations ──────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_game() {
  let s = migrated_store().await;

  let game = s
    .create_game(NewGame {
      letters: Some("ABCDE".into()),
      scores:  Some("5,3,1".into()),
    })
    .await
    .unwrap();

  assert_eq!(game.created_at, game.updated_at);

  let fetched = s.get_game(game.id).await.unwrap().expect("game exists");
  assert_eq!(fetched.id, game.id);
  assert_eq!(fetched.letters.as_deref(), Some("ABCDE"));
  assert_eq!(fetched.scores.as_deref(), Some("5,3,1"));
  assert_eq!(fetched.created_at, game.created_at);
  assert_eq!(fetched.updated_at, game.updated_at);
}

#[tokio::test]
async fn create_game_with_absent_fields() {
  let s = migrated_store().await;
  let game = s.create_game(NewGame::default()).await.unwrap();

  let fetched = s.get_game(game.id).await.unwrap().unwrap();
  assert!(fetched.letters.is_none());
  assert!(fetched.scores.is_none());
}

#[tokio::test]
async fn created_ids_are_unique() {
  let s = migrated_store().await;
  let a = s.create_game(NewGame::default()).await.unwrap();
  let b = s.create_game(NewGame::default()).await.unwrap();
  assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn update_scores_advances_updated_at() {
  let s = migrated_store().await;
  let game = s
    .create_game(NewGame {
      letters: Some("ABCDE".into()),
      scores:  Some("5,3,1".into()),
    })
    .await
    .unwrap();

  // Make sure the clock moves between create and update.
  tokio::time::sleep(Duration::from_millis(5)).await;

  let updated = s
    .update_game(game.id, GameUpdate {
      scores: Some("5,3,1,8".into()),
      ..Default::default()
    })
    .await
    .unwrap();

  assert_eq!(updated.scores.as_deref(), Some("5,3,1,8"));
  assert_eq!(updated.letters.as_deref(), Some("ABCDE"));
  assert_eq!(updated.created_at, game.created_at);
  assert!(updated.updated_at > updated.created_at);

  // The persisted row agrees.
  let fetched = s.get_game(game.id).await.unwrap().unwrap();
  assert_eq!(fetched.scores.as_deref(), Some("5,3,1,8"));
  assert_eq!(fetched.letters.as_deref(), Some("ABCDE"));
  assert!(fetched.updated_at > fetched.created_at);
}

#[tokio::test]
async fn update_missing_game_errors() {
  let s = migrated_store().await;

  let err = s
    .update_game(Uuid::new_v4(), GameUpdate::default())
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(tally_core::Error::GameNotFound(_))
  ));
}

#[tokio::test]
async fn get_game_missing_returns_none() {
  let s = migrated_store().await;
  assert!(s.get_game(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn list_games_oldest_first() {
  let s = migrated_store().await;

  let a = s
    .create_game(NewGame {
      letters: Some("AAAAA".into()),
      ..Default::default()
    })
    .await
    .unwrap();
  tokio::time::sleep(Duration::from_millis(5)).await;
  let b = s
    .create_game(NewGame {
      letters: Some("BBBBB".into()),
      ..Default::default()
    })
    .await
    .unwrap();

  let all = s.list_games().await.unwrap();
  assert_eq!(all.len(), 2);
  assert_eq!(all[0].id, a.id);
  assert_eq!(all[1].id, b.id);
}

#[tokio::test]
async fn writes_against_absent_schema_surface_database_error() {
  let s = store().await;
  let err = s.create_game(NewGame::default()).await.unwrap_err();
  assert!(matches!(err, crate::Error::Database(_)));
}
