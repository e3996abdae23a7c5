//! SQLite backend for the tally game store.
//!
//! All database access goes through [`tokio_rusqlite`], which runs blocking
//! SQLite calls on a dedicated thread instead of the async runtime.
//!
//! Unlike stores that initialise their schema at open, the `games` schema
//! here is applied explicitly through
//! [`GameStore::apply_schema`](tally_core::store::GameStore::apply_schema),
//! under the sequencing of an external migration runner.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
