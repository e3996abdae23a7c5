//! Core types and trait definitions for the tally game store.
//!
//! This crate carries no HTTP or database dependencies. Storage backends
//! implement [`store::GameStore`]; everything else depends on this crate,
//! and it depends on nothing heavier than `chrono` and `uuid`.

// Native `async fn` in traits is fine here; the advisory lint about `Send`
// bounds on the returned futures does not apply to how this trait is used.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod game;
pub mod store;

pub use error::{Error, Result};
