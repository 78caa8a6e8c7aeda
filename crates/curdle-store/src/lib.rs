//! Record store engine for the curdle scores file.
//!
//! The store is a headerless sequence of fixed 21-byte lines, one per
//! player. This crate layers, leaves first:
//!
//! - [`codec`] — between [`curdle_types::ScoreRecord`] and the wire line
//! - [`locator`] — sequential scan with structural validation
//! - [`mutator`] — find-or-append with overflow-checked accumulation
//! - [`session`] — the top-level [`adjust_score`] entry point, which
//!   brackets the `open(2)` with a [`curdle_privsep::EuidGuard`]
//!
//! Single-writer by design: nothing here takes a file lock, so exactly one
//! process instance may mutate a given store at a time.

pub mod codec;
pub mod config;
pub mod locator;
pub mod mutator;
pub mod session;

pub use config::{DEFAULT_STORE_PATH, StoreConfig};
pub use mutator::{AdjustedScore, adjust_score_file};
pub use session::{adjust_score, store_owner};
