//! Terminal memory-matching (concentration) card game.
//!
//! The crate splits into a pure, deterministic core and thin I/O shells:
//!
//! - [`core`]: round state machine, board, scoring, rating, achievements.
//!   Time advancement is an explicit input, so every timing rule is
//!   unit-testable without real clocks.
//! - [`store`]: best-score and achievement persistence behind a trait.
//! - [`term`]: crossterm presentation of a round snapshot.
//! - [`input`]: key to user-intent mapping.
//! - [`types`]: shared plain data types and constants.

pub mod core;
pub mod input;
pub mod store;
pub mod term;
pub mod types;
