//! Core module - pure game logic with no external dependencies
//!
//! This module contains the round state machine, board, scoring, and
//! achievement rules. It has zero dependencies on UI, networking, or I/O,
//! and is fully deterministic given a seed.

pub mod achievements;
pub mod board;
pub mod rng;
pub mod round;
pub mod scoring;
pub mod theme;

// Re-export commonly used types
pub use achievements::{Achievement, Achievements};
pub use board::{Board, Card};
pub use rng::SimpleRng;
pub use round::{FlipOutcome, HintOutcome, Round, RoundSnapshot, RoundSummary};
pub use scoring::{calculate_rating, compute_score, ScoreInput};
pub use theme::Theme;
