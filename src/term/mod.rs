//! Terminal presentation - renders round snapshots
//!
//! Split like the rest of the crate: [`game_view`] turns a snapshot into
//! plain text lines (testable without a terminal), [`renderer`] owns the
//! raw-mode terminal and flushes those lines.

pub mod game_view;
pub mod renderer;

pub use game_view::GameView;
pub use renderer::TerminalRenderer;
