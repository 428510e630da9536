//! Input module - maps key presses to user intents
//!
//! Card selection is cursor-driven: arrows (or hjkl) move the cursor over
//! the grid, Enter flips the card under it. The cursor lives here, not in
//! the engine; the engine only ever sees `Intent::Flip(index)`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Intent;

/// Cursor over the board grid, plus key dispatch
#[derive(Debug, Clone, Copy)]
pub struct InputHandler {
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
}

impl InputHandler {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            row: 0,
            col: 0,
        }
    }

    /// Reset for a new grid shape, clamping the cursor into range
    pub fn set_grid(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.row = self.row.min(rows.saturating_sub(1));
        self.col = self.col.min(cols.saturating_sub(1));
    }

    /// Card index currently under the cursor
    pub fn cursor_index(&self) -> usize {
        self.row * self.cols + self.col
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Translate a key press. Cursor movement is handled internally and
    /// yields no intent.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Intent> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.col = self.col.checked_sub(1).unwrap_or(self.cols - 1);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.col = (self.col + 1) % self.cols;
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.row = self.row.checked_sub(1).unwrap_or(self.rows - 1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.row = (self.row + 1) % self.rows;
                None
            }
            KeyCode::Enter => Some(Intent::Flip(self.cursor_index())),
            KeyCode::Char(' ') => Some(Intent::Start),
            KeyCode::Char('p') => Some(Intent::TogglePause),
            KeyCode::Char('?') => Some(Intent::Hint),
            KeyCode::Char(']') => Some(Intent::SpeedUp),
            KeyCode::Char('[') => Some(Intent::SpeedDown),
            KeyCode::Char('d') => Some(Intent::CycleDifficulty),
            KeyCode::Char('t') => Some(Intent::CycleTheme),
            KeyCode::Char('r') => Some(Intent::NewRound),
            _ => None,
        }
    }
}

/// Quit on `q`, Esc, or Ctrl-C
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn cursor_wraps_around_the_grid() {
        let mut input = InputHandler::new(4, 4);
        assert_eq!(input.cursor(), (0, 0));

        input.handle_key(press(KeyCode::Left));
        assert_eq!(input.cursor(), (0, 3), "wraps left edge");
        input.handle_key(press(KeyCode::Right));
        assert_eq!(input.cursor(), (0, 0));
        input.handle_key(press(KeyCode::Up));
        assert_eq!(input.cursor(), (3, 0), "wraps top edge");
    }

    #[test]
    fn enter_flips_the_card_under_the_cursor() {
        let mut input = InputHandler::new(4, 6);
        input.handle_key(press(KeyCode::Down));
        input.handle_key(press(KeyCode::Right));
        assert_eq!(input.handle_key(press(KeyCode::Enter)), Some(Intent::Flip(7)));
    }

    #[test]
    fn grid_change_clamps_the_cursor() {
        let mut input = InputHandler::new(6, 6);
        for _ in 0..5 {
            input.handle_key(press(KeyCode::Down));
        }
        input.set_grid(4, 4);
        assert_eq!(input.cursor(), (3, 0));
    }

    #[test]
    fn intent_keys() {
        let mut input = InputHandler::new(4, 4);
        assert_eq!(input.handle_key(press(KeyCode::Char(' '))), Some(Intent::Start));
        assert_eq!(input.handle_key(press(KeyCode::Char('?'))), Some(Intent::Hint));
        assert_eq!(input.handle_key(press(KeyCode::Char('x'))), None);
        assert!(should_quit(press(KeyCode::Char('q'))));
        assert!(should_quit(press(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(press(KeyCode::Char('p'))));
    }
}
