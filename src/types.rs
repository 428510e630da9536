//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Runner tick granularity (milliseconds)
pub const TICK_MS: u32 = 16;

/// One game-second of elapsed time costs this much wall time at 1.0x speed.
pub const GAME_SECOND_MS: u32 = 1000;

/// Resolution delays at 1.0x speed (milliseconds)
pub const MATCH_RESOLVE_MS: u32 = 500;
pub const MISMATCH_RESOLVE_MS: u32 = 1000;

/// Hints granted at the start of every round
pub const HINTS_PER_ROUND: u8 = 3;

/// Score formula constants
pub const BASE_SCORE: f64 = 1000.0;
pub const TIME_BONUS_DECAY_PER_SEC: f64 = 10.0;
pub const REMAINING_TIME_BONUS_PER_SEC: f64 = 5.0;
pub const MATCH_BONUS: f64 = 50.0;

/// Game speed bounds (multiplier over wall time)
pub const SPEED_MIN: f64 = 0.5;
pub const SPEED_MAX: f64 = 2.0;

/// Speed steps the UI cycles through
pub const SPEED_STEPS: [f64; 6] = [0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

/// Board difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Parse difficulty from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            "expert" => Some(Difficulty::Expert),
            _ => None,
        }
    }

    /// Stable id used as a persistence key
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    /// Board grid as (rows, cols). Card count is always even.
    pub fn grid(&self) -> (usize, usize) {
        match self {
            Difficulty::Easy => (4, 4),
            Difficulty::Medium => (4, 6),
            Difficulty::Hard => (6, 6),
            Difficulty::Expert => (6, 6),
        }
    }

    pub fn total_pairs(&self) -> usize {
        let (rows, cols) = self.grid();
        rows * cols / 2
    }

    /// Starting time bonus pool for the score formula
    pub fn time_bonus(&self) -> f64 {
        match self {
            Difficulty::Easy => 500.0,
            Difficulty::Medium => 750.0,
            Difficulty::Hard => 1000.0,
            Difficulty::Expert => 1250.0,
        }
    }

    /// Points lost per move in the score formula
    pub fn move_penalty(&self) -> f64 {
        match self {
            Difficulty::Easy => 10.0,
            Difficulty::Medium => 15.0,
            Difficulty::Hard => 20.0,
            Difficulty::Expert => 25.0,
        }
    }

    /// Round time limit in seconds
    pub fn time_limit_secs(&self) -> u32 {
        match self {
            Difficulty::Easy => 120,
            Difficulty::Medium => 180,
            Difficulty::Hard => 240,
            Difficulty::Expert => 150,
        }
    }

    /// Final score multiplier
    pub fn score_multiplier(&self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 2.0,
            Difficulty::Expert => 3.0,
        }
    }

    /// Next preset in the cycle (for the UI difficulty toggle)
    pub fn next(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Expert,
            Difficulty::Expert => Difficulty::Easy,
        }
    }
}

/// Card face-up/face-down/removed state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardState {
    Hidden,
    Revealed,
    Matched,
}

/// Round lifecycle. Terminal phases stay terminal until the next `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    NotStarted,
    Running,
    Paused,
    Completed,
    TimedOut,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Completed | Phase::TimedOut)
    }
}

/// User intents dispatched from input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Start,
    Flip(usize),
    TogglePause,
    Hint,
    SpeedUp,
    SpeedDown,
    CycleDifficulty,
    CycleTheme,
    NewRound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_counts_are_even_for_all_difficulties() {
        for d in Difficulty::ALL {
            let (rows, cols) = d.grid();
            assert_eq!((rows * cols) % 2, 0, "{:?}", d);
            assert_eq!(d.total_pairs() * 2, rows * cols);
        }
    }

    #[test]
    fn difficulty_ids_round_trip() {
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
        assert_eq!(Difficulty::from_str("EXPERT"), Some(Difficulty::Expert));
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }

    #[test]
    fn terminal_phases() {
        assert!(Phase::Completed.is_terminal());
        assert!(Phase::TimedOut.is_terminal());
        assert!(!Phase::Running.is_terminal());
        assert!(!Phase::Paused.is_terminal());
        assert!(!Phase::NotStarted.is_terminal());
    }
}
