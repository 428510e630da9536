//! Round module - the turn/flip state machine, timing, and round finish
//!
//! This ties together the board, scoring, achievements, and the score store.
//! The engine never owns a timer: callers advance time explicitly through
//! [`Round::tick`] with elapsed wall-clock milliseconds, which keeps every
//! timing rule unit-testable.
//!
//! Phases: `NotStarted -> Running <-> Paused -> (Completed | TimedOut)`.
//! Terminal phases stay terminal until [`Round::init`] deals a fresh round.
//!
//! Time model: one game-second elapses per `1000 / speed` ms of wall time
//! while `Running`. Match/mismatch resolution delays are scheduled when the
//! second card of a pair is flipped and burn down on wall time regardless of
//! pause, mirroring the original behavior.

use tracing::debug;

use crate::core::achievements::{evaluate, Achievement, RoundFacts};
use crate::core::board::{Board, Card};
use crate::core::rng::SimpleRng;
use crate::core::scoring::{calculate_rating, compute_score, ScoreInput};
use crate::core::theme::Theme;
use crate::store::ScoreStore;
use crate::types::{
    CardState, Difficulty, Phase, GAME_SECOND_MS, HINTS_PER_ROUND, MATCH_RESOLVE_MS,
    MISMATCH_RESOLVE_MS, SPEED_MAX, SPEED_MIN,
};

/// Result of a flip intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Invalid in the current state; nothing changed.
    Rejected,
    /// First card of a pair revealed.
    First,
    /// Second card revealed; resolution scheduled. `matches` reports the
    /// pair count as it will read once the resolution delay settles.
    Second {
        matched: bool,
        moves: u32,
        matches: usize,
    },
}

/// Result of a hint intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintOutcome {
    /// Two indices to highlight transiently. `partner` is None when the
    /// card's twin is sitting revealed in the pending pair.
    Shown {
        card: usize,
        partner: Option<usize>,
        remaining: u8,
    },
    Refused(&'static str),
}

/// Stats reported when a completed round is finalized
#[derive(Debug, Clone, PartialEq)]
pub struct RoundSummary {
    pub difficulty: Difficulty,
    pub moves: u32,
    pub elapsed_secs: u32,
    pub time_limit_secs: u32,
    pub score: u32,
    pub rating: u8,
    pub new_achievements: Vec<Achievement>,
    pub new_best_score: bool,
}

/// Full state snapshot for presentation; re-read after every mutating call
#[derive(Debug, Clone)]
pub struct RoundSnapshot {
    pub difficulty: Difficulty,
    pub theme: Theme,
    pub phase: Phase,
    pub elapsed_secs: u32,
    pub time_limit_secs: u32,
    pub moves: u32,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    pub hints_remaining: u8,
    pub score: u32,
    pub speed: f64,
    pub can_flip: bool,
    pub pending: (Option<usize>, Option<usize>),
    pub cards: Vec<Card>,
}

/// A scheduled match/mismatch commit
#[derive(Debug, Clone, Copy)]
struct Resolution {
    first: usize,
    second: usize,
    matched: bool,
    remaining_ms: u32,
}

/// The round engine
#[derive(Debug, Clone)]
pub struct Round {
    difficulty: Difficulty,
    theme: Theme,
    board: Board,
    rng: SimpleRng,
    phase: Phase,
    elapsed_secs: u32,
    time_limit_secs: u32,
    moves: u32,
    matched_pairs: usize,
    total_pairs: usize,
    hints_remaining: u8,
    score: u32,
    speed: f64,
    can_flip: bool,
    first: Option<usize>,
    second: Option<usize>,
    last_action_was_match: bool,
    /// Wall-time accumulator toward the next game-second.
    second_timer_ms: u32,
    resolution: Option<Resolution>,
}

impl Round {
    /// Create a fresh, not-yet-started round
    pub fn new(difficulty: Difficulty, theme: Theme, seed: u32) -> Self {
        let mut round = Self {
            difficulty,
            theme,
            board: Board::deal(theme, 0, &mut SimpleRng::new(seed)),
            rng: SimpleRng::new(seed),
            phase: Phase::NotStarted,
            elapsed_secs: 0,
            time_limit_secs: difficulty.time_limit_secs(),
            moves: 0,
            matched_pairs: 0,
            total_pairs: difficulty.total_pairs(),
            hints_remaining: HINTS_PER_ROUND,
            score: 0,
            speed: 1.0,
            can_flip: true,
            first: None,
            second: None,
            last_action_was_match: false,
            second_timer_ms: 0,
            resolution: None,
        };
        round.init();
        round
    }

    /// Reset all counters and deal a fresh symbol assignment.
    ///
    /// Callable at any time; always succeeds. Any pending resolution and
    /// running timer state is dropped. Game speed survives re-init.
    pub fn init(&mut self) {
        self.phase = Phase::NotStarted;
        self.elapsed_secs = 0;
        self.time_limit_secs = self.difficulty.time_limit_secs();
        self.moves = 0;
        self.matched_pairs = 0;
        self.total_pairs = self.difficulty.total_pairs();
        self.hints_remaining = HINTS_PER_ROUND;
        self.can_flip = true;
        self.first = None;
        self.second = None;
        self.last_action_was_match = false;
        self.second_timer_ms = 0;
        self.resolution = None;
        self.board = Board::deal(self.theme, self.total_pairs, &mut self.rng);
        self.update_score();
    }

    /// Start the round. Fails (no-op) unless the round is fresh.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::NotStarted {
            return false;
        }
        self.phase = Phase::Running;
        debug!(difficulty = self.difficulty.as_str(), theme = self.theme.as_str(), "round started");
        true
    }

    /// Flip between `Paused` and `Running`. Fails in any other phase.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Running => {
                self.phase = Phase::Paused;
                true
            }
            Phase::Paused => {
                self.phase = Phase::Running;
                true
            }
            _ => false,
        }
    }

    /// Advance wall time by `elapsed_ms`.
    ///
    /// Elapsed game-time only advances while `Running`; an in-flight
    /// resolution delay burns down regardless of pause. Ignored entirely
    /// once the round is terminal.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.phase.is_terminal() {
            return;
        }

        self.advance_resolution(elapsed_ms);

        if self.phase != Phase::Running {
            return;
        }

        self.second_timer_ms += elapsed_ms;
        let period = self.tick_period_ms();
        while self.second_timer_ms >= period {
            self.second_timer_ms -= period;
            self.elapsed_secs += 1;
            self.update_score();

            if self.elapsed_secs >= self.time_limit_secs {
                self.phase = Phase::TimedOut;
                self.second_timer_ms = 0;
                debug!(
                    moves = self.moves,
                    matched = self.matched_pairs,
                    elapsed = self.elapsed_secs,
                    "round timed out"
                );
                return;
            }
        }
    }

    /// Flip the card at `index`
    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        if self.phase != Phase::Running || !self.can_flip {
            return FlipOutcome::Rejected;
        }
        if self.board.state(index) != Some(CardState::Hidden) {
            return FlipOutcome::Rejected;
        }

        self.board.reveal(index);

        let Some(first) = self.first else {
            self.first = Some(index);
            return FlipOutcome::First;
        };

        // Second card of the pending pair: the move is committed now, the
        // board outcome after the resolution delay.
        self.second = Some(index);
        self.moves += 1;
        self.can_flip = false;
        self.update_score();

        let matched = self.board.card(first).map(|c| c.symbol)
            == self.board.card(index).map(|c| c.symbol);
        let delay = if matched {
            MATCH_RESOLVE_MS
        } else {
            MISMATCH_RESOLVE_MS
        };
        self.resolution = Some(Resolution {
            first,
            second: index,
            matched,
            remaining_ms: self.scale_delay(delay),
        });

        FlipOutcome::Second {
            matched,
            moves: self.moves,
            matches: self.matched_pairs + usize::from(matched),
        }
    }

    /// Spend a hint: picks one uniformly random hidden card and its hidden
    /// twin for transient highlighting. Reveals nothing.
    pub fn use_hint(&mut self) -> HintOutcome {
        if self.hints_remaining == 0 {
            return HintOutcome::Refused("no hints remaining");
        }
        if self.phase.is_terminal() {
            return HintOutcome::Refused("round is over");
        }
        let hidden = self.board.hidden_indices();
        if hidden.is_empty() {
            return HintOutcome::Refused("no cards to hint");
        }

        self.hints_remaining -= 1;
        let card = hidden[self.rng.pick_index(hidden.len())];
        let partner = self.board.hidden_partner_of(card);
        HintOutcome::Shown {
            card,
            partner,
            remaining: self.hints_remaining,
        }
    }

    /// Clamp and apply a new game speed, re-periodizing the tick accumulator
    /// in place so no elapsed time is lost or double-counted.
    pub fn set_speed(&mut self, speed: f64) -> f64 {
        let old_period = self.tick_period_ms();
        self.speed = speed.clamp(SPEED_MIN, SPEED_MAX);
        let new_period = self.tick_period_ms();
        // Preserve the fraction of the current game-second already burned.
        self.second_timer_ms =
            ((self.second_timer_ms as u64 * new_period as u64) / old_period as u64) as u32;
        self.speed
    }

    /// Switch difficulty and deal a fresh round
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.init();
    }

    /// Switch theme and deal a fresh round
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.init();
    }

    /// Finalize a completed round: final score, star rating, achievements,
    /// best-score bookkeeping.
    ///
    /// The contract assumes `matched_pairs == total_pairs`; calling this on
    /// an unfinished round is a caller error and yields unspecified stats.
    pub fn end_game(&mut self, store: &mut dyn ScoreStore) -> RoundSummary {
        self.update_score();
        let rating = calculate_rating(self.moves, self.elapsed_secs, self.total_pairs);

        let facts = RoundFacts {
            difficulty: self.difficulty,
            moves: self.moves,
            elapsed_secs: self.elapsed_secs,
            time_limit_secs: self.time_limit_secs,
            total_pairs: self.total_pairs,
            hints_remaining: self.hints_remaining,
        };
        let mut earned = store.achievements();
        let new_achievements = evaluate(&facts, &mut earned);
        if !new_achievements.is_empty() {
            store.set_achievements(&earned);
        }

        let best = store.best_score(self.difficulty).unwrap_or(0);
        let new_best_score = self.score > best;
        if new_best_score {
            store.set_best_score(self.difficulty, self.score);
        }

        debug!(
            score = self.score,
            rating,
            new_best_score,
            badges = new_achievements.len(),
            "round finalized"
        );

        RoundSummary {
            difficulty: self.difficulty,
            moves: self.moves,
            elapsed_secs: self.elapsed_secs,
            time_limit_secs: self.time_limit_secs,
            score: self.score,
            rating,
            new_achievements,
            new_best_score,
        }
    }

    /// Full state snapshot for presentation
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            difficulty: self.difficulty,
            theme: self.theme,
            phase: self.phase,
            elapsed_secs: self.elapsed_secs,
            time_limit_secs: self.time_limit_secs,
            moves: self.moves,
            matched_pairs: self.matched_pairs,
            total_pairs: self.total_pairs,
            hints_remaining: self.hints_remaining,
            score: self.score,
            speed: self.speed,
            can_flip: self.can_flip,
            pending: (self.first, self.second),
            cards: self.board.cards().to_vec(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> usize {
        self.total_pairs
    }

    pub fn hints_remaining(&self) -> u8 {
        self.hints_remaining
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn can_flip(&self) -> bool {
        self.can_flip
    }

    pub fn cards(&self) -> &[Card] {
        self.board.cards()
    }

    /// Wall-clock ms per game-second at the current speed
    fn tick_period_ms(&self) -> u32 {
        ((GAME_SECOND_MS as f64 / self.speed).round() as u32).max(1)
    }

    /// Scale a base resolution delay by the current speed
    fn scale_delay(&self, base_ms: u32) -> u32 {
        ((base_ms as f64 / self.speed).round() as u32).max(1)
    }

    /// Burn down and, on expiry, commit the pending match/mismatch.
    fn advance_resolution(&mut self, elapsed_ms: u32) {
        let Some(res) = self.resolution.as_mut() else {
            return;
        };
        res.remaining_ms = res.remaining_ms.saturating_sub(elapsed_ms);
        if res.remaining_ms > 0 {
            return;
        }
        let res = *res;
        self.resolution = None;

        if res.matched {
            self.board.mark_matched(res.first);
            self.board.mark_matched(res.second);
            self.matched_pairs += 1;
            self.last_action_was_match = true;
            self.update_score();
            if self.matched_pairs == self.total_pairs {
                self.phase = Phase::Completed;
                debug!(moves = self.moves, elapsed = self.elapsed_secs, "round completed");
            }
        } else {
            self.board.conceal(res.first);
            self.board.conceal(res.second);
            self.last_action_was_match = false;
        }

        self.first = None;
        self.second = None;
        self.can_flip = true;
    }

    fn update_score(&mut self) {
        self.score = compute_score(ScoreInput {
            difficulty: self.difficulty,
            moves: self.moves,
            elapsed_secs: self.elapsed_secs,
            time_limit_secs: self.time_limit_secs,
            speed: self.speed,
            last_action_was_match: self.last_action_was_match,
        });
    }
}
