//! Scoring module - round score and star rating
//!
//! Both functions are pure: the score is fully determined by
//! (moves, elapsed, speed, difficulty, last action), the rating by
//! (moves, elapsed, total pairs). The round engine recomputes the score
//! after every move and every elapsed game-second.

use crate::types::{
    Difficulty, BASE_SCORE, MATCH_BONUS, REMAINING_TIME_BONUS_PER_SEC, TIME_BONUS_DECAY_PER_SEC,
};

/// Inputs to the score formula, captured at recompute time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInput {
    pub difficulty: Difficulty,
    pub moves: u32,
    pub elapsed_secs: u32,
    pub time_limit_secs: u32,
    pub speed: f64,
    pub last_action_was_match: bool,
}

/// Compute the current round score.
///
/// base = 1000 - moves * penalty
///      + max(0, bonus - elapsed * 10)
///      + max(0, limit - elapsed) * 5
///      (+ 50 * speed after a match)
/// score = floor(max(0, base * multiplier))
pub fn compute_score(input: ScoreInput) -> u32 {
    let d = input.difficulty;
    let elapsed = input.elapsed_secs as f64;

    let mut base = BASE_SCORE - input.moves as f64 * d.move_penalty();
    base += (d.time_bonus() - elapsed * TIME_BONUS_DECAY_PER_SEC).max(0.0);
    base += (input.time_limit_secs.saturating_sub(input.elapsed_secs) as f64)
        * REMAINING_TIME_BONUS_PER_SEC;
    if input.last_action_was_match {
        base += MATCH_BONUS * input.speed;
    }

    (base * d.score_multiplier()).max(0.0).floor() as u32
}

/// Star rating for a completed round, 1..=3.
///
/// Perfect play (moves equal to one flip pair per board pair) is always
/// three stars, regardless of how long the round took.
pub fn calculate_rating(moves: u32, elapsed_secs: u32, total_pairs: usize) -> u8 {
    let expected_moves = total_pairs as u32 * 2;
    let expected_time = total_pairs as u32 * 5;

    let mut stars = 3;
    if moves > expected_moves * 3 / 2 || elapsed_secs > expected_time * 2 {
        stars = 1;
    } else if moves > expected_moves || elapsed_secs > expected_time {
        stars = 2;
    }
    if moves == expected_moves {
        stars = 3;
    }
    stars
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(difficulty: Difficulty, moves: u32, elapsed: u32) -> ScoreInput {
        ScoreInput {
            difficulty,
            moves,
            elapsed_secs: elapsed,
            time_limit_secs: difficulty.time_limit_secs(),
            speed: 1.0,
            last_action_was_match: false,
        }
    }

    #[test]
    fn zero_progress_easy_score() {
        // 1000 + 500 bonus + 120 * 5 remaining = 2100
        assert_eq!(compute_score(input(Difficulty::Easy, 0, 0)), 2100);
    }

    #[test]
    fn score_is_pure() {
        for d in Difficulty::ALL {
            let a = compute_score(input(d, 9, 37));
            let b = compute_score(input(d, 9, 37));
            assert_eq!(a, b, "{:?}", d);
        }
    }

    #[test]
    fn moves_and_time_reduce_score() {
        let fresh = compute_score(input(Difficulty::Medium, 0, 0));
        let worked = compute_score(input(Difficulty::Medium, 10, 30));
        assert!(worked < fresh);
    }

    #[test]
    fn match_bonus_scales_with_speed() {
        let mut slow = input(Difficulty::Easy, 4, 10);
        slow.last_action_was_match = true;
        slow.speed = 0.5;
        let mut fast = slow;
        fast.speed = 2.0;
        // 50 * 2.0 - 50 * 0.5 = 75 extra base points at 1.0x multiplier
        assert_eq!(compute_score(fast) - compute_score(slow), 75);
    }

    #[test]
    fn score_clamps_at_zero() {
        // Enough moves to drive the base far below zero.
        assert_eq!(compute_score(input(Difficulty::Expert, 500, 150)), 0);
    }

    #[test]
    fn multiplier_scales_the_whole_base() {
        let easy = compute_score(input(Difficulty::Easy, 0, 0));
        // hard: (1000 + 1000 + 240*5) * 2.0 = 6400
        let hard = compute_score(input(Difficulty::Hard, 0, 0));
        assert_eq!(hard, 6400);
        assert!(hard > easy);
    }

    #[test]
    fn perfect_move_count_is_three_stars_regardless_of_time() {
        assert_eq!(calculate_rating(16, 10_000, 8), 3);
    }

    #[test]
    fn rating_thresholds() {
        // 8 pairs: expected 16 moves, 40 seconds.
        assert_eq!(calculate_rating(16, 20, 8), 3);
        assert_eq!(calculate_rating(17, 20, 8), 2);
        assert_eq!(calculate_rating(16, 41, 8), 3, "perfect overrides time");
        assert_eq!(calculate_rating(18, 41, 8), 2);
        assert_eq!(calculate_rating(25, 20, 8), 1);
        assert_eq!(calculate_rating(18, 81, 8), 1);
    }
}
