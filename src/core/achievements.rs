//! Achievement module - per-round evaluation of lifetime badges
//!
//! Achievements are evaluated once per completed round, each independently.
//! A badge fires at most once ever: already-earned flags are skipped, and
//! earned badges are never revoked.

use std::collections::BTreeSet;

use crate::types::Difficulty;

/// The lifetime badges a player can earn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Achievement {
    FirstVictory,
    SpeedDemon,
    PerfectMatch,
    MemoryMaster,
    HintSaver,
    LastSecond,
}

impl Achievement {
    pub const ALL: [Achievement; 6] = [
        Achievement::FirstVictory,
        Achievement::SpeedDemon,
        Achievement::PerfectMatch,
        Achievement::MemoryMaster,
        Achievement::HintSaver,
        Achievement::LastSecond,
    ];

    /// Stable id used as a persistence key
    pub fn as_str(&self) -> &'static str {
        match self {
            Achievement::FirstVictory => "first_victory",
            Achievement::SpeedDemon => "speed_demon",
            Achievement::PerfectMatch => "perfect_match",
            Achievement::MemoryMaster => "memory_master",
            Achievement::HintSaver => "hint_saver",
            Achievement::LastSecond => "last_second",
        }
    }

    pub fn from_str(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.as_str() == id)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Achievement::FirstVictory => "First Victory",
            Achievement::SpeedDemon => "Speed Demon",
            Achievement::PerfectMatch => "Perfect Match",
            Achievement::MemoryMaster => "Memory Master",
            Achievement::HintSaver => "Hint Saver",
            Achievement::LastSecond => "Last Second",
        }
    }
}

/// The set of earned achievement flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Achievements {
    earned: BTreeSet<Achievement>,
}

impl Achievements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, achievement: Achievement) -> bool {
        self.earned.contains(&achievement)
    }

    pub fn insert(&mut self, achievement: Achievement) -> bool {
        self.earned.insert(achievement)
    }

    pub fn len(&self) -> usize {
        self.earned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.earned.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Achievement> + '_ {
        self.earned.iter().copied()
    }
}

/// Terminal round facts the evaluator looks at
#[derive(Debug, Clone, Copy)]
pub struct RoundFacts {
    pub difficulty: Difficulty,
    pub moves: u32,
    pub elapsed_secs: u32,
    pub time_limit_secs: u32,
    pub total_pairs: usize,
    pub hints_remaining: u8,
}

fn condition_met(achievement: Achievement, facts: &RoundFacts) -> bool {
    match achievement {
        // Any completed round counts.
        Achievement::FirstVictory => true,
        Achievement::SpeedDemon => facts.elapsed_secs < 60,
        // A move is one flipped pair, so a round with no wasted flips takes
        // exactly one move per board pair.
        Achievement::PerfectMatch => facts.moves == facts.total_pairs as u32,
        Achievement::MemoryMaster => facts.difficulty == Difficulty::Expert,
        Achievement::HintSaver => facts.hints_remaining == crate::types::HINTS_PER_ROUND,
        Achievement::LastSecond => facts.time_limit_secs.saturating_sub(facts.elapsed_secs) < 10,
    }
}

/// Evaluate all achievements against a completed round, inserting the newly
/// earned ones into `earned`. Returns only the badges that fired this call.
pub fn evaluate(facts: &RoundFacts, earned: &mut Achievements) -> Vec<Achievement> {
    let mut new = Vec::new();
    for a in Achievement::ALL {
        if !earned.contains(a) && condition_met(a, facts) {
            earned.insert(a);
            new.push(a);
        }
    }
    new
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perfect_expert_facts() -> RoundFacts {
        RoundFacts {
            difficulty: Difficulty::Expert,
            moves: 18,
            elapsed_secs: 45,
            time_limit_secs: 150,
            total_pairs: 18,
            hints_remaining: 3,
        }
    }

    #[test]
    fn perfect_fast_expert_round_earns_five_badges() {
        let mut earned = Achievements::new();
        let new = evaluate(&perfect_expert_facts(), &mut earned);
        assert_eq!(
            new,
            vec![
                Achievement::FirstVictory,
                Achievement::SpeedDemon,
                Achievement::PerfectMatch,
                Achievement::MemoryMaster,
                Achievement::HintSaver,
            ]
        );
    }

    #[test]
    fn evaluation_is_idempotent() {
        let mut earned = Achievements::new();
        let first = evaluate(&perfect_expert_facts(), &mut earned);
        assert!(!first.is_empty());
        let second = evaluate(&perfect_expert_facts(), &mut earned);
        assert!(second.is_empty(), "badges must fire at most once ever");
    }

    #[test]
    fn last_second_requires_under_ten_remaining() {
        let mut facts = perfect_expert_facts();
        facts.elapsed_secs = 141; // 9 seconds to spare
        let mut earned = Achievements::new();
        assert!(evaluate(&facts, &mut earned).contains(&Achievement::LastSecond));

        facts.elapsed_secs = 140; // exactly 10 left: not last-second
        let mut earned = Achievements::new();
        assert!(!evaluate(&facts, &mut earned).contains(&Achievement::LastSecond));
    }

    #[test]
    fn wasted_moves_block_perfect_match() {
        // Twice the minimum move count: every pair cost one mismatch first.
        let mut facts = perfect_expert_facts();
        facts.moves = 36;
        let mut earned = Achievements::new();
        assert!(!evaluate(&facts, &mut earned).contains(&Achievement::PerfectMatch));
    }

    #[test]
    fn hint_use_blocks_hint_saver() {
        let mut facts = perfect_expert_facts();
        facts.hints_remaining = 2;
        let mut earned = Achievements::new();
        assert!(!evaluate(&facts, &mut earned).contains(&Achievement::HintSaver));
    }

    #[test]
    fn sluggish_easy_round_still_wins_first_victory() {
        let facts = RoundFacts {
            difficulty: Difficulty::Easy,
            moves: 40,
            elapsed_secs: 100,
            time_limit_secs: 120,
            total_pairs: 8,
            hints_remaining: 0,
        };
        let mut earned = Achievements::new();
        assert_eq!(evaluate(&facts, &mut earned), vec![Achievement::FirstVictory]);
    }

    #[test]
    fn ids_round_trip() {
        for a in Achievement::ALL {
            assert_eq!(Achievement::from_str(a.as_str()), Some(a));
        }
    }
}
