//! GameView: turns a round snapshot into text lines.
//!
//! Pure string assembly so tests can assert on frames without a terminal.

use crate::core::round::{RoundSnapshot, RoundSummary};
use crate::types::{CardState, Phase};

/// Transient highlight from a hint, cleared by the runner after a moment
#[derive(Debug, Clone, Copy, Default)]
pub struct HintHighlight {
    pub card: Option<usize>,
    pub partner: Option<usize>,
}

impl HintHighlight {
    pub fn covers(&self, index: usize) -> bool {
        self.card == Some(index) || self.partner == Some(index)
    }

    pub fn clear(&mut self) {
        self.card = None;
        self.partner = None;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Render one frame. `cursor` is the (row, col) the input handler is
    /// pointing at; `summary` is present once the round has been finalized.
    pub fn render(
        &self,
        snap: &RoundSnapshot,
        cursor: (usize, usize),
        hint: HintHighlight,
        summary: Option<&RoundSummary>,
        notice: &str,
    ) -> Vec<String> {
        let (rows, cols) = snap.difficulty.grid();
        let mut lines = Vec::with_capacity(rows + 10);

        lines.push(format!(
            "Memory Match — {} / {}   [{}]",
            snap.difficulty.display_name(),
            snap.theme.display_name(),
            phase_label(snap.phase),
        ));
        lines.push(format!(
            "time {:>3}s/{}s  moves {:>3}  pairs {:>2}/{}  hints {}  speed {:.2}x  score {}",
            snap.elapsed_secs,
            snap.time_limit_secs,
            snap.moves,
            snap.matched_pairs,
            snap.total_pairs,
            snap.hints_remaining,
            snap.speed,
            snap.score,
        ));
        lines.push(String::new());

        for row in 0..rows {
            let mut line = String::new();
            for col in 0..cols {
                let index = row * cols + col;
                let marker = if (row, col) == cursor { '>' } else { ' ' };
                line.push(marker);
                line.push_str(&cell(snap, index, hint));
            }
            lines.push(line);
        }
        lines.push(String::new());

        match snap.phase {
            Phase::Paused => lines.push("-- paused (p to resume) --".to_string()),
            Phase::TimedOut => {
                lines.push("Time's up! r for a new round, d to change difficulty".to_string());
            }
            Phase::Completed => {
                if let Some(summary) = summary {
                    lines.extend(summary_lines(summary));
                } else {
                    lines.push("All pairs found!".to_string());
                }
            }
            Phase::NotStarted => lines.push("space to start".to_string()),
            Phase::Running => {}
        }

        if !notice.is_empty() {
            lines.push(notice.to_string());
        }
        lines.push(String::new());
        lines.push(
            "arrows move  enter flip  space start  p pause  ? hint  [/] speed  d difficulty  t theme  r new  q/esc quit"
                .to_string(),
        );

        lines
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::NotStarted => "ready",
        Phase::Running => "running",
        Phase::Paused => "paused",
        Phase::Completed => "won",
        Phase::TimedOut => "timed out",
    }
}

fn cell(snap: &RoundSnapshot, index: usize, hint: HintHighlight) -> String {
    let Some(card) = snap.cards.get(index) else {
        return "     ".to_string();
    };
    match card.state {
        CardState::Hidden if hint.covers(index) => "⟨ ? ⟩".to_string(),
        CardState::Hidden => "[ ? ]".to_string(),
        CardState::Revealed => format!("[{} ]", card.symbol),
        CardState::Matched => format!(" {}  ", card.symbol),
    }
}

fn summary_lines(summary: &RoundSummary) -> Vec<String> {
    let stars: String = (0..3u8)
        .map(|i| if i < summary.rating { '★' } else { '☆' })
        .collect();
    let mut lines = vec![
        format!(
            "Round complete!  {}  {} moves in {}s  score {}",
            stars, summary.moves, summary.elapsed_secs, summary.score
        ),
    ];
    if summary.new_best_score {
        lines.push(format!(
            "New best score for {}!",
            summary.difficulty.display_name()
        ));
    }
    for badge in &summary.new_achievements {
        lines.push(format!("Achievement unlocked: {}", badge.display_name()));
    }
    lines.push("r for a new round".to_string());
    lines
}
