//! Terminal memory-match runner (default binary).
//!
//! Owns the real clock and the terminal: advances the engine with elapsed
//! milliseconds on a fixed cadence, translates key presses into intents,
//! and finalizes the round against the JSON score store once the engine
//! reports completion.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use memory_match::core::round::{FlipOutcome, HintOutcome, Round, RoundSummary};
use memory_match::core::theme::Theme;
use memory_match::input::{should_quit, InputHandler};
use memory_match::store::{JsonStore, MemoryStore, ScoreStore};
use memory_match::term::game_view::HintHighlight;
use memory_match::term::{GameView, TerminalRenderer};
use memory_match::types::{Difficulty, Intent, Phase, SPEED_STEPS, TICK_MS};

/// How long a hint highlight stays on screen (wall-clock ms)
const HINT_FLASH_MS: u32 = 1500;

fn main() -> Result<()> {
    // Logging goes to a file when requested; the TUI owns stdout/stderr.
    let _log_guard = init_tracing();

    let mut store: Box<dyn ScoreStore> = match JsonStore::default_path() {
        Some(path) => Box::new(JsonStore::open(path)),
        None => Box::new(MemoryStore::new()),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, store.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let path = std::env::var_os("MEMORY_MATCH_LOG")?;
    let path = std::path::PathBuf::from(path);
    let dir = path.parent().unwrap_or(std::path::Path::new("."));
    let file = path.file_name()?;
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir,
        file.to_os_string(),
    ));
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}

fn run(term: &mut TerminalRenderer, store: &mut dyn ScoreStore) -> Result<()> {
    let seed = rand::random::<u32>();
    let mut round = Round::new(Difficulty::Easy, Theme::Fruits, seed);
    let (rows, cols) = round.difficulty().grid();
    let mut input = InputHandler::new(rows, cols);

    let view = GameView;
    let mut hint = HintHighlight::default();
    let mut hint_flash_ms: u32 = 0;
    let mut notice = String::new();
    let mut summary: Option<RoundSummary> = None;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let lines = view.render(&round.snapshot(), input.cursor(), hint, summary.as_ref(), &notice);
        term.draw(&lines)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(intent) = input.handle_key(key) {
                        apply_intent(
                            intent,
                            &mut round,
                            &mut input,
                            &mut hint,
                            &mut hint_flash_ms,
                            &mut notice,
                            &mut summary,
                        );
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            round.tick(TICK_MS);

            if hint_flash_ms > 0 {
                hint_flash_ms = hint_flash_ms.saturating_sub(TICK_MS);
                if hint_flash_ms == 0 {
                    hint.clear();
                }
            }

            // Finalize exactly once when the engine reports completion.
            if round.phase() == Phase::Completed && summary.is_none() {
                summary = Some(round.end_game(store));
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn apply_intent(
    intent: Intent,
    round: &mut Round,
    input: &mut InputHandler,
    hint: &mut HintHighlight,
    hint_flash_ms: &mut u32,
    notice: &mut String,
    summary: &mut Option<RoundSummary>,
) {
    notice.clear();
    match intent {
        Intent::Start => {
            if !round.start() {
                *notice = "already started".to_string();
            }
        }
        Intent::Flip(index) => match round.flip(index) {
            FlipOutcome::Rejected => {}
            FlipOutcome::First => {}
            FlipOutcome::Second { matched, .. } => {
                if !matched {
                    *notice = "no match".to_string();
                }
            }
        },
        Intent::TogglePause => {
            if !round.toggle_pause() {
                *notice = "nothing to pause".to_string();
            }
        }
        Intent::Hint => match round.use_hint() {
            HintOutcome::Shown {
                card,
                partner,
                remaining,
            } => {
                hint.card = Some(card);
                hint.partner = partner;
                *hint_flash_ms = HINT_FLASH_MS;
                *notice = format!("hint used, {remaining} remaining");
            }
            HintOutcome::Refused(reason) => *notice = reason.to_string(),
        },
        Intent::SpeedUp | Intent::SpeedDown => {
            let up = intent == Intent::SpeedUp;
            let speed = round.set_speed(step_speed(round.speed(), up));
            *notice = format!("speed {speed:.2}x");
        }
        Intent::CycleDifficulty => {
            round.set_difficulty(round.difficulty().next());
            let (rows, cols) = round.difficulty().grid();
            input.set_grid(rows, cols);
            *summary = None;
            hint.clear();
            *notice = format!("{} mode", round.difficulty().display_name());
        }
        Intent::CycleTheme => {
            round.set_theme(round.theme().next());
            *summary = None;
            hint.clear();
            *notice = format!("{} theme", round.theme().display_name());
        }
        Intent::NewRound => {
            round.init();
            *summary = None;
            hint.clear();
            *notice = "new round".to_string();
        }
    }
}

/// Step to the adjacent entry in the speed ladder
fn step_speed(current: f64, up: bool) -> f64 {
    let index = SPEED_STEPS
        .iter()
        .position(|&s| (s - current).abs() < 1e-9)
        .unwrap_or(2);
    let index = if up {
        (index + 1).min(SPEED_STEPS.len() - 1)
    } else {
        index.saturating_sub(1)
    };
    SPEED_STEPS[index]
}
