use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use rand::Rng;

use super::report::{write_progress, write_simple_ranking};
use crate::assets::resolve_photo;
use crate::config::AppConfig;
use crate::domain::{Choice, Outcome, Pair};
use crate::session::SessionState;
use crate::store::SessionStore;

/// How an interactive judging run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JudgingOutcome {
    Completed,
    Quit,
}

/// Drives a terminal judging session: presents pairs, applies the skip
/// policy, and saves after every resolved pair
pub struct JudgingService {
    config: AppConfig,
    store: SessionStore,
    item_names: Vec<String>,
}

impl JudgingService {
    pub fn new(config: AppConfig, item_names: Vec<String>) -> Result<Self> {
        let store = SessionStore::new(&config.store.state_dir)?;
        Ok(Self {
            config,
            store,
            item_names,
        })
    }

    /// Resumes the saved session when it fits the item list, otherwise starts fresh
    pub fn load_session<R: Rng + ?Sized>(&self, rng: &mut R) -> SessionState {
        match self.store.load_or_none() {
            Some(snapshot) => SessionState::restore(&self.item_names, snapshot, rng),
            None => SessionState::initialize(&self.item_names, rng),
        }
    }

    pub fn run<I, W, R>(&self, input: I, output: W, rng: &mut R) -> Result<JudgingOutcome>
    where
        I: BufRead,
        W: Write,
        R: Rng + ?Sized,
    {
        let mut state = self.load_session(rng);
        self.judge(&mut state, input, output)
    }

    pub fn judge<I, W>(&self, state: &mut SessionState, mut input: I, mut output: W) -> Result<JudgingOutcome>
    where
        I: BufRead,
        W: Write,
    {
        info!("=== Starting Judging Session ===");

        loop {
            let (resolved, total) = state.progress();
            write_progress(&mut output, resolved, total)?;

            let Some(pair) = state.current_pair() else {
                self.store.save(&state.snapshot())?;
                writeln!(output, "{}", "All pairs judged.".green().bold())?;
                write_simple_ranking(&mut output, &state.simple_ranking())?;
                info!("=== Judging Complete ===");
                return Ok(JudgingOutcome::Completed);
            };

            if let Some(outcome) = state.maybe_auto_resolve(&self.config.judging.skip_policy) {
                self.announce_skip(&mut output, state, pair, outcome)?;
                self.store.save(&state.snapshot())?;
                self.pause_after_skip();
                continue;
            }

            self.present_pair(&mut output, state, pair)?;

            let mut line = String::new();
            let read = input.read_line(&mut line).context("Failed to read judgment")?;
            if read == 0 || line.trim().eq_ignore_ascii_case("q") {
                self.store.save(&state.snapshot())?;
                writeln!(output, "Progress saved. Run again to continue.")?;
                return Ok(JudgingOutcome::Quit);
            }

            match Choice::from_key(&line) {
                Some(choice) => {
                    state.apply_choice(choice);
                    self.store.save(&state.snapshot())?;
                }
                None => writeln!(output, "{}", "Press 1 or 2 (q to quit).".yellow())?,
            }
        }
    }

    fn present_pair<W: Write>(&self, output: &mut W, state: &SessionState, pair: Pair) -> Result<()> {
        for (key, index) in [("(1)", pair.first), ("(2)", pair.second)] {
            let name = state.item_name(index);
            write!(output, "{} {}", key.bold(), name)?;
            if let Some(photo) = resolve_photo(&self.config.store.photos_dir, name) {
                write!(output, " {}", photo.display().to_string().dimmed())?;
            }
            writeln!(output)?;
        }
        write!(output, "> ")?;
        output.flush()?;
        Ok(())
    }

    fn announce_skip<W: Write>(
        &self,
        output: &mut W,
        state: &SessionState,
        pair: Pair,
        outcome: Outcome,
    ) -> Result<()> {
        writeln!(
            output,
            "{}",
            format!(
                "Skipping {} vs. {} - winner: {}",
                state.item_name(pair.first),
                state.item_name(pair.second),
                state.item_name(outcome.winner)
            )
            .yellow()
        )?;
        Ok(())
    }

    fn pause_after_skip(&self) {
        let pause = self.config.judging.skip_notice_ms;
        if pause > 0 {
            thread::sleep(Duration::from_millis(pause));
        }
    }
}
