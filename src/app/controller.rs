//! Application controller
//!
//! Turns field text into validated input, runs the engine under the timer and
//! hands back a [`RunReport`] carrying the animation to replay.

use std::time::Duration;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::animation::{Animation, BarChart};
use crate::app::state::AppState;
use crate::config::VisualizerConfig;
use crate::error::{Error, ExecutionError, InputError};
use crate::input::{self, RandomSpec, SEARCH_VALUE_FIELD};
use crate::registry::Algorithm;
use crate::search;
use crate::steps::{StepSequence, Value};
use crate::utils::timer;

/// What a finished engine run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Final, sorted sequence
    Sorted(Vec<Value>),
    Searched {
        target: Value,
        found: Option<usize>,
    },
}

/// Summary of one "run animation" command.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub algorithm: Algorithm,
    /// Wall-clock time of the engine run (not of the replay)
    pub elapsed: Duration,
    pub outcome: RunOutcome,
    /// Ready to replay; the chart already shows its initial state
    pub animation: Animation,
}

impl RunReport {
    /// The result dialog shown once the replay has been scheduled.
    pub fn dialog(&self) -> Dialog {
        let seconds = timer::format_seconds(self.elapsed);

        match &self.outcome {
            RunOutcome::Sorted(_) => Dialog::info(
                "Time Complexity",
                format!("Time taken by {}: {} seconds", self.algorithm, seconds),
            ),
            RunOutcome::Searched {
                target,
                found: Some(index),
            } => Dialog::info(
                "Search Result",
                format!(
                    "Value {} found at index {}. Time taken: {} seconds",
                    target, index, seconds
                ),
            ),
            RunOutcome::Searched {
                target,
                found: None,
            } => Dialog::info(
                "Search Result",
                format!("Value {} not found. Time taken: {} seconds", target, seconds),
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Error,
}

/// A modal message for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: &'static str,
    pub message: String,
}

impl Dialog {
    pub fn info(title: &'static str, message: String) -> Self {
        Self {
            kind: DialogKind::Info,
            title,
            message,
        }
    }

    pub fn error(err: &Error) -> Self {
        let (title, message) = err.dialog();
        Self {
            kind: DialogKind::Error,
            title,
            message,
        }
    }
}

/// Owns the application state and executes user commands against it.
pub struct Controller {
    state: AppState,
    config: VisualizerConfig,
    rng: StdRng,
}

impl Controller {
    pub fn new(config: VisualizerConfig) -> Result<Self, ExecutionError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            state: AppState::from_config(&config),
            config,
            rng,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Field edits go through here; nothing is validated until a command runs.
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// "Generate random list": fill the list field and show an unsorted chart.
    ///
    /// On invalid randomizer fields nothing changes.
    pub fn generate_list(&mut self) -> Result<Vec<Value>, InputError> {
        let spec = RandomSpec::parse(
            &self.state.min_value,
            &self.state.max_value,
            &self.state.num_elements,
        )
        .inspect_err(|e| warn!("rejected randomizer input: {}", e))?;

        let values = spec.generate(&mut self.rng);
        debug!(
            "generated {} values in [{}, {}]",
            spec.count, spec.min, spec.max
        );

        self.state.list_text = input::format_list(&values);
        self.state.chart = BarChart::new(&values);
        Ok(values)
    }

    /// "Run animation": parse the list, run the selected algorithm to
    /// completion, and return the captured steps ready for replay.
    pub fn run(&mut self) -> Result<RunReport, Error> {
        let algorithm = self.state.selected;
        let mut values = input::parse_list(&self.state.list_text)?;

        let (steps, outcome, elapsed) = match algorithm {
            Algorithm::Sort(sort) => {
                let (snapshots, elapsed) = timer::measure(|| sort.record(&mut values));
                (
                    StepSequence::Sort(snapshots),
                    RunOutcome::Sorted(values),
                    elapsed,
                )
            }
            Algorithm::Search(algo) => {
                let target = input::parse_value(SEARCH_VALUE_FIELD, &self.state.search_value)?;
                let ((found, probes), elapsed) = timer::measure(|| algo.record(&values, target));
                debug!(
                    "search for {} returned index {}",
                    target,
                    search::display_index(found)
                );
                (
                    StepSequence::Search { values, probes },
                    RunOutcome::Searched { target, found },
                    elapsed,
                )
            }
        };

        info!(
            "{} captured {} steps in {}s",
            algorithm,
            steps.len(),
            timer::format_seconds(elapsed)
        );

        let animation = Animation::for_steps(steps, &self.config);
        animation.prepare(&mut self.state.chart);

        Ok(RunReport {
            algorithm,
            elapsed,
            outcome,
            animation,
        })
    }
}
