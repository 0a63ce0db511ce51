//! # Sort-Visualizer
//!
//! Classic sorting and search algorithms instrumented to record every
//! intermediate state, plus a driver that replays those states as an
//! animated bar chart.

pub mod animation;
pub mod app;
pub mod config;
pub mod error;
#[cfg(feature = "gui")]
pub mod gui;
pub mod input;
pub mod registry;
pub mod search;
pub mod shell;
pub mod sorting;
pub mod steps;
pub mod utils;

/// Terminal output lives in utils; re-exported for the binary
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::animation::{play, Animation, BarChart, BarColor, DisplaySurface};
    pub use crate::app::{AppState, Controller, Dialog, RunReport};
    pub use crate::config::VisualizerConfig;
    pub use crate::error::{Error, ExecutionError, InputError};
    pub use crate::registry::{build_registry, Algorithm, AlgorithmRegistry};
    pub use crate::search::SearchAlgorithm;
    pub use crate::sorting::SortAlgorithm;
    pub use crate::steps::{Probe, Snapshot, StepSequence, Value};
}
