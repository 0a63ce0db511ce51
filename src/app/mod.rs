//! Application orchestration layer
//!
//! The controller owns the application state and implements the two user
//! commands: generate a random list, and run the selected algorithm.
//! Front ends only edit fields, invoke commands and render the results.

pub mod controller;
pub mod state;

pub use controller::{Controller, Dialog, DialogKind, RunOutcome, RunReport};
pub use state::AppState;
