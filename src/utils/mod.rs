//! Utility modules for timing and terminal output.

pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use timer::{format_seconds, measure};
