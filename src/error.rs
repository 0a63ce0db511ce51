//! Error taxonomy.
//!
//! [`InputError`] covers anything the user typed that cannot be used; it is
//! always detected before any state changes. [`ExecutionError`] covers
//! failures while dispatching or presenting a run. Both are terminal for the
//! run that raised them.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{field} is not a valid integer: {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} is empty")]
    Empty { field: &'static str },

    #[error("Invalid input range! Min value ({min}) must be less than max value ({max})")]
    InvalidRange { min: i64, max: i64 },

    #[error("Invalid input range! Number of elements must be positive, got {0}")]
    NonPositiveCount(i64),

    #[error("Invalid list format! {reason} (at column {column})")]
    MalformedList { reason: String, column: usize },
}

#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("Animation not available for algorithm {0:?}")]
    UnknownAlgorithm(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to draw frame: {0}")]
    Render(#[from] std::io::Error),

    #[error("{0}")]
    Frontend(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

impl Error {
    /// Title and body of the modal dialog that reports this error.
    pub fn dialog(&self) -> (&'static str, String) {
        match self {
            Error::Input(e) => ("Input Error", format!("Please enter valid numbers!\n{}", e)),
            Error::Execution(e) => ("Error", format!("An error occurred: {}", e)),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
