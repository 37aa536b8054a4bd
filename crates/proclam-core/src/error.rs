//! Error types for classifier simulation.

use thiserror::Error;

/// Result type alias for proclam operations.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Errors raised while configuring or running a simulated classifier.
#[derive(Error, Debug)]
pub enum SimulationError {
    /// A truth label does not index a row of the confusion matrix.
    #[error(
        "truth label {label} at item {index} is out of range for a confusion matrix with {rows} row(s)"
    )]
    LabelOutOfRange {
        index: usize,
        label: usize,
        rows: usize,
    },

    /// A perturbed row could not be normalized onto the probability simplex.
    #[error(
        "perturbed row for item {index} (true class {label}) sums to {sum}; cannot normalize"
    )]
    DegenerateRow { index: usize, label: usize, sum: f64 },

    /// Noise standard deviation must be finite and non-negative.
    #[error("invalid noise standard deviation {value}: must be finite and >= 0")]
    InvalidNoise { value: f64 },

    /// IO error with context.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be parsed.
    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl SimulationError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether the error was caused by the inputs handed to `classify`.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::LabelOutOfRange { .. } | Self::DegenerateRow { .. }
        )
    }
}
