use thiserror::Error;

/// Errors raised by the outline pipeline.
///
/// Empty or degenerate input is not an error: it yields an empty outline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OutlineError {
    #[error("grid step must be a finite value greater than zero, got {0}")]
    InvalidStep(f64),

    #[error("padding must be a finite, non-negative value, got {0}")]
    InvalidPadding(f64),

    #[error("occupancy grid of {width}x{height} cells exceeds the limit of {limit} cells")]
    GridTooLarge {
        width: usize,
        height: usize,
        limit: usize,
    },

    #[error("contour walk did not return to its start after {steps} steps")]
    UnclosedTrace { steps: usize },
}

pub type Result<T> = std::result::Result<T, OutlineError>;
