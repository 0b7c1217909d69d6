//! Error types for linkrank.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Hard failures, raised before any computation starts.
///
/// Distribution integrity drift and non-convergence are not errors; they are
/// reported through `tracing` and the returned result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("graph has no pages")]
    EmptyGraph,

    #[error("sample count must be at least 1")]
    ZeroSamples,

    #[error("damping factor must lie strictly between 0 and 1, got {0}")]
    InvalidDamping(f64),

    #[error("convergence tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),

    #[error("page not in graph: {0}")]
    UnknownPage(String),

    #[error("page index {index} out of range for graph with {count} pages")]
    PageOutOfRange { index: usize, count: usize },
}

pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if damping.is_finite() && damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidDamping(damping))
    }
}

pub(crate) fn check_tolerance(tolerance: f64) -> Result<()> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidTolerance(tolerance))
    }
}

pub(crate) fn check_non_empty(node_count: usize) -> Result<()> {
    if node_count == 0 {
        Err(Error::EmptyGraph)
    } else {
        Ok(())
    }
}
