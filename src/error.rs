//! Error taxonomy for the mVRP solver.
//!
//! `OperatorDegenerate` (an AEX crossover producing an invalid permutation)
//! and `Cancelled` (a caller-signalled stop) are explicitly *not*
//! `SolverError` variants: the former is recovered locally by falling back
//! to order crossover and only counted, the latter is a successful outcome
//! carrying the best-so-far individual. See [`crate::driver::RunOutcome`].

use thiserror::Error;

/// Errors surfaced at construction time. Never produced once a run starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    /// The problem instance's shape is invalid: fewer than two coordinates,
    /// fewer than one worker, or a malformed/non-finite coordinate.
    #[error("invalid problem instance: {0}")]
    InvalidInstance(String),

    /// The driver configuration is invalid: non-positive generation or
    /// population size, a mutation rate outside `[0, 1]`, or an unknown
    /// operator tag.
    #[error("invalid solver configuration: {0}")]
    InvalidConfiguration(String),
}

pub type SolverResult<T> = Result<T, SolverError>;
