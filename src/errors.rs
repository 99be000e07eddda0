use thiserror::Error;

/// Largest accepted magnitude for choice weights and for the overflow
/// penalty. Any reachable objective then stays far below `i64::MAX`.
pub const WEIGHT_LIMIT: i64 = 1 << 32;

/// Failure surface of a solve call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The input violates a structural rule (duplicate id, empty or
    /// duplicated choice list, unknown project reference, weight list
    /// longer than the choices, out-of-range weight or penalty).
    /// Detected before the solver runs.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Reserved for future hard constraints. With unbounded overflow
    /// every validated input is feasible, so this is never produced
    /// today; it exists so constraint extensions have a failure path.
    #[error("no feasible assignment: {0}")]
    InfeasibleModel(String),
    /// The optimization routine did not produce a complete, verified
    /// assignment. Indicates a solver defect, not bad input.
    #[error("solver failure: {0}")]
    SolverInternal(String),
}

impl SolveError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::SolverInternal(msg.into())
    }
}
