//! Error taxonomy for simulation runs
//!
//! All failures are synchronous and local: a run either produces its full
//! output or returns one of these. Nothing here is transient, so there is
//! no retry surface.

use thiserror::Error;

/// Errors produced by parameter validation, aggregation, or summary derivation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// A parameter failed validation before the run started
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter {
        /// Name of the offending field
        field: &'static str,
        /// Human-readable constraint that was violated
        reason: &'static str,
    },

    /// Monthly aggregation was asked to fold an empty daily series
    #[error("cannot aggregate an empty daily series")]
    EmptyInput,

    /// Summary derivation hit a zero cost basis (validation was bypassed)
    #[error("degenerate input: initial investment is zero")]
    DegenerateInput,
}

impl SimulationError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::InvalidParameter { field, reason }
    }
}
