//! Error types for the quadrature engine.

use crate::decimal::Decimal;
use thiserror::Error;

/// Errors reported by the integration entry points.
///
/// Invalid arguments are reported synchronously and never silently
/// corrected; non-convergence is reported once the refinement cap is
/// reached. Every result is deterministic in its inputs, so no failure here
/// is worth retrying.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum QuadratureError {
    /// The interval was supplied with `start > end`.
    #[error("interval start {start} is greater than end {end}")]
    InvalidInterval { start: Decimal, end: Decimal },

    /// The subdivision count must be at least one.
    #[error("subdivision count must be positive")]
    InvalidSubdivisions,

    /// Successive refinement failed to satisfy the precision threshold.
    #[error("did not converge within {0} refinement rounds")]
    DidNotConverge(usize),
}
