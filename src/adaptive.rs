//! Precision-driven adaptive Simpson integration.
//!
//! Refinement starts from a single subdivision and doubles the count until
//! two consecutive estimates agree to within the `10^-P` threshold, in the
//! manner of Richardson-style successive refinement rather than a priori
//! error bounds.

use crate::decimal::{diff, Decimal, Precision};
use crate::error::QuadratureError;
use crate::integrand::Integrand;
use crate::simpson::simpson_integrate;

/// Default cap on refinement rounds (2³⁰ subdivisions at the cap).
pub const DEFAULT_MAX_REFINEMENTS: usize = 30;

/// Result of adaptive integration.
#[derive(Clone, Debug, PartialEq)]
pub struct AdaptiveResult {
    /// Converged integral estimate.
    pub value: Decimal,
    /// Subdivision count of the returned estimate.
    pub parts: u32,
    /// Number of doubling rounds performed.
    pub refinements: usize,
}

/// Integrates `f` over `[start, end]` to approximately `10^-P`.
///
/// Equivalent to [`adaptive_integrate_with_limit`] with
/// [`DEFAULT_MAX_REFINEMENTS`].
///
/// # Errors
///
/// Propagates the argument errors of
/// [`simpson_integrate`](crate::simpson::simpson_integrate) and reports
/// [`QuadratureError::DidNotConverge`] when the cap is exhausted.
pub fn adaptive_integrate<F>(
    f: &F,
    start: &Decimal,
    end: &Decimal,
    precision: Precision,
) -> Result<AdaptiveResult, QuadratureError>
where
    F: Integrand + ?Sized,
{
    adaptive_integrate_with_limit(f, start, end, precision, DEFAULT_MAX_REFINEMENTS)
}

/// Integrates `f` over `[start, end]` with an explicit refinement cap.
///
/// Doubles the subdivision count until two consecutive Simpson estimates
/// differ by less than the precision threshold, then returns the finer
/// estimate together with its subdivision count. Divergent or highly
/// oscillatory integrands cannot satisfy the threshold; the cap converts
/// what would be an endless search into a reported failure.
///
/// # Errors
///
/// Returns [`QuadratureError::DidNotConverge`] if the threshold is not met
/// within `max_refinements` rounds (or the subdivision count would
/// overflow), plus the argument errors of `simpson_integrate`.
pub fn adaptive_integrate_with_limit<F>(
    f: &F,
    start: &Decimal,
    end: &Decimal,
    precision: Precision,
    max_refinements: usize,
) -> Result<AdaptiveResult, QuadratureError>
where
    F: Integrand + ?Sized,
{
    let threshold = precision.threshold();
    let mut previous = simpson_integrate(f, start, end, 1, precision)?;
    let mut parts: u32 = 1;

    for round in 1..=max_refinements {
        let doubled = parts
            .checked_mul(2)
            .ok_or(QuadratureError::DidNotConverge(round - 1))?;
        let estimate = simpson_integrate(f, start, end, doubled, precision)?;
        if diff(&previous, &estimate) < threshold {
            return Ok(AdaptiveResult {
                value: estimate,
                parts: doubled,
                refinements: round,
            });
        }
        previous = estimate;
        parts = doubled;
    }

    Err(QuadratureError::DidNotConverge(max_refinements))
}
