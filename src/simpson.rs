//! Fixed-subdivision composite Simpson quadrature.
//!
//! The rule is kept in its midpoint-refinement form: the interval is cut
//! into `parts` equal pieces, the endpoint and interior node values are
//! combined with the midpoint values of every piece, and the sum is scaled
//! by `h/6`. Each call evaluates the integrand at `2·parts + 1` distinct
//! points.

use crate::decimal::{Decimal, Precision};
use crate::error::QuadratureError;
use crate::integrand::Integrand;

/// Approximates the integral of `f` over `[start, end]` with `parts` equal
/// sub-intervals.
///
/// Computes `h/6 · (f(x₀) + f(xₙ) + 2·Σ f(xᵢ) + 4·Σ f(midᵢ))` with
/// `h = (end - start) / parts` and nodes `xᵢ = start + i·h`. Exact up to
/// rounding for polynomials of degree ≤ 3. A zero-width interval is a valid
/// degenerate case and integrates to zero.
///
/// # Errors
///
/// Returns [`QuadratureError::InvalidInterval`] if `start > end` and
/// [`QuadratureError::InvalidSubdivisions`] if `parts == 0`.
pub fn simpson_integrate<F>(
    f: &F,
    start: &Decimal,
    end: &Decimal,
    parts: u32,
    precision: Precision,
) -> Result<Decimal, QuadratureError>
where
    F: Integrand + ?Sized,
{
    if start > end {
        return Err(QuadratureError::InvalidInterval {
            start: start.clone(),
            end: end.clone(),
        });
    }
    if parts == 0 {
        return Err(QuadratureError::InvalidSubdivisions);
    }

    let two = precision.from_i64(2);
    let four = precision.from_i64(4);
    let six = precision.from_i64(6);
    let h = (end - start) / &precision.from_i64(i64::from(parts));

    // x(i) = start + i·h
    let node = |i: u32| start + &(precision.from_i64(i64::from(i)) * &h);

    let ends = f.at(&node(0)) + f.at(&node(parts));

    // interior nodes, weight 2
    let mut interior = precision.zero();
    for i in 1..parts {
        interior = interior + f.at(&node(i));
    }

    // midpoints of each sub-interval, weight 4
    let mut midpoints = precision.zero();
    for i in 1..=parts {
        let mid = (node(i - 1) + node(i)) / &two;
        midpoints = midpoints + f.at(&mid);
    }

    let weighted = ends + &(two * &interior) + &(four * &midpoints);
    Ok(h / &six * &weighted)
}
