//! Effective-infinity bounds for improper integrals.
//!
//! For integrands meant to be integrated to +∞, such as the tails of
//! probability densities, this module finds a finite point beyond which the
//! local variation of the function falls under the precision threshold.
//! That point serves as a practical substitute for the unbounded upper
//! limit.

use crate::decimal::{diff, Decimal, Precision};
use crate::integrand::Integrand;

/// Approximates an upper integration border for `f` within precision `P`.
///
/// Searches from `x = 0` with step `1`, advancing and doubling the step
/// while `|f(x) - f(x + step)|` exceeds the `10^-P` threshold. The border
/// is coarse: it is the last probe before the variation fell under the
/// threshold, not a tight bound, so callers needing tight bounds must not
/// rely on this routine alone.
///
/// The search does not terminate for functions whose local variation never
/// drops below the threshold (e.g. functions that increase without bound).
#[must_use]
pub fn approx_upper_border<F>(f: &F, precision: Precision) -> Decimal
where
    F: Integrand + ?Sized,
{
    search_upper_border(f, precision.zero(), precision.one(), &precision.threshold())
}

/// Upper-border search from an explicit starting point, step and threshold.
///
/// Advances `x += range` and doubles `range` while the variation over the
/// next step exceeds `threshold`. The step grows geometrically, so the
/// search is logarithmic in the distance to the region where `f` flattens
/// out.
#[must_use]
pub fn search_upper_border<F>(
    f: &F,
    x: Decimal,
    range: Decimal,
    threshold: &Decimal,
) -> Decimal
where
    F: Integrand + ?Sized,
{
    let mut x = x;
    let mut range = range;
    loop {
        let variation = diff(&f.at(&x), &f.at(&(&x + &range)));
        if variation <= *threshold {
            return x;
        }
        x = &x + &range;
        range = &range + &range;
    }
}
