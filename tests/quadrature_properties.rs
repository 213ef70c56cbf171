//! Property tests for the quadrature engine.

use proptest::prelude::*;
use quadrans::{diff, simpson_integrate, Decimal, Precision, QuadratureError};

const DIGITS: usize = 8;

fn decimal_strategy() -> impl Strategy<Value = Decimal> {
    // mantissa · 10^-scale, well within the working precision
    (-1_000_000i64..1_000_000, 0u32..6).prop_map(|(mantissa, scale)| {
        let p = Precision::new(DIGITS);
        p.from_i64(mantissa) / &p.from_i64(10).powi(scale)
    })
}

proptest! {
    /// Property: diff is symmetric in its arguments
    #[test]
    fn diff_symmetric(a in decimal_strategy(), b in decimal_strategy()) {
        prop_assert_eq!(diff(&a, &b), diff(&b, &a));
    }

    /// Property: diff of a value with itself is exactly zero
    #[test]
    fn diff_identity(a in decimal_strategy()) {
        prop_assert_eq!(diff(&a, &a), Precision::new(DIGITS).zero());
    }

    /// Property: diff is never negative
    #[test]
    fn diff_non_negative(a in decimal_strategy(), b in decimal_strategy()) {
        let p = Precision::new(DIGITS);
        prop_assert!(diff(&a, &b) >= p.zero());
    }

    /// Property: identical inputs produce identical estimates
    #[test]
    fn simpson_deterministic(
        a in decimal_strategy(),
        b in decimal_strategy(),
        parts in 1u32..32,
    ) {
        let p = Precision::new(DIGITS);
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let f = |x: &Decimal| x * x;
        let first = simpson_integrate(&f, &start, &end, parts, p).unwrap();
        let second = simpson_integrate(&f, &start, &end, parts, p).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: reversed intervals are rejected for any integrand
    #[test]
    fn reversed_interval_rejected(
        a in decimal_strategy(),
        b in decimal_strategy(),
        parts in 1u32..32,
    ) {
        prop_assume!(a != b);
        let p = Precision::new(DIGITS);
        let (start, end) = if a < b { (b, a) } else { (a, b) };
        let f = |x: &Decimal| x * x;
        let is_invalid_interval = matches!(
            simpson_integrate(&f, &start, &end, parts, p),
            Err(QuadratureError::InvalidInterval { .. })
        );
        prop_assert!(is_invalid_interval);
    }

    /// Property: a zero subdivision count is rejected
    #[test]
    fn zero_parts_rejected(a in decimal_strategy(), b in decimal_strategy()) {
        let p = Precision::new(DIGITS);
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let f = |x: &Decimal| x * x;
        prop_assert_eq!(
            simpson_integrate(&f, &start, &end, 0, p),
            Err(QuadratureError::InvalidSubdivisions)
        );
    }

    /// Property: zero-width intervals integrate to exactly zero
    #[test]
    fn degenerate_interval_zero(a in decimal_strategy(), parts in 1u32..32) {
        let p = Precision::new(DIGITS);
        let f = |x: &Decimal| x * x;
        prop_assert_eq!(simpson_integrate(&f, &a, &a, parts, p).unwrap(), p.zero());
    }
}
