//! The integrand abstraction.
//!
//! An integrand is an immutable mapping from one decimal value to another:
//! pure, total over the interval the caller intends to integrate, and owned
//! by the caller. It may close over other decimal constants. Closures of
//! type `Fn(&Decimal) -> Decimal` implement the trait directly.

use crate::decimal::Decimal;

/// A real-valued function of one real variable, `f(x) -> y`.
pub trait Integrand {
    /// Evaluates the function at `x`.
    fn at(&self, x: &Decimal) -> Decimal;
}

impl<F> Integrand for F
where
    F: Fn(&Decimal) -> Decimal,
{
    fn at(&self, x: &Decimal) -> Decimal {
        self(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Precision;

    /// Scaling by a captured constant, as a named implementor.
    struct Scaled {
        factor: Decimal,
    }

    impl Integrand for Scaled {
        fn at(&self, x: &Decimal) -> Decimal {
            &self.factor * x
        }
    }

    #[test]
    fn test_closure_integrand() {
        let p = Precision::new(8);
        let square = |x: &Decimal| x * x;
        assert_eq!(square.at(&p.from_i64(3)), p.from_i64(9));
    }

    #[test]
    fn test_named_integrand() {
        let p = Precision::new(8);
        let double = Scaled {
            factor: p.from_i64(2),
        };
        assert_eq!(double.at(&p.from_i64(21)), p.from_i64(42));
    }
}
