//! Adaptive-precision Simpson quadrature over arbitrary precision decimals.
//!
//! This crate approximates definite integrals of single-variable real
//! functions with the composite Simpson rule, carried out in decimal
//! arithmetic at an explicit significant-digit precision. Refinement
//! doubles the subdivision count until consecutive estimates agree to the
//! precision threshold, and an effective-infinity search produces finite
//! upper bounds for integrands that flatten out, such as density tails.
//!
//! # Quick Start
//!
//! ```ignore
//! use quadrans::{adaptive_integrate, approx_upper_border, Decimal, Precision};
//!
//! let p = Precision::new(8);
//!
//! // ∫₀¹ (x³ - 2x² + 1) dx = 7/12
//! let f = move |x: &Decimal| x.powi(3) - &(p.from_i64(2) * &x.powi(2)) + &p.one();
//! let area = adaptive_integrate(&f, &p.zero(), &p.one(), p)?;
//!
//! // Mass of the standard normal density right of the mean
//! let two = p.from_i64(2);
//! let g = move |x: &Decimal| (-((x * x) / &two)).exp();
//! let border = approx_upper_border(&g, p);
//! let tail = adaptive_integrate(&g, &p.zero(), &border, p)?;
//! ```
//!
//! # Design
//!
//! - **Explicit precision**: a [`Precision`] context is passed to every
//!   entry point and manufactures every constant, so no value computes
//!   without a rounding context.
//! - **Pure functions**: integrands are opaque [`Integrand`] capabilities;
//!   every entry point is a deterministic function of its inputs with no
//!   shared state.
//! - **Reported diagnostics**: adaptive integration returns the subdivision
//!   count and refinement rounds alongside the estimate.
//! - **Bounded refinement**: a refinement cap turns non-convergent
//!   integrands into a reported error instead of an endless loop.

pub mod adaptive;
pub mod decimal;
pub mod error;
pub mod integrand;
pub mod simpson;
pub mod upper_border;

pub use adaptive::{
    adaptive_integrate, adaptive_integrate_with_limit, AdaptiveResult, DEFAULT_MAX_REFINEMENTS,
};
pub use decimal::{diff, Decimal, Precision};
pub use error::QuadratureError;
pub use integrand::Integrand;
pub use simpson::simpson_integrate;
pub use upper_border::{approx_upper_border, search_upper_border};
