//! Normal distribution tail via adaptive Simpson quadrature.
//!
//! Two classic computations: the area under a cubic polynomial, where a
//! single subdivision is already exact, and the mass of the standard normal
//! density from the mean out to an approximated effective infinity.
//!
//! Run with: cargo run --example normal_tail

use quadrans::{
    adaptive_integrate, approx_upper_border, simpson_integrate, Decimal, Precision,
    QuadratureError,
};

fn main() -> Result<(), QuadratureError> {
    let p = Precision::new(8);

    // f(x) = x³ - 2x² + 1 on [0, 1]; the closed form is 7/12
    let f = move |x: &Decimal| x.powi(3) - &(p.from_i64(2) * &x.powi(2)) + &p.one();
    let area = simpson_integrate(&f, &p.zero(), &p.one(), 1, p)?;
    println!("A1: {}", p.round(&area));

    // g(x) = e^(-x²/2), the unnormalized standard normal density
    let two = p.from_i64(2);
    let g = {
        let two = two.clone();
        move |x: &Decimal| (-((x * x) / &two)).exp()
    };

    // 1/√(2π)
    let scale = p.one() / &(two * &p.pi()).sqrt();

    // finite stand-in for +∞: beyond this point g varies by less than 10^-P
    let border = approx_upper_border(&g, p);
    println!("effective infinity: {}", border);

    let tail = adaptive_integrate(&g, &p.zero(), &border, p)?;
    println!("A2: {}", p.round(&(scale * &tail.value)));
    println!("converged with {} subdivisions", tail.parts);

    Ok(())
}
