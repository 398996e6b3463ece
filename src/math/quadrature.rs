//! Composite Simpson quadrature.
//!
//! ## Purpose
//!
//! This module integrates smooth scalar functions over a finite interval. It
//! backs the line-of-sight distance integrals of the cosmology layer.
//!
//! ## Design notes
//!
//! * **Algorithm**: Composite Simpson's rule with weights 1, 4, 2, ..., 4, 1.
//! * **Resolution**: The caller picks the interval count; [`intervals_for_span`]
//!   gives the density used throughout the crate.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * The number of sub-intervals is always even and at least 2.
//! * Integrating over an empty interval returns exactly zero.
//! * Reversed bounds flip the sign of the result.
//!
//! ## Non-goals
//!
//! * This module does not handle integrable singularities or infinite bounds.

// External dependencies
use num_traits::Float;

/// Minimum number of Simpson sub-intervals.
pub const MIN_INTERVALS: usize = 64;

/// Sub-intervals per unit length of the integration variable.
pub const INTERVALS_PER_UNIT: f64 = 512.0;

/// Choose an even number of sub-intervals for an integration span.
pub fn intervals_for_span<T: Float>(span: T) -> usize {
    let wanted = (span.abs().to_f64().unwrap_or(0.0) * INTERVALS_PER_UNIT).ceil() as usize;
    let n = wanted.max(MIN_INTERVALS);
    n + n % 2
}

/// Integrate `f` over `[a, b]` with composite Simpson's rule.
///
/// # Formula
///
/// ```text
/// ∫ f ≈ h/3 [f(x_0) + 4 f(x_1) + 2 f(x_2) + ... + 4 f(x_{n-1}) + f(x_n)]
/// ```
pub fn simpson<T, F>(f: F, a: T, b: T, intervals: usize) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    if a == b {
        return T::zero();
    }

    let n = intervals.max(2);
    let n = n + n % 2;
    let h = (b - a) / T::from(n).unwrap();

    let two = T::from(2.0).unwrap();
    let four = T::from(4.0).unwrap();

    let mut sum = f(a) + f(b);
    for i in 1..n {
        let x = a + h * T::from(i).unwrap();
        let w = if i % 2 == 1 { four } else { two };
        sum = sum + w * f(x);
    }

    sum * h / T::from(3.0).unwrap()
}
