//! Power-law interpolation on tabulated radial profiles.
//!
//! ## Purpose
//!
//! Radial profiles such as Σ(R) span many decades and are close to power laws
//! locally. This module interpolates them linearly in log-log space and
//! integrates the resulting power-law segments exactly.
//!
//! ## Key concepts
//!
//! * **Segment**: Between nodes i and i+1, s(R) = s_i (R/R_i)^α_i with
//!   α_i = ln(s_{i+1}/s_i) / ln(R_{i+1}/R_i).
//! * **Moment**: ∫ s(R) R dR over a segment, the building block of the mean
//!   interior surface density.
//!
//! ## Invariants
//!
//! * Table radii are strictly increasing and positive.
//! * Table values are strictly positive.

// External dependencies
use num_traits::Float;

/// Slopes closer than this to −2 use the logarithmic moment.
const SLOPE_EPS: f64 = 1e-10;

/// Logarithmic slope between two positive nodes.
#[inline]
pub fn log_slope<T: Float>(r0: T, s0: T, r1: T, s1: T) -> T {
    (s1 / s0).ln() / (r1 / r0).ln()
}

/// Evaluate the power law through `(r0, s0)` with slope `alpha` at `r`.
#[inline]
pub fn power_law_at<T: Float>(r0: T, s0: T, alpha: T, r: T) -> T {
    s0 * (r / r0).powf(alpha)
}

/// Exact ∫ s(R) R dR from `lo` to `hi` for s(R) = s0 (R/r0)^alpha.
///
/// `lo` may be zero when `alpha > -2`.
pub fn power_law_moment<T: Float>(r0: T, s0: T, alpha: T, lo: T, hi: T) -> T {
    let p = alpha + T::from(2.0).unwrap();
    if p.abs() < T::from(SLOPE_EPS).unwrap() {
        return s0 * r0 * r0 * (hi / lo).ln();
    }
    s0 * r0 * r0 * ((hi / r0).powf(p) - (lo / r0).powf(p)) / p
}

/// Index `i` of the segment `[table[i], table[i + 1]]` containing `r`.
///
/// Returns `None` outside the table. The last node maps to the last segment.
pub fn find_segment<T: Float>(table: &[T], r: T) -> Option<usize> {
    let n = table.len();
    if n < 2 || r < table[0] || r > table[n - 1] {
        return None;
    }
    let upper = table.partition_point(|&t| t <= r);
    Some(upper.saturating_sub(1).min(n - 2))
}
