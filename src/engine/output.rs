//! Output types for lensing predictions.
//!
//! ## Purpose
//!
//! This module defines [`LensingProfile`], the container returned by
//! `LensingModel::predict`: every observable at every projected radius,
//! together with the configuration that produced it.
//!
//! ## Key concepts
//!
//! * **Columns**: Each observable is a vector aligned with `r_proj`.
//! * **Scalars**: Σ_crit is a single value for a single source plane.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::profile::HaloProfileFamily;
use crate::algorithms::source::SourceRedshiftModel;

// ============================================================================
// Lensing Profile
// ============================================================================

/// Predicted lensing observables for one halo and one source plane.
#[derive(Debug, Clone, PartialEq)]
pub struct LensingProfile<T> {
    /// Projected radii [Mpc/h].
    pub r_proj: Vec<T>,

    /// Lens redshift.
    pub z_cluster: T,

    /// Source redshift.
    pub z_source: T,

    /// Surface density Σ(R) [h M☉/pc²].
    pub sigma: Vec<T>,

    /// Excess surface density ΔΣ(R) [h M☉/pc²].
    pub delta_sigma: Vec<T>,

    /// Critical surface density Σ_crit [h M☉/pc²].
    pub sigma_crit: T,

    /// Tangential shear γ_t(R).
    pub gamma_t: Vec<T>,

    /// Convergence κ(R).
    pub kappa: Vec<T>,

    /// Reduced tangential shear g_t(R).
    pub g_t: Vec<T>,

    /// Halo profile family used.
    pub profile: HaloProfileFamily,

    /// Source redshift model used.
    pub source_model: SourceRedshiftModel,
}

impl<T: Float> LensingProfile<T> {
    /// Number of radial points.
    pub fn len(&self) -> usize {
        self.r_proj.len()
    }

    /// Whether the profile has no radial points.
    pub fn is_empty(&self) -> bool {
        self.r_proj.is_empty()
    }

    /// Whether every observable is finite (false for degenerate geometry).
    pub fn is_finite(&self) -> bool {
        self.sigma_crit.is_finite()
            && [&self.sigma, &self.delta_sigma, &self.gamma_t, &self.kappa, &self.g_t]
                .iter()
                .all(|col| col.iter().all(|v| v.is_finite()))
    }
}

impl<T: Float + Display> Display for LensingProfile<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Radial points: {}", self.len())?;
        writeln!(f, "  Profile: {}", self.profile.name())?;
        writeln!(f, "  Source model: {}", self.source_model.name())?;
        writeln!(f, "  z_cluster: {}", self.z_cluster)?;
        writeln!(f, "  z_source: {}", self.z_source)?;
        writeln!(f, "  Sigma_crit: {:.4e}", self.sigma_crit.to_f64().unwrap_or(f64::NAN))?;
        writeln!(f)?;

        writeln!(f, "Lensing Profile:")?;
        writeln!(
            f,
            "  {:>10} {:>12} {:>12} {:>12} {:>12} {:>12}",
            "R", "Sigma", "DeltaSigma", "gamma_t", "kappa", "g_t"
        )?;
        writeln!(f, "  {}", "-".repeat(75))?;

        for i in 0..self.len() {
            let cell = |col: &[T]| col[i].to_f64().unwrap_or(f64::NAN);
            writeln!(
                f,
                "  {:>10.4} {:>12.4} {:>12.4} {:>12.6} {:>12.6} {:>12.6}",
                cell(&self.r_proj),
                cell(&self.sigma),
                cell(&self.delta_sigma),
                cell(&self.gamma_t),
                cell(&self.kappa),
                cell(&self.g_t),
            )?;
        }

        Ok(())
    }
}
