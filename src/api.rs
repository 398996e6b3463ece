//! High-level API for lensing profile prediction.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for describing a halo and its cosmology, and a model that
//! evaluates every lensing observable for that halo.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder; Δ, profile family and source model default
//!   to 200, NFW and a single source plane.
//! * **Validated**: All parameters are validated when `.build()` is called.
//! * **Normalized**: The model stores the cosmology returned by `get_om`, so
//!   Ω_m is derived exactly once.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LensingBuilder`] via `Lensing::new()`.
//! 2. Chain configuration methods (`.mass()`, `.concentration()`, etc.).
//! 3. Call `.build()` to obtain a [`LensingModel`].
//! 4. Evaluate observables on projected radii, or call `.predict()` for all
//!    of them at once.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::engine::evaluator;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::cosmology::Cosmology;
pub use crate::algorithms::profile::{HaloProfileFamily, DEFAULT_DELTA};
pub use crate::algorithms::source::SourceRedshiftModel;
pub use crate::algorithms::tabulated::{
    excess_surface_density_from_table, mean_surface_density_from_table,
};
pub use crate::engine::evaluator::{
    calculate_excess_surface_density, calculate_surface_density,
    compute_convergence_profile, compute_reduced_tangential_shear_profile,
    compute_tangential_shear_profile, get_3d_density_profile, get_critical_surface_density,
    get_om,
};
pub use crate::engine::output::LensingProfile;
pub use crate::primitives::errors::LensingError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a lensing halo.
#[derive(Debug, Clone)]
pub struct LensingBuilder<T: Float> {
    /// Halo mass M_Δ [M☉/h].
    pub mass: Option<T>,

    /// Halo concentration c_Δ.
    pub concentration: Option<T>,

    /// Mass overdensity definition Δ (default: 200).
    pub delta: Option<u32>,

    /// Halo profile family (default: NFW).
    pub profile: Option<HaloProfileFamily>,

    /// Source redshift model (default: single plane).
    pub source_model: Option<SourceRedshiftModel>,

    /// Background cosmology.
    pub cosmology: Option<Cosmology<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for LensingBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LensingBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            mass: None,
            concentration: None,
            delta: None,
            profile: None,
            source_model: None,
            cosmology: None,
            duplicate_param: None,
        }
    }

    /// Set the halo mass M_Δ [M☉/h].
    pub fn mass(mut self, mdelta: T) -> Self {
        if self.mass.is_some() {
            self.duplicate_param = Some("mass");
        }
        self.mass = Some(mdelta);
        self
    }

    /// Set the halo concentration c_Δ.
    pub fn concentration(mut self, cdelta: T) -> Self {
        if self.concentration.is_some() {
            self.duplicate_param = Some("concentration");
        }
        self.concentration = Some(cdelta);
        self
    }

    /// Set the mass overdensity definition Δ relative to the mean matter density.
    pub fn delta(mut self, delta: u32) -> Self {
        if self.delta.is_some() {
            self.duplicate_param = Some("delta");
        }
        self.delta = Some(delta);
        self
    }

    /// Set the halo profile family.
    pub fn profile(mut self, family: HaloProfileFamily) -> Self {
        if self.profile.is_some() {
            self.duplicate_param = Some("profile");
        }
        self.profile = Some(family);
        self
    }

    /// Set the source redshift model.
    pub fn source_model(mut self, model: SourceRedshiftModel) -> Self {
        if self.source_model.is_some() {
            self.duplicate_param = Some("source_model");
        }
        self.source_model = Some(model);
        self
    }

    /// Set the background cosmology.
    pub fn cosmology(mut self, cosmo: Cosmology<T>) -> Self {
        if self.cosmology.is_some() {
            self.duplicate_param = Some("cosmology");
        }
        self.cosmology = Some(cosmo);
        self
    }

    /// Validate the configuration and build a [`LensingModel`].
    pub fn build(self) -> Result<LensingModel<T>, LensingError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let mdelta = self
            .mass
            .ok_or_else(|| LensingError::MissingParameter("mass".to_string()))?;
        let cdelta = self
            .concentration
            .ok_or_else(|| LensingError::MissingParameter("concentration".to_string()))?;
        let cosmo = self
            .cosmology
            .ok_or_else(|| LensingError::MissingParameter("cosmology".to_string()))?;
        let delta = self.delta.unwrap_or(DEFAULT_DELTA);

        Validator::validate_halo(mdelta, cdelta, delta)?;
        Validator::validate_cosmology(&cosmo)?;

        Ok(LensingModel {
            mdelta,
            cdelta,
            delta,
            profile: self.profile.unwrap_or_default(),
            source_model: self.source_model.unwrap_or_default(),
            cosmology: get_om(&cosmo),
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated halo in a fixed cosmology.
#[derive(Debug, Clone, PartialEq)]
pub struct LensingModel<T: Float> {
    mdelta: T,
    cdelta: T,
    delta: u32,
    profile: HaloProfileFamily,
    source_model: SourceRedshiftModel,
    cosmology: Cosmology<T>,
}

impl<T: Float + 'static> LensingModel<T> {
    /// Halo mass M_Δ [M☉/h].
    pub fn mass(&self) -> T {
        self.mdelta
    }

    /// Halo concentration c_Δ.
    pub fn concentration(&self) -> T {
        self.cdelta
    }

    /// Overdensity definition Δ.
    pub fn delta(&self) -> u32 {
        self.delta
    }

    /// Cosmology with Ω_m recorded.
    pub fn cosmology(&self) -> &Cosmology<T> {
        &self.cosmology
    }

    /// 3D density ρ(r) [h² M☉/Mpc³].
    pub fn density(&self, r3d: &[T]) -> Result<Vec<T>, LensingError> {
        get_3d_density_profile(
            r3d,
            self.mdelta,
            self.cdelta,
            &self.cosmology,
            self.delta,
            self.profile,
        )
    }

    /// Surface density Σ(R) [h M☉/pc²].
    pub fn surface_density(&self, r_proj: &[T]) -> Result<Vec<T>, LensingError> {
        calculate_surface_density(
            r_proj,
            self.mdelta,
            self.cdelta,
            &self.cosmology,
            self.delta,
            self.profile,
        )
    }

    /// Excess surface density ΔΣ(R) [h M☉/pc²].
    pub fn excess_surface_density(&self, r_proj: &[T]) -> Result<Vec<T>, LensingError> {
        calculate_excess_surface_density(
            r_proj,
            self.mdelta,
            self.cdelta,
            &self.cosmology,
            self.delta,
            self.profile,
        )
    }

    /// Critical surface density Σ_crit [h M☉/pc²].
    pub fn critical_surface_density(&self, z_cluster: T, z_source: T) -> Result<T, LensingError> {
        get_critical_surface_density(&self.cosmology, z_cluster, z_source)
    }

    /// Tangential shear γ_t(R).
    pub fn tangential_shear(
        &self,
        r_proj: &[T],
        z_cluster: T,
        z_source: T,
    ) -> Result<Vec<T>, LensingError> {
        compute_tangential_shear_profile(
            r_proj,
            self.mdelta,
            self.cdelta,
            z_cluster,
            z_source,
            &self.cosmology,
            self.delta,
            self.profile,
            self.source_model,
        )
    }

    /// Convergence κ(R).
    pub fn convergence(
        &self,
        r_proj: &[T],
        z_cluster: T,
        z_source: T,
    ) -> Result<Vec<T>, LensingError> {
        compute_convergence_profile(
            r_proj,
            self.mdelta,
            self.cdelta,
            z_cluster,
            z_source,
            &self.cosmology,
            self.delta,
            self.profile,
            self.source_model,
        )
    }

    /// Reduced tangential shear g_t(R).
    pub fn reduced_tangential_shear(
        &self,
        r_proj: &[T],
        z_cluster: T,
        z_source: T,
    ) -> Result<Vec<T>, LensingError> {
        compute_reduced_tangential_shear_profile(
            r_proj,
            self.mdelta,
            self.cdelta,
            z_cluster,
            z_source,
            &self.cosmology,
            self.delta,
            self.profile,
            self.source_model,
        )
    }

    /// Evaluate every observable at `r_proj`.
    ///
    /// Σ, ΔΣ and Σ_crit are computed once; γ_t, κ and g_t are derived from
    /// them, so the result matches the individual methods.
    pub fn predict(
        &self,
        r_proj: &[T],
        z_cluster: T,
        z_source: T,
    ) -> Result<LensingProfile<T>, LensingError> {
        self.source_model.ensure_implemented()?;
        debug!(
            n = r_proj.len(),
            profile = self.profile.name(),
            source_model = self.source_model.name(),
            "predict"
        );

        Validator::validate_radii(r_proj)?;
        let halo = self
            .profile
            .profile(self.mdelta, self.cdelta, self.cosmology.omega_m(), self.delta);

        let sigma = halo.surface_density(r_proj);
        let delta_sigma = halo.excess_surface_density(r_proj, &sigma)?;
        let sigma_crit = self.critical_surface_density(z_cluster, z_source)?;

        let gamma_t: Vec<T> = delta_sigma.iter().map(|&ds| ds / sigma_crit).collect();
        let kappa: Vec<T> = sigma.iter().map(|&s| s / sigma_crit).collect();
        let g_t = evaluator::reduced_shear(&gamma_t, &kappa);

        Ok(LensingProfile {
            r_proj: r_proj.to_vec(),
            z_cluster,
            z_source,
            sigma,
            delta_sigma,
            sigma_crit,
            gamma_t,
            kappa,
            g_t,
            profile: self.profile,
            source_model: self.source_model,
        })
    }
}
