//! Lensing observables for a parametric halo.
//!
//! ## Purpose
//!
//! This module is the function surface of the crate: it chains the
//! cosmology and halo-profile layers into 3D density, surface density,
//! excess surface density, critical surface density, tangential shear,
//! convergence and reduced tangential shear.
//!
//! ## Design notes
//!
//! * **Single-sourced Ω_m**: Every profile evaluator derives Ω_m once via
//!   [`get_om`] and passes the value explicitly to the profile.
//! * **Closed tags**: Profile family and source model are enums; the two
//!   unimplemented source models fail with
//!   [`LensingError::UnimplementedSourceModel`] before any work is done.
//! * **Stateless**: Every call is independent; the cosmology is borrowed
//!   immutably and never modified.
//! * **Degeneracies**: Division by a zero distance or by 1 − κ = 0 is left to
//!   IEEE arithmetic (±∞) and logged at `warn` level.
//!
//! ## Key concepts
//!
//! * **Σ_crit**: c² / (4πG) · d_s / (d_l d_ls) with comoving angular
//!   distances, converted to h M☉/pc².
//! * **γ_t**: ΔΣ / Σ_crit.
//! * **κ**: Σ / Σ_crit.
//! * **g_t**: γ_t / (1 − κ).
//!
//! ## Non-goals
//!
//! * This module does not average over source redshift distributions.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};
#[cfg(feature = "std")]
use std::{boxed::Box, vec::Vec};

// External dependencies
use num_traits::Float;
use tracing::{debug, warn};

// Internal dependencies
use crate::algorithms::cosmology::{scale_factor, Cosmology};
use crate::algorithms::profile::{HaloProfile, HaloProfileFamily};
use crate::algorithms::source::SourceRedshiftModel;
use crate::engine::validator::Validator;
use crate::primitives::constants::{PhysicalConstants, MPC2_TO_PC2};
use crate::primitives::errors::LensingError;

// ============================================================================
// Cosmology Normalizer
// ============================================================================

/// Return a copy of `cosmo` with Ω_m = Ω_c + Ω_b recorded.
///
/// The input is left untouched; calling this repeatedly yields the same Ω_m.
pub fn get_om<T: Float>(cosmo: &Cosmology<T>) -> Cosmology<T> {
    cosmo.with_derived_omega_m()
}

// ============================================================================
// Profile Evaluators
// ============================================================================

/// Validate inputs and build the halo profile with a single-sourced Ω_m.
fn halo_profile<T: Float + 'static>(
    r: &[T],
    mdelta: T,
    cdelta: T,
    cosmo: &Cosmology<T>,
    delta: u32,
    family: HaloProfileFamily,
) -> Result<Box<dyn HaloProfile<T>>, LensingError> {
    Validator::validate_radii(r)?;
    Validator::validate_halo(mdelta, cdelta, delta)?;
    Validator::validate_cosmology(cosmo)?;

    let omega_m = get_om(cosmo).omega_m();
    Ok(family.profile(mdelta, cdelta, omega_m, delta))
}

/// 3D density profile ρ(r) [h² M☉/Mpc³].
pub fn get_3d_density_profile<T: Float + 'static>(
    r3d: &[T],
    mdelta: T,
    cdelta: T,
    cosmo: &Cosmology<T>,
    delta: u32,
    halo_profile_parameterization: HaloProfileFamily,
) -> Result<Vec<T>, LensingError> {
    debug!(
        n = r3d.len(),
        delta,
        profile = halo_profile_parameterization.name(),
        "3d density profile"
    );
    let profile = halo_profile(r3d, mdelta, cdelta, cosmo, delta, halo_profile_parameterization)?;
    Ok(profile.density(r3d))
}

/// Surface density profile Σ(R) [h M☉/pc²].
pub fn calculate_surface_density<T: Float + 'static>(
    r_proj: &[T],
    mdelta: T,
    cdelta: T,
    cosmo: &Cosmology<T>,
    delta: u32,
    halo_profile_parameterization: HaloProfileFamily,
) -> Result<Vec<T>, LensingError> {
    debug!(
        n = r_proj.len(),
        delta,
        profile = halo_profile_parameterization.name(),
        "surface density"
    );
    let profile = halo_profile(r_proj, mdelta, cdelta, cosmo, delta, halo_profile_parameterization)?;
    Ok(profile.surface_density(r_proj))
}

/// Excess surface density profile ΔΣ(R) = Σ̄(<R) − Σ(R) [h M☉/pc²].
pub fn calculate_excess_surface_density<T: Float + 'static>(
    r_proj: &[T],
    mdelta: T,
    cdelta: T,
    cosmo: &Cosmology<T>,
    delta: u32,
    halo_profile_parameterization: HaloProfileFamily,
) -> Result<Vec<T>, LensingError> {
    debug!(
        n = r_proj.len(),
        delta,
        profile = halo_profile_parameterization.name(),
        "excess surface density"
    );
    let profile = halo_profile(r_proj, mdelta, cdelta, cosmo, delta, halo_profile_parameterization)?;
    let sigma = profile.surface_density(r_proj);
    profile.excess_surface_density(r_proj, &sigma)
}

// ============================================================================
// Lensing Geometry
// ============================================================================

/// Comoving angular distance between two epochs given as scale factors [Mpc/h].
///
/// Both scale factors must be positive and finite. Their order is not
/// checked: swapping the epochs flips the sign, and equal epochs give zero.
pub fn comoving_angular_distance_aexp1_aexp2<T: Float>(
    cosmo: &Cosmology<T>,
    aexp1: T,
    aexp2: T,
) -> Result<T, LensingError> {
    Validator::validate_scale_factor(aexp1)?;
    Validator::validate_scale_factor(aexp2)?;
    Ok(cosmo.comoving_angular_distance_between(aexp1, aexp2))
}

/// Critical surface density Σ_crit for a lens and a source plane [h M☉/pc²].
///
/// Returns `+∞` when the lens sits at the observer or on the source plane,
/// including the doubly degenerate z_cluster = z_source = 0.
pub fn get_critical_surface_density<T: Float>(
    cosmo: &Cosmology<T>,
    z_cluster: T,
    z_source: T,
) -> Result<T, LensingError> {
    Validator::validate_redshift(z_cluster)?;
    Validator::validate_redshift(z_source)?;
    Validator::validate_cosmology(cosmo)?;

    let aexp_cluster = scale_factor(z_cluster);
    let aexp_src = scale_factor(z_source);

    let d_l = cosmo.comoving_angular_distance(aexp_cluster);
    let d_s = cosmo.comoving_angular_distance(aexp_src);
    let d_ls = comoving_angular_distance_aexp1_aexp2(cosmo, aexp_cluster, aexp_src)?;

    let prefactor = T::from(PhysicalConstants::SI.sigma_crit_prefactor() * MPC2_TO_PC2).unwrap();
    let lens_distances = d_l * d_ls;
    let sigma_crit = if lens_distances == T::zero() {
        T::infinity()
    } else {
        d_s / lens_distances * prefactor
    };

    debug!(
        z_cluster = z_cluster.to_f64().unwrap_or(f64::NAN),
        z_source = z_source.to_f64().unwrap_or(f64::NAN),
        sigma_crit = sigma_crit.to_f64().unwrap_or(f64::NAN),
        "critical surface density"
    );
    if !sigma_crit.is_finite() {
        warn!(
            d_l = d_l.to_f64().unwrap_or(f64::NAN),
            d_ls = d_ls.to_f64().unwrap_or(f64::NAN),
            "degenerate lensing geometry, critical surface density is not finite"
        );
    }

    Ok(sigma_crit)
}

// ============================================================================
// Shear and Convergence
// ============================================================================

/// Tangential shear profile γ_t(R) = ΔΣ(R) / Σ_crit.
#[allow(clippy::too_many_arguments)]
pub fn compute_tangential_shear_profile<T: Float + 'static>(
    r_proj: &[T],
    mdelta: T,
    cdelta: T,
    z_cluster: T,
    z_source: T,
    cosmo: &Cosmology<T>,
    delta: u32,
    halo_profile_parameterization: HaloProfileFamily,
    z_src_model: SourceRedshiftModel,
) -> Result<Vec<T>, LensingError> {
    z_src_model.ensure_implemented()?;

    let delta_sigma = calculate_excess_surface_density(
        r_proj,
        mdelta,
        cdelta,
        cosmo,
        delta,
        halo_profile_parameterization,
    )?;
    let sigma_c = get_critical_surface_density(cosmo, z_cluster, z_source)?;

    Ok(delta_sigma.into_iter().map(|ds| ds / sigma_c).collect())
}

/// Convergence profile κ(R) = Σ(R) / Σ_crit.
#[allow(clippy::too_many_arguments)]
pub fn compute_convergence_profile<T: Float + 'static>(
    r_proj: &[T],
    mdelta: T,
    cdelta: T,
    z_cluster: T,
    z_source: T,
    cosmo: &Cosmology<T>,
    delta: u32,
    halo_profile_parameterization: HaloProfileFamily,
    z_src_model: SourceRedshiftModel,
) -> Result<Vec<T>, LensingError> {
    z_src_model.ensure_implemented()?;

    let sigma = calculate_surface_density(
        r_proj,
        mdelta,
        cdelta,
        cosmo,
        delta,
        halo_profile_parameterization,
    )?;
    let sigma_c = get_critical_surface_density(cosmo, z_cluster, z_source)?;

    Ok(sigma.into_iter().map(|s| s / sigma_c).collect())
}

/// Reduced tangential shear profile g_t(R) = γ_t(R) / (1 − κ(R)).
#[allow(clippy::too_many_arguments)]
pub fn compute_reduced_tangential_shear_profile<T: Float + 'static>(
    r_proj: &[T],
    mdelta: T,
    cdelta: T,
    z_cluster: T,
    z_source: T,
    cosmo: &Cosmology<T>,
    delta: u32,
    halo_profile_parameterization: HaloProfileFamily,
    z_src_model: SourceRedshiftModel,
) -> Result<Vec<T>, LensingError> {
    z_src_model.ensure_implemented()?;

    let kappa = compute_convergence_profile(
        r_proj,
        mdelta,
        cdelta,
        z_cluster,
        z_source,
        cosmo,
        delta,
        halo_profile_parameterization,
        z_src_model,
    )?;
    let gamma_t = compute_tangential_shear_profile(
        r_proj,
        mdelta,
        cdelta,
        z_cluster,
        z_source,
        cosmo,
        delta,
        halo_profile_parameterization,
        z_src_model,
    )?;

    Ok(reduced_shear(&gamma_t, &kappa))
}

/// Element-wise γ_t / (1 − κ).
pub fn reduced_shear<T: Float>(gamma_t: &[T], kappa: &[T]) -> Vec<T> {
    if kappa.iter().any(|&k| k == T::one()) {
        warn!("convergence reaches 1, reduced shear is not finite there");
    }
    gamma_t
        .iter()
        .zip(kappa.iter())
        .map(|(&g, &k)| g / (T::one() - k))
        .collect()
}
