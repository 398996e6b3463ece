//! Input validation for halo, cosmology and radial-sample inputs.
//!
//! ## Purpose
//!
//! This module checks the inputs of every lensing evaluator before any
//! physics is computed: radial samples, halo parameters, redshifts, scale
//! factors and cosmological parameters.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Radii**: Non-empty, finite and strictly positive.
//! * **Halo**: Positive finite mass and concentration, positive Δ.
//! * **Redshifts**: Finite and non-negative; their order is not checked.
//! * **Cosmology**: Physical densities and an expansion rate E(a) that stays
//!   real back to the big bang.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective physical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not reject degenerate lensing geometry (z_l = z_s);
//!   that surfaces as an infinite critical surface density.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::cosmology::Cosmology;
use crate::primitives::errors::LensingError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for lensing inputs.
///
/// Provides static methods returning `Result<(), LensingError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Sample Validation
    // ========================================================================

    /// Validate a radial sample (3D or projected).
    pub fn validate_radii<T: Float>(r: &[T]) -> Result<(), LensingError> {
        if r.is_empty() {
            return Err(LensingError::EmptyInput);
        }

        for (i, &val) in r.iter().enumerate() {
            if !val.is_finite() {
                return Err(LensingError::InvalidNumericValue(format!(
                    "r[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if val <= T::zero() {
                return Err(LensingError::InvalidRadius {
                    index: i,
                    value: val.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), LensingError> {
        if !val.is_finite() {
            return Err(LensingError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Halo Validation
    // ========================================================================

    /// Validate the halo mass M_Δ.
    pub fn validate_mass<T: Float>(mdelta: T) -> Result<(), LensingError> {
        if !mdelta.is_finite() || mdelta <= T::zero() {
            return Err(LensingError::InvalidMass(
                mdelta.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the halo concentration c_Δ.
    pub fn validate_concentration<T: Float>(cdelta: T) -> Result<(), LensingError> {
        if !cdelta.is_finite() || cdelta <= T::zero() {
            return Err(LensingError::InvalidConcentration(
                cdelta.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the overdensity definition Δ.
    pub fn validate_delta(delta: u32) -> Result<(), LensingError> {
        if delta == 0 {
            return Err(LensingError::InvalidOverdensity(delta));
        }
        Ok(())
    }

    /// Validate mass, concentration and overdensity together.
    pub fn validate_halo<T: Float>(mdelta: T, cdelta: T, delta: u32) -> Result<(), LensingError> {
        Self::validate_mass(mdelta)?;
        Self::validate_concentration(cdelta)?;
        Self::validate_delta(delta)
    }

    // ========================================================================
    // Geometry Validation
    // ========================================================================

    /// Validate a redshift.
    pub fn validate_redshift<T: Float>(z: T) -> Result<(), LensingError> {
        if !z.is_finite() || z < T::zero() {
            return Err(LensingError::InvalidRedshift(z.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate a scale factor.
    pub fn validate_scale_factor<T: Float>(a: T) -> Result<(), LensingError> {
        if !a.is_finite() || a <= T::zero() {
            return Err(LensingError::InvalidScaleFactor(
                a.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate cosmological parameters.
    ///
    /// # Notes
    ///
    /// * Ω_c, Ω_b and Ω_r must be non-negative, Ω_m and h strictly positive.
    /// * Ω_k may take either sign.
    pub fn validate_cosmology<T: Float>(cosmo: &Cosmology<T>) -> Result<(), LensingError> {
        Self::validate_scalar(cosmo.omega_c, "Omega_c")?;
        Self::validate_scalar(cosmo.omega_b, "Omega_b")?;
        Self::validate_scalar(cosmo.h, "h")?;
        Self::validate_scalar(cosmo.omega_k, "Omega_k")?;
        Self::validate_scalar(cosmo.omega_r, "Omega_r")?;

        let checks = [
            (cosmo.omega_c < T::zero(), "Omega_c must be >= 0"),
            (cosmo.omega_b < T::zero(), "Omega_b must be >= 0"),
            (cosmo.omega_r < T::zero(), "Omega_r must be >= 0"),
            (cosmo.omega_m() <= T::zero(), "Omega_m must be > 0"),
            (cosmo.h <= T::zero(), "h must be > 0"),
        ];
        for (failed, msg) in checks {
            if failed {
                return Err(LensingError::InvalidCosmology(msg.into()));
            }
        }

        Self::validate_expansion_history(cosmo)
    }

    /// Validate that E²(a) stays positive for every past epoch a ∈ (0, 1].
    ///
    /// With y = 1/a, E² = Ω_r y⁴ + Ω_m y³ + Ω_k y² + Ω_Λ equals 1 at y = 1 and
    /// grows without bound. It can only dip below zero when Ω_k < 0, at its
    /// single turning point y* = −4Ω_k / (3Ω_m + √(9Ω_m² − 32 Ω_r Ω_k)).
    pub fn validate_expansion_history<T: Float>(cosmo: &Cosmology<T>) -> Result<(), LensingError> {
        if cosmo.omega_k >= T::zero() {
            return Ok(());
        }

        let omega_m = cosmo.omega_m();
        let three_om = T::from(3.0).unwrap() * omega_m;
        let disc = three_om * three_om - T::from(32.0).unwrap() * cosmo.omega_r * cosmo.omega_k;
        let y = -T::from(4.0).unwrap() * cosmo.omega_k / (three_om + disc.sqrt());
        if y <= T::one() {
            return Ok(());
        }

        let e2 = ((cosmo.omega_r * y + omega_m) * y + cosmo.omega_k) * y * y + cosmo.omega_lambda();
        if e2 <= T::zero() || e2.is_nan() {
            return Err(LensingError::InvalidCosmology(format!(
                "E(a)^2={} at a={}, the expansion history turns around",
                e2.to_f64().unwrap_or(f64::NAN),
                (T::one() / y).to_f64().unwrap_or(f64::NAN)
            )));
        }

        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no builder parameter was set twice.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), LensingError> {
        if let Some(parameter) = duplicate_param {
            return Err(LensingError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
