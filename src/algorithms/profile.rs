//! Halo density profiles and their projections.
//!
//! ## Purpose
//!
//! This module provides the halo-profile backend: 3D density, projected
//! surface density Σ(R), mean interior surface density Σ̄(<R) and excess
//! surface density ΔΣ(R) = Σ̄(<R) − Σ(R) for a halo of given mass,
//! concentration and overdensity.
//!
//! ## Design notes
//!
//! * **Seam**: [`HaloProfile`] is the contract every profile family meets;
//!   [`HaloProfileFamily`] is the closed set of families the crate knows.
//! * **Closed forms**: The NFW profile uses the analytic projections of
//!   Wright & Brainerd (2000). Near x = 1, where the closed forms cancel, a
//!   first-order expansion is used instead. For x < 1 the forms are
//!   regrouped so that Σ̄(<R) keeps full precision as R → 0, where
//!   ΔΣ → r_s δ_c ρ_m.
//! * **Units**: Radii in comoving Mpc/h, masses in M☉/h, ρ in h² M☉/Mpc³,
//!   Σ and ΔΣ in h M☉/pc².
//! * **Mass definition**: Δ is relative to the mean matter density
//!   ρ_m = Ω_m ρ_crit,0.
//!
//! ## Key concepts
//!
//! * **R_Δ**: Radius enclosing mean density Δ ρ_m, (3M / (4π Δ ρ_m))^(1/3).
//! * **r_s**: Scale radius R_Δ / c.
//! * **δ_c**: Characteristic overdensity (Δ/3) c³ / (ln(1+c) − c/(1+c)).
//!
//! ## Invariants
//!
//! * Output arrays have the length and order of the input radii.
//! * Σ̄(<R) ≥ Σ(R) for monotonically decreasing profiles, so ΔΣ ≥ 0.
//!
//! ## Non-goals
//!
//! * This module does not validate its inputs (see the engine validator).
//! * This module does not model miscentering or the two-halo term.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::ToString, vec::Vec};
#[cfg(feature = "std")]
use std::{boxed::Box, vec::Vec};

// External dependencies
use core::f64::consts::PI;
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::primitives::constants::{MPC2_TO_PC2, RHO_CRIT_0};
use crate::primitives::errors::LensingError;

/// Default mass overdensity definition.
pub const DEFAULT_DELTA: u32 = 200;

// ============================================================================
// Profile Contract
// ============================================================================

/// Radial mass profile of a dark matter halo.
pub trait HaloProfile<T: Float> {
    /// 3D density at each radius [h² M☉/Mpc³].
    fn density(&self, r3d: &[T]) -> Vec<T>;

    /// Projected surface density at each radius [h M☉/pc²].
    fn surface_density(&self, r_proj: &[T]) -> Vec<T>;

    /// Mean surface density inside each projected radius [h M☉/pc²].
    fn mean_surface_density(&self, r_proj: &[T]) -> Vec<T>;

    /// Excess surface density given the local surface density at the same radii.
    ///
    /// Returns `Σ̄(<R_i) − sigma[i]`.
    fn excess_surface_density(&self, r_proj: &[T], sigma: &[T]) -> Result<Vec<T>, LensingError> {
        if r_proj.len() != sigma.len() {
            return Err(LensingError::MismatchedInputs {
                r_len: r_proj.len(),
                values_len: sigma.len(),
            });
        }

        Ok(self
            .mean_surface_density(r_proj)
            .into_iter()
            .zip(sigma.iter())
            .map(|(mean, &local)| mean - local)
            .collect())
    }
}

// ============================================================================
// Profile Family
// ============================================================================

/// Halo profile parameterization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HaloProfileFamily {
    /// Navarro-Frenk-White profile.
    #[default]
    Nfw,
}

impl HaloProfileFamily {
    /// Tag used when parsing and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nfw => "nfw",
        }
    }

    /// Build the profile for a halo in a universe with matter density `omega_m`.
    pub fn profile<T: Float + 'static>(
        &self,
        mdelta: T,
        cdelta: T,
        omega_m: T,
        delta: u32,
    ) -> Box<dyn HaloProfile<T>> {
        match self {
            Self::Nfw => Box::new(NfwProfile::new(mdelta, cdelta, omega_m, delta)),
        }
    }
}

impl FromStr for HaloProfileFamily {
    type Err = LensingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("nfw") {
            Ok(Self::Nfw)
        } else {
            Err(LensingError::UnsupportedProfileFamily(s.to_string()))
        }
    }
}

// ============================================================================
// NFW Profile
// ============================================================================

/// Navarro-Frenk-White halo.
///
/// ```text
/// ρ(r) = ρ_m δ_c / [(r/r_s) (1 + r/r_s)²]
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NfwProfile<T> {
    mdelta: T,
    cdelta: T,
    delta: u32,
    rho_m: T,
    r_delta: T,
    r_s: T,
    delta_c: T,
}

impl<T: Float> NfwProfile<T> {
    /// Create an NFW profile from mass, concentration, Ω_m and overdensity.
    pub fn new(mdelta: T, cdelta: T, omega_m: T, delta: u32) -> Self {
        let three = T::from(3.0).unwrap();
        let delta_t = T::from(delta).unwrap();

        let rho_m = omega_m * T::from(RHO_CRIT_0).unwrap();
        let r_delta = (three * mdelta / (T::from(4.0 * PI).unwrap() * delta_t * rho_m))
            .powf(T::one() / three);
        let r_s = r_delta / cdelta;
        let delta_c = delta_t / three * cdelta.powi(3) / mass_shape(cdelta);

        Self {
            mdelta,
            cdelta,
            delta,
            rho_m,
            r_delta,
            r_s,
            delta_c,
        }
    }

    /// Halo mass M_Δ [M☉/h].
    pub fn mass(&self) -> T {
        self.mdelta
    }

    /// Concentration c_Δ.
    pub fn concentration(&self) -> T {
        self.cdelta
    }

    /// Overdensity definition Δ.
    pub fn delta(&self) -> u32 {
        self.delta
    }

    /// Mean matter density ρ_m [h² M☉/Mpc³].
    pub fn mean_matter_density(&self) -> T {
        self.rho_m
    }

    /// Halo boundary radius R_Δ [Mpc/h].
    pub fn radius_delta(&self) -> T {
        self.r_delta
    }

    /// Scale radius r_s [Mpc/h].
    pub fn scale_radius(&self) -> T {
        self.r_s
    }

    /// Characteristic overdensity δ_c.
    pub fn characteristic_overdensity(&self) -> T {
        self.delta_c
    }

    /// 3D density at one radius [h² M☉/Mpc³].
    pub fn density_at(&self, r: T) -> T {
        let x = r / self.r_s;
        let one_plus_x = T::one() + x;
        self.rho_m * self.delta_c / (x * one_plus_x * one_plus_x)
    }

    /// Surface density at one projected radius [h M☉/pc²].
    pub fn surface_density_at(&self, r: T) -> T {
        let two = T::from(2.0).unwrap();
        two * self.r_s * self.delta_c * self.rho_m * sigma_shape(r / self.r_s) * mpc2_to_pc2()
    }

    /// Mean surface density inside one projected radius [h M☉/pc²].
    pub fn mean_surface_density_at(&self, r: T) -> T {
        let x = r / self.r_s;
        let four = T::from(4.0).unwrap();
        four * self.r_s * self.delta_c * self.rho_m * mean_sigma_shape(x) / (x * x) * mpc2_to_pc2()
    }

    /// Mass enclosed in a sphere of radius `r` [M☉/h].
    ///
    /// Equals M_Δ at r = R_Δ.
    pub fn enclosed_mass(&self, r: T) -> T {
        let four_pi = T::from(4.0 * PI).unwrap();
        four_pi * self.rho_m * self.delta_c * self.r_s.powi(3) * mass_shape(r / self.r_s)
    }
}

impl<T: Float> HaloProfile<T> for NfwProfile<T> {
    fn density(&self, r3d: &[T]) -> Vec<T> {
        r3d.iter().map(|&r| self.density_at(r)).collect()
    }

    fn surface_density(&self, r_proj: &[T]) -> Vec<T> {
        r_proj.iter().map(|&r| self.surface_density_at(r)).collect()
    }

    fn mean_surface_density(&self, r_proj: &[T]) -> Vec<T> {
        r_proj
            .iter()
            .map(|&r| self.mean_surface_density_at(r))
            .collect()
    }
}

// ============================================================================
// Dimensionless Shape Functions
// ============================================================================

#[inline]
fn mpc2_to_pc2<T: Float>() -> T {
    T::from(MPC2_TO_PC2).unwrap()
}

/// Window around x = 1 inside which the closed forms are replaced by their
/// first-order expansion.
#[inline]
fn unit_window<T: Float>() -> T {
    T::epsilon().sqrt()
}

/// m(x) = ln(1 + x) − x / (1 + x).
#[inline]
fn mass_shape<T: Float>(x: T) -> T {
    x.ln_1p() - x / (T::one() + x)
}

/// Projection kernel shared by Σ and Σ̄:
/// artanh(√((1−x)/(1+x))) / √(1−x²) for x < 1, the arctan form for x > 1.
///
/// For x < 1 the artanh is taken as ½ ln((1 + √(1−x²)) / x), which keeps
/// full precision as x → 0.
#[inline]
fn projection_kernel<T: Float>(x: T) -> T {
    let one = T::one();
    if x < one {
        let s = (one - x * x).sqrt();
        ((one + s) / x).ln() / (T::from(2.0).unwrap() * s)
    } else {
        let s = (x * x - one).sqrt();
        ((x - one) / (one + x)).sqrt().atan() / s
    }
}

/// F(x) with Σ(R) = 2 r_s δ_c ρ_m F(R / r_s).
fn sigma_shape<T: Float>(x: T) -> T {
    let one = T::one();
    let dx = x - one;
    if dx.abs() < unit_window() {
        // F(1) = 1/3, F'(1) = -2/5
        return T::from(1.0 / 3.0).unwrap() - T::from(0.4).unwrap() * dx;
    }
    let two = T::from(2.0).unwrap();
    (one - two * projection_kernel(x)) / (x * x - one)
}

/// G(x) with Σ̄(<R) = 4 r_s δ_c ρ_m G(x) / x².
fn mean_sigma_shape<T: Float>(x: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let dx = x - one;
    if dx.abs() < unit_window() {
        // G(1) = 1 + ln(1/2), G'(1) = 1/3
        return one + T::from(0.5).unwrap().ln() + dx / T::from(3.0).unwrap();
    }
    if x < one {
        // ln(x/2) + ln((1+s)/x)/s = [u ln(2/x) + ln(1 − u/2)] / s,
        // s = √(1−x²), u = 1 − s = x²/(1+s)
        let s = (one - x * x).sqrt();
        let u = x * x / (one + s);
        return (u * (two / x).ln() + (-u / two).ln_1p()) / s;
    }
    (x / two).ln() + two * projection_kernel(x)
}
