//! Background cosmology: parameters, expansion rate and distances.
//!
//! ## Purpose
//!
//! This module describes a ΛCDM background and computes the comoving
//! distances needed for lensing geometry. All distances are in Mpc/h and
//! take scale factors `a = 1 / (1 + z)` as arguments.
//!
//! ## Design notes
//!
//! * **Immutable**: [`Cosmology`] is a plain value type. Deriving the total
//!   matter density returns a fresh copy instead of mutating the caller's
//!   value, so one instance can be shared freely across threads.
//! * **Quadrature**: The line-of-sight integral is evaluated in
//!   `u = ln(1 + z)` with composite Simpson's rule, which keeps the integrand
//!   smooth from z = 0 out to the CMB.
//! * **Curvature**: Transverse distances apply the usual S_k mapping for open
//!   and closed geometries.
//!
//! ## Key concepts
//!
//! * **Ω_m**: Always Ω_c + Ω_b, never supplied independently.
//! * **Ω_Λ**: Closes the budget, 1 − Ω_m − Ω_k − Ω_r.
//! * **χ(a)**: Comoving radial distance D_H ∫ dz / E(z).
//! * **D_M(a)**: Comoving angular (transverse) distance S_k(χ).
//!
//! ## Non-goals
//!
//! * This module does not model dynamical dark energy or massive neutrinos.
//! * This module does not validate scale factors (see the engine validator).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

// External dependencies
use num_traits::Float;
use tracing::trace;

// Internal dependencies
use crate::math::quadrature::{intervals_for_span, simpson};
use crate::primitives::constants::HUBBLE_DISTANCE;
use crate::primitives::errors::LensingError;

// ============================================================================
// Cosmology
// ============================================================================

/// Cosmological parameters of a ΛCDM background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cosmology<T> {
    /// Cold dark matter density parameter.
    pub omega_c: T,

    /// Baryon density parameter.
    pub omega_b: T,

    /// Dimensionless Hubble parameter, H0 / (100 km/s/Mpc).
    pub h: T,

    /// Curvature density parameter (0 for a flat universe).
    pub omega_k: T,

    /// Radiation density parameter.
    pub omega_r: T,

    /// Total matter density, recorded by [`Cosmology::with_derived_omega_m`].
    omega_m: Option<T>,
}

impl<T: Float> Cosmology<T> {
    /// Create a flat cosmology without radiation.
    pub fn new(omega_c: T, omega_b: T, h: T) -> Self {
        Self {
            omega_c,
            omega_b,
            h,
            omega_k: T::zero(),
            omega_r: T::zero(),
            omega_m: None,
        }
    }

    /// Set the curvature density parameter.
    pub fn omega_k(mut self, omega_k: T) -> Self {
        self.omega_k = omega_k;
        self
    }

    /// Set the radiation density parameter.
    pub fn omega_r(mut self, omega_r: T) -> Self {
        self.omega_r = omega_r;
        self
    }

    /// Build a cosmology from named parameters.
    ///
    /// `Omega_c`, `Omega_b` and `h` are required; `Omega_k` and `Omega_r` are
    /// optional. Any `Omega_m` entry is ignored because the matter density is
    /// always derived. Unknown names (e.g. `A_s`, `n_s`) are ignored.
    pub fn from_params<'a, I>(params: I) -> Result<Self, LensingError>
    where
        I: IntoIterator<Item = (&'a str, T)>,
    {
        let mut omega_c = None;
        let mut omega_b = None;
        let mut h = None;
        let mut omega_k = T::zero();
        let mut omega_r = T::zero();

        for (name, value) in params {
            match name {
                "Omega_c" => omega_c = Some(value),
                "Omega_b" => omega_b = Some(value),
                "h" => h = Some(value),
                "Omega_k" => omega_k = value,
                "Omega_r" => omega_r = value,
                _ => {}
            }
        }

        let omega_c =
            omega_c.ok_or_else(|| LensingError::MissingParameter("Omega_c".to_string()))?;
        let omega_b =
            omega_b.ok_or_else(|| LensingError::MissingParameter("Omega_b".to_string()))?;
        let h = h.ok_or_else(|| LensingError::MissingParameter("h".to_string()))?;

        Ok(Self::new(omega_c, omega_b, h)
            .omega_k(omega_k)
            .omega_r(omega_r))
    }

    // ========================================================================
    // Density Parameters
    // ========================================================================

    /// Total matter density parameter, Ω_c + Ω_b.
    #[inline]
    pub fn omega_m(&self) -> T {
        self.omega_c + self.omega_b
    }

    /// The matter density recorded on this value, if it has been derived.
    #[inline]
    pub fn derived_omega_m(&self) -> Option<T> {
        self.omega_m
    }

    /// Return a copy with the derived matter density recorded.
    ///
    /// The value is recomputed from Ω_c and Ω_b on every call, so repeated
    /// derivation never accumulates.
    pub fn with_derived_omega_m(&self) -> Self {
        Self {
            omega_m: Some(self.omega_m()),
            ..*self
        }
    }

    /// Dark energy density parameter closing the budget.
    #[inline]
    pub fn omega_lambda(&self) -> T {
        T::one() - self.omega_m() - self.omega_k - self.omega_r
    }

    // ========================================================================
    // Expansion Rate
    // ========================================================================

    /// Dimensionless Hubble rate E(a) = H(a) / H0.
    pub fn hubble_ratio(&self, a: T) -> T {
        let inv = T::one() / a;
        let inv2 = inv * inv;
        (self.omega_m() * inv2 * inv
            + self.omega_r * inv2 * inv2
            + self.omega_k * inv2
            + self.omega_lambda())
        .sqrt()
    }

    // ========================================================================
    // Distances
    // ========================================================================

    /// Comoving radial distance χ(a) to scale factor `a` [Mpc/h].
    pub fn comoving_radial_distance(&self, a: T) -> T {
        let u_max = (T::one() / a).ln();
        if u_max == T::zero() {
            return T::zero();
        }

        // dχ = D_H dz / E = D_H (1 + z) du / E, with 1 + z = e^u
        let integrand = |u: T| {
            let one_plus_z = u.exp();
            one_plus_z / self.hubble_ratio(T::one() / one_plus_z)
        };

        let chi = T::from(HUBBLE_DISTANCE).unwrap()
            * simpson(integrand, T::zero(), u_max, intervals_for_span(u_max));

        trace!(
            aexp = a.to_f64().unwrap_or(f64::NAN),
            chi = chi.to_f64().unwrap_or(f64::NAN),
            "comoving radial distance"
        );
        chi
    }

    /// Comoving angular distance D_M(a) = S_k(χ(a)) [Mpc/h].
    pub fn comoving_angular_distance(&self, a: T) -> T {
        self.transverse(self.comoving_radial_distance(a))
    }

    /// Comoving angular distance between two epochs, S_k(χ(a2) − χ(a1)) [Mpc/h].
    ///
    /// The result is negative when `a2` is closer to the observer than `a1`.
    pub fn comoving_angular_distance_between(&self, a1: T, a2: T) -> T {
        self.transverse(self.comoving_radial_distance(a2) - self.comoving_radial_distance(a1))
    }

    /// Angular diameter distance D_A(a) = a · D_M(a) [Mpc/h].
    pub fn angular_diameter_distance(&self, a: T) -> T {
        a * self.comoving_angular_distance(a)
    }

    /// Angular diameter distance of epoch `a2` seen from epoch `a1` [Mpc/h].
    pub fn angular_diameter_distance_between(&self, a1: T, a2: T) -> T {
        a2 * self.comoving_angular_distance_between(a1, a2)
    }

    /// Map a comoving line-of-sight distance to a transverse distance.
    fn transverse(&self, chi: T) -> T {
        let d_h = T::from(HUBBLE_DISTANCE).unwrap();
        let k = self.omega_k;
        if k == T::zero() {
            chi
        } else if k > T::zero() {
            let sk = k.sqrt();
            d_h / sk * (sk * chi / d_h).sinh()
        } else {
            let sk = (-k).sqrt();
            d_h / sk * (sk * chi / d_h).sin()
        }
    }
}

/// Convert a redshift into a scale factor.
#[inline]
pub fn scale_factor<T: Float>(z: T) -> T {
    T::one() / (T::one() + z)
}
