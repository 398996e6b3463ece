//! # lensprofile-rs — Theoretical Weak-Lensing Profiles for Rust
//!
//! Analytic predictions of the weak-lensing signal of a dark matter halo:
//! 3D density, surface density, excess surface density, critical surface
//! density, tangential shear, convergence and reduced tangential shear.
//!
//! ## What is cluster weak lensing?
//!
//! The mass of a galaxy cluster bends light from galaxies behind it. Averaged
//! over many background sources, the distortion is a tangential shear whose
//! radial profile is set by the halo's projected mass:
//!
//! ```text
//! γ_t(R) = ΔΣ(R) / Σ_crit        ΔΣ(R) = Σ̄(<R) − Σ(R)
//! κ(R)   = Σ(R)  / Σ_crit        g_t(R) = γ_t(R) / (1 − κ(R))
//! ```
//!
//! `Σ_crit` depends only on the geometry (lens and source distances), while
//! `Σ` and `ΔΣ` depend only on the halo. This crate computes all of them for
//! a halo described by its mass `M_Δ`, concentration `c_Δ` and overdensity
//! definition `Δ`, in a ΛCDM background.
//!
//! **Key properties:**
//! - Closed-form NFW projections, no numerical integration over the profile
//! - Comoving distances by Simpson quadrature, with optional curvature and radiation
//! - Profile-agnostic ΔΣ from any tabulated Σ(R)
//! - Generic over `f32` and `f64`, `no_std` compatible
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use lensprofile_rs::prelude::*;
//!
//! let cosmo = Cosmology::new(0.27, 0.045, 0.7);
//! let r = vec![0.1, 0.5, 1.0, 2.0, 5.0];
//!
//! // Build the model
//! let model = Lensing::new()
//!     .mass(1.0e15)          // M_200m [M☉/h]
//!     .concentration(4.0)    // c_200m
//!     .cosmology(cosmo)
//!     .build()?;
//!
//! // Predict every observable for a lens at z = 0.3 and sources at z = 1
//! let profile = model.predict(&r, 0.3, 1.0)?;
//!
//! println!("{}", profile);
//! # Result::<(), LensingError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Radial points: 5
//!   Profile: nfw
//!   Source model: single_plane
//!   z_cluster: 0.3
//!   z_source: 1
//!   Sigma_crit: 3.1351e3
//!
//! Lensing Profile:
//!            R        Sigma   DeltaSigma      gamma_t        kappa          g_t
//!   ---------------------------------------------------------------------------
//!       0.1000     855.0115     258.2810     0.082383     0.272719     0.113275
//!       0.5000     225.8519     169.9298     0.054202     0.072039     0.058410
//!       1.0000      93.7891     108.7795     0.034697     0.029916     0.035767
//!       2.0000      32.5583      57.0757     0.018205     0.010385     0.018396
//!       5.0000       6.5854      18.6753     0.005957     0.002101     0.005969
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use lensprofile_rs::prelude::*;
//!
//! let cosmo = Cosmology::new(0.25, 0.05, 0.7)
//!     .omega_k(0.0)                   // Spatial curvature
//!     .omega_r(0.0);                  // Radiation
//!
//! let model = Lensing::new()
//!     .mass(5.0e14)                   // Halo mass M_Δ [M☉/h]
//!     .concentration(5.0)             // Concentration c_Δ
//!     .delta(200)                     // Overdensity w.r.t. mean matter density
//!     .profile(Nfw)                   // Halo profile family
//!     .source_model(SinglePlane)      // All sources on one plane
//!     .cosmology(cosmo)
//!     .build()?;
//!
//! let r = [0.25, 0.5, 1.0, 2.0];
//! let delta_sigma = model.excess_surface_density(&r)?;
//! let gamma_t = model.tangential_shear(&r, 0.2, 0.8)?;
//! let g_t = model.reduced_tangential_shear(&r, 0.2, 0.8)?;
//!
//! assert!(delta_sigma.iter().all(|&ds| ds > 0.0));
//! assert!(gamma_t.iter().zip(&g_t).all(|(g, gr)| gr > g));
//! # Result::<(), LensingError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every operation returns a `Result<_, LensingError>`.
//!
//! - **`Ok(..)`**: The requested profile, in the same order as the input radii.
//! - **`Err(LensingError)`**: Invalid input (non-positive radius, negative
//!   redshift, unphysical cosmology, ...) or an unsupported configuration.
//!
//! ```rust
//! use lensprofile_rs::prelude::*;
//!
//! let cosmo = Cosmology::new(0.27, 0.045, 0.7);
//! let model = Lensing::new()
//!     .mass(1.0e15)
//!     .concentration(4.0)
//!     .source_model(KnownZSrc)
//!     .cosmology(cosmo)
//!     .build()?;
//!
//! match model.tangential_shear(&[1.0], 0.3, 1.0) {
//!     Ok(gamma_t) => println!("gamma_t: {:?}", gamma_t),
//!     Err(e) => eprintln!("Prediction failed: {}", e),
//! }
//! # Result::<(), LensingError>::Ok(())
//! ```
//!
//! ## Function Interface
//!
//! The builder is a thin layer over free functions with an explicit argument
//! list, which can be called directly:
//!
//! ```rust
//! use lensprofile_rs::prelude::*;
//!
//! let cosmo = Cosmology::new(0.27, 0.045, 0.7);
//! let r = [0.5_f64, 1.0, 2.0];
//!
//! let sigma = calculate_surface_density(&r, 1.0e15, 4.0, &cosmo, DEFAULT_DELTA, Nfw)?;
//! let sigma_crit = get_critical_surface_density(&cosmo, 0.3, 1.0)?;
//! let kappa = compute_convergence_profile(
//!     &r, 1.0e15, 4.0, 0.3, 1.0, &cosmo, DEFAULT_DELTA, Nfw, SinglePlane,
//! )?;
//!
//! for (s, k) in sigma.iter().zip(&kappa) {
//!     assert!((s / sigma_crit - k).abs() < 1e-12);
//! }
//! # Result::<(), LensingError>::Ok(())
//! ```
//!
//! ### Tabulated Profiles
//!
//! Any surface density known only at discrete radii (a measured profile, or
//! a halo model without closed-form projections) can be turned into ΔΣ.
//! Σ is interpolated log-log between nodes; evaluation radii must lie inside
//! the table.
//!
//! ```rust
//! use lensprofile_rs::prelude::*;
//!
//! // Singular isothermal sphere, Σ ∝ 1/R, for which ΔΣ = Σ
//! let r_table: Vec<f64> = (0..50).map(|i| 0.01 * 1.2_f64.powi(i)).collect();
//! let sigma_table: Vec<f64> = r_table.iter().map(|r| 100.0 / r).collect();
//!
//! let delta_sigma = excess_surface_density_from_table(&[0.5, 2.0], &r_table, &sigma_table)?;
//! assert!((delta_sigma[0] - 200.0).abs() < 1e-6);
//! assert!((delta_sigma[1] - 50.0).abs() < 1e-6);
//! # Result::<(), LensingError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! lensprofile-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ```rust
//! # #[cfg(feature = "std")] {
//! use lensprofile_rs::prelude::*;
//!
//! fn convergence_f32() -> Result<(), LensingError> {
//!     let cosmo = Cosmology::new(0.27_f32, 0.045, 0.7);
//!     let model = Lensing::new()
//!         .mass(1.0e14_f32)
//!         .concentration(5.0)
//!         .cosmology(cosmo)
//!         .build()?;
//!
//!     let kappa = model.convergence(&[0.2, 0.4, 0.8], 0.25, 1.5)?;
//!     assert!(kappa.windows(2).all(|w| w[1] < w[0]));
//!     Ok(())
//! }
//! # convergence_f32().unwrap();
//! # }
//! ```
//!
//! ## Parameters
//!
//! | Parameter         | Default        | Range/Options                              | Description                                 |
//! |-------------------|----------------|--------------------------------------------|---------------------------------------------|
//! | **mass**          | (required)     | (0, ∞)                                     | Halo mass M_Δ [M☉/h]                        |
//! | **concentration** | (required)     | (0, ∞)                                     | Concentration c_Δ = R_Δ / r_s               |
//! | **cosmology**     | (required)     | Ω_c, Ω_b ≥ 0, h > 0                        | Background cosmology                        |
//! | **delta**         | 200            | [1, ∞)                                     | Overdensity w.r.t. the mean matter density  |
//! | **profile**       | `Nfw`          | `Nfw`                                      | Halo profile family                         |
//! | **source_model**  | `SinglePlane`  | `SinglePlane`, `KnownZSrc`, `ZSrcDistribution` | Source redshift model                   |
//!
//! Only `SinglePlane` is implemented; the other two source models are
//! accepted by the builder and rejected by the shear and convergence
//! evaluators with [`LensingError::UnimplementedSourceModel`](prelude::LensingError).
//!
//! ## Units
//!
//! | Quantity              | Unit          |
//! |-----------------------|---------------|
//! | Radii, distances      | Mpc/h (comoving) |
//! | Mass                  | M☉/h          |
//! | ρ                     | h² M☉/Mpc³    |
//! | Σ, ΔΣ, Σ_crit         | h M☉/pc²      |
//! | γ_t, κ, g_t           | dimensionless |
//!
//! The mass definition is relative to the mean matter density
//! ρ_m = Ω_m ρ_crit,0, with Ω_m = Ω_c + Ω_b.
//!
//! ## Logging
//!
//! Evaluators emit [`tracing`](https://docs.rs/tracing) events: `debug` on
//! entry, `trace` for distance integrals and `warn` for degenerate geometry
//! (lens at the observer or on the source plane, or κ = 1). Install any
//! `tracing` subscriber to see them.
//!
//! ## References
//!
//! - Navarro, J. F., Frenk, C. S. & White, S. D. M. (1997). "A Universal Density Profile from Hierarchical Clustering"
//! - Wright, C. O. & Brainerd, T. G. (2000). "Gravitational Lensing by NFW Halos"
//! - Hogg, D. W. (1999). "Distance measures in cosmology"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error type and physical constants.
//
// Contains the crate-wide `LensingError` and the SI constants the
// critical surface density is built from.
mod primitives;

// Layer 2: Math - pure numerical functions.
//
// Contains Simpson quadrature and power-law interpolation.
mod math;

// Layer 3: Algorithms - physics models.
//
// Contains the background cosmology, halo profiles, the tabulated
// excess surface density and the source redshift models.
mod algorithms;

// Layer 4: Engine - orchestration.
//
// Contains input validation, the stateless lensing evaluators and
// result assembly.
mod engine;

// High-level fluent API for lensing predictions.
//
// Provides the `Lensing` builder and the `LensingModel` it produces.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard lensing prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types and functions:
///
/// ```
/// use lensprofile_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        calculate_excess_surface_density, calculate_surface_density,
        compute_convergence_profile, compute_reduced_tangential_shear_profile,
        compute_tangential_shear_profile, excess_surface_density_from_table,
        get_3d_density_profile, get_critical_surface_density, get_om,
        mean_surface_density_from_table, Cosmology,
        HaloProfileFamily::{self, Nfw},
        LensingBuilder as Lensing, LensingError, LensingModel, LensingProfile,
        SourceRedshiftModel::{self, KnownZSrc, SinglePlane, ZSrcDistribution},
        DEFAULT_DELTA,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and constants.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal physics models.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
