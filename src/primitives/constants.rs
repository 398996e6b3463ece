//! Physical constants and unit conversions.
//!
//! Constants are stored in SI and converted explicitly where the lensing
//! formulas need astronomical units. Lengths handed to the public API are in
//! comoving Mpc/h, masses in M☉/h and surface densities in h M☉/pc².

use core::f64::consts::PI;

/// Speed of light in vacuum [m/s].
pub const CLIGHT: f64 = 299_792_458.0;

/// Newton's gravitational constant [m³ kg⁻¹ s⁻²].
pub const GNEWT: f64 = 6.674_08e-11;

/// One megaparsec [m].
pub const MPC_TO_METER: f64 = 3.085_677_581_49e22;

/// Solar mass [kg].
pub const SOLAR_MASS: f64 = 1.988_47e30;

/// Megaparsecs squared per parsec squared.
pub const MPC2_TO_PC2: f64 = 1.0e-12;

/// Hubble distance c/H0 [Mpc/h].
pub const HUBBLE_DISTANCE: f64 = CLIGHT / 1.0e5;

/// Critical density of the universe today [h² M☉/Mpc³].
pub const RHO_CRIT_0: f64 = 2.775_337_426_39e11;

/// Physical constants table, mirroring what a cosmology backend exposes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Speed of light [m/s].
    pub clight: f64,
    /// Gravitational constant [m³ kg⁻¹ s⁻²].
    pub gnewt: f64,
    /// Megaparsec [m].
    pub mpc_to_meter: f64,
    /// Solar mass [kg].
    pub solar_mass: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::SI
    }
}

impl PhysicalConstants {
    /// CODATA 2014 / IAU values in SI.
    pub const SI: Self = Self {
        clight: CLIGHT,
        gnewt: GNEWT,
        mpc_to_meter: MPC_TO_METER,
        solar_mass: SOLAR_MASS,
    };

    /// c²/(4πG) in M☉/Mpc for this table.
    ///
    /// Multiplying by a distance ratio in h/Mpc and by [`MPC2_TO_PC2`] yields
    /// a critical surface density in h M☉/pc².
    pub fn sigma_crit_prefactor(&self) -> f64 {
        self.clight * self.clight / (4.0 * PI * self.gnewt) * self.mpc_to_meter / self.solar_mass
    }
}
