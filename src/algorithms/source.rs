//! Source redshift models.
//!
//! ## Purpose
//!
//! Shear and convergence depend on where the background sources sit. This
//! module names the supported ways of describing the source population.
//!
//! ## Key concepts
//!
//! * **Single plane**: Every source at one redshift; Σ_crit is a scalar.
//! * **Known redshifts**: Per-galaxy redshifts, averaged through β_s.
//! * **Redshift distribution**: A continuous n(z) integrated per radial bin.
//!
//! ## Non-goals
//!
//! * Only the single-plane model is implemented; the other two are
//!   recognised and rejected with [`LensingError::UnimplementedSourceModel`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

// External dependencies
use core::str::FromStr;

// Internal dependencies
use crate::primitives::errors::LensingError;

/// How background source redshifts are modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceRedshiftModel {
    /// All sources at a single redshift.
    #[default]
    SinglePlane,

    /// Known individual source redshifts (discrete case).
    KnownZSrc,

    /// Known source redshift distribution (continuous case).
    ZSrcDistribution,
}

impl SourceRedshiftModel {
    /// Tag used when parsing and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SinglePlane => "single_plane",
            Self::KnownZSrc => "known_z_src",
            Self::ZSrcDistribution => "z_src_distribution",
        }
    }

    /// Fail unless the model has an implementation.
    pub fn ensure_implemented(&self) -> Result<(), LensingError> {
        match self {
            Self::SinglePlane => Ok(()),
            Self::KnownZSrc | Self::ZSrcDistribution => {
                Err(LensingError::UnimplementedSourceModel(self.name()))
            }
        }
    }
}

impl FromStr for SourceRedshiftModel {
    type Err = LensingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single_plane" => Ok(Self::SinglePlane),
            "known_z_src" => Ok(Self::KnownZSrc),
            "z_src_distribution" => Ok(Self::ZSrcDistribution),
            other => Err(LensingError::UnknownSourceModel(other.to_string())),
        }
    }
}
