//! Error types for lensing profile computation.
//!
//! ## Purpose
//!
//! This module defines [`LensingError`], the single error type returned by
//! every fallible operation in the crate: parameter lookup, input validation,
//! tag parsing and table-based integration.
//!
//! ## Design notes
//!
//! * **Comparable**: `Clone` and `PartialEq` so tests can match exact variants.
//! * **Descriptive**: Each variant carries the offending value.
//! * **no_std**: Only depends on `core::fmt` (plus `alloc::string::String`).
//!
//! ## Non-goals
//!
//! * Numeric degeneracies (division by a zero distance, κ = 1) are not errors;
//!   they surface as infinite values in the results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors that can occur while evaluating lensing profiles.
#[derive(Debug, Clone, PartialEq)]
pub enum LensingError {
    /// The radial sample is empty.
    EmptyInput,

    /// A required cosmological or model parameter was not supplied.
    MissingParameter(String),

    /// A value was NaN or infinite where a finite number is required.
    InvalidNumericValue(String),

    /// A radius was not strictly positive.
    InvalidRadius {
        /// Position in the radial sample.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Halo mass must be positive and finite.
    InvalidMass(f64),

    /// Halo concentration must be positive and finite.
    InvalidConcentration(f64),

    /// Overdensity definition must be positive.
    InvalidOverdensity(u32),

    /// Redshifts must be finite and non-negative.
    InvalidRedshift(f64),

    /// Scale factors must be finite and positive.
    InvalidScaleFactor(f64),

    /// Cosmological parameters are unphysical.
    InvalidCosmology(String),

    /// Halo profile family tag is not supported.
    UnsupportedProfileFamily(String),

    /// Source redshift model tag is not recognised.
    UnknownSourceModel(String),

    /// Source redshift model is known but has no implementation.
    UnimplementedSourceModel(&'static str),

    /// Two arrays that must be paired have different lengths.
    MismatchedInputs {
        /// Length of the radius array.
        r_len: usize,
        /// Length of the value array.
        values_len: usize,
    },

    /// An evaluation radius lies outside a tabulated profile.
    OutOfTableRange {
        /// The requested radius.
        radius: f64,
        /// Smallest tabulated radius.
        min: f64,
        /// Largest tabulated radius.
        max: f64,
    },

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for LensingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Radial sample is empty"),
            Self::MissingParameter(name) => write!(f, "Missing parameter: {}", name),
            Self::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            Self::InvalidRadius { index, value } => {
                write!(f, "Invalid radius at index {}: {} (must be > 0)", index, value)
            }
            Self::InvalidMass(m) => write!(f, "Invalid halo mass: {} (must be > 0 and finite)", m),
            Self::InvalidConcentration(c) => {
                write!(f, "Invalid concentration: {} (must be > 0 and finite)", c)
            }
            Self::InvalidOverdensity(d) => write!(f, "Invalid overdensity: {} (must be > 0)", d),
            Self::InvalidRedshift(z) => {
                write!(f, "Invalid redshift: {} (must be >= 0 and finite)", z)
            }
            Self::InvalidScaleFactor(a) => {
                write!(f, "Invalid scale factor: {} (must be > 0 and finite)", a)
            }
            Self::InvalidCosmology(msg) => write!(f, "Invalid cosmology: {}", msg),
            Self::UnsupportedProfileFamily(name) => {
                write!(f, "Unsupported halo profile parameterization: '{}'", name)
            }
            Self::UnknownSourceModel(name) => {
                write!(f, "Unknown source redshift model: '{}'", name)
            }
            Self::UnimplementedSourceModel(model) => write!(
                f,
                "Source redshift model '{}' is not implemented (requires Beta_s averaging over source redshifts)",
                model
            ),
            Self::MismatchedInputs { r_len, values_len } => write!(
                f,
                "Length mismatch: radii have {} points, values have {}",
                r_len, values_len
            ),
            Self::OutOfTableRange { radius, min, max } => write!(
                f,
                "Radius {} is outside the tabulated range [{}, {}]",
                radius, min, max
            ),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LensingError {}
