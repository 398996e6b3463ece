//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure numerical building blocks used by the physics
//! layers:
//! - Composite Simpson quadrature for smooth one-dimensional integrals
//! - Log-log (power-law) interpolation and exact power-law moments
//!
//! These carry no cosmology- or halo-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Numerical quadrature.
pub mod quadrature;

/// Power-law interpolation on tabulated profiles.
pub mod interpolation;
