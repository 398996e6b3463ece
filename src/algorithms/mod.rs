//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the physics models the lensing evaluators are built on:
//! - Background cosmology: expansion rate and distances
//! - Halo density profiles and their projections
//! - Profile-agnostic excess surface density from a tabulated Σ(R)
//! - Source redshift models
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Background cosmology and distances.
pub mod cosmology;

/// Halo density profiles.
pub mod profile;

/// Excess surface density from tabulated profiles.
pub mod tabulated;

/// Source redshift models.
pub mod source;
