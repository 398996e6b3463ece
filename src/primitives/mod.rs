//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the foundations shared by every other layer:
//! - The crate-wide error type
//! - Physical constants and unit conversions
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error type for all fallible operations.
pub mod errors;

/// Physical constants (SI) and unit conversions.
pub mod constants;
