//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the physics layers into lensing observables:
//! - Input validation
//! - The stateless evaluator functions (Σ, ΔΣ, Σ_crit, γ_t, κ, g_t)
//! - Result assembly and formatting
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation.
pub mod validator;

/// Stateless lensing evaluators.
pub mod evaluator;

/// Lensing profile result container.
pub mod output;
