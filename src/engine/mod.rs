//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the demeaning computation:
//! - Input shape validation (fail-fast, before any aggregation)
//! - The execution pass: one aggregation per grouping, then the combine step
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input shape validation.
pub mod validator;

/// Execution of the per-grouping aggregation and combine passes.
pub mod executor;
