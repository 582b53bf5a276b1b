//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical building blocks of the
//! demeaning transformation:
//! - Missing-aware class mean aggregation per grouping
//! - Row-wise weighted-sum subtraction with missing propagation
//!
//! These are reusable functions with no orchestration or validation logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Missing-aware class mean aggregation and broadcast.
pub mod aggregation;

/// Row-wise combination of weighted means with the original values.
pub mod combine;
