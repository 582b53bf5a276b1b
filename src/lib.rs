//! # demean-rs — Group-wise demeaning for Rust
//!
//! A fast, missing-aware implementation of the group-adjusted transformation:
//! for each entry of a numeric vector, subtract a weighted combination of the
//! per-grouping class means that entry belongs to.
//!
//! ## What is group-wise demeaning?
//!
//! Given a value sequence of length `N`, `G` parallel categorical groupings
//! (each of length `N`), and one weight per grouping, every row `r` receives
//!
//! ```text
//! output[r] = value[r] - Σ_i weight[i] * mean_i(class of row r in grouping i)
//! ```
//!
//! where `mean_i` is the arithmetic mean of the *valid* values in that class.
//! This removes hierarchical group effects from data — e.g. demeaning a
//! security metric against country, state, and town averages at once.
//!
//! **Key properties:**
//! - Missing values are excluded from every mean and propagate to the output
//! - One `O(N)` accumulation pass plus one `O(N)` broadcast pass per grouping
//!   (`O(N·G)` total), efficient at millions of rows
//! - Arbitrary number of groupings, supplied at call time
//! - Purely positional: output row `r` depends only on row `r`'s value and
//!   its class memberships, never on row order
//!
//! ## Quick Start
//!
//! ```rust
//! use demean_rs::prelude::*;
//!
//! let values = vec![Some(1.0), Some(2.0), Some(3.0), Some(8.0), Some(5.0)];
//! let country = vec!["USA"; 5];
//! let state = vec!["MA", "MA", "MA", "RI", "RI"];
//! let town = vec!["WEYMOUTH", "BOSTON", "BOSTON", "PROVIDENCE", "PROVIDENCE"];
//!
//! // Build the model
//! let model = Demean::new()
//!     .weights(vec![0.15, 0.35, 0.5])
//!     .build()?;
//!
//! // Adjust the values against all three groupings
//! let adjusted = model.adjust(&values, &[country, state, town])?;
//!
//! assert_eq!(adjusted.len(), 5);
//! # Result::<(), ShapeError>::Ok(())
//! ```
//!
//! ## Missing Values
//!
//! The value domain is `Option<T>`: `None` marks a missing entry. A missing
//! entry never contributes to any class mean (excluded from both sum and
//! count), but its row still *receives* the class mean computed from the
//! remaining members. A class whose members are all missing has a missing
//! mean, and any row touching a missing mean produces a missing output.
//!
//! ```rust
//! use demean_rs::prelude::*;
//!
//! let values = vec![Some(1.0), None, Some(3.0)];
//! let grouping = vec!["A", "A", "B"];
//!
//! let out = group_adjust(&values, &[grouping], &[1.0])?;
//!
//! // Class "A" mean is 1.0 (the None row is excluded); row 1 stays missing.
//! assert_eq!(out, vec![Some(0.0), None, Some(0.0)]);
//! # Result::<(), ShapeError>::Ok(())
//! ```
//!
//! For data that encodes missing entries as `NaN`, use
//! [`adjust_nan`](prelude::DemeanModel::adjust_nan), which maps `NaN` to missing on input and
//! back to `NaN` on output:
//!
//! ```rust
//! use demean_rs::prelude::*;
//!
//! let values = vec![1.0, f64::NAN, 3.0, 5.0, 8.0, 7.0];
//! let country = vec!["USA"; 6];
//! let state = vec!["MA", "RI", "RI", "CT", "CT", "CT"];
//!
//! let model = Demean::new().weights(vec![0.65, 0.35]).build()?;
//! let out = model.adjust_nan(&values, &[country, state])?;
//!
//! assert!(out[1].is_nan());
//! # Result::<(), ShapeError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every entry point returns `Result<_, ShapeError>`. A [`ShapeError`] is
//! raised before any aggregation work when:
//!
//! - the grouping list is empty,
//! - any grouping's length differs from the value length, or
//! - the weight count differs from the grouping count.
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use demean_rs::prelude::*;
//! # let values = vec![Some(1.0), Some(2.0)];
//! # let grouping = vec!["A", "B"];
//!
//! let out = group_adjust(&values, &[grouping], &[1.0])?;
//! # Result::<(), ShapeError>::Ok(())
//! ```
//!
//! Invalid inputs always fail the same way, and valid inputs always produce
//! the same output — the computation is deterministic and pure.
//!
//! ## Weights
//!
//! Weights are applied positionally (`weights[i]` scales grouping `i`'s
//! contribution) and are used exactly as given: they are not required to sum
//! to 1 and are never normalized.
//!
//! ## Parallel Execution
//!
//! Per-grouping aggregation passes are mutually independent, so they can run
//! in parallel. Enable the `parallel` cargo feature and set the builder
//! hint:
//!
//! ```toml
//! [dependencies]
//! demean-rs = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! ```rust
//! use demean_rs::prelude::*;
//! # let values = vec![Some(1.0), Some(2.0)];
//! # let grouping = vec!["A", "B"];
//!
//! let model = Demean::new()
//!     .weights(vec![1.0])
//!     .parallel(true)   // no-op without the `parallel` feature
//!     .build()?;
//!
//! let out = model.adjust(&values, &[grouping])?;
//! # Result::<(), ShapeError>::Ok(())
//! ```
//!
//! Output is byte-identical under sequential and parallel execution; the
//! per-grouping results are joined deterministically before the combine
//! step, and ordering is purely positional.

#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - basic data types.
//
// Contains the error taxonomy (`ShapeError`).
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains missing-aware class mean aggregation and the row-wise
// weighted-sum subtraction.
mod math;

// Layer 3: Engine - orchestration and validation.
//
// Contains input shape validation and the execution pass that runs one
// aggregation per grouping followed by the combine step.
mod engine;

// High-level fluent API for group-wise demeaning.
//
// Provides the `Demean` builder and the `group_adjust` free function.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard demeaning prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use demean_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{group_adjust, DemeanBuilder as Demean, DemeanModel, ShapeError};
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
