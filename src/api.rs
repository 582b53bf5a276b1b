//! High-level API for group-wise demeaning.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! builder for configuring weights and execution hints, and a free function
//! for one-shot calls.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with a reusable model; groupings are
//!   supplied at call time, so one model serves any dataset with the same
//!   weight profile.
//! * **Validated**: Shape preconditions are checked at the start of every
//!   call, before any aggregation.
//! * **Type-Safe**: Generic over `Float` value types and any hashable key
//!   type; groupings are accepted as anything slice-like (`AsRef<[K]>`).
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`DemeanBuilder`] via `Demean::new()`.
//! 2. Chain configuration methods (`.weights()`, `.parallel()`).
//! 3. Call `.build()` to obtain a [`DemeanModel`].
//! 4. Call `.adjust(&values, &groups)` to demean.
//!
//! ## Non-goals
//!
//! * This module does not normalize weights; they are used as given.

use std::hash::Hash;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{DemeanConfig, DemeanExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::primitives::errors::ShapeError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a demeaning model.
#[derive(Debug, Clone)]
pub struct DemeanBuilder<T: Float> {
    /// One weight per grouping, applied positionally.
    pub weights: Option<Vec<T>>,

    /// Parallel execution hint (effective with the `parallel` feature).
    pub parallel: Option<bool>,
}

impl<T: Float> Default for DemeanBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> DemeanBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            weights: None,
            parallel: None,
        }
    }

    /// Set the grouping weights.
    ///
    /// `weights[i]` scales grouping `i`'s class mean contribution. Weights
    /// are not required to sum to 1 and are never normalized. The weight
    /// count must equal the grouping count at call time.
    pub fn weights(mut self, weights: Vec<T>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Set the parallel execution hint.
    ///
    /// With the `parallel` cargo feature enabled, per-grouping aggregation
    /// runs on rayon; without the feature this hint is ignored. Output is
    /// identical either way.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Build the demeaning model.
    ///
    /// Weight-count-vs-grouping-count validation happens per call, since
    /// groupings are supplied to [`DemeanModel::adjust`]. A builder with no
    /// weights yields a model that only accepts zero weights, which every
    /// call rejects as a shape mismatch.
    pub fn build(self) -> Result<DemeanModel<T>, ShapeError> {
        Ok(DemeanModel {
            config: DemeanConfig {
                weights: self.weights.unwrap_or_default(),
                parallel: self.parallel.unwrap_or(false),
            },
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A configured demeaning model.
///
/// Holds the weight profile and execution hints; groupings and values are
/// supplied per call, and no state survives a call.
#[derive(Debug, Clone)]
pub struct DemeanModel<T: Float> {
    config: DemeanConfig<T>,
}

impl<T: Float + Send + Sync> DemeanModel<T> {
    /// Demean `values` against the supplied groupings.
    ///
    /// Each grouping is a sequence of categorical keys parallel to
    /// `values`; `None` entries in `values` mark missing data. Returns the
    /// positionally aligned demeaned sequence, or a [`ShapeError`] if any
    /// length precondition fails (checked before any aggregation).
    ///
    /// # Example
    ///
    /// ```rust
    /// use demean_rs::prelude::*;
    ///
    /// let values = vec![Some(1.0), Some(2.0), Some(3.0), Some(8.0), Some(5.0)];
    /// let country = vec!["USA"; 5];
    /// let state = vec!["MA", "RI", "CT", "CT", "CT"];
    ///
    /// let model = Demean::new().weights(vec![0.65, 0.35]).build()?;
    /// let out = model.adjust(&values, &[country, state])?;
    ///
    /// assert_eq!(out.len(), 5);
    /// # Result::<(), ShapeError>::Ok(())
    /// ```
    pub fn adjust<K, G>(&self, values: &[Option<T>], groups: &[G]) -> Result<Vec<Option<T>>, ShapeError>
    where
        K: Hash + Eq + Sync,
        G: AsRef<[K]> + Sync,
    {
        Validator::validate_shapes(values.len(), groups, self.config.weights.len())?;
        Ok(DemeanExecutor::run(values, groups, &self.config))
    }

    /// Demean NaN-encoded `values` against the supplied groupings.
    ///
    /// Convenience wrapper for data that marks missing entries with `NaN`:
    /// `NaN` maps to missing on input and missing maps back to `NaN` in the
    /// output. Semantics are otherwise identical to [`DemeanModel::adjust`].
    pub fn adjust_nan<K, G>(&self, values: &[T], groups: &[G]) -> Result<Vec<T>, ShapeError>
    where
        K: Hash + Eq + Sync,
        G: AsRef<[K]> + Sync,
    {
        let optional: Vec<Option<T>> = values
            .iter()
            .map(|&v| if v.is_nan() { None } else { Some(v) })
            .collect();

        let adjusted = self.adjust(&optional, groups)?;

        Ok(adjusted
            .into_iter()
            .map(|v| v.unwrap_or_else(T::nan))
            .collect())
    }
}

// ============================================================================
// Free Function
// ============================================================================

/// Demean `values` against `groups` with one weight per grouping.
///
/// One-shot form of the builder API, running sequentially. For each row,
/// subtracts `Σ_i weights[i] * class_mean_i(row)` from the row's value,
/// with missing-aware means and strict missing propagation.
///
/// # Errors
///
/// Returns a [`ShapeError`] before any aggregation if the grouping list is
/// empty, any grouping's length differs from `values.len()`, or
/// `weights.len() != groups.len()`.
///
/// # Example
///
/// ```rust
/// use demean_rs::prelude::*;
///
/// let values = vec![Some(1.0), Some(3.0)];
/// let grouping = vec!["A", "A"];
///
/// let out = group_adjust(&values, &[grouping], &[1.0])?;
/// assert_eq!(out, vec![Some(-1.0), Some(1.0)]);
/// # Result::<(), ShapeError>::Ok(())
/// ```
pub fn group_adjust<T, K, G>(
    values: &[Option<T>],
    groups: &[G],
    weights: &[T],
) -> Result<Vec<Option<T>>, ShapeError>
where
    T: Float + Send + Sync,
    K: Hash + Eq + Sync,
    G: AsRef<[K]> + Sync,
{
    Validator::validate_shapes(values.len(), groups, weights.len())?;

    let config = DemeanConfig {
        weights: weights.to_vec(),
        parallel: false,
    };

    Ok(DemeanExecutor::run(values, groups, &config))
}
