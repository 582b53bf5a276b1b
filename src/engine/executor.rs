//! Execution engine for group-wise demeaning.
//!
//! ## Purpose
//!
//! This module runs the demeaning computation: one missing-aware aggregation
//! pass per grouping, followed by the combine pass that subtracts the summed
//! weighted means from the original values.
//!
//! ## Design notes
//!
//! * Per-grouping passes are mutually independent and share no mutable
//!   state; with the `parallel` feature enabled and requested, they run on
//!   rayon and are joined deterministically before combining.
//! * Output ordering is purely positional, so sequential and parallel
//!   execution produce identical results.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * Inputs reaching the executor have already passed shape validation.
//! * Each contribution sequence has the value length.
//! * The output has the value length and order.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not provide the public-facing API (handled by `api`).

use std::hash::Hash;

// External dependencies
use num_traits::Float;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Internal dependencies
use crate::math::aggregation::weighted_class_means;
use crate::math::combine::subtract_weighted_sum;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a demeaning run.
#[derive(Debug, Clone)]
pub struct DemeanConfig<T: Float> {
    /// One weight per grouping, applied positionally and used as given.
    pub weights: Vec<T>,

    /// Run per-grouping aggregation on rayon (requires the `parallel`
    /// feature; otherwise ignored).
    pub parallel: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Executor for the demeaning computation.
pub struct DemeanExecutor;

impl DemeanExecutor {
    /// Run the full demeaning pass over validated inputs.
    ///
    /// Computes one weighted-mean sequence per grouping, then subtracts the
    /// row-wise sum of those sequences from the original values.
    pub fn run<T, K, G>(values: &[Option<T>], groups: &[G], config: &DemeanConfig<T>) -> Vec<Option<T>>
    where
        T: Float + Send + Sync,
        K: Hash + Eq + Sync,
        G: AsRef<[K]> + Sync,
    {
        let contributions = Self::grouping_pass(values, groups, &config.weights, config.parallel);
        subtract_weighted_sum(values, &contributions)
    }

    /// Compute the weighted class mean sequence for every grouping.
    fn grouping_pass<T, K, G>(
        values: &[Option<T>],
        groups: &[G],
        weights: &[T],
        parallel: bool,
    ) -> Vec<Vec<Option<T>>>
    where
        T: Float + Send + Sync,
        K: Hash + Eq + Sync,
        G: AsRef<[K]> + Sync,
    {
        #[cfg(feature = "parallel")]
        if parallel {
            return groups
                .par_iter()
                .zip(weights.par_iter())
                .map(|(group, &weight)| weighted_class_means(values, group.as_ref(), weight))
                .collect();
        }

        #[cfg(not(feature = "parallel"))]
        let _ = parallel;

        groups
            .iter()
            .zip(weights.iter())
            .map(|(group, &weight)| weighted_class_means(values, group.as_ref(), weight))
            .collect()
    }
}
