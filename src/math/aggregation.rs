//! Missing-aware class mean aggregation for a single grouping.
//!
//! ## Purpose
//!
//! This module computes, for one grouping, the per-class arithmetic mean of
//! the valid values and broadcasts it back to every row of that class,
//! optionally scaled by the grouping's weight.
//!
//! ## Design notes
//!
//! * **Algorithm**: One accumulation pass builds a `(sum, count)` table
//!   keyed by class, then one broadcast pass assigns each row its class
//!   mean. Total cost is O(N) per grouping regardless of the number of
//!   distinct classes; a per-class scan of the full dataset (O(N·K)) is
//!   deliberately avoided.
//! * **Missing values**: A missing value joins neither sum nor count, but
//!   its row still receives the mean computed from the remaining class
//!   members.
//! * **Generics**: Generic over `Float` values and any hashable key type.
//!
//! ## Key concepts
//!
//! * **Class**: The subset of row indices sharing one key within a grouping.
//! * **Broadcast**: Every row of a class receives the same class mean.
//!
//! ## Invariants
//!
//! * Output length equals input length; output order equals input order.
//! * A class with zero valid members yields a missing mean.
//! * The mean table depends only on the value sequence and this grouping,
//!   never on other groupings or on weights.
//!
//! ## Non-goals
//!
//! * This module does not validate input lengths (handled by `validator`).
//! * This module does not combine groupings (handled by `combine`).

use std::collections::HashMap;
use std::hash::Hash;

// External dependencies
use num_traits::Float;

// ============================================================================
// Class Means
// ============================================================================

/// Compute each row's class mean for a single grouping.
///
/// Builds a `(sum, count)` accumulator per distinct key over the valid
/// values only, then broadcasts `sum / count` back to every row. Rows whose
/// class has no valid member receive `None`.
///
/// `values` and `keys` must have equal length; this is a caller invariant.
pub fn class_means<T, K>(values: &[Option<T>], keys: &[K]) -> Vec<Option<T>>
where
    T: Float,
    K: Hash + Eq,
{
    debug_assert_eq!(values.len(), keys.len());

    // Pass 1: accumulate sum and count per class, valid values only.
    let mut table: HashMap<&K, (T, usize)> = HashMap::new();
    for (key, value) in keys.iter().zip(values) {
        if let Some(v) = *value {
            let entry = table.entry(key).or_insert((T::zero(), 0));
            entry.0 = entry.0 + v;
            entry.1 += 1;
        }
    }

    // Pass 2: broadcast the class mean back to every row.
    keys.iter()
        .map(|key| match table.get(key) {
            Some(&(sum, count)) if count > 0 => Some(sum / T::from(count).unwrap()),
            _ => None,
        })
        .collect()
}

/// Compute each row's class mean scaled by the grouping's weight.
///
/// A missing mean scaled by any weight remains missing.
pub fn weighted_class_means<T, K>(values: &[Option<T>], keys: &[K], weight: T) -> Vec<Option<T>>
where
    T: Float,
    K: Hash + Eq,
{
    let mut means = class_means(values, keys);
    for mean in means.iter_mut() {
        if let Some(m) = mean {
            *m = *m * weight;
        }
    }
    means
}
