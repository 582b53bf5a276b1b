//! Row-wise combination of weighted class means with the original values.
//!
//! ## Purpose
//!
//! This module sums the per-grouping weighted mean sequences for each row
//! and subtracts the total from the original value, producing the demeaned
//! output.
//!
//! ## Design notes
//!
//! * **Strict missing propagation**: A missing term poisons the whole row's
//!   sum; a partial sum never silently treats missing as zero.
//! * **Positional**: Row `r` of the output is computed from row `r` of every
//!   input sequence. No reordering.
//!
//! ## Invariants
//!
//! * Output length equals the value sequence length.
//! * `output[r]` is missing iff `values[r]` is missing or any contribution
//!   at row `r` is missing.
//!
//! ## Non-goals
//!
//! * This module does not compute the contributions (handled by
//!   `aggregation`).

// External dependencies
use num_traits::Float;

// ============================================================================
// Weighted-Sum Subtraction
// ============================================================================

/// Subtract the row-wise sum of all contributions from the original values.
///
/// Each element of `contributions` is one grouping's weighted-mean sequence,
/// positionally aligned with `values`. All sequences must share the value
/// length; this is a caller invariant.
pub fn subtract_weighted_sum<T: Float>(
    values: &[Option<T>],
    contributions: &[Vec<Option<T>>],
) -> Vec<Option<T>> {
    debug_assert!(contributions.iter().all(|c| c.len() == values.len()));

    values
        .iter()
        .enumerate()
        .map(|(row, value)| {
            let mut weighted_sum = T::zero();
            for contribution in contributions {
                match contribution[row] {
                    Some(term) => weighted_sum = weighted_sum + term,
                    None => return None,
                }
            }
            value.map(|v| v - weighted_sum)
        })
        .collect()
}
