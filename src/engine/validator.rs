//! Input validation for group-wise demeaning.
//!
//! ## Purpose
//!
//! This module checks the length preconditions among the value sequence,
//! the groupings, and the weight vector before any aggregation begins.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first violation.
//! * **Ordering**: Grouping lengths are checked before the weight count;
//!   the check order is part of the error contract.
//! * **Side-effect free**: Validation never mutates or copies input data.
//!
//! ## Key concepts
//!
//! * **Shape Preconditions**: Every grouping has the value length; the
//!   weight count equals the grouping count. Checking each grouping against
//!   the value length also covers groupings differing from each other.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//! * A passing input reaches the executor unchanged.
//!
//! ## Non-goals
//!
//! * This module does not inspect values or keys (missing values are data,
//!   not errors).
//! * This module does not perform the demeaning itself.

use crate::primitives::errors::ShapeError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for demeaning inputs.
///
/// Provides static methods returning `Result<(), ShapeError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate the shapes of values, groupings, and weights.
    ///
    /// Checks, in order:
    /// 1. At least one grouping is present.
    /// 2. Every grouping's length equals `n_values`.
    /// 3. The weight count equals the grouping count.
    pub fn validate_shapes<K, G>(
        n_values: usize,
        groups: &[G],
        n_weights: usize,
    ) -> Result<(), ShapeError>
    where
        G: AsRef<[K]>,
    {
        // Check 1: Non-empty grouping list
        if groups.is_empty() {
            return Err(ShapeError::EmptyGroupings);
        }

        // Check 2: Every grouping matches the value length
        for (index, group) in groups.iter().enumerate() {
            let got = group.as_ref().len();
            if got != n_values {
                return Err(ShapeError::GroupingLengthMismatch {
                    index,
                    got,
                    expected: n_values,
                });
            }
        }

        // Check 3: One weight per grouping
        if n_weights != groups.len() {
            return Err(ShapeError::WeightCountMismatch {
                weights: n_weights,
                groupings: groups.len(),
            });
        }

        Ok(())
    }
}
