//! Error types for group-wise demeaning.
//!
//! ## Purpose
//!
//! This module defines the single error type surfaced by the crate:
//! [`ShapeError`], covering every length precondition violation among the
//! value sequence, the groupings, and the weight vector.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Every variant is raised during validation, before any
//!   aggregation work begins.
//! * **Fatal**: A shape mismatch is a usage error, not a transient
//!   condition; there is no retry or partial result.
//!
//! ## Key concepts
//!
//! * **Shape Preconditions**: All groupings and the value sequence share one
//!   length N; the weight count equals the grouping count.
//!
//! ## Invariants
//!
//! * Missing values are never an error. They are a member of the value
//!   domain and propagate through arithmetic instead.
//!
//! ## Non-goals
//!
//! * This module does not perform validation itself (handled by the engine's
//!   `Validator`).

use std::error::Error;
use std::fmt;

// ============================================================================
// Shape Error
// ============================================================================

/// A length precondition violation among values, groupings, and weights.
///
/// Returned by every entry point before any aggregation occurs. The
/// computation is deterministic, so a given invalid input always fails with
/// the same variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The grouping list is empty; at least one grouping is required.
    EmptyGroupings,

    /// A grouping's length differs from the value sequence length.
    GroupingLengthMismatch {
        /// Zero-based index of the first offending grouping.
        index: usize,
        /// Length of the offending grouping.
        got: usize,
        /// Length of the value sequence.
        expected: usize,
    },

    /// The weight count differs from the grouping count.
    WeightCountMismatch {
        /// Number of weights supplied.
        weights: usize,
        /// Number of groupings supplied.
        groupings: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::EmptyGroupings => {
                write!(f, "No groupings provided: at least one grouping is required")
            }
            ShapeError::GroupingLengthMismatch {
                index,
                got,
                expected,
            } => {
                write!(
                    f,
                    "Length mismatch: grouping {} has {} rows, values has {}",
                    index, got, expected
                )
            }
            ShapeError::WeightCountMismatch { weights, groupings } => {
                write!(
                    f,
                    "Weight count mismatch: {} weights for {} groupings",
                    weights, groupings
                )
            }
        }
    }
}

impl Error for ShapeError {}
