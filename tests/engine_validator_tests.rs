#![cfg(feature = "dev")]
//! Tests for shape validation.
//!
//! These tests verify the precondition checks that run before any
//! aggregation:
//! - Non-empty grouping list
//! - Per-grouping length agreement with the value sequence
//! - Weight count agreement with the grouping count

use demean_rs::internals::engine::validator::Validator;
use demean_rs::internals::primitives::errors::ShapeError;

/// Test that well-shaped inputs pass validation.
#[test]
fn test_valid_shapes_pass() {
    let groups = vec![vec!["A", "B", "A"], vec!["X", "X", "Y"]];
    assert!(Validator::validate_shapes(3, &groups, 2).is_ok());
}

/// Test that an empty grouping list is rejected.
#[test]
fn test_empty_groupings_rejected() {
    let groups: Vec<Vec<&str>> = Vec::new();
    let result = Validator::validate_shapes(3, &groups, 0);
    assert_eq!(result, Err(ShapeError::EmptyGroupings));
}

/// Test that a short grouping is rejected with its index.
#[test]
fn test_short_grouping_rejected() {
    let groups = vec![vec!["A", "B", "A"], vec!["X", "X"]];
    let result = Validator::validate_shapes(3, &groups, 2);
    assert_eq!(
        result,
        Err(ShapeError::GroupingLengthMismatch {
            index: 1,
            got: 2,
            expected: 3,
        })
    );
}

/// Test that a long grouping is rejected too.
#[test]
fn test_long_grouping_rejected() {
    let groups = vec![vec!["A", "B", "A", "C"]];
    let result = Validator::validate_shapes(3, &groups, 1);
    assert_eq!(
        result,
        Err(ShapeError::GroupingLengthMismatch {
            index: 0,
            got: 4,
            expected: 3,
        })
    );
}

/// Test that the first offending grouping is the one reported.
#[test]
fn test_first_offending_grouping_reported() {
    let groups = vec![
        vec!["A", "B", "A"],
        vec!["X"],
        vec!["P", "Q"],
    ];
    let result = Validator::validate_shapes(3, &groups, 3);
    assert_eq!(
        result,
        Err(ShapeError::GroupingLengthMismatch {
            index: 1,
            got: 1,
            expected: 3,
        })
    );
}

/// Test that a weight count mismatch is rejected.
#[test]
fn test_weight_count_mismatch_rejected() {
    let groups = vec![vec!["A", "B"], vec!["X", "Y"]];
    let result = Validator::validate_shapes(2, &groups, 1);
    assert_eq!(
        result,
        Err(ShapeError::WeightCountMismatch {
            weights: 1,
            groupings: 2,
        })
    );
}

/// Test the check ordering: length mismatch is reported before the weight
/// count mismatch when both preconditions fail.
#[test]
fn test_length_checked_before_weights() {
    let groups = vec![vec!["A", "B"]];
    let result = Validator::validate_shapes(3, &groups, 5);
    assert_eq!(
        result,
        Err(ShapeError::GroupingLengthMismatch {
            index: 0,
            got: 2,
            expected: 3,
        })
    );
}

/// Test that empty values with matching empty groupings validate.
#[test]
fn test_empty_values_with_empty_grouping() {
    let groups: Vec<Vec<&str>> = vec![Vec::new()];
    assert!(Validator::validate_shapes(0, &groups, 1).is_ok());
}
