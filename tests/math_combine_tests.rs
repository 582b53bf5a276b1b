#![cfg(feature = "dev")]
//! Tests for the row-wise weighted-sum subtraction.
//!
//! These tests verify the combine step:
//! - Summation across per-grouping contributions
//! - Subtraction from the original values
//! - Strict missing propagation (no partial sums)

use approx::assert_abs_diff_eq;

use demean_rs::internals::math::combine::subtract_weighted_sum;

/// Test subtraction with a single contribution sequence.
#[test]
fn test_single_contribution() {
    let values = vec![Some(1.0), Some(3.0)];
    let contributions = vec![vec![Some(2.0), Some(2.0)]];

    let out = subtract_weighted_sum(&values, &contributions);

    assert_eq!(out, vec![Some(-1.0), Some(1.0)]);
}

/// Test that contributions are summed per row before subtraction.
#[test]
fn test_contributions_summed_per_row() {
    let values = vec![Some(10.0), Some(10.0)];
    let contributions = vec![
        vec![Some(1.0), Some(2.0)],
        vec![Some(3.0), Some(4.0)],
    ];

    let out = subtract_weighted_sum(&values, &contributions);

    assert_abs_diff_eq!(out[0].unwrap(), 6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(out[1].unwrap(), 4.0, epsilon = 1e-12);
}

/// Test that a missing value yields a missing output regardless of the sum.
#[test]
fn test_missing_value_propagates() {
    let values = vec![Some(1.0), None];
    let contributions = vec![vec![Some(0.5), Some(0.5)]];

    let out = subtract_weighted_sum(&values, &contributions);

    assert_eq!(out[0], Some(0.5));
    assert_eq!(out[1], None);
}

/// Test that one missing contribution poisons the row's sum.
#[test]
fn test_missing_contribution_poisons_row() {
    let values = vec![Some(1.0), Some(2.0)];
    let contributions = vec![
        vec![Some(0.5), None],
        vec![Some(0.5), Some(0.5)],
    ];

    let out = subtract_weighted_sum(&values, &contributions);

    // Row 1's sum is missing; a partial sum must never treat None as zero.
    assert_eq!(out[0], Some(0.0));
    assert_eq!(out[1], None);
}

/// Test that output length and order follow the value sequence.
#[test]
fn test_output_positionally_aligned() {
    let values = vec![Some(5.0), Some(6.0), Some(7.0)];
    let contributions = vec![vec![Some(1.0), Some(2.0), Some(3.0)]];

    let out = subtract_weighted_sum(&values, &contributions);

    assert_eq!(out, vec![Some(4.0), Some(4.0), Some(4.0)]);
}
