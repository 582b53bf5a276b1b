#![cfg(feature = "dev")]

use demean_rs::internals::primitives::errors::ShapeError;

#[test]
fn test_shape_error_display() {
    // EmptyGroupings
    let err = ShapeError::EmptyGroupings;
    assert_eq!(
        format!("{}", err),
        "No groupings provided: at least one grouping is required"
    );

    // GroupingLengthMismatch
    let err = ShapeError::GroupingLengthMismatch {
        index: 1,
        got: 4,
        expected: 6,
    };
    assert_eq!(
        format!("{}", err),
        "Length mismatch: grouping 1 has 4 rows, values has 6"
    );

    // WeightCountMismatch
    let err = ShapeError::WeightCountMismatch {
        weights: 1,
        groupings: 2,
    };
    assert_eq!(
        format!("{}", err),
        "Weight count mismatch: 1 weights for 2 groupings"
    );
}

#[test]
fn test_shape_error_properties() {
    let err1 = ShapeError::EmptyGroupings;
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(
        err1,
        ShapeError::WeightCountMismatch {
            weights: 0,
            groupings: 1
        }
    );
}

#[test]
fn test_shape_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<ShapeError>();
}
