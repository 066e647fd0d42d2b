//! Integration tests for range generation.

use tileforge_collections::range::{number_array, number_array_step};

// ---------------------------------------------------------------------------
// number_array
// ---------------------------------------------------------------------------

#[test]
fn number_array_is_inclusive() {
    assert_eq!(number_array(0, 4), vec![0, 1, 2, 3, 4]);
    assert_eq!(number_array(-2, 2), vec![-2, -1, 0, 1, 2]);
}

#[test]
fn number_array_single_value() {
    assert_eq!(number_array(3, 3), vec![3]);
}

#[test]
fn number_array_reversed_bounds_are_empty() {
    assert!(number_array(5, 3).is_empty());
}

// ---------------------------------------------------------------------------
// number_array_step, documented call shapes
// ---------------------------------------------------------------------------

#[test]
fn step_single_argument_counts_from_zero() {
    assert_eq!(number_array_step(4.0, None, None), vec![0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn step_single_argument_zero_is_empty() {
    assert!(number_array_step(0.0, None, None).is_empty());
}

#[test]
fn step_two_arguments_default_step() {
    assert_eq!(
        number_array_step(1.0, Some(5.0), None),
        vec![1.0, 2.0, 3.0, 4.0]
    );
}

#[test]
fn step_three_arguments() {
    assert_eq!(
        number_array_step(0.0, Some(20.0), Some(5.0)),
        vec![0.0, 5.0, 10.0, 15.0]
    );
}

#[test]
fn step_negative_direction() {
    assert_eq!(
        number_array_step(0.0, Some(-4.0), Some(-1.0)),
        vec![0.0, -1.0, -2.0, -3.0]
    );
}

#[test]
fn step_zero_repeats_the_start() {
    assert_eq!(
        number_array_step(1.0, Some(4.0), Some(0.0)),
        vec![1.0, 1.0, 1.0]
    );
}

// ---------------------------------------------------------------------------
// number_array_step, rounding and coercion
// ---------------------------------------------------------------------------

#[test]
fn step_length_ties_round_away_from_zero() {
    // (5 - 0) / 2 = 2.5 rounds to 3 elements, not 2
    assert_eq!(
        number_array_step(0.0, Some(5.0), Some(2.0)),
        vec![0.0, 2.0, 4.0]
    );
    // (-5 - 0) / -2 = 2.5 as well, on the negative walk
    assert_eq!(
        number_array_step(0.0, Some(-5.0), Some(-2.0)),
        vec![0.0, -2.0, -4.0]
    );
}

#[test]
fn step_backwards_range_is_empty() {
    assert!(number_array_step(5.0, Some(1.0), None).is_empty());
}

#[test]
fn step_nan_arguments_degrade_to_zero() {
    assert_eq!(
        number_array_step(f64::NAN, Some(3.0), None),
        vec![0.0, 1.0, 2.0]
    );
    assert!(number_array_step(f64::NAN, None, None).is_empty());
    // NaN step coerces to 0, which repeats the start
    assert_eq!(
        number_array_step(1.0, Some(4.0), Some(f64::NAN)),
        vec![1.0, 1.0, 1.0]
    );
}

#[test]
fn step_fractional_increments() {
    let values = number_array_step(0.0, Some(1.0), Some(0.25));
    assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75]);
}
