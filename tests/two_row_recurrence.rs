//! Two-row recurrence and closed form against hand computations and the
//! board rules.

mod common;

use chomp::{
    Error,
    solver::{
        three_row_win_probability_exact, two_row_recurrence_sequence, two_row_recurrence_vector,
        two_row_win_probability, two_row_win_probability_exact,
    },
};
use common::{brute_force_probability, frac};
use num_bigint::BigInt;

#[test]
fn first_five_vectors() {
    let expected: [(i64, i64); 5] = [
        (1, -1),
        (4, -4),
        (68, -76),
        (2576, -3248),
        (171920, -243152),
    ];
    for (k, (a, b)) in (1..=5).zip(expected) {
        assert_eq!(
            two_row_recurrence_vector(k).unwrap(),
            (BigInt::from(a), BigInt::from(b)),
            "k = {k}"
        );
    }
}

#[test]
fn sequence_matches_individual_vectors() {
    let sequence = two_row_recurrence_sequence(12).unwrap();
    assert_eq!(sequence.len(), 12);
    for vector in sequence {
        let k = vector.k as i64;
        assert_eq!(
            vector.into_pair(),
            two_row_recurrence_vector(k).unwrap(),
            "k = {k}"
        );
    }
}

#[test]
fn non_positive_k_is_rejected() {
    for k in [0, -1, -100] {
        assert!(matches!(
            two_row_recurrence_vector(k),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(two_row_recurrence_sequence(k).is_err());
    }
}

#[test]
fn three_by_one_by_hand() {
    // Four moves leave the opponent facing: nothing, (1,1), (2,1), (3,0).
    // 1 - (1 + 1/2 + 1/3 + 1/2) / 4
    assert_eq!(two_row_win_probability_exact(3, 1).unwrap(), frac("5/12"));
}

#[test]
fn known_values() {
    let cases = [
        ((1, 1), "1/2"),
        ((2, 1), "1/3"),
        ((2, 2), "5/12"),
        ((4, 4), "113/240"),
        ((10, 3), "4997/10296"),
    ];
    for ((n, k), expected) in cases {
        let value = two_row_win_probability_exact(n, k).unwrap();
        assert_eq!(value, frac(expected), "({n}, {k})");
        assert!(value.is_reduced());
    }
}

#[test]
fn closed_form_agrees_with_three_row_engine() {
    for n in 0..=12 {
        for k in 0..=n {
            let closed = two_row_win_probability_exact(n, k).unwrap();
            let recursive = three_row_win_probability_exact(n, k, 0).unwrap();
            assert_eq!(closed, recursive, "({n}, {k})");
        }
    }
}

#[test]
fn closed_form_agrees_with_board_rules() {
    for n in 1..=6usize {
        for k in 0..=n {
            let expected = brute_force_probability(&[n, k]);
            let closed = two_row_win_probability_exact(n as i64, k as i64).unwrap();
            assert_eq!(closed, expected, "({n}, {k})");
        }
    }
}

#[test]
fn float_matches_exact() {
    for (n, k) in [(2, 1), (7, 5), (30, 30), (60, 17)] {
        let exact = two_row_win_probability_exact(n, k).unwrap().to_f64();
        let float = two_row_win_probability(n, k).unwrap();
        assert!((exact - float).abs() < 1e-12, "({n}, {k}): {exact} vs {float}");
    }
}

#[test]
fn invalid_boards_are_rejected() {
    for (n, k) in [(2, 3), (-1, 0), (3, -1)] {
        assert!(matches!(
            two_row_win_probability_exact(n, k),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(two_row_win_probability(n, k).is_err());
    }
}
