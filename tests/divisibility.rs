//! Denominator divisibility checks on two- and three-row boards.

mod common;

use chomp::{
    Error, ExactFraction,
    analysis::{divisibility_survey, ordered_boards},
    solver::{
        is_denominator_multiple, minimal_divisible_exponent, three_row_win_probability_exact,
        two_row_win_probability_exact,
    },
};
use common::frac;

#[test]
fn two_row_boards_divide_with_three_factors() {
    for (n1, n2) in [(2, 1), (3, 1), (3, 2), (4, 2), (5, 3)] {
        let prob = two_row_win_probability_exact(n1, n2).unwrap();
        assert!(
            is_denominator_multiple(&prob, 2, n1, n2, 0).unwrap(),
            "({n1}, {n2})"
        );
    }
}

#[test]
fn short_second_rows_always_divide() {
    for n1 in 2..=12 {
        for n2 in 1..=2.min(n1) {
            let prob = two_row_win_probability_exact(n1, n2).unwrap();
            assert!(
                is_denominator_multiple(&prob, 2, n1, n2, 0).unwrap(),
                "({n1}, {n2})"
            );
        }
    }
}

#[test]
fn longer_second_rows_can_fail() {
    for (n1, n2) in [(3, 3), (4, 3), (4, 4)] {
        let prob = two_row_win_probability_exact(n1, n2).unwrap();
        assert!(
            !is_denominator_multiple(&prob, 2, n1, n2, 0).unwrap(),
            "({n1}, {n2})"
        );
    }
}

#[test]
fn zero_product_is_an_error() {
    let prob = frac("1/3");
    assert!(matches!(
        is_denominator_multiple(&prob, 3, 2, 1, 0),
        Err(Error::DivideByZero { .. })
    ));
    assert!(matches!(
        is_denominator_multiple(&prob, 5, 2, 1, 0),
        Err(Error::DivideByZero { .. })
    ));
}

#[test]
fn explicit_probability_is_used_as_given() {
    // 1/2 - 1/7 has denominator 14, which does not divide 5·4·3.
    let prob = frac("1/7");
    assert!(!is_denominator_multiple(&prob, 2, 3, 2, 0).unwrap());
    // Denominator 10 divides 5·4·3.
    let prob = frac("2/5");
    assert!(is_denominator_multiple(&prob, 2, 3, 2, 0).unwrap());
    // Unreduced input is reduced first.
    let prob = ExactFraction::new(4, 10).unwrap();
    assert!(is_denominator_multiple(&prob, 2, 3, 2, 0).unwrap());
}

#[test]
fn minimal_exponent_is_tight() {
    let prob = three_row_win_probability_exact(5, 3, 0).unwrap();
    assert_eq!(minimal_divisible_exponent(&prob, 5, 3, 0).unwrap(), Some(2));
    assert!(!is_denominator_multiple(&prob, 1, 5, 3, 0).unwrap());
}

#[test]
fn survey_matches_direct_checks() {
    let boards = ordered_boards(5, 3, 2).unwrap();
    let records = divisibility_survey(2, &boards).unwrap();
    assert_eq!(records.len(), boards.len());

    for record in &records {
        let (n1, n2, n3) = (record.n1 as i64, record.n2 as i64, record.n3 as i64);
        let direct = match is_denominator_multiple(&record.probability, 2, n1, n2, n3) {
            Ok(verdict) => Some(verdict),
            Err(Error::DivideByZero { .. }) => None,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(record.divides, direct, "({n1}, {n2}, {n3})");
        assert_eq!(record.divides.is_none(), n1 + n2 + n3 <= 2);
    }
}
