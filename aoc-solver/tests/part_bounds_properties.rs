//! Property tests for range-checked part dispatch

use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Solver whose part count is a const parameter
struct Fixed<const N: u8>;

impl<const N: u8> AocParser for Fixed<N> {
    type SharedData<'a> = Vec<u8>;

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(Vec::new())
    }
}

impl<const N: u8> Solver for Fixed<N> {
    const PARTS: u8 = N;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        shared.push(part);
        Ok(format!("part{part}"))
    }
}

fn checked(max_parts: u8, part: u8, shared: &mut Vec<u8>) -> Result<String, SolveError> {
    match max_parts {
        1 => Fixed::<1>::solve_part_checked_range(shared, part),
        2 => Fixed::<2>::solve_part_checked_range(shared, part),
        _ => Fixed::<3>::solve_part_checked_range(shared, part),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Parts outside `1..=PARTS` never reach `solve_part`.
    #[test]
    fn prop_out_of_range_rejected(max_parts in 1u8..=3, part in 0u8..=255) {
        let mut shared = Vec::new();
        let result = checked(max_parts, part, &mut shared);

        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
            }
            prop_assert!(shared.is_empty());
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{part}"));
            prop_assert_eq!(shared, vec![part]);
        }
    }

    /// In range, the checked call and the direct call agree.
    #[test]
    fn prop_valid_range_delegates(part in 1u8..=2) {
        let mut a = Vec::new();
        let mut b = Vec::new();
        let checked_result = Fixed::<2>::solve_part_checked_range(&mut a, part).unwrap();
        let direct_result = Fixed::<2>::solve_part(&mut b, part).unwrap();
        prop_assert_eq!(checked_result, direct_result);
        prop_assert_eq!(a, b);
    }
}

#[test]
fn test_part_zero_rejected() {
    let mut shared = Vec::new();
    let result = Fixed::<2>::solve_part_checked_range(&mut shared, 0);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(0))));
}

#[test]
fn test_part_exceeds_max_rejected() {
    let mut shared = Vec::new();
    let result = Fixed::<2>::solve_part_checked_range(&mut shared, 3);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(3))));
}
