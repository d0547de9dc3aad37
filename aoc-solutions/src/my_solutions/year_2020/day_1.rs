use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Report Repair
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 1, tags = ["2020", "two-sum"])]
pub struct Solver;

const TARGET: u32 = 2020;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines(input)
    }
}

/// Two entries (at distinct positions) summing to `target`.
fn pair_summing_to(entries: &[u32], target: u32) -> Option<(u32, u32)> {
    let mut seen = HashSet::new();
    for &e in entries {
        if let Some(other) = target.checked_sub(e).filter(|o| seen.contains(o)) {
            return Some((other, e));
        }
        seen.insert(e);
    }
    None
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        pair_summing_to(shared, TARGET)
            .map(|(a, b)| (u64::from(a) * u64::from(b)).to_string())
            .ok_or_else(|| SolveError::failed("no pair sums to 2020"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .enumerate()
            .find_map(|(i, &a)| {
                let rest = &shared[i + 1..];
                TARGET
                    .checked_sub(a)
                    .and_then(|left| pair_summing_to(rest, left))
                    .map(|(b, c)| u64::from(a) * u64::from(b) * u64::from(c))
            })
            .map(|product| product.to_string())
            .ok_or_else(|| SolveError::failed("no triple sums to 2020"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "1721\n979\n366\n299\n675\n1456\n";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "514579");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "241861950");
    }

    #[test]
    fn test_entry_not_reused() {
        assert_eq!(pair_summing_to(&[1010, 3], 2020), None);
        assert_eq!(pair_summing_to(&[1010, 3, 1010], 2020), Some((1010, 1010)));
    }
}
