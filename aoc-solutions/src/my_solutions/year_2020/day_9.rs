use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse;

/// Encoding Error
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 9, tags = ["2020", "sliding-window"])]
pub struct Solver;

const PREAMBLE: usize = 25;

pub struct Xmas {
    numbers: Vec<u64>,
    invalid: Option<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Xmas;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(Xmas {
            numbers: parse::lines(input)?,
            invalid: None,
        })
    }
}

/// First number that is not the sum of two distinct numbers in the preceding window.
fn first_invalid(numbers: &[u64], preamble: usize) -> Option<u64> {
    numbers.windows(preamble + 1).find_map(|window| {
        let (&target, previous) = window.split_last()?;
        let valid = previous
            .iter()
            .tuple_combinations()
            .any(|(a, b)| a != b && a + b == target);
        (!valid).then_some(target)
    })
}

/// Sum of the smallest and largest number in a contiguous run (two or more) adding up to `target`.
fn weakness(numbers: &[u64], target: u64) -> Option<u64> {
    let (mut start, mut sum) = (0, 0);
    for end in 0..numbers.len() {
        sum += numbers[end];
        while sum > target && start < end {
            sum -= numbers[start];
            start += 1;
        }
        if sum == target && end > start {
            let run = &numbers[start..=end];
            let (min, max) = run.iter().minmax().into_option()?;
            return Some(min + max);
        }
    }
    None
}

impl Xmas {
    fn invalid(&mut self, preamble: usize) -> Result<u64, SolveError> {
        if self.invalid.is_none() {
            self.invalid = first_invalid(&self.numbers, preamble);
        }
        self.invalid
            .ok_or_else(|| SolveError::failed("every number is a valid sum"))
    }
}

fn solve_weakness(xmas: &mut Xmas, preamble: usize) -> Result<u64, SolveError> {
    let target = xmas.invalid(preamble)?;
    weakness(&xmas.numbers, target)
        .ok_or_else(|| SolveError::failed("no contiguous run sums to the invalid number"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.invalid(PREAMBLE)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_weakness(shared, PREAMBLE)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str =
        "35\n20\n15\n25\n47\n40\n62\n55\n65\n95\n102\n117\n150\n182\n127\n219\n299\n277\n309\n576\n";

    #[test]
    fn test_example() {
        let mut xmas = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(xmas.invalid(5).unwrap(), 127);
        assert_eq!(solve_weakness(&mut xmas, 5).unwrap(), 62);
    }

    #[test]
    fn test_all_valid() {
        assert_eq!(first_invalid(&[1, 2, 3, 5, 8, 13], 2), None);
    }
}
