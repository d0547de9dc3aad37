use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse;

/// No Such Thing as Too Much
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 17, tags = ["2015", "bitmask", "subset-sum"])]
pub struct Solver;

const EGGNOG: u32 = 150;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let containers: Vec<u32> = parse::lines(input)?;
        if containers.len() >= 32 {
            return Err(ParseError::InvalidFormat("too many containers for a 32-bit mask".into()));
        }
        Ok(containers)
    }
}

/// Container counts of every subset holding exactly `target` litres.
fn fills(containers: &[u32], target: u32) -> Vec<u32> {
    (0u32..1 << containers.len())
        .filter(|mask| {
            containers
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, &c)| c)
                .sum::<u32>()
                == target
        })
        .map(u32::count_ones)
        .collect()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(fills(shared, EGGNOG).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let fewest = fills(shared, EGGNOG).into_iter().min_set();
        Ok(fewest.len().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        let fills = fills(&[20, 15, 10, 5, 5], 25);
        assert_eq!(fills.len(), 4);
        assert_eq!(fills.iter().filter(|&&n| n == 2).count(), 3);
    }
}
