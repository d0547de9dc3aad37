use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Sonar Sweep
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 1, tags = ["2021", "sliding-window"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines(input)
    }
}

/// Comparing window sums `gap` apart only needs the two readings that differ.
fn increases(depths: &[u32], gap: usize) -> usize {
    depths
        .iter()
        .zip(depths.iter().skip(gap))
        .filter(|(a, b)| b > a)
        .count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(increases(shared, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(increases(shared, 3).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "7");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "5");
    }

    #[test]
    fn test_bad_reading() {
        assert!(matches!(Solver::parse("1\nten\n"), Err(ParseError::InvalidFormat(_))));
    }
}
