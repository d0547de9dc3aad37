use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// I Was Told There Would Be No Math
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 2, tags = ["2015", "geometry"])]
pub struct Solver;

impl AocParser for Solver {
    /// Box dimensions, each sorted ascending.
    type SharedData<'a> = Vec<[u32; 3]>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| -> Result<_, ParseError> {
                let mut dims: [u32; 3] = parse::integers_array(line)?;
                dims.sort_unstable();
                Ok(dims)
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let paper: u32 = shared
            .iter()
            .map(|&[a, b, c]| 2 * (a * b + b * c + a * c) + a * b)
            .sum();
        Ok(paper.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let ribbon: u32 = shared.iter().map(|&[a, b, c]| 2 * (a + b) + a * b * c).sum();
        Ok(ribbon.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>("2x3x4", 1), "58");
        assert_eq!(solve::<Solver>("1x1x10", 1), "43");
        assert_eq!(solve::<Solver>("2x3x4\n1x1x10\n", 2), "48");
    }
}
