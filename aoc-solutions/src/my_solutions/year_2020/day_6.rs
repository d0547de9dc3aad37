use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Custom Customs
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 6, tags = ["2020", "bitmask"])]
pub struct Solver;

impl AocParser for Solver {
    /// Per group, one bitmask of `a..=z` answers per person.
    type SharedData<'a> = Vec<Vec<u32>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::blocks(input)
            .map(|group| parse::lines_with(group, answers))
            .collect()
    }
}

fn answers(line: &str) -> anyhow::Result<u32> {
    line.trim().bytes().try_fold(0, |mask, b| {
        anyhow::ensure!(b.is_ascii_lowercase(), "unexpected answer {:?}", b as char);
        Ok(mask | 1 << (b - b'a'))
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let anyone: u32 = shared
            .iter()
            .map(|group| group.iter().fold(0, |acc, m| acc | m).count_ones())
            .sum();
        Ok(anyone.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let everyone: u32 = shared
            .iter()
            .map(|group| group.iter().fold(u32::MAX, |acc, m| acc & m).count_ones())
            .sum();
        Ok(everyone.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
abc

a
b
c

ab
ac

a
a
a
a

b
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "11");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "6");
    }
}
