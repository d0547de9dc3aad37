use std::ops::RangeInclusive;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Camp Cleanup
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 4, tags = ["2022", "intervals"])]
pub struct Solver;

type Sections = RangeInclusive<u32>;

impl AocParser for Solver {
    type SharedData<'a> = Vec<(Sections, Sections)>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        // '-' separates bounds here, it is never a sign.
        parse::lines_with(input, |line| {
            let bounds = line
                .trim()
                .split([',', '-'])
                .map(str::parse)
                .collect::<Result<Vec<u32>, _>>()?;
            match bounds[..] {
                [a1, a2, b1, b2] => Ok((a1..=a2, b1..=b2)),
                _ => anyhow::bail!("expected 'a-b,c-d'"),
            }
        })
    }
}

fn covers(a: &Sections, b: &Sections) -> bool {
    a.start() <= b.start() && b.end() <= a.end()
}

fn overlaps(a: &Sections, b: &Sections) -> bool {
    a.start() <= b.end() && b.start() <= a.end()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared
            .iter()
            .filter(|(a, b)| covers(a, b) || covers(b, a))
            .count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|(a, b)| overlaps(a, b)).count().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
2-4,6-8
2-3,4-5
5-7,7-9
2-8,3-7
6-6,4-6
2-6,4-8
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "2");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "4");
    }
}
