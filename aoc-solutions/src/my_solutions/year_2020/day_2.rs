use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Password Philosophy
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 2, tags = ["2020", "strings"])]
pub struct Solver;

#[derive(Debug)]
pub struct Entry<'a> {
    low: usize,
    high: usize,
    letter: u8,
    password: &'a [u8],
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Entry<'a>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines_with(input, |line| {
            let (policy, password) = line.split_once(": ").ok_or_else(|| anyhow!("expected '<policy>: <password>'"))?;
            let (range, letter) = policy.split_once(' ').ok_or_else(|| anyhow!("expected '<low>-<high> <letter>'"))?;
            let (low, high) = range.split_once('-').ok_or_else(|| anyhow!("expected '<low>-<high>'"))?;
            ensure!(letter.len() == 1, "policy letter must be one character");
            Ok(Entry {
                low: low.parse()?,
                high: high.parse()?,
                letter: letter.as_bytes()[0],
                password: password.trim().as_bytes(),
            })
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let valid = shared
            .iter()
            .filter(|e| {
                let count = e.password.iter().filter(|&&c| c == e.letter).count();
                (e.low..=e.high).contains(&count)
            })
            .count();
        Ok(valid.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Positions are 1-based.
        let at = |e: &Entry, pos: usize| pos >= 1 && e.password.get(pos - 1) == Some(&e.letter);
        let valid = shared.iter().filter(|&e| at(e, e.low) != at(e, e.high)).count();
        Ok(valid.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "1-3 a: abcde\n1-3 b: cdefg\n2-9 c: ccccccccc\n";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "2");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "1");
    }
}
