use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Rambunctious Recitation
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 15, tags = ["2020", "simulation"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let starting: Vec<u32> = parse::separated(input, ',')?;
        if starting.is_empty() {
            return Err(ParseError::MissingData("no starting numbers".into()));
        }
        Ok(starting)
    }
}

/// The number spoken on turn `turns`.
fn spoken(starting: &[u32], turns: u32) -> u32 {
    if (turns as usize) <= starting.len() {
        return starting[turns as usize - 1];
    }
    // Turn (1-based) on which each number was last spoken; 0 means never.
    let size = starting.iter().map(|&n| n as usize + 1).fold(turns as usize, usize::max);
    let mut last_turn = vec![0u32; size];
    for (turn, &n) in (1..).zip(&starting[..starting.len() - 1]) {
        last_turn[n as usize] = turn;
    }
    let mut current = starting[starting.len() - 1];
    for turn in starting.len() as u32..turns {
        let previous = std::mem::replace(&mut last_turn[current as usize], turn);
        current = if previous == 0 { 0 } else { turn - previous };
    }
    current
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(spoken(shared, 2020).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(spoken(shared, 30_000_000).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    #[test]
    fn test_first_turns() {
        let numbers: Vec<u32> = (1..=10).map(|turn| spoken(&[0, 3, 6], turn)).collect();
        assert_eq!(numbers, vec![0, 3, 6, 0, 3, 3, 1, 0, 4, 0]);
    }

    #[test]
    fn test_examples() {
        assert_eq!(solve::<Solver>("0,3,6", 1), "436");
        assert_eq!(solve::<Solver>("1,3,2", 1), "1");
        assert_eq!(solve::<Solver>("2,1,3", 1), "10");
        assert_eq!(solve::<Solver>("1,2,3", 1), "27");
        assert_eq!(solve::<Solver>("3,1,2", 1), "1836");
    }
}
