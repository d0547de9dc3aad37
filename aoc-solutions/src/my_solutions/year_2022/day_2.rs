use anyhow::bail;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Rock Paper Scissors
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 2, tags = ["2022", "modular-arithmetic"])]
pub struct Solver;

impl AocParser for Solver {
    /// Each round as (opponent column, own column), both `0..3`.
    /// Shapes are 0 rock, 1 paper, 2 scissors; shape `s` beats `(s + 2) % 3`.
    type SharedData<'a> = Vec<(u8, u8)>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines_with(input, |line| match line.trim().as_bytes() {
            [them @ b'A'..=b'C', b' ', me @ b'X'..=b'Z'] => Ok((them - b'A', me - b'X')),
            _ => bail!("expected '<A|B|C> <X|Y|Z>'"),
        })
    }
}

fn score(them: u8, me: u8) -> u32 {
    // 0 lose, 1 draw, 2 win
    let outcome = (me + 4 - them) % 3;
    u32::from(me) + 1 + u32::from(outcome) * 3
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared.iter().map(|&(them, me)| score(them, me)).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // The second column is the outcome: pick the shape that produces it.
        let total: u32 = shared
            .iter()
            .map(|&(them, outcome)| score(them, (them + outcome + 2) % 3))
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "A Y\nB X\nC Z\n";

    #[test]
    fn test_score() {
        assert_eq!(score(0, 1), 8);
        assert_eq!(score(1, 0), 1);
        assert_eq!(score(2, 2), 6);
    }

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "15");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "12");
    }
}
