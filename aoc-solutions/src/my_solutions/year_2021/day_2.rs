use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Dive!
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 2, tags = ["2021", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Command>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines_with(input, |line| {
            let (word, amount) = line
                .split_once(' ')
                .ok_or_else(|| anyhow!("expected '<command> <amount>'"))?;
            let amount = amount.parse()?;
            Ok(match word {
                "forward" => Command::Forward(amount),
                "down" => Command::Down(amount),
                "up" => Command::Up(amount),
                other => bail!("unknown command {other:?}"),
            })
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (x, depth) = shared.iter().fold((0, 0), |(x, depth), cmd| match *cmd {
            Command::Forward(n) => (x + n, depth),
            Command::Down(n) => (x, depth + n),
            Command::Up(n) => (x, depth - n),
        });
        Ok((x * depth).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (x, depth, _) = shared
            .iter()
            .fold((0, 0, 0), |(x, depth, aim), cmd| match *cmd {
                Command::Forward(n) => (x + n, depth + aim * n, aim),
                Command::Down(n) => (x, depth, aim + n),
                Command::Up(n) => (x, depth, aim - n),
            });
        Ok((x * depth).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "150");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "900");
    }

    #[test]
    fn test_unknown_command() {
        let err = Solver::parse("forward 1\nsideways 2\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }
}
