use std::collections::HashSet;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;
use crate::utils::point::{Direction, Point};

/// Rope Bridge
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 9, tags = ["2022", "simulation"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<(Direction, u32)>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines_with(input, |line| {
            let (dir, steps) = line
                .split_once(' ')
                .ok_or_else(|| anyhow!("expected '<U|D|L|R> <steps>'"))?;
            let dir = dir
                .chars()
                .next()
                .and_then(Direction::from_char)
                .ok_or_else(|| anyhow!("unknown direction {dir:?}"))?;
            Ok((dir, steps.trim().parse()?))
        })
    }
}

/// Positions visited by the last of `knots` knots.
fn tail_visits(motions: &[(Direction, u32)], knots: usize) -> usize {
    let mut rope = vec![Point::ZERO; knots];
    let mut visited = HashSet::from([Point::ZERO]);
    for &(dir, steps) in motions {
        for _ in 0..steps {
            rope[0] += dir.delta();
            for i in 1..knots {
                let gap = rope[i - 1] - rope[i];
                if gap.abs().max_element() > 1 {
                    rope[i] += gap.signum();
                }
            }
            visited.insert(rope[knots - 1]);
        }
    }
    visited.len()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tail_visits(shared, 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tail_visits(shared, 10).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "R 4\nU 4\nL 3\nD 1\nR 4\nD 1\nL 5\nR 2\n";
    const LARGER: &str = "R 5\nU 8\nL 8\nD 3\nR 17\nD 10\nL 25\nU 20\n";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "13");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "1");
        assert_eq!(solve::<Solver>(LARGER, 2), "36");
    }
}
