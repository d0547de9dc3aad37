use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::point::{Direction, Point};

/// Perfectly Spherical Houses in a Vacuum
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 3, tags = ["2015", "grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Direction>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .chars()
            .map(|c| {
                Direction::from_char(c)
                    .filter(|_| "^>v<".contains(c))
                    .ok_or_else(|| ParseError::InvalidFormat(format!("unexpected {c:?}")))
            })
            .collect()
    }
}

/// Houses visited when `santas` take turns following the directions.
fn visited(moves: &[Direction], santas: usize) -> usize {
    let mut positions = vec![Point::ZERO; santas];
    let mut houses = HashSet::from([Point::ZERO]);
    for (turn, dir) in moves.iter().enumerate() {
        let santa = &mut positions[turn % santas];
        *santa += dir.delta();
        houses.insert(*santa);
    }
    houses.len()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(visited(shared, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(visited(shared, 2).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    #[test]
    fn test_single_santa() {
        assert_eq!(solve::<Solver>(">", 1), "2");
        assert_eq!(solve::<Solver>("^>v<", 1), "4");
        assert_eq!(solve::<Solver>("^v^v^v^v^v", 1), "2");
    }

    #[test]
    fn test_robo_santa() {
        assert_eq!(solve::<Solver>("^v", 2), "3");
        assert_eq!(solve::<Solver>("^>v<", 2), "3");
        assert_eq!(solve::<Solver>("^v^v^v^v^v", 2), "11");
    }
}
