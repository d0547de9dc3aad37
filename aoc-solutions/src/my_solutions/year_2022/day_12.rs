use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use pathfinding::prelude::bfs;

use crate::utils::grid::Grid;
use crate::utils::point::Point;

/// Hill Climbing Algorithm
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 12, tags = ["2022", "grid", "bfs"])]
pub struct Solver;

#[derive(Debug)]
pub struct Heightmap {
    elevation: Grid<u8>,
    start: Point,
    end: Point,
}

impl AocParser for Solver {
    type SharedData<'a> = Heightmap;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let marks = Grid::parse_with(input, |c| (c.is_ascii_lowercase() || c == 'S' || c == 'E').then_some(c))?;
        let find = |mark: char| {
            marks
                .find(|&c| c == mark)
                .ok_or_else(|| ParseError::MissingData(format!("no '{mark}' on the map")))
        };
        let (start, end) = (find('S')?, find('E')?);
        let elevation = marks.map(|_, &c| match c {
            'S' => 0,
            'E' => 25,
            c => c as u8 - b'a',
        });
        Ok(Heightmap { elevation, start, end })
    }
}

impl Heightmap {
    /// Fewest steps from any square satisfying `reached` up to the summit,
    /// found by searching backwards from the summit.
    fn descend(&self, reached: impl Fn(Point) -> bool) -> Option<usize> {
        let path = bfs(
            &self.end,
            |&p| {
                let here = self.elevation[p];
                self.elevation
                    .neighbors4(p)
                    .filter(|&n| self.elevation[n] + 1 >= here)
                    .collect::<Vec<_>>()
            },
            |&p| reached(p),
        )?;
        Some(path.len() - 1)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let start = shared.start;
        shared
            .descend(|p| p == start)
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::failed("start cannot reach the summit"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let map = &*shared;
        map.descend(|p| map.elevation[p] == 0)
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::failed("no lowland square reaches the summit"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "31");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "29");
    }

    #[test]
    fn test_missing_summit() {
        assert!(matches!(Solver::parse("Sab\nabc"), Err(ParseError::MissingData(_))));
    }
}
