use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Grid;
use crate::utils::point::{Direction, Point};

/// Treetop Tree House
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 8, tags = ["2022", "grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Grid::parse_digits(input)
    }
}

/// Looks from `tree` towards the edge: the number of trees seen, and whether
/// the view reaches the edge unblocked.
fn look(heights: &Grid<u8>, tree: Point, dir: Direction) -> (usize, bool) {
    let height = heights[tree];
    let mut seen = 0;
    let mut p = tree + dir.delta();
    while let Some(&h) = heights.get(p) {
        seen += 1;
        if h >= height {
            return (seen, false);
        }
        p += dir.delta();
    }
    (seen, true)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let heights = &*shared;
        let visible = heights
            .positions()
            .filter(|&p| Direction::ALL.iter().any(|&d| look(heights, p, d).1))
            .count();
        Ok(visible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let heights = &*shared;
        let best = heights
            .positions()
            .map(|p| Direction::ALL.iter().map(|&d| look(heights, p, d).0).product::<usize>())
            .max()
            .unwrap_or(0);
        Ok(best.to_string())
    }
}
