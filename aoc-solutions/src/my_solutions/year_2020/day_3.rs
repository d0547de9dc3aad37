use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Grid;
use crate::utils::point::Point;

/// Toboggan Trajectory
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 3, tags = ["2020", "grid"])]
pub struct Solver;

const SLOPES: [(i32, i32); 5] = [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)];

impl AocParser for Solver {
    /// `true` marks a tree.
    type SharedData<'a> = Grid<bool>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Grid::parse_with(input, |c| match c {
            '#' => Some(true),
            '.' => Some(false),
            _ => None,
        })
    }
}

/// Trees hit going `right, down` per step; the map repeats to the right.
fn trees(map: &Grid<bool>, (right, down): (i32, i32)) -> usize {
    let width = map.width() as i32;
    (0..map.height() as i32)
        .step_by(down as usize)
        .enumerate()
        .filter(|&(step, y)| map[Point::new(step as i32 * right % width, y)])
        .count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(trees(shared, (3, 1)).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product: usize = SLOPES.iter().map(|&slope| trees(shared, slope)).product();
        Ok(product.to_string())
    }
}
