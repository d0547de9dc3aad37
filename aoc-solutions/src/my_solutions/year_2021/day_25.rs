use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Grid;
use crate::utils::point::Point;

/// Sea Cucumber
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2021, day = 25, tags = ["2021", "grid", "cellular-automaton"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    East,
    South,
}

impl AocParser for Solver {
    type SharedData<'a> = Grid<Cell>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Grid::parse_with(input, |c| match c {
            '.' => Some(Cell::Empty),
            '>' => Some(Cell::East),
            'v' => Some(Cell::South),
            _ => None,
        })
    }
}

/// Moves one herd at once; the seafloor wraps at both edges.
fn move_herd(floor: &mut Grid<Cell>, herd: Cell, step: Point) -> bool {
    let size = Point::new(floor.width() as i32, floor.height() as i32);
    let movers: Vec<(Point, Point)> = floor
        .iter()
        .filter(|&(_, &cell)| cell == herd)
        .map(|(p, _)| (p, (p + step) % size))
        .filter(|&(_, to)| floor[to] == Cell::Empty)
        .collect();
    for &(from, to) in &movers {
        floor[from] = Cell::Empty;
        floor[to] = herd;
    }
    !movers.is_empty()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut floor = shared.clone();
        let mut steps = 1;
        loop {
            let east = move_herd(&mut floor, Cell::East, Point::X);
            let south = move_herd(&mut floor, Cell::South, Point::Y);
            if !east && !south {
                return Ok(steps.to_string());
            }
            steps += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
v...>>.vv>
.vv>>.vv..
>>.>v>...v
>>v>>.>.v.
v>v.vv.v..
>.>>..v...
.vv..>.>v.
v.v..>>v.v
....v..v.>
";

    #[test]
    fn test_wraps_around() {
        let mut floor = Solver::parse("..>>").unwrap();
        assert!(move_herd(&mut floor, Cell::East, Point::X));
        assert_eq!(floor, Solver::parse(">.>.").unwrap());
    }

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "58");
    }
}
