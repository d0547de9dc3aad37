use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Grid;
use crate::utils::point::{Point, manhattan};
use crate::utils::search::{self, Move, SearchProblem};

/// Chiton
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 15, tags = ["2021", "grid", "shortest-path"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Grid::parse_digits(input)
    }
}

/// The cave tiled `tiles` times in each direction, risk rising by one per tile
/// and wrapping from 9 back to 1.
struct Cave<'a> {
    risk: &'a Grid<u8>,
    tiles: i32,
}

impl Cave<'_> {
    fn size(&self) -> Point {
        Point::new(self.risk.width() as i32, self.risk.height() as i32) * self.tiles
    }

    fn risk_at(&self, p: Point) -> Option<u32> {
        let tile = Point::new(self.risk.width() as i32, self.risk.height() as i32);
        let size = self.size();
        if p.x < 0 || p.y < 0 || p.x >= size.x || p.y >= size.y {
            return None;
        }
        let base = u32::from(self.risk[p % tile]);
        let bump = (p.x / tile.x + p.y / tile.y) as u32;
        Some((base + bump - 1) % 9 + 1)
    }
}

impl SearchProblem for Cave<'_> {
    type State = Point;
    type Cost = u32;

    fn start(&self) -> Point {
        Point::ZERO
    }

    fn moves(&self, &p: &Point) -> Vec<Move<Point, u32>> {
        crate::utils::point::neighbors4(p)
            .filter_map(|n| self.risk_at(n).map(|risk| Move::new(n, risk)))
            .collect()
    }

    fn is_goal(&self, &p: &Point) -> bool {
        p == self.size() - Point::ONE
    }

    fn heuristic(&self, &p: &Point) -> u32 {
        manhattan(p, self.size() - Point::ONE) as u32
    }
}

fn lowest_risk(risk: &Grid<u8>, tiles: i32) -> Result<String, SolveError> {
    search::lowest_cost(&Cave { risk, tiles })
        .map(|cost| cost.to_string())
        .ok_or_else(|| SolveError::failed("exit unreachable"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        lowest_risk(shared, 1)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        lowest_risk(shared, 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581
";

    #[test]
    fn test_tiled_risk_wraps() {
        let grid = Grid::parse_digits("8").unwrap();
        let cave = Cave { risk: &grid, tiles: 5 };
        let row: Vec<_> = (0..5).map(|x| cave.risk_at(Point::new(x, 0)).unwrap()).collect();
        assert_eq!(row, vec![8, 9, 1, 2, 3]);
        assert_eq!(cave.risk_at(Point::new(5, 0)), None);
    }

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "40");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "315");
    }
}
