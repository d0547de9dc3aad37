use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use pathfinding::prelude::bfs_reach;

use crate::utils::grid::Grid;
use crate::utils::point::Point;

/// Smoke Basin
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 9, tags = ["2021", "grid", "flood-fill"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Grid::parse_digits(input)
    }
}

fn low_points(heights: &Grid<u8>) -> impl Iterator<Item = Point> + '_ {
    heights
        .positions()
        .filter(|&p| heights.neighbors4(p).all(|n| heights[n] > heights[p]))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let heights = &*shared;
        let risk: u32 = low_points(heights).map(|p| u32::from(heights[p]) + 1).sum();
        Ok(risk.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let heights = &*shared;
        // Every basin drains to exactly one low point.
        let mut sizes: Vec<usize> = low_points(heights)
            .map(|low| {
                bfs_reach(low, |&p| {
                    heights
                        .neighbors4(p)
                        .filter(|&n| heights[n] != 9)
                        .collect::<Vec<_>>()
                })
                .count()
            })
            .collect();
        if sizes.len() < 3 {
            return Err(SolveError::failed("fewer than three basins"));
        }
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        Ok(sizes[..3].iter().product::<usize>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
2199943210
3987894921
9856789892
8767896789
9899965678
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "15");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "1134");
    }
}
