use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use pathfinding::prelude::bfs_reach;

use crate::utils::parse;
use crate::utils::point::{NEIGHBORS3D6, Point3};

/// Boiling Boulders
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 18, tags = ["2022", "3d", "flood-fill"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = HashSet<Point3>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|line| parse::integers_array::<i32, 3>(line).map(Point3::from_array))
            .collect()
    }
}

fn faces(cube: Point3) -> impl Iterator<Item = Point3> {
    NEIGHBORS3D6.into_iter().map(move |d| cube + d)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let open = shared
            .iter()
            .flat_map(|&c| faces(c))
            .filter(|n| !shared.contains(n))
            .count();
        Ok(open.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let droplet = &*shared;
        let Some(first) = droplet.iter().next() else {
            return Ok("0".to_string());
        };
        // Steam fills a box one unit larger than the droplet on every side.
        let (lo, hi) = droplet
            .iter()
            .fold((*first, *first), |(lo, hi), &c| (lo.min(c), hi.max(c)));
        let (lo, hi) = (lo - Point3::ONE, hi + Point3::ONE);
        let inside = |p: &Point3| p.cmpge(lo).all() && p.cmple(hi).all();
        let steam: HashSet<Point3> = bfs_reach(lo, |&p| {
            faces(p)
                .filter(|n| inside(n) && !droplet.contains(n))
                .collect::<Vec<_>>()
        })
        .collect();
        let exterior = droplet
            .iter()
            .flat_map(|&c| faces(c))
            .filter(|n| steam.contains(n))
            .count();
        Ok(exterior.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
2,2,2
1,2,2
3,2,2
2,1,2
2,3,2
2,2,1
2,2,3
2,2,4
2,2,6
1,2,5
3,2,5
2,1,5
2,3,5
";

    #[test]
    fn test_two_cubes() {
        assert_eq!(solve::<Solver>("1,1,1\n2,1,1\n", 1), "10");
    }

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "64");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "58");
    }
}
