use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse;
use crate::utils::point::Point;

/// Regolith Reservoir
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 14, tags = ["2022", "simulation"])]
pub struct Solver;

const SOURCE: Point = Point::new(500, 0);
/// Sand tries straight down, then down-left, then down-right.
const FALLS: [Point; 3] = [Point::new(0, 1), Point::new(-1, 1), Point::new(1, 1)];

#[derive(Debug)]
pub struct Cave {
    rock: HashSet<Point>,
    lowest: i32,
}

impl AocParser for Solver {
    type SharedData<'a> = Cave;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut rock = HashSet::new();
        for line in input.lines().filter(|l| !l.trim().is_empty()) {
            let corners: Vec<Point> = parse::integers::<i32>(line)?
                .chunks(2)
                .map(|xy| match xy {
                    [x, y] => Ok(Point::new(*x, *y)),
                    _ => Err(ParseError::InvalidFormat(format!("odd coordinate count in {line:?}"))),
                })
                .collect::<Result<_, _>>()?;
            for (a, b) in corners.iter().tuple_windows() {
                let step = (*b - *a).signum();
                if step.x != 0 && step.y != 0 {
                    return Err(ParseError::InvalidFormat(format!("diagonal wall in {line:?}")));
                }
                let mut p = *a;
                rock.insert(p);
                while p != *b {
                    p += step;
                    rock.insert(p);
                }
            }
        }
        let lowest = rock
            .iter()
            .map(|p| p.y)
            .max()
            .ok_or_else(|| ParseError::MissingData("no rock".into()))?;
        Ok(Cave { rock, lowest })
    }
}

/// Grains that come to rest. With `floor`, an infinite floor lies two below
/// the lowest rock and pouring stops once the source is covered; without it
/// pouring stops at the first grain that falls past all rock.
fn pour(cave: &Cave, floor: bool) -> usize {
    let mut blocked = cave.rock.clone();
    let bottom = cave.lowest + 1;
    let mut rested = 0;
    while !blocked.contains(&SOURCE) {
        let mut grain = SOURCE;
        while let Some(next) = FALLS
            .iter()
            .map(|&d| grain + d)
            .find(|p| !blocked.contains(p))
        {
            if grain.y == bottom {
                break;
            }
            grain = next;
        }
        if grain.y == bottom && !floor {
            break;
        }
        blocked.insert(grain);
        rested += 1;
    }
    rested
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(pour(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(pour(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
498,4 -> 498,6 -> 496,6
503,4 -> 502,4 -> 502,9 -> 494,9
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "24");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "93");
    }
}
