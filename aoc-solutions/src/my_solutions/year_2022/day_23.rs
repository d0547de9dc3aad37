use std::collections::{HashMap, HashSet};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Grid;
use crate::utils::point::{Direction, Point, neighbors8};

/// Unstable Diffusion
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 23, tags = ["2022", "cellular-automaton"])]
pub struct Solver;

const PROPOSAL_ORDER: [Direction; 4] = [Direction::North, Direction::South, Direction::West, Direction::East];

impl AocParser for Solver {
    type SharedData<'a> = HashSet<Point>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let scan = Grid::parse_with(input, |c| match c {
            '#' => Some(true),
            '.' => Some(false),
            _ => None,
        })?;
        Ok(scan.iter().filter(|(_, elf)| **elf).map(|(p, _)| p).collect())
    }
}

/// The three cells an elf checks before proposing a step towards `dir`.
fn facing(p: Point, dir: Direction) -> [Point; 3] {
    let ahead = p + dir.delta();
    let side = dir.turn_right().delta();
    [ahead - side, ahead, ahead + side]
}

/// Plays one round; returns whether any elf moved.
fn round(elves: &mut HashSet<Point>, first_choice: usize) -> bool {
    let mut proposals: HashMap<Point, Vec<Point>> = HashMap::new();
    for &elf in elves.iter() {
        if neighbors8(elf).all(|n| !elves.contains(&n)) {
            continue;
        }
        let choice = (0..4)
            .map(|i| PROPOSAL_ORDER[(first_choice + i) % 4])
            .find(|&dir| facing(elf, dir).iter().all(|n| !elves.contains(n)));
        if let Some(dir) = choice {
            proposals.entry(elf + dir.delta()).or_default().push(elf);
        }
    }
    let mut moved = false;
    for (to, from) in proposals {
        if let [from] = from[..] {
            elves.remove(&from);
            elves.insert(to);
            moved = true;
        }
    }
    moved
}

fn empty_ground(elves: &HashSet<Point>) -> i64 {
    let Some(&first) = elves.iter().next() else {
        return 0;
    };
    let (lo, hi) = elves.iter().fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p)));
    let size = hi - lo + Point::ONE;
    i64::from(size.x) * i64::from(size.y) - elves.len() as i64
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut elves = shared.clone();
        for r in 0..10 {
            round(&mut elves, r % 4);
        }
        Ok(empty_ground(&elves).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut elves = shared.clone();
        let mut r = 0;
        while round(&mut elves, r % 4) {
            r += 1;
        }
        Ok((r + 1).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
....#..
..###.#
#...#.#
.#...##
#.###..
##.#.##
.#..#..
";

    #[test]
    fn test_facing() {
        let north = facing(Point::ZERO, Direction::North);
        assert!(north.contains(&Point::new(-1, -1)) && north.contains(&Point::new(1, -1)));
    }

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "110");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "20");
    }
}
