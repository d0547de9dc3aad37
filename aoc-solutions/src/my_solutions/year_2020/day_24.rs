use std::collections::{HashMap, HashSet};

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;
use crate::utils::point::Point;

/// Lobby Layout
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 24, tags = ["2020", "hex-grid", "cellular-automaton"])]
pub struct Solver;

const STEPS: [&str; 6] = ["e", "w", "ne", "nw", "se", "sw"];

/// Axial hex offsets, in the same order as `STEPS`.
const HEX_NEIGHBORS: [Point; 6] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(1, -1),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 1),
];

fn locate(path: &str) -> anyhow::Result<Point> {
    let mut tile = Point::ZERO;
    let mut rest = path.trim();
    while !rest.is_empty() {
        let len = if rest.starts_with(['n', 's']) { 2 } else { 1 };
        let step = rest.get(..len).ok_or_else(|| anyhow!("truncated step {rest:?}"))?;
        let idx = STEPS
            .iter()
            .position(|&s| s == step)
            .ok_or_else(|| anyhow!("unknown step {step:?}"))?;
        tile += HEX_NEIGHBORS[idx];
        rest = &rest[len..];
    }
    Ok(tile)
}

impl AocParser for Solver {
    /// Tiles flipped an odd number of times.
    type SharedData<'a> = HashSet<Point>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut black = HashSet::new();
        for tile in parse::lines_with(input, locate)? {
            if !black.remove(&tile) {
                black.insert(tile);
            }
        }
        Ok(black)
    }
}

fn live(mut black: HashSet<Point>, days: usize) -> usize {
    for _ in 0..days {
        let mut counts: HashMap<Point, u8> = HashMap::new();
        for &tile in &black {
            for d in HEX_NEIGHBORS {
                *counts.entry(tile + d).or_default() += 1;
            }
        }
        black = counts
            .into_iter()
            .filter(|(tile, n)| *n == 2 || (*n == 1 && black.contains(tile)))
            .map(|(tile, _)| tile)
            .collect();
    }
    black.len()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(live(shared.clone(), 100).to_string())
    }
}
