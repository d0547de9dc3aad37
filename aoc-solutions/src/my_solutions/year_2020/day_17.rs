use std::collections::{HashMap, HashSet};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid::Grid;

/// Conway Cubes
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 17, tags = ["2020", "cellular-automaton"])]
pub struct Solver;

const CYCLES: usize = 6;

/// `[x, y, z, w]`; the 3D pocket dimension keeps `w` at zero.
type Cube = [i32; 4];

impl AocParser for Solver {
    type SharedData<'a> = Vec<Cube>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let slice = Grid::parse_with(input, |c| match c {
            '#' => Some(true),
            '.' => Some(false),
            _ => None,
        })?;
        Ok(slice
            .iter()
            .filter(|&(_, &active)| active)
            .map(|(p, _)| [p.x, p.y, 0, 0])
            .collect())
    }
}

/// Neighbour offsets in the first `dims` axes.
fn offsets(dims: usize) -> Vec<Cube> {
    (0..dims)
        .map(|_| -1..=1)
        .multi_cartesian_product()
        .filter(|d| d.iter().any(|&v| v != 0))
        .map(|d| {
            let mut offset = [0; 4];
            offset[..dims].copy_from_slice(&d);
            offset
        })
        .collect()
}

fn boot(initial: &[Cube], dims: usize) -> usize {
    let offsets = offsets(dims);
    let mut active: HashSet<Cube> = initial.iter().copied().collect();
    for _ in 0..CYCLES {
        let mut counts: HashMap<Cube, u8> = HashMap::new();
        for cube in &active {
            for d in &offsets {
                let neighbour = std::array::from_fn(|i| cube[i] + d[i]);
                *counts.entry(neighbour).or_default() += 1;
            }
        }
        active = counts
            .into_iter()
            .filter(|(cube, n)| *n == 3 || (*n == 2 && active.contains(cube)))
            .map(|(cube, _)| cube)
            .collect();
    }
    active.len()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(boot(shared, 3).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(boot(shared, 4).to_string())
    }
}
