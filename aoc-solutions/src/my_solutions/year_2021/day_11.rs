use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Grid;

/// Dumbo Octopus
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 11, tags = ["2021", "grid", "cellular-automaton"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Grid::parse_digits(input)
    }
}

/// Advances one step and returns how many octopuses flashed.
fn step(energy: &mut Grid<u8>) -> usize {
    let mut ready = Vec::new();
    for p in energy.positions() {
        energy[p] += 1;
        if energy[p] > 9 {
            ready.push(p);
        }
    }
    let mut flashed = 0;
    while let Some(p) = ready.pop() {
        flashed += 1;
        let neighbors: Vec<_> = energy.neighbors8(p).collect();
        for n in neighbors {
            // Levels above 9 have already flashed or are queued.
            if energy[n] <= 9 {
                energy[n] += 1;
                if energy[n] > 9 {
                    ready.push(n);
                }
            }
        }
    }
    for p in energy.positions() {
        if energy[p] > 9 {
            energy[p] = 0;
        }
    }
    flashed
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut energy = shared.clone();
        let total: usize = (0..100).map(|_| step(&mut energy)).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut energy = shared.clone();
        let everyone = energy.width() * energy.height();
        let first = (1..).find(|_| step(&mut energy) == everyone).unwrap_or_default();
        Ok(first.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
5483143223
2745854711
5264556173
6141336146
6357385478
4167524645
2176841721
6882881134
4846848554
5283751526
";

    #[test]
    fn test_small_step() {
        let mut energy = Grid::parse_digits("11111\n19991\n19191\n19991\n11111").unwrap();
        assert_eq!(step(&mut energy), 9);
        assert_eq!(energy, Grid::parse_digits("34543\n40004\n50005\n40004\n34543").unwrap());
    }

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "1656");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "195");
    }
}
