use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Grid;
use crate::utils::point::Point;

/// Like a GIF For Your Yard
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 18, tags = ["2015", "grid", "cellular-automaton"])]
pub struct Solver;

const STEPS: usize = 100;

impl AocParser for Solver {
    type SharedData<'a> = Grid<bool>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Grid::parse_with(input, |c| match c {
            '#' => Some(true),
            '.' => Some(false),
            _ => None,
        })
    }
}

fn corners(lights: &Grid<bool>) -> [Point; 4] {
    let (w, h) = (lights.width() as i32 - 1, lights.height() as i32 - 1);
    [Point::new(0, 0), Point::new(w, 0), Point::new(0, h), Point::new(w, h)]
}

fn animate(lights: &Grid<bool>, steps: usize, stuck_corners: bool) -> usize {
    let mut lights = lights.clone();
    let stick = |lights: &mut Grid<bool>| {
        if stuck_corners {
            for corner in corners(lights) {
                lights[corner] = true;
            }
        }
    };
    stick(&mut lights);
    for _ in 0..steps {
        lights = lights.map(|p, &on| {
            let lit = lights.neighbors8(p).filter(|&n| lights[n]).count();
            lit == 3 || (on && lit == 2)
        });
        stick(&mut lights);
    }
    lights.values().filter(|&&on| on).count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(animate(shared, STEPS, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(animate(shared, STEPS, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
.#.#.#
...##.
#....#
..#...
#.#..#
####..
";

    #[test]
    fn test_animation() {
        let lights = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(animate(&lights, 4, false), 4);
    }

    #[test]
    fn test_stuck_corners() {
        let lights = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(animate(&lights, 5, true), 17);
    }
}
