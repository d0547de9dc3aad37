use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Grid;
use crate::utils::point::{NEIGHBORS8, Point};

/// Seating System
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 11, tags = ["2020", "grid", "cellular-automaton"])]
pub struct Solver;

impl AocParser for Solver {
    /// `true` marks a seat, `false` floor.
    type SharedData<'a> = Grid<bool>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Grid::parse_with(input, |c| match c {
            'L' => Some(true),
            '.' => Some(false),
            _ => None,
        })
    }
}

/// The seats each seat watches, as indices into the seat list.
struct Hall {
    watched: Vec<Vec<usize>>,
}

impl Hall {
    /// `far` looks past floor along each direction; otherwise only adjacent seats count.
    fn new(layout: &Grid<bool>, far: bool) -> Self {
        let seats: Vec<Point> = layout.positions().filter(|&p| layout[p]).collect();
        let index = layout.map(|p, _| seats.binary_search_by_key(&(p.y, p.x), |s| (s.y, s.x)).ok());
        let watched = seats
            .iter()
            .map(|&seat| {
                NEIGHBORS8
                    .iter()
                    .filter_map(|&d| {
                        let mut p = seat + d;
                        while far && layout.get(p) == Some(&false) {
                            p += d;
                        }
                        index.get(p).copied().flatten()
                    })
                    .collect()
            })
            .collect();
        Self { watched }
    }

    /// Runs until nothing changes and counts occupied seats.
    fn settle(&self, tolerance: usize) -> usize {
        let mut occupied = vec![false; self.watched.len()];
        loop {
            let next: Vec<bool> = self
                .watched
                .iter()
                .zip(&occupied)
                .map(|(watched, &taken)| {
                    let busy = watched.iter().filter(|&&i| occupied[i]).count();
                    if taken { busy < tolerance } else { busy == 0 }
                })
                .collect();
            if next == occupied {
                return occupied.into_iter().filter(|&o| o).count();
            }
            occupied = next;
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(Hall::new(shared, false).settle(4).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(Hall::new(shared, true).settle(5).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
L.LL.LL.LL
LLLLLLL.LL
L.L.L..L..
LLLL.LL.LL
L.LL.LL.LL
L.LLLLL.LL
..L.L.....
LLLLLLLLLL
L.LLLLLL.L
L.LLLLL.LL
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "37");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "26");
    }
}
