use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::ParseResultExt;

/// Infinite Elves and Infinite Houses
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 20, tags = ["2015", "sieve"])]
pub struct Solver;

impl AocParser for Solver {
    /// Minimum number of presents.
    type SharedData<'a> = u64;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input.trim().parse().invalid_format()
    }
}

/// First house receiving at least `target` presents, when elf `n` leaves
/// `per_elf * n` presents at each of its houses, stopping after `limit` houses.
fn first_house(target: u64, per_elf: u64, limit: Option<usize>) -> Option<usize> {
    // House `target / per_elf` alone is visited by an elf carrying enough.
    let houses = (target / per_elf) as usize + 1;
    let mut presents = vec![0u64; houses + 1];
    for elf in 1..=houses {
        let visits = (elf..=houses).step_by(elf).take(limit.unwrap_or(usize::MAX));
        for house in visits {
            presents[house] += per_elf * elf as u64;
        }
    }
    presents
        .iter()
        .enumerate()
        .skip(1)
        .find(|&(_, &p)| p >= target)
        .map(|(house, _)| house)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        first_house(*shared, 10, None)
            .map(|house| house.to_string())
            .ok_or_else(|| SolveError::failed("no house gets enough presents"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        first_house(*shared, 11, Some(50))
            .map(|house| house.to_string())
            .ok_or_else(|| SolveError::failed("no house gets enough presents"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_houses() {
        assert_eq!(first_house(10, 10, None), Some(1));
        assert_eq!(first_house(70, 10, None), Some(4));
        assert_eq!(first_house(130, 10, None), Some(8));
        assert_eq!(first_house(150, 10, None), Some(8));
    }

    #[test]
    fn test_lazy_elves() {
        // elf 1 stops after house 2, so house 3 only gets elf 3's 33
        assert_eq!(first_house(34, 11, None), Some(3));
        assert_eq!(first_house(34, 11, Some(2)), Some(4));
    }
}
