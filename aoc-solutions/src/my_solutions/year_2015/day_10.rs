use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

/// Elves Look, Elves Say
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 10, tags = ["2015", "sequence"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect::<Option<Vec<_>>>()
            .filter(|digits| !digits.is_empty())
            .ok_or_else(|| ParseError::InvalidFormat("expected a string of digits".into()))
    }
}

fn look_and_say(digits: &[u8]) -> Vec<u8> {
    digits
        .iter()
        .dedup_with_count()
        .flat_map(|(count, &digit)| [count as u8, digit])
        .collect()
}

fn length_after(digits: &[u8], rounds: usize) -> usize {
    (0..rounds)
        .fold(digits.to_vec(), |seq, _| look_and_say(&seq))
        .len()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(length_after(shared, 40).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(length_after(shared, 50).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds() {
        assert_eq!(look_and_say(&[1]), vec![1, 1]);
        assert_eq!(look_and_say(&[1, 2, 1, 1]), vec![1, 1, 1, 2, 2, 1]);
        assert_eq!(look_and_say(&[1, 1, 1, 2, 2, 1]), vec![3, 1, 2, 2, 1, 1]);
        assert_eq!(length_after(&[1], 5), 6);
    }
}
