use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Grove Positioning System
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 20, tags = ["2022", "simulation"])]
pub struct Solver;

const DECRYPTION_KEY: i64 = 811_589_153;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let numbers: Vec<i64> = parse::lines(input)?;
        match numbers.iter().filter(|&&n| n == 0).count() {
            1 => Ok(numbers),
            zeros => Err(ParseError::InvalidFormat(format!("expected exactly one 0, found {zeros}"))),
        }
    }
}

/// Mixes `rounds` times and sums the 1000th, 2000th and 3000th numbers after 0.
fn grove_coordinates(numbers: &[i64], key: i64, rounds: usize) -> i64 {
    let values: Vec<i64> = numbers.iter().map(|n| n * key).collect();
    let len = values.len();
    // `order` holds indices into `values` in their current circular order.
    let mut order: Vec<usize> = (0..len).collect();
    for _ in 0..rounds {
        for (id, &value) in values.iter().enumerate() {
            let Some(at) = order.iter().position(|&o| o == id) else {
                continue;
            };
            order.remove(at);
            let to = (at as i64 + value).rem_euclid(len as i64 - 1) as usize;
            order.insert(to, id);
        }
    }
    let Some(zero) = order.iter().position(|&o| values[o] == 0) else {
        return 0;
    };
    [1000, 2000, 3000]
        .iter()
        .map(|offset| values[order[(zero + offset) % len]])
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.len() < 2 {
            return Err(SolveError::failed("nothing to mix"));
        }
        Ok(grove_coordinates(shared, 1, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.len() < 2 {
            return Err(SolveError::failed("nothing to mix"));
        }
        Ok(grove_coordinates(shared, DECRYPTION_KEY, 10).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "1\n2\n-3\n3\n-2\n0\n4\n";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "3");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "1623178306");
    }

    #[test]
    fn test_needs_single_zero() {
        assert!(Solver::parse("1\n2\n").is_err());
    }
}
