use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// The Treachery of Whales
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 7, tags = ["2021", "optimization"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut crabs: Vec<i64> = parse::separated(input, ',')?;
        if crabs.is_empty() {
            return Err(ParseError::MissingData("no crabs".into()));
        }
        crabs.sort_unstable();
        Ok(crabs)
    }
}

fn cheapest(crabs: &[i64], cost: impl Fn(i64) -> i64) -> i64 {
    let (lo, hi) = (crabs[0], crabs[crabs.len() - 1]);
    (lo..=hi)
        .map(|target| crabs.iter().map(|&c| cost((c - target).abs())).sum())
        .min()
        .unwrap_or(0)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Linear cost is minimised at the median.
        let median = shared[shared.len() / 2];
        let fuel: i64 = shared.iter().map(|c| (c - median).abs()).sum();
        Ok(fuel.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(cheapest(shared, |d| d * (d + 1) / 2).to_string())
    }
}
