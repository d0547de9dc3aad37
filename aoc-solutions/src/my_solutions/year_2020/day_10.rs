use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::dp_cache::{DpCache, DpProblem, VecBackend};
use crate::utils::parse;

/// Adapter Array
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 10, tags = ["2020", "dynamic-programming"])]
pub struct Solver;

impl AocParser for Solver {
    /// The outlet, every adapter in ascending order, then the device.
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut chain: Vec<u32> = parse::lines(input)?;
        chain.push(0);
        chain.sort_unstable();
        if let Some(&highest) = chain.last() {
            chain.push(highest + 3);
        }
        Ok(chain)
    }
}

/// Number of ways to reach each adapter from the outlet.
struct Arrangements<'a> {
    chain: &'a [u32],
}

impl DpProblem<usize, u64> for Arrangements<'_> {
    fn deps(&self, &idx: &usize) -> Vec<usize> {
        (idx.saturating_sub(3)..idx)
            .filter(|&prev| self.chain[idx] - self.chain[prev] <= 3)
            .collect()
    }

    fn compute(&self, &idx: &usize, deps: Vec<u64>) -> u64 {
        if idx == 0 { 1 } else { deps.iter().sum() }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let gaps = shared.iter().tuple_windows().map(|(a, b)| b - a).counts();
        let get = |gap: u32| gaps.get(&gap).copied().unwrap_or(0);
        Ok((get(1) * get(3)).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let cache = DpCache::with_problem(
            VecBackend::with_capacity(shared.len()),
            Arrangements { chain: shared },
        );
        Ok(cache.get(&(shared.len() - 1)).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const SMALL: &str = "16\n10\n15\n5\n1\n11\n7\n19\n6\n12\n4\n";

    const LARGE: &str = "\
28\n33\n18\n42\n31\n14\n46\n20\n48\n47\n24\n23\n49\n45\n19\n38\n39\n11\n1\n32\n25\n35\n8\n17\n7\n9\n4\n2\n34\n10\n3\n";

    #[test]
    fn test_small_example() {
        assert_eq!(solve::<Solver>(SMALL, 1), "35");
        assert_eq!(solve::<Solver>(SMALL, 2), "8");
    }

    #[test]
    fn test_large_example() {
        assert_eq!(solve::<Solver>(LARGE, 1), "220");
        assert_eq!(solve::<Solver>(LARGE, 2), "19208");
    }
}
