use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse;

/// It Hangs in the Balance
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 24, tags = ["2015", "subset-sum"])]
pub struct Solver;

impl AocParser for Solver {
    /// Package weights, heaviest first.
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut weights: Vec<u64> = parse::lines(input)?;
        weights.sort_unstable_by(|a, b| b.cmp(a));
        Ok(weights)
    }
}

/// Whether some subset of `weights` (heaviest first) sums to exactly `target`.
fn subset_sums_to(weights: &[u64], target: u64) -> bool {
    match weights.split_first() {
        _ if target == 0 => true,
        None => false,
        Some((&w, rest)) => {
            (w <= target && subset_sums_to(rest, target - w)) || subset_sums_to(rest, target)
        }
    }
}

/// Whether `weights` splits into `groups` groups of `target` each.
fn splits(weights: &[u64], target: u64, groups: usize) -> bool {
    if groups <= 1 {
        return weights.iter().sum::<u64>() == target * groups as u64;
    }
    if groups == 2 {
        return subset_sums_to(weights, target);
    }
    (1..weights.len()).any(|size| {
        (0..weights.len()).combinations(size).any(|picked| {
            picked.iter().map(|&i| weights[i]).sum::<u64>() == target && {
                let rest: Vec<u64> = (0..weights.len())
                    .filter(|i| !picked.contains(i))
                    .map(|i| weights[i])
                    .collect();
                splits(&rest, target, groups - 1)
            }
        })
    })
}

/// Smallest quantum entanglement of a passenger group of minimal size that
/// leaves the rest balanced across the other `groups - 1` compartments.
fn best_entanglement(weights: &[u64], groups: usize) -> Option<u64> {
    let total: u64 = weights.iter().sum();
    if groups == 0 || total % groups as u64 != 0 {
        return None;
    }
    let target = total / groups as u64;
    (1..=weights.len()).find_map(|size| {
        (0..weights.len())
            .combinations(size)
            .filter(|picked| picked.iter().map(|&i| weights[i]).sum::<u64>() == target)
            .map(|picked| {
                let entanglement: u64 = picked.iter().map(|&i| weights[i]).product();
                (entanglement, picked)
            })
            .sorted_unstable_by_key(|&(entanglement, _)| entanglement)
            .find(|(_, picked)| {
                let rest: Vec<u64> = (0..weights.len())
                    .filter(|i| !picked.contains(i))
                    .map(|i| weights[i])
                    .collect();
                splits(&rest, target, groups - 1)
            })
            .map(|(entanglement, _)| entanglement)
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        best_entanglement(shared, 3)
            .map(|qe| qe.to_string())
            .ok_or_else(|| SolveError::failed("packages cannot be balanced three ways"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        best_entanglement(shared, 4)
            .map(|qe| qe.to_string())
            .ok_or_else(|| SolveError::failed("packages cannot be balanced four ways"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "1\n2\n3\n4\n5\n7\n8\n9\n10\n11\n";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "99");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "44");
    }

    #[test]
    fn test_unbalanced() {
        assert_eq!(best_entanglement(&[1, 2, 4], 3), None);
        assert!(!splits(&[5, 5, 2], 6, 2));
    }
}
