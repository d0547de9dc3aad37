use anyhow::ensure;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Rucksack Reorganization
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 3, tags = ["2022", "bits"])]
pub struct Solver;

/// Set of item priorities `1..=52` as bits.
type Items = u64;

fn items(text: &str) -> anyhow::Result<Items> {
    text.bytes().try_fold(0, |set, b| {
        let priority = match b {
            b'a'..=b'z' => b - b'a' + 1,
            b'A'..=b'Z' => b - b'A' + 27,
            _ => anyhow::bail!("unexpected item {:?}", b as char),
        };
        Ok(set | 1 << priority)
    })
}

impl AocParser for Solver {
    /// Compartment item sets per rucksack.
    type SharedData<'a> = Vec<(Items, Items)>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines_with(input, |line| {
            let line = line.trim();
            ensure!(line.len() % 2 == 0, "odd number of items");
            let (left, right) = line.split_at(line.len() / 2);
            Ok((items(left)?, items(right)?))
        })
    }
}

/// Priority of the single item in `set`.
fn priority(set: Items) -> Result<u32, SolveError> {
    if set.count_ones() == 1 {
        Ok(set.trailing_zeros())
    } else {
        Err(SolveError::failed(format!("expected one shared item, found {}", set.count_ones())))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .map(|&(left, right)| priority(left & right))
            .sum::<Result<u32, _>>()
            .map(|total| total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.len() % 3 != 0 {
            return Err(SolveError::failed("rucksacks do not split into groups of three"));
        }
        shared
            .chunks_exact(3)
            .map(|group| priority(group.iter().fold(!0, |acc, &(l, r)| acc & (l | r))))
            .sum::<Result<u32, _>>()
            .map(|total| total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "157");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "70");
    }
}
