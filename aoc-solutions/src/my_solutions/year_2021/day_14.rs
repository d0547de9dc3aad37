use std::collections::HashMap;

use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse;

/// Extended Polymerization
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 14, tags = ["2021", "counting"])]
pub struct Solver;

#[derive(Debug)]
pub struct Polymer {
    template: Vec<u8>,
    rules: HashMap<(u8, u8), u8>,
}

impl AocParser for Solver {
    type SharedData<'a> = Polymer;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let (template, rules) = parse::split_pair(input.trim(), "\n\n")?;
        let template = template.trim().as_bytes().to_vec();
        if template.is_empty() {
            return Err(ParseError::MissingData("empty template".into()));
        }
        let rules = parse::lines_with(rules, |line| {
            let (pair, insert) = line.split_once(" -> ").ok_or_else(|| anyhow!("expected 'AB -> C'"))?;
            let (pair, insert) = (pair.trim().as_bytes(), insert.trim().as_bytes());
            ensure!(pair.len() == 2 && insert.len() == 1, "expected 'AB -> C'");
            Ok(((pair[0], pair[1]), insert[0]))
        })?;
        Ok(Polymer {
            template,
            rules: rules.into_iter().collect(),
        })
    }
}

/// Most common minus least common element after `steps` insertions.
/// Only pair counts are tracked; each element is counted as the first of its pair.
fn spread(polymer: &Polymer, steps: usize) -> u64 {
    let mut pairs: HashMap<(u8, u8), u64> = polymer
        .template
        .iter()
        .copied()
        .tuple_windows()
        .counts()
        .into_iter()
        .map(|(pair, n)| (pair, n as u64))
        .collect();
    for _ in 0..steps {
        let mut next = HashMap::with_capacity(pairs.len());
        for ((a, b), n) in pairs {
            match polymer.rules.get(&(a, b)) {
                Some(&c) => {
                    *next.entry((a, c)).or_default() += n;
                    *next.entry((c, b)).or_default() += n;
                }
                None => *next.entry((a, b)).or_default() += n,
            }
        }
        pairs = next;
    }

    let mut elements: HashMap<u8, u64> = HashMap::new();
    for ((a, _), n) in pairs {
        *elements.entry(a).or_default() += n;
    }
    if let Some(&last) = polymer.template.last() {
        *elements.entry(last).or_default() += 1;
    }
    match elements.values().minmax().into_option() {
        Some((min, max)) => max - min,
        None => 0,
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(spread(shared, 10).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(spread(shared, 40).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
NNCB

CH -> B
HH -> N
CB -> H
NH -> C
HB -> C
HC -> B
HN -> C
NN -> C
BH -> H
NC -> B
NB -> B
BN -> B
BB -> N
BC -> B
CC -> N
CN -> C
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "1588");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "2188189693529");
    }
}
