use std::collections::HashMap;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, HashMapBackend};
use crate::utils::parse;

/// Handy Haversacks
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 7, tags = ["2020", "graph", "dynamic-programming"])]
pub struct Solver;

const TARGET: &str = "shiny gold";

/// Bag colour to the `(count, colour)` pairs it must directly contain.
pub type Rules<'a> = HashMap<&'a str, Vec<(u64, &'a str)>>;

fn parse_rule(line: &str) -> anyhow::Result<(&str, Vec<(u64, &str)>)> {
    let (outer, contents) = line
        .split_once(" bags contain ")
        .ok_or_else(|| anyhow!("expected '<colour> bags contain ...'"))?;
    let contents = contents.trim_end_matches('.');
    if contents == "no other bags" {
        return Ok((outer, Vec::new()));
    }
    let inner = contents
        .split(", ")
        .map(|item| -> anyhow::Result<_> {
            let item = item.trim_end_matches(" bags").trim_end_matches(" bag");
            let (count, colour) = item
                .split_once(' ')
                .ok_or_else(|| anyhow!("bad content {item:?}"))?;
            let count: u64 = count.parse().with_context(|| format!("bad count in {item:?}"))?;
            Ok((count, colour))
        })
        .collect::<anyhow::Result<_>>()?;
    Ok((outer, inner))
}

impl AocParser for Solver {
    type SharedData<'a> = Rules<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(parse::lines_with(input, parse_rule)?.into_iter().collect())
    }
}

fn children<'a>(rules: &Rules<'a>, colour: &str) -> Vec<&'a str> {
    rules
        .get(colour)
        .map(|inner| inner.iter().map(|&(_, c)| c).collect())
        .unwrap_or_default()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let rules = &*shared;
        let holds_target = DpCache::new(
            HashMapBackend::new(),
            |colour: &&str| children(rules, colour),
            |colour: &&str, deps: Vec<bool>| {
                children(rules, colour).contains(&TARGET) || deps.into_iter().any(|d| d)
            },
        );
        let count = rules.keys().filter(|colour| holds_target.get(colour)).count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let rules = &*shared;
        // Bags inside one bag of the given colour.
        let inside = DpCache::new(
            HashMapBackend::new(),
            |colour: &&str| children(rules, colour),
            |colour: &&str, deps: Vec<u64>| {
                rules
                    .get(colour)
                    .map(|inner| inner.iter().zip(deps).map(|(&(count, _), d)| count * (1 + d)).sum())
                    .unwrap_or(0)
            },
        );
        Ok(inside.get(&TARGET).to_string())
    }
}
