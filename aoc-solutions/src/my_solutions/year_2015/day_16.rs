use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Aunt Sue
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 16, tags = ["2015", "matching"])]
pub struct Solver;

/// What the MFCSAM read off the gift.
const TICKER_TAPE: [(&str, u32); 10] = [
    ("children", 3),
    ("cats", 7),
    ("samoyeds", 2),
    ("pomeranians", 3),
    ("akitas", 0),
    ("vizslas", 0),
    ("goldfish", 5),
    ("trees", 3),
    ("cars", 2),
    ("perfumes", 1),
];

#[derive(Debug)]
pub struct Aunt<'a> {
    number: u32,
    things: Vec<(&'a str, u32)>,
}

fn parse_aunt(line: &str) -> anyhow::Result<Aunt<'_>> {
    let (name, things) = line
        .split_once(": ")
        .ok_or_else(|| anyhow!("expected 'Sue N: <thing>: <count>, ...'"))?;
    let number = name
        .strip_prefix("Sue ")
        .ok_or_else(|| anyhow!("expected 'Sue N'"))?
        .parse()?;
    let things = things
        .split(", ")
        .map(|thing| -> anyhow::Result<_> {
            let (kind, count) = parse::split_pair(thing, ": ")?;
            Ok((kind, count.parse()?))
        })
        .collect::<anyhow::Result<_>>()?;
    Ok(Aunt { number, things })
}

fn find_sue<F>(aunts: &[Aunt<'_>], matches: F) -> Result<String, SolveError>
where
    F: Fn(&str, u32, u32) -> bool,
{
    aunts
        .iter()
        .find(|aunt| {
            aunt.things.iter().all(|&(kind, count)| {
                TICKER_TAPE
                    .iter()
                    .find(|(k, _)| *k == kind)
                    .is_none_or(|&(_, reading)| matches(kind, count, reading))
            })
        })
        .map(|aunt| aunt.number.to_string())
        .ok_or_else(|| SolveError::failed("no Sue matches the ticker tape"))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Aunt<'a>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines_with(input, parse_aunt)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        find_sue(shared, |_, count, reading| count == reading)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // the reading is a lower bound for cats and trees, an upper bound for pomeranians and goldfish
        find_sue(shared, |kind, count, reading| match kind {
            "cats" | "trees" => count > reading,
            "pomeranians" | "goldfish" => count < reading,
            _ => count == reading,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const AUNTS: &str = "\
Sue 1: goldfish: 9, cars: 0, samoyeds: 9
Sue 2: cats: 7, trees: 3, cars: 2
Sue 3: cats: 8, trees: 4, goldfish: 1
Sue 4: akitas: 0, perfumes: 1, children: 3
";

    #[test]
    fn test_exact_readings() {
        assert_eq!(solve::<Solver>(AUNTS, 1), "2");
    }

    #[test]
    fn test_ranged_readings() {
        assert_eq!(solve::<Solver>(AUNTS, 2), "3");
    }
}
