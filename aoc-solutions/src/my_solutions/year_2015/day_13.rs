use std::collections::HashMap;

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse;

/// Knights of the Dinner Table
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 13, tags = ["2015", "permutations"])]
pub struct Solver;

fn parse_preference(line: &str) -> anyhow::Result<(&str, &str, i32)> {
    let words: Vec<&str> = line.trim_end_matches('.').split_whitespace().collect();
    match words[..] {
        [guest, "would", sign, amount, "happiness", "units", "by", "sitting", "next", "to", other] => {
            let amount: i32 = amount.parse()?;
            let change = match sign {
                "gain" => amount,
                "lose" => -amount,
                _ => bail!("expected gain or lose, found {sign:?}"),
            };
            Ok((guest, other, change))
        }
        _ => Err(anyhow!("unrecognised preference")),
    }
}

/// `happiness[a][b]`: how `a` feels sitting next to `b`.
pub type Happiness = Vec<Vec<i32>>;

/// Best total change around a circular table. Guest 0 stays put, which
/// removes rotations of the same seating.
fn best_seating(happiness: &Happiness) -> i32 {
    let guests = happiness.len();
    if guests < 2 {
        return 0;
    }
    (1..guests)
        .permutations(guests - 1)
        .map(|order| {
            let mut table = vec![0];
            table.extend(order);
            table
                .iter()
                .circular_tuple_windows()
                .map(|(&a, &b)| happiness[a][b] + happiness[b][a])
                .sum::<i32>()
        })
        .max()
        .unwrap_or(0)
}

impl AocParser for Solver {
    type SharedData<'a> = Happiness;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let prefs = parse::lines_with(input, parse_preference)?;
        let mut ids: HashMap<&str, usize> = HashMap::new();
        for &(a, b, _) in &prefs {
            for guest in [a, b] {
                let next = ids.len();
                ids.entry(guest).or_insert(next);
            }
        }
        let mut happiness = vec![vec![0; ids.len()]; ids.len()];
        for (a, b, change) in prefs {
            happiness[ids[a]][ids[b]] = change;
        }
        Ok(happiness)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(best_seating(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // I am indifferent to everyone and everyone to me.
        let mut with_me = shared.clone();
        for row in &mut with_me {
            row.push(0);
        }
        with_me.push(vec![0; with_me.len() + 1]);
        Ok(best_seating(&with_me).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
Alice would gain 54 happiness units by sitting next to Bob.
Alice would lose 79 happiness units by sitting next to Carol.
Alice would lose 2 happiness units by sitting next to David.
Bob would gain 83 happiness units by sitting next to Alice.
Bob would lose 7 happiness units by sitting next to Carol.
Bob would lose 63 happiness units by sitting next to David.
Carol would lose 62 happiness units by sitting next to Alice.
Carol would gain 60 happiness units by sitting next to Bob.
Carol would gain 55 happiness units by sitting next to David.
David would gain 46 happiness units by sitting next to Alice.
David would lose 7 happiness units by sitting next to Bob.
David would gain 41 happiness units by sitting next to Carol.
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "330");
    }

    #[test]
    fn test_with_me() {
        // I take the seat between the least happy neighbours.
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "286");
    }
}
