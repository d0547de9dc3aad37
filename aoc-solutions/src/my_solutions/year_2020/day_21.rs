use std::collections::{BTreeMap, HashSet};

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse;

/// Allergen Assessment
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 21, tags = ["2020", "constraint-solving"])]
pub struct Solver;

#[derive(Debug)]
pub struct Food<'a> {
    ingredients: HashSet<&'a str>,
    allergens: Vec<&'a str>,
}

fn parse_food(line: &str) -> anyhow::Result<Food<'_>> {
    let (ingredients, allergens) = line
        .trim_end_matches(')')
        .split_once(" (contains ")
        .ok_or_else(|| anyhow!("expected '<ingredients> (contains <allergens>)'"))?;
    Ok(Food {
        ingredients: ingredients.split_whitespace().collect(),
        allergens: allergens.split(", ").collect(),
    })
}

/// Ingredients that may still hold each allergen.
fn candidates<'a>(foods: &[Food<'a>]) -> BTreeMap<&'a str, HashSet<&'a str>> {
    let mut candidates: BTreeMap<&str, HashSet<&str>> = BTreeMap::new();
    for food in foods {
        for &allergen in &food.allergens {
            candidates
                .entry(allergen)
                .and_modify(|set| set.retain(|i| food.ingredients.contains(i)))
                .or_insert_with(|| food.ingredients.clone());
        }
    }
    candidates
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Food<'a>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines_with(input, parse_food)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let suspicious: HashSet<&str> = candidates(shared).into_values().flatten().collect();
        let safe = shared
            .iter()
            .flat_map(|food| &food.ingredients)
            .filter(|i| !suspicious.contains(*i))
            .count();
        Ok(safe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut open = candidates(shared);
        let mut dangerous: BTreeMap<&str, &str> = BTreeMap::new();
        while !open.is_empty() {
            let (&allergen, ingredient) = open
                .iter()
                .find_map(|(allergen, set)| {
                    (set.len() == 1).then(|| (allergen, set.iter().next().copied()))
                })
                .ok_or_else(|| SolveError::failed("allergens cannot be pinned down"))?;
            let ingredient = ingredient.ok_or_else(|| SolveError::failed("empty candidate set"))?;
            open.remove(allergen);
            for set in open.values_mut() {
                set.remove(ingredient);
            }
            dangerous.insert(allergen, ingredient);
        }
        Ok(dangerous.values().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
mxmxvkd kfcds sqjhc nhms (contains dairy, fish)
trh fvjkl sbzzf mxmxvkd (contains dairy)
sqjhc fvjkl (contains soy)
sqjhc mxmxvkd sbzzf (contains fish)
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "5");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "mxmxvkd,sqjhc,fvjkl");
    }
}
