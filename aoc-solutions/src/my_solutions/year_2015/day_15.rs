use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Science for Hungry People
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 15, tags = ["2015", "brute-force"])]
pub struct Solver;

const TEASPOONS: i64 = 100;
const CALORIE_TARGET: i64 = 500;

/// Capacity, durability, flavor, texture, calories.
type Properties = [i64; 5];

/// Calls `visit` with every way to split `left` teaspoons over the remaining ingredients.
fn recipes(
    ingredients: &[Properties],
    left: i64,
    mix: Properties,
    visit: &mut impl FnMut(&Properties),
) {
    match ingredients {
        [] => {}
        [last] => {
            let mix = std::array::from_fn(|i| mix[i] + left * last[i]);
            visit(&mix);
        }
        [first, rest @ ..] => {
            for spoons in 0..=left {
                let mix = std::array::from_fn(|i| mix[i] + spoons * first[i]);
                recipes(rest, left - spoons, mix, visit);
            }
        }
    }
}

fn score(mix: &Properties) -> i64 {
    mix[..4].iter().map(|&p| p.max(0)).product()
}

fn best_cookie(ingredients: &[Properties], calories: Option<i64>) -> i64 {
    let mut best = 0;
    recipes(ingredients, TEASPOONS, [0; 5], &mut |mix| {
        if calories.is_none_or(|c| mix[4] == c) {
            best = best.max(score(mix));
        }
    });
    best
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Properties>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines_with(input, |line| Ok(parse::integers_array(line)?))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(best_cookie(shared, None).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(best_cookie(shared, Some(CALORIE_TARGET)).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
Butterscotch: capacity -1, durability -2, flavor 6, texture 3, calories 8
Cinnamon: capacity 2, durability 3, flavor -2, texture -1, calories 3
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "62842880");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "57600000");
    }
}
