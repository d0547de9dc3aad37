use anyhow::{bail, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse;

/// Snailfish
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 18, tags = ["2021", "tree"])]
pub struct Solver;

/// A snailfish number flattened to its regular numbers, left to right, each
/// with the count of pairs enclosing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number(Vec<(u32, u8)>);

impl std::str::FromStr for Number {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let mut depth = 0u8;
        let mut values = Vec::new();
        for c in s.trim().chars() {
            match c {
                '[' => depth += 1,
                ']' => {
                    ensure!(depth > 0, "unbalanced brackets");
                    depth -= 1;
                }
                ',' => {}
                _ => match c.to_digit(10) {
                    Some(d) => values.push((d, depth)),
                    None => bail!("unexpected {c:?}"),
                },
            }
        }
        ensure!(depth == 0 && !values.is_empty(), "incomplete number");
        Ok(Number(values))
    }
}

impl Number {
    fn explode(&mut self) -> bool {
        let values = &mut self.0;
        let Some(i) = values.iter().position(|&(_, depth)| depth > 4) else {
            return false;
        };
        let (left, depth) = values[i];
        let (right, _) = values[i + 1];
        if i > 0 {
            values[i - 1].0 += left;
        }
        if let Some(next) = values.get_mut(i + 2) {
            next.0 += right;
        }
        values[i] = (0, depth - 1);
        values.remove(i + 1);
        true
    }

    fn split(&mut self) -> bool {
        let values = &mut self.0;
        let Some(i) = values.iter().position(|&(v, _)| v >= 10) else {
            return false;
        };
        let (v, depth) = values[i];
        values[i] = (v / 2, depth + 1);
        values.insert(i + 1, (v - v / 2, depth + 1));
        true
    }

    fn add(&self, other: &Number) -> Number {
        let mut sum = Number(
            self.0
                .iter()
                .chain(&other.0)
                .map(|&(v, depth)| (v, depth + 1))
                .collect(),
        );
        while sum.explode() || sum.split() {}
        sum
    }

    /// Collapses the deepest pairs first; the leftmost number at the deepest
    /// level is always paired with its right neighbour.
    fn magnitude(&self) -> u32 {
        let mut values = self.0.clone();
        while values.len() > 1 {
            let deepest = values.iter().map(|&(_, depth)| depth).max().unwrap_or(0);
            let Some(i) = values.iter().position(|&(_, depth)| depth == deepest) else {
                break;
            };
            let (left, right) = (values[i].0, values[i + 1].0);
            values[i] = (3 * left + 2 * right, deepest.saturating_sub(1));
            values.remove(i + 1);
        }
        values.first().map_or(0, |&(v, _)| v)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Number>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines_with(input, str::parse)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (first, rest) = shared
            .split_first()
            .ok_or_else(|| SolveError::failed("empty homework"))?;
        let total = rest.iter().fold(first.clone(), |acc, n| acc.add(n));
        Ok(total.magnitude().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .permutations(2)
            .map(|pair| pair[0].add(pair[1]).magnitude())
            .max()
            .map(|m| m.to_string())
            .ok_or_else(|| SolveError::failed("need at least two numbers"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    fn number(s: &str) -> Number {
        s.parse().unwrap()
    }

    const EXAMPLE: &str = "\
[[[0,[5,8]],[[1,7],[9,6]]],[[4,[1,2]],[[1,4],2]]]
[[[5,[2,8]],4],[5,[[9,9],0]]]
[6,[[[6,2],[5,6]],[[7,6],[4,7]]]]
[[[6,[0,7]],[0,9]],[4,[9,[9,0]]]]
[[[7,[6,4]],[3,[1,3]]],[[[5,5],1],9]]
[[6,[[7,3],[3,2]]],[[[3,8],[5,7]],4]]
[[[[5,4],[7,7]],8],[[8,3],8]]
[[9,3],[[9,9],[6,[4,9]]]]
[[2,[[7,7],7]],[[5,8],[[9,3],[0,2]]]]
[[[[5,2],5],[8,[3,7]]],[[5,[7,5]],[4,4]]]
";

    #[test]
    fn test_reduce_on_add() {
        let sum = number("[[[[4,3],4],4],[7,[[8,4],9]]]").add(&number("[1,1]"));
        assert_eq!(sum, number("[[[[0,7],4],[[7,8],[6,0]]],[8,1]]"));
    }

    #[test]
    fn test_sum_list() {
        let total = (2..=6).fold(number("[1,1]"), |acc, n| acc.add(&number(&format!("[{n},{n}]"))));
        assert_eq!(total, number("[[[[5,0],[7,4]],[5,5]],[6,6]]"));
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(number("[[1,2],[[3,4],5]]").magnitude(), 143);
        assert_eq!(number("[[[[0,7],4],[[7,8],[6,0]]],[8,1]]").magnitude(), 1384);
        assert_eq!(number("[[[[8,7],[7,7]],[[8,6],[7,7]]],[[[0,7],[6,6]],[8,7]]]").magnitude(), 3488);
    }

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "4140");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "3993");
    }
}
