use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

use anyhow::{anyhow, bail, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Distress Signal
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 13, tags = ["2022", "parsing", "sorting"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(u32),
    List(Vec<Value>),
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::List(a), Value::List(b)) => a.cmp(b),
            (Value::Int(a), list) => Value::List(vec![Value::Int(*a)]).cmp(list),
            (list, Value::Int(b)) => list.cmp(&Value::List(vec![Value::Int(*b)])),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn value(chars: &mut Peekable<Chars<'_>>) -> anyhow::Result<Value> {
    match chars.peek() {
        Some('[') => {
            chars.next();
            let mut items = Vec::new();
            if chars.peek() == Some(&']') {
                chars.next();
                return Ok(Value::List(items));
            }
            loop {
                items.push(value(chars)?);
                match chars.next() {
                    Some(',') => continue,
                    Some(']') => return Ok(Value::List(items)),
                    other => bail!("expected ',' or ']', found {other:?}"),
                }
            }
        }
        Some(c) if c.is_ascii_digit() => {
            let mut n = 0u32;
            while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                n = n * 10 + d;
                chars.next();
            }
            Ok(Value::Int(n))
        }
        other => Err(anyhow!("unexpected {other:?}")),
    }
}

impl std::str::FromStr for Value {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let mut chars = s.trim().chars().peekable();
        let parsed = value(&mut chars)?;
        ensure!(chars.next().is_none(), "trailing characters");
        Ok(parsed)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Value>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let packets: Vec<Value> = input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.parse())
            .collect::<anyhow::Result<_>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        if packets.len() % 2 != 0 {
            return Err(ParseError::InvalidFormat("packets must come in pairs".into()));
        }
        Ok(packets)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let ordered: usize = shared
            .chunks_exact(2)
            .enumerate()
            .filter(|(_, pair)| pair[0] < pair[1])
            .map(|(i, _)| i + 1)
            .sum();
        Ok(ordered.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let dividers = [2, 6].map(|n| Value::List(vec![Value::List(vec![Value::Int(n)])]));
        // Position of each divider in the sorted list, without sorting.
        let key: usize = dividers
            .iter()
            .enumerate()
            .map(|(i, divider)| shared.iter().filter(|&p| p < divider).count() + i + 1)
            .product();
        Ok(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
[1,1,3,1,1]
[1,1,5,1,1]

[[1],[2,3,4]]
[[1],4]

[9]
[[8,7,6]]

[[4,4],4,4]
[[4,4],4,4,4]

[7,7,7,7]
[7,7,7]

[]
[3]

[[[]]]
[[]]

[1,[2,[3,[4,[5,6,7]]]],8,9]
[1,[2,[3,[4,[5,6,0]]]],8,9]
";

    fn packet(s: &str) -> Value {
        s.parse().unwrap()
    }

    #[test]
    fn test_mixed_comparison() {
        assert!(packet("[[1],[2,3,4]]") < packet("[[1],4]"));
        assert!(packet("[9]") > packet("[[8,7,6]]"));
        assert!(packet("[[[]]]") > packet("[[]]"));
        assert_eq!(packet("[10,[]]"), Value::List(vec![Value::Int(10), Value::List(vec![])]));
    }

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "13");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "140");
    }

    #[test]
    fn test_malformed_packet() {
        assert!(Solver::parse("[1,2\n[3]").is_err());
    }
}
