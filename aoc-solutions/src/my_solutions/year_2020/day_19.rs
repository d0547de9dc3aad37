use std::collections::HashMap;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Monster Messages
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 19, tags = ["2020", "grammar"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Literal(u8),
    /// Alternatives, each a sequence of rule ids.
    Any(Vec<Vec<u32>>),
}

fn parse_rule(line: &str) -> anyhow::Result<(u32, Rule)> {
    let (id, body) = line
        .split_once(": ")
        .ok_or_else(|| anyhow!("expected '<id>: <rule>'"))?;
    let body = body.trim();
    let rule = match body.strip_prefix('"').and_then(|b| b.strip_suffix('"')) {
        Some(literal) if literal.len() == 1 => Rule::Literal(literal.as_bytes()[0]),
        Some(literal) => return Err(anyhow!("literal {literal:?} must be one character")),
        None => Rule::Any(
            body.split('|')
                .map(|alt| alt.split_whitespace().map(str::parse).collect::<Result<Vec<u32>, _>>())
                .collect::<Result<Vec<_>, _>>()?,
        ),
    };
    Ok((id.parse()?, rule))
}

pub struct Puzzle<'a> {
    rules: HashMap<u32, Rule>,
    messages: Vec<&'a str>,
}

impl Puzzle<'_> {
    /// Every position where a match of `rule` starting at `start` can end.
    fn ends(&self, rule: u32, message: &[u8], start: usize) -> Vec<usize> {
        match self.rules.get(&rule) {
            Some(Rule::Literal(c)) => {
                if message.get(start) == Some(c) {
                    vec![start + 1]
                } else {
                    vec![]
                }
            }
            Some(Rule::Any(alternatives)) => alternatives
                .iter()
                .flat_map(|seq| {
                    seq.iter().fold(vec![start], |positions, &sub| {
                        positions
                            .into_iter()
                            .filter(|&p| p < message.len())
                            .flat_map(|p| self.ends(sub, message, p))
                            .collect()
                    })
                })
                .collect(),
            None => vec![],
        }
    }

    fn matches(&self, message: &str) -> bool {
        let bytes = message.as_bytes();
        self.ends(0, bytes, 0).contains(&bytes.len())
    }

    fn count_matches(&self) -> usize {
        self.messages.iter().filter(|m| self.matches(m)).count()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Puzzle<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let (rules, messages) = parse::split_pair(input.trim(), "\n\n")?;
        let rules = parse::lines_with(rules, parse_rule)?.into_iter().collect();
        let messages = messages.lines().map(str::trim).filter(|m| !m.is_empty()).collect();
        Ok(Puzzle { rules, messages })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.count_matches().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // 8: 42 | 42 8 and 11: 42 31 | 42 11 31; every rule consumes input, so recursion ends.
        shared.rules.insert(8, Rule::Any(vec![vec![42], vec![42, 8]]));
        shared.rules.insert(11, Rule::Any(vec![vec![42, 31], vec![42, 11, 31]]));
        Ok(shared.count_matches().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
0: 4 1 5
1: 2 3 | 3 2
2: 4 4 | 5 5
3: 4 5 | 5 4
4: \"a\"
5: \"b\"

ababbb
bababa
abbbab
aaabbb
aaaabbb
";

    const LOOPING: &str = "\
0: 8 11
8: 42
11: 42 31
42: \"a\"
31: \"b\"

aab
aaab
aabb
aaabb
ab
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "2");
    }

    #[test]
    fn test_looping_rules() {
        assert_eq!(solve::<Solver>(LOOPING, 1), "1");
        assert_eq!(solve::<Solver>(LOOPING, 2), "3");
    }
}
