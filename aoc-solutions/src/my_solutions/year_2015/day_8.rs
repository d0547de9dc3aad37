use anyhow::{bail, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Matchsticks
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 8, tags = ["2015", "strings"])]
pub struct Solver;

/// Characters in memory for a quoted string literal with `\\`, `\"` and `\xHH` escapes.
fn decoded_len(literal: &str) -> anyhow::Result<usize> {
    let inner = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or_else(|| anyhow::anyhow!("{literal:?} is not quoted"))?;
    let bytes = inner.as_bytes();
    let (mut idx, mut len) = (0, 0);
    while idx < bytes.len() {
        idx += match (bytes[idx], bytes.get(idx + 1)) {
            (b'\\', Some(b'\\' | b'"')) => 2,
            (b'\\', Some(b'x')) => {
                ensure!(
                    bytes.get(idx + 2..idx + 4).is_some_and(|h| h.iter().all(u8::is_ascii_hexdigit)),
                    "bad hex escape in {literal:?}"
                );
                4
            }
            (b'\\', _) => bail!("bad escape in {literal:?}"),
            _ => 1,
        };
        len += 1;
    }
    Ok(len)
}

fn encoded_len(literal: &str) -> usize {
    2 + literal.len() + literal.bytes().filter(|b| matches!(b, b'"' | b'\\')).count()
}

impl AocParser for Solver {
    /// Each literal with its length in memory.
    type SharedData<'a> = Vec<(&'a str, usize)>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines_with(input, |line| {
            let line = line.trim();
            Ok((line, decoded_len(line)?))
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let overhead: usize = shared.iter().map(|(code, memory)| code.len() - memory).sum();
        Ok(overhead.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let growth: usize = shared
            .iter()
            .map(|(code, _)| encoded_len(code) - code.len())
            .sum();
        Ok(growth.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = r#"""
"abc"
"aaa\"aaa"
"\x27"
"#;

    #[test]
    fn test_lengths() {
        assert_eq!(decoded_len(r#""aaa\"aaa""#).unwrap(), 7);
        assert_eq!(decoded_len(r#""\x27""#).unwrap(), 1);
        assert_eq!(encoded_len(r#""\x27""#), 11);
        assert!(decoded_len(r#""\q""#).is_err());
    }

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "12");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "19");
    }
}
