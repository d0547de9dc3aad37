use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Syntax Scoring
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 10, tags = ["2021", "stack"])]
pub struct Solver;

#[derive(Debug, PartialEq, Eq)]
pub enum Status {
    Corrupted(char),
    /// Closers still expected, innermost first.
    Incomplete(Vec<char>),
}

fn closer(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '<' => Some('>'),
        _ => None,
    }
}

fn check(line: &str) -> Result<Status, ParseError> {
    let mut expected = Vec::new();
    for c in line.chars() {
        if let Some(close) = closer(c) {
            expected.push(close);
        } else if matches!(c, ')' | ']' | '}' | '>') {
            if expected.pop() != Some(c) {
                return Ok(Status::Corrupted(c));
            }
        } else {
            return Err(ParseError::InvalidFormat(format!("unexpected {c:?} in {line:?}")));
        }
    }
    expected.reverse();
    Ok(Status::Incomplete(expected))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Status>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input.lines().map(str::trim).filter(|l| !l.is_empty()).map(check).collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let score: u64 = shared
            .iter()
            .map(|status| match status {
                Status::Corrupted(')') => 3,
                Status::Corrupted(']') => 57,
                Status::Corrupted('}') => 1197,
                Status::Corrupted('>') => 25137,
                _ => 0,
            })
            .sum();
        Ok(score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut scores: Vec<u64> = shared
            .iter()
            .filter_map(|status| match status {
                Status::Incomplete(missing) if !missing.is_empty() => Some(missing),
                _ => None,
            })
            .map(|missing| {
                missing.iter().fold(0, |acc, c| {
                    acc * 5 + match c {
                        ')' => 1,
                        ']' => 2,
                        '}' => 3,
                        _ => 4,
                    }
                })
            })
            .collect();
        if scores.is_empty() {
            return Err(SolveError::failed("no incomplete lines"));
        }
        scores.sort_unstable();
        Ok(scores[scores.len() / 2].to_string())
    }
}
