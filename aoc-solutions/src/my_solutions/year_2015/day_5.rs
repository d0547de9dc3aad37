use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

/// Doesn't He Have Intern-Elves For This?
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 5, tags = ["2015", "strings"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a [u8]>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.lines().map(str::trim).filter(|l| !l.is_empty()).map(str::as_bytes).collect())
    }
}

fn is_nice(s: &[u8]) -> bool {
    let vowels = s.iter().filter(|c| b"aeiou".contains(c)).count();
    let doubled = s.windows(2).any(|w| w[0] == w[1]);
    let banned = s
        .windows(2)
        .any(|w| matches!(w, b"ab" | b"cd" | b"pq" | b"xy"));
    vowels >= 3 && doubled && !banned
}

fn is_nicer(s: &[u8]) -> bool {
    let repeated_pair = (0..s.len().saturating_sub(1))
        .tuple_combinations()
        .any(|(i, j)| j >= i + 2 && s[i..i + 2] == s[j..j + 2]);
    let sandwich = s.windows(3).any(|w| w[0] == w[2]);
    repeated_pair && sandwich
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|s| is_nice(s)).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|s| is_nicer(s)).count().to_string())
    }
}
