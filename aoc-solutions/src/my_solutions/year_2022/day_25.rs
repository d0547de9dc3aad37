use anyhow::bail;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Full of Hot Air
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2022, day = 25, tags = ["2022", "number-base"])]
pub struct Solver;

fn from_snafu(text: &str) -> anyhow::Result<i64> {
    text.trim().chars().try_fold(0i64, |acc, c| {
        let digit = match c {
            '2' => 2,
            '1' => 1,
            '0' => 0,
            '-' => -1,
            '=' => -2,
            other => bail!("not a SNAFU digit: {other:?}"),
        };
        Ok(acc * 5 + digit)
    })
}

fn to_snafu(mut n: i64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n != 0 {
        let (digit, carry) = match n.rem_euclid(5) {
            0 => ('0', 0),
            1 => ('1', 0),
            2 => ('2', 0),
            3 => ('=', 1),
            _ => ('-', 1),
        };
        digits.push(digit);
        n = n.div_euclid(5) + carry;
    }
    digits.iter().rev().collect()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines_with(input, from_snafu)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(to_snafu(shared.iter().sum()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
1=-0-2
12111
2=0=
21
2=01
111
20012
112
1=-1=
1-12
12
1=
122
";

    #[test]
    fn test_conversions() {
        for (decimal, snafu) in [(1, "1"), (3, "1="), (8, "2="), (2022, "1=11-2"), (314159265, "1121-1110-1=0")] {
            assert_eq!(to_snafu(decimal), snafu);
            assert_eq!(from_snafu(snafu).unwrap(), decimal);
        }
    }

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "2=-1=0");
    }
}
