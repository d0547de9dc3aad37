use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Not Quite Lisp
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 1, tags = ["2015", "counting"])]
pub struct Solver;

impl AocParser for Solver {
    /// `+1` for `(`, `-1` for `)`.
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .chars()
            .map(|c| match c {
                '(' => Ok(1),
                ')' => Ok(-1),
                other => Err(ParseError::InvalidFormat(format!("unexpected {other:?}"))),
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .scan(0, |floor, step| {
                *floor += step;
                Some(*floor)
            })
            .position(|floor| floor < 0)
            .map(|idx| (idx + 1).to_string())
            .ok_or_else(|| SolveError::failed("Santa never enters the basement"))
    }
}
