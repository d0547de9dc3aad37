use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use num_modular::{ModularCoreOps, ModularPow};

use crate::utils::parse;

/// Let It Snow
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2015, day = 25, tags = ["2015", "number-theory"])]
pub struct Solver;

const FIRST_CODE: u64 = 20151125;
const MULTIPLIER: u64 = 252533;
const MODULUS: u64 = 33554393;

impl AocParser for Solver {
    /// `(row, column)`, both 1-based.
    type SharedData<'a> = (u64, u64);

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let [row, column] = parse::integers_array::<u64, 2>(input)?;
        if row == 0 || column == 0 {
            return Err(ParseError::InvalidFormat("rows and columns start at 1".into()));
        }
        Ok((row, column))
    }
}

/// Codes fill the sheet along anti-diagonals, each one starting at column 1.
fn code_at(row: u64, column: u64) -> u64 {
    let diagonal = row + column - 1;
    let position = diagonal * (diagonal - 1) / 2 + column;
    MULTIPLIER
        .powm(position - 1, &MODULUS)
        .mulm(FIRST_CODE, &MODULUS)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (row, column) = *shared;
        Ok(code_at(row, column).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    #[test]
    fn test_code_sheet() {
        assert_eq!(code_at(1, 1), 20151125);
        assert_eq!(code_at(2, 1), 31916031);
        assert_eq!(code_at(1, 2), 18749137);
        assert_eq!(code_at(6, 6), 27995004);
    }

    #[test]
    fn test_manual_text() {
        let input = "To continue, please consult the code grid in the manual.  Enter the code at row 4, column 2.";
        assert_eq!(solve::<Solver>(input, 1), "32451966");
    }
}
