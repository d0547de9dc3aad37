use anyhow::bail;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Binary Boarding
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 5, tags = ["2020", "binary"])]
pub struct Solver;

/// Boarding passes are ten-bit seat ids: `B`/`R` set a bit, `F`/`L` clear it.
fn seat_id(pass: &str) -> anyhow::Result<u16> {
    if pass.len() != 10 {
        bail!("boarding pass {pass:?} is not 10 characters");
    }
    pass.chars().try_fold(0u16, |id, c| match c {
        'B' | 'R' => Ok(id << 1 | 1),
        'F' | 'L' => Ok(id << 1),
        other => bail!("unexpected {other:?} in boarding pass"),
    })
}

impl AocParser for Solver {
    /// Seat ids, sorted.
    type SharedData<'a> = Vec<u16>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut ids = parse::lines_with(input, seat_id)?;
        if ids.is_empty() {
            return Err(ParseError::MissingData("no boarding passes".into()));
        }
        ids.sort_unstable();
        Ok(ids)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .last()
            .map(|id| id.to_string())
            .ok_or_else(|| SolveError::failed("no seats"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .windows(2)
            .find(|pair| pair[1] == pair[0] + 2)
            .map(|pair| (pair[0] + 1).to_string())
            .ok_or_else(|| SolveError::failed("no single-seat gap in the list"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    #[test]
    fn test_seat_ids() {
        assert_eq!(seat_id("FBFBBFFRLR").unwrap(), 357);
        assert_eq!(seat_id("BFFFBBFRRR").unwrap(), 567);
        assert_eq!(seat_id("FFFBBBFRRR").unwrap(), 119);
        assert_eq!(seat_id("BBFFBBFRLL").unwrap(), 820);
        assert!(seat_id("BBFFBBFRLX").is_err());
    }

    #[test]
    fn test_highest_seat() {
        assert_eq!(solve::<Solver>("BFFFBBFRRR\nFFFBBBFRRR\nBBFFBBFRLL\n", 1), "820");
    }

    #[test]
    fn test_missing_seat() {
        // seats 5, 6 and 8
        assert_eq!(solve::<Solver>("FFFFFFFRLR\nFFFFFFFRRL\nFFFFFFBLLL\n", 2), "7");
    }
}
