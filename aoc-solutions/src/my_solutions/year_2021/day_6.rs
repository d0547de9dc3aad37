use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Lanternfish
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 6, tags = ["2021", "counting"])]
pub struct Solver;

/// Number of fish per timer value.
pub type School = [u64; 9];

impl AocParser for Solver {
    type SharedData<'a> = School;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut school = [0; 9];
        for timer in parse::separated::<usize>(input, ',')? {
            *school
                .get_mut(timer)
                .ok_or_else(|| ParseError::InvalidFormat(format!("timer {timer} out of range")))? += 1;
        }
        Ok(school)
    }
}

fn population(school: &School, days: usize) -> u64 {
    let mut school = *school;
    for _ in 0..days {
        school.rotate_left(1);
        school[6] += school[8];
    }
    school.iter().sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(population(shared, 80).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(population(shared, 256).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "3,4,3,1,2\n";

    #[test]
    fn test_example() {
        assert_eq!(population(&Solver::parse(EXAMPLE).unwrap(), 18), 26);
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "5934");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "26984457539");
    }
}
