//! Puzzle solutions, one module per event year

pub mod year_2015;
pub mod year_2020;
pub mod year_2021;
pub mod year_2022;

/// Parses `input` and solves `part`, panicking on either failure.
#[cfg(test)]
pub(crate) fn solve<S: aoc_solver::Solver>(input: &str, part: u8) -> String {
    let mut shared = S::parse(input).expect("example input should parse");
    S::solve_part(&mut shared, part).expect("example should solve")
}
