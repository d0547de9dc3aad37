use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Tuning Trouble
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 6, tags = ["2022", "sliding-window", "bits"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = &'a [u8];

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let signal = input.trim().as_bytes();
        match signal.iter().find(|b| !b.is_ascii_lowercase()) {
            Some(&b) => Err(ParseError::InvalidFormat(format!("unexpected {:?} in signal", b as char))),
            None => Ok(signal),
        }
    }
}

/// Characters processed once the last `len` received are all different.
fn marker(signal: &[u8], len: usize) -> Option<usize> {
    signal
        .windows(len)
        .position(|w| w.iter().fold(0u32, |seen, b| seen | 1 << (b - b'a')).count_ones() as usize == len)
        .map(|start| start + len)
}

fn solve_marker(signal: &[u8], len: usize) -> Result<String, SolveError> {
    marker(signal, len)
        .map(|n| n.to_string())
        .ok_or_else(|| SolveError::failed(format!("no run of {len} distinct characters")))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_marker(shared, 4)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_marker(shared, 14)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    #[test]
    fn test_examples() {
        for (signal, packet, message) in [
            ("mjqjpqmgbljsphdztnvjfqwrcgsmlb", "7", "19"),
            ("bvwbjplbgvbhsrlpgdmjqwftvncz", "5", "23"),
            ("nppdvjthqldpwncqszvftbrmjlhg", "6", "23"),
            ("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", "10", "29"),
            ("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", "11", "26"),
        ] {
            assert_eq!(solve::<Solver>(signal, 1), packet, "{signal}");
            assert_eq!(solve::<Solver>(signal, 2), message, "{signal}");
        }
    }

    #[test]
    fn test_no_marker() {
        assert_eq!(marker(b"aaaa", 4), None);
    }
}
