use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Corporate Policy
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 11, tags = ["2015", "strings"])]
pub struct Solver;

const CONFUSING: [u8; 3] = [b'i', b'o', b'l'];

impl AocParser for Solver {
    type SharedData<'a> = Vec<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let current = input.trim().as_bytes().to_vec();
        if current.is_empty() || !current.iter().all(u8::is_ascii_lowercase) {
            return Err(ParseError::InvalidFormat("password must be lowercase letters".into()));
        }
        Ok(current)
    }
}

fn is_valid(password: &[u8]) -> bool {
    let straight = password
        .windows(3)
        .any(|w| w[1] == w[0] + 1 && w[2] == w[1] + 1);
    let confusing = password.iter().any(|c| CONFUSING.contains(c));
    let first_pair = password.windows(2).position(|w| w[0] == w[1]);
    let second_pair = first_pair.is_some_and(|at| {
        password[at + 2..]
            .windows(2)
            .any(|w| w[0] == w[1] && w[0] != password[at])
    });
    straight && !confusing && second_pair
}

/// Advances to the next candidate, jumping over any run containing a confusing letter.
fn increment(password: &mut [u8]) {
    if let Some(at) = password.iter().position(|c| CONFUSING.contains(c)) {
        password[at] += 1;
        password[at + 1..].fill(b'a');
        return;
    }
    for c in password.iter_mut().rev() {
        if *c == b'z' {
            *c = b'a';
        } else {
            *c += 1;
            if CONFUSING.contains(c) {
                *c += 1;
            }
            return;
        }
    }
}

fn next_password(password: &mut [u8]) -> String {
    loop {
        increment(password);
        if is_valid(password) {
            return String::from_utf8_lossy(password).into_owned();
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut password = shared.clone();
        Ok(next_password(&mut password))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut password = shared.clone();
        next_password(&mut password);
        Ok(next_password(&mut password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    #[test]
    fn test_rules() {
        assert!(!is_valid(b"hijklmmn"));
        assert!(!is_valid(b"abbceffg"));
        assert!(!is_valid(b"abbcegjk"));
        assert!(is_valid(b"abcdffaa"));
        assert!(is_valid(b"ghjaabcc"));
    }

    #[test]
    fn test_next_password() {
        assert_eq!(solve::<Solver>("abcdefgh", 1), "abcdffaa");
        assert_eq!(solve::<Solver>("ghijklmn", 1), "ghjaabcc");
    }
}
