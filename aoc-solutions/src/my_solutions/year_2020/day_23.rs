use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Crab Cups
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 23, tags = ["2020", "linked-list", "simulation"])]
pub struct Solver;

impl AocParser for Solver {
    /// Cup labels in clockwise order.
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let labels: Vec<u32> = input
            .trim()
            .chars()
            .map(|c| c.to_digit(10).filter(|&d| d > 0))
            .collect::<Option<_>>()
            .ok_or_else(|| ParseError::InvalidFormat("cup labels must be digits 1-9".into()))?;
        let mut sorted = labels.clone();
        sorted.sort_unstable();
        if sorted.iter().copied().ne(1..=labels.len() as u32) {
            return Err(ParseError::InvalidFormat("cup labels must be 1..=n, each once".into()));
        }
        Ok(labels)
    }
}

/// The circle as a successor table: `next[label]` is the cup clockwise of `label`.
struct Circle {
    next: Vec<u32>,
    current: u32,
}

impl Circle {
    /// The given labels followed by `len - labels.len()` more in ascending order.
    fn new(labels: &[u32], len: usize) -> Self {
        let order = labels.iter().copied().chain(labels.len() as u32 + 1..=len as u32);
        let mut next = vec![0; len + 1];
        let mut first = None;
        let mut prev: Option<u32> = None;
        for label in order {
            match prev {
                Some(p) => next[p as usize] = label,
                None => first = Some(label),
            }
            prev = Some(label);
        }
        let (first, last) = (first.unwrap_or(1), prev.unwrap_or(1));
        next[last as usize] = first;
        Self { next, current: first }
    }

    fn step(&mut self) {
        let max = (self.next.len() - 1) as u32;
        let a = self.next[self.current as usize];
        let b = self.next[a as usize];
        let c = self.next[b as usize];
        let mut dest = self.current;
        loop {
            dest = if dest == 1 { max } else { dest - 1 };
            if dest != a && dest != b && dest != c {
                break;
            }
        }
        self.next[self.current as usize] = self.next[c as usize];
        self.next[c as usize] = self.next[dest as usize];
        self.next[dest as usize] = a;
        self.current = self.next[self.current as usize];
    }

    fn after_one(&self) -> impl Iterator<Item = u32> + '_ {
        std::iter::successors(Some(self.next[1]), |&label| Some(self.next[label as usize]))
            .take_while(|&label| label != 1)
    }
}

fn play(labels: &[u32], len: usize, moves: usize) -> Circle {
    let mut circle = Circle::new(labels, len);
    for _ in 0..moves {
        circle.step();
    }
    circle
}

fn labels_after_one(labels: &[u32], moves: usize) -> String {
    play(labels, labels.len(), moves)
        .after_one()
        .map(|label| label.to_string())
        .collect()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(labels_after_one(shared, 100))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product: u64 = play(shared, 1_000_000, 10_000_000)
            .after_one()
            .take(2)
            .map(u64::from)
            .product();
        Ok(product.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "389125467";

    #[test]
    fn test_labels() {
        let labels = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(labels_after_one(&labels, 10), "92658374");
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "67384529");
    }

    #[test]
    fn test_million_cups() {
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "149245887792");
    }

    #[test]
    fn test_rejects_duplicate_labels() {
        assert!(Solver::parse("3381").is_err());
    }
}
