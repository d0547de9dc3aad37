//! Parsed solver instances behind a type-erased interface

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// An answer with the wall-clock window it was computed in
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// One year/day puzzle with its input already parsed
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parsed: (DateTime<Utc>, DateTime<Utc>),
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parses `input` immediately; a malformed input never yields an instance.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let start = Utc::now();
        let shared = S::parse(input).inspect_err(|e| {
            tracing::debug!(year, day, error = %e, "parse failed");
        })?;
        let end = Utc::now();
        tracing::trace!(year, day, elapsed = ?(end - start), "parsed input");

        Ok(Self {
            year,
            day,
            shared,
            parsed: (start, end),
        })
    }
}

/// Object-safe view of a [`SolverInstance`], as handed out by the registry
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(solver: &mut dyn DynSolver) {
///     for part in 1..=solver.parts() {
///         match solver.solve(part) {
///             Ok(r) => println!("{}/{:02} {part}: {} in {}", solver.year(), solver.day(), r.answer, r.duration()),
///             Err(e) => eprintln!("part {part}: {e}"),
///         }
///     }
/// }
/// ```
pub trait DynSolver {
    /// Solve one part, timing it; parts outside `1..=parts()` are rejected
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_start(&self) -> DateTime<Utc>;

    fn parse_end(&self) -> DateTime<Utc>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();
        tracing::debug!(
            year = self.year,
            day = self.day,
            part,
            elapsed = ?(solve_end - solve_start),
            "solved part"
        );

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parsed.0
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parsed.1
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AocParser, SolverRegistryBuilder};

    /// Part 1 counts words, part 2 reuses the count cached by part 1
    struct Words;

    impl AocParser for Words {
        type SharedData<'a> = (Vec<&'a str>, Option<usize>);

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::MissingData("empty input".into()));
            }
            Ok((input.split_whitespace().collect(), None))
        }
    }

    impl Solver for Words {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => {
                    let count = shared.0.len();
                    shared.1 = Some(count);
                    Ok(count.to_string())
                }
                2 => {
                    let count = shared.1.ok_or_else(|| SolveError::failed("part 1 has not run"))?;
                    Ok((count * 2).to_string())
                }
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    #[test]
    fn test_instance_reports_metadata() {
        let mut solver = SolverInstance::<Words>::new(2020, 6, "abc ab a").unwrap();
        assert_eq!((solver.year(), solver.day(), solver.parts()), (2020, 6, 2));
        assert!(solver.parse_duration() >= TimeDelta::zero());

        let result = solver.solve(1).unwrap();
        assert_eq!(result.answer, "3");
        assert!(result.duration() >= TimeDelta::zero());
        assert_eq!(solver.solve(2).unwrap().answer, "6");
    }

    #[test]
    fn test_parts_share_state() {
        let mut solver = SolverInstance::<Words>::new(2020, 6, "x y").unwrap();
        assert!(matches!(solver.solve(2), Err(SolveError::SolveFailed(_))));
        solver.solve(1).unwrap();
        assert_eq!(solver.solve(2).unwrap().answer, "4");
    }

    #[test]
    fn test_out_of_range_and_parse_errors() {
        let registry = SolverRegistryBuilder::new()
            .register_solver::<Words>(2020, 6)
            .unwrap()
            .build();

        let mut solver = registry.create_solver(2020, 6, "a").unwrap();
        assert!(matches!(solver.solve(0), Err(SolveError::PartOutOfRange(0))));
        assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
        assert!(matches!(
            registry.create_solver(2020, 6, ""),
            Err(crate::SolverError::ParseError(ParseError::MissingData(_)))
        ));
    }
}
