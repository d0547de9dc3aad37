//! Core solver traits
//!
//! A solver is a zero-sized type that parses its input once into
//! [`AocParser::SharedData`] and then answers each part against it.

use crate::error::{ParseError, SolveError};

/// Parses puzzle input into the data shared by every part
///
/// `SharedData` is generic over the input lifetime so parsers can keep
/// `&'a str` slices of the input instead of copying.
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Floors;
///
/// impl AocParser for Floors {
///     type SharedData<'a> = &'a [u8];
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         let bytes = input.trim().as_bytes();
///         match bytes.iter().find(|b| !matches!(b, b'(' | b')')) {
///             Some(&b) => Err(ParseError::InvalidFormat(format!("unexpected {:?}", b as char))),
///             None => Ok(bytes),
///         }
///     }
/// }
///
/// assert!(Floors::parse("(()(").is_ok());
/// assert!(Floors::parse("(x)").is_err());
/// ```
pub trait AocParser {
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle
///
/// Takes the shared data mutably: a part may cache an intermediate result
/// there for a later part to pick up.
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Runtime dispatch from a part number to its solution
///
/// Normally produced by `#[derive(AocSolver)]`. A hand-written impl looks like:
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Floors;
///
/// impl AocParser for Floors {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .trim()
///             .chars()
///             .map(|c| match c {
///                 '(' => Ok(1),
///                 ')' => Ok(-1),
///                 _ => Err(ParseError::InvalidFormat(format!("unexpected {c:?}"))),
///             })
///             .collect()
///     }
/// }
///
/// impl Solver for Floors {
///     const PARTS: u8 = 2;
///
///     fn solve_part(steps: &mut Vec<i32>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(steps.iter().sum::<i32>().to_string()),
///             2 => steps
///                 .iter()
///                 .scan(0, |floor, step| {
///                     *floor += step;
///                     Some(*floor)
///                 })
///                 .position(|floor| floor < 0)
///                 .map(|i| (i + 1).to_string())
///                 .ok_or_else(|| SolveError::failed("never reaches the basement")),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut steps = Floors::parse("()())").unwrap();
/// assert_eq!(Floors::solve_part(&mut steps, 1).unwrap(), "-1");
/// assert_eq!(Floors::solve_part(&mut steps, 2).unwrap(), "5");
/// ```
pub trait Solver: AocParser {
    /// Parts are numbered `1..=PARTS`
    const PARTS: u8;

    /// Unknown parts yield [`SolveError::PartNotImplemented`]
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    /// [`Solver::solve_part`] guarded by `1..=PARTS`; anything else is
    /// [`SolveError::PartOutOfRange`] and never reaches the solver.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if part == 0 || part > Self::PARTS {
            return Err(SolveError::PartOutOfRange(part));
        }
        Self::solve_part(shared, part)
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
