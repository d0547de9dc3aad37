use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use num_modular::{ModularCoreOps, ModularUnaryOps};

use crate::utils::parse::ParseResultExt;

/// Shuttle Search
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 13, tags = ["2020", "number-theory"])]
pub struct Solver;

#[derive(Debug)]
pub struct Notes {
    earliest: u64,
    /// `(offset in the schedule, bus id)` for every bus in service.
    buses: Vec<(u64, u64)>,
}

fn parse_buses(schedule: &str) -> anyhow::Result<Vec<(u64, u64)>> {
    schedule
        .trim()
        .split(',')
        .enumerate()
        .filter(|&(_, id)| id != "x")
        .map(|(offset, id)| -> anyhow::Result<_> {
            let bus: u64 = id.parse()?;
            if bus == 0 {
                bail!("bus id 0 at position {offset}");
            }
            Ok((offset as u64, bus))
        })
        .collect()
}

impl AocParser for Solver {
    type SharedData<'a> = Notes;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let (earliest, schedule) = input
            .trim()
            .split_once('\n')
            .ok_or_else(|| ParseError::MissingData("expected a timestamp and a schedule".into()))?;
        let earliest = earliest.trim().parse().invalid_format()?;
        let buses = parse_buses(schedule).invalid_format()?;
        if buses.is_empty() {
            return Err(ParseError::MissingData("no buses in service".into()));
        }
        Ok(Notes { earliest, buses })
    }
}

/// Earliest `t` with every bus departing `offset` minutes after `t`.
///
/// Bus ids must be pairwise coprime; the running solution is combined one
/// congruence at a time.
fn contest(buses: &[(u64, u64)]) -> anyhow::Result<u64> {
    let (mut t, mut period) = (0u64, 1u64);
    for &(offset, bus) in buses {
        let wanted = (bus - offset % bus) % bus;
        let inverse = (period % bus)
            .invm(&bus)
            .ok_or_else(|| anyhow!("bus {bus} shares a factor with earlier buses"))?;
        let steps = wanted.subm(t % bus, &bus).mulm(inverse, &bus);
        t += period * steps;
        period *= bus;
    }
    Ok(t)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let earliest = shared.earliest;
        let (wait, bus) = shared
            .buses
            .iter()
            .map(|&(_, bus)| ((bus - earliest % bus) % bus, bus))
            .min()
            .ok_or_else(|| SolveError::failed("no buses"))?;
        Ok((wait * bus).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        contest(&shared.buses)
            .map(|t| t.to_string())
            .map_err(|e| SolveError::failed(format!("{e:#}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "939\n7,13,x,x,59,x,31,19\n";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "295");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "1068781");
    }

    #[test]
    fn test_contest_schedules() {
        let contest_of = |s| contest(&parse_buses(s).unwrap()).unwrap();
        assert_eq!(contest_of("17,x,13,19"), 3417);
        assert_eq!(contest_of("67,7,59,61"), 754018);
        assert_eq!(contest_of("1789,37,47,1889"), 1202161486);
    }

    #[test]
    fn test_bus_zero_is_rejected() {
        assert!(parse_buses("7,0,x").is_err());
        assert!(matches!(
            Solver::parse("939\n7,0,x\n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_shared_factor_is_rejected() {
        assert!(contest(&[(0, 4), (1, 6)]).is_err());
    }
}
