use anyhow::ensure;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Binary Diagnostic
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 3, tags = ["2021", "bits"])]
pub struct Solver;

#[derive(Debug)]
pub struct Report {
    width: usize,
    values: Vec<u32>,
}

impl AocParser for Solver {
    type SharedData<'a> = Report;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let width = input.lines().next().map_or(0, |l| l.trim().len());
        if width == 0 || width > 31 {
            return Err(ParseError::InvalidFormat(format!("unsupported report width {width}")));
        }
        let values = parse::lines_with(input, |line| {
            ensure!(line.trim().len() == width, "expected {width} bits");
            Ok(u32::from_str_radix(line.trim(), 2)?)
        })?;
        Ok(Report { width, values })
    }
}

fn ones_at(values: &[u32], bit: usize) -> usize {
    values.iter().filter(|&&v| v >> bit & 1 == 1).count()
}

/// Narrows the candidates bit by bit from the left. `keep_common` selects the
/// majority bit (ties keep 1), otherwise the minority bit (ties keep 0).
fn rating(report: &Report, keep_common: bool) -> Option<u32> {
    let mut candidates = report.values.clone();
    for bit in (0..report.width).rev() {
        if candidates.len() <= 1 {
            break;
        }
        let ones = ones_at(&candidates, bit);
        let common = u32::from(ones * 2 >= candidates.len());
        let wanted = if keep_common { common } else { common ^ 1 };
        candidates.retain(|&v| v >> bit & 1 == wanted);
    }
    match candidates.as_slice() {
        [value] => Some(*value),
        _ => None,
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let gamma = (0..shared.width)
            .filter(|&bit| ones_at(&shared.values, bit) * 2 > shared.values.len())
            .fold(0u32, |acc, bit| acc | 1 << bit);
        let epsilon = !gamma & ((1 << shared.width) - 1);
        Ok((u64::from(gamma) * u64::from(epsilon)).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let oxygen = rating(shared, true).ok_or_else(|| SolveError::failed("no oxygen rating"))?;
        let co2 = rating(shared, false).ok_or_else(|| SolveError::failed("no CO2 rating"))?;
        Ok((u64::from(oxygen) * u64::from(co2)).to_string())
    }
}
