use anyhow::bail;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Cathode-Ray Tube
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 10, tags = ["2022", "cpu", "ascii-art"])]
pub struct Solver;

const WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Noop,
    AddX(i32),
}

impl AocParser for Solver {
    /// The X register during each cycle, starting with cycle 1.
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let program = parse::lines_with(input, |line| {
            Ok(match line.split_whitespace().collect::<Vec<_>>().as_slice() {
                ["noop"] => Instruction::Noop,
                ["addx", n] => Instruction::AddX(n.parse()?),
                _ => bail!("unknown instruction {line:?}"),
            })
        })?;
        let mut x = 1;
        let mut during = Vec::with_capacity(program.len() * 2);
        for instruction in program {
            match instruction {
                Instruction::Noop => during.push(x),
                Instruction::AddX(n) => {
                    during.extend([x, x]);
                    x += n;
                }
            }
        }
        Ok(during)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let strength: i64 = (20..=220)
            .step_by(40)
            .filter_map(|cycle: usize| shared.get(cycle - 1).map(|&x| cycle as i64 * i64::from(x)))
            .sum();
        Ok(strength.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let screen = shared
            .chunks(WIDTH)
            .take(6)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(col, &x)| if (col as i32 - x).abs() <= 1 { '#' } else { '.' })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        Ok(screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    #[test]
    fn test_register_trace() {
        assert_eq!(Solver::parse("noop\naddx 3\naddx -5\n").unwrap(), vec![1, 1, 1, 4, 4]);
    }

    #[test]
    fn test_signal_strength() {
        let idle = "noop\n".repeat(240);
        assert_eq!(solve::<Solver>(&idle, 1), "720");

        // X becomes 3 after cycle 2 and stays there.
        let input = format!("addx 2\n{}", "noop\n".repeat(238));
        assert_eq!(solve::<Solver>(&input, 1), "2160");
    }

    #[test]
    fn test_render() {
        let idle = "noop\n".repeat(240);
        let row = format!("###{}", ".".repeat(WIDTH - 3));
        assert_eq!(solve::<Solver>(&idle, 2), vec![row; 6].join("\n"));
    }
}
