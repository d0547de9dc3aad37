use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Handheld Halting
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 8, tags = ["2020", "interpreter"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Acc(i32),
    Jmp(i32),
    Nop(i32),
}

impl Op {
    fn parse(line: &str) -> anyhow::Result<Self> {
        let (name, arg) = line
            .split_once(' ')
            .ok_or_else(|| anyhow!("expected '<op> <arg>'"))?;
        let arg = arg.parse()?;
        Ok(match name {
            "acc" => Op::Acc(arg),
            "jmp" => Op::Jmp(arg),
            "nop" => Op::Nop(arg),
            other => bail!("unknown operation {other:?}"),
        })
    }
}

/// How a run of the boot code ended, with the accumulator at that point.
#[derive(Debug, PartialEq, Eq)]
enum Exit {
    Looped(i32),
    Terminated(i32),
}

fn run(program: &[Op]) -> Exit {
    let mut seen = vec![false; program.len()];
    let (mut pc, mut acc) = (0i64, 0);
    loop {
        let Some(op) = usize::try_from(pc).ok().and_then(|i| program.get(i)) else {
            return Exit::Terminated(acc);
        };
        let idx = pc as usize;
        if std::mem::replace(&mut seen[idx], true) {
            return Exit::Looped(acc);
        }
        pc += match *op {
            Op::Acc(n) => {
                acc += n;
                1
            }
            Op::Jmp(n) => i64::from(n),
            Op::Nop(_) => 1,
        };
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Op>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines_with(input, Op::parse)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        match run(shared) {
            Exit::Looped(acc) => Ok(acc.to_string()),
            Exit::Terminated(_) => Err(SolveError::failed("program terminated without looping")),
        }
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        for idx in 0..shared.len() {
            let original = shared[idx];
            shared[idx] = match original {
                Op::Jmp(n) => Op::Nop(n),
                Op::Nop(n) => Op::Jmp(n),
                Op::Acc(_) => continue,
            };
            let exit = run(shared);
            shared[idx] = original;
            if let Exit::Terminated(acc) = exit {
                return Ok(acc.to_string());
            }
        }
        Err(SolveError::failed("no single swap makes the program terminate"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
nop +0
acc +1
jmp +4
acc +3
jmp -3
acc -99
acc +1
jmp -4
acc +6
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "5");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "8");
    }

    #[test]
    fn test_parse_op() {
        assert_eq!(Op::parse("jmp -4").unwrap(), Op::Jmp(-4));
        assert!(Op::parse("hcf 0").is_err());
    }
}
