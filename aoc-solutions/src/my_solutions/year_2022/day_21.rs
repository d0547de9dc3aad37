use std::collections::HashMap;

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::ParseResultExt;

/// Monkey Math
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 21, tags = ["2022", "tree", "equation"])]
pub struct Solver;

const ROOT: &str = "root";
const HUMAN: &str = "humn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job<'a> {
    Number(i64),
    Op(&'a str, u8, &'a str),
}

fn parse_job(line: &str) -> anyhow::Result<(&str, Job<'_>)> {
    let (name, job) = line.split_once(": ").ok_or_else(|| anyhow!("expected 'name: job'"))?;
    let job = match job.split_whitespace().collect::<Vec<_>>().as_slice() {
        [n] => Job::Number(n.parse()?),
        [a, op, b] if op.len() == 1 && "+-*/".contains(*op) => Job::Op(*a, op.as_bytes()[0], *b),
        _ => bail!("unknown job {job:?}"),
    };
    Ok((name.trim(), job))
}

impl AocParser for Solver {
    type SharedData<'a> = HashMap<&'a str, Job<'a>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut jobs = HashMap::new();
        for (n, line) in input.lines().enumerate().filter(|(_, l)| !l.trim().is_empty()) {
            let (name, job) = parse_job(line)
                .map_err(|e| anyhow!("(line {}) {e:#}", n + 1))
                .invalid_format()?;
            jobs.insert(name, job);
        }
        if !jobs.contains_key(ROOT) {
            return Err(ParseError::MissingData("no root monkey".into()));
        }
        Ok(jobs)
    }
}

fn apply(a: i64, op: u8, b: i64) -> Result<i64, SolveError> {
    match op {
        b'+' => Ok(a + b),
        b'-' => Ok(a - b),
        b'*' => Ok(a * b),
        _ if b == 0 => Err(SolveError::failed("division by zero")),
        _ => Ok(a / b),
    }
}

fn yell(jobs: &HashMap<&str, Job<'_>>, name: &str) -> Result<i64, SolveError> {
    match jobs.get(name) {
        Some(Job::Number(n)) => Ok(*n),
        Some(&Job::Op(a, op, b)) => apply(yell(jobs, a)?, op, yell(jobs, b)?),
        None => Err(SolveError::failed(format!("no monkey named {name}"))),
    }
}

fn depends_on_human(jobs: &HashMap<&str, Job<'_>>, name: &str) -> bool {
    name == HUMAN
        || matches!(jobs.get(name), Some(&Job::Op(a, _, b)) if depends_on_human(jobs, a) || depends_on_human(jobs, b))
}

/// Walks from `name` down to the human, undoing each operation so that
/// `name` ends up yelling `target`.
fn solve_for_human(jobs: &HashMap<&str, Job<'_>>, name: &str, target: i64) -> Result<i64, SolveError> {
    if name == HUMAN {
        return Ok(target);
    }
    let Some(&Job::Op(a, op, b)) = jobs.get(name) else {
        return Err(SolveError::failed(format!("{name} does not lead to the human")));
    };
    if depends_on_human(jobs, a) {
        let b_value = yell(jobs, b)?;
        let need = match op {
            b'+' => target - b_value,
            b'-' => target + b_value,
            b'*' => apply(target, b'/', b_value)?,
            _ => target * b_value,
        };
        solve_for_human(jobs, a, need)
    } else {
        let a_value = yell(jobs, a)?;
        let need = match op {
            b'+' => target - a_value,
            b'-' => a_value - target,
            b'*' => apply(target, b'/', a_value)?,
            _ => apply(a_value, b'/', target)?,
        };
        solve_for_human(jobs, b, need)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        yell(shared, ROOT).map(|n| n.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let Some(&Job::Op(a, _, b)) = shared.get(ROOT) else {
            return Err(SolveError::failed("root must compare two monkeys"));
        };
        let (unknown, known) = if depends_on_human(shared, a) { (a, b) } else { (b, a) };
        let target = yell(shared, known)?;
        solve_for_human(shared, unknown, target).map(|n| n.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
root: pppw + sjmn
dbpl: 5
cczh: sllz + lgvd
zczc: 2
ptdq: humn - dvpt
dvpt: 3
lfqf: 4
humn: 5
ljgn: 2
sjmn: drzm * dbpl
sllz: 4
pppw: cczh / lfqf
lgvd: ljgn * ptdq
drzm: hmdt - zczc
hmdt: 32
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "152");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "301");
    }
}
