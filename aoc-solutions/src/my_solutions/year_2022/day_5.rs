use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Supply Stacks
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 5, tags = ["2022", "simulation", "parsing"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub struct Step {
    count: usize,
    from: usize,
    to: usize,
}

#[derive(Debug)]
pub struct Cargo {
    /// Crates bottom to top.
    stacks: Vec<Vec<u8>>,
    steps: Vec<Step>,
}

fn parse_drawing(drawing: &str) -> Result<Vec<Vec<u8>>, ParseError> {
    let mut rows = drawing.lines().rev();
    let labels = rows
        .next()
        .ok_or_else(|| ParseError::MissingData("empty drawing".into()))?;
    let count = labels.split_whitespace().count();
    let mut stacks = vec![Vec::new(); count];
    for row in rows {
        for (i, stack) in stacks.iter_mut().enumerate() {
            match row.as_bytes().get(1 + 4 * i) {
                Some(c) if c.is_ascii_uppercase() => stack.push(*c),
                Some(b' ') | None => {}
                Some(c) => {
                    return Err(ParseError::InvalidFormat(format!(
                        "unexpected {:?} in drawing",
                        *c as char
                    )));
                }
            }
        }
    }
    Ok(stacks)
}

impl AocParser for Solver {
    type SharedData<'a> = Cargo;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let (drawing, steps) = parse::split_pair(input.trim_end(), "\n\n")?;
        let stacks = parse_drawing(drawing.trim_start_matches('\n'))?;
        let steps = steps
            .lines()
            .map(|line| {
                let [count, from, to] = parse::integers_array::<usize, 3>(line)?;
                if !(1..=stacks.len()).contains(&from) || !(1..=stacks.len()).contains(&to) {
                    return Err(ParseError::InvalidFormat(format!("no such stack in {line:?}")));
                }
                Ok(Step {
                    count,
                    from: from - 1,
                    to: to - 1,
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(Cargo { stacks, steps })
    }
}

/// Runs every step and reads the top crates. `keep_order` moves a batch as
/// one unit instead of crate by crate.
fn rearrange(cargo: &Cargo, keep_order: bool) -> Result<String, SolveError> {
    let mut stacks = cargo.stacks.clone();
    for step in &cargo.steps {
        let from = &mut stacks[step.from];
        let split = from
            .len()
            .checked_sub(step.count)
            .ok_or_else(|| SolveError::failed(format!("stack {} runs out of crates", step.from + 1)))?;
        let mut moved = from.split_off(split);
        if !keep_order {
            moved.reverse();
        }
        stacks[step.to].extend(moved);
    }
    Ok(stacks
        .iter()
        .filter_map(|s| s.last())
        .map(|&c| c as char)
        .collect())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        rearrange(shared, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        rearrange(shared, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = concat!(
        "    [D]    \n",
        "[N] [C]    \n",
        "[Z] [M] [P]\n",
        " 1   2   3 \n",
        "\n",
        "move 1 from 2 to 1\n",
        "move 3 from 1 to 3\n",
        "move 2 from 2 to 1\n",
        "move 1 from 1 to 2\n",
    );

    #[test]
    fn test_parse_drawing() {
        let cargo = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(cargo.stacks, vec![b"ZN".to_vec(), b"MCD".to_vec(), b"P".to_vec()]);
        assert_eq!(cargo.steps.len(), 4);
    }

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "CMZ");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "MCD");
    }
}
