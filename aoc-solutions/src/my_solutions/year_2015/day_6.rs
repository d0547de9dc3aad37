use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Probably a Fire Hazard
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 6, tags = ["2015", "grid"])]
pub struct Solver;

const SIDE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    On,
    Off,
    Toggle,
}

/// An action over the inclusive rectangle `[x0, y0] ..= [x1, y1]`.
#[derive(Debug, Clone, Copy)]
pub struct Instruction {
    action: Action,
    corners: [usize; 4],
}

fn parse_instruction(line: &str) -> anyhow::Result<Instruction> {
    let (action, rest) = [("turn on ", Action::On), ("turn off ", Action::Off), ("toggle ", Action::Toggle)]
        .into_iter()
        .find_map(|(prefix, action)| line.strip_prefix(prefix).map(|rest| (action, rest)))
        .ok_or_else(|| anyhow!("unknown instruction"))?;
    let corners: [usize; 4] = parse::integers_array(rest)?;
    let [x0, y0, x1, y1] = corners;
    ensure!(x0 <= x1 && y0 <= y1 && x1 < SIDE && y1 < SIDE, "bad rectangle {corners:?}");
    Ok(Instruction { action, corners })
}

/// Applies every instruction to a `SIDE`×`SIDE` grid and sums the cells.
fn run<F>(instructions: &[Instruction], apply: F) -> u32
where
    F: Fn(Action, u32) -> u32,
{
    let mut lights = vec![0u32; SIDE * SIDE];
    for ins in instructions {
        let [x0, y0, x1, y1] = ins.corners;
        for row in lights.chunks_exact_mut(SIDE).take(y1 + 1).skip(y0) {
            for cell in &mut row[x0..=x1] {
                *cell = apply(ins.action, *cell);
            }
        }
    }
    lights.iter().sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines_with(input, parse_instruction)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let lit = run(shared, |action, light| match action {
            Action::On => 1,
            Action::Off => 0,
            Action::Toggle => 1 - light,
        });
        Ok(lit.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let brightness = run(shared, |action, light| match action {
            Action::On => light + 1,
            Action::Off => light.saturating_sub(1),
            Action::Toggle => light + 2,
        });
        Ok(brightness.to_string())
    }
}
