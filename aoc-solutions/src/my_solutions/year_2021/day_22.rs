use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Reactor Reboot
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 22, tags = ["2021", "geometry", "inclusion-exclusion"])]
pub struct Solver;

/// Inclusive bounds on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cuboid {
    min: [i64; 3],
    max: [i64; 3],
}

impl Cuboid {
    fn intersect(&self, other: &Cuboid) -> Option<Cuboid> {
        let mut out = *self;
        for axis in 0..3 {
            out.min[axis] = self.min[axis].max(other.min[axis]);
            out.max[axis] = self.max[axis].min(other.max[axis]);
            if out.min[axis] > out.max[axis] {
                return None;
            }
        }
        Some(out)
    }

    fn volume(&self) -> i64 {
        (0..3).map(|axis| self.max[axis] - self.min[axis] + 1).product()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Step {
    on: bool,
    cuboid: Cuboid,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Step>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines_with(input, |line| {
            let (state, ranges) = line.split_once(' ').ok_or_else(|| anyhow!("expected '<on|off> <ranges>'"))?;
            let on = match state {
                "on" => true,
                "off" => false,
                other => bail!("unknown state {other:?}"),
            };
            let [x1, x2, y1, y2, z1, z2] = parse::integers_array::<i64, 6>(ranges)?;
            Ok(Step {
                on,
                cuboid: Cuboid {
                    min: [x1.min(x2), y1.min(y2), z1.min(z2)],
                    max: [x1.max(x2), y1.max(y2), z1.max(z2)],
                },
            })
        })
    }
}

/// Cubes lit after all steps, counted inside `region` if one is given.
///
/// Keeps a signed list of cuboids: every new step cancels its overlap with
/// each earlier entry, then an `on` step adds itself.
fn lit_cubes(steps: &[Step], region: Option<Cuboid>) -> i64 {
    let mut signed: Vec<(Cuboid, i64)> = Vec::new();
    for step in steps {
        let cuboid = match region {
            Some(region) => match step.cuboid.intersect(&region) {
                Some(clipped) => clipped,
                None => continue,
            },
            None => step.cuboid,
        };
        let overlaps: Vec<_> = signed
            .iter()
            .filter_map(|(c, sign)| c.intersect(&cuboid).map(|overlap| (overlap, -sign)))
            .collect();
        signed.extend(overlaps);
        if step.on {
            signed.push((cuboid, 1));
        }
    }
    signed.iter().map(|(c, sign)| c.volume() * sign).sum()
}

const INITIALIZATION_REGION: Cuboid = Cuboid {
    min: [-50; 3],
    max: [50; 3],
};

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lit_cubes(shared, Some(INITIALIZATION_REGION)).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lit_cubes(shared, None).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
on x=10..12,y=10..12,z=10..12
on x=11..13,y=11..13,z=11..13
off x=9..11,y=9..11,z=9..11
on x=10..10,y=10..10,z=10..10
";

    #[test]
    fn test_small_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "39");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "39");
    }

    #[test]
    fn test_outside_initialization_region() {
        let input = format!("{EXAMPLE}on x=100..101,y=0..0,z=-60..-60\n");
        assert_eq!(solve::<Solver>(&input, 1), "39");
        assert_eq!(solve::<Solver>(&input, 2), "41");
    }
}
