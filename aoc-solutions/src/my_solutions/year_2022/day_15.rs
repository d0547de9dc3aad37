use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse;

/// Beacon Exclusion Zone
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 15, tags = ["2022", "geometry", "intervals"])]
pub struct Solver;

const ROW: i64 = 2_000_000;
const SEARCH_MAX: i64 = 4_000_000;

#[derive(Debug, Clone, Copy)]
pub struct Sensor {
    x: i64,
    y: i64,
    beacon: (i64, i64),
    radius: i64,
}

impl Sensor {
    fn covers(&self, x: i64, y: i64) -> bool {
        (self.x - x).abs() + (self.y - y).abs() <= self.radius
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Sensor>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|line| {
                let [x, y, bx, by] = parse::integers_array::<i64, 4>(line)?;
                Ok(Sensor {
                    x,
                    y,
                    beacon: (bx, by),
                    radius: (x - bx).abs() + (y - by).abs(),
                })
            })
            .collect()
    }
}

/// Cells on `row` no beacon can occupy, excluding known beacons.
fn excluded_on_row(sensors: &[Sensor], row: i64) -> i64 {
    let intervals = sensors
        .iter()
        .filter_map(|s| {
            let reach = s.radius - (s.y - row).abs();
            (reach >= 0).then_some((s.x - reach, s.x + reach))
        })
        .sorted();
    let mut covered = 0;
    let mut end = i64::MIN;
    for (lo, hi) in intervals {
        let lo = lo.max(end + 1);
        if hi >= lo {
            covered += hi - lo + 1;
            end = hi;
        }
    }
    let beacons = sensors
        .iter()
        .map(|s| s.beacon)
        .filter(|&(_, by)| by == row)
        .unique()
        .count() as i64;
    covered - beacons
}

/// The lone uncovered cell must sit just outside two sensor ranges, so it is
/// an intersection of their boundary diagonals, unless the search box itself
/// pins it into a corner.
fn distress_beacon(sensors: &[Sensor], max: i64) -> Option<(i64, i64)> {
    let rising: Vec<i64> = sensors
        .iter()
        .flat_map(|s| [s.y - s.x + s.radius + 1, s.y - s.x - s.radius - 1])
        .collect();
    let falling: Vec<i64> = sensors
        .iter()
        .flat_map(|s| [s.y + s.x + s.radius + 1, s.y + s.x - s.radius - 1])
        .collect();
    let corners = [(0, 0), (0, max), (max, 0), (max, max)];
    rising
        .iter()
        .cartesian_product(&falling)
        .filter(|&(a, b)| (b - a) % 2 == 0)
        .map(|(a, b)| ((b - a) / 2, (a + b) / 2))
        .chain(corners)
        .filter(|&(x, y)| (0..=max).contains(&x) && (0..=max).contains(&y))
        .find(|&(x, y)| sensors.iter().all(|s| !s.covers(x, y)))
}

fn tuning_frequency(sensors: &[Sensor], max: i64) -> Result<String, SolveError> {
    distress_beacon(sensors, max)
        .map(|(x, y)| (x * 4_000_000 + y).to_string())
        .ok_or_else(|| SolveError::failed("no uncovered cell"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(excluded_on_row(shared, ROW).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        tuning_frequency(shared, SEARCH_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Sensor at x=2, y=18: closest beacon at x=-2, y=15
Sensor at x=9, y=16: closest beacon at x=10, y=16
Sensor at x=13, y=2: closest beacon at x=15, y=3
Sensor at x=12, y=14: closest beacon at x=10, y=16
Sensor at x=10, y=20: closest beacon at x=10, y=16
Sensor at x=14, y=17: closest beacon at x=10, y=16
Sensor at x=8, y=7: closest beacon at x=2, y=10
Sensor at x=2, y=0: closest beacon at x=2, y=10
Sensor at x=0, y=11: closest beacon at x=2, y=10
Sensor at x=20, y=14: closest beacon at x=25, y=17
Sensor at x=17, y=20: closest beacon at x=21, y=22
Sensor at x=16, y=7: closest beacon at x=15, y=3
Sensor at x=14, y=3: closest beacon at x=15, y=3
Sensor at x=20, y=1: closest beacon at x=15, y=3
";

    #[test]
    fn test_example() {
        let sensors = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(excluded_on_row(&sensors, 10), 26);
        assert_eq!(distress_beacon(&sensors, 20), Some((14, 11)));
        assert_eq!(tuning_frequency(&sensors, 20).unwrap(), "56000011");
    }

    #[test]
    fn test_beacon_in_search_corner() {
        let sensors = Solver::parse(
            "Sensor at x=2, y=4: closest beacon at x=4, y=6\n\
             Sensor at x=1, y=2: closest beacon at x=2, y=5\n",
        )
        .unwrap();
        assert_eq!(distress_beacon(&sensors, 4), Some((4, 0)));
        assert_eq!(tuning_frequency(&sensors, 4).unwrap(), "16000000");
    }
}
