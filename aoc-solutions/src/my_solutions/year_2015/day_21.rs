use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::{Itertools, iproduct};

use crate::utils::parse;

/// RPG Simulator 20XX
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 21, tags = ["2015", "brute-force"])]
pub struct Solver;

const PLAYER_HIT_POINTS: i32 = 100;

/// `(cost, damage, armor)`
type Item = (i32, i32, i32);

const WEAPONS: [Item; 5] = [(8, 4, 0), (10, 5, 0), (25, 6, 0), (40, 7, 0), (74, 8, 0)];
const ARMOR: [Item; 5] = [(13, 0, 1), (31, 0, 2), (53, 0, 3), (75, 0, 4), (102, 0, 5)];
const RINGS: [Item; 6] = [(25, 1, 0), (50, 2, 0), (100, 3, 0), (20, 0, 1), (40, 0, 2), (80, 0, 3)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fighter {
    hit_points: i32,
    damage: i32,
    armor: i32,
}

impl Fighter {
    /// Rounds needed to bring `other` down.
    fn rounds_to_beat(&self, other: &Fighter) -> i32 {
        let per_hit = (self.damage - other.armor).max(1);
        (other.hit_points + per_hit - 1) / per_hit
    }
}

/// The player strikes first, so ties go to the player.
fn player_wins(player: &Fighter, boss: &Fighter) -> bool {
    player.rounds_to_beat(boss) <= boss.rounds_to_beat(player)
}

/// Every legal loadout as `(cost, damage, armor)`: one weapon, at most one
/// armor, at most two different rings.
fn loadouts() -> impl Iterator<Item = Item> {
    let armor = std::iter::once((0, 0, 0)).chain(ARMOR);
    let rings = (0..=2).flat_map(|n| RINGS.into_iter().combinations(n));
    iproduct!(WEAPONS, armor, rings).map(|(weapon, armor, rings)| {
        std::iter::once(weapon)
            .chain(std::iter::once(armor))
            .chain(rings)
            .fold((0, 0, 0), |(c, d, a), (ic, id, ia)| (c + ic, d + id, a + ia))
    })
}

/// Loadout costs split by whether they beat `boss`.
fn costs(boss: &Fighter, winning: bool) -> impl Iterator<Item = i32> + '_ {
    loadouts().filter_map(move |(cost, damage, armor)| {
        let player = Fighter {
            hit_points: PLAYER_HIT_POINTS,
            damage,
            armor,
        };
        (player_wins(&player, boss) == winning).then_some(cost)
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Fighter;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let [hit_points, damage, armor] = parse::integers_array(input)?;
        Ok(Fighter {
            hit_points,
            damage,
            armor,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        costs(shared, true)
            .min()
            .map(|c| c.to_string())
            .ok_or_else(|| SolveError::failed("no loadout wins"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        costs(shared, false)
            .max()
            .map(|c| c.to_string())
            .ok_or_else(|| SolveError::failed("every loadout wins"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    #[test]
    fn test_duel() {
        let player = Fighter {
            hit_points: 8,
            damage: 5,
            armor: 5,
        };
        let boss = Fighter {
            hit_points: 12,
            damage: 7,
            armor: 2,
        };
        assert!(player_wins(&player, &boss));
        assert!(!player_wins(&player, &Fighter { hit_points: 13, ..boss }));
    }

    #[test]
    fn test_loadouts() {
        // 5 weapons x 6 armor choices x (1 + 6 + 15) ring choices
        assert_eq!(loadouts().count(), 5 * 6 * 22);
    }

    #[test]
    fn test_weak_boss() {
        assert_eq!(solve::<Solver>("Hit Points: 1\nDamage: 0\nArmor: 0\n", 1), "8");
    }

    #[test]
    fn test_unbeatable_boss() {
        // the priciest weapon, armor and two rings still lose
        let input = "Hit Points: 1000\nDamage: 100\nArmor: 0\n";
        assert_eq!(solve::<Solver>(input, 2), (74 + 102 + 100 + 80).to_string());
    }
}
