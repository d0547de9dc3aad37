use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;
use crate::utils::search::{Move, SearchProblem, lowest_cost};

/// Wizard Simulator 20XX
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 22, tags = ["2015", "search", "dijkstra"])]
pub struct Solver;

const PLAYER_HIT_POINTS: i32 = 50;
const PLAYER_MANA: i32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Spell {
    MagicMissile,
    Drain,
    Shield,
    Poison,
    Recharge,
}

impl Spell {
    const ALL: [Spell; 5] = [
        Spell::MagicMissile,
        Spell::Drain,
        Spell::Shield,
        Spell::Poison,
        Spell::Recharge,
    ];

    fn cost(self) -> i32 {
        match self {
            Spell::MagicMissile => 53,
            Spell::Drain => 73,
            Spell::Shield => 113,
            Spell::Poison => 173,
            Spell::Recharge => 229,
        }
    }
}

/// The fight at the start of one of the player's turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Battle {
    hit_points: i32,
    mana: i32,
    boss_hit_points: i32,
    shield: u8,
    poison: u8,
    recharge: u8,
}

impl Battle {
    fn boss_dead(&self) -> bool {
        self.boss_hit_points <= 0
    }

    /// Ticks every active effect and returns the player's armor for this turn.
    fn apply_effects(&mut self) -> i32 {
        let mut armor = 0;
        if self.shield > 0 {
            armor = 7;
            self.shield -= 1;
        }
        if self.poison > 0 {
            self.boss_hit_points -= 3;
            self.poison -= 1;
        }
        if self.recharge > 0 {
            self.mana += 101;
            self.recharge -= 1;
        }
        armor
    }

    /// `None` when the spell is unaffordable or its effect is still running.
    fn cast(mut self, spell: Spell) -> Option<Self> {
        if spell.cost() > self.mana {
            return None;
        }
        self.mana -= spell.cost();
        match spell {
            Spell::MagicMissile => self.boss_hit_points -= 4,
            Spell::Drain => {
                self.boss_hit_points -= 2;
                self.hit_points += 2;
            }
            Spell::Shield if self.shield == 0 => self.shield = 6,
            Spell::Poison if self.poison == 0 => self.poison = 6,
            Spell::Recharge if self.recharge == 0 => self.recharge = 5,
            _ => return None,
        }
        Some(self)
    }

    /// The fight once the boss is down; all wins are the same goal state.
    fn won() -> Self {
        Battle {
            hit_points: 0,
            mana: 0,
            boss_hit_points: 0,
            shield: 0,
            poison: 0,
            recharge: 0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Duel {
    start: Battle,
    boss_damage: i32,
    /// Hard mode: the player loses one hit point at the start of each of their turns.
    hard: bool,
}

impl SearchProblem for Duel {
    type State = Battle;
    type Cost = i32;

    fn start(&self) -> Battle {
        self.start
    }

    fn moves(&self, state: &Battle) -> Vec<Move<Battle, i32>> {
        let mut turn = *state;
        if self.hard {
            turn.hit_points -= 1;
            if turn.hit_points <= 0 {
                return vec![];
            }
        }
        turn.apply_effects();
        if turn.boss_dead() {
            return vec![Move::new(Battle::won(), 0)];
        }
        Spell::ALL
            .into_iter()
            .filter_map(|spell| {
                let mut next = turn.cast(spell)?;
                if !next.boss_dead() {
                    let armor = next.apply_effects();
                    if !next.boss_dead() {
                        next.hit_points -= (self.boss_damage - armor).max(1);
                        if next.hit_points <= 0 {
                            return None;
                        }
                    }
                }
                let next = if next.boss_dead() { Battle::won() } else { next };
                Some(Move::new(next, spell.cost()))
            })
            .collect()
    }

    fn is_goal(&self, state: &Battle) -> bool {
        *state == Battle::won()
    }
}

fn least_mana(duel: &Duel) -> Result<String, SolveError> {
    lowest_cost(duel)
        .map(|mana| mana.to_string())
        .ok_or_else(|| SolveError::failed("the boss cannot be beaten"))
}

impl AocParser for Solver {
    type SharedData<'a> = Duel;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let [boss_hit_points, boss_damage] = parse::integers_array(input)?;
        Ok(Duel {
            start: Battle {
                hit_points: PLAYER_HIT_POINTS,
                mana: PLAYER_MANA,
                boss_hit_points,
                shield: 0,
                poison: 0,
                recharge: 0,
            },
            boss_damage,
            hard: false,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        least_mana(shared)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        least_mana(&Duel {
            hard: true,
            ..*shared
        })
    }
}
