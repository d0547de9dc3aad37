use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::search::{self, Move, SearchProblem};

/// Amphipod
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 23, tags = ["2021", "shortest-path", "a-star"])]
pub struct Solver;

const HALL: usize = 11;
const ROOMS: usize = 4;
const MAX_DEPTH: usize = 4;
const EMPTY: u8 = 0;
/// Hallway cells an amphipod may stop on (never right outside a room).
const STOPS: [usize; 7] = [0, 1, 3, 5, 7, 9, 10];
const ENERGY: [u32; ROOMS] = [1, 10, 100, 1000];
/// Rows spliced into the middle of the diagram once it is unfolded.
const FOLDED_ROWS: [[u8; ROOMS]; 2] = [[4, 3, 2, 1], [4, 2, 1, 3]];

fn door(room: usize) -> usize {
    2 + 2 * room
}

/// Amphipods are `1..=4` for A to D. Rooms are listed top slot first; slots
/// below a shallow room's floor hold that room's own amphipod so they count
/// as settled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Burrow {
    hall: [u8; HALL],
    rooms: [[u8; MAX_DEPTH]; ROOMS],
}

impl Burrow {
    fn from_rows(rows: &[[u8; ROOMS]]) -> Self {
        let mut rooms = [[0; MAX_DEPTH]; ROOMS];
        for (r, room) in rooms.iter_mut().enumerate() {
            for (i, slot) in room.iter_mut().enumerate() {
                *slot = rows.get(i).map_or(r as u8 + 1, |row| row[r]);
            }
        }
        Self {
            hall: [EMPTY; HALL],
            rooms,
        }
    }

    /// Everything from `slot` down already belongs in room `r`.
    fn settled_from(&self, r: usize, slot: usize) -> bool {
        self.rooms[r][slot..].iter().all(|&a| a == r as u8 + 1)
    }

    /// Hallway cells from `from` to `to` are free, ignoring `from` itself.
    fn clear(&self, from: usize, to: usize) -> bool {
        (from.min(to)..=from.max(to))
            .filter(|&c| c != from)
            .all(|c| self.hall[c] == EMPTY)
    }
}

struct Organize {
    start: Burrow,
}

impl SearchProblem for Organize {
    type State = Burrow;
    type Cost = u32;

    fn start(&self) -> Burrow {
        self.start.clone()
    }

    fn moves(&self, state: &Burrow) -> Vec<Move<Burrow, u32>> {
        let mut moves = Vec::new();

        for (r, room) in state.rooms.iter().enumerate() {
            let Some(slot) = room.iter().position(|&a| a != EMPTY) else {
                continue;
            };
            if state.settled_from(r, slot) {
                continue;
            }
            let amphipod = room[slot];
            for &x in &STOPS {
                if state.clear(door(r), x) {
                    let mut next = state.clone();
                    next.rooms[r][slot] = EMPTY;
                    next.hall[x] = amphipod;
                    let steps = slot + 1 + x.abs_diff(door(r));
                    moves.push(Move::new(next, steps as u32 * ENERGY[amphipod as usize - 1]));
                }
            }
        }

        for (x, &amphipod) in state.hall.iter().enumerate() {
            if amphipod == EMPTY {
                continue;
            }
            let home = amphipod as usize - 1;
            let room = &state.rooms[home];
            if room.iter().any(|&a| a != EMPTY && a != amphipod) || !state.clear(x, door(home)) {
                continue;
            }
            let Some(slot) = room.iter().rposition(|&a| a == EMPTY) else {
                continue;
            };
            let mut next = state.clone();
            next.hall[x] = EMPTY;
            next.rooms[home][slot] = amphipod;
            let steps = x.abs_diff(door(home)) + slot + 1;
            moves.push(Move::new(next, steps as u32 * ENERGY[home]));
        }

        moves
    }

    fn is_goal(&self, state: &Burrow) -> bool {
        (0..ROOMS).all(|r| state.settled_from(r, 0))
    }

    fn heuristic(&self, state: &Burrow) -> u32 {
        let hall: usize = state
            .hall
            .iter()
            .enumerate()
            .filter(|(_, a)| **a != EMPTY)
            .map(|(x, &a)| {
                let home = a as usize - 1;
                (x.abs_diff(door(home)) + 1) * ENERGY[home] as usize
            })
            .sum();
        let rooms: usize = (0..ROOMS)
            .flat_map(|r| (0..MAX_DEPTH).map(move |slot| (r, slot)))
            .filter(|&(r, slot)| state.rooms[r][slot] != EMPTY && !state.settled_from(r, slot))
            .map(|(r, slot)| {
                let home = state.rooms[r][slot] as usize - 1;
                // Out of the room, across (or a step aside and back), then in.
                let across = if home == r { 2 } else { door(r).abs_diff(door(home)) };
                (slot + 1 + across + 1) * ENERGY[home] as usize
            })
            .sum();
        (hall + rooms) as u32
    }
}

impl AocParser for Solver {
    /// Room contents row by row, top row first.
    type SharedData<'a> = Vec<[u8; ROOMS]>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let letters: Vec<u8> = input
            .bytes()
            .filter(|b| (b'A'..=b'D').contains(b))
            .map(|b| b - b'A' + 1)
            .collect();
        if letters.is_empty() || letters.len() % ROOMS != 0 || letters.len() > ROOMS * MAX_DEPTH {
            return Err(ParseError::InvalidFormat(format!(
                "expected up to {MAX_DEPTH} full rows of amphipods, found {} amphipods",
                letters.len()
            )));
        }
        let rows: Vec<[u8; ROOMS]> = letters
            .chunks_exact(ROOMS)
            .map(|row| [row[0], row[1], row[2], row[3]])
            .collect();
        for kind in 1..=ROOMS as u8 {
            if letters.iter().filter(|&&a| a == kind).count() != rows.len() {
                return Err(ParseError::InvalidFormat("each room needs a full set of amphipods".into()));
            }
        }
        Ok(rows)
    }
}

fn organize(rows: &[[u8; ROOMS]]) -> Result<String, SolveError> {
    let problem = Organize {
        start: Burrow::from_rows(rows),
    };
    search::lowest_cost(&problem)
        .map(|energy| energy.to_string())
        .ok_or_else(|| SolveError::failed("amphipods cannot be organized"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        organize(shared)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let [top, bottom] = shared.as_slice() else {
            return Err(SolveError::failed("the folded diagram has exactly two rows"));
        };
        organize(&[*top, FOLDED_ROWS[0], FOLDED_ROWS[1], *bottom])
    }
}
