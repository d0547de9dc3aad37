//! Generic best-first search
//!
//! Puzzles describe their state space through [`SearchProblem`]; the search
//! itself is `pathfinding`'s A*. A problem that keeps the default heuristic
//! gets Dijkstra.

use std::hash::Hash;

use num_traits::Zero;
use pathfinding::directed::astar::astar;

/// One step out of a state: where it leads and what it costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move<S, C> {
    pub to: S,
    pub cost: C,
}

impl<S, C> Move<S, C> {
    pub fn new(to: S, cost: C) -> Self {
        Self { to, cost }
    }
}

pub trait SearchProblem {
    type State: Clone + Eq + Hash;
    type Cost: Zero + Ord + Copy;

    fn start(&self) -> Self::State;

    fn moves(&self, state: &Self::State) -> Vec<Move<Self::State, Self::Cost>>;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Lower bound on the remaining cost; must never overestimate.
    fn heuristic(&self, _state: &Self::State) -> Self::Cost {
        Self::Cost::zero()
    }
}

/// Lowest-cost path from the start to a goal, or `None` if no goal is reachable.
pub fn shortest_path<P: SearchProblem>(problem: &P) -> Option<(Vec<P::State>, P::Cost)> {
    astar(
        &problem.start(),
        |state| {
            problem
                .moves(state)
                .into_iter()
                .map(|m| (m.to, m.cost))
        },
        |state| problem.heuristic(state),
        |state| problem.is_goal(state),
    )
}

/// Cost of the cheapest path, or `None` if no goal is reachable.
pub fn lowest_cost<P: SearchProblem>(problem: &P) -> Option<P::Cost> {
    shortest_path(problem).map(|(_, cost)| cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reach `target` from 1 using `+1` (cost 1) and `*2` (cost 1).
    struct Doubling {
        target: u32,
    }

    impl SearchProblem for Doubling {
        type State = u32;
        type Cost = u32;

        fn start(&self) -> u32 {
            1
        }

        fn moves(&self, &n: &u32) -> Vec<Move<u32, u32>> {
            [n + 1, n * 2]
                .into_iter()
                .filter(|&m| m <= self.target)
                .map(|m| Move::new(m, 1))
                .collect()
        }

        fn is_goal(&self, &n: &u32) -> bool {
            n == self.target
        }
    }

    #[test]
    fn test_shortest_path() {
        // 1 -> 2 -> 4 -> 5 -> 10
        let (path, cost) = shortest_path(&Doubling { target: 10 }).unwrap();
        assert_eq!(cost, 4);
        assert_eq!(path.first(), Some(&1));
        assert_eq!(path.last(), Some(&10));
    }

    #[test]
    fn test_start_is_goal() {
        assert_eq!(lowest_cost(&Doubling { target: 1 }), Some(0));
    }

    struct Unreachable;

    impl SearchProblem for Unreachable {
        type State = i32;
        type Cost = u32;

        fn start(&self) -> i32 {
            0
        }

        fn moves(&self, &n: &i32) -> Vec<Move<i32, u32>> {
            if n < 5 { vec![Move::new(n + 1, 2)] } else { vec![] }
        }

        fn is_goal(&self, &n: &i32) -> bool {
            n == 10
        }
    }

    #[test]
    fn test_unreachable_goal() {
        assert_eq!(lowest_cost(&Unreachable), None);
    }
}
