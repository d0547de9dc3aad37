//! Memoisation cache for dynamic programming over a DAG of sub-problems
//!
//! A problem names, for every index, the indices it depends on and how to
//! combine their values. [`DpCache`] resolves dependencies recursively and
//! computes each index exactly once.
//!
//! # Backends
//!
//! - [`VecBackend`]: dense `usize` indices starting at 0 (auto-growing)
//! - [`HashMapBackend`]: any `Hash + Eq` index, for sparse or structured states
//!
//! # Warning: Cycle Behavior
//!
//! There is no cycle detection. A cyclic dependency graph recurses until the
//! stack overflows, so dependencies must form a DAG.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
//!
//! /// Ways to climb `n` steps taking 1, 2 or 3 at a time.
//! struct Steps;
//!
//! impl DpProblem<usize, u64> for Steps {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         (1..=3).filter_map(|step| n.checked_sub(step)).collect()
//!     }
//!     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
//!         if *n == 0 { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let cache = DpCache::with_problem(VecBackend::new(), Steps);
//! assert_eq!(cache.get(&4), 7);
//! ```
//!
//! # Example: closures
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, HashMapBackend};
//!
//! let binomial = DpCache::new(
//!     HashMapBackend::new(),
//!     |&(n, k): &(u32, u32)| if k == 0 || k == n { vec![] } else { vec![(n - 1, k - 1), (n - 1, k)] },
//!     |_: &(u32, u32), deps: Vec<u64>| if deps.is_empty() { 1 } else { deps[0] + deps[1] },
//! );
//! assert_eq!(binomial.get(&(8, 4)), 70);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::DpCache;
pub use problem::{ClosureProblem, DpProblem};

#[cfg(test)]
mod tests;
