//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Longest Collatz chain length, a sparse recursive problem.
struct Collatz;

impl DpProblem<u64, u32> for Collatz {
    fn deps(&self, n: &u64) -> Vec<u64> {
        match *n {
            0 | 1 => vec![],
            n if n % 2 == 0 => vec![n / 2],
            n => vec![3 * n + 1],
        }
    }

    fn compute(&self, _n: &u64, deps: Vec<u32>) -> u32 {
        deps.first().map_or(0, |d| d + 1)
    }
}

#[test]
fn test_collatz_with_hashmap_backend() {
    let cache = DpCache::with_problem(HashMapBackend::new(), Collatz);
    assert_eq!(cache.get(&1), 0);
    assert_eq!(cache.get(&6), 8);
    assert_eq!(cache.get(&27), 111);
}

#[test]
fn test_vec_backend_grows_on_demand() {
    let mut backend = VecBackend::with_capacity(2);
    assert_eq!(backend.get(&10), None);
    backend.insert(10, "ten");
    assert_eq!(backend.get(&10), Some(&"ten"));
    assert_eq!(backend.get(&3), None);
}

#[test]
fn test_shared_dependency_computed_once() {
    // Every index depends on all smaller indices; without memoisation this is exponential.
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let cache = DpCache::new(
        VecBackend::new(),
        |n: &usize| (0..*n).collect(),
        move |_: &usize, deps: Vec<u64>| {
            counter.set(counter.get() + 1);
            1 + deps.iter().sum::<u64>()
        },
    );

    assert_eq!(cache.get(&20), 1 << 20);
    assert_eq!(calls.get(), 21);

    assert_eq!(cache.get(&20), 1 << 20);
    assert_eq!(calls.get(), 21);
}
