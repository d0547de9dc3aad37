//! Re-orders results arriving from parallel workers
//!
//! Two min-heaps: the keys still expected, and the results received ahead of
//! their turn. A result is released once it matches the smallest expected key.

use crate::executor::{SolverResult, WorkItem};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Output order: ascending (year, day, part)
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

impl ResultKey {
    /// One key per requested part of each work item
    pub fn for_work(work_items: &[WorkItem]) -> Vec<ResultKey> {
        work_items
            .iter()
            .flat_map(|w| {
                w.parts.clone().map(move |part| ResultKey {
                    year: w.year,
                    day: w.day,
                    part,
                })
            })
            .collect()
    }
}

/// Min-heap adapter keyed on [`ResultKey`]
struct Pending(SolverResult);

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        ResultKey::from(&other.0).cmp(&ResultKey::from(&self.0))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Pending {}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        ResultKey::from(&self.0) == ResultKey::from(&other.0)
    }
}

pub struct ResultAggregator {
    expected: BinaryHeap<Reverse<ResultKey>>,
    pending: BinaryHeap<Pending>,
}

impl ResultAggregator {
    pub fn new(expected_keys: Vec<ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Buffer `result` and release every result that is now next in order
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.push(Pending(result));

        let mut ready = Vec::new();
        while let (Some(Reverse(next)), Some(top)) = (self.expected.peek(), self.pending.peek()) {
            if ResultKey::from(&top.0) != *next {
                break;
            }
            self.expected.pop();
            if let Some(Pending(result)) = self.pending.pop() {
                ready.push(result);
            }
        }
        ready
    }

    /// Whatever is still buffered, in order
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let mut results: Vec<_> = self.pending.drain().map(|p| p.0).collect();
        results.sort_by_key(|r| ResultKey::from(r));
        results
    }

    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use proptest::prelude::*;

    fn make_result(year: u16, day: u8, part: u8) -> SolverResult {
        SolverResult {
            year,
            day,
            part,
            answer: Ok(format!("{year}/{day}/{part}")),
            parse_duration: None,
            solve_duration: TimeDelta::milliseconds(1),
        }
    }

    fn work(year: u16, day: u8, parts: std::ops::RangeInclusive<u8>) -> WorkItem {
        WorkItem { year, day, parts }
    }

    #[test]
    fn test_keys_for_work() {
        let keys = ResultKey::for_work(&[work(2020, 25, 1..=1), work(2021, 3, 1..=2)]);
        let flat: Vec<_> = keys.iter().map(|k| (k.year, k.day, k.part)).collect();
        assert_eq!(flat, [(2020, 25, 1), (2021, 3, 1), (2021, 3, 2)]);
    }

    #[test]
    fn test_out_of_order_results() {
        let keys = ResultKey::for_work(&[work(2015, 1, 1..=2), work(2015, 2, 1..=1)]);
        let mut agg = ResultAggregator::new(keys);

        assert!(agg.add(make_result(2015, 1, 2)).is_empty());
        assert!(agg.add(make_result(2015, 2, 1)).is_empty());

        let ready = agg.add(make_result(2015, 1, 1));
        let order: Vec<_> = ready.iter().map(|r| (r.day, r.part)).collect();
        assert_eq!(order, [(1, 1), (1, 2), (2, 1)]);
        assert!(agg.is_complete());
    }

    #[test]
    fn test_drain_leftovers() {
        let keys = ResultKey::for_work(&[work(2015, 1, 1..=2)]);
        let mut agg = ResultAggregator::new(keys);

        agg.add(make_result(2015, 1, 2));
        assert!(!agg.is_complete());

        let remaining = agg.drain();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].part, 2);
    }

    proptest! {
        /// Any arrival order is released as the sorted sequence
        #[test]
        fn any_arrival_order_is_released_sorted(
            order in Just((0..12usize).collect::<Vec<_>>()).prop_shuffle()
        ) {
            let items: Vec<_> = (1..=6).map(|day| work(2022, day, 1..=2)).collect();
            let keys = ResultKey::for_work(&items);
            let mut agg = ResultAggregator::new(keys.clone());

            let mut released = Vec::new();
            for i in order {
                let k = keys[i];
                released.extend(agg.add(make_result(k.year, k.day, k.part)));
            }

            prop_assert!(agg.is_complete());
            let got: Vec<_> = released.iter().map(ResultKey::from).collect();
            prop_assert_eq!(got, keys);
        }
    }
}
