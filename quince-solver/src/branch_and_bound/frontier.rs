use std::cmp::Ordering;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::branch_and_bound::NodeId;

/// The min-priority frontier of the search: nodes awaiting selection,
/// ordered by their lower bound.
///
/// Ties on the bound are broken by insertion order, so nodes with equal
/// bounds are served first-in-first-out and selection is fully
/// deterministic.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn push(&mut self, node: NodeId, bound: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;

        self.heap.push(Reverse(FrontierEntry { bound, seq, node }));
    }

    /// Removes and returns the most promising node together with its bound.
    pub(crate) fn pop(&mut self) -> Option<(NodeId, f64)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.node, entry.bound))
    }

    /// A snapshot of the remaining bounds, most promising first.
    ///
    /// Only used to annotate history events; the heap itself is never
    /// resorted.
    pub(crate) fn bounds(&self) -> Vec<f64> {
        let mut bounds = self
            .heap
            .iter()
            .map(|Reverse(entry)| entry.bound)
            .collect::<Vec<_>>();
        bounds.sort_by(f64::total_cmp);
        bounds
    }
}

#[derive(Debug)]
struct FrontierEntry {
    bound: f64,
    seq: u64,
    node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bound
            .total_cmp(&other.bound)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}
