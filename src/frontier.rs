//! Min-priority frontier plus the set of boards already admitted.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

use crate::node::NodeId;
use crate::puzzle::PuzzleState;

/// Ordering key: lowest cost first, ties broken by the board encoding read as
/// a digit string. Comparing the tile arrays gives the same order as
/// comparing the encoded strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierKey {
    cost: usize,
    tiles: [u8; 9],
}

#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
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
        self.key.cmp(&other.key)
    }
}

#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    seen: HashSet<PuzzleState>,
    high_water: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `state` was ever pushed, including boards already popped.
    pub fn has_seen(&self, state: &PuzzleState) -> bool {
        self.seen.contains(state)
    }

    /// Queues `node` under `cost` and records `state` as seen.
    ///
    /// Returns `false` without queueing if the board was seen before.
    pub fn push(&mut self, cost: usize, state: &PuzzleState, node: NodeId) -> bool {
        if !self.seen.insert(*state) {
            return false;
        }

        self.heap.push(FrontierEntry {
            key: Reverse(FrontierKey {
                cost,
                tiles: *state.tiles(),
            }),
            node,
        });
        self.high_water = self.high_water.max(self.heap.len());
        true
    }

    pub fn pop(&mut self) -> Option<(usize, NodeId)> {
        self.heap.pop().map(|e| (e.key.0.cost, e.node))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    pub fn high_water(&self) -> usize {
        self.high_water
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.seen.clear();
        self.high_water = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(encoding: &str) -> PuzzleState {
        encoding.parse().unwrap()
    }

    #[test]
    fn pops_lowest_cost_first() {
        let mut frontier = Frontier::new();
        frontier.push(10, &state("012345678"), 0);
        frontier.push(5, &state("102345678"), 1);
        frontier.push(15, &state("210345678"), 2);

        assert_eq!(frontier.pop(), Some((5, 1)));
        assert_eq!(frontier.pop(), Some((10, 0)));
        assert_eq!(frontier.pop(), Some((15, 2)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn equal_costs_pop_in_encoding_order() {
        let mut frontier = Frontier::new();
        frontier.push(3, &state("412367580"), 0);
        frontier.push(3, &state("102345678"), 1);
        frontier.push(3, &state("210345678"), 2);

        let order: Vec<NodeId> = std::iter::from_fn(|| frontier.pop().map(|(_, id)| id)).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn duplicate_board_rejected() {
        let mut frontier = Frontier::new();
        assert!(frontier.push(4, &state("412367580"), 0));
        assert!(!frontier.push(1, &state("412367580"), 1));
        assert_eq!(frontier.len(), 1);

        // Still rejected after the first push has been popped
        frontier.pop();
        assert!(frontier.has_seen(&state("412367580")));
        assert!(!frontier.push(0, &state("412367580"), 2));
        assert!(frontier.is_empty());
    }

    #[test]
    fn high_water_survives_pops() {
        let mut frontier = Frontier::new();
        frontier.push(1, &state("012345678"), 0);
        frontier.push(2, &state("102345678"), 1);
        let _ = frontier.pop();
        assert_eq!(frontier.high_water(), 2);
        assert_eq!(frontier.seen_count(), 2);

        frontier.clear();
        assert_eq!(frontier.high_water(), 0);
        assert!(!frontier.has_seen(&state("012345678")));
    }
}
