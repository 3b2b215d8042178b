//! Hooks for watching a search as it runs.

use log::{debug, info};

use crate::node::SearchNode;
use crate::solver::SolveReport;

/// Receives search events. Every method defaults to doing nothing.
pub trait SearchObserver {
    /// A node was taken off the frontier.
    fn node_popped(&mut self, _node: &SearchNode, _frontier_len: usize) {}

    /// A new board was queued with the given cost.
    fn node_admitted(&mut self, _node: &SearchNode, _cost: usize) {}

    fn solution_found(&mut self, _report: &SolveReport) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Forwards search events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn node_popped(&mut self, node: &SearchNode, frontier_len: usize) {
        let state = &node.state;
        debug!(
            "visiting {} at depth {} ({} queued)\n{}\nhamming {} manhattan {} nilsson {} inversions {}",
            state.encode(),
            node.depth,
            frontier_len,
            state,
            state.hamming_distance(),
            state.total_manhattan_distance(),
            state.nilsson_score(),
            state.count_inversions(),
        );
    }

    fn node_admitted(&mut self, node: &SearchNode, cost: usize) {
        debug!(
            "queued {} cost {} depth {}",
            node.state.encode(),
            cost,
            node.depth
        );
    }

    fn solution_found(&mut self, report: &SolveReport) {
        info!(
            "{}: solved in {} moves ({}) after visiting {} nodes",
            report.strategy,
            report.depth,
            report.move_string(),
            report.visited
        );
    }
}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn node_popped(&mut self, node: &SearchNode, frontier_len: usize) {
        (**self).node_popped(node, frontier_len);
    }

    fn node_admitted(&mut self, node: &SearchNode, cost: usize) {
        (**self).node_admitted(node, cost);
    }

    fn solution_found(&mut self, report: &SolveReport) {
        (**self).solution_found(report);
    }
}
