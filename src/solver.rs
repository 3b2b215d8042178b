use crate::error::{Error, Result};
use crate::frontier::Frontier;
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::observer::{NoopObserver, SearchObserver};
use crate::puzzle::PuzzleState;
use crate::strategy::Strategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Running,
    Solved,
}

/// Outcome of a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub strategy: Strategy,
    pub solved: bool,
    /// Positions moved into the empty space, first move first.
    pub moves: Vec<usize>,
    /// Nodes taken off the frontier.
    pub visited: usize,
    pub depth: usize,
}

impl SolveReport {
    pub fn move_string(&self) -> String {
        self.moves.iter().map(|m| m.to_string()).collect()
    }
}

/// Best-first search over puzzle boards.
///
/// A solver owns its frontier and node storage and can be reused: each call
/// to [`Solver::start`] or [`Solver::solve`] discards the previous run.
pub struct Solver<O: SearchObserver = NoopObserver> {
    strategy: Strategy,
    observer: O,
    scratch: PuzzleState,
    nodes: NodeArena,
    frontier: Frontier,
    visited: Vec<NodeId>,
    solution: Option<NodeId>,
    solved: bool,
    started: bool,
}

impl Solver {
    pub fn new(strategy: Strategy) -> Self {
        Self::with_observer(strategy, NoopObserver)
    }
}

impl<O: SearchObserver> Solver<O> {
    pub fn with_observer(strategy: Strategy, observer: O) -> Self {
        Self {
            strategy,
            observer,
            scratch: PuzzleState::new(),
            nodes: NodeArena::new(),
            frontier: Frontier::new(),
            visited: Vec::new(),
            solution: None,
            solved: false,
            started: false,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn frontier_high_water(&self) -> usize {
        self.frontier.high_water()
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn reset(&mut self) {
        self.scratch = PuzzleState::new();
        self.nodes.clear();
        self.frontier.clear();
        self.visited.clear();
        self.solution = None;
        self.solved = false;
        self.started = false;
    }

    /// Solves the puzzle given by `initial`, running until the goal is found.
    pub fn solve(&mut self, initial: &str) -> Result<SolveReport> {
        let mut status = self.start(initial)?;
        while status == SearchStatus::Running {
            status = self.step()?;
        }
        Ok(self.report())
    }

    /// Loads `initial` and queues it as the root of a new search.
    ///
    /// Malformed and unsolvable boards are rejected here, before anything is
    /// expanded. A board that is already solved finishes immediately without
    /// visiting any node.
    pub fn start(&mut self, initial: &str) -> Result<SearchStatus> {
        self.reset();
        let initial: PuzzleState = initial.parse()?;

        if initial.is_solved() {
            self.started = true;
            self.solved = true;
            let report = self.report();
            self.observer.solution_found(&report);
            return Ok(SearchStatus::Solved);
        }

        if !initial.is_solvable() {
            return Err(Error::Unsolvable {
                encoding: initial.encode(),
                inversions: initial.count_inversions(),
            });
        }

        self.scratch = initial;
        self.started = true;
        self.admit(SearchNode::root(initial));
        Ok(SearchStatus::Running)
    }

    /// Expands the cheapest node on the frontier.
    pub fn step(&mut self) -> Result<SearchStatus> {
        if !self.started {
            return Err(Error::NotStarted);
        }
        if self.solved {
            return Ok(SearchStatus::Solved);
        }

        let Some((_, id)) = self.frontier.pop() else {
            return Err(Error::FrontierExhausted {
                visited: self.visited.len(),
            });
        };
        self.visited.push(id);
        let node = self.nodes[id];

        self.scratch = node.state;
        self.observer.node_popped(&node, self.frontier.len());

        if self.scratch.is_solved() {
            self.solved = true;
            self.solution = Some(id);
            let report = self.report();
            self.observer.solution_found(&report);
            return Ok(SearchStatus::Solved);
        }

        let empty = self.scratch.empty_position();
        let before = self.scratch;

        for position in before.valid_moves() {
            if node.forbidden == Some(position) {
                continue;
            }

            // Moves come straight from valid_moves, so an error here is a bug
            // and ends the run.
            self.scratch.apply_move(position)?;
            self.admit(SearchNode {
                state: self.scratch,
                depth: node.depth + 1,
                forbidden: Some(empty),
                parent: Some(id),
            });
            self.scratch = before;
        }

        Ok(SearchStatus::Running)
    }

    /// Queues `node` unless its board has been queued before. The first path
    /// to reach a board wins.
    fn admit(&mut self, node: SearchNode) {
        if self.frontier.has_seen(&node.state) {
            return;
        }

        let cost = self.strategy.cost(node.depth, &node.state);
        let id = self.nodes.push(node);
        self.frontier.push(cost, &node.state, id);
        self.observer.node_admitted(&node, cost);
    }

    /// Summary of the current run. Moves are empty until the goal is reached.
    pub fn report(&self) -> SolveReport {
        let moves = match self.solution {
            Some(id) if self.solved => self.nodes.moves_to(id),
            _ => Vec::new(),
        };

        SolveReport {
            strategy: self.strategy,
            solved: self.solved,
            depth: moves.len(),
            moves,
            visited: self.visited.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_solved_visits_nothing() {
        for strategy in Strategy::ALL {
            let mut solver = Solver::new(strategy);
            let report = solver.solve("012345678").unwrap();

            assert!(report.solved);
            assert_eq!(report.move_string(), "");
            assert_eq!(report.visited, 0);
            assert_eq!(report.depth, 0);
        }
    }

    #[test]
    fn unsolvable_fails_before_expanding() {
        let mut solver = Solver::new(Strategy::AStar);
        let err = solver.solve("021345678").unwrap_err();

        assert_eq!(
            err,
            Error::Unsolvable {
                encoding: "021345678".to_string(),
                inversions: 8,
            }
        );
        assert_eq!(solver.visited_count(), 0);
        assert_eq!(solver.frontier_len(), 0);
    }

    #[test]
    fn malformed_input_is_rejected() {
        let mut solver = Solver::new(Strategy::UniformCost);
        assert!(matches!(
            solver.solve("0123"),
            Err(Error::InvalidState { .. })
        ));
    }

    #[test]
    fn step_requires_start() {
        let mut solver = Solver::new(Strategy::UniformCost);
        assert_eq!(solver.step(), Err(Error::NotStarted));
    }

    #[test]
    fn one_move_away() {
        // Tile 2 sits in the center; sliding it back up solves the board
        let mut solver = Solver::new(Strategy::UniformCost);
        let report = solver.solve("210345678").unwrap();

        assert_eq!(report.moves, vec![0]);
        assert_eq!(report.depth, 1);
        // Root, then the solved child
        assert_eq!(report.visited, 2);
    }

    #[test]
    fn stepping_can_be_stopped_and_resumed() {
        let mut solver = Solver::new(Strategy::UniformCost);
        assert_eq!(solver.start("412367580").unwrap(), SearchStatus::Running);

        for _ in 0..10 {
            assert_eq!(solver.step().unwrap(), SearchStatus::Running);
        }
        assert_eq!(solver.visited_count(), 10);
        assert!(!solver.report().solved);
        assert!(solver.report().moves.is_empty());

        let mut status = SearchStatus::Running;
        while status == SearchStatus::Running {
            status = solver.step().unwrap();
        }
        assert!(solver.is_solved());
        // Further steps are no-ops once solved
        assert_eq!(solver.step().unwrap(), SearchStatus::Solved);
    }

    #[test]
    fn root_never_undoes_into_forbidden_move() {
        let mut solver = Solver::new(Strategy::UniformCost);
        solver.start("201345678").unwrap();
        solver.step().unwrap();

        // The root had two moves and both were queued
        assert_eq!(solver.frontier_len(), 2);
        solver.step().unwrap();
        // Its child expands only away from where the empty space came from
        assert_eq!(solver.frontier_len(), 3);
    }

    #[test]
    fn solver_can_be_reused() {
        let mut solver = Solver::new(Strategy::GreedyBestFirst);
        let first = solver.solve("412367580").unwrap();
        let second = solver.solve("412367580").unwrap();
        assert_eq!(first, second);

        let solved = solver.solve("012345678").unwrap();
        assert_eq!(solved.visited, 0);
    }
}
