//! Solver for the 8-puzzle using uniform-cost, greedy best-first and A*
//! search.
//!
//! Boards are encoded as 9-digit strings in ring order: the first digit is
//! the center cell, the remaining eight run clockwise from the top-left
//! corner, and `0` marks the empty space. The solved board is `012345678`.
//!
//! ```
//! use eight_puzzle::{Solver, Strategy};
//!
//! let mut solver = Solver::new(Strategy::UniformCost);
//! let report = solver.solve("210345678").unwrap();
//! assert_eq!(report.move_string(), "0");
//! ```

pub mod error;
pub mod frontier;
pub mod node;
pub mod observer;
pub mod puzzle;
pub mod solver;
pub mod strategy;

pub use error::{Error, Result};
pub use observer::{LogObserver, NoopObserver, SearchObserver};
pub use puzzle::{PuzzleState, DEFAULT_SHUFFLE_MOVES};
pub use solver::{SearchStatus, SolveReport, Solver};
pub use strategy::Strategy;
