use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid puzzle state {encoding:?}: {reason}")]
    InvalidState {
        encoding: String,
        reason: &'static str,
    },

    #[error("illegal move: position {position} cannot move into the empty space at {empty}")]
    IllegalMove { position: usize, empty: usize },

    #[error("puzzle {encoding} cannot be solved: {inversions} inversions, the solved state has odd parity")]
    Unsolvable { encoding: String, inversions: usize },

    #[error("unknown search strategy {0:?}")]
    InvalidStrategy(String),

    /// Every solvable state is reachable, so an empty frontier before the goal
    /// is popped means the engine itself is broken.
    #[error("frontier exhausted after visiting {visited} nodes without reaching the goal")]
    FrontierExhausted { visited: usize },

    #[error("no search has been started")]
    NotStarted,
}

pub type Result<T> = std::result::Result<T, Error>;
