use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::puzzle::PuzzleState;

/// How the solver prices a node on the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Cost is the node's depth.
    #[default]
    UniformCost,
    /// Cost is the total Manhattan distance, ignoring depth.
    GreedyBestFirst,
    /// Cost is depth plus Nilsson's sequence score. The score overestimates,
    /// so solutions are not guaranteed to be shortest.
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::UniformCost,
        Strategy::GreedyBestFirst,
        Strategy::AStar,
    ];

    pub fn cost(&self, depth: usize, state: &PuzzleState) -> usize {
        match self {
            Strategy::UniformCost => depth,
            Strategy::GreedyBestFirst => state.total_manhattan_distance(),
            Strategy::AStar => depth + state.nilsson_score(),
        }
    }

    /// Short selector used on the command line and in result tables.
    pub fn code(&self) -> &'static str {
        match self {
            Strategy::UniformCost => "UCS",
            Strategy::GreedyBestFirst => "BFS",
            Strategy::AStar => "A",
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ucs" | "uniform" | "uniform-cost" => Ok(Strategy::UniformCost),
            "bfs" | "greedy" | "best-first" => Ok(Strategy::GreedyBestFirst),
            "a" | "a*" | "astar" | "a-star" => Ok(Strategy::AStar),
            _ => Err(Error::InvalidStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Strategy::UniformCost => "Uniform cost",
            Strategy::GreedyBestFirst => "Greedy best-first",
            Strategy::AStar => "A*",
        };
        write!(f, "{}", s)
    }
}
