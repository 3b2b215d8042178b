use rand::{seq::SliceRandom, Rng};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub const CENTER: usize = 0;
pub const DEFAULT_SHUFFLE_MOVES: usize = 31;

const SOLVED: [u8; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

// (row, col) of each position. Position 0 is the center, 1..8 run clockwise
// around it starting at the top-left corner:
//
// |1|2|3|
// |8|0|4|
// |7|6|5|
const COORDS: [(usize, usize); 9] = [
    (1, 1),
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 2),
    (2, 2),
    (2, 1),
    (2, 0),
    (1, 0),
];

// Positions listed in physical row-major reading order.
const ROW_MAJOR: [usize; 9] = [1, 2, 3, 8, 0, 4, 7, 6, 5];

/// A 3x3 sliding puzzle board stored in ring order.
///
/// `tiles[p]` is the tile sitting at position `p`, with 0 standing for the
/// empty space. The solved board is `012345678`: empty in the middle, tiles
/// 1..8 clockwise from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    tiles: [u8; 9],
}

fn next_in_ring(position: usize) -> usize {
    position % 8 + 1
}

fn prev_in_ring(position: usize) -> usize {
    if position > 1 {
        position - 1
    } else {
        8
    }
}

impl PuzzleState {
    pub fn new() -> Self {
        Self { tiles: SOLVED }
    }

    /// Replaces the board with the one described by `encoding`.
    ///
    /// The board is left untouched if the encoding is rejected.
    pub fn set_state(&mut self, encoding: &str) -> Result<()> {
        let invalid = |reason| Error::InvalidState {
            encoding: encoding.to_string(),
            reason,
        };

        if encoding.chars().count() != 9 {
            return Err(invalid("encoding must be 9 symbols long"));
        }

        let mut tiles = [0u8; 9];
        let mut seen = [false; 9];
        for (slot, symbol) in tiles.iter_mut().zip(encoding.chars()) {
            let tile = match symbol.to_digit(10) {
                Some(d) if d <= 8 => d as usize,
                _ => return Err(invalid("every symbol must be a digit from 0 to 8")),
            };
            if seen[tile] {
                return Err(invalid("digits must be unique"));
            }
            seen[tile] = true;
            *slot = tile as u8;
        }

        self.tiles = tiles;
        Ok(())
    }

    pub fn encode(&self) -> String {
        self.tiles.iter().map(|t| char::from(b'0' + t)).collect()
    }

    pub fn tiles(&self) -> &[u8; 9] {
        &self.tiles
    }

    pub fn tile_at(&self, position: usize) -> u8 {
        self.tiles[position]
    }

    pub fn is_solved(&self) -> bool {
        self.tiles == SOLVED
    }

    pub fn empty_position(&self) -> usize {
        self.position_of(0)
    }

    fn position_of(&self, tile: u8) -> usize {
        // Tiles are always a permutation of 0..=8, so every tile is present.
        self.tiles.iter().position(|&t| t == tile).unwrap_or(CENTER)
    }

    /// Positions whose tile may slide into the empty space.
    ///
    /// The center touches the four edge positions (the even ones). A ring
    /// position touches its ring neighbours, and edge positions also touch
    /// the center.
    pub fn valid_moves(&self) -> Vec<usize> {
        let empty = self.empty_position();

        if empty == CENTER {
            return vec![2, 4, 6, 8];
        }

        let prev = prev_in_ring(empty);
        let next = next_in_ring(empty);
        if empty % 2 == 0 {
            vec![CENTER, prev, next]
        } else {
            vec![prev, next]
        }
    }

    /// Slides the tile at `position` into the empty space.
    pub fn apply_move(&mut self, position: usize) -> Result<()> {
        let empty = self.empty_position();
        if !self.valid_moves().contains(&position) {
            return Err(Error::IllegalMove { position, empty });
        }

        self.tiles.swap(empty, position);
        Ok(())
    }

    /// Applies `moves` in order, stopping at the first illegal one.
    pub fn apply_sequence(&mut self, moves: &[usize]) -> Result<()> {
        moves.iter().try_for_each(|&position| self.apply_move(position))
    }

    /// Counts inversions among the tiles read in physical row-major order.
    ///
    /// The ring layout means the solved board reads `1 2 3 8 4 7 6 5`, which
    /// has 7 inversions.
    pub fn count_inversions(&self) -> usize {
        let row_major: Vec<u8> = ROW_MAJOR
            .iter()
            .map(|&p| self.tiles[p])
            .filter(|&t| t != 0)
            .collect();

        row_major
            .iter()
            .enumerate()
            .map(|(i, &val)| row_major[i + 1..].iter().filter(|&&next| next < val).count())
            .sum()
    }

    /// Moves never change inversion parity on a 3-wide board, and the solved
    /// board has odd parity.
    pub fn is_solvable(&self) -> bool {
        self.count_inversions() % 2 == 1
    }

    pub fn hamming_distance(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(position, &tile)| tile != 0 && tile as usize != position)
            .count()
    }

    pub fn manhattan_distance(&self, tile: u8) -> usize {
        if tile == 0 || tile > 8 {
            return 0;
        }

        let (row, col) = COORDS[self.position_of(tile)];
        let (goal_row, goal_col) = COORDS[tile as usize];
        row.abs_diff(goal_row) + col.abs_diff(goal_col)
    }

    pub fn total_manhattan_distance(&self) -> usize {
        (1..=8).map(|tile| self.manhattan_distance(tile)).sum()
    }

    /// Nilsson's sequence score: `3 * sequence + total_manhattan_distance`.
    ///
    /// The sequence scores 1 for a tile in the center and 2 for every ring
    /// tile whose clockwise neighbour is not its successor. Pairs involving
    /// the empty space are skipped.
    pub fn nilsson_score(&self) -> usize {
        let mut sequence = 0;
        if self.empty_position() != CENTER {
            sequence += 1;
        }

        for position in 1..=8 {
            let current = self.tiles[position];
            let next = self.tiles[next_in_ring(position)];
            if current == 0 || next == 0 {
                continue;
            }
            if next as usize != next_in_ring(current as usize) {
                sequence += 2;
            }
        }

        3 * sequence + self.total_manhattan_distance()
    }

    /// Scrambles the board with `num_moves` random legal moves. No move undoes
    /// the one before it, and the result is always solvable.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R, num_moves: usize) {
        let mut came_from: Option<usize> = None;

        for _ in 0..num_moves {
            let mut moves = self.valid_moves();
            moves.retain(|&m| Some(m) != came_from);

            let Some(&next) = moves.choose(rng) else {
                break;
            };
            let empty = self.empty_position();
            self.tiles.swap(empty, next);
            came_from = Some(empty);
        }
    }
}

impl Default for PuzzleState {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for PuzzleState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut state = Self::new();
        state.set_state(s)?;
        Ok(state)
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=======")?;
        for row in ROW_MAJOR.chunks(3) {
            for &position in row {
                match self.tiles[position] {
                    0 => write!(f, "| ")?,
                    tile => write!(f, "|{}", tile)?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "=======")
    }
}
