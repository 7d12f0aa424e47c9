//! Solver for the classic 33-cell cross peg-solitaire puzzle.
//!
//! A board is a bitboard laid out as 7 rows of 9 columns inside a 63-bit
//! integer. Only 33 of those bits are playable cells; the rest are
//! permanently empty padding that absorbs row-edge wraps during move
//! generation. The solver precomputes the 76 possible jump templates,
//! then runs an exhaustive depth-first search over board states,
//! deduplicating through a predecessor map that doubles as the visited
//! set and as the backtracking chain for reconstructing the winning
//! move sequence.

mod mirror;
mod moves;
mod pretty;
mod search;
mod state_map;

#[cfg(test)]
mod tests;

pub use moves::{generate_moves, shuffle_moves, Move};
pub use pretty::{IntoPretty, Pretty};
pub use search::{solution_path, solve, ReconstructionError};
pub use state_map::{DidAddendAlreadyExist, PredecessorMap};

/// A full board configuration. Bit `i` is set iff cell `i` holds a peg.
///
/// Row `r` (counted from the top) spans bits `62 - 9 * r` down to
/// `54 - 9 * r`, leftmost column first. Columns 0 and 8 are padding in
/// every row; rows 0, 1, 5, and 6 additionally pad columns 1, 2, 6,
/// and 7, which carves the cross shape out of the rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Board(pub u64);

impl Board {
    /// The opening position: a peg on every playable cell except the
    /// center.
    pub const START: Board =
        Board(0b000111000_000111000_011111110_011101110_011111110_000111000_000111000);

    /// The winning position: a single peg left on the center cell.
    pub const GOAL: Board =
        Board(0b000000000_000000000_000000000_000010000_000000000_000000000_000000000);

    /// The 33 playable cells of the cross.
    pub const LEGAL_CELLS: u64 = Board::START.0 | Board::GOAL.0;

    /// No jump can ever clear the last peg off the board, so the empty
    /// board is free to serve as a vacant-slot marker.
    pub const EMPTY: Board = Board(0);

    pub fn peg_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether every peg sits on a playable cell.
    pub fn is_within_legal_cells(self) -> bool {
        self.0 & !Board::LEGAL_CELLS == 0
    }

    /// Whether `idx` names one of the 33 playable cells.
    ///
    /// This single predicate stands in for row/column boundary checks:
    /// the padding columns guarantee that any step off the edge of a
    /// row lands on a bit outside [`Board::LEGAL_CELLS`].
    pub fn is_legal_cell(idx: i32) -> bool {
        (0..63).contains(&idx) && Board::LEGAL_CELLS & (1u64 << idx) != 0
    }
}

const _: () = assert!(Board::START.0 & Board::GOAL.0 == 0);
const _: () = assert!(Board::GOAL.0.count_ones() == 1);
const _: () = assert!(Board::LEGAL_CELLS.count_ones() == 33);
const _: () = assert!(Board::LEGAL_CELLS >> 63 == 0);
