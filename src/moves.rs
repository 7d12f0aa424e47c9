use super::*;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

/// A precomputed jump template, independent of any particular board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Move {
    /// The origin, jumped-over, and landing cells.
    pub affected: u64,
    /// The origin and jumped-over cells, which must be the only
    /// occupied cells among [`Move::affected`] for the jump to be
    /// legal. The landing cell's absence from this mask is what forces
    /// it to be empty.
    pub required: u64,
}

impl Move {
    pub fn is_legal_on(self, board: Board) -> bool {
        board.0 & self.affected == self.required
    }

    /// Picks up the origin peg, removes the jumped-over peg, and drops
    /// a peg on the landing cell. XOR makes this its own inverse at the
    /// bit level.
    pub fn apply_to(self, board: Board) -> Board {
        Board(board.0 ^ self.affected)
    }
}

/// Right, left, down, and up under the 9-column row stride.
const STEPS: [i32; 4] = [1, -1, 9, -9];

/// Generates all 76 jump templates for the cross board.
///
/// For each playable cell and each of the four directions, the jump is
/// kept iff the jumped-over cell and the landing cell are both
/// playable. A ±1 step that would wrap across a row edge lands on a
/// padding bit and is rejected by the same legality test, so no
/// separate wrap arithmetic is needed.
pub fn generate_moves() -> Vec<Move> {
    let mut moves = Vec::with_capacity(76);

    for idx in 0..63 {
        if !Board::is_legal_cell(idx) {
            continue;
        }

        for step in STEPS {
            let over = idx + step;
            let dest = over + step;

            if Board::is_legal_cell(over) && Board::is_legal_cell(dest) {
                let pegs = bit(idx) | bit(over);
                moves.push(Move {
                    affected: pegs | bit(dest),
                    required: pegs,
                });
            }
        }
    }

    moves
}

/// Reorders the move table with a PRNG seeded from `seed`.
///
/// Move order steers which solution the depth-first search finds and
/// how quickly; the same seed always yields the same order.
pub fn shuffle_moves(moves: &mut [Move], seed: u64) {
    let mut prng = XorShiftRng::seed_from_u64(seed);
    moves.shuffle(&mut prng);
}

fn bit(idx: i32) -> u64 {
    1u64 << idx
}
