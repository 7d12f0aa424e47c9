use super::*;

use std::fmt::{self, Debug, Display, Formatter};

#[derive(Clone, Copy)]
pub struct Pretty<T>(pub T);

pub trait IntoPretty: Sized {
    fn pretty(self) -> Pretty<Self>;
}

impl IntoPretty for Board {
    fn pretty(self) -> Pretty<Self> {
        Pretty(self)
    }
}

impl IntoPretty for Move {
    fn pretty(self) -> Pretty<Self> {
        Pretty(self)
    }
}

impl IntoPretty for Vec<Board> {
    fn pretty(self) -> Pretty<Self> {
        Pretty(self)
    }
}

/// Renders the board as 7 bordered rows of 9 columns: `1` for a peg,
/// `0` for an empty playable cell, a blank for padding. The board
/// value, the legal-cell mask, and the 9-column stride fully determine
/// the picture.
impl Display for Pretty<Board> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..7 {
            if row > 0 {
                f.write_str("\n")?;
            }
            f.write_str("|")?;

            for col in 0..9 {
                let bit = 1u64 << (62 - row * 9 - col);
                let cell = if Board::LEGAL_CELLS & bit == 0 {
                    ' '
                } else if self.0 .0 & bit != 0 {
                    '1'
                } else {
                    '0'
                };
                write!(f, "{cell}")?;
            }

            f.write_str("|")?;
        }

        Ok(())
    }
}

impl Debug for Pretty<Board> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self, f)
    }
}

impl Display for Pretty<Move> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (origin, over, dest) = self.cells();
        write!(f, "jump {origin} over {over} into {dest}")
    }
}

impl Debug for Pretty<Move> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self, f)
    }
}

impl Pretty<Move> {
    /// Recovers the (origin, jumped-over, landing) cell indices from
    /// the two masks. The jumped-over cell is the midpoint of the
    /// origin and landing cells, which disambiguates the two bits of
    /// the required mask.
    fn cells(self) -> (u32, u32, u32) {
        let dest = (self.0.affected & !self.0.required).trailing_zeros();
        let low = self.0.required.trailing_zeros();
        let high = 63 - self.0.required.leading_zeros();

        if low + dest == 2 * high {
            (low, high, dest)
        } else {
            (high, low, dest)
        }
    }
}

impl Display for Pretty<Vec<Board>> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let len = self.0.len();
        writeln!(f, "Solution(len = {len}) [")?;

        for (i, board) in self.0.iter().enumerate() {
            let pegs = board.peg_count();
            writeln!(f, "{i}: ({pegs} pegs)")?;
            writeln!(f, "{}", board.pretty())?;
        }

        write!(f, "]")
    }
}

impl Debug for Pretty<Vec<Board>> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self, f)
    }
}
