use super::*;

// Symmetry transforms for the cross board. The puzzle is symmetric
// under both reflections, so these can fold mirror-image states
// together; the search itself does not use them because a mirrored
// state marked visited without a real predecessor would break path
// reconstruction. They are involutions and map playable cells to
// playable cells.

impl Board {
    /// Mirrors the board across its horizontal axis: the top and bottom
    /// rows swap, the middle row stays put.
    pub fn mirrored_vertically(self) -> Board {
        let b = self.0;

        Board(
            ((b >> 54) & 0b000000000_000000000_000000000_000000000_000000000_000000000_000111000)
                | ((b >> 36)
                    & 0b000000000_000000000_000000000_000000000_000000000_000111000_000000000)
                | ((b >> 18)
                    & 0b000000000_000000000_000000000_000000000_011111110_000000000_000000000)
                | (b & 0b000000000_000000000_000000000_011111110_000000000_000000000_000000000)
                | ((b << 18)
                    & 0b000000000_000000000_011111110_000000000_000000000_000000000_000000000)
                | ((b << 36)
                    & 0b000000000_000111000_000000000_000000000_000000000_000000000_000000000)
                | ((b << 54)
                    & 0b000111000_000000000_000000000_000000000_000000000_000000000_000000000),
        )
    }

    /// Mirrors the board across its vertical axis: the left and right
    /// columns swap, the center column stays put.
    pub fn mirrored_horizontally(self) -> Board {
        let b = self.0;

        Board(
            ((b >> 6) & 0b000000000_000000000_000000010_000000010_000000010_000000000_000000000)
                | ((b >> 4)
                    & 0b000000000_000000000_000000100_000000100_000000100_000000000_000000000)
                | ((b >> 2)
                    & 0b000001000_000001000_000001000_000001000_000001000_000001000_000001000)
                | (b & 0b000010000_000010000_000010000_000010000_000010000_000010000_000010000)
                | ((b << 2)
                    & 0b000100000_000100000_000100000_000100000_000100000_000100000_000100000)
                | ((b << 4)
                    & 0b000000000_000000000_001000000_001000000_001000000_000000000_000000000)
                | ((b << 6)
                    & 0b000000000_000000000_010000000_010000000_010000000_000000000_000000000),
        )
    }
}
