use super::*;

use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

mod search;

fn deterministic_prng() -> XorShiftRng {
    XorShiftRng::seed_from_u64(0x5EED)
}

fn random_legal_board(prng: &mut XorShiftRng) -> Board {
    loop {
        let board = Board(prng.gen::<u64>() & Board::LEGAL_CELLS);
        // The empty board is the predecessor map's vacant-slot marker,
        // so it must never be used as a key or value.
        if board != Board::EMPTY {
            return board;
        }
    }
}

#[test]
fn start_board_renders_correctly() {
    insta::assert_snapshot!(Board::START.pretty(), @r"
    |   111   |
    |   111   |
    | 1111111 |
    | 1110111 |
    | 1111111 |
    |   111   |
    |   111   |
    ");
}

#[test]
fn goal_board_renders_correctly() {
    insta::assert_snapshot!(Board::GOAL.pretty(), @r"
    |   000   |
    |   000   |
    | 0000000 |
    | 0001000 |
    | 0000000 |
    |   000   |
    |   000   |
    ");
}

#[test]
fn fully_pegged_board_renders_correctly() {
    insta::assert_snapshot!(Board(Board::LEGAL_CELLS).pretty(), @r"
    |   111   |
    |   111   |
    | 1111111 |
    | 1111111 |
    | 1111111 |
    |   111   |
    |   111   |
    ");
}

#[test]
fn solution_listing_renders_correctly() {
    insta::assert_snapshot!(vec![Board::START, Board::GOAL].pretty(), @r"
    Solution(len = 2) [
    0: (32 pegs)
    |   111   |
    |   111   |
    | 1111111 |
    | 1110111 |
    | 1111111 |
    |   111   |
    |   111   |
    1: (1 pegs)
    |   000   |
    |   000   |
    | 0000000 |
    | 0001000 |
    | 0000000 |
    |   000   |
    |   000   |
    ]
    ");
}
