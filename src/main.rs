use std::env;
use std::process::ExitCode;
use std::time::Instant;

use peg_solitaire::{
    generate_moves, shuffle_moves, solution_path, solve, Board, IntoPretty, PredecessorMap,
};

fn main() -> ExitCode {
    let mut moves = generate_moves();

    // An optional seed reorders the move table, which changes which
    // solution the search finds and how fast it finds it.
    if let Some(seed) = env::args().nth(1) {
        let seed: u64 = seed.parse().expect("seed must be an unsigned integer");
        shuffle_moves(&mut moves, seed);
    }

    let now = Instant::now();
    let mut predecessors = PredecessorMap::empty();
    let solved = solve(Board::START, Board::GOAL, &moves, &mut predecessors);
    let elapsed = now.elapsed();

    if !solved {
        println!(
            "No solution found after exploring {} boards. It took {:?}.",
            predecessors.len(),
            elapsed
        );
        return ExitCode::FAILURE;
    }

    let path = solution_path(&predecessors, Board::START, Board::GOAL)
        .expect("the search succeeded, so the map must reach back to the start");
    let move_count = path.len() - 1;

    println!("{}", path.pretty());
    println!(
        "Solved in {} moves after exploring {} boards. It took {:?}.",
        move_count,
        predecessors.len(),
        elapsed
    );
    ExitCode::SUCCESS
}
