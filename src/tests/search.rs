use super::*;

fn assert_path_is_valid(path: &[Board], start: Board, goal: Board, moves: &[Move]) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));

    for pair in path.windows(2) {
        let (before, after) = (pair[0], pair[1]);
        assert!(after.is_within_legal_cells());
        assert_eq!(before.peg_count(), after.peg_count() + 1);

        let m = moves
            .iter()
            .copied()
            .find(|m| m.affected == (before.0 ^ after.0) && m.is_legal_on(before))
            .expect("consecutive boards must differ by one legal jump");
        assert_eq!(m.apply_to(before), after);
    }
}

#[test]
fn solves_the_standard_puzzle() {
    let moves = generate_moves();
    let mut predecessors = PredecessorMap::empty();

    assert!(solve(Board::START, Board::GOAL, &moves, &mut predecessors));

    let path = solution_path(&predecessors, Board::START, Board::GOAL).unwrap();
    assert_path_is_valid(&path, Board::START, Board::GOAL, &moves);

    // Each jump removes exactly one peg.
    assert_eq!(
        path.len() as u32,
        Board::START.peg_count() - Board::GOAL.peg_count() + 1
    );
}

#[test]
fn solves_with_a_shuffled_move_table() {
    let mut moves = generate_moves();
    shuffle_moves(&mut moves, 44);

    let mut predecessors = PredecessorMap::empty();
    assert!(solve(Board::START, Board::GOAL, &moves, &mut predecessors));

    let path = solution_path(&predecessors, Board::START, Board::GOAL).unwrap();
    assert_path_is_valid(&path, Board::START, Board::GOAL, &moves);
}

#[test]
fn every_discovered_board_is_playable() {
    let moves = generate_moves();
    let mut predecessors = PredecessorMap::empty();
    solve(Board::START, Board::GOAL, &moves, &mut predecessors);

    predecessors.visit_in_key_order(|board, predecessor| {
        assert!(board.is_within_legal_cells());
        assert!(predecessor.is_within_legal_cells());
        assert_eq!(board.peg_count() + 1, predecessor.peg_count());
    });
}

#[test]
fn lone_peg_exhausts_immediately() {
    let moves = generate_moves();
    let mut predecessors = PredecessorMap::empty();

    // A single peg has nothing to jump over: the stack empties right
    // after the start board is popped.
    assert!(!solve(Board::GOAL, Board::START, &moves, &mut predecessors));
    assert!(predecessors.is_empty());
}

#[test]
fn start_equal_to_goal_is_trivially_solved() {
    let moves = generate_moves();
    let mut predecessors = PredecessorMap::empty();

    assert!(solve(Board::GOAL, Board::GOAL, &moves, &mut predecessors));

    let path = solution_path(&predecessors, Board::GOAL, Board::GOAL).unwrap();
    assert_eq!(path, vec![Board::GOAL]);
}

#[test]
fn search_is_deterministic() {
    let moves = generate_moves();

    let run = || {
        let mut predecessors = PredecessorMap::empty();
        let solved = solve(Board::START, Board::GOAL, &moves, &mut predecessors);
        (solved, predecessors.to_sorted_vec())
    };

    assert_eq!(run(), run());
}

#[test]
fn reconstruction_fails_loudly_without_a_route() {
    let predecessors = PredecessorMap::empty();

    assert_eq!(
        solution_path(&predecessors, Board::START, Board::GOAL),
        Err(ReconstructionError::MissingPredecessor(Board::GOAL))
    );
}

#[test]
fn reconstruction_fails_after_an_unsolvable_search() {
    let moves = generate_moves();
    let mut predecessors = PredecessorMap::empty();

    assert!(!solve(Board::GOAL, Board::START, &moves, &mut predecessors));
    assert!(solution_path(&predecessors, Board::GOAL, Board::START).is_err());
}

#[test]
#[should_panic(expected = "outside the playable cells")]
fn solve_rejects_an_unplayable_start() {
    let moves = generate_moves();
    let mut predecessors = PredecessorMap::empty();
    solve(Board(1 << 62), Board::GOAL, &moves, &mut predecessors);
}
