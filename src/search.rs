use super::*;

use thiserror::Error;

/// Returned when path reconstruction is attempted on a predecessor map
/// that has no route from the goal back to the start, i.e. when the
/// caller did not check the search result first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ReconstructionError {
    #[error("no recorded predecessor for {0:?} while walking back to the start")]
    MissingPredecessor(Board),
}

/// Exhaustive depth-first search from `start` to `goal`.
///
/// Returns `true` iff some sequence of jumps reaches `goal`; the found
/// sequence is not necessarily the shortest. On `false` the entire
/// component reachable from `start` has been explored. Either way
/// `predecessors` holds every board discovered so far, keyed by board
/// with the board it was first reached from as the value. `start`
/// itself is deliberately never recorded: its absence as a key is what
/// terminates backtracking in [`solution_path`].
pub fn solve(
    start: Board,
    goal: Board,
    moves: &[Move],
    predecessors: &mut PredecessorMap,
) -> bool {
    assert!(
        start.is_within_legal_cells(),
        "start has pegs outside the playable cells"
    );
    assert!(
        goal.is_within_legal_cells(),
        "goal has pegs outside the playable cells"
    );

    // LIFO, so the traversal is depth-first. A VecDeque popped from the
    // front would give breadth-first order instead; correctness does
    // not depend on the choice.
    let mut stack = vec![start];

    while let Some(board) = stack.pop() {
        if board == goal {
            return true;
        }

        for &m in moves {
            if !m.is_legal_on(board) {
                continue;
            }

            let new_board = m.apply_to(board);

            if predecessors.add(new_board, board).did_addend_already_exist {
                continue;
            }

            stack.push(new_board);
        }
    }

    false
}

/// Walks the predecessor chain from `goal` back to `start` and returns
/// the boards in forward order, `start` first.
///
/// Must only be called after [`solve`] reported success for the same
/// map and endpoints; otherwise the chain breaks off somewhere and the
/// missing board is reported in the error.
pub fn solution_path(
    predecessors: &PredecessorMap,
    start: Board,
    goal: Board,
) -> Result<Vec<Board>, ReconstructionError> {
    let mut path = vec![goal];

    let mut board = goal;
    while board != start {
        board = predecessors
            .predecessor(board)
            .ok_or(ReconstructionError::MissingPredecessor(board))?;
        path.push(board);
    }

    path.reverse();
    Ok(path)
}
