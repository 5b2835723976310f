//! "Perft" move-tree test: count the number of leaves at a given depth.
//! A side with no legal move passes, and the tree ends when both sides pass.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Side};

/// Count the leaves `depth` plies below the starting position.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Side::default(), depth, false)
}

fn leaves_below(board: Board, side: Side, depth: u64, passed: bool) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves(side);
    if moves.is_empty() {
        // Both sides passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !side, depth - 1, true);
    }

    moves
        .filter_map(|mv| board.with_move(mv.x() as i32, mv.y() as i32, side).ok())
        .map(|next| leaves_below(next, !side, depth - 1, false))
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}
