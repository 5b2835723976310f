//! `reversi-engine` is a small, correct Reversi/Othello rule engine for UIs.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`Board`] is a plain `Copy` value holding the 8x8 grid and all of the
//!    pure rule logic: legal moves, captures, scoring, and game end.
//!    Copies of a board are independent, which makes lookahead cheap and safe.
//!  - [`Game`] owns one live board and a [`CellObserver`], and reports every
//!    cell whose contents change so a view can redraw it.
//!    It also layers move hints for display on top of the pure queries.

pub mod test_utils;

mod board;
mod game;
mod location;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of a Reversi board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on a Reversi board.
pub const NUM_SPACES: usize = 64;
