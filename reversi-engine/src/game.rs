//! A live board that reports changes to a view.
//!
//! [`Game`] wraps a [`Board`] with a [`CellObserver`]. Each mutation builds
//! the next board as a value, swaps it in, and only then notifies the observer
//! once for every cell that changed, so an observer never sees a half-applied
//! move.

use crate::board::{Board, IllegalMoveError, Outcome, Side};
use crate::location::{Location, LocationList};
use log::debug;
use std::fmt;

/// Receives a notification whenever a cell's display state needs refreshing.
pub trait CellObserver {
    fn on_cell_changed(&mut self, x: usize, y: usize);
}

impl<F: FnMut(usize, usize)> CellObserver for F {
    fn on_cell_changed(&mut self, x: usize, y: usize) {
        self(x, y)
    }
}

/// An observer that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl CellObserver for NullObserver {
    fn on_cell_changed(&mut self, _x: usize, _y: usize) {}
}

/// A board in play, attached to an observer.
#[derive(Clone, Debug)]
pub struct Game<O: CellObserver = NullObserver> {
    board: Board,
    observer: O,
}

impl<O: CellObserver> Game<O> {
    /// Create an empty board. Call [`Game::initialize`] to set up pieces.
    pub fn new(observer: O) -> Self {
        Self {
            board: Board::empty(),
            observer,
        }
    }

    /// The current board, including any hints on display.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Clear the board and place the four starting pieces.
    pub fn initialize(&mut self) {
        debug!("initializing board");
        self.replace(Board::new());
    }

    /// Start a new game, discarding the current position and any hints.
    pub fn reset(&mut self) {
        debug!("resetting board for a new game");
        self.replace(Board::new());
    }

    /// Play `side` at `(x, y)`. Any hints on display are cleared in the same
    /// update. On error, nothing changes and no notifications are sent.
    pub fn apply_move(
        &mut self,
        x: i32,
        y: i32,
        side: Side,
    ) -> Result<LocationList, IllegalMoveError> {
        let mut next = self.board;
        next.clear_hints();
        let captures = next.apply_move(x, y, side)?;
        self.replace(next);
        Ok(captures)
    }

    /// Display hints for the legal moves of `side`, replacing any old hints.
    /// Returns those moves.
    pub fn show_hints(&mut self, side: Side) -> LocationList {
        let mut next = self.board;
        let moves = next.mark_hints(side);
        self.replace(next);
        moves
    }

    /// Remove any hints on display.
    pub fn clear_hints(&mut self) {
        let mut next = self.board;
        next.clear_hints();
        self.replace(next);
    }

    #[inline]
    pub fn legal_moves(&self, side: Side) -> LocationList {
        self.board.legal_moves(side)
    }

    #[inline]
    pub fn score(&self) -> (usize, usize) {
        self.board.score()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.board.is_finished()
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.board.outcome()
    }

    /// Swap in `next` and notify the observer of each cell that differs.
    fn replace(&mut self, next: Board) {
        let previous = std::mem::replace(&mut self.board, next);
        for loc in Location::all().filter(|&loc| previous.cell(loc) != next.cell(loc)) {
            let (x, y) = loc.coords();
            self.observer.on_cell_changed(x, y);
        }
    }
}

impl Default for Game<NullObserver> {
    /// An unobserved game at the starting position.
    fn default() -> Self {
        let mut game = Self::new(NullObserver);
        game.initialize();
        game
    }
}

impl<O: CellObserver> fmt::Display for Game<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[derive(Debug, Default)]
    struct Recorder(Vec<(usize, usize)>);

    impl CellObserver for Recorder {
        fn on_cell_changed(&mut self, x: usize, y: usize) {
            self.0.push((x, y));
        }
    }

    fn recording_game() -> Game<Recorder> {
        Game::new(Recorder::default())
    }

    #[test]
    fn initialize_notifies_center() {
        let mut game = recording_game();
        game.initialize();

        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.observer().0, vec![(3, 3), (4, 3), (3, 4), (4, 4)]);
    }

    #[test]
    fn move_notifies_placed_and_flipped() {
        let mut game = recording_game();
        game.initialize();
        let captures = game.apply_move(2, 3, Side::Dark).unwrap();

        assert!(captures.contains(Location::new(3, 3).unwrap()));
        assert_eq!(game.score(), (4, 1));
        assert_eq!(game.into_observer().0[4..], [(2, 3), (3, 3)]);
    }

    #[test]
    fn illegal_move_notifies_nothing() {
        let mut game = recording_game();
        game.initialize();
        game.show_hints(Side::Dark);
        let before = *game.board();
        let seen = game.observer().0.len();

        assert_eq!(
            game.apply_move(3, 3, Side::Dark),
            Err(IllegalMoveError::Occupied { x: 3, y: 3 })
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.observer().0.len(), seen);
    }

    #[test]
    fn hints_are_shown_and_cleared() {
        let mut game = recording_game();
        game.initialize();

        let moves = game.show_hints(Side::Dark);
        assert_eq!(moves.len(), 4);
        assert_eq!(game.board().count(Cell::Hint), 4);
        assert_eq!(game.observer().0.len(), 8);

        game.clear_hints();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.observer().0.len(), 12);

        // Nothing left to clear.
        game.clear_hints();
        assert_eq!(game.observer().0.len(), 12);
    }

    #[test]
    fn move_clears_hints() {
        let mut game = recording_game();
        game.initialize();
        game.show_hints(Side::Dark);
        let seen = game.observer().0.len();

        game.apply_move(2, 3, Side::Dark).unwrap();
        assert_eq!(game.board().count(Cell::Hint), 0);
        // Three stale hints, the placed piece, and one flip.
        assert_eq!(game.observer().0.len(), seen + 5);
    }

    #[test]
    fn reset_restores_start() {
        let mut game = recording_game();
        game.initialize();
        game.apply_move(2, 3, Side::Dark).unwrap();
        game.show_hints(Side::Light);

        game.reset();
        assert_eq!(game.board(), &Board::new());
        assert!(!game.is_finished());
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn closure_observer() {
        let mut changed = 0;
        {
            let mut game = Game::new(|_x: usize, _y: usize| changed += 1);
            game.initialize();
            game.apply_move(4, 5, Side::Dark).unwrap();
        }
        assert_eq!(changed, 6);
    }

    #[test]
    fn default_game() {
        let game = Game::<NullObserver>::default();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.legal_moves(Side::Dark).len(), 4);
    }
}
