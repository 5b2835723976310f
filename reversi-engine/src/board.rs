//! The Reversi rules over a plain 8x8 grid.
//!
//! A [`Board`] is a `Copy` value, so a snapshot taken for lookahead never
//! aliases the live board. All queries treat a [`Cell::Hint`] exactly like an
//! empty cell, whether or not hints were cleared first.

use crate::location::{Location, LocationList};
use crate::{utils, NUM_SPACES};
use derive_more::{Display, Error};
use log::{debug, trace};
use std::fmt;

/// The eight unit ray directions scanned from a candidate move, as `(dx, dy)`.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// One of the two sides in a game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Display)]
pub enum Side {
    Dark,
    Light,
}

impl Default for Side {
    /// Gets the side that moves first (dark).
    fn default() -> Self {
        Self::Dark
    }
}

impl std::ops::Not for Side {
    type Output = Self;

    /// Gets the other side.
    fn not(self) -> Self {
        match self {
            Side::Dark => Side::Light,
            Side::Light => Side::Dark,
        }
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid side")]
pub struct ParseSideError;

impl Side {
    /// The single-character marker a player session carries: `b` or `w`.
    pub fn marker(self) -> char {
        match self {
            Side::Dark => 'b',
            Side::Light => 'w',
        }
    }

    /// Read a player session's marker (`b` for dark, `w` for light).
    pub fn from_marker(marker: char) -> Result<Self, ParseSideError> {
        match marker.to_ascii_lowercase() {
            'b' => Ok(Side::Dark),
            'w' => Ok(Side::Light),
            _ => Err(ParseSideError),
        }
    }
}

impl std::str::FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" | "black" | "b" => Ok(Side::Dark),
            "light" | "white" | "w" => Ok(Side::Light),
            _ => Err(ParseSideError),
        }
    }
}

/// The contents of one space on the board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cell {
    Empty,
    Occupied(Side),
    /// Display-only marker for a legal destination. Never a real piece.
    Hint,
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl Cell {
    /// Returns whether a piece may be placed here (empty or hinted).
    #[inline]
    pub fn is_vacant(self) -> bool {
        matches!(self, Cell::Empty | Cell::Hint)
    }

    /// The side holding this cell, if any.
    #[inline]
    pub fn occupant(self) -> Option<Side> {
        match self {
            Cell::Occupied(side) => Some(side),
            Cell::Empty | Cell::Hint => None,
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Side::Dark) => 'X',
            Cell::Occupied(Side::Light) => 'O',
            Cell::Hint => '*',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Occupied(Side::Dark)),
            'O' | 'o' => Some(Cell::Occupied(Side::Light)),
            '*' => Some(Cell::Hint),
            _ => None,
        }
    }
}

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
pub enum IllegalMoveError {
    #[display(fmt = "({}, {}) is off the board", x, y)]
    OffBoard { x: i32, y: i32 },
    #[display(fmt = "({}, {}) is already occupied", x, y)]
    Occupied { x: i32, y: i32 },
    #[display(fmt = "({}, {}) captures nothing", x, y)]
    NoCaptures { x: i32, y: i32 },
}

/// The result of a finished game.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum Outcome {
    #[display(fmt = "{} wins", _0)]
    Winner(Side),
    Draw,
}

#[derive(Debug, PartialEq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected {} cells, found {}", NUM_SPACES, found)]
    WrongLength { found: usize },
    #[display(fmt = "unknown cell symbol {:?}", symbol)]
    UnknownSymbol { symbol: char },
}

/// An 8x8 Reversi board, stored in row-major order (`y * 8 + x`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    cells: [Cell; NUM_SPACES],
}

impl Default for Board {
    /// Gets the starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board with every cell empty.
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; NUM_SPACES],
        }
    }

    /// The starting position: light on (3,3) and (4,4), dark on (3,4) and (4,3).
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.place(3, 3, Side::Light);
        board.place(4, 4, Side::Light);
        board.place(3, 4, Side::Dark);
        board.place(4, 3, Side::Dark);
        board
    }

    /// Clear the board and set up the starting position.
    pub fn initialize(&mut self) {
        *self = Self::new();
    }

    /// Start a new game. Any hints on the board are discarded.
    pub fn reset(&mut self) {
        self.initialize();
    }

    fn place(&mut self, x: i32, y: i32, side: Side) {
        if let Some(loc) = Location::new(x, y) {
            self.set(loc, Cell::Occupied(side));
        }
    }

    /// The cell at `(x, y)`, or `None` if that is off the board.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        Location::new(x, y).map(|loc| self.cell(loc))
    }

    /// The cell at `loc`.
    #[inline]
    pub fn cell(&self, loc: Location) -> Cell {
        self.cells[loc.to_index() as usize]
    }

    /// Overwrite the cell at `loc`. Intended for setting up positions.
    #[inline]
    pub fn set(&mut self, loc: Location, cell: Cell) {
        self.cells[loc.to_index() as usize] = cell;
    }

    /// Iterate over every location and its cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Location, Cell)> + '_ {
        Location::all().map(move |loc| (loc, self.cell(loc)))
    }

    /// The number of cells exactly equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// The opponent pieces that `side` would flip by playing at `(x, y)`.
    /// Empty if the location is off the board or already occupied.
    pub fn captures_for(&self, x: i32, y: i32, side: Side) -> LocationList {
        let origin = match Location::new(x, y) {
            Some(loc) if self.cell(loc).is_vacant() => loc,
            _ => return LocationList::default(),
        };

        DIRECTIONS
            .iter()
            .fold(LocationList::default(), |captures, &(dx, dy)| {
                captures | self.ray_captures(origin, dx, dy, side)
            })
    }

    /// Walk one ray from `origin`. The run of opponent pieces is captured only
    /// if it is closed by a piece of `side`; an edge or a vacant cell voids it.
    fn ray_captures(&self, origin: Location, dx: i32, dy: i32, side: Side) -> LocationList {
        let mut run = LocationList::default();
        let mut next = origin.offset(dx, dy);

        while let Some(loc) = next {
            match self.cell(loc).occupant() {
                Some(occupant) if occupant == side => return run,
                Some(_) => run.insert(loc),
                None => break,
            }
            next = loc.offset(dx, dy);
        }

        LocationList::default()
    }

    /// Returns whether `side` may play at `(x, y)`.
    #[inline]
    pub fn is_legal_move(&self, x: i32, y: i32, side: Side) -> bool {
        !self.captures_for(x, y, side).is_empty()
    }

    /// Classify a candidate move, returning its captures if it is legal.
    pub fn check_move(
        &self,
        x: i32,
        y: i32,
        side: Side,
    ) -> Result<LocationList, IllegalMoveError> {
        let loc = Location::new(x, y).ok_or(IllegalMoveError::OffBoard { x, y })?;
        if !self.cell(loc).is_vacant() {
            return Err(IllegalMoveError::Occupied { x, y });
        }

        let captures = self.captures_for(x, y, side);
        if captures.is_empty() {
            return Err(IllegalMoveError::NoCaptures { x, y });
        }
        Ok(captures)
    }

    /// Play `side` at `(x, y)`, flipping every captured piece.
    /// Returns the captured locations. An illegal move leaves the board untouched.
    pub fn apply_move(
        &mut self,
        x: i32,
        y: i32,
        side: Side,
    ) -> Result<LocationList, IllegalMoveError> {
        let captures = match self.check_move(x, y, side) {
            Ok(captures) => captures,
            Err(err) => {
                debug!("rejected move for {}: {}", side, err);
                return Err(err);
            }
        };

        let piece = Cell::Occupied(side);
        self.place(x, y, side);
        for loc in captures {
            self.set(loc, piece);
        }

        trace!("{} played ({}, {}) capturing {}", side, x, y, captures);
        Ok(captures)
    }

    /// Like [`Board::apply_move`], but returns the resulting board as a new value.
    pub fn with_move(mut self, x: i32, y: i32, side: Side) -> Result<Self, IllegalMoveError> {
        self.apply_move(x, y, side)?;
        Ok(self)
    }

    /// Every location where `side` has a legal move. Does not modify the board.
    pub fn legal_moves(&self, side: Side) -> LocationList {
        Location::all()
            .filter(|&loc| self.is_legal_move(loc.x() as i32, loc.y() as i32, side))
            .collect()
    }

    /// Replace any stale hints with hints for the legal moves of `side`.
    /// Returns those moves.
    pub fn mark_hints(&mut self, side: Side) -> LocationList {
        self.clear_hints();
        let moves = self.legal_moves(side);
        for loc in moves {
            self.set(loc, Cell::Hint);
        }
        moves
    }

    /// Turn every hint back into an empty cell.
    pub fn clear_hints(&mut self) {
        for cell in self.cells.iter_mut() {
            if *cell == Cell::Hint {
                *cell = Cell::Empty;
            }
        }
    }

    /// The number of `(dark, light)` pieces on the board.
    pub fn score(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(dark, light), cell| match cell.occupant() {
                Some(Side::Dark) => (dark + 1, light),
                Some(Side::Light) => (dark, light + 1),
                None => (dark, light),
            })
    }

    /// Returns whether every cell holds a piece.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_vacant())
    }

    /// Returns whether at least one side still has a legal move.
    pub fn has_legal_move_for_either_side(&self) -> bool {
        !self.legal_moves(Side::Dark).is_empty() || !self.legal_moves(Side::Light).is_empty()
    }

    /// Returns whether the game is over: the board is full or nobody can move.
    pub fn is_finished(&self) -> bool {
        self.is_full() || !self.has_legal_move_for_either_side()
    }

    /// The result of the game, or `None` if it is still in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_finished() {
            return None;
        }

        let (dark, light) = self.score();
        Some(if dark > light {
            Outcome::Winner(Side::Dark)
        } else if light > dark {
            Outcome::Winner(Side::Light)
        } else {
            Outcome::Draw
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells.iter().map(|cell| cell.symbol()), f)
    }
}

/// Read a board from 64 cell symbols in row-major order, ignoring whitespace:
/// `X` dark, `O` light, `.` or `-` empty, `*` hint.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength {
                found: symbols.len(),
            });
        }

        let mut board = Self::empty();
        for (cell, &symbol) in board.cells.iter_mut().zip(symbols.iter()) {
            *cell = Cell::from_symbol(symbol).ok_or(ParseBoardError::UnknownSymbol { symbol })?;
        }
        Ok(board)
    }
}
