//! Immutable game state for (m,n,k) gomoku.
//!
//! A [`Game`] is a value: [`Game::make_move`] never mutates it and instead
//! returns the next state. Old states stay valid, so callers can keep them
//! around for undo or for search.

use crate::rules::{self, WinningLine};
use crate::{Board, Coordinate, Field, GameError};
use serde::Serialize;
use tracing::{debug, instrument};

/// Win length used when the caller does not choose one.
pub const DEFAULT_WIN_LENGTH: usize = 5;

/// Game state: board, player to move, win length and the last two moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Game {
    board: Board,
    player_on_move: Field,
    win_length: usize,
    /// `(most recent move, the move before it)`.
    last_two: (Coordinate, Coordinate),
}

impl Game {
    /// Creates a game on an empty `rows x cols` board with Cross to move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDimensions`] if any dimension or the win
    /// length is zero.
    #[instrument]
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Result<Self, GameError> {
        if rows == 0 || cols == 0 || win_length == 0 {
            return Err(GameError::InvalidDimensions {
                rows,
                cols,
                win_length,
            });
        }

        debug!(rows, cols, win_length, "Creating new game");
        Ok(Self {
            board: Board::new(rows, cols),
            player_on_move: Field::Cross,
            win_length,
            last_two: (Coordinate::SENTINEL, Coordinate::SENTINEL),
        })
    }

    /// Creates a game with [`DEFAULT_WIN_LENGTH`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDimensions`] for a zero-sized board.
    pub fn with_defaults(rows: usize, cols: usize) -> Result<Self, GameError> {
        Self::new(rows, cols, DEFAULT_WIN_LENGTH)
    }

    /// Rebuilds a game from its parts.
    ///
    /// No consistency check is made between the board and the other fields;
    /// this is meant for tests and for restoring positions.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDimensions`] for a zero win length.
    pub fn from_parts(
        board: Board,
        player_on_move: Field,
        win_length: usize,
        last_two: (Coordinate, Coordinate),
    ) -> Result<Self, GameError> {
        if win_length == 0 {
            return Err(GameError::InvalidDimensions {
                rows: board.rows(),
                cols: board.cols(),
                win_length,
            });
        }
        Ok(Self {
            board,
            player_on_move,
            win_length,
            last_two,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player who moves next.
    pub fn player_on_move(&self) -> Field {
        self.player_on_move
    }

    /// Returns the number of marks in a row needed to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Returns `(most recent move, previous move)`; sentinel where none.
    pub fn last_two(&self) -> (Coordinate, Coordinate) {
        self.last_two
    }

    /// Returns `true` if `(x, y)` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] if `(x, y)` is not on the board.
    pub fn is_move_available(&self, x: i32, y: i32) -> Result<bool, GameError> {
        Ok(self.board.get(x, y)?.is_empty())
    }

    /// First complete line in scan order, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::find_winner(&self.board, self.win_length)
    }

    /// Winner and winning coordinates, or `(Empty, [])` if nobody has won.
    pub fn winner(&self) -> (Field, Vec<Coordinate>) {
        match self.winning_line() {
            Some(line) => (line.field, line.coordinates),
            None => (Field::Empty, Vec::new()),
        }
    }

    /// Returns `true` once somebody has completed a line.
    pub fn is_game_over(&self) -> bool {
        self.winning_line().is_some()
    }

    /// Returns `true` if the board is full and nobody has won.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board, self.win_length)
    }

    /// Plays `(x, y)` for the player on move and returns the next state.
    ///
    /// A move onto an occupied cell, or any move once the game is over, is
    /// ignored: the returned game equals `self`. Callers that need to know
    /// whether the move was applied must check [`Game::is_move_available`]
    /// and [`Game::is_game_over`] themselves.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] if `(x, y)` is not on the board.
    pub fn make_move(&self, x: i32, y: i32) -> Result<Game, GameError> {
        if !self.is_move_available(x, y)? || self.is_game_over() {
            return Ok(self.clone());
        }

        Ok(Game {
            board: self.board.set(x, y, self.player_on_move)?,
            player_on_move: self.player_on_move.toggle(),
            win_length: self.win_length,
            last_two: (Coordinate::new(x, y), self.last_two.0),
        })
    }

    /// [`Game::make_move`] taking a [`Coordinate`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] if `at` is not on the board.
    pub fn play(&self, at: Coordinate) -> Result<Game, GameError> {
        self.make_move(at.row, at.col)
    }
}
