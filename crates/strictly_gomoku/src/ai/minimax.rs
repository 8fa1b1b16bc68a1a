//! Depth-limited minimax over the neighbourhood of the last two moves.
//!
//! The search never looks at the whole board. At every node the candidate
//! moves are the empty cells around the two most recent moves of that node,
//! which keeps the branching factor near 16 even on large boards.

use super::Strategy;
use super::eval::longest_run_count;
use crate::{Board, Coordinate, Field, Game, GameError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Plies searched below each top-level candidate.
pub const SEARCH_DEPTH: u32 = 2;

/// Where [`Minimax`] plays when no move has been recorded yet.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Opening {
    /// `(rows, cols / 2)`: the historical opening, one row below the board.
    #[default]
    BelowBoard,
    /// `(rows / 2, cols / 2)`: the centre cell.
    Centre,
}

impl Opening {
    /// Opening coordinate for a `rows x cols` board.
    pub fn coordinate(self, board: &Board) -> Coordinate {
        let (rows, cols) = (board.rows() as i32, board.cols() as i32);
        match self {
            Opening::BelowBoard => Coordinate::new(rows, cols / 2),
            Opening::Centre => Coordinate::new(rows / 2, cols / 2),
        }
    }
}

/// Empty neighbours of the newest move followed by those of the move before.
///
/// Cells next to both moves appear twice; the duplicates are kept so that
/// tie-breaking follows generation order.
pub fn frontier(board: &Board, last_two: (Coordinate, Coordinate)) -> Vec<Coordinate> {
    [last_two.0, last_two.1]
        .into_iter()
        .flat_map(|c| board.neighbors(c.row, c.col))
        .filter(|c| board.field_at(c.row as usize, c.col as usize).is_empty())
        .collect()
}

/// Minimax opponent.
///
/// Leaves are scored with [`longest_run_count`] for the side that started
/// the search, at every depth. The minimizing plies therefore pick the
/// reply that most limits that side's progress rather than the reply that
/// best helps the opponent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Minimax {
    opening: Opening,
}

impl Minimax {
    /// Registry name.
    pub const NAME: &'static str = "Minimax";

    /// Creates a searcher with the [`Opening::BelowBoard`] opening.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a searcher with the given opening.
    pub fn with_opening(opening: Opening) -> Self {
        Self { opening }
    }

    /// Returns the configured opening.
    pub fn opening(&self) -> Opening {
        self.opening
    }

    /// Scores every top-level candidate, in frontier order.
    ///
    /// # Errors
    ///
    /// Propagates [`GameError::OutOfRange`] from move application.
    #[instrument(skip(self, game), fields(player = %game.player_on_move()))]
    pub fn score_candidates(&self, game: &Game) -> Result<Vec<(usize, Coordinate)>, GameError> {
        let mover = game.player_on_move();
        frontier(game.board(), game.last_two())
            .into_par_iter()
            .map(|candidate| {
                let child = game.play(candidate)?;
                let score = search(&child, SEARCH_DEPTH, false, mover)?;
                trace!(%candidate, score, "Scored candidate");
                Ok((score, candidate))
            })
            .collect()
    }
}

impl Strategy for Minimax {
    #[instrument(skip(self, game), fields(player = %game.player_on_move()))]
    fn next_move(&mut self, game: &Game) -> Result<Coordinate, GameError> {
        let (first, second) = game.last_two();
        if first.is_sentinel() && second.is_sentinel() {
            let opening = self.opening.coordinate(game.board());
            debug!(%opening, "No recorded moves, playing opening");
            return Ok(opening);
        }

        if game.is_game_over() {
            return Err(GameError::NoLegalMoves);
        }

        let mut scored = self.score_candidates(game)?;
        // Stable sort: equal scores keep frontier order.
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        let (score, best) = scored.first().copied().ok_or(GameError::NoLegalMoves)?;
        debug!(%best, score, candidates = scored.len(), "Minimax move chosen");
        Ok(best)
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}

/// Alternating search scored from `target`'s point of view.
///
/// A node without candidates is scored as a leaf.
fn search(game: &Game, depth: u32, maximizing: bool, target: Field) -> Result<usize, GameError> {
    if depth == 0 {
        return Ok(longest_run_count(game.board(), game.win_length(), target));
    }

    let mut scores = Vec::new();
    for candidate in frontier(game.board(), game.last_two()) {
        let child = game.play(candidate)?;
        scores.push(search(&child, depth - 1, !maximizing, target)?);
    }

    let best = if maximizing {
        scores.into_iter().max()
    } else {
        scores.into_iter().min()
    };

    match best {
        Some(score) => Ok(score),
        None => Ok(longest_run_count(game.board(), game.win_length(), target)),
    }
}
