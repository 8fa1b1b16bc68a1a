//! Game session: one game plus the computer players attached to it.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use strictly_gomoku::{Board, Coordinate, Field, Game, GameError, Strategy};
use tracing::{debug, info, instrument, warn};

/// Who controls each side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum GameType {
    /// Two humans.
    PlayerVsPlayer,
    /// A human against one computer player.
    AiVsPlayer,
    /// Two computer players.
    AiVsAi,
}

impl GameType {
    /// Classifies a pairing by which sides have a computer player.
    pub fn from_sides(cross_ai: bool, circle_ai: bool) -> Self {
        match (cross_ai, circle_ai) {
            (true, true) => GameType::AiVsAi,
            (false, false) => GameType::PlayerVsPlayer,
            _ => GameType::AiVsPlayer,
        }
    }
}

/// A move applied by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Played {
    /// Side that moved.
    pub player: Field,
    /// Where it moved.
    pub at: Coordinate,
}

/// Errors raised while driving a session.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum SessionError {
    /// The engine rejected a coordinate.
    #[display("{}", _0)]
    Game(GameError),

    /// A computer player chose a cell the game would not accept.
    #[display("{} chose an illegal move at {}", player, at)]
    #[from(ignore)]
    IllegalAiMove {
        /// Side whose strategy misbehaved.
        player: Field,
        /// Rejected coordinate.
        at: Coordinate,
    },
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Game(e) => Some(e),
            SessionError::IllegalAiMove { .. } => None,
        }
    }
}

/// Final state of a match, for `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSummary {
    /// Pairing.
    pub game_type: GameType,
    /// Winning side, `Empty` if nobody won.
    pub winner: Field,
    /// Cells of the winning line.
    pub winning_line: Vec<Coordinate>,
    /// Whether the board filled up without a winner.
    pub draw: bool,
    /// Marks on the board.
    pub moves: usize,
    /// Final board.
    pub board: Board,
}

/// Controller for a single game.
pub struct Session {
    game: Game,
    cross: Option<Box<dyn Strategy>>,
    circle: Option<Box<dyn Strategy>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("game", &self.game)
            .field("cross", &self.cross.as_ref().map(|s| s.name()))
            .field("circle", &self.circle.as_ref().map(|s| s.name()))
            .finish()
    }
}

impl Session {
    /// Creates a session around `game`; `None` marks a human side.
    #[instrument(skip_all, fields(
        cross = cross.as_ref().map(|s| s.name()).unwrap_or("human"),
        circle = circle.as_ref().map(|s| s.name()).unwrap_or("human"),
    ))]
    pub fn new(
        game: Game,
        cross: Option<Box<dyn Strategy>>,
        circle: Option<Box<dyn Strategy>>,
    ) -> Self {
        let session = Self {
            game,
            cross,
            circle,
        };
        info!(game_type = %session.game_type(), "Session created");
        session
    }

    /// Current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Winner and winning line, `(Empty, [])` while undecided.
    pub fn winner(&self) -> (Field, Vec<Coordinate>) {
        self.game.winner()
    }

    /// Pairing of this session.
    pub fn game_type(&self) -> GameType {
        GameType::from_sides(self.cross.is_some(), self.circle.is_some())
    }

    /// Returns `true` when both sides are computer players.
    pub fn is_ai_vs_ai(&self) -> bool {
        self.game_type() == GameType::AiVsAi
    }

    /// Returns `true` once the game is won or drawn.
    pub fn is_finished(&self) -> bool {
        self.game.is_game_over() || self.game.is_draw()
    }

    /// Returns `true` if the side on move is a computer player.
    pub fn ai_on_move(&self) -> bool {
        match self.game.player_on_move() {
            Field::Cross => self.cross.is_some(),
            Field::Circle => self.circle.is_some(),
            Field::Empty => false,
        }
    }

    /// Handles a move entered by a human.
    ///
    /// In an AI-vs-AI session the coordinate is ignored and one round of
    /// computer moves is played instead. Otherwise the move is applied and,
    /// if it landed, the game goes on, and the next side is a computer, that
    /// side replies. Returns every move that was actually made; an illegal
    /// human move, or input while a computer player is on move, yields an
    /// empty list. A computer player with nothing to play leaves only the
    /// human move in the list and stays on move.
    #[instrument(skip(self))]
    pub fn on_move_made(&mut self, x: i32, y: i32) -> Result<Vec<Played>, SessionError> {
        if self.is_ai_vs_ai() {
            return self.make_one_move();
        }

        if self.ai_on_move() {
            debug!(x, y, "Computer player is on move, ignoring input");
            return Ok(Vec::new());
        }

        let player = self.game.player_on_move();
        let next = self.game.make_move(x, y)?;
        if next == self.game {
            debug!(%player, x, y, "Ignoring illegal move");
            return Ok(Vec::new());
        }
        self.game = next;

        let mut played = vec![Played {
            player,
            at: Coordinate::new(x, y),
        }];
        if !self.is_finished() && self.ai_on_move() {
            match self.advance_ai() {
                Ok(reply) => played.extend(reply),
                Err(SessionError::Game(GameError::NoLegalMoves)) => {
                    warn!(player = %self.game.player_on_move(), "Computer player has no reply");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(played)
    }

    /// Plays one Cross computer move, then one Circle computer move.
    ///
    /// Each move is skipped once the game is over or drawn, and a side
    /// without a computer player is skipped too.
    #[instrument(skip(self))]
    pub fn make_one_move(&mut self) -> Result<Vec<Played>, SessionError> {
        let mut played = Vec::new();
        for side in [Field::Cross, Field::Circle] {
            if self.is_finished() || self.game.player_on_move() != side {
                continue;
            }
            if let Some(mv) = self.advance_ai()? {
                played.push(mv);
            }
        }
        Ok(played)
    }

    /// Lets the computer player on move, if any, make its move.
    ///
    /// Used to open an AI-vs-player game where the computer plays Cross.
    #[instrument(skip(self))]
    pub fn advance_ai(&mut self) -> Result<Option<Played>, SessionError> {
        if self.is_finished() {
            return Ok(None);
        }
        let player = self.game.player_on_move();
        let strategy = match player {
            Field::Cross => self.cross.as_mut(),
            Field::Circle => self.circle.as_mut(),
            Field::Empty => None,
        };
        let Some(strategy) = strategy else {
            return Ok(None);
        };

        let at = strategy.next_move(&self.game)?;
        let next = self.game.play(at)?;
        if next == self.game {
            warn!(%player, %at, strategy = strategy.name(), "Computer player chose an illegal move");
            return Err(SessionError::IllegalAiMove { player, at });
        }
        debug!(%player, %at, strategy = strategy.name(), "Computer move applied");
        self.game = next;
        Ok(Some(Played { player, at }))
    }

    /// Starts over on an empty board of the same size.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<(), SessionError> {
        let board = self.game.board();
        self.game = Game::new(board.rows(), board.cols(), self.game.win_length())?;
        info!("Session reset");
        Ok(())
    }

    /// Snapshot of the game for reporting.
    pub fn summary(&self) -> MatchSummary {
        let (winner, winning_line) = self.winner();
        MatchSummary {
            game_type: self.game_type(),
            winner,
            winning_line,
            draw: self.game.is_draw(),
            moves: self.board().count(Field::Cross) + self.board().count(Field::Circle),
            board: self.board().clone(),
        }
    }
}
