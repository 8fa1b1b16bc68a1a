//! Command runners behind the CLI subcommands.
//!
//! Each runner takes its input and output streams explicitly so matches can
//! be driven from tests as well as from a terminal.

use crate::config::{ConfigError, MatchConfig};
use crate::render::{render_board, status_line};
use crate::session::{MatchSummary, Played, Session, SessionError};
use derive_more::{Display, From};
use std::io::{BufRead, Write};
use strictly_gomoku::{GameError, Minimax, RandomAi, StrategyRegistry};
use tracing::{debug, info, instrument};

/// Errors raised while running a command.
#[derive(Debug, Display, From)]
pub enum CommandError {
    /// Bad configuration.
    #[display("{}", _0)]
    Config(ConfigError),
    /// Engine failure.
    #[display("{}", _0)]
    Game(GameError),
    /// Session failure.
    #[display("{}", _0)]
    Session(SessionError),
    /// Terminal I/O failure.
    #[display("I/O error: {}", _0)]
    Io(std::io::Error),
    /// JSON output failure.
    #[display("JSON error: {}", _0)]
    Json(serde_json::Error),
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Config(e) => Some(e),
            CommandError::Game(e) => Some(e),
            CommandError::Session(e) => Some(e),
            CommandError::Io(e) => Some(e),
            CommandError::Json(e) => Some(e),
        }
    }
}

/// Output options for [`watch`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchOutput {
    /// Print only the final board.
    pub quiet: bool,
    /// Print the final summary as JSON instead of text.
    pub json: bool,
}

/// Writes the registered strategy names, one per line.
pub fn list_strategies(registry: &StrategyRegistry, out: &mut impl Write) -> Result<(), CommandError> {
    for name in registry.names() {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

/// Plays a computer-vs-computer match to the end or to `max_moves`.
///
/// Sides the config leaves empty are filled with Minimax for Cross and
/// RandomAi for Circle.
#[instrument(skip_all)]
pub fn watch(
    config: MatchConfig,
    registry: &StrategyRegistry,
    output: WatchOutput,
    out: &mut impl Write,
) -> Result<MatchSummary, CommandError> {
    let config = config.with_default_players(Minimax::NAME, RandomAi::NAME)?;
    let (cross, circle) = config.build_players(registry)?;
    let mut session = Session::new(config.new_game()?, cross, circle);
    let verbose = !output.quiet && !output.json;
    let max_moves = *config.max_moves();

    let mut moves = 0;
    while !session.is_finished() {
        if max_moves.is_some_and(|max| moves >= max) {
            info!(moves, "Move limit reached");
            break;
        }
        let played = match session.advance_ai() {
            Ok(Some(played)) => played,
            Ok(None) => break,
            Err(SessionError::Game(GameError::NoLegalMoves)) => {
                info!(moves, "Computer player has no move, stopping");
                break;
            }
            Err(e) => return Err(e.into()),
        };
        moves += 1;
        if verbose {
            write_move(out, &played)?;
            write!(out, "{}", render_board(session.game(), &[]))?;
        }
    }

    let summary = session.summary();
    info!(winner = %summary.winner, moves = summary.moves, draw = summary.draw, "Match finished");
    if output.json {
        serde_json::to_writer_pretty(&mut *out, &summary)?;
        writeln!(out)?;
    } else {
        let (_, line) = session.winner();
        write!(out, "{}", render_board(session.game(), &line))?;
        writeln!(out, "{}", status_line(session.game()))?;
    }
    Ok(summary)
}

/// Plays a match from the terminal.
///
/// Humans enter `row col` lines; `quit` or end of input stops the game.
#[instrument(skip_all)]
pub fn play(
    config: MatchConfig,
    registry: &StrategyRegistry,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<MatchSummary, CommandError> {
    let (cross, circle) = config.build_players(registry)?;
    let mut session = Session::new(config.new_game()?, cross, circle);

    if !session.is_ai_vs_ai() {
        if let Some(played) = session.advance_ai()? {
            write_move(out, &played)?;
        }
    }
    write!(out, "{}", render_board(session.game(), &[]))?;
    writeln!(out, "{}", status_line(session.game()))?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") {
            info!("Player quit");
            break;
        }

        let played = if session.is_ai_vs_ai() {
            match session.make_one_move() {
                Ok(played) => played,
                Err(SessionError::Game(GameError::NoLegalMoves)) => {
                    writeln!(out, "{} has no reply", session.game().player_on_move())?;
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        } else {
            let Some((x, y)) = parse_move(line) else {
                writeln!(out, "Enter a move as `row col`, or `quit`")?;
                continue;
            };
            match session.on_move_made(x, y) {
                Ok(played) => played,
                Err(SessionError::Game(e @ GameError::OutOfRange { .. })) => {
                    writeln!(out, "{}", e)?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
        };

        if played.is_empty() {
            writeln!(out, "Illegal move")?;
            continue;
        }
        for mv in &played {
            write_move(out, mv)?;
        }

        let (_, winning) = session.winner();
        write!(out, "{}", render_board(session.game(), &winning))?;
        writeln!(out, "{}", status_line(session.game()))?;
        if session.is_finished() {
            break;
        }
        if session.ai_on_move() && !session.is_ai_vs_ai() {
            writeln!(out, "{} has no reply", session.game().player_on_move())?;
            info!("Computer player has no reply, ending game");
            break;
        }
    }

    Ok(session.summary())
}

/// Parses `row col`, accepting spaces or a comma between the numbers.
pub fn parse_move(line: &str) -> Option<(i32, i32)> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty());
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        debug!(line, "Trailing input after move");
        return None;
    }
    Some((x, y))
}

fn write_move(out: &mut impl Write, played: &Played) -> Result<(), CommandError> {
    writeln!(out, "{} plays {}", played.player, played.at)?;
    Ok(())
}
