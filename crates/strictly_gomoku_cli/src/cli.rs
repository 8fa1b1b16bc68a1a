//! Command-line interface for strictly_gomoku.

use crate::config::MatchOverrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_gomoku::Opening;

/// Strictly Gomoku - (m,n,k) gomoku with computer opponents
#[derive(Parser, Debug)]
#[command(name = "strictly_gomoku")]
#[command(about = "Gomoku on any board size, against humans or computer players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available computer players
    Strategies,

    /// Watch two computer players play each other
    Watch {
        /// Path to a match config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        overrides: MatchArgs,

        /// Only print the final board
        #[arg(short, long)]
        quiet: bool,

        /// Print the final result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play from the terminal, entering moves as `row col`
    Play {
        /// Path to a match config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        overrides: MatchArgs,
    },
}

/// Match settings that override the config file
#[derive(Args, Debug, Clone, Default)]
pub struct MatchArgs {
    /// Board rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// Board columns
    #[arg(long)]
    pub cols: Option<usize>,

    /// Marks in a row needed to win
    #[arg(long)]
    pub win_length: Option<usize>,

    /// Strategy playing Cross
    #[arg(long)]
    pub cross: Option<String>,

    /// Strategy playing Circle
    #[arg(long)]
    pub circle: Option<String>,

    /// Seed for random strategies
    #[arg(long)]
    pub seed: Option<u64>,

    /// Minimax opening (below-board or centre)
    #[arg(long)]
    pub opening: Option<Opening>,

    /// Stop after this many moves
    #[arg(long)]
    pub max_moves: Option<usize>,
}

impl From<MatchArgs> for MatchOverrides {
    fn from(args: MatchArgs) -> Self {
        Self {
            rows: args.rows,
            cols: args.cols,
            win_length: args.win_length,
            cross: args.cross,
            circle: args.circle,
            seed: args.seed,
            opening: args.opening,
            max_moves: args.max_moves,
        }
    }
}
