//! Plain-text board rendering.

use strictly_gomoku::{Coordinate, Field, Game};

/// Marker drawn over the cells of a winning line.
pub const WIN_MARKER: char = '#';

/// Draws the board with row and column indices.
///
/// Column headers show the last digit of the index so wide boards stay
/// aligned. Cells of `highlight` are drawn as [`WIN_MARKER`].
pub fn render_board(game: &Game, highlight: &[Coordinate]) -> String {
    let board = game.board();
    let label_width = board.rows().saturating_sub(1).to_string().len();

    let mut out = String::new();
    out.push_str(&" ".repeat(label_width + 1));
    let header: Vec<String> = (0..board.cols()).map(|c| (c % 10).to_string()).collect();
    out.push_str(&header.join(" "));
    out.push('\n');

    for (row, fields) in board.rows_iter().enumerate() {
        let cells: Vec<String> = fields
            .iter()
            .enumerate()
            .map(|(col, field)| {
                let at = Coordinate::new(row as i32, col as i32);
                if highlight.contains(&at) {
                    WIN_MARKER.to_string()
                } else {
                    field.symbol().to_string()
                }
            })
            .collect();
        out.push_str(&format!("{:>width$} {}\n", row, cells.join(" "), width = label_width));
    }
    out
}

/// One-line description of where the game stands.
pub fn status_line(game: &Game) -> String {
    let (winner, _) = game.winner();
    if winner != Field::Empty {
        format!("{} wins", winner)
    } else if game.is_draw() {
        "Draw".to_string()
    } else {
        format!("{} to move", game.player_on_move())
    }
}
