//! Tests for session turn flow across game types.

use strictly_gomoku::{
    Board, Coordinate, Field, Game, GameError, Minimax, Opening, RandomAi, Strategy,
};
use strictly_gomoku_cli::{GameType, Played, Session, SessionError};

/// Always answers the top-left corner.
struct Corner;

impl Strategy for Corner {
    fn next_move(&mut self, _game: &Game) -> Result<Coordinate, GameError> {
        Ok(Coordinate::new(0, 0))
    }

    fn name(&self) -> &str {
        "Corner"
    }
}

fn game(rows: usize, cols: usize, k: usize) -> Game {
    Game::new(rows, cols, k).unwrap()
}

#[test]
fn test_player_vs_player_applies_single_move() {
    let mut session = Session::new(game(10, 10, 5), None, None);
    assert_eq!(session.game_type(), GameType::PlayerVsPlayer);

    let played = session.on_move_made(2, 3).unwrap();
    assert_eq!(
        played,
        vec![Played {
            player: Field::Cross,
            at: Coordinate::new(2, 3)
        }]
    );
    assert_eq!(session.board().get(2, 3).unwrap(), Field::Cross);
    assert_eq!(session.game().player_on_move(), Field::Circle);
}

#[test]
fn test_ai_replies_to_human_move() {
    let mut session = Session::new(game(10, 10, 5), None, Some(Box::new(Minimax::new())));
    assert_eq!(session.game_type(), GameType::AiVsPlayer);
    assert!(!session.is_ai_vs_ai());

    let played = session.on_move_made(5, 5).unwrap();
    assert_eq!(played.len(), 2);
    assert_eq!(played[0].player, Field::Cross);
    assert_eq!(played[1].player, Field::Circle);

    let reply = played[1].at;
    assert!((reply.row - 5).abs() <= 1 && (reply.col - 5).abs() <= 1);
    assert_eq!(session.board().get(reply.row, reply.col).unwrap(), Field::Circle);
    assert_eq!(session.game().player_on_move(), Field::Cross);
}

#[test]
fn test_illegal_human_move_gets_no_reply() {
    let mut session = Session::new(game(10, 10, 5), None, Some(Box::new(Minimax::new())));
    session.on_move_made(5, 5).unwrap();
    let before = session.game().clone();

    let played = session.on_move_made(5, 5).unwrap();
    assert!(played.is_empty());
    assert_eq!(session.game(), &before);
}

#[test]
fn test_out_of_range_human_move_is_error() {
    let mut session = Session::new(game(5, 5, 3), None, None);
    let err = session.on_move_made(5, 0).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Game(GameError::OutOfRange { x: 5, y: 0, .. })
    ));
}

#[test]
fn test_ai_vs_ai_ignores_coordinates() {
    let mut session = Session::new(
        game(9, 9, 5),
        Some(Box::new(Minimax::with_opening(Opening::Centre))),
        Some(Box::new(RandomAi::seeded(5))),
    );
    assert!(session.is_ai_vs_ai());

    let played = session.on_move_made(99, 99).unwrap();
    assert_eq!(played.len(), 2);
    assert_eq!(
        played[0],
        Played {
            player: Field::Cross,
            at: Coordinate::new(4, 4)
        }
    );
    assert_eq!(played[1].player, Field::Circle);
    assert_eq!(session.game().player_on_move(), Field::Cross);
}

#[test]
fn test_make_one_move_stops_after_win() {
    // A single mark wins, so Circle never gets to move.
    let mut session = Session::new(
        game(1, 2, 1),
        Some(Box::new(RandomAi::seeded(1))),
        Some(Box::new(RandomAi::seeded(2))),
    );
    let played = session.make_one_move().unwrap();
    assert_eq!(played.len(), 1);
    assert_eq!(played[0].player, Field::Cross);
    assert!(session.is_finished());
    assert_eq!(session.winner().0, Field::Cross);
    assert!(session.make_one_move().unwrap().is_empty());
}

#[test]
fn test_ai_vs_ai_plays_to_draw() {
    // Win length exceeds the board, so a full board is a draw.
    let mut session = Session::new(
        game(2, 2, 3),
        Some(Box::new(RandomAi::seeded(3))),
        Some(Box::new(RandomAi::seeded(4))),
    );
    session.make_one_move().unwrap();
    assert!(!session.is_finished());
    session.make_one_move().unwrap();
    assert!(session.is_finished());
    assert!(session.game().is_draw());
    assert_eq!(session.winner(), (Field::Empty, Vec::new()));

    let summary = session.summary();
    assert!(summary.draw);
    assert_eq!(summary.moves, 4);
    assert_eq!(summary.game_type, GameType::AiVsAi);
}

#[test]
fn test_cross_ai_opens_then_human_replies() {
    let mut session = Session::new(game(6, 6, 4), Some(Box::new(RandomAi::seeded(8))), None);
    assert!(session.ai_on_move());

    // Input is ignored until the computer has opened.
    assert!(session.on_move_made(0, 0).unwrap().is_empty());

    let opened = session.advance_ai().unwrap().unwrap();
    assert_eq!(opened.player, Field::Cross);
    assert!(!session.ai_on_move());

    let target = if opened.at == Coordinate::new(0, 0) {
        (5, 5)
    } else {
        (0, 0)
    };
    let played = session.on_move_made(target.0, target.1).unwrap();
    assert_eq!(played[0].player, Field::Circle);
    assert_eq!(played[1].player, Field::Cross);
}

#[test]
fn test_illegal_ai_move_reported() {
    let mut session = Session::new(game(5, 5, 3), None, Some(Box::new(Corner)));
    let err = session.on_move_made(0, 0).unwrap_err();
    assert_eq!(
        err,
        SessionError::IllegalAiMove {
            player: Field::Circle,
            at: Coordinate::new(0, 0)
        }
    );
    assert_eq!(session.board().get(0, 0).unwrap(), Field::Cross);
}

#[test]
fn test_reset_keeps_dimensions() {
    let mut session = Session::new(game(7, 8, 4), None, Some(Box::new(RandomAi::seeded(9))));
    session.on_move_made(3, 3).unwrap();
    assert_eq!(session.board().count(Field::Empty), 54);

    session.reset().unwrap();
    assert_eq!(session.board().rows(), 7);
    assert_eq!(session.board().cols(), 8);
    assert_eq!(session.game().win_length(), 4);
    assert_eq!(session.board().count(Field::Empty), 56);
    assert_eq!(session.game().player_on_move(), Field::Cross);
    assert_eq!(session.game_type(), GameType::AiVsPlayer);
}

#[test]
fn test_human_move_kept_when_ai_has_no_reply() {
    // Only (0,0) and (2,2) are open. After Cross takes (2,2), every
    // neighbour of the last two moves is filled, so Minimax has no
    // candidate although (0,0) is still empty.
    let (x, o, e) = (Field::Cross, Field::Circle, Field::Empty);
    let board = Board::from_rows(vec![vec![e, x, o], vec![o, x, o], vec![x, o, e]]).unwrap();
    let game = Game::from_parts(
        board,
        Field::Cross,
        5,
        (Coordinate::new(1, 2), Coordinate::new(2, 1)),
    )
    .unwrap();
    let mut session = Session::new(game, None, Some(Box::new(Minimax::new())));

    let played = session.on_move_made(2, 2).unwrap();
    assert_eq!(
        played,
        vec![Played {
            player: Field::Cross,
            at: Coordinate::new(2, 2)
        }]
    );
    assert_eq!(session.board().get(2, 2).unwrap(), Field::Cross);
    assert_eq!(session.board().get(0, 0).unwrap(), Field::Empty);
    assert!(!session.is_finished());
    assert!(session.ai_on_move());
}
