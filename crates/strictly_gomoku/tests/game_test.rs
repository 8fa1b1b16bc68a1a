//! Tests for the immutable game state machine.

use strictly_gomoku::{Board, Coordinate, Field, Game, GameError};

fn play_all(game: Game, moves: &[(i32, i32)]) -> Game {
    moves.iter().fold(game, |g, (x, y)| {
        g.make_move(*x, *y).expect("Move on board")
    })
}

fn line_game(cells: &[(i32, i32)], field: Field) -> Game {
    let board = cells.iter().fold(Board::new(10, 10), |b, (x, y)| {
        b.set(*x, *y, field).expect("Cell on board")
    });
    Game::from_parts(board, Field::Circle, 5, (Coordinate::SENTINEL, Coordinate::SENTINEL))
        .expect("Valid game")
}

#[test]
fn test_first_move_scenario() {
    let game = Game::new(22, 35, 5).expect("Valid dimensions");
    let next = game.make_move(0, 0).expect("Valid move");

    assert_eq!(next.board().get(0, 0).unwrap(), Field::Cross);
    assert_eq!(next.board().count(Field::Cross), 1);
    assert_eq!(next.board().count(Field::Circle), 0);
    assert_eq!(next.player_on_move(), Field::Circle);
    assert_eq!(next.last_two(), (Coordinate::new(0, 0), Coordinate::SENTINEL));
    assert!(!next.is_game_over());
}

#[test]
fn test_make_move_leaves_original_untouched() {
    let game = play_all(Game::new(9, 9, 5).unwrap(), &[(4, 4), (3, 3)]);
    let snapshot = game.clone();

    let next = game.make_move(5, 5).expect("Valid move");

    assert_eq!(game, snapshot);
    assert_eq!(game.board().get(5, 5).unwrap(), Field::Empty);
    assert_eq!(next.board().get(5, 5).unwrap(), Field::Cross);
    // The old state can still be played independently.
    let branch = game.make_move(0, 0).expect("Valid move");
    assert_eq!(branch.board().get(5, 5).unwrap(), Field::Empty);
}

#[test]
fn test_turns_alternate() {
    let mut game = Game::new(6, 6, 5).unwrap();
    for (x, y) in [(0, 0), (5, 5), (2, 3), (3, 2), (1, 4)] {
        let before = game.player_on_move();
        game = game.make_move(x, y).unwrap();
        assert_eq!(game.player_on_move(), before.toggle());
    }
}

#[test]
fn test_illegal_moves_are_ignored() {
    let game = play_all(Game::new(5, 5, 5).unwrap(), &[(2, 2), (1, 1)]);
    assert_eq!(game.make_move(2, 2).unwrap(), game);
    assert_eq!(game.make_move(1, 1).unwrap(), game);

    let won = play_all(
        Game::new(5, 5, 3).unwrap(),
        &[(0, 0), (4, 0), (0, 1), (4, 1), (0, 2)],
    );
    assert!(won.is_game_over());
    for x in 0..5 {
        for y in 0..5 {
            assert_eq!(won.make_move(x, y).unwrap(), won);
        }
    }
}

#[test]
fn test_out_of_range_propagates() {
    let game = Game::new(5, 5, 5).unwrap();
    assert!(matches!(
        game.make_move(-1, 2),
        Err(GameError::OutOfRange { x: -1, y: 2, rows: 5, cols: 5 })
    ));
    assert!(matches!(game.make_move(0, 5), Err(GameError::OutOfRange { .. })));
}

#[test]
fn test_five_in_a_row_wins() {
    let cells = [(3, 1), (3, 2), (3, 3), (3, 4), (3, 5)];
    let game = line_game(&cells, Field::Cross);

    let (winner, line) = game.winner();
    assert_eq!(winner, Field::Cross);
    let expected: Vec<Coordinate> = cells.iter().copied().map(Coordinate::from).collect();
    assert_eq!(line, expected);
    assert!(game.is_game_over());
}

#[test]
fn test_broken_line_does_not_win() {
    let cells = [(3, 1), (3, 2), (3, 3), (3, 4), (3, 5)];
    let game = line_game(&cells, Field::Cross);
    let board = game.board().set(3, 3, Field::Circle).unwrap();
    let broken = Game::from_parts(board, Field::Cross, 5, game.last_two()).unwrap();

    assert_eq!(broken.winner(), (Field::Empty, Vec::new()));
    assert!(!broken.is_game_over());
}

#[test]
fn test_row_found_before_column() {
    // A row anchored at (0, 0) and a column anchored at (0, 5).
    let board = (0..5).fold(Board::new(10, 10), |b, n| {
        b.set(0, n, Field::Cross)
            .unwrap()
            .set(n, 5, Field::Circle)
            .unwrap()
    });
    let game = Game::from_parts(board, Field::Cross, 5, (Coordinate::SENTINEL, Coordinate::SENTINEL))
        .unwrap();

    let (winner, line) = game.winner();
    assert_eq!(winner, Field::Cross);
    assert_eq!(line.first(), Some(&Coordinate::new(0, 0)));
    assert_eq!(line.last(), Some(&Coordinate::new(0, 4)));
}

#[test]
fn test_diagonal_win_through_play() {
    let moves = [
        (0, 0),
        (0, 6),
        (1, 1),
        (1, 6),
        (2, 2),
        (2, 6),
        (3, 3),
        (3, 6),
        (4, 4),
    ];
    let game = play_all(Game::new(8, 8, 5).unwrap(), &moves);

    let line = game.winning_line().expect("Cross completed the diagonal");
    assert_eq!(line.field, Field::Cross);
    assert_eq!(line.coordinates[4], Coordinate::new(4, 4));
    assert_eq!(game.last_two(), (Coordinate::new(4, 4), Coordinate::new(3, 6)));
}

#[test]
fn test_game_serializes() {
    let game = Game::new(3, 3, 3).unwrap().make_move(1, 1).unwrap();
    let json = serde_json::to_value(&game).unwrap();
    assert_eq!(json["player_on_move"], "Circle");
    assert_eq!(json["win_length"], 3);
    assert_eq!(json["board"]["cells"][4], "Cross");
}
