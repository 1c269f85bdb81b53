//! End-to-end game scenarios.

use tictactoe::{
    Cell, GameState, GameStatus, InvariantSet, Line, Move, MoveList, MoveListInvariants, Selection,
    Square, Symbol, active_symbol, detect_winner, project_board,
};

fn sq(row: usize, col: usize) -> Square {
    Square::new(row, col).expect("square on board")
}

#[test]
fn test_top_row_win() {
    let chronological = [
        Move::new(sq(0, 0), Symbol::X),
        Move::new(sq(1, 1), Symbol::O),
        Move::new(sq(0, 1), Symbol::X),
        Move::new(sq(1, 0), Symbol::O),
        Move::new(sq(0, 2), Symbol::X),
    ];

    // The log order is newest-first; both orders describe the same game.
    let mut recent_first = chronological;
    recent_first.reverse();
    let from_log = MoveList::from_recent_first(recent_first).unwrap();
    let from_play = MoveList::from_chronological(chronological).unwrap();
    assert_eq!(from_log, from_play);

    let board = project_board(&from_log);
    assert_eq!(board.rows()[0], [Cell::Occupied(Symbol::X); 3]);

    let mut game = GameState::new();
    for mv in chronological {
        game.select_square(mv.square);
    }
    assert_eq!(game.moves(), &from_play);

    let winner = game.winner().expect("X holds the top row");
    assert_eq!(winner.symbol(), &Symbol::X);
    assert_eq!(winner.name(), "Max");
    assert!(game.status().is_over());

    let view = game.view();
    assert_eq!(view.winning_line(), &Some(Line::TopRow));
    assert_eq!(view.log().first(), Some(&chronological[4]));
}

#[test]
fn test_full_board_draw() {
    let mut game = GameState::new();
    // X O X / X O O / O X X
    for (row, col) in [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ] {
        game.select_square(sq(row, col));
    }

    assert!(game.is_draw());
    assert_eq!(game.winner(), None);
    assert_eq!(game.status(), GameStatus::Draw);
    assert!(game.board().is_full());
    assert_eq!(detect_winner(&game.board(), game.players()), None);
}

#[test]
fn test_rename_o() {
    let mut game = GameState::new();
    game.rename_identity(Symbol::O, "Alex");
    assert_eq!(game.players().name(Symbol::O), "Alex");
    assert_eq!(game.players().name(Symbol::X), "Max");
}

#[test]
fn test_o_wins_column() {
    let mut game = GameState::new();
    for (row, col) in [(0, 0), (0, 1), (2, 2), (1, 1), (1, 0), (2, 1)] {
        game.select_square(sq(row, col));
    }
    assert_eq!(
        game.status(),
        GameStatus::Won(game.players().identity(Symbol::O))
    );
    assert_eq!(game.view().winning_line(), &Some(Line::CenterColumn));
}

#[test]
fn test_turn_projection_over_log_order() {
    let moves = MoveList::from_recent_first([
        Move::new(sq(2, 2), Symbol::X),
        Move::new(sq(1, 1), Symbol::O),
        Move::new(sq(0, 0), Symbol::X),
    ])
    .unwrap();
    assert_eq!(active_symbol(&moves), Symbol::O);
}

#[test]
fn test_view_serializes() {
    let mut game = GameState::new();
    game.select_square(sq(1, 1));
    game.select_square(sq(0, 0));

    let json = serde_json::to_value(game.view()).unwrap();
    assert_eq!(json["active_symbol"], "X");
    assert_eq!(json["is_draw"], false);
    assert!(json["winner"].is_null());
    assert_eq!(json["log"][0]["square"]["row"], 0);
    assert_eq!(json["log"][0]["player"], "O");
    assert_eq!(json["log"][1]["player"], "X");
    assert_eq!(json["players"]["x"], "Max");
}

#[test]
fn test_state_round_trips_through_json() {
    let mut game = GameState::new();
    game.select_square(sq(2, 0));
    game.rename_identity(Symbol::O, "Alex");

    let json = serde_json::to_string(&game).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);
    assert_eq!(restored.active_symbol(), Symbol::O);
}

#[test]
fn test_restored_o_opening_keeps_alternating() {
    let json = r#"{
        "moves": [{"square": {"row": 0, "col": 0}, "player": "O"}],
        "players": {"x": "Max", "o": "Manuel"}
    }"#;
    let mut game: GameState = serde_json::from_str(json).unwrap();
    assert_eq!(game.active_symbol(), Symbol::X);

    let placed = game.select_square(sq(1, 1));
    assert_eq!(placed, Selection::Placed(Move::new(sq(1, 1), Symbol::X)));
    assert!(MoveListInvariants::check_all(game.moves()).is_ok());

    game.select_square(sq(2, 2));
    assert_eq!(game.moves().last().map(|mv| mv.player), Some(Symbol::O));
}

#[test]
fn test_restore_rejects_out_of_turn_moves() {
    let json = r#"{
        "moves": [
            {"square": {"row": 0, "col": 0}, "player": "X"},
            {"square": {"row": 1, "col": 1}, "player": "X"}
        ],
        "players": {"x": "Max", "o": "Manuel"}
    }"#;
    let restored: Result<GameState, _> = serde_json::from_str(json);
    assert!(restored.is_err());
}
