//! End-to-end game scenarios for the time-travel controller.

use timetravel_tictactoe::{
    GameController, GamePhase, Player, Position, Square, Status, check_winner,
};

fn play(indices: &[usize]) -> GameController {
    let mut game = GameController::new();
    for &idx in indices {
        assert!(game.apply_index(idx).is_applied(), "move {idx} rejected");
    }
    game
}

#[test]
fn test_marks_alternate_in_play_order() {
    let game = play(&[4, 0, 8, 1, 7]);
    let board = game.board();
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::O));
    assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::TopCenter), Square::Occupied(Player::O));
    assert_eq!(board.get(Position::BottomCenter), Square::Occupied(Player::X));
    // O holds the top-left corner, so X has no completed line yet.
    assert_eq!(check_winner(board), None);
    assert_eq!(game.status(), Status::NextPlayer(Player::O));
}

#[test]
fn test_diagonal_win() {
    let game = play(&[0, 1, 4, 2, 8]);
    let line = check_winner(game.board()).expect("X holds the diagonal");
    assert_eq!(line.player, Player::X);
    assert_eq!(
        line.cells,
        [Position::TopLeft, Position::Center, Position::BottomRight]
    );
    assert_eq!(game.status().to_string(), "Winner: X");
    assert_eq!(game.phase(), GamePhase::Won(Player::X));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let sequence = [0, 1, 2, 4, 3, 5, 7, 6, 8];
    let mut game = GameController::new();
    for (n, &idx) in sequence.iter().enumerate() {
        assert!(game.apply_index(idx).is_applied());
        assert_eq!(check_winner(game.board()), None, "winner after move {}", n + 1);
    }
    assert_eq!(game.status().to_string(), "Draw");
    assert_eq!(game.phase(), GamePhase::Drawn);
    // The board is full, so every further move is ignored.
    assert!(!game.apply_index(0).is_applied());
}

#[test]
fn test_draw_status_depends_on_selected_step() {
    let mut game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    game.jump_to(8).unwrap();
    assert_eq!(game.status(), Status::NextPlayer(Player::X));
    game.jump_to(9).unwrap();
    assert_eq!(game.status(), Status::Draw);
}

#[test]
fn test_branching_discards_abandoned_future() {
    let mut game = play(&[0, 1, 4, 2, 8]);
    game.jump_to(2).unwrap();
    assert_eq!(game.history().len(), 6, "jumping never drops entries");

    assert!(game.apply_move(Position::BottomLeft).is_applied());
    assert_eq!(game.history().len(), 4);
    assert_eq!(*game.current_step(), 3);
    assert_eq!(
        *game.history()[3].last_move(),
        Some(Position::BottomLeft)
    );
    assert_eq!(game.status(), Status::NextPlayer(Player::O));
}

#[test]
fn test_won_board_ignores_moves_until_jump() {
    let mut game = play(&[0, 1, 4, 2, 8]);
    let snapshot = game.clone();
    let free: Vec<_> = Position::ALL
        .into_iter()
        .filter(|pos| game.board().is_empty(*pos))
        .collect();
    assert_eq!(free.len(), 4);
    for pos in free {
        assert!(!game.apply_move(pos).is_applied());
    }
    assert_eq!(game, snapshot);

    game.jump_to(0).unwrap();
    assert_eq!(game.phase(), GamePhase::InProgress);
    assert!(game.apply_move(Position::Center).is_applied());
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_view_serializes_to_json() {
    let view = play(&[4]).view();
    let json = serde_json::to_value(&view).expect("view serializes");
    assert_eq!(json["moves"][1]["label"], "Go to move #1(col: 2, row: 2)");
    assert_eq!(json["moves"][1]["selected"], true);
    assert_eq!(json["order_ascending"], true);
}
