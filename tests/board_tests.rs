//! Board tests - tile/turn state machine through the public API

use tui_tictactoe::core::{Board, MarkPainter};
use tui_tictactoe::types::{Mark, Player, TILE_COUNT, TILE_HEIGHT, TILE_WIDTH};

#[derive(Default)]
struct Recorder(Vec<(Player, i32, i32)>);

impl MarkPainter for Recorder {
    fn paint(&mut self, player: Player, x: i32, y: i32) {
        self.0.push((player, x, y));
    }
}

/// Centre pixel of tile `i`.
fn centre(i: usize) -> (i32, i32) {
    let (x, y) = tui_tictactoe::types::tile_origin(i);
    (x + TILE_WIDTH / 2, y + TILE_HEIGHT / 2)
}

#[test]
fn test_new_board_is_empty_with_x_to_move() {
    let board = Board::new();
    assert_eq!(board.turn(), Player::X);
    assert_eq!(board.count(Mark::Empty), TILE_COUNT);
    assert!(board.moves().is_empty());
    assert_eq!(board.mark(TILE_COUNT), None);
}

#[test]
fn test_click_scenario() {
    let mut board = Board::new();

    assert_eq!(board.handle_pointer(50, 50), Some(0));
    assert_eq!(board.mark(0), Some(Mark::X));
    assert_eq!(board.turn(), Player::O);

    assert_eq!(board.handle_pointer(50, 50), None);
    assert_eq!(board.mark(0), Some(Mark::X));
    assert_eq!(board.turn(), Player::O);

    assert_eq!(board.handle_pointer(250, 50), Some(1));
    assert_eq!(board.mark(1), Some(Mark::O));
    assert_eq!(board.turn(), Player::X);
}

#[test]
fn test_turn_alternates_strictly() {
    let mut board = Board::new();
    let order = [4, 0, 8, 2, 6, 3, 5, 1, 7];
    for (k, &tile) in order.iter().enumerate() {
        let expected = if k % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(board.turn(), expected, "acting player for click {}", k + 1);
        let (x, y) = centre(tile);
        assert_eq!(board.handle_pointer(x, y), Some(tile));
        assert_eq!(board.mark(tile), Some(expected.mark()));
    }
}

#[test]
fn test_rejected_clicks_are_idempotent() {
    let mut board = Board::new();
    assert_eq!(board.handle_pointer(300, 300), Some(4));
    let before = board.snapshot();

    let mut painted_before = Recorder::default();
    board.render(&mut painted_before);

    // Interior points of tile 4 only; its edges are shared with open tiles.
    for (x, y) in [(300, 300), (201, 201), (399, 399), (250, 350)] {
        assert_eq!(board.handle_pointer(x, y), None);
    }
    assert_eq!(board.snapshot(), before);
    assert_eq!(board.turn(), Player::O);

    let mut painted_after = Recorder::default();
    board.render(&mut painted_after);
    assert_eq!(painted_after.0, painted_before.0);
    assert_eq!(painted_before.0, vec![(Player::X, 200, 200)]);
}

#[test]
fn test_boundary_points_are_inside() {
    let mut board = Board::new();
    // Top-left corner of tile 0.
    assert_eq!(board.handle_pointer(0, 0), Some(0));
    // Bottom-right corner of tile 8.
    assert_eq!(board.handle_pointer(600, 600), Some(8));
    // Top-left corner of tile 4 is shared with 0, 1, 3; 0 is taken so 1 wins.
    assert_eq!(board.handle_pointer(200, 200), Some(1));
}

#[test]
fn test_clicks_outside_every_tile_change_nothing() {
    let mut board = Board::new();
    for (x, y) in [(-1, -1), (-50, 100), (100, -1), (601, 300), (300, 601), (i32::MIN, i32::MAX)] {
        assert_eq!(board.handle_pointer(x, y), None);
    }
    assert_eq!(board, Board::new());
}

#[test]
fn test_full_board_and_tenth_click() {
    let mut board = Board::new();
    for i in 0..TILE_COUNT {
        let (x, y) = centre(i);
        assert_eq!(board.handle_pointer(x, y), Some(i));
    }
    assert!(board.is_full());
    assert_eq!(board.count(Mark::X), 5);
    assert_eq!(board.count(Mark::O), 4);
    let full = board.snapshot();

    for (x, y) in [(50, 50), (600, 600), (-10, -10), (300, 300)] {
        assert_eq!(board.handle_pointer(x, y), None);
    }
    assert_eq!(board.snapshot(), full);
    assert_eq!(full.to_string(), "XOX/OXO/XOX");
}

#[test]
fn test_move_history_matches_click_order() {
    let mut board = Board::new();
    let order = [8, 0, 4];
    for &tile in &order {
        let (x, y) = centre(tile);
        board.handle_pointer(x, y);
    }
    assert_eq!(board.moves(), &[8, 0, 4]);
    for (i, tile) in board.tiles().iter().enumerate() {
        assert_eq!(!tile.is_open(), order.contains(&i));
    }
}

#[test]
fn test_render_paints_in_index_order() {
    let mut board = Board::new();
    let (x, y) = centre(8);
    board.handle_pointer(x, y);
    board.handle_pointer(10, 10);

    let mut rec = Recorder::default();
    board.render(&mut rec);
    assert_eq!(rec.0, vec![(Player::O, 0, 0), (Player::X, 400, 400)]);
}

#[test]
fn test_shared_corner_press_reaches_all_containing_tiles() {
    let mut board = Board::new();
    assert_eq!(board.handle_pointer(400, 400), Some(4));

    // (400, 400) lies in tiles 4, 5, 7 and 8; only the first open one claims it.
    for (i, tile) in board.tiles().iter().enumerate() {
        let expected = u32::from([4, 5, 7, 8].contains(&i));
        assert_eq!(tile.presses(), expected, "tile {i}");
    }
    assert_eq!(board.count(Mark::X), 1);
    assert_eq!(board.turn(), Player::O);
}
