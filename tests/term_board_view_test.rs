use tui_tictactoe::core::Board;
use tui_tictactoe::term::{BoardView, Canvas, Filter, Texture, Viewport};
use tui_tictactoe::types::{Rgb, SCREEN_HEIGHT, SCREEN_WIDTH};

const RED: Rgb = Rgb::new(255, 0, 0);
const BLUE: Rgb = Rgb::new(0, 0, 255);

fn logical(view: &BoardView, vp: Viewport, column: u16, row: u16) -> Option<(i32, i32)> {
    view.to_logical(SCREEN_WIDTH, SCREEN_HEIGHT, vp, column, row)
}

#[test]
fn test_board_fills_a_square_terminal_region() {
    let mut canvas = Canvas::default();
    canvas.clear(RED);
    let view = BoardView::default();

    // 60 columns x 30 rows shows the whole board with no margin.
    let fb = view.render(&canvas, Viewport::new(60, 30));
    for (x, y) in [(0, 0), (59, 0), (0, 29), (59, 29)] {
        let cell = fb.get(x, y).unwrap();
        assert_eq!(cell.ch, '▀');
        assert_eq!(cell.style.fg, RED);
        assert_eq!(cell.style.bg, RED);
    }
}

#[test]
fn test_margins_stay_blank_on_wide_terminals() {
    let canvas = Canvas::default();
    let view = BoardView::default();
    let fb = view.render(&canvas, Viewport::new(100, 30));

    // side = 60, centred: columns 20..80.
    assert_eq!(fb.get(19, 10).unwrap().ch, ' ');
    assert_eq!(fb.get(20, 10).unwrap().ch, '▀');
    assert_eq!(fb.get(79, 10).unwrap().ch, '▀');
    assert_eq!(fb.get(80, 10).unwrap().ch, ' ');
}

#[test]
fn test_half_blocks_split_top_and_bottom_pixels() {
    let mut canvas = Canvas::default();
    canvas.clear(RED);
    // Bottom half of the canvas blue.
    let lower = Texture::from_pixels(600, 300, std::iter::repeat(BLUE), None);
    canvas.blit(&lower, 0, 300);

    let view = BoardView::new(Filter::Nearest);
    // 60x30: each row covers 20 px, each half 10 px. Row 15 starts at y=300.
    let fb = view.render(&canvas, Viewport::new(60, 30));
    let above = fb.get(10, 14).unwrap();
    let below = fb.get(10, 15).unwrap();
    assert_eq!((above.style.fg, above.style.bg), (RED, RED));
    assert_eq!((below.style.fg, below.style.bg), (BLUE, BLUE));
}

#[test]
fn test_clicks_map_back_to_the_tile_under_the_cell() {
    let view = BoardView::default();
    let vp = Viewport::new(60, 30);

    let (x, y) = logical(&view, vp, 5, 2).unwrap();
    assert_eq!((x, y), (55, 50));

    let mut board = Board::new();
    assert_eq!(board.handle_pointer(x, y), Some(0));

    // Last column / row land in tile 8.
    let (x, y) = logical(&view, vp, 59, 29).unwrap();
    assert!(x > 400 && x < 600 && y > 400 && y < 600);
    assert_eq!(board.handle_pointer(x, y), Some(8));
}

#[test]
fn test_cells_off_the_board_do_not_map() {
    let view = BoardView::default();
    let vp = Viewport::new(100, 30);
    assert_eq!(logical(&view, vp, 19, 10), None);
    assert_eq!(logical(&view, vp, 80, 10), None);
    assert_eq!(logical(&view, vp, 20, 30), None);
    assert!(logical(&view, vp, 20, 0).is_some());

    assert_eq!(logical(&view, Viewport::new(1, 1), 0, 0), None);
}
