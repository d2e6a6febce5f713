//! Rendering tests - frames built from known game states.

use tui_fifteen::core::{Board, PuzzleGame};
use tui_fifteen::term::{BoardView, Surface, Viewport};
use tui_fifteen::types::Cell;

fn game(rows: u8, cols: u8, values: &[u8]) -> PuzzleGame {
    let cells: Vec<Cell> = values
        .iter()
        .map(|v| if *v == 0 { None } else { Some(*v) })
        .collect();
    PuzzleGame::from_board(Board::from_cells(rows, cols, cells).unwrap(), 77)
}

fn full_text(surface: &Surface) -> String {
    (0..surface.height())
        .map(|y| surface.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_frame_contains_board_and_panel() {
    let game = game(4, 4, &[5, 1, 2, 3, 4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0]);
    let surface = BoardView::default().render(&game, Viewport::new(100, 30));
    let text = full_text(&surface);

    // Two-digit labels survive rendering.
    for label in ["10", "15"] {
        assert!(text.contains(label), "missing {label}");
    }
    for label in ["MOVES", "BOARD", "SEED", "4x4", "77"] {
        assert!(text.contains(label), "missing {label}");
    }
    assert!(text.contains('┌') && text.contains('┘'));
    assert!(!text.contains("SOLVED"));
}

#[test]
fn test_solved_frame_shows_the_overlay() {
    let game = game(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
    assert!(game.solved());

    let surface = BoardView::default().render(&game, Viewport::new(80, 24));
    assert!(full_text(&surface).contains("SOLVED!"));
}

#[test]
fn test_render_into_reuses_the_surface() {
    let mut game = game(2, 2, &[3, 1, 2, 0]);
    let view = BoardView::default();
    let mut surface = Surface::new(0, 0);

    view.render_into(&game, Viewport::new(60, 20), &mut surface);
    let before = full_text(&surface);

    game.press(2).unwrap();
    view.render_into(&game, Viewport::new(60, 20), &mut surface);
    let after = full_text(&surface);

    assert_eq!(surface.width(), 60);
    assert_eq!(surface.height(), 20);
    assert_ne!(before, after);
}

#[test]
fn test_degenerate_viewports_do_not_panic() {
    let game = game(4, 4, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 0, 15]);
    for view in [BoardView::default(), BoardView::new(4, 2), BoardView::new(0, 0)] {
        for (w, h) in [(0, 0), (1, 1), (5, 40), (200, 2)] {
            let surface = view.render(&game, Viewport::new(w, h));
            assert_eq!(surface.width(), w);
            assert_eq!(surface.height(), h);
        }
    }
}
