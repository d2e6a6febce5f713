//! BoardView: maps a `PuzzleGame` into a styled surface.
//!
//! This module is pure (no I/O). It can be unit-tested.

use fifteen_core::PuzzleGame;

use crate::surface::{Rgb, Style, Surface};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the tile grid, a side panel, and the win overlay.
pub struct BoardView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 6x3 keeps tiles roughly square under typical glyph aspect ratios
        // and leaves room for two-digit labels.
        Self {
            tile_w: 6,
            tile_h: 3,
        }
    }
}

impl BoardView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(3),
            tile_h: tile_h.max(1),
        }
    }

    /// Render into an existing surface, resizing it to the viewport.
    ///
    /// Callers can reuse one surface across frames; allocations only happen
    /// when the terminal size changes.
    pub fn render_into(&self, game: &PuzzleGame, viewport: Viewport, surface: &mut Surface) {
        surface.resize(viewport.width, viewport.height);
        surface.clear(Style::default());

        let board_w = game.cols() as u16 * self.tile_w;
        let board_h = game.rows() as u16 * self.tile_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let well = Style {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(25, 25, 32),
            bold: false,
            dim: true,
        };
        let border = Style {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        surface.fill_rect(start_x + 1, start_y + 1, board_w, board_h, ' ', well);
        self.draw_frame(surface, start_x, start_y, frame_w, frame_h, border);

        let last_tile = (game.board().cell_count() - 1) as u8;
        for row in 0..game.rows() {
            for col in 0..game.cols() {
                if let Some(Some(tile)) = game.board().get(row, col) {
                    self.draw_tile(surface, start_x, start_y, row, col, tile, last_tile);
                }
            }
        }

        self.draw_side_panel(game, viewport, surface, start_x, start_y, frame_w);

        if game.solved() {
            self.draw_overlay(surface, start_x, start_y, frame_w, frame_h, "SOLVED!");
        }
    }

    /// Convenience helper that allocates a new surface.
    pub fn render(&self, game: &PuzzleGame, viewport: Viewport) -> Surface {
        let mut surface = Surface::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut surface);
        surface
    }

    fn draw_frame(&self, surface: &mut Surface, x: u16, y: u16, w: u16, h: u16, style: Style) {
        if w < 2 || h < 2 {
            return;
        }

        surface.put_char(x, y, '┌', style);
        surface.put_char(x + w - 1, y, '┐', style);
        surface.put_char(x, y + h - 1, '└', style);
        surface.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            surface.put_char(x + dx, y, '─', style);
            surface.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            surface.put_char(x, y + dy, '│', style);
            surface.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(
        &self,
        surface: &mut Surface,
        start_x: u16,
        start_y: u16,
        row: u8,
        col: u8,
        tile: u8,
        last_tile: u8,
    ) {
        let style = tile_style(tile, last_tile);
        let px = start_x + 1 + col as u16 * self.tile_w;
        let py = start_y + 1 + row as u16 * self.tile_h;
        surface.fill_rect(px, py, self.tile_w, self.tile_h, ' ', style);

        let label = tile.to_string();
        let label_x = px + (self.tile_w.saturating_sub(label.len() as u16)) / 2;
        let label_y = py + self.tile_h / 2;
        surface.put_str(label_x, label_y, &label, style);
    }

    fn draw_side_panel(
        &self,
        game: &PuzzleGame,
        viewport: Viewport,
        surface: &mut Surface,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = Style {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = Style {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let hint = Style { dim: true, ..value };

        let mut y = start_y;
        surface.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        surface.put_str(panel_x, y, &game.moves().to_string(), value);
        y = y.saturating_add(2);

        surface.put_str(panel_x, y, "BOARD", label);
        y = y.saturating_add(1);
        surface.put_str(panel_x, y, &format!("{}x{}", game.rows(), game.cols()), value);
        y = y.saturating_add(2);

        surface.put_str(panel_x, y, "SEED", label);
        y = y.saturating_add(1);
        surface.put_str(panel_x, y, &game.seed().to_string(), value);
        y = y.saturating_add(2);

        surface.put_str(panel_x, y, "arrows slide", hint);
        y = y.saturating_add(1);
        surface.put_str(panel_x, y, "n new game", hint);
        y = y.saturating_add(1);
        surface.put_str(panel_x, y, "q quit", hint);
    }

    fn draw_overlay(
        &self,
        surface: &mut Surface,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = Style {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        surface.put_str(x, mid_y, text, style);
    }
}

/// Background ramp from warm to cool across the tile range, so misplaced
/// tiles stand out by hue at a glance.
fn tile_style(tile: u8, last_tile: u8) -> Style {
    let span = last_tile.max(2) as u32 - 1;
    let t = (tile as u32 - 1) * 255 / span;
    Style {
        fg: Rgb::new(245, 245, 245),
        bg: Rgb::new(
            (200 - 160 * t / 255) as u8,
            (120 - 30 * t / 255) as u8,
            (40 + 160 * t / 255) as u8,
        ),
        bold: true,
        dim: false,
    }
}
