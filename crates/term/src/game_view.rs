//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The palette follows the classic 2048 look: warm paper background, a
//! muted board frame, and tile colors climbing from beige toward gold.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Tile, GRID_SIZE};

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

const BACKGROUND: Rgb = Rgb::new(251, 248, 240);
const BOARD: Rgb = Rgb::new(187, 173, 160);
const EMPTY_CELL: Rgb = Rgb::new(205, 192, 180);
const TEXT_DARK: Rgb = Rgb::new(119, 110, 101);
const TEXT_LIGHT: Rgb = Rgb::new(249, 246, 242);

/// Header rows above the board (title, score boxes, spacing).
const HEADER_H: u16 = 5;
/// Footer rows below the board (spacing, restart hint).
const FOOTER_H: u16 = 2;

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    /// Gap between tiles and around the board edge.
    gap: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 8x3 keeps tiles near-square on typical terminal glyphs and fits
        // five-digit values.
        Self {
            cell_w: 8,
            cell_h: 3,
            gap: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            gap: 1,
        }
    }

    fn board_w(&self) -> u16 {
        GRID_SIZE as u16 * self.cell_w + (GRID_SIZE as u16 + 1) * self.gap
    }

    fn board_h(&self) -> u16 {
        GRID_SIZE as u16 * self.cell_h + (GRID_SIZE as u16 + 1) * self.gap
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully repainted.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);

        let backdrop = CellStyle::new(TEXT_DARK, BACKGROUND);
        fb.clear(crate::fb::Cell {
            ch: ' ',
            style: backdrop,
        });

        let board_w = self.board_w();
        let board_h = self.board_h();
        let total_h = HEADER_H + board_h + FOOTER_H;

        let start_x = viewport.width.saturating_sub(board_w) / 2;
        let top = viewport.height.saturating_sub(total_h) / 2;
        let board_y = top + HEADER_H;

        self.draw_header(fb, snap, start_x, top, board_w);
        self.draw_board(fb, snap, start_x, board_y);

        if snap.game_over {
            self.draw_game_over(fb, start_x, board_y, board_w, board_h);
        }

        let hint = CellStyle::new(TEXT_DARK, BACKGROUND);
        fb.put_str_centered(
            start_x,
            board_y + board_h + 1,
            board_w,
            "Press R to restart",
            hint,
        );
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_header(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        top: u16,
        board_w: u16,
    ) {
        let title = CellStyle::new(TEXT_DARK, BACKGROUND).bold();
        fb.put_str_centered(start_x, top, board_w, "2048", title);

        // Two score boxes: current score left, best score right.
        let box_w = (board_w / 2).saturating_sub(1);
        let left_x = start_x;
        let right_x = start_x + board_w - box_w;
        let box_y = top + 2;

        let box_style = CellStyle::new(TEXT_LIGHT, BOARD);
        let label_style = CellStyle::new(EMPTY_CELL, BOARD);

        fb.fill_rect(left_x, box_y, box_w, 2, ' ', box_style);
        fb.fill_rect(right_x, box_y, box_w, 2, ' ', box_style);

        fb.put_str_centered(left_x, box_y, box_w, "SCORE", label_style);
        fb.put_str_centered(right_x, box_y, box_w, "BEST", label_style);

        let value_style = box_style.bold();
        fb.put_u32_centered(left_x, box_y + 1, box_w, snap.score, value_style);
        fb.put_u32_centered(right_x, box_y + 1, box_w, snap.best_score, value_style);
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, start_x: u16, board_y: u16) {
        fb.fill_rect(
            start_x,
            board_y,
            self.board_w(),
            self.board_h(),
            ' ',
            CellStyle::new(TEXT_LIGHT, BOARD),
        );

        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                self.draw_tile(fb, start_x, board_y, x, y, snap.grid[y as usize][x as usize]);
            }
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        board_y: u16,
        x: u8,
        y: u8,
        value: Tile,
    ) {
        let px = start_x + self.gap + (x as u16) * (self.cell_w + self.gap);
        let py = board_y + self.gap + (y as u16) * (self.cell_h + self.gap);

        let style = tile_style(value);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        if value != 0 {
            let mid = py + self.cell_h / 2;
            fb.put_u32_centered(px, mid, self.cell_w, value, style);
        }
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        board_y: u16,
        board_w: u16,
        board_h: u16,
    ) {
        let band_y = board_y + board_h / 2 - 1;
        let band = CellStyle::new(TEXT_LIGHT, TEXT_DARK);
        fb.fill_rect(start_x, band_y, board_w, 3, ' ', band);
        fb.put_str_centered(start_x, band_y + 1, board_w, "GAME OVER", band.bold());
    }
}

/// Style for a tile value.
///
/// Values above 2048 reuse the 2048 gold.
fn tile_style(value: Tile) -> CellStyle {
    let (bg, fg) = match value {
        0 => (EMPTY_CELL, TEXT_DARK),
        2 => (Rgb::new(238, 228, 218), TEXT_DARK),
        4 => (Rgb::new(237, 224, 200), TEXT_DARK),
        8 => (Rgb::new(242, 177, 121), TEXT_LIGHT),
        16 => (Rgb::new(245, 149, 99), TEXT_LIGHT),
        32 => (Rgb::new(246, 124, 96), TEXT_LIGHT),
        64 => (Rgb::new(246, 94, 59), TEXT_LIGHT),
        128 => (Rgb::new(237, 207, 115), TEXT_LIGHT),
        256 => (Rgb::new(237, 204, 98), TEXT_LIGHT),
        512 => (Rgb::new(237, 200, 80), TEXT_LIGHT),
        1024 => (Rgb::new(237, 197, 63), TEXT_LIGHT),
        _ => (Rgb::new(237, 194, 45), TEXT_LIGHT),
    };
    CellStyle::new(fg, bg).bold()
}
