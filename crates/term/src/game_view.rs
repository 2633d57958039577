//! GameView: maps `core::Game` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Board, Game};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Tile, TileState};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Words listed under LAST before the panel runs out of room
const MAX_LISTED_WORDS: usize = 8;

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

/// A lightweight terminal renderer for the word game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    /// # Panics
    ///
    /// Panics if either cell dimension is zero.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        assert!(cell_w > 0 && cell_h > 0, "cells must be at least 1x1");
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the current game into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_flash(game, false, viewport, fb);
    }

    /// Like [`GameView::render_into`], highlighting the word panel when
    /// `word_flash` is set (a word was just cleared).
    pub fn render_into_with_flash(
        &self,
        game: &Game,
        word_flash: bool,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let board = game.board();
        let board_px_w = clamp_u16(board.width()).saturating_mul(self.cell_w);
        let board_px_h = clamp_u16(board.height()).saturating_mul(self.cell_h);
        let frame_w = board_px_w.saturating_add(2);
        let frame_h = board_px_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        fb.fill_rect(
            start_x.saturating_add(1),
            start_y.saturating_add(1),
            board_px_w,
            board_px_h,
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), PLAY_BG),
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);
        self.draw_tiles(fb, board, start_x, start_y);

        self.draw_side_panel(fb, game, word_flash, viewport, start_x, start_y, frame_w);

        if game.is_game_over() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_tiles(&self, fb: &mut FrameBuffer, board: &Board, start_x: u16, start_y: u16) {
        for (idx, tile) in board.tiles().iter().enumerate() {
            let (x, y) = board.coords(idx);
            self.draw_tile(fb, start_x, start_y, clamp_u16(x), clamp_u16(y), *tile);
        }
    }

    /// Letter in the first column of the cell, the rest filled with the
    /// cell background.
    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16, tile: Tile) {
        let (ch, style) = match (tile.state(), tile.letter()) {
            (TileState::Static, Some(letter)) => (
                letter,
                CellStyle::new(Rgb::new(235, 235, 235), Rgb::new(50, 60, 90)).bold(),
            ),
            (TileState::Falling, Some(letter)) => (
                letter,
                CellStyle::new(Rgb::new(255, 210, 80), Rgb::new(70, 55, 20)).bold(),
            ),
            _ => ('·', CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim()),
        };

        let px = start_x.saturating_add(1).saturating_add(x.saturating_mul(self.cell_w));
        let py = start_y.saturating_add(1).saturating_add(y.saturating_mul(self.cell_h));
        if px >= fb.width() || py >= fb.height() {
            return;
        }
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py.saturating_add((self.cell_h - 1) / 2), ch, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        game: &Game,
        word_flash: bool,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let word_style = if word_flash {
            CellStyle::new(Rgb::new(0, 0, 0), Rgb::new(255, 210, 80)).bold()
        } else {
            value
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "WORDS", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, game.words_cleared(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LAST", label);
        y = y.saturating_add(1);
        if game.last_words().is_empty() {
            fb.put_str(panel_x, y, "-", value);
        }
        for word in game.last_words().iter().take(MAX_LISTED_WORDS) {
            if y >= viewport.height {
                break;
            }
            let mut x = panel_x;
            for ch in word.chars() {
                fb.put_char(x, y, ch.to_ascii_uppercase(), word_style);
                x = x.saturating_add(1);
            }
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Board coordinates beyond the terminal's range are pinned to `u16::MAX`
/// and clipped by the framebuffer.
fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
