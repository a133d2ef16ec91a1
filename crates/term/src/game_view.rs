//! GameView: maps the game session into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The layout mirrors the classic 2048 look: a title row with SCORE and
//! BEST boxes, the board as colored tile blocks with gaps, and a status
//! line for the win / game-over message. The same view also renders the
//! intermediate frames of the slide animation from a [`TileMap`].

use crate::core::{Board, GameSnapshot, TileMap};
use crate::fb::{Cell, FrameBuffer, Rgb, Style};
use crate::types::GRID_SIZE;

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

/// Tile block width in terminal columns.
const TILE_W: u16 = 7;
/// Tile block height in terminal rows.
const TILE_H: u16 = 3;
/// Gap between tile blocks.
const GAP: u16 = 1;
/// Padding between the board edge and the outer tiles.
const PAD: u16 = 1;
/// Rows above the board (title and score boxes).
const HEADER_H: u16 = 2;

const SCREEN_BG: Rgb = Rgb::new(250, 248, 239);
const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const TEXT: Rgb = Rgb::new(119, 110, 101);
const TEXT_BRIGHT: Rgb = Rgb::new(249, 246, 242);
const LABEL: Rgb = Rgb::new(238, 228, 218);

/// Background color for a tile value (the classic palette).
fn tile_color(value: u32) -> Rgb {
    match value {
        2 => Rgb::new(238, 228, 218),
        4 => Rgb::new(237, 224, 200),
        8 => Rgb::new(242, 177, 121),
        16 => Rgb::new(245, 149, 99),
        32 => Rgb::new(246, 124, 95),
        64 => Rgb::new(246, 94, 59),
        128 => Rgb::new(237, 207, 114),
        256 => Rgb::new(237, 204, 97),
        512 => Rgb::new(237, 200, 80),
        1024 => Rgb::new(237, 197, 63),
        2048 => Rgb::new(237, 194, 46),
        // Anything beyond the target shares one dark color.
        _ => Rgb::new(60, 58, 50),
    }
}

fn tile_style(value: u32) -> Style {
    let fg = if value <= 4 { TEXT } else { TEXT_BRIGHT };
    Style::new(fg, tile_color(value)).bold()
}

/// A lightweight terminal renderer for the merge puzzle.
pub struct GameView {
    /// Top-left corner of the board frame, vertical offset.
    board_top: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            board_top: HEADER_H + 1,
        }
    }
}

impl GameView {
    /// Total board frame width in terminal columns.
    pub fn board_width() -> u16 {
        PAD * 2 + GRID_SIZE as u16 * TILE_W + (GRID_SIZE as u16 - 1) * GAP
    }

    /// Total board frame height in terminal rows.
    pub fn board_height() -> u16 {
        PAD * 2 + GRID_SIZE as u16 * TILE_H + (GRID_SIZE as u16 - 1) * GAP
    }

    /// Board frame origin for a given viewport (centered horizontally).
    fn board_origin(&self, viewport: Viewport) -> (u16, u16) {
        let x = viewport.width.saturating_sub(Self::board_width()) / 2;
        (x, self.board_top)
    }

    /// Top-left corner of the tile block at (row, col), in buffer
    /// coordinates relative to the board origin.
    fn tile_origin(row: usize, col: usize) -> (u16, u16) {
        (
            PAD + col as u16 * (TILE_W + GAP),
            PAD + row as u16 * (TILE_H + GAP),
        )
    }

    /// Render the current session into an existing framebuffer.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_frame(snap, viewport, fb);

        let (bx, by) = self.board_origin(viewport);
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                self.draw_tile(fb, bx, by, row, col, snap.board.get(row, col));
            }
        }

        self.draw_status(snap, viewport, fb);
    }

    /// Render one frame of the slide animation.
    ///
    /// `before` and `tile_map` come from the move record; `t` is animation
    /// progress in `[0, 1]`. Tiles are drawn at linearly interpolated
    /// positions over an all-empty grid. No status message is shown while
    /// tiles are in flight.
    pub fn render_anim_into(
        &self,
        snap: &GameSnapshot,
        before: &Board,
        tile_map: &TileMap,
        t: f32,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        self.render_frame(snap, viewport, fb);

        let (bx, by) = self.board_origin(viewport);
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                self.draw_tile(fb, bx, by, row, col, 0);
            }
        }

        let t = t.clamp(0.0, 1.0);
        for ((src_row, src_col), dest) in tile_map.iter() {
            let value = before.get(src_row, src_col);
            if value == 0 {
                continue;
            }
            let (sx, sy) = Self::tile_origin(src_row, src_col);
            let (ex, ey) = Self::tile_origin(dest.row, dest.col);
            let ix = lerp(sx, ex, t);
            let iy = lerp(sy, ey, t);
            self.draw_tile_at(fb, bx + ix, by + iy, value);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Convenience helper for animation frames.
    pub fn render_anim(
        &self,
        snap: &GameSnapshot,
        before: &Board,
        tile_map: &TileMap,
        t: f32,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_anim_into(snap, before, tile_map, t, viewport, &mut fb);
        fb
    }

    /// Shared scaffolding: background, title, score boxes, board backdrop.
    fn render_frame(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: Style::new(TEXT, SCREEN_BG),
        });

        let (bx, by) = self.board_origin(viewport);

        // Title and score boxes share the header row.
        fb.put_str(bx, 0, "2048", Style::new(TEXT, SCREEN_BG).bold());

        let score_label = format!("SCORE {}", snap.score);
        let best_label = format!("BEST {}", snap.best);
        let boxes_w = (score_label.len() + best_label.len() + 3) as u16;
        let boxes_x = (bx + Self::board_width()).saturating_sub(boxes_w);
        let box_style = Style::new(LABEL, BOARD_BG).bold();
        fb.put_str(boxes_x, 0, &format!(" {} ", score_label), box_style);
        fb.put_str(
            boxes_x + score_label.len() as u16 + 2,
            0,
            &format!(" {} ", best_label),
            box_style,
        );

        // Board backdrop; tiles are drawn over it leaving the gaps visible.
        fb.fill_rect(
            bx,
            by,
            Self::board_width(),
            Self::board_height(),
            ' ',
            Style::new(TEXT, BOARD_BG),
        );
    }

    /// Draw the tile block for (row, col); value 0 draws the empty well.
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        bx: u16,
        by: u16,
        row: usize,
        col: usize,
        value: u32,
    ) {
        let (tx, ty) = Self::tile_origin(row, col);
        if value == 0 {
            fb.fill_rect(bx + tx, by + ty, TILE_W, TILE_H, ' ', Style::new(TEXT, EMPTY_BG));
        } else {
            self.draw_tile_at(fb, bx + tx, by + ty, value);
        }
    }

    /// Draw a tile block at an absolute buffer position (animation path).
    fn draw_tile_at(&self, fb: &mut FrameBuffer, x: u16, y: u16, value: u32) {
        let style = tile_style(value);
        fb.fill_rect(x, y, TILE_W, TILE_H, ' ', style);

        let text = value.to_string();
        let tx = x + (TILE_W.saturating_sub(text.len() as u16)) / 2;
        fb.put_str(tx, y + TILE_H / 2, &text, style);
    }

    /// Win / game-over message plus the controls hint, under the board.
    ///
    /// The win message takes precedence for display; whether moves are
    /// still accepted is governed by the game-over predicate alone.
    fn draw_status(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        let message = if snap.won {
            Some("You made 2048! Keep going!")
        } else if snap.game_over {
            Some("Game Over!")
        } else {
            None
        };

        if let Some(message) = message {
            let (bx, by) = self.board_origin(viewport);
            let msg_y = by + Self::board_height() + 1;
            let center = |s: &str| {
                bx + (Self::board_width().saturating_sub(s.len() as u16)) / 2
            };
            fb.put_str(center(message), msg_y, message, Style::new(TEXT, SCREEN_BG).bold());

            let hint = "R to restart, U to undo, Q to quit";
            fb.put_str(center(hint), msg_y + 1, hint, Style::new(TEXT, SCREEN_BG));
        }
    }
}

fn lerp(start: u16, end: u16, t: f32) -> u16 {
    let s = start as f32;
    let e = end as f32;
    (s + (e - s) * t).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{map_tiles, GameSnapshot};

    fn snapshot(board: Board) -> GameSnapshot {
        let game_over = !board.can_move();
        let won = board.has_won();
        GameSnapshot {
            board,
            score: 0,
            best: 0,
            won,
            game_over,
        }
    }

    fn row_text(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width())
            .map(|x| fb.get(x, y).map(|c| c.ch).unwrap_or(' '))
            .collect()
    }

    fn buffer_text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| row_text(fb, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_shows_title_and_tiles() {
        let board = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let view = GameView::default();
        let fb = view.render(&snapshot(board), Viewport::new(60, 24));

        let text = buffer_text(&fb);
        assert!(text.contains("2048"));
        assert!(text.contains("SCORE 0"));
        assert!(text.contains("BEST 0"));
        assert!(row_text(&fb, GameView::default().board_top + PAD + TILE_H / 2).contains('2'));
    }

    #[test]
    fn test_win_message_takes_precedence() {
        // Board that is simultaneously won and terminal.
        let board = Board::from_rows([
            [2048, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        let snap = snapshot(board);
        assert!(snap.won && snap.game_over);

        let view = GameView::default();
        let text = buffer_text(&view.render(&snap, Viewport::new(60, 28)));
        assert!(text.contains("Keep going!"));
        assert!(!text.contains("Game Over!"));
    }

    #[test]
    fn test_game_over_message() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let view = GameView::default();
        let text = buffer_text(&view.render(&snapshot(board), Viewport::new(60, 28)));
        assert!(text.contains("Game Over!"));
        assert!(text.contains("R to restart"));
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let board = Board::from_rows([[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]]);
        let view = GameView::default();
        let _ = view.render(&snapshot(board), Viewport::new(5, 3));
    }

    #[test]
    fn test_anim_endpoints_match_source_and_destination() {
        let before = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let after = Board::from_rows([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);
        let map = map_tiles(&before, &after);
        let view = GameView::default();
        let viewport = Viewport::new(60, 24);
        let snap = snapshot(after.clone());

        let value_row = view.board_top + PAD + TILE_H / 2;

        // At t=0 the tile is at its source column, at t=1 at its destination.
        let start = view.render_anim(&snap, &before, &map, 0.0, viewport);
        let end = view.render_anim(&snap, &before, &map, 1.0, viewport);

        let start_col = row_text(&start, value_row).find('2');
        let end_col = row_text(&end, value_row).find('2');
        assert!(start_col.is_some() && end_col.is_some());
        assert!(start_col.unwrap() < end_col.unwrap());
    }
}
