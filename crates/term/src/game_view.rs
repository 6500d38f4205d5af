//! GameView: maps the core's pixel buffer into a terminal framebuffer.
//!
//! Each terminal cell covers `scale` pixels horizontally and `2 * scale` pixels
//! vertically and is drawn as an upper half block, so one cell shows two
//! stacked pixel blocks. This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameState, PixelBuffer, CLEAR_COLOR};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

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

/// Status values shown on the line under the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudView {
    pub score: u32,
    pub lives: u32,
    pub aliens_alive: u16,
    pub bullets: u16,
    pub cleared: bool,
}

impl HudView {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.score(),
            lives: state.player().lives,
            aliens_alive: state.aliens_alive() as u16,
            bullets: state.bullets().len() as u16,
            cleared: state.is_cleared(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Downsampling presenter for the pixel buffer.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Pixels per cell column (and half the pixels per cell row).
    scale: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 224x256 at scale 2 => 112x64 cells.
        Self::new(2)
    }
}

impl GameView {
    pub fn new(scale: u16) -> Self {
        Self {
            scale: scale.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn scale(&self) -> u16 {
        self.scale
    }

    /// Cells needed to show a `width` x `height` pixel buffer.
    pub fn playfield_cells(&self, width: usize, height: usize) -> (u16, u16) {
        let sx = self.scale as usize;
        let sy = 2 * sx;
        (width.div_ceil(sx) as u16, height.div_ceil(sy) as u16)
    }

    /// Render into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        pixels: &PixelBuffer,
        hud: Option<&HudView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (cols, rows) = self.playfield_cells(pixels.width(), pixels.height());
        let hud_rows = u16::from(hud.is_some());

        let start_x = viewport.width.saturating_sub(cols) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(rows + hud_rows) / 2,
            AnchorY::Top => 0,
        };

        let s = self.scale as usize;
        for cy in 0..rows {
            // Screen pixel row 0 is the *top* row of the buffer.
            let top_row = cy as usize * 2 * s;
            for cx in 0..cols {
                let px = cx as usize * s;
                let top = sample_block(pixels, px, top_row, s);
                let bottom = sample_block(pixels, px, top_row + s, s);
                fb.set(
                    start_x + cx,
                    start_y + cy,
                    Cell::half_block(Rgb::from(top), Rgb::from(bottom)),
                );
            }
        }

        if let Some(hud) = hud {
            self.draw_hud(fb, hud, start_x, start_y + rows, cols);
            if hud.cleared {
                self.draw_overlay_text(fb, start_x, start_y, cols, rows, "WAVE CLEARED");
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, pixels: &PixelBuffer, hud: Option<&HudView>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(pixels, hud, viewport, &mut fb);
        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, hud: &HudView, x: u16, y: u16, width: u16) {
        if y >= fb.height() {
            return;
        }
        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let value = CellStyle {
            fg: Rgb::new(0, 255, 0),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        let fields = [
            ("SCORE ", format!("{:04}", hud.score)),
            ("  LIVES ", hud.lives.to_string()),
            ("  ALIENS ", hud.aliens_alive.to_string()),
            ("  SHOTS ", hud.bullets.to_string()),
        ];
        let limit = x.saturating_add(width);
        let mut cx = x;
        for (name, val) in fields.iter() {
            if cx >= limit {
                break;
            }
            cx = fb.put_str(cx, y, name, label);
            cx = fb.put_str(cx, y, val, value);
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
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Colour of an `s` x `s` block whose top-left is at screen pixel `(px, screen_row)`.
///
/// The first non-background pixel wins so single-pixel bullets survive downsampling.
fn sample_block(pixels: &PixelBuffer, px: usize, screen_row: usize, s: usize) -> u32 {
    let height = pixels.height();
    for dy in 0..s {
        let row = screen_row + dy;
        if row >= height {
            break;
        }
        let y = (height - 1 - row) as i32;
        for dx in 0..s {
            match pixels.get((px + dx) as i32, y) {
                Some(c) if c != CLEAR_COLOR => return c,
                Some(_) => {}
                None => break,
            }
        }
    }
    CLEAR_COLOR
}
