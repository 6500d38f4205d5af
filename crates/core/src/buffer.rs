//! Pixel buffer module - the software framebuffer the game draws into
//!
//! A fixed-size grid of packed `R<<24 | G<<16 | B<<8 | A` colours stored as a flat
//! row-major `Vec<u32>`. Row 0 is the *bottom* of the screen: the buffer is handed
//! to presentation bottom-up, the way a GL texture upload would consume it.
//!
//! [`PixelBuffer::draw_sprite`] is the single draw primitive: every visible entity
//! goes through it.

use crate::sprite::Sprite;
use crate::types::{BUFFER_HEIGHT, BUFFER_WIDTH};

/// Pack three 8-bit channels into one opaque colour.
///
/// ```
/// use tui_invaders_core::rgb_to_u32;
///
/// assert_eq!(rgb_to_u32(0, 255, 0), 0x00_FF_00_FF);
/// assert_eq!(rgb_to_u32(0x12, 0x34, 0x56), 0x12_34_56_FF);
/// ```
#[inline]
pub const fn rgb_to_u32(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | 255
}

/// Unpack the colour channels of a packed colour, dropping alpha.
#[inline]
pub const fn u32_to_rgb(color: u32) -> (u8, u8, u8) {
    ((color >> 24) as u8, (color >> 16) as u8, (color >> 8) as u8)
}

/// Background colour
pub const CLEAR_COLOR: u32 = rgb_to_u32(0, 0, 0);

/// Alien colour (live and dying)
pub const ALIEN_COLOR: u32 = rgb_to_u32(0, 255, 0);

/// Player cannon colour
pub const PLAYER_COLOR: u32 = rgb_to_u32(0, 255, 0);

/// Player bullet colour
pub const BULLET_COLOR: u32 = rgb_to_u32(0, 255, 0);

/// Fixed-size software framebuffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    /// Flat array of colours, row-major order (y * width + x)
    data: Vec<u32>,
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new(BUFFER_WIDTH, BUFFER_HEIGHT)
    }
}

impl PixelBuffer {
    /// Create a buffer cleared to [`CLEAR_COLOR`].
    ///
    /// Dimensions are fixed for the buffer's lifetime.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![CLEAR_COLOR; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw row-major pixels, starting at the bottom row.
    pub fn pixels(&self) -> &[u32] {
        &self.data
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Get the colour at `(x, y)`, or `None` outside the buffer.
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Write a colour at `(x, y)`. Returns false (and writes nothing) outside the buffer.
    pub fn set(&mut self, x: i32, y: i32, color: u32) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.data[i] = color;
                true
            }
            None => false,
        }
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: u32) {
        self.data.fill(color);
    }

    /// Blit the set cells of `sprite` with its bottom-left corner at `(x, y)`.
    ///
    /// Stencil row 0 is the visual top, so it lands at `y + height - 1`.
    /// Unset cells are transparent and any target outside the buffer is skipped;
    /// coordinates are signed, so sprites hanging off the left or bottom edge are
    /// clipped rather than wrapped.
    pub fn draw_sprite(&mut self, sprite: &Sprite<'_>, x: i32, y: i32, color: u32) {
        let sw = sprite.width() as i32;
        let sh = sprite.height() as i32;
        for j in 0..sh {
            let ty = y.saturating_add(sh - 1 - j);
            if ty < 0 || ty as usize >= self.height {
                continue;
            }
            for i in 0..sw {
                if !sprite.is_set(i as usize, j as usize) {
                    continue;
                }
                if let Some(idx) = self.index(x.saturating_add(i), ty) {
                    self.data[idx] = color;
                }
            }
        }
    }

    /// Count pixels equal to `color`.
    pub fn count(&self, color: u32) -> usize {
        self.data.iter().filter(|&&c| c == color).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOT: Sprite<'static> = Sprite::new(1, 1, &[1]);
    // @.
    // .@
    const DIAG: Sprite<'static> = Sprite::new(2, 2, &[1, 0, 0, 1]);

    #[test]
    fn new_buffer_is_cleared() {
        let buf = PixelBuffer::default();
        assert_eq!(buf.width(), BUFFER_WIDTH);
        assert_eq!(buf.height(), BUFFER_HEIGHT);
        assert_eq!(buf.count(CLEAR_COLOR), BUFFER_WIDTH * BUFFER_HEIGHT);
    }

    #[test]
    fn clear_overwrites_everything() {
        let mut buf = PixelBuffer::new(4, 3);
        buf.set(1, 1, 7);
        buf.clear(42);
        assert!(buf.pixels().iter().all(|&c| c == 42));
    }

    #[test]
    fn get_and_set_reject_out_of_bounds() {
        let mut buf = PixelBuffer::new(4, 3);
        assert!(!buf.set(-1, 0, 1));
        assert!(!buf.set(0, -1, 1));
        assert!(!buf.set(4, 0, 1));
        assert!(!buf.set(0, 3, 1));
        assert_eq!(buf.get(4, 0), None);
        assert!(buf.set(3, 2, 9));
        assert_eq!(buf.get(3, 2), Some(9));
    }

    #[test]
    fn draw_sprite_inverts_rows() {
        let mut buf = PixelBuffer::new(4, 4);
        buf.draw_sprite(&DIAG, 1, 1, 5);

        // Data row 0 (top) lands at y + 1, data row 1 at y.
        assert_eq!(buf.get(1, 2), Some(5));
        assert_eq!(buf.get(2, 1), Some(5));
        assert_eq!(buf.get(2, 2), Some(CLEAR_COLOR));
        assert_eq!(buf.get(1, 1), Some(CLEAR_COLOR));
        assert_eq!(buf.count(5), 2);
    }

    #[test]
    fn draw_sprite_clips_negative_origin() {
        let mut buf = PixelBuffer::new(4, 4);
        buf.draw_sprite(&DIAG, -1, 0, 5);
        // The top-left cell falls off the left edge; only (0, 0) survives.
        assert_eq!(buf.get(0, 0), Some(5));
        assert_eq!(buf.count(5), 1);
    }

    #[test]
    fn draw_sprite_fully_outside_is_noop() {
        let mut buf = PixelBuffer::new(4, 4);
        buf.draw_sprite(&DOT, 4, 0, 5);
        buf.draw_sprite(&DOT, 0, 4, 5);
        buf.draw_sprite(&DOT, -1, 0, 5);
        buf.draw_sprite(&DOT, i32::MIN, i32::MAX, 5);
        assert_eq!(buf.count(5), 0);
    }

    #[test]
    fn color_round_trips_channels() {
        let c = rgb_to_u32(10, 20, 30);
        assert_eq!(c & 0xFF, 255);
        assert_eq!(u32_to_rgb(c), (10, 20, 30));
    }
}
