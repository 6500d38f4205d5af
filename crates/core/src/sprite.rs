//! Sprite module - monochrome stencils and tick-driven stencil animations
//!
//! Stencils are borrowed, immutable bitmaps: the game's own stencils live in
//! `'static` tables (see [`crate::sprites`]) and are shared by every entity that
//! draws them. A cell is "set" when its byte is non-zero.
//!
//! Data row 0 is the visual top of the stencil.

/// A small monochrome bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sprite<'a> {
    width: usize,
    height: usize,
    /// Row-major cells (j * width + i), non-zero = set
    data: &'a [u8],
}

impl<'a> Sprite<'a> {
    /// Build a stencil over `data`, which must hold exactly `width * height` cells.
    pub const fn new(width: usize, height: usize, data: &'a [u8]) -> Self {
        debug_assert!(data.len() == width * height, "stencil data length mismatch");
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Whether cell `(i, j)` is set. Cells outside the stencil are unset.
    #[inline(always)]
    pub fn is_set(&self, i: usize, j: usize) -> bool {
        if i >= self.width || j >= self.height {
            return false;
        }
        self.data.get(j * self.width + i).is_some_and(|&b| b != 0)
    }

    /// Number of set cells
    pub fn set_count(&self) -> usize {
        self.data.iter().filter(|&&b| b != 0).count()
    }
}

/// A cycling sequence of stencils advanced once per tick
///
/// While looping, the current frame is `(time / frame_duration) % frame_count`.
/// A one-shot animation becomes exhausted once `time` reaches
/// `frame_count * frame_duration` and stops yielding frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteAnimation<'a> {
    frames: &'a [Sprite<'a>],
    frame_duration: u32,
    looping: bool,
    time: u32,
    exhausted: bool,
}

impl<'a> SpriteAnimation<'a> {
    pub fn new(frames: &'a [Sprite<'a>], frame_duration: u32, looping: bool) -> Self {
        debug_assert!(!frames.is_empty(), "animation needs at least one frame");
        debug_assert!(frame_duration > 0, "animation frame duration must be non-zero");
        Self {
            frames,
            frame_duration: frame_duration.max(1),
            looping,
            time: 0,
            exhausted: frames.is_empty(),
        }
    }

    /// Looping animation helper
    pub fn looping(frames: &'a [Sprite<'a>], frame_duration: u32) -> Self {
        Self::new(frames, frame_duration, true)
    }

    /// One-shot animation helper
    pub fn once(frames: &'a [Sprite<'a>], frame_duration: u32) -> Self {
        Self::new(frames, frame_duration, false)
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        if self.exhausted {
            return;
        }
        self.time += 1;
        if self.time >= self.cycle_ticks() {
            if self.looping {
                self.time = 0;
            } else {
                self.exhausted = true;
            }
        }
    }

    /// Stencil to draw this tick, or `None` once a one-shot animation is exhausted.
    pub fn current_frame(&self) -> Option<&'a Sprite<'a>> {
        if self.exhausted {
            return None;
        }
        self.frames.get(self.frame_index())
    }

    pub fn frame_index(&self) -> usize {
        if self.frames.is_empty() {
            return 0;
        }
        (self.time / self.frame_duration) as usize % self.frames.len()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame_duration(&self) -> u32 {
        self.frame_duration
    }

    pub fn time(&self) -> u32 {
        self.time
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Rewind to frame 0 (also revives an exhausted one-shot).
    pub fn reset(&mut self) {
        self.time = 0;
        self.exhausted = self.frames.is_empty();
    }

    fn cycle_ticks(&self) -> u32 {
        self.frames.len() as u32 * self.frame_duration
    }
}
