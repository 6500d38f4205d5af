//! Terminal presentation for the pixel buffer.
//!
//! There is no window or GPU here. Each terminal cell shows two stacked pixel
//! blocks using an upper half block glyph, and frames are flushed through a
//! diffing renderer so only changed cells hit the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_invaders_core as core;
pub use tui_invaders_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, HALF_BLOCK};
pub use game_view::{AnchorY, GameView, HudView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
