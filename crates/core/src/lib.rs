//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the software rasteriser and the game rules. It has
//! **zero dependencies** on terminals, windows, or I/O, making it:
//!
//! - **Deterministic**: The same input sequence always produces the same frames
//! - **Testable**: Every rule is reachable from a plain function call
//! - **Portable**: The pixel buffer can be presented by any backend
//! - **Allocation-free per tick**: Bullets live in a fixed-capacity pool
//!
//! # Module Structure
//!
//! - [`buffer`]: 224x256 packed-RGBA pixel buffer, colour packing, sprite blitting
//! - [`sprite`]: Monochrome stencils and tick-driven stencil animations
//! - [`sprites`]: Stencil tables for aliens, the player, and bullets
//! - [`game_state`]: Formation, player, bullet pool, and the per-tick state machine
//!
//! # Example
//!
//! ```
//! use tui_invaders_core::{GameState, PixelBuffer};
//! use tui_invaders_core::types::{GameAction, InputState};
//!
//! let mut game = GameState::new();
//! let mut buffer = PixelBuffer::default();
//! let mut input = InputState::default();
//!
//! input.press(GameAction::Fire);
//! game.tick(&mut input, &mut buffer);
//!
//! assert_eq!(game.bullets().len(), 1);
//! assert!(!input.fire_requested); // consumed by the tick
//! ```
//!
//! # Timing
//!
//! The core has no clock. One call to [`GameState::tick`] is one frame; the frame
//! driver decides how often to call it (16ms by default).

pub mod buffer;
pub mod game_state;
pub mod sprite;
pub mod sprites;

pub use tui_invaders_types as types;

// Re-export commonly used types for convenience
pub use buffer::{
    rgb_to_u32, u32_to_rgb, PixelBuffer, ALIEN_COLOR, BULLET_COLOR, CLEAR_COLOR, PLAYER_COLOR,
};
pub use game_state::{Alien, Bullet, GameState, Player};
pub use sprite::{Sprite, SpriteAnimation};
pub use sprites::{ALIEN_DEATH_SPRITE, BULLET_SPRITE, PLAYER_SPRITE};
