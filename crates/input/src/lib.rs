//! Terminal input module (core-facing).
//!
//! This module is intentionally independent of any UI framework beyond the
//! `crossterm` event types. It maps key events into
//! [`GameAction`](crate::types::GameAction)s and keeps the
//! [`InputState`](crate::types::InputState) snapshot the core reads every tick,
//! including on terminals without key-release events.

pub mod handler;
pub mod map;

pub use tui_invaders_types as types;

pub use handler::{InputHandler, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
pub use map::{action_for_key, handle_key_event, should_quit};
