//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Playfield Dimensions
//!
//! The playfield is the arcade's rotated 224x256 screen:
//!
//! - **Width**: 224 pixels (x grows to the right)
//! - **Height**: 256 pixels (y grows *upward*, row 0 is the bottom of the screen)
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default frame interval (~60 FPS) |
//! | `ALIEN_ROWS` x `ALIEN_COLS` | 5 x 11 | Formation size |
//! | `MAX_BULLETS` | 128 | Bullet pool capacity |
//! | `DEATH_FADE_TICKS` | 10 | Ticks a dead alien keeps its death pose |
//! | `ALIEN_FRAME_TICKS` | 10 | Ticks per alien animation frame |
//! | `PLAYER_SPEED` | 2 | Pixels per tick while a direction is held |
//! | `BULLET_SPEED` | 2 | Pixels per tick, upward |
//!
//! # Formation Layout
//!
//! Alien `(row i, column j)` sits at `x = 16j + 20`, `y = 17i + 128`.
//! Rows 0-1 are [`AlienKind::C`], rows 2-3 [`AlienKind::B`], row 4 [`AlienKind::A`].
//!
//! # Examples
//!
//! ```
//! use tui_invaders_types::{AlienKind, GameAction, InputState, ALIEN_COUNT};
//!
//! assert_eq!(ALIEN_COUNT, 55);
//! assert_eq!(AlienKind::for_row(0), AlienKind::C);
//! assert_eq!(AlienKind::for_row(4), AlienKind::A);
//!
//! let mut input = InputState::default();
//! input.press(GameAction::MoveLeft);
//! input.press(GameAction::MoveRight);
//! assert_eq!(input.direction(), 0);
//! input.release(GameAction::MoveLeft);
//! assert_eq!(input.direction(), 1);
//! ```

/// Playfield / pixel buffer width in pixels (224)
pub const BUFFER_WIDTH: usize = 224;

/// Playfield / pixel buffer height in pixels (256)
pub const BUFFER_HEIGHT: usize = 256;

/// Default frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Rows in the alien formation
pub const ALIEN_ROWS: usize = 5;

/// Columns in the alien formation
pub const ALIEN_COLS: usize = 11;

/// Total number of aliens (5 x 11)
pub const ALIEN_COUNT: usize = ALIEN_ROWS * ALIEN_COLS;

/// Horizontal distance between formation columns
pub const ALIEN_SPACING_X: i32 = 16;

/// Vertical distance between formation rows
pub const ALIEN_SPACING_Y: i32 = 17;

/// Formation origin (column 0, row 0)
pub const FORMATION_X: i32 = 20;
pub const FORMATION_Y: i32 = 128;

/// Maximum number of simultaneously active bullets
pub const MAX_BULLETS: usize = 128;

/// Ticks a dead alien keeps showing its death stencil
pub const DEATH_FADE_TICKS: u8 = 10;

/// Ticks each alien animation frame stays on screen
pub const ALIEN_FRAME_TICKS: u32 = 10;

/// Player speed in pixels per tick
pub const PLAYER_SPEED: i32 = 2;

/// Bullet vertical step in pixels per tick (positive = upward)
pub const BULLET_SPEED: i32 = 2;

/// Player spawn position (horizontally centred for an 11px sprite)
pub const PLAYER_START_X: i32 = 112 - 5;
pub const PLAYER_START_Y: i32 = 32;

/// Lives the player starts with
pub const PLAYER_LIVES: u32 = 3;


/// Alien classification
///
/// - **Dead**: Hit by a bullet; shows the death stencil while its fade counter runs
/// - **A**: Top row, smallest stencil (8px), 30 points
/// - **B**: Middle rows (11px), 20 points
/// - **C**: Bottom rows, widest stencil (12px), 10 points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlienKind {
    Dead,
    A,
    B,
    C,
}

impl AlienKind {
    /// Tier for a formation row (row 0 is the lowest).
    pub fn for_row(row: usize) -> Self {
        match (ALIEN_ROWS - row.min(ALIEN_ROWS - 1)) / 2 + 1 {
            1 => AlienKind::A,
            2 => AlienKind::B,
            _ => AlienKind::C,
        }
    }

    /// Index into per-tier tables (`A` = 0, `B` = 1, `C` = 2).
    ///
    /// Returns `None` for [`AlienKind::Dead`].
    pub fn tier_index(&self) -> Option<usize> {
        match self {
            AlienKind::Dead => None,
            AlienKind::A => Some(0),
            AlienKind::B => Some(1),
            AlienKind::C => Some(2),
        }
    }

    /// Points awarded for destroying an alien of this kind
    pub fn score(&self) -> u32 {
        match self {
            AlienKind::Dead => 0,
            AlienKind::A => 30,
            AlienKind::B => 20,
            AlienKind::C => 10,
        }
    }

    pub fn is_alive(&self) -> bool {
        !matches!(self, AlienKind::Dead)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlienKind::Dead => "dead",
            AlienKind::A => "a",
            AlienKind::B => "b",
            AlienKind::C => "c",
        }
    }
}

/// Player intents produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move the cannon left while held
    MoveLeft,
    /// Move the cannon right while held
    MoveRight,
    /// Fire one bullet per press
    Fire,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// ```
    /// use tui_invaders_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("FIRE"), Some(GameAction::Fire));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "fire" => Some(GameAction::Fire),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Fire => "fire",
        }
    }
}

/// Normalised input snapshot read by the core once per tick.
///
/// `move_dir` is a signed accumulator: each held direction contributes ±1, so
/// holding both nets to zero and releasing one restores the other.
/// `fire_requested` is edge-triggered and must be consumed after each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    pub move_dir: i8,
    pub fire_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_dir = self.move_dir.saturating_sub(1),
            GameAction::MoveRight => self.move_dir = self.move_dir.saturating_add(1),
            GameAction::Fire => self.fire_requested = true,
        }
    }

    pub fn release(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_dir = self.move_dir.saturating_add(1),
            GameAction::MoveRight => self.move_dir = self.move_dir.saturating_sub(1),
            GameAction::Fire => {}
        }
    }

    /// Net horizontal intent in `-1..=1`.
    pub fn direction(&self) -> i32 {
        (self.move_dir as i32).clamp(-1, 1)
    }

    /// Take the pending fire request, leaving it cleared.
    pub fn consume_fire(&mut self) -> bool {
        std::mem::take(&mut self.fire_requested)
    }
}

/// Summary of what a single `GameState::update` did.
///
/// Emitted by the core so the frame driver can log or react without the core
/// depending on any I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoreTickEvent {
    /// A bullet was spawned this tick
    pub fired: bool,
    /// A fire request was dropped because the bullet pool was full
    pub fire_dropped: bool,
    /// Bullets that left the playfield this tick
    pub bullets_retired: u32,
    /// Aliens destroyed this tick
    pub aliens_hit: u32,
    /// Score gained this tick
    pub score_gained: u32,
}

impl CoreTickEvent {
    pub fn is_quiet(&self) -> bool {
        *self == Self::default()
    }
}
