//! Held-key tracking for terminal environments.
//!
//! Turns press / repeat / release events into the [`InputState`] the core reads
//! each tick. Supports terminals that do not emit key release events by
//! auto-releasing a direction once no press or repeat has refreshed it for a
//! timeout.

use crossterm::event::KeyCode;

use arrayvec::ArrayVec;

use crate::map::action_for_key;
use crate::types::{GameAction, InputState};

// OS key repeat runs at >= 15 Hz, so a held key is refreshed well within this window.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

#[derive(Debug, Clone, Copy, Default)]
struct KeyHold {
    held: bool,
    idle_ms: u32,
}

/// Tracks held directions and pending fire requests.
#[derive(Debug, Clone)]
pub struct InputHandler {
    state: InputState,
    left: KeyHold,
    right: KeyHold,
    key_release_timeout_ms: Option<u32>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            state: InputState::default(),
            left: KeyHold::default(),
            right: KeyHold::default(),
            key_release_timeout_ms: Some(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    /// Set the auto-release timeout; `None` waits for real release events.
    pub fn with_key_release_timeout_ms(mut self, timeout_ms: Option<u32>) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> Option<u32> {
        self.key_release_timeout_ms
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Mutable access for the frame driver (the tick consumes fire requests).
    pub fn state_mut(&mut self) -> &mut InputState {
        &mut self.state
    }

    fn hold_mut(&mut self, action: GameAction) -> Option<&mut KeyHold> {
        match action {
            GameAction::MoveLeft => Some(&mut self.left),
            GameAction::MoveRight => Some(&mut self.right),
            GameAction::Fire => None,
        }
    }

    /// Handle a key press. Returns the action if it changed the input state.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let action = action_for_key(code)?;
        match self.hold_mut(action) {
            Some(hold) => {
                hold.idle_ms = 0;
                if hold.held {
                    // Terminals without repeat events report repeats as presses.
                    return None;
                }
                hold.held = true;
                self.state.press(action);
                Some(action)
            }
            None => {
                self.state.press(action);
                Some(action)
            }
        }
    }

    /// Handle an auto-repeat event: keeps a direction alive, never re-fires.
    pub fn handle_key_repeat(&mut self, code: KeyCode) {
        if let Some(action) = action_for_key(code) {
            if let Some(hold) = self.hold_mut(action) {
                hold.idle_ms = 0;
            }
        }
    }

    /// Handle a key release. Returns the action if a held direction was released.
    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<GameAction> {
        let action = action_for_key(code)?;
        self.release(action).then_some(action)
    }

    fn release(&mut self, action: GameAction) -> bool {
        let Some(hold) = self.hold_mut(action) else {
            return false;
        };
        if !hold.held {
            return false;
        }
        *hold = KeyHold::default();
        self.state.release(action);
        true
    }

    /// Advance idle timers and auto-release directions that went quiet.
    ///
    /// Returns the actions that were released.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 2> {
        let mut released = ArrayVec::<GameAction, 2>::new();
        let Some(timeout) = self.key_release_timeout_ms else {
            return released;
        };

        for action in [GameAction::MoveLeft, GameAction::MoveRight] {
            let expired = match self.hold_mut(action) {
                Some(hold) if hold.held => {
                    hold.idle_ms = hold.idle_ms.saturating_add(elapsed_ms);
                    hold.idle_ms > timeout
                }
                _ => false,
            };
            if expired && self.release(action) {
                released.push(action);
            }
        }

        released
    }

    /// Drop every held key and any pending fire request.
    pub fn reset(&mut self) {
        self.left = KeyHold::default();
        self.right = KeyHold::default();
        self.state = InputState::default();
    }
}
