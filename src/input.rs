//! Key-state tracking and key-event routing
//!
//! The tracker holds the latest pressed/released state of the two movement
//! keys; the simulation reads it, key events mutate it. Mode transitions
//! (difficulty selection, restart) are routed here too, since they hang off
//! the same key-down events.

use crate::sim::{Difficulty, GameState, Mode};

/// Movement key names as delivered by the key-event source
pub const KEY_UP: &str = "ArrowUp";
pub const KEY_DOWN: &str = "ArrowDown";
/// Restart key, active on the game-over screen
pub const KEY_RESTART: &str = "Enter";

/// Current pressed state of the two movement keys. Both flags are
/// independent; holding both is legal and each is applied on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputTracker {
    pub up: bool,
    pub down: bool,
}

impl InputTracker {
    /// Record the latest state of a tracked key; anything else is ignored
    pub fn set_key(&mut self, key: &str, pressed: bool) {
        match key {
            KEY_UP => self.up = pressed,
            KEY_DOWN => self.down = pressed,
            _ => {}
        }
    }

    /// Current state of a key; untracked keys read as released
    pub fn is_pressed(&self, key: &str) -> bool {
        match key {
            KEY_UP => self.up,
            KEY_DOWN => self.down,
            _ => false,
        }
    }
}

/// Handle a key-down event: record movement keys and apply whatever mode
/// transition the key triggers in the current mode. Unrecognized keys and
/// out-of-mode keys are silent no-ops.
pub fn handle_key_down(state: &mut GameState, input: &mut InputTracker, key: &str) {
    input.set_key(key, true);

    match state.mode {
        Mode::Start => {
            if let Some(difficulty) = Difficulty::from_key(key) {
                state.select_difficulty(difficulty);
            }
        }
        Mode::GameOver => {
            if key == KEY_RESTART {
                state.restart();
            }
        }
        Mode::Playing => {}
    }
}

/// Handle a key-up event: movement keys only
pub fn handle_key_up(input: &mut InputTracker, key: &str) {
    input.set_key(key, false);
}
