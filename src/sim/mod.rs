//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One step per frame, fixed per-frame constants
//! - No rendering or platform dependencies
//! - Input is read-only from the step's perspective

pub mod state;
pub mod step;

pub use state::{Ball, Difficulty, GameState, Mode, Paddle, Side};
pub use step::step;
