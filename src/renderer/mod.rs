//! Rendering module
//!
//! Produces draw-command lists; the platform layer executes them against
//! its drawing surface.

pub mod commands;
pub mod screens;

pub use commands::{BLACK, Color, DrawCmd, WHITE};
pub use screens::frame;
