//! Duel Pong - a classic two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, collisions, scoring)
//! - `renderer`: Mode-selected screen composition as draw commands
//! - `input`: Key-state tracking and mode-machine key routing
//!
//! The platform layer (`main.rs`) owns the drawing surface and the frame
//! callback; everything in the library is pure state-in, commands-out.

pub mod input;
pub mod renderer;
pub mod sim;

pub use input::InputTracker;
pub use renderer::DrawCmd;
pub use sim::{GameState, Mode};

/// Game configuration constants
pub mod consts {
    /// Paddle dimensions (pixels)
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    /// Ball radius
    pub const BALL_RADIUS: f32 = 8.0;
    /// Initial ball velocity, both axes
    pub const BALL_START_VEL: f32 = 4.0;

    /// Player paddle movement per frame
    pub const PLAYER_SPEED: f32 = 5.0;
    /// AI paddle movement per frame before a difficulty is chosen
    pub const DEFAULT_AI_SPEED: f32 = 3.0;

    /// First score to reach this wins
    pub const WIN_SCORE: u32 = 10;
}

/// Run one frame: advance the simulation when playing, then compose the
/// current screen. The platform layer executes the returned commands and
/// reschedules itself unconditionally.
pub fn run_frame(state: &mut GameState, input: &InputTracker) -> Vec<DrawCmd> {
    if state.mode == Mode::Playing {
        sim::step(state, input);
    }
    renderer::frame(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::handle_key_down;

    #[test]
    fn test_run_frame_static_screens_do_not_advance() {
        let mut state = GameState::new(800.0, 400.0);
        let input = InputTracker::default();

        let before = state.ball.pos;
        run_frame(&mut state, &input);
        assert_eq!(state.mode, Mode::Start);
        assert_eq!(state.ball.pos, before);
    }

    #[test]
    fn test_run_frame_advances_when_playing() {
        let mut state = GameState::new(800.0, 400.0);
        let mut input = InputTracker::default();
        handle_key_down(&mut state, &mut input, "2");
        assert_eq!(state.mode, Mode::Playing);

        run_frame(&mut state, &input);
        assert_eq!(state.ball.pos, glam::Vec2::new(404.0, 204.0));
    }

    #[test]
    fn test_run_frame_freezes_after_game_over() {
        let mut state = GameState::new(800.0, 400.0);
        let mut input = InputTracker::default();
        handle_key_down(&mut state, &mut input, "1");
        state.ai.score = crate::consts::WIN_SCORE;
        state.mode = Mode::GameOver;

        let cmds = run_frame(&mut state, &input);
        assert_eq!(state.ai.score, crate::consts::WIN_SCORE);
        assert_eq!(state.player.score, 0);
        assert!(cmds.iter().any(|c| matches!(
            c,
            DrawCmd::Text { text, .. } if text == "AI Wins!"
        )));
    }
}
