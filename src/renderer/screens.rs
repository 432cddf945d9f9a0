//! Mode-selected screen composition
//!
//! Pure functions from game state to a draw-command list. Every screen is a
//! full repaint beginning with a black clear of the whole surface.

use crate::consts::{PADDLE_HEIGHT, PADDLE_WIDTH};
use crate::sim::{GameState, Mode};

use super::commands::{BLACK, DrawCmd, WHITE};

/// Default font size for in-game text
const TEXT_SIZE: f32 = 30.0;
/// Headline size for the title and the winner banner
const TITLE_SIZE: f32 = 40.0;

/// Compose the current frame for the active mode
pub fn frame(state: &GameState) -> Vec<DrawCmd> {
    match state.mode {
        Mode::Start => start_screen(state),
        Mode::Playing => playing_screen(state),
        Mode::GameOver => game_over_screen(state),
    }
}

fn clear(state: &GameState) -> DrawCmd {
    DrawCmd::rect(0.0, 0.0, state.width, state.height, BLACK)
}

fn start_screen(state: &GameState) -> Vec<DrawCmd> {
    let (cx, cy) = (state.width / 2.0, state.height / 2.0);
    vec![
        clear(state),
        DrawCmd::text("PONG GAME", cx - 100.0, cy - 50.0, WHITE, TITLE_SIZE),
        DrawCmd::text("Choose Difficulty:", cx - 140.0, cy, WHITE, TEXT_SIZE),
        DrawCmd::text("1. Easy", cx - 60.0, cy + 40.0, WHITE, TEXT_SIZE),
        DrawCmd::text("2. Medium", cx - 80.0, cy + 80.0, WHITE, TEXT_SIZE),
        DrawCmd::text("3. Hard", cx - 60.0, cy + 120.0, WHITE, TEXT_SIZE),
    ]
}

fn playing_screen(state: &GameState) -> Vec<DrawCmd> {
    vec![
        clear(state),
        DrawCmd::rect(
            state.player.x,
            state.player.y,
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
            WHITE,
        ),
        DrawCmd::rect(state.ai.x, state.ai.y, PADDLE_WIDTH, PADDLE_HEIGHT, WHITE),
        DrawCmd::circle(state.ball.pos.x, state.ball.pos.y, state.ball.radius, WHITE),
        DrawCmd::text(
            state.player.score.to_string(),
            state.width / 4.0,
            50.0,
            WHITE,
            TEXT_SIZE,
        ),
        DrawCmd::text(
            state.ai.score.to_string(),
            3.0 * state.width / 4.0,
            50.0,
            WHITE,
            TEXT_SIZE,
        ),
    ]
}

fn game_over_screen(state: &GameState) -> Vec<DrawCmd> {
    let (cx, cy) = (state.width / 2.0, state.height / 2.0);
    let winner = state.winner().map_or("AI", |side| side.label());
    vec![
        clear(state),
        DrawCmd::text(
            format!("{winner} Wins!"),
            cx - 100.0,
            cy - 50.0,
            WHITE,
            TITLE_SIZE,
        ),
        DrawCmd::text("Press Enter to Restart", cx - 150.0, cy, WHITE, TEXT_SIZE),
    ]
}
