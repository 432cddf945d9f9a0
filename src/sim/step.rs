//! Per-frame simulation step
//!
//! Advances the game by exactly one frame. Order matters and mirrors the
//! round contract: ball translation, wall bounce, paddle bounce, scoring,
//! win check, then paddle motion. The caller gates this on `Mode::Playing`.

use crate::consts::*;
use crate::input::InputTracker;

use super::state::{GameState, Mode};

/// Advance the game state by one frame
pub fn step(state: &mut GameState, input: &InputTracker) {
    // Move the ball
    state.ball.pos += state.ball.vel;

    // Top/bottom wall bounce. One-sided sign flip, no position clamp: a
    // fast ball can overlap the wall for a frame before turning around.
    if state.ball.pos.y < state.ball.radius
        || state.ball.pos.y > state.height - state.ball.radius
    {
        state.ball.vel.y = -state.ball.vel.y;
    }

    // Paddle bounce. Ball center y against the paddle's span, one combined
    // condition, one inversion. There is no travelling-toward-paddle guard,
    // so a ball lingering inside the overlap region re-inverts next frame.
    let ball = &state.ball;
    let hit_player = ball.pos.x - ball.radius < state.player.x + PADDLE_WIDTH
        && ball.pos.y > state.player.y
        && ball.pos.y < state.player.y + PADDLE_HEIGHT;
    let hit_ai = ball.pos.x + ball.radius > state.ai.x
        && ball.pos.y > state.ai.y
        && ball.pos.y < state.ai.y + PADDLE_HEIGHT;
    if hit_player || hit_ai {
        state.ball.vel.x = -state.ball.vel.x;
    }

    // Out of bounds: exactly one side scores per event
    if state.ball.pos.x < 0.0 {
        state.ai.score += 1;
        log::info!("AI scores ({} - {})", state.player.score, state.ai.score);
        state.reset_ball();
    } else if state.ball.pos.x > state.width {
        state.player.score += 1;
        log::info!("Player scores ({} - {})", state.player.score, state.ai.score);
        state.reset_ball();
    }

    // Win check. Paddle motion below still runs this frame.
    if let Some(winner) = state.winner() {
        if state.mode != Mode::GameOver {
            log::info!("game over, {} wins", winner.label());
        }
        state.mode = Mode::GameOver;
    }

    // Player paddle: two independent conditional moves (both keys may be
    // held, each applies its own bound check)
    if input.up && state.player.y > 0.0 {
        state.player.y -= PLAYER_SPEED;
    }
    if input.down && state.player.y < state.height - PADDLE_HEIGHT {
        state.player.y += PLAYER_SPEED;
    }

    // AI paddle tracks the ball's y from its own center. No bound clamp.
    if state.ai.center_y() < state.ball.pos.y {
        state.ai.y += state.ai_speed;
    } else if state.ai.center_y() > state.ball.pos.y {
        state.ai.y -= state.ai_speed;
    }
}
