//! Game state and core simulation types

use glam::Vec2;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Start screen, waiting for difficulty selection
    Start,
    /// Active gameplay
    Playing,
    /// A side reached the win score
    GameOver,
}

/// Which side a paddle (or the round winner) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Ai,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Ai => "AI",
        }
    }
}

/// AI difficulty, selected once per session on the start screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// AI paddle movement per frame for this difficulty
    pub fn ai_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 2.0,
            Difficulty::Medium => 4.0,
            Difficulty::Hard => 6.0,
        }
    }

    /// Map a difficulty-selection key ('1'/'2'/'3') to a difficulty
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "1" => Some(Difficulty::Easy),
            "2" => Some(Difficulty::Medium),
            "3" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// A paddle: fixed x, vertical movement only
#[derive(Debug, Clone)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub score: u32,
}

impl Paddle {
    fn new(x: f32, surface_height: f32) -> Self {
        Self {
            x,
            y: surface_height / 2.0 - PADDLE_HEIGHT / 2.0,
            score: 0,
        }
    }

    /// Vertical center, used by the AI tracking logic
    pub fn center_y(&self) -> f32 {
        self.y + PADDLE_HEIGHT / 2.0
    }
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    fn new(surface_width: f32, surface_height: f32) -> Self {
        Self {
            pos: Vec2::new(surface_width / 2.0, surface_height / 2.0),
            vel: Vec2::splat(BALL_START_VEL),
            radius: BALL_RADIUS,
        }
    }
}

/// Complete game state, created once at startup and mutated in place
#[derive(Debug, Clone)]
pub struct GameState {
    /// Surface dimensions, queried once at startup
    pub width: f32,
    pub height: f32,
    /// Left paddle (human)
    pub player: Paddle,
    /// Right paddle (computer)
    pub ai: Paddle,
    pub ball: Ball,
    pub mode: Mode,
    /// AI paddle movement per frame, fixed until the next restart
    pub ai_speed: f32,
}

impl GameState {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            player: Paddle::new(0.0, height),
            ai: Paddle::new(width - PADDLE_WIDTH, height),
            ball: Ball::new(width, height),
            mode: Mode::Start,
            ai_speed: DEFAULT_AI_SPEED,
        }
    }

    /// Recenter the ball and flip its horizontal direction (vertical kept)
    pub fn reset_ball(&mut self) {
        self.ball.pos = Vec2::new(self.width / 2.0, self.height / 2.0);
        self.ball.vel.x = -self.ball.vel.x;
    }

    /// Start screen only: set AI speed and begin play
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        if self.mode != Mode::Start {
            return;
        }
        self.ai_speed = difficulty.ai_speed();
        self.mode = Mode::Playing;
        log::info!("difficulty selected: {:?} (ai speed {})", difficulty, self.ai_speed);
    }

    /// Game-over screen only: zero the scores, recenter the ball, resume play
    pub fn restart(&mut self) {
        if self.mode != Mode::GameOver {
            return;
        }
        self.player.score = 0;
        self.ai.score = 0;
        self.reset_ball();
        self.mode = Mode::Playing;
        log::info!("game restarted");
    }

    /// Which side reached the win score, if any
    pub fn winner(&self) -> Option<Side> {
        if self.player.score >= WIN_SCORE {
            Some(Side::Player)
        } else if self.ai.score >= WIN_SCORE {
            Some(Side::Ai)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(800.0, 400.0);
        assert_eq!(state.mode, Mode::Start);
        assert_eq!(state.player.score, 0);
        assert_eq!(state.ai.score, 0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(state.ball.vel, Vec2::new(4.0, 4.0));
        assert_eq!(state.player.x, 0.0);
        assert_eq!(state.ai.x, 800.0 - PADDLE_WIDTH);
        // Both paddles vertically centered
        assert_eq!(state.player.y, 150.0);
        assert_eq!(state.ai.y, 150.0);
        assert_eq!(state.ai_speed, DEFAULT_AI_SPEED);
    }

    #[test]
    fn test_reset_ball_flips_horizontal_only() {
        let mut state = GameState::new(800.0, 400.0);
        state.ball.pos = Vec2::new(-1.0, 37.0);
        state.ball.vel = Vec2::new(-4.0, 4.0);

        state.reset_ball();
        assert_eq!(state.ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(state.ball.vel, Vec2::new(4.0, 4.0));
    }

    #[test]
    fn test_select_difficulty_gated_to_start() {
        let mut state = GameState::new(800.0, 400.0);
        state.select_difficulty(Difficulty::Hard);
        assert_eq!(state.mode, Mode::Playing);
        assert_eq!(state.ai_speed, 6.0);

        // No effect mid-game
        state.select_difficulty(Difficulty::Easy);
        assert_eq!(state.ai_speed, 6.0);

        // No effect on the game-over screen
        state.mode = Mode::GameOver;
        state.select_difficulty(Difficulty::Easy);
        assert_eq!(state.ai_speed, 6.0);
        assert_eq!(state.mode, Mode::GameOver);
    }

    #[test]
    fn test_restart_gated_to_game_over() {
        let mut state = GameState::new(800.0, 400.0);
        state.player.score = 3;
        state.restart();
        // Start screen: no-op
        assert_eq!(state.mode, Mode::Start);
        assert_eq!(state.player.score, 3);

        state.mode = Mode::GameOver;
        state.ai.score = 10;
        state.ball.vel = Vec2::new(-4.0, -4.0);
        state.restart();
        assert_eq!(state.mode, Mode::Playing);
        assert_eq!(state.player.score, 0);
        assert_eq!(state.ai.score, 0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(state.ball.vel, Vec2::new(4.0, -4.0));
    }

    #[test]
    fn test_winner() {
        let mut state = GameState::new(800.0, 400.0);
        assert_eq!(state.winner(), None);
        state.player.score = 10;
        assert_eq!(state.winner(), Some(Side::Player));
        state.player.score = 0;
        state.ai.score = 11;
        assert_eq!(state.winner(), Some(Side::Ai));
    }
}
