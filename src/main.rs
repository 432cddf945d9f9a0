//! Duel Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use duel_pong::input::{handle_key_down, handle_key_up};
    use duel_pong::renderer::{Color, DrawCmd};
    use duel_pong::{GameState, InputTracker, run_frame};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputTracker,
        ctx: CanvasRenderingContext2d,
    }

    impl Game {
        fn new(ctx: CanvasRenderingContext2d, width: f32, height: f32) -> Self {
            Self {
                state: GameState::new(width, height),
                input: InputTracker::default(),
                ctx,
            }
        }

        /// Run one frame and paint the resulting command list
        fn frame(&mut self) {
            let cmds = run_frame(&mut self.state, &self.input);
            for cmd in &cmds {
                self.execute(cmd);
            }
        }

        /// Execute a single draw command against the 2D context
        fn execute(&self, cmd: &DrawCmd) {
            match cmd {
                DrawCmd::Rect { x, y, w, h, color } => {
                    self.ctx.set_fill_style_str(&css_color(*color));
                    self.ctx.fill_rect(*x as f64, *y as f64, *w as f64, *h as f64);
                }
                DrawCmd::Circle { x, y, r, color } => {
                    self.ctx.set_fill_style_str(&css_color(*color));
                    self.ctx.begin_path();
                    let _ = self.ctx.arc(
                        *x as f64,
                        *y as f64,
                        *r as f64,
                        0.0,
                        std::f64::consts::TAU,
                    );
                    self.ctx.close_path();
                    self.ctx.fill();
                }
                DrawCmd::Text {
                    text,
                    x,
                    y,
                    color,
                    size,
                } => {
                    self.ctx.set_fill_style_str(&css_color(*color));
                    self.ctx.set_font(&format!("{size}px Arial"));
                    let _ = self.ctx.fill_text(text, *x as f64, *y as f64);
                }
            }
        }
    }

    fn css_color(color: Color) -> String {
        let [r, g, b, a] = color;
        format!(
            "rgba({}, {}, {}, {})",
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            a
        )
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Duel Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Surface dimensions are queried once; the state keeps them for the
        // life of the process.
        let width = canvas.width() as f32;
        let height = canvas.height() as f32;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("2d context unavailable")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let game = Rc::new(RefCell::new(Game::new(ctx, width, height)));
        log::info!("surface {width}x{height}, waiting for difficulty selection");

        setup_input_handlers(game.clone());
        request_animation_frame(game);

        log::info!("Duel Pong running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down: movement keys plus mode transitions
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                let Game { state, input, .. } = &mut *g;
                handle_key_down(state, input, &event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up: movement keys only
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                handle_key_up(&mut game.borrow_mut().input, &event.key());
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        // Reschedule unconditionally; the loop runs for the process life
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use duel_pong::input::handle_key_down;
    use duel_pong::{GameState, InputTracker, Mode, run_frame};

    env_logger::init();
    log::info!("Duel Pong (native) starting...");
    log::info!("Native mode is a headless demo - run the wasm build for the playable version");

    // Headless demo: medium difficulty, AI versus an idle player, first
    // side to the win score ends the run.
    let mut state = GameState::new(800.0, 400.0);
    let mut input = InputTracker::default();
    handle_key_down(&mut state, &mut input, "2");

    // Cap the run in case the rally never resolves
    let max_frames = 60 * 60 * 10;
    let mut frames = 0u64;
    while state.mode == Mode::Playing && frames < max_frames {
        run_frame(&mut state, &input);
        frames += 1;
    }

    println!(
        "demo finished after {} frames: Player {} - AI {}",
        frames, state.player.score, state.ai.score
    );
}
