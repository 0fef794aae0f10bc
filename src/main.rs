//! Kipp Flap entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use kipp_flap::persistence::LocalStorageStore;
    use kipp_flap::sim::{AvatarVisual, Session, SessionStatus, Snapshot, TickInput, tick};
    use kipp_flap::{GameConfig, Rect, Settings};

    /// Fallback fill colors, one per obstacle style
    const STYLE_COLORS: [&str; 3] = ["#e74c3c", "#c0392b", "#d35400"];

    /// Game instance holding all state
    struct Game {
        session: Session,
        settings: Settings,
        input: TickInput,
        ctx: CanvasRenderingContext2d,
        last_status: SessionStatus,
    }

    impl Game {
        /// Space/tap: start, flap or restart depending on where the run is
        fn queue_primary(&mut self) {
            match self.session.status() {
                SessionStatus::NotStarted => self.input.start = true,
                SessionStatus::Running => self.input.flap = true,
                SessionStatus::Ended => self.input.restart = true,
            }
        }

        /// Start button: start the first run, restart any later one
        fn queue_start_button(&mut self) {
            if self.session.status() == SessionStatus::NotStarted {
                self.input.start = true;
            } else {
                self.input.restart = true;
            }
        }

        fn cycle_profile(&mut self) {
            let profile = self.settings.cycle_profile();
            self.session.set_profile(profile);
            self.settings.save();
        }

        fn update(&mut self, now: f64) {
            let result = tick(&mut self.session, &self.input, now);
            self.input.clear_one_shots();
            if result.score_delta > 0 {
                log::debug!("Score {}", self.session.score());
            }
        }

        fn render(&self, now: f64) {
            let snapshot = self.session.snapshot(now);
            draw(&self.ctx, &snapshot, &self.settings);
        }

        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&self.session.score().to_string()));
            }
            if let Some(el) = document.get_element_by_id("best-score") {
                el.set_text_content(Some(&self.session.best_score().to_string()));
            }

            let status = self.session.status();
            if status != self.last_status {
                if self.last_status == SessionStatus::NotStarted {
                    if let Some(btn) = document.get_element_by_id("start-button") {
                        btn.set_text_content(Some("Restart Game"));
                    }
                }
                self.last_status = status;
            }
        }
    }

    fn fill_rect(ctx: &CanvasRenderingContext2d, rect: &Rect) {
        ctx.fill_rect(
            rect.min.x as f64,
            rect.min.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    /// Fallback shapes: sky, colored obstacle bars, a circle for Kipp
    fn draw(ctx: &CanvasRenderingContext2d, snapshot: &Snapshot, settings: &Settings) {
        let w = snapshot.bounds_width as f64;
        let h = snapshot.bounds_height as f64;

        ctx.set_fill_style_str("#87CEEB");
        ctx.fill_rect(0.0, 0.0, w, h);

        for obstacle in &snapshot.obstacles {
            let color = STYLE_COLORS[obstacle.style_index as usize % STYLE_COLORS.len()];
            ctx.set_fill_style_str(color);
            fill_rect(ctx, &obstacle.top);
            fill_rect(ctx, &obstacle.bottom);
        }

        let ended = snapshot.status == SessionStatus::Ended;
        let visual = match snapshot.avatar.visual {
            AvatarVisual::Flapping if !settings.effective_flap_sprite() => {
                if ended {
                    AvatarVisual::Hit
                } else {
                    AvatarVisual::Normal
                }
            }
            v => v,
        };
        ctx.set_fill_style_str(match visual {
            AvatarVisual::Normal => "#3498db",
            AvatarVisual::Flapping => "#5dade2",
            AvatarVisual::Hit => "#7f8c8d",
        });
        let rect = &snapshot.avatar.rect;
        let center = rect.center();
        ctx.begin_path();
        let _ = ctx.arc(
            center.x as f64,
            center.y as f64,
            (rect.size.x / 2.0) as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();

        if ended {
            ctx.set_fill_style_str("rgba(0, 0, 0, 0.5)");
            ctx.fill_rect(0.0, 0.0, w, h);

            ctx.set_fill_style_str("white");
            ctx.set_text_align("center");
            ctx.set_font("bold 36px Arial");
            let _ = ctx.fill_text("GAME OVER", w / 2.0, h / 2.0 - 40.0);
            ctx.set_font("24px Arial");
            let _ = ctx.fill_text(&format!("Score: {}", snapshot.score), w / 2.0, h / 2.0 + 10.0);
            ctx.set_font("18px Arial");
            let _ = ctx.fill_text("Press SPACE to restart", w / 2.0, h / 2.0 + 50.0);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Kipp Flap starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let config = GameConfig::default();
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(config.bounds_width as u32);
        canvas.set_height(config.bounds_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let session = Session::seeded(config, settings.profile, seed, Box::new(LocalStorageStore));
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            session,
            settings,
            input: TickInput::default(),
            ctx,
            last_status: SessionStatus::NotStarted,
        }));
        game.borrow_mut().update_hud();

        setup_input_handlers(&canvas, game.clone());
        setup_start_button(game.clone());

        request_animation_frame(game);

        log::info!("Kipp Flap running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Touch: same as space
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().queue_primary();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "Space" => {
                        event.prevent_default();
                        g.queue_primary();
                    }
                    "KeyP" => {
                        g.cycle_profile();
                        log::info!("Physics profile: {}", g.settings.profile.as_str());
                    }
                    "KeyI" => {
                        g.input.idle_mode = !g.input.idle_mode;
                        log::info!("Idle mode: {}", g.input.idle_mode);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_start_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("start-button") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().queue_start_button();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render(time);
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Headless demo: the autopilot plays for a fixed number of 60 Hz frames
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use kipp_flap::consts::FRAME_MS;
    use kipp_flap::sim::{ProfileName, Session, SessionStatus, TickInput, tick};
    use kipp_flap::{GameConfig, MemoryStore};

    env_logger::init();
    log::info!("Kipp Flap (native) starting...");

    // Usage: kipp-flap [profile] [seed] [frames]
    let mut args = std::env::args().skip(1);
    let profile = match args.next() {
        Some(name) => ProfileName::from_str(&name).unwrap_or_else(|| {
            log::warn!("Unknown profile '{}', using classic", name);
            ProfileName::Classic
        }),
        None => ProfileName::default(),
    };
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random);
    let frames: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60 * 60);

    let mut session = Session::seeded(
        GameConfig::default(),
        profile,
        seed,
        Box::new(MemoryStore::default()),
    );
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut now = 0.0;
    let mut runs = 0;
    for _ in 0..frames {
        now += FRAME_MS;
        let result = tick(&mut session, &input, now);
        if result.status == SessionStatus::Ended {
            runs += 1;
            log::info!("Run {} ended with score {}", runs, session.score());
        }
    }

    println!(
        "profile {} seed {}: {} frames, {} runs ended, best {}, current {}",
        profile.as_str(),
        seed,
        frames,
        runs,
        session.best_score(),
        session.score()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
