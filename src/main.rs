//! Brick Tap entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, TouchEvent};

    use brick_tap::Settings;
    use brick_tap::audio::{AudioManager, SoundEffect};
    use brick_tap::consts::*;
    use brick_tap::platform::{HostBridge, HostSession, TelegramHost, handshake};
    use brick_tap::renderer::RenderState;
    use brick_tap::sim::{GameEvent, GameState, PaddleCommand, apply_command, steer, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        audio: AudioManager,
        accumulator: f32,
        last_time: f64,
        /// Idle/demo mode - autopilot plays the game
        autopilot: bool,
        session: HostSession,
        /// Last HUD text written, to skip redundant DOM writes
        hud_text: String,
        hud_lost: Option<bool>,
    }

    impl Game {
        fn new(settings: &Settings, session: HostSession) -> Self {
            Self {
                state: GameState::new(),
                render_state: None,
                audio: AudioManager::new(settings),
                accumulator: 0.0,
                last_time: 0.0,
                autopilot: settings.autopilot,
                session,
                hud_text: String::new(),
                hud_lost: None,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(MAX_FRAME_DT);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                if self.autopilot {
                    if let Some(cmd) = steer(&self.state) {
                        apply_command(&mut self.state, cmd);
                    }
                }
                tick(&mut self.state);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }

            for event in self.state.drain_events() {
                log::debug!("{:?}", event);
                if let Some(effect) = SoundEffect::for_event(&event) {
                    self.audio.play(effect);
                }
                if let GameEvent::BallLost = event {
                    log::info!("Game over - press restart");
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.state) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let text = format!("Score: {} | Level: {}", self.state.score, self.state.level);
            if text != self.hud_text {
                if let Some(el) = document.get_element_by_id("hud-score") {
                    el.set_text_content(Some(&text));
                }
                self.hud_text = text;
            }

            let lost = self.state.is_lost();
            if self.hud_lost != Some(lost) {
                if let Some(el) = document.get_element_by_id("game-over") {
                    let _ = el.set_attribute("class", if lost { "" } else { "hidden" });
                }
                self.hud_lost = Some(lost);
            }
        }

        fn show_greeting(&self) {
            let Some(greeting) = self.session.greeting() else {
                return;
            };
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("hud-user"))
            {
                el.set_text_content(Some(&greeting));
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brick Tap starting...");

        let settings = Settings::load();

        // Host handshake - optional, the game plays the same without it
        let host = TelegramHost::detect();
        let session = match handshake(host.as_ref().map(|h| h as &dyn HostBridge), &settings) {
            Ok(session) => session,
            Err(e) => {
                log::error!("{}", e);
                HostSession::default()
            }
        };

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let game = Rc::new(RefCell::new(Game::new(&settings, session)));
        game.borrow().show_greeting();

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("Failed to create device, rendering disabled: {}", e),
        }

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Brick Tap running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if let Some(cmd) = PaddleCommand::from_key(&key) {
                    event.prevent_default();
                    apply_command(&mut g.state, cmd);
                } else if key == "i" || key == "I" {
                    g.autopilot = !g.autopilot;
                    log::info!("Autopilot: {}", g.autopilot);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch - left/right half of the canvas
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    let cmd = PaddleCommand::from_touch(x, rect.width() as f32);
                    apply_command(&mut game.borrow_mut().state, cmd);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                g.state.restart();
                g.accumulator = 0.0;
                log::info!("Game restarted");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("No #restart-btn element, restart disabled");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Ticks the headless demo runs before giving up (~4 minutes of play)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_TICKS: u64 = 30_000;

/// Headless autopilot demo
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_tap::sim::{GameEvent, GameState, apply_command, steer, tick};

    env_logger::init();
    log::info!("Brick Tap (native) starting headless autopilot demo...");
    log::info!("The playable version is the web build - run with `trunk serve`");

    let mut state = GameState::new();
    let mut paddle_hits = 0u32;
    while state.time_ticks < DEMO_TICKS && !state.is_lost() {
        if let Some(cmd) = steer(&state) {
            apply_command(&mut state, cmd);
        }
        tick(&mut state);
        for event in state.drain_events() {
            match event {
                GameEvent::PaddleHit => paddle_hits += 1,
                GameEvent::BlockBroken { pos } => log::debug!("Block broken at {}", pos),
                GameEvent::LevelCleared { .. } | GameEvent::BallLost => {}
            }
        }
    }

    log::info!(
        "Demo finished after {} ticks: level {}, score {}, {} paddle hits{}",
        state.time_ticks,
        state.level,
        state.score,
        paddle_hits,
        if state.is_lost() { " (ball lost)" } else { "" }
    );
}
