//! Raycast Demo entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use raycast_demo::DemoConfig;
    use raycast_demo::consts::*;
    use raycast_demo::platform::{KeyState, KeyboardState};
    use raycast_demo::renderer::{RenderState, VertexCanvas, draw_frame};
    use raycast_demo::sim::{Entity, Scene, SimState, tick};

    /// App instance holding all state
    struct App {
        config: DemoConfig,
        state: SimState,
        keys: KeyboardState,
        canvas: VertexCanvas,
        render_state: Option<RenderState>,
        accumulator: f32,
        last_time: f64,
    }

    impl App {
        fn new(config: DemoConfig, state: SimState) -> Self {
            Self {
                config,
                state,
                keys: KeyboardState::default(),
                canvas: VertexCanvas::new(),
                render_state: None,
                accumulator: 0.0,
                last_time: 0.0,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let input = self.keys.tick_input();
            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &input, &self.config.motion);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
            if substeps == MAX_SUBSTEPS {
                if self.accumulator > 0.0 {
                    log::debug!(
                        "Substep cap ({}) reached, dropping {:.4}s of simulation time",
                        MAX_SUBSTEPS,
                        self.accumulator
                    );
                }
                self.accumulator = 0.0;
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            draw_frame(&self.state, &self.config, &mut self.canvas);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.canvas) {
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
    }

    fn js_err(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(js_err)?;

        log::info!("Raycast Demo starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()
            .map_err(|_| "not a canvas")?;

        let config = DemoConfig::load();
        let scene = Scene::demo_level(config.screen_width, config.screen_height, config.wall_thickness)
            .map_err(js_err)?;
        let entity = Entity::at(
            glam::Vec2::new(config.screen_width / 4.0, config.screen_height / 2.0),
            0.0,
        );
        let state = SimState::new(scene, entity, config.fan);
        log::info!(
            "Scene: {} walls, {} rays, max render distance {}",
            state.scene.len(),
            config.fan.ray_count,
            config.max_render_distance
        );

        // Canvas backing store at device resolution, scene laid out in logical units
        let dpr = window.device_pixel_ratio();
        let width = (config.screen_width as f64 * dpr) as u32;
        let height = (config.screen_height as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let screen = (config.screen_width, config.screen_height);
        let app = Rc::new(RefCell::new(App::new(config, state)));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(js_err)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(js_err)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, screen)
            .await
            .map_err(js_err)?;
        app.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(app.clone());
        request_animation_frame(app);

        log::info!("Raycast Demo running!");
        Ok(())
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        for (event_name, down) in [("keydown", true), ("keyup", false)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if app.borrow_mut().keys.handle_key(&event.key(), down) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keyup events are lost, so drop all held keys
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                app.borrow_mut().keys.release_all();
                log::debug!("Keys released (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            a.last_time = time;

            a.update(dt);
            a.render();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_app::run().await {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Raycast Demo (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    if let Err(e) = headless_session() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive a scripted walk through the demo level and report what each
/// stretch of frames would have drawn.
#[cfg(not(target_arch = "wasm32"))]
fn headless_session() -> Result<(), Box<dyn std::error::Error>> {
    use glam::Vec2;
    use raycast_demo::DemoConfig;
    use raycast_demo::renderer::{VertexCanvas, draw_frame};
    use raycast_demo::sim::{Entity, Scene, SimState, TickInput, tick};

    let config = DemoConfig::load();
    config.validate()?;
    let scene = Scene::demo_level(config.screen_width, config.screen_height, config.wall_thickness)?;
    let entity = Entity::at(
        Vec2::new(config.screen_width / 4.0, config.screen_height / 2.0),
        0.0,
    );
    let mut state = SimState::new(scene, entity, config.fan);
    let mut canvas = VertexCanvas::new();

    log::info!(
        "Scene: {} walls, {} rays x {} probes",
        state.scene.len(),
        config.fan.ray_count,
        config.fan.max_probes
    );

    let turn_right = TickInput {
        turn_right: true,
        ..Default::default()
    };
    let walk = TickInput {
        forward: true,
        ..Default::default()
    };
    let veer_left = TickInput {
        turn_left: true,
        forward: true,
        ..Default::default()
    };
    let script = [("turn right", turn_right, 90), ("walk", walk, 120), ("veer left", veer_left, 60)];

    for (label, input, frames) in script {
        for _ in 0..frames {
            tick(&mut state, &input, &config.motion);
            draw_frame(&state, &config, &mut canvas);
        }
        log::info!(
            "{:>10}: pos=({:.1}, {:.1}) heading={:.0} wall_hits={}/{} triangles={}",
            label,
            state.entity.pos.x,
            state.entity.pos.y,
            state.entity.heading_deg,
            state.wall_hits(),
            state.hit_count(),
            canvas.triangle_count()
        );
    }

    log::info!("Headless session finished after {} ticks", state.tick_count);
    Ok(())
}
