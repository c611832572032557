//! Canvas Sandbox entry point
//!
//! Handles platform-specific initialization and wires input to the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_sandbox {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use canvas_sandbox::SandboxConfig;
    use canvas_sandbox::platform::{DomGameOver, RafScheduler};
    use canvas_sandbox::renderer::{CanvasSurface, demo};
    use canvas_sandbox::sim::GameLoop;

    type Sandbox = GameLoop<CanvasSurface, RafScheduler, DomGameOver>;

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        // Logger first so config warnings reach the console
        console_log::init_with_level(log::Level::Trace)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::set_max_level(log::LevelFilter::Info);

        let config = SandboxConfig::load();
        log::set_max_level(config.log_level().to_level_filter());

        log::info!("Canvas Sandbox starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("my-canvas")
            .ok_or_else(|| JsValue::from_str("no #my-canvas"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("#my-canvas is not a canvas"))?;
        let surface = CanvasSurface::new(canvas)?;
        let sink = DomGameOver::new(document.clone());

        // The scheduler calls back into the loop that owns it
        let game: Rc<RefCell<Sandbox>> = Rc::new_cyclic(|weak: &Weak<RefCell<Sandbox>>| {
            let weak = weak.clone();
            let scheduler = RafScheduler::new(window.clone(), move |handle| {
                if let Some(game) = weak.upgrade() {
                    game.borrow_mut().on_frame(handle);
                }
            });
            RefCell::new(GameLoop::new(config, surface, scheduler, sink))
        });

        setup_buttons(&document, &game)?;
        setup_keyboard(&document, &game)?;

        {
            let mut g = game.borrow_mut();
            g.draw_all();
            g.start();
        }

        log::info!("Canvas Sandbox running!");
        Ok(())
    }

    fn setup_buttons(document: &Document, game: &Rc<RefCell<Sandbox>>) -> Result<(), JsValue> {
        on_click(document, "make-x", game, |g| demo::draw_x(g.surface_mut()))?;
        on_click(document, "make-grid", game, |g| demo::draw_grid(g.surface_mut()))?;
        on_click(document, "make-rect", game, |g| demo::draw_rectangles(g.surface_mut()))?;
        on_click(document, "make-circles", game, |g| demo::draw_circles(g.surface_mut()))?;
        on_click(document, "clear", game, |g| demo::clear(g.surface_mut()))?;
        on_click(document, "stop-animation", game, |g| g.stop())?;
        Ok(())
    }

    /// Run `action` on the loop when button `id` is clicked (skipped if absent)
    fn on_click(
        document: &Document,
        id: &str,
        game: &Rc<RefCell<Sandbox>>,
        action: fn(&mut Sandbox),
    ) -> Result<(), JsValue> {
        let Some(btn) = document.get_element_by_id(id) else {
            log::debug!("no #{} button", id);
            return Ok(());
        };

        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            action(&mut game.borrow_mut());
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_keyboard(document: &Document, game: &Rc<RefCell<Sandbox>>) -> Result<(), JsValue> {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().key_down(&event.key());
            });
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().key_up(&event.key());
            });
            document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_sandbox::run()
}

/// Frame cap for the headless session
#[cfg(not(target_arch = "wasm32"))]
const MAX_HEADLESS_FRAMES: u64 = 10_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_sandbox::SandboxConfig;

    // Logger first so config warnings are printed. RUST_LOG wins over the
    // configured level when set.
    let env_level = std::env::var_os("RUST_LOG").is_some();
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Trace)
        .parse_default_env()
        .init();
    if !env_level {
        log::set_max_level(log::LevelFilter::Info);
    }

    let path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let config = SandboxConfig::load(path.as_deref());
    if !env_level {
        log::set_max_level(config.log_level().to_level_filter());
    }

    log::info!("Canvas Sandbox (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    run_demos(&config);
    run_headless(config);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Render each shape demo into a recorder and report its size
#[cfg(not(target_arch = "wasm32"))]
fn run_demos(config: &canvas_sandbox::SandboxConfig) {
    use canvas_sandbox::renderer::{Recorder, RenderSurface, demo};

    let demos: [(&str, fn(&mut dyn RenderSurface)); 5] = [
        ("x", demo::draw_x),
        ("grid", demo::draw_grid),
        ("rectangles", demo::draw_rectangles),
        ("circles", demo::draw_circles),
        ("clear", demo::clear),
    ];
    for (name, draw) in demos {
        let mut surface = Recorder::new(config.surface.width, config.surface.height);
        draw(&mut surface);
        log::info!("demo {}: {} draw commands", name, surface.commands().len());
    }
}

/// Drive the square down-left into the obstacle until the session ends
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(config: canvas_sandbox::SandboxConfig) {
    use canvas_sandbox::platform::ManualScheduler;
    use canvas_sandbox::renderer::Recorder;
    use canvas_sandbox::sim::{Entity, GameLoop, LogSink};

    let surface = Recorder::new(config.surface.width, config.surface.height);
    let mut game = GameLoop::new(config, surface, ManualScheduler::new(), LogSink::default());

    game.draw_all();
    game.start();
    game.key_down("s");
    game.key_down("a");

    while let Some(handle) = game.scheduler_mut().pump() {
        if game.frames() >= MAX_HEADLESS_FRAMES {
            log::warn!("frame cap reached, stopping");
            game.stop();
            break;
        }
        game.on_frame(handle);
    }

    let square = game.square().position();
    log::info!(
        "session ended in {:?} after {} frames, square at ({}, {})",
        game.phase(),
        game.frames(),
        square.x,
        square.y
    );
}
