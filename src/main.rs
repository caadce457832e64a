//! Scribble Bounce entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use scribble_bounce::renderer::{CanvasSurface, Surface};
    use scribble_bounce::sim::StrokeEvent;
    use scribble_bounce::{FrameGate, Session};

    const CANVAS_ID: &str = "canvas";

    type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    /// Session plus the canvas it draws on
    struct App {
        session: Session,
        surface: CanvasSurface,
    }

    impl App {
        fn frame(&mut self) {
            self.session.frame(&mut self.surface);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Scribble Bounce starting...");

        let surface = match CanvasSurface::from_element_id(CANVAS_ID) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Cannot start without a drawing surface: {}", e);
                return;
            }
        };
        surface.fit_to_window();

        let canvas = surface.canvas().clone();
        let (width, height) = surface.size();
        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            session: Session::new(seed, width as f32, height as f32),
            surface,
        }));
        let gate = Rc::new(FrameGate::new());

        setup_mouse_handlers(&canvas, app.clone());
        setup_touch_handlers(&canvas, app.clone());

        let frame = start_frame_loop(app.clone(), gate.clone());
        setup_window_handlers(app, gate, frame);

        log::info!("Scribble Bounce running!");
    }

    /// Touch position relative to the canvas
    fn touch_point(canvas: &HtmlCanvasElement, event: &TouchEvent) -> Option<Vec2> {
        let touch = event.touches().get(0)?;
        let rect = canvas.get_bounding_client_rect();
        Some(Vec2::new(
            (touch.client_x() as f64 - rect.left()) as f32,
            (touch.client_y() as f64 - rect.top()) as f32,
        ))
    }

    fn mouse_point(event: &MouseEvent) -> Vec2 {
        Vec2::new(event.offset_x() as f32, event.offset_y() as f32)
    }

    fn setup_mouse_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse down - start a stroke
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut()
                    .session
                    .pointer(StrokeEvent::Start(mouse_point(&event)));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - extend the stroke, if any
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut()
                    .session
                    .pointer(StrokeEvent::Move(mouse_point(&event)));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up and leaving the canvas both finish the stroke
        for name in ["mouseup", "mouseleave"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().session.pointer(StrokeEvent::End);
            });
            let _ =
                canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_touch_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Touch start
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(point) = touch_point(&canvas_clone, &event) {
                    app.borrow_mut().session.pointer(StrokeEvent::Start(point));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(point) = touch_point(&canvas_clone, &event) {
                    app.borrow_mut().session.pointer(StrokeEvent::Move(point));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end / cancel
        for name in ["touchend", "touchcancel"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                app.borrow_mut().session.pointer(StrokeEvent::End);
            });
            let _ =
                canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Resize tracking, and stopping/restarting the loop as the page is
    /// hidden or restored from the back/forward cache
    fn setup_window_handlers(app: Rc<RefCell<App>>, gate: Rc<FrameGate>, frame: FrameCallback) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window; resize tracking disabled");
            return;
        };

        let resize = {
            let app = app.clone();
            Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow().surface.fit_to_window();
            })
        };
        let resize_fn: js_sys::Function = resize.as_ref().unchecked_ref::<js_sys::Function>().clone();
        resize.forget();
        let _ = window.add_event_listener_with_callback("resize", &resize_fn);

        // Page hidden - cancel the outstanding frame and stop tracking resizes
        {
            let window_clone = window.clone();
            let resize_fn = resize_fn.clone();
            let gate = gate.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if !gate.is_running() {
                    return;
                }
                if let Some(handle) = gate.stop() {
                    let _ = window_clone.cancel_animation_frame(handle);
                }
                let _ = window_clone.remove_event_listener_with_callback("resize", &resize_fn);
                log::info!("Page hidden, frame loop stopped");
            });
            let _ = window
                .add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Page restored from the back/forward cache - pick up where it left off
        {
            let window_clone = window.clone();
            let closure =
                Closure::<dyn FnMut(_)>::new(move |event: web_sys::PageTransitionEvent| {
                    if !event.persisted() || !gate.resume() {
                        return;
                    }
                    let _ = window_clone.add_event_listener_with_callback("resize", &resize_fn);
                    app.borrow().surface.fit_to_window();
                    log::info!("Page restored, restarting frame loop");
                    request_animation_frame(&frame, &gate);
                });
            let _ = window
                .add_event_listener_with_callback("pageshow", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(callback: &FrameCallback, gate: &FrameGate) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(closure) = callback.borrow().as_ref() {
            match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                Ok(handle) => gate.scheduled(handle),
                Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    /// Start the frame chain, returning its callback so it can be restarted
    fn start_frame_loop(app: Rc<RefCell<App>>, gate: Rc<FrameGate>) -> FrameCallback {
        let next: FrameCallback = Rc::new(RefCell::new(None));
        let first = next.clone();
        let loop_gate = gate.clone();

        *first.borrow_mut() = Some(Closure::new(move |_time: f64| {
            loop_gate.fired();
            app.borrow_mut().frame();

            if loop_gate.is_running() {
                request_animation_frame(&next, &loop_gate);
            } else {
                log::info!("Frame loop stopped");
            }
        }));

        request_animation_frame(&first, &gate);
        first
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    env_logger::init();
    log::info!("Scribble Bounce (native) starting...");
    log::info!("Native mode runs a scripted headless session - build for wasm32 to draw in a browser");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    run_headless(seed, 600);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Draw a V-shaped stroke, then let the ball run for `frames` frames
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(seed: u64, frames: u32) {
    use glam::Vec2;
    use scribble_bounce::Session;
    use scribble_bounce::renderer::RecordingSurface;
    use scribble_bounce::sim::StrokeEvent;

    let (width, height) = (800.0, 600.0);
    let mut surface = RecordingSurface::new(width, height);
    let mut session = Session::new(seed, width as f32, height as f32);

    session.pointer(StrokeEvent::Start(Vec2::new(100.0, 350.0)));
    for i in 1..=30 {
        let x = 100.0 + i as f32 * 20.0;
        let y = 350.0 + (15.0 - (i as f32 - 15.0).abs()) * 10.0;
        session.pointer(StrokeEvent::Move(Vec2::new(x, y)));
    }
    session.pointer(StrokeEvent::End);

    let mut segment_hits = 0;
    let mut wall_hits = 0;
    for _ in 0..frames {
        let report = session.frame(&mut surface);
        segment_hits += report.segment_hits;
        if report.wall.any() {
            wall_hits += 1;
        }
        surface.take_ops();
    }

    log::info!(
        "{} frames: {} wall bounces, {} segment bounces",
        frames,
        wall_hits,
        segment_hits
    );
    match serde_json::to_string_pretty(&session.summary()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize summary: {}", e),
    }
}
