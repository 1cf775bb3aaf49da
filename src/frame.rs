use crate::audio::AudioInputs;
use crate::constants::FRAME_BUDGET_MS;
use crate::core::{AudioLevels, FrameReport, SceneEngine, Viewport};
use crate::dom;
use crate::surface::CanvasSurface;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: SceneEngine,
    pub audio: AudioInputs,
    pub is_error: bool,
    pub canvas: web::HtmlCanvasElement,
    surface: Option<CanvasSurface>,
    pub last_report: Option<FrameReport>,
}

impl FrameContext {
    pub fn new(engine: SceneEngine, canvas: web::HtmlCanvasElement) -> Self {
        Self {
            engine,
            audio: AudioInputs::default(),
            is_error: false,
            canvas,
            surface: None,
            last_report: None,
        }
    }

    pub fn frame(&mut self) {
        let started = Instant::now();

        // The 2D context may not exist until the canvas is attached.
        if self.surface.is_none() {
            self.surface = dom::context_2d(&self.canvas).map(CanvasSurface::new);
            if self.surface.is_some() {
                log::info!("[frame] 2d context acquired");
            }
        }

        let dpr = web::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0)
            .max(f64::EPSILON);
        if let Some(s) = &mut self.surface {
            s.set_pixel_ratio(dpr);
        }
        let viewport = Viewport::new(
            (self.canvas.width() as f64 / dpr) as f32,
            (self.canvas.height() as f64 / dpr) as f32,
        );

        let levels = AudioLevels::sample(
            self.audio.input.as_mut(),
            self.audio.output.as_mut(),
            self.is_error,
        );
        let report = self.engine.tick(levels, viewport, self.surface.as_mut());
        self.last_report = Some(report);

        let work_ms = started.elapsed().as_secs_f32() * 1000.0;
        if work_ms > FRAME_BUDGET_MS {
            log::debug!(
                "[frame] slow frame {:.1}ms edges={:?}",
                work_ms,
                report.connections
            );
        }
    }
}

#[derive(Default)]
struct LoopState {
    handle: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopState {
    fn request_next(&self) {
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            return;
        };
        if let Some(w) = web::window() {
            match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => self.handle.set(Some(id)),
                Err(e) => log::error!("[frame] requestAnimationFrame error: {:?}", e),
            }
        }
    }
}

/// Animation-frame loop driving a `FrameContext`.
///
/// The tick closure only holds a weak reference to the loop state, so
/// stopping (or dropping) the loop cancels the pending frame and frees the
/// closure without leaving a recurring callback behind.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let state = Rc::new(LoopState::default());
        let weak: Weak<LoopState> = Rc::downgrade(&state);
        let closure = Closure::wrap(Box::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.handle.set(None);
            frame_ctx.borrow_mut().frame();
            state.request_next();
        }) as Box<dyn FnMut()>);
        *state.tick.borrow_mut() = Some(closure);
        state.request_next();
        log::info!("[frame] loop started");
        Self { state }
    }

    pub fn stop(&self) {
        if let Some(id) = self.state.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        if self.state.tick.borrow_mut().take().is_some() {
            log::info!("[frame] loop stopped");
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
