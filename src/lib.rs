#![cfg(target_arch = "wasm32")]
use crate::audio::Channel;
use crate::core::{SceneEngine, SceneParams, VisualMode};
use crate::frame::{FrameContext, FrameLoop};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
pub mod core;
mod dom;
mod frame;
mod surface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("network visualizer loaded");
    Ok(())
}

fn find_canvas(canvas_id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas_el = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", canvas_id))?;
    canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", canvas_id, e))
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Audio-reactive network sphere drawn onto a canvas.
///
/// From JS: construct with a canvas, attach `MediaStream`s for the input
/// (microphone) and output (playback) channels, toggle the error signal, and
/// `start()`/`stop()` the animation loop. `destroy()` releases everything.
#[wasm_bindgen]
pub struct NetworkVisualizer {
    frame_ctx: Rc<RefCell<FrameContext>>,
    frame_loop: Option<FrameLoop>,
    resize: Option<dom::ResizeListener>,
}

#[wasm_bindgen]
impl NetworkVisualizer {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: web::HtmlCanvasElement) -> Result<NetworkVisualizer, JsValue> {
        let engine = SceneEngine::new(SceneParams::default()).map_err(to_js)?;
        let resize = dom::ResizeListener::attach(&canvas);
        Ok(Self {
            frame_ctx: Rc::new(RefCell::new(FrameContext::new(engine, canvas))),
            frame_loop: None,
            resize,
        })
    }

    /// Build a visualizer for the canvas with the given element id.
    #[wasm_bindgen(js_name = fromCanvasId)]
    pub fn from_canvas_id(canvas_id: &str) -> Result<NetworkVisualizer, JsValue> {
        let canvas = find_canvas(canvas_id).map_err(to_js)?;
        Self::new(canvas)
    }

    #[wasm_bindgen(js_name = setInputStream)]
    pub fn set_input_stream(&self, stream: Option<web::MediaStream>) {
        self.frame_ctx
            .borrow_mut()
            .audio
            .set_stream(Channel::Input, stream.as_ref());
    }

    #[wasm_bindgen(js_name = setOutputStream)]
    pub fn set_output_stream(&self, stream: Option<web::MediaStream>) {
        self.frame_ctx
            .borrow_mut()
            .audio
            .set_stream(Channel::Output, stream.as_ref());
    }

    #[wasm_bindgen(js_name = setError)]
    pub fn set_error(&self, is_error: bool) {
        self.frame_ctx.borrow_mut().is_error = is_error;
    }

    /// Start the animation loop. No-op if already running.
    pub fn start(&mut self) {
        if self.frame_loop.is_none() {
            self.frame_loop = Some(FrameLoop::start(self.frame_ctx.clone()));
        }
    }

    /// Stop the animation loop; visual state is kept for a later `start()`.
    pub fn stop(&mut self) {
        self.frame_loop = None;
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.frame_loop.is_some()
    }

    /// Re-sync the canvas backing store with its CSS size.
    pub fn resize(&self) {
        dom::sync_canvas_backing_size(&self.frame_ctx.borrow().canvas);
    }

    /// Current visual mode: "idle", "user-speaking", "bot-speaking" or "error".
    pub fn mode(&self) -> String {
        self.frame_ctx
            .borrow()
            .last_report
            .map_or(VisualMode::Idle, |r| r.mode)
            .as_str()
            .to_string()
    }

    /// Smoothed pulse intensity.
    pub fn intensity(&self) -> f32 {
        self.frame_ctx.borrow().engine.visual().intensity
    }

    /// Stop the loop, detach audio and remove the resize listener.
    pub fn destroy(&mut self) {
        self.frame_loop = None;
        self.resize = None;
        self.frame_ctx.borrow_mut().audio.close();
        log::info!("[viz] destroyed");
    }
}
