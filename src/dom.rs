use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// 2D context for the canvas, or `None` if the browser cannot provide one yet.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

/// Window `resize` listener that keeps the canvas backing store in sync.
///
/// The listener is removed when this value is dropped.
pub struct ResizeListener {
    closure: Closure<dyn FnMut()>,
}

impl ResizeListener {
    pub fn attach(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        sync_canvas_backing_size(canvas);
        let canvas_resize = canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        let window = web::window()?;
        if let Err(e) =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        {
            log::error!("[dom] resize listener error: {:?}", e);
            return None;
        }
        Some(Self { closure })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        if let Some(window) = web::window() {
            _ = window.remove_event_listener_with_callback(
                "resize",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
