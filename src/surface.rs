use crate::core::{MarkerStyle, ProjectedPoint, Rgb, Segment, StrokeStyle, Surface, Viewport};
use std::f64::consts::TAU;
use web_sys as web;

#[inline]
fn css_rgb(color: Rgb) -> String {
    let [r, g, b] = color.to_u8();
    format!("rgb({}, {}, {})", r, g, b)
}

#[inline]
fn css_rgba(color: Rgb, alpha: f32) -> String {
    let [r, g, b] = color.to_u8();
    format!("rgba({}, {}, {}, {:.3})", r, g, b, alpha.clamp(0.0, 1.0))
}

/// `Surface` backed by a canvas 2D context.
///
/// Drawing happens in CSS pixels; the device pixel ratio is applied as a
/// context transform at the start of every frame.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    dpr: f64,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx, dpr: 1.0 }
    }

    pub fn set_pixel_ratio(&mut self, dpr: f64) {
        self.dpr = dpr;
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, viewport: Viewport) {
        _ = self.ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
    }

    fn stroke_segments(&mut self, segments: &[Segment], style: &StrokeStyle) {
        // One path for all edges; they share a style.
        self.ctx.set_stroke_style_str(&css_rgba(style.color, style.alpha));
        self.ctx.set_line_width(style.width as f64);
        self.ctx.begin_path();
        for s in segments {
            self.ctx.move_to(s.from.x as f64, s.from.y as f64);
            self.ctx.line_to(s.to.x as f64, s.to.y as f64);
        }
        self.ctx.stroke();
    }

    fn fill_markers(&mut self, centers: &[ProjectedPoint], style: &MarkerStyle) {
        let color = css_rgb(style.color);
        self.ctx.set_fill_style_str(&color);
        self.ctx.set_shadow_blur(style.glow_blur as f64);
        self.ctx.set_shadow_color(&color);
        let radius = style.radius.max(0.0) as f64;
        for p in centers {
            self.ctx.begin_path();
            _ = self.ctx.arc(p.x as f64, p.y as f64, radius, 0.0, TAU);
            self.ctx.fill();
        }
    }

    fn reset_glow(&mut self) {
        self.ctx.set_shadow_blur(0.0);
    }
}
