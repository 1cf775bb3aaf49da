use super::constants::*;
use super::palette::Rgb;
use super::projection::{ProjectedPoint, Viewport};

/// Line segment between two projected nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: ProjectedPoint,
    pub to: ProjectedPoint,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgb,
    pub alpha: f32,
    pub width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    pub color: Rgb,
    pub radius: f32,
    pub glow_blur: f32,
}

/// 2D drawing target the renderer paints onto.
///
/// Implemented over a browser canvas context on the web; tests use a
/// recording double.
pub trait Surface {
    fn clear(&mut self, viewport: Viewport);
    fn stroke_segments(&mut self, segments: &[Segment], style: &StrokeStyle);
    fn fill_markers(&mut self, centers: &[ProjectedPoint], style: &MarkerStyle);
    /// Turn off any glow set by `fill_markers`.
    fn reset_glow(&mut self);
}

/// Maximum on-screen distance for an edge at the given pulse scale.
#[inline]
pub fn connection_threshold(scale: f32) -> f32 {
    CONNECTION_DISTANCE * scale
}

/// Call `f(i, j)` for every pair `i < j` closer than `threshold`.
///
/// The test is exclusive: points exactly `threshold` apart are not connected.
pub fn for_each_connection(
    points: &[ProjectedPoint],
    threshold: f32,
    mut f: impl FnMut(usize, usize),
) {
    let limit_sq = threshold * threshold;
    for (i, a) in points.iter().enumerate() {
        for (j, b) in points.iter().enumerate().skip(i + 1) {
            if a.distance_squared(*b) < limit_sq {
                f(i, j);
            }
        }
    }
}

/// Index pairs of all connected nodes, in `(i, j)` lexicographic order.
pub fn connections(points: &[ProjectedPoint], threshold: f32) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for_each_connection(points, threshold, |i, j| pairs.push((i, j)));
    pairs
}

/// Draws the network: edges first, then glowing node markers.
#[derive(Default)]
pub struct NetworkRenderer {
    segments: Vec<Segment>,
}

impl NetworkRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint one frame and return the number of edges drawn.
    pub fn draw<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        viewport: Viewport,
        points: &[ProjectedPoint],
        color: Rgb,
        scale: f32,
    ) -> usize {
        surface.clear(viewport);

        self.segments.clear();
        let segments = &mut self.segments;
        for_each_connection(points, connection_threshold(scale), |i, j| {
            segments.push(Segment {
                from: points[i],
                to: points[j],
            })
        });
        if !self.segments.is_empty() {
            surface.stroke_segments(
                &self.segments,
                &StrokeStyle {
                    color,
                    alpha: LINE_ALPHA,
                    width: LINE_WIDTH,
                },
            );
        }

        surface.fill_markers(
            points,
            &MarkerStyle {
                color,
                radius: MARKER_RADIUS * scale,
                glow_blur: GLOW_BLUR,
            },
        );
        surface.reset_glow();

        self.segments.len()
    }
}
