use super::cloud::Node;
use super::constants::*;
use super::rotation::AxisRotation;
use glam::{Vec2, Vec3};

/// Screen-space position of a node for the current frame.
pub type ProjectedPoint = Vec2;

/// Drawing surface size in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Perspective multiplier for a camera-space depth.
///
/// The denominator is floored at `MIN_DEPTH` so points that swing past the
/// viewer plane never produce a non-finite or mirrored projection.
#[inline]
pub fn perspective_scale(z: f32) -> f32 {
    FIELD_OF_VIEW / (VIEWER_DISTANCE + z).max(MIN_DEPTH)
}

/// Per-frame transform: spin about y, tumble about x, uniform scale.
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    spin: AxisRotation,
    tumble: AxisRotation,
    scale: f32,
}

impl Transform {
    pub fn new(angle: f32, tumble: f32, scale: f32) -> Self {
        Self {
            spin: AxisRotation::new(angle),
            tumble: AxisRotation::new(tumble),
            scale,
        }
    }

    #[inline]
    pub fn apply(&self, p: Vec3) -> Vec3 {
        self.tumble.about_x(self.spin.about_y(p)) * self.scale
    }

    /// Transform then perspective-project one point onto the viewport.
    #[inline]
    pub fn project(&self, p: Vec3, center: Vec2) -> ProjectedPoint {
        let q = self.apply(p);
        q.truncate() * perspective_scale(q.z) + center
    }
}

/// Project every node into `out`, preserving node order.
///
/// `out` is cleared first so the same buffer can be reused across frames.
pub fn project_nodes(
    nodes: &[Node],
    transform: &Transform,
    viewport: Viewport,
    out: &mut Vec<ProjectedPoint>,
) {
    let center = viewport.center();
    out.clear();
    out.extend(nodes.iter().map(|n| transform.project(n.base, center)));
}
