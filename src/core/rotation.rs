use glam::Vec3;

/// Planar rotation by a fixed angle, with sin/cos computed once.
///
/// `apply(a, b)` returns `(a·cos − b·sin, b·cos + a·sin)`. Which pair of
/// coordinates is passed selects the axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRotation {
    sin: f32,
    cos: f32,
}

impl AxisRotation {
    pub fn new(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { sin, cos }
    }

    #[inline]
    pub fn apply(&self, a: f32, b: f32) -> (f32, f32) {
        (a * self.cos - b * self.sin, b * self.cos + a * self.sin)
    }

    /// Rotate about the vertical (y) axis: mixes x and z.
    #[inline]
    pub fn about_y(&self, p: Vec3) -> Vec3 {
        let (x, z) = self.apply(p.x, p.z);
        Vec3::new(x, p.y, z)
    }

    /// Rotate about the horizontal (x) axis: mixes y and z.
    #[inline]
    pub fn about_x(&self, p: Vec3) -> Vec3 {
        let (y, z) = self.apply(p.y, p.z);
        Vec3::new(p.x, y, z)
    }
}
