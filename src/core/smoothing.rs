use super::constants::*;
use super::palette::{Rgb, VisualTarget, IDLE};
use std::f32::consts::TAU;

/// One exponential smoothing step: move `current` toward `target` by `alpha`.
#[inline]
pub fn approach(current: f32, target: f32, alpha: f32) -> f32 {
    current + (target - current) * alpha
}

/// Smoothed color and pulse intensity, carried across frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub color: Rgb,
    pub intensity: f32,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            color: IDLE,
            intensity: 0.0,
        }
    }
}

impl VisualState {
    /// Advance one frame toward `target`.
    ///
    /// Intensity and each color channel are smoothed independently. The state
    /// is never reset on mode changes, so transitions stay continuous.
    pub fn step(&mut self, target: &VisualTarget) {
        let intensity = approach(self.intensity, target.intensity, VOLUME_SMOOTHING);
        self.intensity = if intensity.is_finite() {
            intensity.max(0.0)
        } else {
            0.0
        };
        self.color = Rgb::new(
            approach(self.color.r, target.color.r, COLOR_SMOOTHING),
            approach(self.color.g, target.color.g, COLOR_SMOOTHING),
            approach(self.color.b, target.color.b, COLOR_SMOOTHING),
        )
        .clamped();
    }

    /// Uniform scale applied to the cloud and to marker/edge sizes.
    pub fn pulse_scale(&self) -> f32 {
        1.0 + self.intensity * PULSE_SCALE_FACTOR
    }

    /// Spin advance for this frame, in radians.
    pub fn rotation_speed(&self) -> f32 {
        ROTATION_BASE_SPEED + self.intensity * ROTATION_VOLUME_GAIN
    }
}

// Spin has period 2π and tumble (half the spin) has period 4π, so wrapping at
// 4π leaves both rotations unchanged.
const ANGLE_PERIOD: f32 = 2.0 * TAU;

/// Accumulated spin angle. Tumble is derived from it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationState {
    pub angle: f32,
}

impl RotationState {
    pub fn advance(&mut self, step: f32) {
        self.angle = (self.angle + step).rem_euclid(ANGLE_PERIOD);
    }

    pub fn tumble(&self) -> f32 {
        self.angle * TUMBLE_RATIO
    }
}
