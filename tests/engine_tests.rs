// Host-side integration tests for the per-frame scene pipeline.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod amplitude {
    include!("../src/core/amplitude.rs");
}
mod cloud {
    include!("../src/core/cloud.rs");
}
mod constants {
    include!("../src/core/constants.rs");
}
mod engine {
    include!("../src/core/engine.rs");
}
mod palette {
    include!("../src/core/palette.rs");
}
mod projection {
    include!("../src/core/projection.rs");
}
mod rotation {
    include!("../src/core/rotation.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}
mod smoothing {
    include!("../src/core/smoothing.rs");
}

use amplitude::*;
use engine::*;
use palette::VisualMode;
use projection::{ProjectedPoint, Viewport};
use scene::{MarkerStyle, Segment, StrokeStyle, Surface};

#[derive(Default)]
struct CountingSurface {
    frames: usize,
    markers: usize,
    glow_resets: usize,
}

impl Surface for CountingSurface {
    fn clear(&mut self, _viewport: Viewport) {
        self.frames += 1;
    }
    fn stroke_segments(&mut self, _segments: &[Segment], _style: &StrokeStyle) {}
    fn fill_markers(&mut self, centers: &[ProjectedPoint], _style: &MarkerStyle) {
        self.markers += centers.len();
    }
    fn reset_glow(&mut self) {
        self.glow_resets += 1;
    }
}

struct FixedLevel(f32);

impl AmplitudeSource for FixedLevel {
    fn average_volume(&mut self) -> f32 {
        self.0
    }
}

const VIEWPORT: Viewport = Viewport {
    width: 800.0,
    height: 600.0,
};

fn make_engine() -> SceneEngine {
    SceneEngine::new(SceneParams {
        seed: Some(42),
        ..SceneParams::default()
    })
    .expect("valid params")
}

fn tick_headless(engine: &mut SceneEngine, levels: AudioLevels) -> FrameReport {
    engine.tick(levels, VIEWPORT, None::<&mut CountingSurface>)
}

#[test]
fn default_params_build_a_hundred_node_sphere() {
    let engine = make_engine();
    assert_eq!(engine.cloud().len(), 100);
    assert_eq!(engine.cloud().radius(), 220.0);
    assert_eq!(engine.mode(), VisualMode::Idle);
    assert_eq!(engine.visual().intensity, 0.0);
}

#[test]
fn invalid_params_are_rejected() {
    let zero = SceneParams {
        node_count: 0,
        ..SceneParams::default()
    };
    assert_eq!(SceneEngine::new(zero).err(), Some(SceneError::InvalidNodeCount));
    for radius in [0.0, -5.0, f32::NAN, f32::INFINITY] {
        let p = SceneParams {
            radius,
            ..SceneParams::default()
        };
        assert!(matches!(p.validate(), Err(SceneError::InvalidRadius(_))));
    }
}

#[test]
fn user_speech_ramps_intensity_color_and_rotation() {
    let mut engine = make_engine();
    let levels = AudioLevels::new(0.3, 0.0, false);
    let mut prev_intensity = 0.0;
    let mut prev_color = engine.visual().color;
    let mut prev_angle = engine.rotation().angle;
    for frame in 0..30 {
        let report = tick_headless(&mut engine, levels);
        assert_eq!(report.mode, VisualMode::UserSpeaking);

        let v = *engine.visual();
        assert!(v.intensity > prev_intensity && v.intensity <= 0.3, "frame {frame}");
        assert!(v.color.r <= prev_color.r + 1e-6);
        assert!(v.color.g >= prev_color.g && v.color.g <= 255.0);
        assert!(v.color.b <= prev_color.b && v.color.b >= 65.0);

        let angle = engine.rotation().angle;
        let advanced = angle - prev_angle;
        assert!(advanced > 0.002, "frame {frame}: advanced {advanced}");
        assert!((advanced - report.rotation_step).abs() < 1e-5);

        prev_intensity = v.intensity;
        prev_color = v.color;
        prev_angle = angle;
    }
    assert!((engine.visual().intensity - 0.3).abs() < 0.01);
}

#[test]
fn rotation_uses_this_frames_smoothed_intensity() {
    let mut engine = make_engine();
    let report = tick_headless(&mut engine, AudioLevels::new(1.0, 0.0, false));
    // First frame: intensity 0 -> 0.2, speed = 0.002 + 0.2 * 0.02
    assert!((report.intensity - 0.2).abs() < 1e-6);
    assert!((report.rotation_step - 0.006).abs() < 1e-6);
    assert!((engine.rotation().angle - 0.006).abs() < 1e-6);
}

#[test]
fn idle_rotation_advances_at_base_rate() {
    let mut engine = make_engine();
    for _ in 0..10 {
        let report = tick_headless(&mut engine, AudioLevels::default());
        assert_eq!(report.mode, VisualMode::Idle);
        assert!((report.rotation_step - 0.002).abs() < 1e-9);
    }
    assert!((engine.rotation().angle - 0.02).abs() < 1e-5);
}

#[test]
fn error_signal_turns_red_at_fixed_intensity() {
    let mut engine = make_engine();
    for _ in 0..200 {
        tick_headless(&mut engine, AudioLevels::new(0.9, 0.9, true));
    }
    assert_eq!(engine.mode(), VisualMode::Error);
    let v = engine.visual();
    assert!((v.intensity - 0.3).abs() < 1e-3);
    assert!((v.color.r - 255.0).abs() < 0.5);
    assert!((v.color.g - 50.0).abs() < 0.5);
}

#[test]
fn missing_surface_still_advances_simulation() {
    let mut engine = make_engine();
    let report = tick_headless(&mut engine, AudioLevels::new(0.0, 0.5, false));
    assert_eq!(report.connections, None);
    assert_eq!(report.mode, VisualMode::BotSpeaking);
    assert!(engine.rotation().angle > 0.0);
    assert_eq!(engine.projected().len(), 100);
}

#[test]
fn attached_surface_gets_a_full_frame() {
    let mut engine = make_engine();
    let mut surface = CountingSurface::default();
    let report = engine.tick(AudioLevels::default(), VIEWPORT, Some(&mut surface));
    assert!(report.connections.is_some());
    assert_eq!(surface.frames, 1);
    assert_eq!(surface.markers, 100);
    assert_eq!(surface.glow_resets, 1);
}

#[test]
fn projected_points_stay_finite_and_centered_on_viewport() {
    let mut engine = make_engine();
    for _ in 0..50 {
        tick_headless(&mut engine, AudioLevels::new(1.0, 0.0, false));
    }
    let pts = engine.projected();
    let mut mean = glam::Vec2::ZERO;
    for p in pts {
        assert!(p.x.is_finite() && p.y.is_finite());
        mean += *p;
    }
    mean /= pts.len() as f32;
    // A uniform sphere projects roughly around the viewport center
    assert!((mean.x - 400.0).abs() < 150.0);
    assert!((mean.y - 300.0).abs() < 150.0);
}

#[test]
fn absent_sources_contribute_silence() {
    let levels = AudioLevels::sample(
        None::<&mut FixedLevel>,
        Some(&mut FixedLevel(0.4)),
        false,
    );
    assert_eq!(levels, AudioLevels::new(0.0, 0.4, false));
    let mut boxed: Box<dyn AmplitudeSource> = Box::new(FixedLevel(0.6));
    let levels = AudioLevels::sample(Some(&mut boxed), None::<&mut FixedLevel>, true);
    assert_eq!(levels.input, 0.6);
    assert!(levels.is_error);
}

#[test]
fn out_of_range_volumes_are_sanitized() {
    let levels = AudioLevels::new(f32::NAN, 3.0, false);
    assert_eq!(levels.input, 0.0);
    assert_eq!(levels.output, 1.0);
    assert_eq!(sanitize_volume(-0.5), 0.0);
}

#[test]
fn mean_of_byte_buffer_is_normalized() {
    assert_eq!(mean_normalized(&[]), 0.0);
    assert_eq!(mean_normalized(&[0, 0, 0]), 0.0);
    assert_eq!(mean_normalized(&[255; 128]), 1.0);
    assert!((mean_normalized(&[0, 255]) - 0.5).abs() < 1e-6);
}
