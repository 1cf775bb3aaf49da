// Host-side tests for resolving audio levels into a visual target.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod palette {
    include!("../src/core/palette.rs");
}

use palette::*;

fn assert_target(t: VisualTarget, mode: VisualMode, color: [f32; 3], intensity: f32) {
    assert_eq!(t.mode, mode);
    assert_eq!(t.color.to_array(), color);
    assert!(
        (t.intensity - intensity).abs() < 1e-6,
        "intensity {} != {}",
        t.intensity,
        intensity
    );
}

#[test]
fn silence_is_idle_cyan() {
    assert_target(resolve(0.0, 0.0, false), VisualMode::Idle, [0.0, 243.0, 255.0], 0.0);
}

#[test]
fn levels_below_noise_threshold_stay_idle() {
    assert_target(resolve(0.01, 0.01, false), VisualMode::Idle, [0.0, 243.0, 255.0], 0.0);
    // The threshold itself is not above threshold
    assert_target(resolve(0.05, 0.05, false), VisualMode::Idle, [0.0, 243.0, 255.0], 0.0);
}

#[test]
fn input_wins_over_louder_output() {
    assert_target(
        resolve(0.5, 0.9, false),
        VisualMode::UserSpeaking,
        [0.0, 255.0, 65.0],
        0.5,
    );
}

#[test]
fn output_alone_is_bot_speaking() {
    assert_target(
        resolve(0.02, 0.7, false),
        VisualMode::BotSpeaking,
        [0.0, 168.0, 255.0],
        0.7,
    );
}

#[test]
fn error_overrides_all_levels() {
    for (i, o) in [(0.0, 0.0), (0.9, 0.0), (0.0, 0.9), (1.0, 1.0)] {
        assert_target(resolve(i, o, true), VisualMode::Error, [255.0, 50.0, 50.0], 0.3);
    }
}

#[test]
fn mode_colors_and_names_are_distinct() {
    let modes = [
        VisualMode::Idle,
        VisualMode::UserSpeaking,
        VisualMode::BotSpeaking,
        VisualMode::Error,
    ];
    for (i, a) in modes.iter().enumerate() {
        for b in modes.iter().skip(i + 1) {
            assert_ne!(a.color(), b.color());
            assert_ne!(a.as_str(), b.as_str());
        }
    }
    assert_eq!(VisualMode::default(), VisualMode::Idle);
}

#[test]
fn rgb_clamps_out_of_range_and_non_finite_channels() {
    let c = Rgb::new(-10.0, 300.0, f32::NAN).clamped();
    assert_eq!(c.to_array(), [0.0, 255.0, 0.0]);
    assert_eq!(Rgb::new(0.4, 127.5, 254.6).to_u8(), [0, 128, 255]);
}
