use super::constants::*;

/// RGB color with channels in the 0..=255 range, kept as floats so it can be
/// interpolated frame to frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn from_array(c: [f32; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Clamp every channel into 0..=255; non-finite channels collapse to 0.
    pub fn clamped(self) -> Self {
        let c = |v: f32| if v.is_finite() { v.clamp(0.0, 255.0) } else { 0.0 };
        Self::new(c(self.r), c(self.g), c(self.b))
    }

    /// Channels rounded to bytes, for CSS color strings.
    pub fn to_u8(self) -> [u8; 3] {
        let c = self.clamped();
        [
            c.r.round() as u8,
            c.g.round() as u8,
            c.b.round() as u8,
        ]
    }
}

pub const IDLE: Rgb = Rgb::from_array(IDLE_COLOR);
pub const USER_SPEAKING: Rgb = Rgb::from_array(USER_SPEAKING_COLOR);
pub const BOT_SPEAKING: Rgb = Rgb::from_array(BOT_SPEAKING_COLOR);
pub const ERROR: Rgb = Rgb::from_array(ERROR_COLOR);

/// Discrete state the visualizer is currently showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VisualMode {
    #[default]
    Idle,
    UserSpeaking,
    BotSpeaking,
    Error,
}

impl VisualMode {
    pub fn as_str(self) -> &'static str {
        match self {
            VisualMode::Idle => "idle",
            VisualMode::UserSpeaking => "user-speaking",
            VisualMode::BotSpeaking => "bot-speaking",
            VisualMode::Error => "error",
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            VisualMode::Idle => IDLE,
            VisualMode::UserSpeaking => USER_SPEAKING,
            VisualMode::BotSpeaking => BOT_SPEAKING,
            VisualMode::Error => ERROR,
        }
    }
}

/// Target the smoother pulls the visual state toward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualTarget {
    pub mode: VisualMode,
    pub color: Rgb,
    pub intensity: f32,
}

/// Map the two channel volumes and the error flag to a target.
///
/// Priority: error, then input (user) above the noise threshold, then output
/// (bot) above the threshold, then idle. Input wins whenever both channels are
/// active, regardless of which one is louder.
pub fn resolve(input_volume: f32, output_volume: f32, is_error: bool) -> VisualTarget {
    let mode = if is_error {
        VisualMode::Error
    } else if input_volume > NOISE_THRESHOLD {
        VisualMode::UserSpeaking
    } else if output_volume > NOISE_THRESHOLD {
        VisualMode::BotSpeaking
    } else {
        VisualMode::Idle
    };
    let intensity = match mode {
        VisualMode::Error => ERROR_INTENSITY,
        VisualMode::UserSpeaking => input_volume,
        VisualMode::BotSpeaking => output_volume,
        VisualMode::Idle => 0.0,
    };
    VisualTarget {
        mode,
        color: mode.color(),
        intensity,
    }
}
