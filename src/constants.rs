/// Web front-end tuning constants.
///
/// Values the browser glue needs (analyser setup, frame pacing) that the
/// platform-independent core does not care about.
// Analyser: 256-point FFT gives 128 frequency bins per sample
pub const ANALYSER_FFT_SIZE: u32 = 256;
pub const ANALYSER_SMOOTHING: f64 = 0.8;

// Frames slower than this are logged at debug level
pub const FRAME_BUDGET_MS: f32 = 16.7;
