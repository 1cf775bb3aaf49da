/// Live audio signal that can report its current loudness.
///
/// `average_volume` is sampled once per frame and must be cheap. Values are
/// expected in [0, 1]; anything else is sanitized by `AudioLevels`.
pub trait AmplitudeSource {
    fn average_volume(&mut self) -> f32;
}

impl<S: AmplitudeSource + ?Sized> AmplitudeSource for Box<S> {
    fn average_volume(&mut self) -> f32 {
        (**self).average_volume()
    }
}

/// Mean of a byte sample buffer, normalized to [0, 1]. Empty buffers are silent.
pub fn mean_normalized(samples: &[u8]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: u32 = samples.iter().map(|&s| s as u32).sum();
    sum as f32 / (samples.len() as f32 * 255.0)
}

/// Clamp a reported volume into [0, 1]; NaN becomes silence.
#[inline]
pub fn sanitize_volume(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Volumes sampled for one frame plus the error signal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AudioLevels {
    pub input: f32,
    pub output: f32,
    pub is_error: bool,
}

impl AudioLevels {
    pub fn new(input: f32, output: f32, is_error: bool) -> Self {
        Self {
            input: sanitize_volume(input),
            output: sanitize_volume(output),
            is_error,
        }
    }

    /// Sample both channels; an absent source contributes zero volume.
    pub fn sample<I, O>(input: Option<&mut I>, output: Option<&mut O>, is_error: bool) -> Self
    where
        I: AmplitudeSource + ?Sized,
        O: AmplitudeSource + ?Sized,
    {
        Self::new(
            input.map_or(0.0, |s| s.average_volume()),
            output.map_or(0.0, |s| s.average_volume()),
            is_error,
        )
    }
}
