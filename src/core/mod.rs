pub mod amplitude;
pub mod cloud;
pub mod constants;
pub mod engine;
pub mod palette;
pub mod projection;
pub mod rotation;
pub mod scene;
pub mod smoothing;

pub use amplitude::{AmplitudeSource, AudioLevels};
pub use engine::{FrameReport, SceneEngine, SceneError, SceneParams};
pub use palette::{Rgb, VisualMode};
pub use projection::{ProjectedPoint, Viewport};
pub use scene::{MarkerStyle, Segment, StrokeStyle, Surface};
