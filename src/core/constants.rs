// Fixed tuning parameters for the network visualizer.
// Values are in scene units (point cloud) or screen pixels (renderer).

// Point cloud
pub const NODE_COUNT: usize = 100;
pub const SPHERE_RADIUS: f32 = 220.0;

// Edges are drawn between nodes closer than this on screen (scaled by pulse)
pub const CONNECTION_DISTANCE: f32 = 100.0;

// Amplitudes at or below this are treated as silence
pub const NOISE_THRESHOLD: f32 = 0.05;

// Exponential smoothing: state += (target - state) * alpha
pub const VOLUME_SMOOTHING: f32 = 0.2;
pub const COLOR_SMOOTHING: f32 = 0.1;

// Rotation speed (radians per frame) = base + intensity * gain
pub const ROTATION_BASE_SPEED: f32 = 0.002;
pub const ROTATION_VOLUME_GAIN: f32 = 0.02;
pub const TUMBLE_RATIO: f32 = 0.5; // tumble angle = spin angle * ratio

// Uniform scale = 1 + intensity * factor
pub const PULSE_SCALE_FACTOR: f32 = 0.8;

// Perspective projection
pub const FIELD_OF_VIEW: f32 = 400.0;
pub const VIEWER_DISTANCE: f32 = 500.0;
pub const MIN_DEPTH: f32 = 1.0; // floor for viewer_distance + z

// Error state pulses at a fixed intensity
pub const ERROR_INTENSITY: f32 = 0.3;

// Palette (0..255 per channel)
pub const IDLE_COLOR: [f32; 3] = [0.0, 243.0, 255.0]; // cyan
pub const USER_SPEAKING_COLOR: [f32; 3] = [0.0, 255.0, 65.0]; // green
pub const BOT_SPEAKING_COLOR: [f32; 3] = [0.0, 168.0, 255.0]; // blue
pub const ERROR_COLOR: [f32; 3] = [255.0, 50.0, 50.0]; // red

// Renderer
pub const LINE_ALPHA: f32 = 0.2;
pub const LINE_WIDTH: f32 = 1.0;
pub const MARKER_RADIUS: f32 = 2.0; // multiplied by pulse scale
pub const GLOW_BLUR: f32 = 10.0;
