use super::amplitude::AudioLevels;
use super::cloud::PointCloud;
use super::constants::*;
use super::palette::{self, VisualMode};
use super::projection::{self, ProjectedPoint, Transform, Viewport};
use super::scene::{NetworkRenderer, Surface};
use super::smoothing::{RotationState, VisualState};
use rand::prelude::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("node count must be at least 1")]
    InvalidNodeCount,
    #[error("sphere radius must be finite and positive, got {0}")]
    InvalidRadius(f32),
}

/// Construction parameters for a `SceneEngine`.
///
/// - `node_count`: number of nodes on the sphere, fixed for the engine's life
/// - `radius`: sphere radius in scene units
/// - `seed`: RNG seed for a reproducible cloud; `None` draws from OS entropy
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub node_count: usize,
    pub radius: f32,
    pub seed: Option<u64>,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            node_count: NODE_COUNT,
            radius: SPHERE_RADIUS,
            seed: None,
        }
    }
}

impl SceneParams {
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.node_count == 0 {
            return Err(SceneError::InvalidNodeCount);
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(SceneError::InvalidRadius(self.radius));
        }
        Ok(())
    }
}

/// Summary of one simulated frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub mode: VisualMode,
    pub intensity: f32,
    pub rotation_step: f32,
    /// Edges drawn, or `None` when no surface was available.
    pub connections: Option<usize>,
}

/// Owns all per-instance visual state and runs the per-frame pipeline:
/// resolve target → smooth → advance rotation → project → draw.
///
/// Typical usage:
/// - Construct with `SceneEngine::new(params)`
/// - Each animation frame, sample `AudioLevels` and call `tick`
pub struct SceneEngine {
    cloud: PointCloud,
    visual: VisualState,
    rotation: RotationState,
    mode: VisualMode,
    projected: Vec<ProjectedPoint>,
    renderer: NetworkRenderer,
}

impl SceneEngine {
    pub fn new(params: SceneParams) -> Result<Self, SceneError> {
        params.validate()?;
        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let cloud = PointCloud::generate(params.node_count, params.radius, &mut rng);
        log::info!(
            "[viz] engine nodes={} radius={:.1} seed={:?}",
            cloud.len(),
            cloud.radius(),
            params.seed
        );
        Ok(Self {
            projected: Vec::with_capacity(cloud.len()),
            cloud,
            visual: VisualState::default(),
            rotation: RotationState::default(),
            mode: VisualMode::Idle,
            renderer: NetworkRenderer::new(),
        })
    }

    /// Advance one frame and draw it onto `surface` if one is attached.
    ///
    /// Without a surface the simulation still advances; only drawing is skipped.
    pub fn tick<S: Surface + ?Sized>(
        &mut self,
        levels: AudioLevels,
        viewport: Viewport,
        surface: Option<&mut S>,
    ) -> FrameReport {
        let target = palette::resolve(levels.input, levels.output, levels.is_error);
        if target.mode != self.mode {
            log::info!(
                "[viz] mode {} -> {}",
                self.mode.as_str(),
                target.mode.as_str()
            );
            self.mode = target.mode;
        }
        self.visual.step(&target);

        let rotation_step = self.visual.rotation_speed();
        self.rotation.advance(rotation_step);

        let scale = self.visual.pulse_scale();
        let transform = Transform::new(self.rotation.angle, self.rotation.tumble(), scale);
        projection::project_nodes(
            self.cloud.nodes(),
            &transform,
            viewport,
            &mut self.projected,
        );

        let connections = surface.map(|s| {
            self.renderer
                .draw(s, viewport, &self.projected, self.visual.color, scale)
        });

        FrameReport {
            mode: self.mode,
            intensity: self.visual.intensity,
            rotation_step,
            connections,
        }
    }

    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }

    pub fn visual(&self) -> &VisualState {
        &self.visual
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    pub fn mode(&self) -> VisualMode {
        self.mode
    }

    /// Screen positions from the most recent tick, in node order.
    pub fn projected(&self) -> &[ProjectedPoint] {
        &self.projected
    }
}
