use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// A node of the network, fixed on the surface of the sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub base: Vec3,
}

/// Static set of nodes distributed uniformly over a sphere.
///
/// Generated once per visualizer and never mutated; every frame reads the
/// base coordinates and derives transient projected points from them.
#[derive(Clone, Debug)]
pub struct PointCloud {
    nodes: Vec<Node>,
    radius: f32,
}

impl PointCloud {
    /// Sample `count` nodes uniformly on a sphere of the given radius.
    ///
    /// Uses θ ~ U(0, 2π) and φ = acos(U(-1, 1)) so the z coordinate is
    /// uniform over [-radius, radius] and nodes do not bunch up at the poles.
    pub fn generate<R: Rng + ?Sized>(count: usize, radius: f32, rng: &mut R) -> Self {
        let nodes = (0..count)
            .map(|_| {
                let theta = rng.gen_range(0.0..TAU);
                let phi = rng.gen_range(-1.0_f32..=1.0).acos();
                let (sin_phi, cos_phi) = phi.sin_cos();
                let (sin_theta, cos_theta) = theta.sin_cos();
                Node {
                    base: Vec3::new(
                        radius * sin_phi * cos_theta,
                        radius * sin_phi * sin_theta,
                        radius * cos_phi,
                    ),
                }
            })
            .collect();
        Self { nodes, radius }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}
