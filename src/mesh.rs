//! The light mesh: an ordered point cloud of addressable lights.
//!
//! Positions are fixed for the lifetime of a mesh and pre-normalized to a
//! common coordinate space, so effects can reason about distances without
//! caring how the physical installation was calibrated.

use crate::error::MeshError;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// An immutable, ordered collection of light positions.
///
/// Lights are addressed by index `0..len()`. Index order follows the physical
/// wiring, which is why traveling effects can treat the index axis as a path
/// through the mesh.
#[derive(Debug, Clone)]
pub struct LightMesh {
    positions: Vec<Vec3>,
    centroid: Vec3,
}

impl LightMesh {
    /// Create a mesh from pre-normalized positions.
    ///
    /// Fails on an empty position list; every other aspect of the positions
    /// is trusted.
    pub fn new(positions: Vec<Vec3>) -> Result<Self, MeshError> {
        if positions.is_empty() {
            return Err(MeshError::Empty);
        }
        let centroid = positions.iter().sum::<Vec3>() / positions.len() as f32;
        Ok(Self {
            positions,
            centroid,
        })
    }

    /// A procedural cone-shaped mesh, widest at the base, apex up.
    ///
    /// Lights are sorted bottom-to-top so the index axis roughly follows
    /// height, which is what string-wound installations look like. Useful for
    /// demos and tests; real installations supply measured positions.
    pub fn conical<R: Rng>(count: usize, rng: &mut R) -> Result<Self, MeshError> {
        let mut positions: Vec<Vec3> = (0..count)
            .map(|_| {
                let y = rng.gen::<f32>();
                let radius = 0.5 * (1.0 - y) * rng.gen::<f32>().sqrt();
                let angle = rng.gen_range(0.0..TAU);
                Vec3::new(radius * angle.cos(), y, radius * angle.sin())
            })
            .collect();
        positions.sort_by(|a, b| a.y.total_cmp(&b.y));
        Self::new(positions)
    }

    /// Number of lights in the mesh.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false: construction rejects empty meshes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of the light at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn position(&self, index: usize) -> Vec3 {
        self.positions[index]
    }

    /// Iterate over positions in index order.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.positions.iter().copied()
    }

    /// Mean of all light positions.
    #[inline]
    pub fn centroid(&self) -> Vec3 {
        self.centroid
    }
}
