//! Expanding spherical shock shells.
//!
//! A shell is the region between two concentric radii around a collision
//! point. As both radii grow, the shell sweeps outward through the mesh and
//! recolors the lights it passes through.

use crate::color::Color;
use crate::frame::Frame;
use crate::mesh::LightMesh;
use glam::Vec3;
use rand::Rng;

/// Whether `point` lies strictly inside the shell.
///
/// Strict on both boundaries: a light exactly on either radius is left
/// untouched, which reads as a thin seam while the shell passes over it.
#[inline]
pub fn in_shell(point: Vec3, center: Vec3, outer_radius: f32, inner_radius: f32) -> bool {
    let d2 = point.distance_squared(center);
    d2 > inner_radius * inner_radius && d2 < outer_radius * outer_radius
}

/// Paint every light inside the shell with one of two colors.
///
/// The color is chosen per light, independently and uniformly, giving the
/// shock front a crackling two-tone texture. Lights outside the shell keep
/// whatever the frame already holds.
pub fn draw_shell<R: Rng>(
    frame: &mut Frame,
    mesh: &LightMesh,
    center: Vec3,
    outer_radius: f32,
    inner_radius: f32,
    color_a: Color,
    color_b: Color,
    rng: &mut R,
) {
    for (index, position) in mesh.positions().enumerate() {
        if in_shell(position, center, outer_radius, inner_radius) {
            let color = if rng.gen::<bool>() { color_a } else { color_b };
            frame.set(index, color);
        }
    }
}
