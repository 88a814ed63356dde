//! The seam between the scheduler and an animation.

use crate::frame::Frame;
use crate::mesh::LightMesh;

/// A tick-driven animation over a light mesh.
///
/// The scheduler calls [`Effect::advance`] once per tick with the current
/// elapsed time in seconds. Effects compute everything from that absolute
/// time rather than from tick deltas, so a stalled tick source pauses the
/// animation without corrupting it and the visual speed is independent of
/// frame rate.
///
/// `advance` is the only suspension point: an effect does whatever rendering
/// the tick needs, stores its state in `self`, and returns. It never blocks
/// and never reads colors back out of the frame.
pub trait Effect {
    /// Render one tick at elapsed time `t` (seconds) into `frame`.
    fn advance(&mut self, t: f32, mesh: &LightMesh, frame: &mut Frame);
}
