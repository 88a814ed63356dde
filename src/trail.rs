//! Particle trails along the light-index axis.
//!
//! A traveling particle has a fractional head position measured in light
//! indices. The lights around the head glow at full brightness; the lights
//! behind fade out linearly over the trail length.

use crate::color::Color;
use crate::frame::Frame;

/// Brightness coefficient for a light `distance` index units away from a
/// particle head.
///
/// Returns 1.0 inside the half-light plateau around the head (so fractional
/// head positions don't flicker between neighbors), then falls off linearly
/// to 0.0 at `distance == trail_length + 0.5`. Beyond that the result goes
/// negative; callers treat non-positive coefficients as "no contribution".
#[inline]
pub fn brightness(distance: f32, trail_length: f32) -> f32 {
    if distance < 0.5 {
        1.0
    } else {
        1.0 - (distance - 0.5) / trail_length
    }
}

/// Draw one particle trail into the frame.
///
/// Visits the contiguous index window the trail can reach, clamped to the
/// mesh, and writes the base color attenuated by [`brightness`]. Lights with
/// a non-positive coefficient are skipped rather than painted black, so two
/// overlapping trails don't erase each other; within the window the last
/// write wins.
pub fn draw_trail(
    frame: &mut Frame,
    light_count: usize,
    position: f32,
    trail_length: u32,
    color: Color,
) {
    let head = position.floor() as i64;
    let reach = trail_length as i64 + 1;
    let lo = (head - reach).max(0) as usize;
    let hi = ((head + reach).max(0) as usize).min(light_count);

    for index in lo..hi {
        let coefficient = brightness((index as f32 - position).abs(), trail_length as f32);
        if coefficient > 0.0 {
            frame.set(index, color.scaled(coefficient));
        }
    }
}
