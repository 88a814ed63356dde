//! The two-phase collision/explosion animation.
//!
//! Two particles travel toward each other along the light-index axis, meet
//! at a randomly chosen collision light, and set off a spherical shock shell
//! that expands through 3D space from that light's position. When the shell
//! has left the mesh, the whole cycle restarts with fresh colors and a fresh
//! collision point, forever.
//!
//! # Example
//!
//! ```ignore
//! use glimmer::prelude::*;
//!
//! let mesh = LightMesh::conical(500, &mut rng)?;
//! let mut effect = CollisionEffect::new(CollisionConfig::default(), 42)?;
//! let mut frame = Frame::new(mesh.len());
//!
//! // Driven by an external tick source:
//! frame.clear();
//! effect.advance(elapsed_seconds, &mesh, &mut frame);
//! ```

use crate::color::Color;
use crate::effect::Effect;
use crate::error::ConfigError;
use crate::frame::Frame;
use crate::mesh::LightMesh;
use crate::shell::draw_shell;
use crate::trail::draw_trail;
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Tuning constants for the collision animation.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionConfig {
    /// Particle travel speed, in lights per second.
    pub particle_speed: f32,
    /// Trail length behind each particle head, in index units.
    pub trail_length: u32,
    /// Shell growth speed, as a fraction of the mesh extent per second.
    pub explosion_speed: f32,
    /// Shell thickness, as a fraction of the outer radius, strictly in (0, 1).
    pub shell_thickness: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            particle_speed: 80.0,
            trail_length: 20,
            explosion_speed: 0.4,
            shell_thickness: 0.3,
        }
    }
}

impl CollisionConfig {
    /// Reject degenerate configurations before they reach the render path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_speed <= 0.0 {
            return Err(ConfigError::NonPositiveParticleSpeed(self.particle_speed));
        }
        if self.trail_length == 0 {
            return Err(ConfigError::ZeroTrailLength);
        }
        if self.explosion_speed <= 0.0 {
            return Err(ConfigError::NonPositiveExplosionSpeed(self.explosion_speed));
        }
        if self.shell_thickness <= 0.0 || self.shell_thickness >= 1.0 {
            return Err(ConfigError::ShellThicknessOutOfRange(self.shell_thickness));
        }
        Ok(())
    }
}

/// Which phase a collision cycle is in. Exposed for observation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Traveling,
    Exploding,
}

/// Phase-specific timing state. Times are absolute elapsed seconds.
#[derive(Debug, Clone)]
enum PhaseState {
    Traveling { end: f32 },
    Exploding { start: f32, end: f32, center: Vec3 },
}

/// One Traveling + Exploding cycle's worth of rolled parameters.
///
/// The collision index and both colors stay fixed for the whole cycle; only
/// a fresh cycle re-rolls them.
#[derive(Debug, Clone)]
struct Cycle {
    collision_index: usize,
    color_a: Color,
    color_b: Color,
    phase: PhaseState,
}

/// The collision/explosion state machine.
///
/// All randomness flows through an owned, seedable RNG, so two effects built
/// with the same seed and fed the same elapsed-time sequence produce
/// identical frames.
pub struct CollisionEffect {
    config: CollisionConfig,
    rng: SmallRng,
    cycle: Option<Cycle>,
}

impl CollisionEffect {
    /// Create the effect, failing fast on invalid configuration.
    pub fn new(config: CollisionConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: SmallRng::seed_from_u64(seed),
            cycle: None,
        })
    }

    /// Current phase, or `None` before the first tick.
    pub fn phase(&self) -> Option<Phase> {
        self.cycle.as_ref().map(|cycle| match cycle.phase {
            PhaseState::Traveling { .. } => Phase::Traveling,
            PhaseState::Exploding { .. } => Phase::Exploding,
        })
    }

    /// Roll a fresh cycle starting its Traveling phase at time `t`.
    fn roll_cycle(&mut self, t: f32, mesh: &LightMesh) -> Cycle {
        let count = mesh.len();
        let color_a = Color::random_hue(&mut self.rng);
        let color_b = Color::random_hue(&mut self.rng);

        // Inner half of the index range, so both particles get room to travel.
        let collision_index = self.rng.gen_range(0..=count / 2) + count / 4;

        // The farther particle sets the pace; it must arrive before the phase ends.
        let farthest = (count - collision_index).max(collision_index);
        let duration = farthest as f32 / self.config.particle_speed;

        log::debug!(
            "traveling: collision at light {} in {:.2}s",
            collision_index,
            duration
        );

        Cycle {
            collision_index,
            color_a,
            color_b,
            phase: PhaseState::Traveling { end: t + duration },
        }
    }

    /// Switch a cycle from Traveling to Exploding at time `t`.
    fn enter_explosion(&self, cycle: &mut Cycle, t: f32, mesh: &LightMesh) {
        let center = mesh.position(cycle.collision_index);
        // 1.1 extents of travel, so the shell fully clears the mesh before
        // the cycle restarts.
        let duration = 1.1 / self.config.explosion_speed;

        log::debug!(
            "exploding: shell from light {} for {:.2}s",
            cycle.collision_index,
            duration
        );

        cycle.phase = PhaseState::Exploding {
            start: t,
            end: t + duration,
            center,
        };
    }
}

impl Effect for CollisionEffect {
    fn advance(&mut self, t: f32, mesh: &LightMesh, frame: &mut Frame) {
        let mut cycle = match self.cycle.take() {
            Some(cycle) => cycle,
            None => self.roll_cycle(t, mesh),
        };

        if let PhaseState::Traveling { end } = cycle.phase {
            if t < end {
                let offset = (end - t) * self.config.particle_speed;
                let target = cycle.collision_index as f32;
                draw_trail(
                    frame,
                    mesh.len(),
                    target - offset,
                    self.config.trail_length,
                    cycle.color_a,
                );
                draw_trail(
                    frame,
                    mesh.len(),
                    target + offset,
                    self.config.trail_length,
                    cycle.color_b,
                );
                self.cycle = Some(cycle);
                return;
            }
            // The particles have met; the shell takes over within this same
            // tick, so no frame is dropped at the boundary.
            self.enter_explosion(&mut cycle, t, mesh);
        }

        if let PhaseState::Exploding { start, end, center } = cycle.phase {
            if t >= end {
                // Cycle complete. Re-roll now; the fresh Traveling phase
                // renders from the next tick on.
                self.cycle = Some(self.roll_cycle(t, mesh));
                return;
            }
            let outer_radius = (t - start) * self.config.explosion_speed;
            let inner_radius = (outer_radius * (1.0 - self.config.shell_thickness)).max(0.0);
            draw_shell(
                frame,
                mesh,
                center,
                outer_radius,
                inner_radius,
                cycle.color_a,
                cycle.color_b,
                &mut self.rng,
            );
        }

        self.cycle = Some(cycle);
    }
}
