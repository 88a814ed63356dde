//! # glimmer
//!
//! Procedural real-time color animations over fixed 3D meshes of addressable
//! lights (LED trees and similar installations).
//!
//! A [`LightMesh`] holds one normalized 3D position per light. An [`Effect`]
//! is a tick-driven animation: each tick it receives the absolute elapsed
//! time and paints light colors into a [`Frame`]. The [`Player`] loop paces
//! the ticks and ships finished frames to a [`FrameSink`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use glimmer::prelude::*;
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let mut rng = SmallRng::seed_from_u64(1);
//! let mesh = LightMesh::conical(500, &mut rng)?;
//! let effect = CollisionEffect::new(CollisionConfig::default(), 42)?;
//! let sink = TextSink::new(std::io::stdout().lock());
//!
//! Player::new(mesh, effect, sink).run()?;
//! ```
//!
//! ## Effects
//!
//! - [`CollisionEffect`] - two particles converge along the light strand,
//!   collide, and trigger an expanding spherical shock shell. A cyclic
//!   two-phase state machine.
//! - [`SweepEffect`] - a rotating plane splits the mesh into two color
//!   bands. Single phase, stateless per tick apart from its color pair.
//!
//! Effects own a seedable RNG, so identical seeds and tick times reproduce
//! identical frames.

pub mod clock;
pub mod collision;
pub mod color;
pub mod effect;
pub mod error;
pub mod frame;
pub mod mesh;
pub mod player;
pub mod shell;
pub mod sink;
pub mod sweep;
pub mod trail;

pub use clock::Clock;
pub use collision::{CollisionConfig, CollisionEffect, Phase};
pub use color::Color;
pub use effect::Effect;
pub use error::{ConfigError, MeshError};
pub use frame::Frame;
pub use glam::Vec3;
pub use mesh::LightMesh;
pub use player::Player;
pub use sink::{FrameSink, NullSink, TextSink};
pub use sweep::{SweepConfig, SweepEffect};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use glimmer::prelude::*;
/// ```
pub mod prelude {
    pub use crate::clock::Clock;
    pub use crate::collision::{CollisionConfig, CollisionEffect, Phase};
    pub use crate::color::Color;
    pub use crate::effect::Effect;
    pub use crate::error::{ConfigError, MeshError};
    pub use crate::frame::Frame;
    pub use crate::mesh::LightMesh;
    pub use crate::player::Player;
    pub use crate::sink::{FrameSink, NullSink, TextSink};
    pub use crate::sweep::{SweepConfig, SweepEffect};
    pub use crate::Vec3;
}
