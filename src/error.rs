//! Error types for glimmer.
//!
//! Degenerate configuration is rejected at construction rather than producing
//! silently malformed visuals at render time.

use std::fmt;

/// Errors raised when validating effect configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Particle speed must be positive (lights per second).
    NonPositiveParticleSpeed(f32),
    /// Trail length must be at least one light.
    ZeroTrailLength,
    /// Explosion speed must be positive (mesh-extent fraction per second).
    NonPositiveExplosionSpeed(f32),
    /// Shell thickness must lie strictly between 0 and 1.
    ShellThicknessOutOfRange(f32),
    /// The sweep plane must actually rotate.
    NonPositiveAngularSpeed(f32),
    /// The sweep color pair must be re-rolled on a positive period.
    NonPositiveRecolorPeriod(f32),
    /// The sweep band must have positive thickness.
    NonPositiveBandThickness(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveParticleSpeed(v) => {
                write!(f, "particle speed must be positive, got {}", v)
            }
            ConfigError::ZeroTrailLength => write!(f, "trail length must be at least 1"),
            ConfigError::NonPositiveExplosionSpeed(v) => {
                write!(f, "explosion speed must be positive, got {}", v)
            }
            ConfigError::ShellThicknessOutOfRange(v) => {
                write!(f, "shell thickness must be in (0, 1), got {}", v)
            }
            ConfigError::NonPositiveAngularSpeed(v) => {
                write!(f, "angular speed must be positive, got {}", v)
            }
            ConfigError::NonPositiveRecolorPeriod(v) => {
                write!(f, "recolor period must be positive, got {}", v)
            }
            ConfigError::NonPositiveBandThickness(v) => {
                write!(f, "band thickness must be positive, got {}", v)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors raised when constructing a light mesh.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshError {
    /// A mesh needs at least one light.
    Empty,
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::Empty => write!(f, "a light mesh needs at least one light"),
        }
    }
}

impl std::error::Error for MeshError {}
