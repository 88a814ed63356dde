//! Rotating half-plane bicolor sweep.
//!
//! The simpler sibling of the collision animation: a plane through the mesh
//! centroid rotates about the vertical axis, and every tick each light is
//! painted one of two colors depending on which side of a signed-distance
//! band it falls in. There is no internal phase machine; each tick is a pure
//! function of elapsed time plus the currently held color pair.

use crate::color::Color;
use crate::effect::Effect;
use crate::error::ConfigError;
use crate::frame::Frame;
use crate::mesh::LightMesh;
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Tuning constants for the sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// Plane rotation speed, in radians per second.
    pub angular_speed: f32,
    /// Width of the band painted in the primary color, in mesh units of
    /// signed distance below the centroid plane.
    pub band_thickness: f32,
    /// How often the color pair is re-rolled, in seconds.
    pub recolor_period: f32,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            angular_speed: 1.5,
            band_thickness: 0.5,
            recolor_period: 2.5,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.angular_speed <= 0.0 {
            return Err(ConfigError::NonPositiveAngularSpeed(self.angular_speed));
        }
        if self.band_thickness <= 0.0 {
            return Err(ConfigError::NonPositiveBandThickness(self.band_thickness));
        }
        if self.recolor_period <= 0.0 {
            return Err(ConfigError::NonPositiveRecolorPeriod(self.recolor_period));
        }
        Ok(())
    }
}

/// The rotating-plane sweep effect.
///
/// The color pair lives in the effect value, not in any ambient state, and
/// re-rolls on a fixed period: a random vivid primary, and a secondary with
/// the same saturation and value but the hue pushed 100–200 degrees away.
pub struct SweepEffect {
    config: SweepConfig,
    rng: SmallRng,
    colors: Option<(Color, Color)>,
    last_roll: f32,
}

impl SweepEffect {
    /// Create the effect, failing fast on invalid configuration.
    pub fn new(config: SweepConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: SmallRng::seed_from_u64(seed),
            colors: None,
            last_roll: 0.0,
        })
    }

    fn roll_colors(&mut self) -> (Color, Color) {
        let primary = Color::random_hue(&mut self.rng);
        let offset = self.rng.gen_range(100.0..=200.0) / 360.0;
        (primary, primary.shift_hue(offset))
    }
}

impl Effect for SweepEffect {
    fn advance(&mut self, t: f32, mesh: &LightMesh, frame: &mut Frame) {
        let due = match self.colors {
            None => true,
            Some(_) => t - self.last_roll >= self.config.recolor_period,
        };
        if due {
            let pair = self.roll_colors();
            self.colors = Some(pair);
            self.last_roll = t;
            log::debug!("sweep recolor at t={:.2}", t);
        }
        let (primary, secondary) = self.colors.expect("colors rolled above");

        let angle = t * self.config.angular_speed;
        let normal = Vec3::new(angle.sin(), 0.0, angle.cos());
        let plane_d = mesh.centroid().dot(normal);

        for (index, position) in mesh.positions().enumerate() {
            let d = position.dot(normal);
            let color = if plane_d - self.config.band_thickness <= d && d <= plane_d {
                primary
            } else {
                secondary
            };
            frame.set(index, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_mesh(count: usize) -> LightMesh {
        let step = 1.0 / count as f32;
        LightMesh::new(
            (0..count)
                .map(|i| Vec3::new(i as f32 * step, 0.0, 0.0))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_config_validation() {
        assert!(SweepConfig::default().validate().is_ok());
        let bad = SweepConfig {
            recolor_period: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(ConfigError::NonPositiveRecolorPeriod(_))
        ));
    }

    #[test]
    fn test_every_light_gets_one_of_two_colors() {
        let mesh = line_mesh(60);
        let mut effect = SweepEffect::new(SweepConfig::default(), 21).unwrap();
        let mut frame = Frame::new(mesh.len());

        effect.advance(0.3, &mesh, &mut frame);
        let (primary, secondary) = effect.colors.unwrap();

        for index in 0..mesh.len() {
            let c = frame.get(index).unwrap();
            assert!(c == primary || c == secondary);
        }
    }

    #[test]
    fn test_colors_persist_until_period_elapses() {
        let mesh = line_mesh(10);
        let mut effect = SweepEffect::new(SweepConfig::default(), 21).unwrap();
        let mut frame = Frame::new(mesh.len());

        effect.advance(0.0, &mesh, &mut frame);
        let first = effect.colors.unwrap();

        effect.advance(1.0, &mesh, &mut frame);
        assert_eq!(effect.colors.unwrap(), first);

        effect.advance(2.5, &mesh, &mut frame);
        assert_ne!(effect.colors.unwrap(), first);
    }

    #[test]
    fn test_secondary_hue_is_pushed_away() {
        let mut effect = SweepEffect::new(SweepConfig::default(), 4).unwrap();
        for _ in 0..10 {
            let (primary, secondary) = effect.roll_colors();
            let (hp, ..) = primary.to_hsv();
            let (hs, ..) = secondary.to_hsv();
            let gap = (hs - hp).rem_euclid(1.0);
            assert!(
                (100.0 / 360.0 - 0.01..=200.0 / 360.0 + 0.01).contains(&gap),
                "hue gap {} out of range",
                gap
            );
        }
    }
}
