//! Color values and HSV helpers.
//!
//! Colors stay in floating point through the whole pipeline; quantization to
//! 8-bit happens only at the output boundary ([`Color::to_rgb8`]).

use rand::Rng;

/// An RGB color with `f32` channels in the 0.0–1.0 range.
///
/// Supports uniform scalar attenuation, which is how trail falloff dims a
/// particle's base color without changing its hue.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Create a color from raw channel values.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Uniformly attenuate all channels by `k`.
    ///
    /// `k` is expected in 0.0–1.0; values outside that range brighten or
    /// invert and are the caller's responsibility.
    #[inline]
    pub fn scaled(self, k: f32) -> Color {
        Color::new(self.r * k, self.g * k, self.b * k)
    }

    /// Quantize to 8-bit channels, clamping each to the valid range.
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// Color from HSV components.
    ///
    /// * `hue` - 0.0 to 1.0 (wraps: red → yellow → green → cyan → blue → magenta → red)
    /// * `saturation` - 0.0 (gray) to 1.0 (vivid)
    /// * `value` - 0.0 (black) to 1.0 (bright)
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Color {
        let h = hue.rem_euclid(1.0);
        let c = value * saturation;
        let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
        let m = value - c;

        let (r, g, b) = match (h * 6.0) as u32 % 6 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Color::new(r + m, g + m, b + m)
    }

    /// HSV components of this color, each in 0.0–1.0.
    pub fn to_hsv(self) -> (f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        let hue = if delta <= f32::EPSILON {
            0.0
        } else if max == self.r {
            (((self.g - self.b) / delta).rem_euclid(6.0)) / 6.0
        } else if max == self.g {
            ((self.b - self.r) / delta + 2.0) / 6.0
        } else {
            ((self.r - self.g) / delta + 4.0) / 6.0
        };

        let saturation = if max <= f32::EPSILON { 0.0 } else { delta / max };

        (hue, saturation, max)
    }

    /// Rotate this color's hue by `offset` (in turns), keeping saturation and value.
    pub fn shift_hue(self, offset: f32) -> Color {
        let (h, s, v) = self.to_hsv();
        Color::from_hsv(h + offset, s, v)
    }

    /// A random fully saturated, fully bright color.
    pub fn random_hue<R: Rng>(rng: &mut R) -> Color {
        Color::from_hsv(rng.gen::<f32>(), 1.0, 1.0)
    }
}
