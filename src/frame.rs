//! The per-tick writable color buffer.

use crate::color::Color;

/// One frame's worth of light colors.
///
/// Effects write into the frame with [`Frame::set`]; the last write for a
/// given index within a tick wins. The scheduler decides whether the buffer
/// is cleared between ticks or left to accumulate.
#[derive(Debug, Clone)]
pub struct Frame {
    colors: Vec<Color>,
}

impl Frame {
    /// A black frame with one slot per light.
    pub fn new(light_count: usize) -> Self {
        Self {
            colors: vec![Color::BLACK; light_count],
        }
    }

    /// Number of light slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Set the color of one light. Out-of-range indices are ignored.
    #[inline]
    pub fn set(&mut self, index: usize, color: Color) {
        if let Some(slot) = self.colors.get_mut(index) {
            *slot = color;
        }
    }

    /// Color currently stored for `index`, if in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Reset every light to black.
    pub fn clear(&mut self) {
        self.colors.fill(Color::BLACK);
    }

    /// All colors in index order.
    #[inline]
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }
}
