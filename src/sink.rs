//! Output boundary: where finished frames leave the engine.

use crate::color::Color;
use std::io::{self, Write};

/// Consumer of finished frames.
///
/// The engine quantizes and hands off colors here; everything past this trait
/// (device protocols, recording, display) is outside the engine.
pub trait FrameSink {
    /// Called once before the first frame with the light count.
    fn begin(&mut self, light_count: usize) -> io::Result<()> {
        let _ = light_count;
        Ok(())
    }

    /// Write one frame of colors, in light-index order.
    fn write_frame(&mut self, colors: &[Color]) -> io::Result<()>;
}

/// Serializes frames as text: a preamble line with the light count, then one
/// line per frame of concatenated `RRGGBB` hex triplets.
///
/// # Example
///
/// ```ignore
/// let sink = TextSink::new(std::io::stdout().lock());
/// ```
pub struct TextSink<W: Write> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FrameSink for TextSink<W> {
    fn begin(&mut self, light_count: usize) -> io::Result<()> {
        writeln!(self.writer, "{}", light_count)
    }

    fn write_frame(&mut self, colors: &[Color]) -> io::Result<()> {
        let mut line = String::with_capacity(colors.len() * 6 + 1);
        for color in colors {
            let [r, g, b] = color.to_rgb8();
            line.push_str(&format!("{:02x}{:02x}{:02x}", r, g, b));
        }
        writeln!(self.writer, "{}", line)
    }
}

/// Discards every frame. Useful for benches and tests that only care about
/// the engine side.
#[derive(Debug, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn write_frame(&mut self, _colors: &[Color]) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_sink_format() {
        let mut sink = TextSink::new(Vec::new());
        sink.begin(2).unwrap();
        sink.write_frame(&[Color::new(1.0, 0.0, 0.0), Color::new(0.0, 0.0, 0.5)])
            .unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(written, "2\nff0000000080\n");
    }

    #[test]
    fn test_null_sink_accepts_frames() {
        let mut sink = NullSink;
        assert!(sink.write_frame(&[Color::BLACK; 8]).is_ok());
    }
}
