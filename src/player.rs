//! The scheduler that drives an effect against a mesh.
//!
//! Owns the frame buffer, the clock and the output sink, and runs the
//! single-threaded tick loop: advance the clock, optionally clear the frame,
//! let the effect render, hand the frame to the sink. Stopping is just
//! ceasing to tick; effects hold no external resources.

use crate::clock::Clock;
use crate::effect::Effect;
use crate::frame::Frame;
use crate::mesh::LightMesh;
use crate::sink::FrameSink;
use std::io;

/// Tick loop driver for one effect over one mesh.
pub struct Player<E: Effect, S: FrameSink> {
    mesh: LightMesh,
    effect: E,
    sink: S,
    frame: Frame,
    clock: Clock,
    clear_between_ticks: bool,
}

impl<E: Effect, S: FrameSink> Player<E, S> {
    /// Create a player ticking at 60 fps with frame clearing on.
    ///
    /// Clearing matches effects that repaint only the lights they touch;
    /// effects that paint the whole mesh every tick work either way.
    pub fn new(mesh: LightMesh, effect: E, sink: S) -> Self {
        let frame = Frame::new(mesh.len());
        Self {
            mesh,
            effect,
            sink,
            frame,
            clock: Clock::new(60),
            clear_between_ticks: true,
        }
    }

    /// Replace the default clock.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Control whether the frame is cleared to black before each tick.
    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear_between_ticks = clear;
        self
    }

    /// Run a bounded number of ticks, then return.
    pub fn run_frames(&mut self, frames: u64) -> io::Result<()> {
        log::info!(
            "playing {} frames over {} lights",
            frames,
            self.mesh.len()
        );
        self.sink.begin(self.mesh.len())?;
        for _ in 0..frames {
            self.step()?;
        }
        Ok(())
    }

    /// Run until the sink fails (e.g. a closed pipe).
    pub fn run(&mut self) -> io::Result<()> {
        log::info!("playing over {} lights", self.mesh.len());
        self.sink.begin(self.mesh.len())?;
        loop {
            self.step()?;
        }
    }

    fn step(&mut self) -> io::Result<()> {
        let t = self.clock.tick();
        if self.clear_between_ticks {
            self.frame.clear();
        }
        self.effect.advance(t, &self.mesh, &mut self.frame);
        self.sink.write_frame(self.frame.as_slice())
    }

    /// The effect, for inspection between bounded runs.
    pub fn effect(&self) -> &E {
        &self.effect
    }

    /// The sink, for recovering buffered output after a bounded run.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
