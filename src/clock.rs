//! Tick pacing and elapsed-time tracking.
//!
//! Effects consume absolute elapsed seconds, never tick deltas, so the clock
//! is the single source of truth for time. A paced clock sleeps to hold a
//! target frame rate; a fixed-step clock synthesizes time for deterministic
//! headless runs (tests, benches, offline rendering).

use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug)]
enum Mode {
    /// Real time, sleeping toward a fixed frame interval.
    Paced { start: Instant, next_tick: Instant, interval: Duration },
    /// Synthetic time advancing by a fixed step per tick, no sleeping.
    FixedStep { step: f32 },
}

/// The tick source driving a [`Player`](crate::player::Player).
#[derive(Debug)]
pub struct Clock {
    mode: Mode,
    elapsed_secs: f32,
    frame_count: u64,
}

impl Clock {
    /// A real-time clock paced to `target_fps` ticks per second.
    pub fn new(target_fps: u32) -> Self {
        let now = Instant::now();
        let interval = Duration::from_secs_f64(1.0 / target_fps.max(1) as f64);
        Self {
            mode: Mode::Paced {
                start: now,
                next_tick: now + interval,
                interval,
            },
            elapsed_secs: 0.0,
            frame_count: 0,
        }
    }

    /// A deterministic clock where every tick advances time by `step` seconds.
    pub fn fixed_step(step: f32) -> Self {
        Self {
            mode: Mode::FixedStep { step },
            elapsed_secs: 0.0,
            frame_count: 0,
        }
    }

    /// Block until the next tick is due and return the new elapsed time.
    ///
    /// The first tick returns immediately at (or near) zero elapsed time. A
    /// fixed-step clock never blocks.
    pub fn tick(&mut self) -> f32 {
        match &mut self.mode {
            Mode::Paced {
                start,
                next_tick,
                interval,
            } => {
                if self.frame_count > 0 {
                    let now = Instant::now();
                    if *next_tick > now {
                        thread::sleep(*next_tick - now);
                    }
                    // Schedule from the intended instant, not from wake-up,
                    // so a late tick doesn't shift the whole cadence.
                    *next_tick = (*next_tick + *interval).max(Instant::now());
                }
                self.elapsed_secs = start.elapsed().as_secs_f32();
            }
            Mode::FixedStep { step } => {
                self.elapsed_secs = self.frame_count as f32 * *step;
            }
        }
        self.frame_count += 1;
        self.elapsed_secs
    }

    /// Elapsed seconds as of the last tick.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Ticks taken so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Average ticks per second over the whole run.
    pub fn measured_fps(&self) -> f32 {
        if self.elapsed_secs > 0.0 {
            self.frame_count as f32 / self.elapsed_secs
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_step_is_exact() {
        let mut clock = Clock::fixed_step(0.25);
        assert_eq!(clock.tick(), 0.0);
        assert_eq!(clock.tick(), 0.25);
        assert_eq!(clock.tick(), 0.5);
        assert_eq!(clock.frame(), 3);
    }

    #[test]
    fn test_paced_clock_advances() {
        let mut clock = Clock::new(1000);
        let first = clock.tick();
        let second = clock.tick();
        assert!(second >= first);
        assert_eq!(clock.frame(), 2);
    }

    #[test]
    fn test_measured_fps_fixed_step() {
        let mut clock = Clock::fixed_step(0.1);
        for _ in 0..11 {
            clock.tick();
        }
        // 11 frames over 1.0s of synthetic time.
        assert!((clock.measured_fps() - 11.0).abs() < 0.001);
    }
}
